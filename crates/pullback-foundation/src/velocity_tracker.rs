//! Release velocity estimation.
//!
//! Impulse-strategy velocity tracker in the style of Jetpack Compose's
//! `VelocityTracker1D`: velocity is derived from the kinetic energy the
//! pointer imparted over its most recent samples rather than from a straight
//! line fit, which keeps a late flick from being averaged away.

/// Ring buffer capacity.
const HISTORY_SIZE: usize = 20;

/// Samples older than this (relative to the newest) are ignored.
const HORIZON_MS: i64 = 100;

/// A gap longer than this between a sample and the newest one means the
/// pointer stopped before release.
pub const ASSUME_STOPPED_MS: i64 = 40;

#[derive(Clone, Copy, Debug)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// Tracks absolute positions along one axis and estimates their velocity.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    /// Slot holding the newest sample.
    newest: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            newest: 0,
        }
    }

    /// Records `position` observed at `time_ms`.
    pub fn add_sample(&mut self, time_ms: i64, position: f32) {
        self.newest = (self.newest + 1) % HISTORY_SIZE;
        self.samples[self.newest] = Some(Sample { time_ms, position });
    }

    /// Velocity in units per second, or 0.0 with fewer than two usable samples.
    pub fn velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.newest] else {
            return 0.0;
        };

        // Newest first. `times` holds the (non-positive) age of each sample.
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;

        for step in 0..HISTORY_SIZE {
            let slot = (self.newest + HISTORY_SIZE - step) % HISTORY_SIZE;
            let Some(sample) = self.samples[slot] else {
                break;
            };
            let age = newest.time_ms - sample.time_ms;
            if age > HORIZON_MS || age > ASSUME_STOPPED_MS {
                break;
            }
            positions[count] = sample.position;
            times[count] = -(age as f32);
            count += 1;
        }

        if count < 2 {
            return 0.0;
        }

        impulse_velocity(&positions[..count], &times[..count]) * 1000.0
    }

    /// Velocity in units per second, clamped to `±max_velocity`.
    ///
    /// Returns 0.0 for a non-positive or non-finite cap.
    pub fn velocity_capped(&self, max_velocity: f32) -> f32 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.velocity();
        if velocity == 0.0 || velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    pub fn clear(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.newest = 0;
    }
}

/// Impulse velocity in units per millisecond.
///
/// `positions` and `times` are ordered newest first.
fn impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    let oldest = positions.len() - 1;
    let mut work = 0.0f32;

    for i in (1..=oldest).rev() {
        let older_time = times[i];
        let newer_time = times[i - 1];
        if older_time == newer_time {
            continue;
        }
        let segment_velocity = (positions[i - 1] - positions[i]) / (newer_time - older_time);
        let previous_velocity = kinetic_energy_to_velocity(work);
        work += (segment_velocity - previous_velocity) * segment_velocity.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = ½·m·v² with m = 1, sign preserved.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}
