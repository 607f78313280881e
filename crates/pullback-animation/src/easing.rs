//! Easing curves used by settle animations.

/// Easing functions mapping a linear fraction in [0, 1] to an eased fraction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// No easing.
    Linear,
    /// `1 + (t - 1)^5`. Starts fast and decelerates hard near the end; this is
    /// the curve Android's drag helper uses when settling a captured view.
    #[default]
    QuinticOut,
}

impl Easing {
    /// Apply the easing function to a linear fraction. Inputs outside [0, 1]
    /// are clamped.
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => fraction,
            Easing::QuinticOut => {
                let t = fraction - 1.0;
                t * t * t * t * t + 1.0
            }
        }
    }
}
