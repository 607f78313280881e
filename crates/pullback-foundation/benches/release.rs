use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pullback_foundation::{resolve, DragAxis, VelocityTracker1D};
use pullback_testing::GestureRobot;

const EXTENT: i32 = 1920;
const MIN_FLING_VELOCITY: f32 = 50.0;
const GESTURE_DURATION_SAMPLES: &[i64] = &[80, 400, 1_600];

fn bench_resolve(c: &mut Criterion) {
    let offsets: Vec<i32> = (-EXTENT..=EXTENT).step_by(37).collect();
    let velocities = [0.0f32, 49.0, 51.0, -2_400.0, 8_000.0];

    c.bench_function("resolve_release_grid", |b| {
        b.iter(|| {
            let mut completed = 0usize;
            for &offset in &offsets {
                for &velocity in &velocities {
                    let decision = resolve(
                        black_box(offset),
                        EXTENT,
                        black_box(velocity),
                        MIN_FLING_VELOCITY,
                        DragAxis::Both,
                    );
                    if decision.is_some_and(|d| d.is_complete()) {
                        completed += 1;
                    }
                }
            }
            black_box(completed)
        });
    });
}

fn bench_velocity(c: &mut Criterion) {
    c.bench_function("velocity_tracker_flick", |b| {
        let mut tracker = VelocityTracker1D::new();
        b.iter(|| {
            tracker.clear();
            for step in 0..20i64 {
                tracker.add_sample(step * 8, step as f32 * 30.0);
            }
            black_box(tracker.velocity())
        });
    });
}

fn bench_drag_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("drag_cycle");
    for &duration_ms in GESTURE_DURATION_SAMPLES {
        group.bench_with_input(
            BenchmarkId::new("duration_ms", duration_ms),
            &duration_ms,
            |b, &duration_ms| {
                let mut robot = GestureRobot::new(EXTENT);
                b.iter(|| {
                    // Below the slop, so every run cancels and settles home.
                    robot.pull(black_box(300.0), duration_ms);
                    black_box(robot.settle())
                });
            },
        );
    }
    group.finish();
}

criterion_group!(release, bench_resolve, bench_velocity, bench_drag_cycle);
criterion_main!(release);
