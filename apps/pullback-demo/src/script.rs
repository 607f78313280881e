//! Scripted gestures replayed by the demo.

use pullback_foundation::DragAxis;

#[derive(Debug, Clone, Copy)]
pub enum Step {
    Press { y: f32 },
    /// Move by `dy` over `duration_ms`.
    Drag { dy: f32, duration_ms: u64 },
    Hold { duration_ms: u64 },
    Release,
}

#[derive(Debug, Clone)]
pub struct Gesture {
    pub name: &'static str,
    pub axis: DragAxis,
    pub steps: Vec<Step>,
}

impl Gesture {
    fn new(name: &'static str, axis: DragAxis, steps: Vec<Step>) -> Self {
        Self { name, axis, steps }
    }
}

/// The gestures the demo replays, in order.
pub fn gestures() -> Vec<Gesture> {
    vec![
        Gesture::new(
            "slow drag that falls short",
            DragAxis::Both,
            vec![
                Step::Press { y: 0.0 },
                Step::Drag {
                    dy: 180.0,
                    duration_ms: 400,
                },
                Step::Hold { duration_ms: 120 },
                Step::Release,
            ],
        ),
        Gesture::new(
            "slow drag past a third",
            DragAxis::Both,
            vec![
                Step::Press { y: 0.0 },
                Step::Drag {
                    dy: 320.0,
                    duration_ms: 500,
                },
                Step::Hold { duration_ms: 120 },
                Step::Release,
            ],
        ),
        Gesture::new(
            "quick upward fling",
            DragAxis::Both,
            vec![
                Step::Press { y: 0.0 },
                Step::Drag {
                    dy: -140.0,
                    duration_ms: 60,
                },
                Step::Release,
            ],
        ),
        Gesture::new(
            "upward pull on a down-only view",
            DragAxis::Down,
            vec![
                Step::Press { y: 0.0 },
                Step::Drag {
                    dy: -400.0,
                    duration_ms: 300,
                },
                Step::Release,
            ],
        ),
    ]
}
