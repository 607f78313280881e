mod script;

use std::cell::Cell;
use std::error::Error;
use std::rc::Rc;
use std::thread;

use pullback_foundation::prelude::*;
use pullback_foundation::{PointerEventKind, PointerId};
use web_time::{Duration, Instant};

use crate::script::{Gesture, Step};

const DEFAULT_VIEW_HEIGHT: i32 = 960;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const MOVE_INTERVAL_MS: u64 = 8;

/// In-memory stand-in for the dragged view.
struct DemoHost {
    height: i32,
    frame_requested: Cell<bool>,
}

impl DemoHost {
    fn new(height: i32) -> Self {
        Self {
            height,
            frame_requested: Cell::new(false),
        }
    }

    fn take_frame_request(&self) -> bool {
        self.frame_requested.replace(false)
    }
}

impl HostView for DemoHost {
    fn height(&self) -> i32 {
        self.height
    }

    fn request_frame(&self) {
        self.frame_requested.set(true);
    }
}

struct LoggingCallback;

impl PullCallback for LoggingCallback {
    fn on_pull_start(&self) {
        log::info!("pull started");
    }

    fn on_pull(&self, direction: PullDirection, progress: f32) {
        log::info!("pull {direction} {:.0}%", progress * 100.0);
    }

    fn on_pull_cancel(&self, direction: PullDirection) {
        log::info!("pull {direction} cancelled, settling back");
    }

    fn on_pull_complete(&self, direction: PullDirection) {
        log::info!("pull {direction} completed, view dismissed");
    }
}

/// Replays scripted gestures in real time.
struct Player {
    controller: GestureController,
    host: Rc<DemoHost>,
    clock: Instant,
    pointer: PointerId,
    y: f32,
}

impl Player {
    fn uptime_ms(&self) -> i64 {
        self.clock.elapsed().as_millis() as i64
    }

    fn event(&self, kind: PointerEventKind) -> PointerEvent {
        PointerEvent::new(self.pointer, kind, Point::new(0.0, self.y), self.uptime_ms())
    }

    fn play(&mut self, gesture: &Gesture) {
        log::info!("--- {} (axis {:?}) ---", gesture.name, gesture.axis);
        // Frames were pumped to completion after the previous gesture.
        debug_assert_eq!(self.controller.state(), GestureState::Idle);
        self.controller.set_axis(gesture.axis);
        // A dismissed view comes back for the next run.
        self.controller.helper_mut().snap_to(0);

        for step in &gesture.steps {
            match *step {
                Step::Press { y } => {
                    self.pointer += 1;
                    self.y = y;
                    let event = self.event(PointerEventKind::Down);
                    self.controller.on_pointer_event(&event);
                }
                Step::Drag { dy, duration_ms } => {
                    let steps = (duration_ms / MOVE_INTERVAL_MS).max(1);
                    let from = self.y;
                    for step in 1..=steps {
                        thread::sleep(Duration::from_millis(duration_ms / steps));
                        self.y = from + dy * step as f32 / steps as f32;
                        let event = self.event(PointerEventKind::Move);
                        self.controller.on_pointer_event(&event);
                    }
                }
                Step::Hold { duration_ms } => thread::sleep(Duration::from_millis(duration_ms)),
                Step::Release => {
                    let event = self.event(PointerEventKind::Up);
                    self.controller.on_pointer_event(&event);
                }
            }
        }

        let frames = self.run_frames();
        log::info!(
            "resting at top {} after {} frame(s)",
            self.controller.helper().current_top(),
            frames
        );
    }

    fn run_frames(&mut self) -> usize {
        let mut frames = 0;
        while self.host.take_frame_request() {
            thread::sleep(FRAME_INTERVAL);
            let frame_time_nanos = self.clock.elapsed().as_nanos() as u64;
            self.controller.on_animation_frame(frame_time_nanos);
            frames += 1;
        }
        frames
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let height = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<i32>()?,
        None => DEFAULT_VIEW_HEIGHT,
    };
    if height <= 0 {
        return Err(format!("view height must be positive, got {height}").into());
    }

    println!("=== Pullback Demo ===");
    println!("View height {height}px; run with RUST_LOG=debug for controller detail.");
    println!();

    let host = Rc::new(DemoHost::new(height));
    let mut controller = GestureController::with_config(
        PullBackConfig::default(),
        ViewDragTracker::new(),
        host.clone(),
    )?;
    controller.set_callback(Some(Rc::new(LoggingCallback)));

    let mut player = Player {
        controller,
        host,
        clock: Instant::now(),
        pointer: 0,
        y: 0.0,
    };
    for gesture in script::gestures() {
        player.play(&gesture);
    }
    Ok(())
}
