use super::*;
use crate::recording::{check_gesture_order, PullEvent};
use crate::scripted::{HelperCall, ScriptedDragHelper};
use pullback_foundation::{DragAxis, GestureState, PullDirection};

#[test]
fn press_and_release_in_place_only_starts() {
    let mut robot = GestureRobot::new(600);

    assert!(robot.press(100.0));
    assert!(robot.release());

    assert_eq!(robot.recorder().events(), vec![PullEvent::Start]);
    assert_eq!(robot.controller().state(), GestureState::Idle);
}

#[test]
fn drag_by_spaces_moves_evenly() {
    let mut robot = GestureRobot::new(600);
    robot.press(0.0);
    robot.drag_by(80.0, 40);

    assert_eq!(robot.uptime_ms(), 40);
    assert_eq!(robot.pointer_y(), 80.0);
    assert_eq!(
        robot.recorder().progress_values().len(),
        5,
        "one progress report per move"
    );
}

#[test]
fn settle_pumps_only_requested_frames() {
    let mut robot =
        GestureRobot::with_helper(600, PullBackConfig::default(), ScriptedDragHelper::new(4))
            .expect("valid config");

    assert!(!robot.advance_frame(), "no frame before any request");

    robot.pull(120.0, 100);
    assert_eq!(
        robot.recorder().last(),
        Some(PullEvent::Cancel(PullDirection::Down))
    );
    assert!(robot.host().has_pending_frame());

    assert_eq!(robot.settle(), 4);
    assert_eq!(robot.controller().state(), GestureState::Idle);
    assert_eq!(robot.controller().helper().current_top(), 0);
    assert!(!robot.host().has_pending_frame());
}

#[test]
fn scripted_helper_records_its_calls() {
    let mut robot = GestureRobot::with_helper(
        400,
        PullBackConfig::default().with_axis(DragAxis::Down),
        ScriptedDragHelper::new(2),
    )
    .expect("valid config");

    robot.pull(50.0, 50);
    robot.settle();

    assert_eq!(
        robot.controller().helper().calls(),
        &[
            HelperCall::BeginTrack {
                pointer: 1,
                drag_range: 400
            },
            HelperCall::RequestSettle { target: 0 },
        ]
    );
}

#[test]
fn pointers_get_fresh_ids() {
    let mut robot =
        GestureRobot::with_helper(600, PullBackConfig::default(), ScriptedDragHelper::new(1))
            .expect("valid config");

    robot.pull(10.0, 16);
    robot.settle();
    robot.pull(10.0, 16);

    let begins: Vec<_> = robot
        .controller()
        .helper()
        .calls()
        .iter()
        .filter_map(|call| match call {
            HelperCall::BeginTrack { pointer, .. } => Some(*pointer),
            _ => None,
        })
        .collect();
    assert_eq!(begins, vec![1, 2]);
}

#[test]
fn order_checker_flags_malformed_sequences() {
    use PullDirection::Down;

    assert!(check_gesture_order(&[
        PullEvent::Start,
        PullEvent::Pull {
            direction: Down,
            progress: 0.5
        },
        PullEvent::Complete(Down),
        PullEvent::Start,
        PullEvent::Cancel(Down),
    ])
    .is_ok());

    assert!(check_gesture_order(&[PullEvent::Cancel(Down)]).is_err());
    assert!(check_gesture_order(&[
        PullEvent::Start,
        PullEvent::Complete(Down),
        PullEvent::Pull {
            direction: Down,
            progress: 0.1
        },
    ])
    .is_err());
    assert!(check_gesture_order(&[
        PullEvent::Start,
        PullEvent::Cancel(Down),
        PullEvent::Complete(Down),
    ])
    .is_err());
    assert!(check_gesture_order(&[
        PullEvent::Start,
        PullEvent::Pull {
            direction: Down,
            progress: 1.5
        },
    ])
    .is_err());
}

#[test]
fn fake_host_tracks_frame_requests() {
    let host = FakeHost::new(300);
    assert_eq!(pullback_foundation::HostView::height(&host), 300);

    pullback_foundation::HostView::request_frame(&host);
    pullback_foundation::HostView::request_frame(&host);

    assert_eq!(host.frame_requests(), 2);
    assert!(host.take_frame_request());
    assert!(!host.take_frame_request());

    host.set_height(450);
    assert_eq!(pullback_foundation::HostView::height(&host), 450);
}
