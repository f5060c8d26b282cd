#![cfg(feature = "serde")]

use bot_core::Vec2;
use bot_nav::{GoalSet, NavEvent, RunState};

#[test]
fn goal_set_roundtrips_via_serde() {
    let goals = GoalSet::Path {
        points: vec![Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)],
        dot_budget: 7,
    };

    let json = serde_json::to_string(&goals).expect("serialize goal set");
    let back: GoalSet = serde_json::from_str(&json).expect("deserialize goal set");
    assert_eq!(goals, back);

    let goals = GoalSet::Targets(vec![Vec2::new(9.0, 9.0)]);
    let json = serde_json::to_string(&goals).expect("serialize goal set");
    let back: GoalSet = serde_json::from_str(&json).expect("deserialize goal set");
    assert_eq!(goals, back);
}

#[test]
fn run_state_and_events_roundtrip_via_serde() {
    for state in [
        RunState::Idle,
        RunState::Running,
        RunState::Paused,
        RunState::Finished,
    ] {
        let json = serde_json::to_string(&state).expect("serialize run state");
        let back: RunState = serde_json::from_str(&json).expect("deserialize run state");
        assert_eq!(state, back);
    }

    let event = NavEvent::WaypointVisited(Vec2::new(5.0, 6.0));
    let json = serde_json::to_string(&event).expect("serialize event");
    let back: NavEvent = serde_json::from_str(&json).expect("deserialize event");
    assert_eq!(event, back);
}
