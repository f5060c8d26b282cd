use bot_core::{Speed, Vec2};
use bot_nav::{NavMode, NavigationState, RunState};

fn target_state() -> NavigationState {
    let mut nav = NavigationState::new(Vec2::new(50.0, 650.0), NavMode::Target, Vec::new());
    nav.append_target(Vec2::new(200.0, 200.0));
    nav
}

#[test]
fn start_with_empty_goal_set_is_a_noop() {
    let mut nav = NavigationState::new(Vec2::ZERO, NavMode::Target, Vec::new());
    nav.start();
    assert_eq!(nav.run_state(), RunState::Idle);

    let mut nav = NavigationState::new(Vec2::ZERO, NavMode::Path, Vec::new());
    nav.start();
    assert_eq!(nav.run_state(), RunState::Idle);
}

#[test]
fn start_requires_idle_or_finished() {
    let mut nav = target_state();
    nav.start();
    assert_eq!(nav.run_state(), RunState::Running);

    let speed = Speed::default();
    for _ in 0..10 {
        nav.advance(speed);
    }
    let progress_mid_run = nav.progress();
    let pose_mid_run = nav.pose();

    // Start mid-run changes nothing.
    nav.start();
    assert_eq!(nav.run_state(), RunState::Running);
    assert_eq!(nav.progress(), progress_mid_run);
    assert_eq!(nav.pose(), pose_mid_run);

    // Start while paused changes nothing either.
    nav.toggle_pause();
    nav.start();
    assert_eq!(nav.run_state(), RunState::Paused);
}

#[test]
fn toggle_pause_is_a_noop_outside_running_and_paused() {
    let mut nav = target_state();
    nav.toggle_pause();
    assert_eq!(nav.run_state(), RunState::Idle);

    nav.start();
    nav.toggle_pause();
    assert_eq!(nav.run_state(), RunState::Paused);
    nav.toggle_pause();
    assert_eq!(nav.run_state(), RunState::Running);
}

#[test]
fn double_toggle_pause_leaves_pose_and_progress_identical() {
    let mut nav = target_state();
    nav.start();
    let speed = Speed::clamped(3);
    for _ in 0..5 {
        nav.advance(speed);
    }

    let pose = nav.pose();
    let progress = nav.progress();

    nav.toggle_pause();
    // No movement while paused.
    for _ in 0..20 {
        assert_eq!(nav.advance(speed), None);
    }
    nav.toggle_pause();

    assert_eq!(nav.run_state(), RunState::Running);
    assert_eq!(nav.pose(), pose);
    assert_eq!(nav.progress(), progress);
}

#[test]
fn reset_restores_origin_and_keeps_goals() {
    let origin = Vec2::new(50.0, 650.0);
    let mut nav = target_state();
    nav.start();
    let speed = Speed::default();
    for _ in 0..25 {
        nav.advance(speed);
    }
    assert_ne!(nav.pose().position, origin);

    nav.reset();
    assert_eq!(nav.run_state(), RunState::Idle);
    assert_eq!(nav.pose().position, origin);
    assert_eq!(nav.pose().heading, 0.0);
    assert_eq!(nav.progress(), 0);
    assert_eq!(nav.goals().len(), 1);
}

#[test]
fn clear_empties_goals_and_idles() {
    let mut nav = target_state();
    nav.append_target(Vec2::new(400.0, 100.0));
    nav.start();
    nav.clear();

    assert_eq!(nav.run_state(), RunState::Idle);
    assert!(nav.goals().is_empty());
    assert_eq!(nav.progress(), 0);

    // A cleared state cannot start.
    nav.start();
    assert_eq!(nav.run_state(), RunState::Idle);
}

#[test]
fn goal_mutation_is_rejected_while_running() {
    let mut nav = target_state();
    nav.start();
    nav.append_target(Vec2::new(999.0, 999.0));
    assert_eq!(nav.goals().len(), 1);

    let mut nav = NavigationState::new(Vec2::ZERO, NavMode::Path, Vec::new());
    nav.set_path(vec![Vec2::ZERO, Vec2::new(10.0, 0.0)]);
    nav.start();
    nav.set_path(vec![Vec2::new(5.0, 5.0)]);
    assert_eq!(nav.goals().len(), 2);
}

#[test]
fn mode_mismatched_mutators_are_noops() {
    let mut nav = NavigationState::new(Vec2::ZERO, NavMode::Target, Vec::new());
    nav.set_path(vec![Vec2::new(1.0, 1.0)]);
    assert!(nav.goals().is_empty());

    let mut nav = NavigationState::new(Vec2::ZERO, NavMode::Path, Vec::new());
    nav.append_target(Vec2::new(1.0, 1.0));
    assert!(nav.goals().is_empty());
}

#[test]
fn progress_is_monotone_and_bounded() {
    let mut nav = NavigationState::new(Vec2::new(0.0, 0.0), NavMode::Target, Vec::new());
    nav.append_target(Vec2::new(40.0, 0.0));
    nav.append_target(Vec2::new(40.0, 40.0));
    nav.start();

    let speed = Speed::clamped(5);
    let mut last = nav.progress();
    for _ in 0..200 {
        nav.advance(speed);
        let progress = nav.progress();
        assert!(progress >= last);
        assert!(progress <= nav.goals().len());
        last = progress;
        if nav.run_state() == RunState::Finished {
            break;
        }
    }
    assert_eq!(nav.run_state(), RunState::Finished);
}
