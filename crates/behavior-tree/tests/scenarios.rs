//! End-to-end scenarios driving whole trees through several frames.

use std::sync::{Arc, Mutex};

use behavior_tree::builder::{repeater, run, selector, sequence, wait, wait_dynamic};
use behavior_tree::{
    Behavior, BehaviorTree, Completion, Frame, Repeater, RepeaterConfig, Status, TreeConfig,
};

type Ctx = Frame<Vec<&'static str>>;

fn frame(delta: f64) -> Ctx {
    Frame::with_blackboard(delta, Vec::new())
}

/// Run leaf that logs `name` and completes synchronously with `status`.
fn instant(name: &'static str, status: Status) -> Box<dyn Behavior<Ctx>> {
    run(move |ctx: &mut Ctx, done: Completion| {
        ctx.blackboard.push(name);
        done.complete(status).unwrap();
    })
}

#[test]
fn wait_then_action_completes_after_wait_elapses() {
    let mut tree = BehaviorTree::new(sequence(vec![wait(2.0), instant("act", Status::Success)]))
        .with_config(TreeConfig::STOP_ON_TERMINAL);
    let mut ctx = frame(1.0);

    assert_eq!(tree.tick(&mut ctx), Some(Status::Running)); // wait starts, 2.0 left
    assert_eq!(tree.tick(&mut ctx), Some(Status::Running)); // 1.0 left
    assert!(ctx.blackboard.is_empty());

    assert_eq!(tree.tick(&mut ctx), Some(Status::Success));
    assert_eq!(ctx.blackboard, vec!["act"]);
    assert!(!tree.is_active());
    assert_eq!(tree.tick(&mut ctx), None);
}

#[test]
fn sequence_retriggers_leading_actions_while_later_child_runs() {
    let mut tree = BehaviorTree::new(sequence(vec![
        instant("greet", Status::Success),
        wait(1.0),
    ]));
    let mut ctx = frame(1.0);

    assert_eq!(tree.tick(&mut ctx), Some(Status::Running));
    assert_eq!(tree.tick(&mut ctx), Some(Status::Success));
    assert_eq!(ctx.blackboard, vec!["greet", "greet"]);
}

#[test]
fn selector_falls_back_to_running_branch() {
    let mut tree = BehaviorTree::new(selector(vec![
        sequence(vec![
            instant("check", Status::Failure),
            instant("attack", Status::Success),
        ]),
        sequence(vec![wait(0.5), instant("patrol", Status::Success)]),
    ]));
    let mut ctx = frame(0.5);

    assert_eq!(tree.tick(&mut ctx), Some(Status::Running));
    assert_eq!(tree.tick(&mut ctx), Some(Status::Success));
    assert_eq!(ctx.blackboard, vec!["check", "check", "patrol"]);
}

#[test]
fn bounded_repeater_with_timed_child() {
    let config = RepeaterConfig {
        run_forever: false,
        steps_to_run: 2,
        stop_on_failure: false,
    };
    let mut tree = BehaviorTree::new(repeater(config, vec![wait(0.5)]));
    let mut ctx = frame(0.5);

    let statuses: Vec<_> = (0..5).map(|_| tree.tick(&mut ctx)).collect();
    assert_eq!(
        statuses,
        vec![
            Some(Status::Running),
            Some(Status::Success),
            Some(Status::Running),
            Some(Status::Failure),
            None,
        ]
    );
}

#[test]
fn restart_keeps_repeater_pass_count() {
    let mut tree = BehaviorTree::new(Repeater::new(vec![instant("lap", Status::Success)]).steps(2))
        .with_config(TreeConfig::STOP_ON_TERMINAL);
    let mut ctx = frame(0.0);

    assert_eq!(tree.tick(&mut ctx), Some(Status::Success));
    assert!(!tree.is_active());

    tree.restart();
    // A fresh repeater would succeed here; the restarted one is on its last pass.
    assert_eq!(tree.tick(&mut ctx), Some(Status::Failure));
    assert_eq!(ctx.blackboard, vec!["lap", "lap"]);
}

#[test]
fn dynamic_wait_samples_duration_per_activation() {
    let samples = Arc::new(Mutex::new(vec![1.0, 2.0]));
    let source = Arc::clone(&samples);
    let mut tree = BehaviorTree::new(sequence(vec![
        wait_dynamic(move || source.lock().unwrap().remove(0)),
        instant("done", Status::Success),
    ]));
    let mut ctx = frame(1.0);

    // First activation: 1.0 seconds.
    assert_eq!(tree.tick(&mut ctx), Some(Status::Running));
    assert_eq!(tree.tick(&mut ctx), Some(Status::Success));
    // Second activation: 2.0 seconds.
    assert_eq!(tree.tick(&mut ctx), Some(Status::Running));
    assert_eq!(tree.tick(&mut ctx), Some(Status::Running));
    assert_eq!(tree.tick(&mut ctx), Some(Status::Success));
    assert!(samples.lock().unwrap().is_empty());
}

#[test]
fn action_completed_from_worker_thread_resumes_tree() {
    let pending: Arc<Mutex<Option<Completion>>> = Arc::default();
    let slot = Arc::clone(&pending);
    let mut tree = BehaviorTree::new(sequence(vec![
        run(move |_: &mut Ctx, done: Completion| {
            *slot.lock().unwrap() = Some(done);
        }),
        instant("after", Status::Success),
    ]));
    let mut ctx = frame(0.016);

    assert_eq!(tree.tick(&mut ctx), Some(Status::Running));
    assert_eq!(tree.tick(&mut ctx), Some(Status::Running));

    let done = pending.lock().unwrap().take().unwrap();
    std::thread::spawn(move || done.complete(Status::Success).unwrap())
        .join()
        .unwrap();

    assert_eq!(tree.tick(&mut ctx), Some(Status::Success));
    assert_eq!(ctx.blackboard, vec!["after"]);
}

#[test]
fn default_tree_restarts_root_after_success() {
    let mut tree = BehaviorTree::new(wait(0.0));
    let mut ctx = frame(1.0);

    assert_eq!(tree.tick(&mut ctx), Some(Status::Running));
    assert_eq!(tree.tick(&mut ctx), Some(Status::Success));
    assert!(tree.is_active());
    // The root is evaluated again and the wait starts a new activation.
    assert_eq!(tree.tick(&mut ctx), Some(Status::Running));
    assert_eq!(tree.ticks(), 3);
}

#[test]
fn failed_action_deactivates_tree() {
    let mut tree = BehaviorTree::new(sequence(vec![
        instant("try", Status::Failure),
        instant("never", Status::Success),
    ]));
    let mut ctx = frame(0.0);

    assert_eq!(tree.tick(&mut ctx), Some(Status::Failure));
    assert!(!tree.is_active());
    assert_eq!(tree.last_status(), Some(Status::Failure));
    assert_eq!(ctx.blackboard, vec!["try"]);
}
