use bot_core::{Obstacle, Pose, Speed, Vec2};
use bot_steer::{SteerConfig, Steering};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{GoalSet, NavMode};

/// Run/pause lifecycle of one session.
///
/// Idle --start (goals non-empty)--> Running
/// Running <--toggle_pause--> Paused
/// Running --cursor reaches end--> Finished
/// any --reset / clear--> Idle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RunState {
    Idle,
    Running,
    Paused,
    Finished,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavConfig {
    /// Distance at which the active target counts as reached.
    pub arrival_radius: f32,
    /// Budget restored after each visited path waypoint, consumed in speed
    /// units per tick.
    pub dot_interval: i32,
    /// Radius assigned to unvisited targets when they double as obstacles.
    pub target_radius: f32,
    pub steer: SteerConfig,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            arrival_radius: 5.0,
            dot_interval: 10,
            target_radius: 20.0,
            steer: SteerConfig::default(),
        }
    }
}

/// Per-tick outcome worth surfacing to the presentation layer. At most one
/// event is produced per `advance` call.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavEvent {
    /// A path waypoint was visited; the collaborator drops a persistent
    /// marker at this position.
    WaypointVisited(Vec2),
    /// The active target was reached; no movement happened this tick.
    TargetReached { index: usize },
    /// The cursor ran off the end of the goal set.
    Finished,
}

/// Owns the robot pose, the goal set, and run/pause progress, and drives one
/// simulation step per tick.
///
/// One explicit value owned by the caller; constructing and `reset` are the
/// only lifecycle operations. Disallowed operations (start with no goals,
/// pause while idle, goal mutation mid-run) are silent no-ops rather than
/// errors.
#[derive(Debug, Clone)]
pub struct NavigationState {
    origin: Vec2,
    pose: Pose,
    run_state: RunState,
    cursor: usize,
    goals: GoalSet,
    obstacles: Vec<Obstacle>,
    config: NavConfig,
    steering: Steering,
    avoid_scratch: Vec<Obstacle>,
}

impl NavigationState {
    pub fn new(origin: Vec2, mode: NavMode, obstacles: Vec<Obstacle>) -> Self {
        Self::with_config(origin, mode, obstacles, NavConfig::default())
    }

    pub fn with_config(
        origin: Vec2,
        mode: NavMode,
        obstacles: Vec<Obstacle>,
        config: NavConfig,
    ) -> Self {
        Self {
            origin,
            pose: Pose::at(origin),
            run_state: RunState::Idle,
            cursor: 0,
            goals: GoalSet::empty(mode),
            obstacles,
            config,
            steering: Steering::new(config.steer),
            avoid_scratch: Vec::new(),
        }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    /// Progress cursor, always in `[0, goals.len()]`.
    pub fn progress(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> NavMode {
        self.goals.mode()
    }

    pub fn goals(&self) -> &GoalSet {
        &self.goals
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    pub fn config(&self) -> &NavConfig {
        &self.config
    }

    /// Append a target in selection order. No-op while Running or in path
    /// mode.
    pub fn append_target(&mut self, target: Vec2) {
        if self.run_state == RunState::Running {
            return;
        }
        if let GoalSet::Targets(targets) = &mut self.goals {
            targets.push(target);
        }
    }

    /// Replace the drawn path wholesale. No-op while Running or in target
    /// mode.
    pub fn set_path(&mut self, points: Vec<Vec2>) {
        if self.run_state == RunState::Running {
            return;
        }
        if let GoalSet::Path { points: current, .. } = &mut self.goals {
            *current = points;
        }
    }

    /// Begin a run. No-op unless Idle or Finished with a non-empty goal set.
    /// The pose is left where it is.
    pub fn start(&mut self) {
        if !matches!(self.run_state, RunState::Idle | RunState::Finished) {
            return;
        }
        if self.goals.is_empty() {
            return;
        }
        self.cursor = 0;
        if let GoalSet::Path { dot_budget, .. } = &mut self.goals {
            *dot_budget = 0;
        }
        self.run_state = RunState::Running;
    }

    /// Flip Running <-> Paused. No-op in Idle or Finished.
    pub fn toggle_pause(&mut self) {
        self.run_state = match self.run_state {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
            other => other,
        };
    }

    /// Return the robot to the origin and the cursor to zero. Goals are kept.
    pub fn reset(&mut self) {
        self.pose = Pose::at(self.origin);
        self.cursor = 0;
        if let GoalSet::Path { dot_budget, .. } = &mut self.goals {
            *dot_budget = 0;
        }
        self.run_state = RunState::Idle;
    }

    /// Empty the goal set, then behave as [`reset`](Self::reset).
    pub fn clear(&mut self) {
        match &mut self.goals {
            GoalSet::Targets(targets) => targets.clear(),
            GoalSet::Path { points, .. } => points.clear(),
        }
        self.reset();
    }

    /// One simulation step. No-op (returns `None`) unless Running.
    pub fn advance(&mut self, speed: Speed) -> Option<NavEvent> {
        if self.run_state != RunState::Running {
            return None;
        }

        match &mut self.goals {
            GoalSet::Targets(targets) => {
                if self.cursor >= targets.len() {
                    self.run_state = RunState::Finished;
                    return Some(NavEvent::Finished);
                }

                let goal = targets[self.cursor];
                if self.pose.position.distance(goal) < self.config.arrival_radius {
                    let index = self.cursor;
                    self.cursor += 1;
                    return Some(NavEvent::TargetReached { index });
                }

                let desired = (goal - self.pose.position).to_angle();

                // Unvisited targets beyond the active goal deflect the robot
                // just like static obstacles.
                self.avoid_scratch.clear();
                self.avoid_scratch.extend_from_slice(&self.obstacles);
                self.avoid_scratch.extend(
                    targets[self.cursor + 1..]
                        .iter()
                        .map(|&center| Obstacle::new(center, self.config.target_radius)),
                );

                let heading = self
                    .steering
                    .deflect(self.pose.position, desired, &self.avoid_scratch);
                self.pose.position =
                    self.pose.position + Vec2::from_angle(heading) * speed.units();
                self.pose.heading = heading;
                None
            }
            GoalSet::Path { points, dot_budget } => {
                if self.cursor >= points.len() {
                    self.run_state = RunState::Finished;
                    return Some(NavEvent::Finished);
                }

                let mut event = None;
                if *dot_budget <= 0 {
                    let position = points[self.cursor];
                    if let Some(&next) = points.get(self.cursor + 1) {
                        let desired = (next - position).to_angle();
                        // Path waypoints never count as obstacles.
                        self.pose.heading =
                            self.steering.deflect(position, desired, &self.obstacles);
                    }
                    self.pose.position = position;
                    *dot_budget = self.config.dot_interval;
                    event = Some(NavEvent::WaypointVisited(position));
                }

                *dot_budget -= speed.steps();
                self.cursor += 1;
                event
            }
        }
    }
}
