//! Session facade: one robot, one scenario, one tick loop.

use tracing::{debug, info, warn};

use bot_core::{Pose, Speed, Vec2};
use bot_nav::{NavEvent, NavigationState, RunState};

use crate::config::{Scenario, ScenarioError, ScenarioMode};
use crate::trace::{TraceEvent, TraceWriter};

/// Final report of a driven run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub ticks: u64,
    pub run_state: RunState,
    pub progress: usize,
    pub pose: Pose,
    pub markers: usize,
}

/// Owns a [`NavigationState`] plus the per-session extras the presentation
/// layer needs: the speed setting, persistent waypoint markers, a tick
/// counter, and an optional trace sink.
pub struct Session {
    nav: NavigationState,
    speed: Speed,
    markers: Vec<Vec2>,
    ticks: u64,
    trace: Option<TraceWriter>,
}

impl Session {
    pub fn new(nav: NavigationState, speed: Speed) -> Self {
        Self {
            nav,
            speed,
            markers: Vec::new(),
            ticks: 0,
            trace: None,
        }
    }

    /// Validate `scenario` and build a ready-to-start session from it.
    pub fn from_scenario(scenario: &Scenario) -> Result<Self, ScenarioError> {
        scenario.validate()?;

        let mut nav = NavigationState::new(
            scenario.origin_point(),
            scenario.mode.into(),
            scenario.obstacle_list(),
        );
        match scenario.mode {
            ScenarioMode::Target => {
                for target in scenario.target_points() {
                    nav.append_target(target);
                }
            }
            ScenarioMode::Path => nav.set_path(scenario.path_points()),
        }

        Ok(Self::new(nav, scenario.speed_setting()))
    }

    pub fn set_trace(&mut self, trace: TraceWriter) {
        self.trace = Some(trace);
    }

    pub fn set_speed(&mut self, speed: Speed) {
        self.speed = speed;
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn pose(&self) -> Pose {
        self.nav.pose()
    }

    pub fn run_state(&self) -> RunState {
        self.nav.run_state()
    }

    pub fn progress(&self) -> usize {
        self.nav.progress()
    }

    pub fn goal_count(&self) -> usize {
        self.nav.goals().len()
    }

    /// Waypoint markers dropped so far in the current run.
    pub fn markers(&self) -> &[Vec2] {
        &self.markers
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn append_target(&mut self, target: Vec2) {
        self.nav.append_target(target);
    }

    pub fn set_path(&mut self, points: Vec<Vec2>) {
        self.nav.set_path(points);
    }

    pub fn start(&mut self) {
        self.nav.start();
        if self.nav.run_state() == RunState::Running {
            self.markers.clear();
            self.record("start");
            info!(goals = self.nav.goals().len(), "run started");
        }
    }

    pub fn toggle_pause(&mut self) {
        self.nav.toggle_pause();
    }

    pub fn reset(&mut self) {
        self.nav.reset();
        self.markers.clear();
        self.ticks = 0;
    }

    pub fn clear(&mut self) {
        self.nav.clear();
        self.markers.clear();
        self.ticks = 0;
    }

    /// One tick of the presentation loop. Returns whatever the kernel
    /// surfaced this tick.
    pub fn tick(&mut self) -> Option<NavEvent> {
        if self.nav.run_state() != RunState::Running {
            return None;
        }

        let event = self.nav.advance(self.speed);
        self.ticks += 1;

        match event {
            Some(NavEvent::WaypointVisited(position)) => {
                self.markers.push(position);
                debug!(tick = self.ticks, x = position.x, y = position.y, "waypoint visited");
                self.record("waypoint");
            }
            Some(NavEvent::TargetReached { index }) => {
                info!(tick = self.ticks, index, "target reached");
                self.record("target");
            }
            Some(NavEvent::Finished) => {
                info!(tick = self.ticks, "run finished");
                self.record("finished");
            }
            None => {
                let pose = self.nav.pose();
                debug!(
                    tick = self.ticks,
                    x = pose.position.x,
                    y = pose.position.y,
                    heading = pose.heading,
                    "tick"
                );
                self.record("tick");
            }
        }

        event
    }

    /// Start and drive the session until it finishes or `max_ticks` elapse.
    ///
    /// The kernel itself never times out (a stuck robot keeps ticking); the
    /// cap belongs to the driver.
    pub fn run_to_completion(&mut self, max_ticks: u64) -> RunSummary {
        self.start();
        for _ in 0..max_ticks {
            if self.nav.run_state() != RunState::Running {
                break;
            }
            self.tick();
        }
        self.summary()
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            ticks: self.ticks,
            run_state: self.nav.run_state(),
            progress: self.nav.progress(),
            pose: self.nav.pose(),
            markers: self.markers.len(),
        }
    }

    fn record(&self, kind: &str) {
        if let Some(trace) = &self.trace {
            let event = TraceEvent::at(self.ticks, kind, self.nav.pose());
            if let Err(error) = trace.emit(&event) {
                warn!(%error, "failed to write trace event");
            }
        }
    }
}
