//! Rover simulator application layer.
//!
//! Wraps the `bot-*` kernel crates with everything one headless session
//! needs: YAML scenario files, deterministic scenario generation, a session
//! facade that drives the per-tick loop, and a JSONL run trace.

pub mod config;
pub mod gen;
pub mod session;
pub mod trace;

pub use config::{ObstacleSpec, Scenario, ScenarioError, ScenarioMode};
pub use gen::{generate, GenParams};
pub use session::{RunSummary, Session};
pub use trace::{TraceEvent, TraceWriter};

pub use bot_core::{Obstacle, Pose, Speed, Vec2};
pub use bot_nav::{NavEvent, NavMode, NavigationState, RunState};
