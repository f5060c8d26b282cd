//! Goal tracking and the tick-driven navigation state machine.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod goal;
pub mod state;

pub use goal::{GoalSet, NavMode};
pub use state::{NavConfig, NavEvent, NavigationState, RunState};
