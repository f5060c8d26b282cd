use bot_core::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Session mode. Chosen once, before the first start, and fixed for the
/// lifetime of a [`crate::NavigationState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NavMode {
    Target,
    Path,
}

/// Goal data for one session, tagged by mode.
///
/// `Targets` holds circle centers in selection order; each unvisited target
/// also deflects the robot until it becomes the active goal. `Path` holds a
/// sampled polyline plus the countdown budget that gates how often a waypoint
/// is visited and marked.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GoalSet {
    Targets(Vec<Vec2>),
    Path { points: Vec<Vec2>, dot_budget: i32 },
}

impl GoalSet {
    pub fn empty(mode: NavMode) -> Self {
        match mode {
            NavMode::Target => GoalSet::Targets(Vec::new()),
            NavMode::Path => GoalSet::Path {
                points: Vec::new(),
                dot_budget: 0,
            },
        }
    }

    pub fn mode(&self) -> NavMode {
        match self {
            GoalSet::Targets(_) => NavMode::Target,
            GoalSet::Path { .. } => NavMode::Path,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            GoalSet::Targets(targets) => targets.len(),
            GoalSet::Path { points, .. } => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn points(&self) -> &[Vec2] {
        match self {
            GoalSet::Targets(targets) => targets,
            GoalSet::Path { points, .. } => points,
        }
    }
}
