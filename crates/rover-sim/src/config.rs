//! Scenario file loading and validation.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use bot_core::{Obstacle, Speed, Vec2};
use bot_nav::NavMode;

/// Session mode as written in scenario files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioMode {
    Target,
    Path,
}

impl From<ScenarioMode> for NavMode {
    fn from(mode: ScenarioMode) -> Self {
        match mode {
            ScenarioMode::Target => NavMode::Target,
            ScenarioMode::Path => NavMode::Path,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstacleSpec {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// One session's worth of world data, loaded from a YAML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scenario {
    pub name: Option<String>,

    pub mode: ScenarioMode,

    /// Robot start position (also the reset position).
    pub origin: [f32; 2],

    /// Speed setting, 1..=5.
    pub speed: u8,

    pub obstacles: Vec<ObstacleSpec>,

    /// Target centers in visiting order (target mode).
    pub targets: Vec<[f32; 2]>,

    /// Sampled free-hand polyline (path mode).
    pub path: Vec<[f32; 2]>,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            name: None,
            mode: ScenarioMode::Target,
            origin: [50.0, 650.0],
            speed: 2,
            obstacles: Vec::new(),
            targets: Vec::new(),
            path: Vec::new(),
        }
    }
}

/// Scenario problems reported before a session is built. The kernel itself
/// treats malformed coordinates as caller contract violations, so the
/// checking happens here, at the boundary.
#[derive(Debug, Error, PartialEq)]
pub enum ScenarioError {
    #[error("speed {0} is outside 1..=5")]
    SpeedOutOfRange(u8),

    #[error("{mode:?} mode scenario has no goal data")]
    EmptyGoalSet { mode: ScenarioMode },

    #[error("{found} data supplied in {mode:?} mode")]
    WrongModeData {
        mode: ScenarioMode,
        found: &'static str,
    },

    #[error("non-finite coordinate in {0}")]
    NonFiniteCoordinate(&'static str),

    #[error("obstacle radius {0} must be positive and finite")]
    BadObstacleRadius(f32),
}

impl Scenario {
    /// Load a scenario from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scenario from {}", path.display()))?;
        let scenario: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse scenario from {}", path.display()))?;
        Ok(scenario)
    }

    /// Write the scenario as YAML.
    pub fn save(&self, path: &Path) -> Result<()> {
        let yaml = self.to_yaml()?;
        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write scenario to {}", path.display()))?;
        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize scenario")
    }

    pub fn validate(&self) -> std::result::Result<(), ScenarioError> {
        if !(1..=5).contains(&self.speed) {
            return Err(ScenarioError::SpeedOutOfRange(self.speed));
        }

        if !self.origin.iter().all(|c| c.is_finite()) {
            return Err(ScenarioError::NonFiniteCoordinate("origin"));
        }
        for o in &self.obstacles {
            if !(o.x.is_finite() && o.y.is_finite()) {
                return Err(ScenarioError::NonFiniteCoordinate("obstacles"));
            }
            if !o.radius.is_finite() || o.radius <= 0.0 {
                return Err(ScenarioError::BadObstacleRadius(o.radius));
            }
        }
        if !self.targets.iter().flatten().all(|c| c.is_finite()) {
            return Err(ScenarioError::NonFiniteCoordinate("targets"));
        }
        if !self.path.iter().flatten().all(|c| c.is_finite()) {
            return Err(ScenarioError::NonFiniteCoordinate("path"));
        }

        match self.mode {
            ScenarioMode::Target => {
                if !self.path.is_empty() {
                    return Err(ScenarioError::WrongModeData {
                        mode: self.mode,
                        found: "path",
                    });
                }
                if self.targets.is_empty() {
                    return Err(ScenarioError::EmptyGoalSet { mode: self.mode });
                }
            }
            ScenarioMode::Path => {
                if !self.targets.is_empty() {
                    return Err(ScenarioError::WrongModeData {
                        mode: self.mode,
                        found: "target",
                    });
                }
                if self.path.is_empty() {
                    return Err(ScenarioError::EmptyGoalSet { mode: self.mode });
                }
            }
        }

        Ok(())
    }

    pub fn origin_point(&self) -> Vec2 {
        Vec2::new(self.origin[0], self.origin[1])
    }

    pub fn speed_setting(&self) -> Speed {
        Speed::clamped(self.speed)
    }

    pub fn obstacle_list(&self) -> Vec<Obstacle> {
        self.obstacles
            .iter()
            .map(|o| Obstacle::new(Vec2::new(o.x, o.y), o.radius))
            .collect()
    }

    pub fn target_points(&self) -> Vec<Vec2> {
        self.targets.iter().map(|&[x, y]| Vec2::new(x, y)).collect()
    }

    pub fn path_points(&self) -> Vec<Vec2> {
        self.path.iter().map(|&[x, y]| Vec2::new(x, y)).collect()
    }
}
