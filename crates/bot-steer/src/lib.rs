//! Deterministic local obstacle avoidance: lookahead probe + fixed-angle swerve.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

use bot_core::{Obstacle, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SteerConfig {
    /// Distance ahead of the current position probed for obstacles.
    pub lookahead: f32,
    /// Buffer added to each obstacle radius during the probe check.
    pub clearance: f32,
    /// Fixed heading offset (radians) applied when the probe is blocked.
    pub swerve: f32,
}

impl Default for SteerConfig {
    fn default() -> Self {
        Self {
            lookahead: 25.0,
            clearance: 10.0,
            swerve: 1.2,
        }
    }
}

/// One-step reactive steering:
/// - Projects a probe point `lookahead` units along the desired heading.
/// - If the probe falls within `radius + clearance` of any obstacle, evaluates
///   the two fixed-swerve candidates and keeps the one whose own probe stays
///   farther from the nearest obstacle center.
///
/// Carries no state across ticks: candidates can flip ordering on
/// consecutive calls, so a robot may oscillate between swerves near tightly
/// spaced obstacles.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Steering {
    config: SteerConfig,
}

impl Steering {
    pub fn new(config: SteerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> SteerConfig {
        self.config
    }

    pub fn set_config(&mut self, config: SteerConfig) {
        self.config = config;
    }

    /// Heading for this tick. Pure and deterministic: identical inputs always
    /// produce an identical result.
    ///
    /// Obstacle scan is a linear pass; obstacle counts are small enough that a
    /// spatial index would be overkill.
    pub fn deflect(&self, position: Vec2, desired: f32, obstacles: &[Obstacle]) -> f32 {
        let probe = self.probe(position, desired);
        let blocked = obstacles
            .iter()
            .any(|o| o.covers(probe, self.config.clearance));
        if !blocked {
            return desired;
        }

        let left = desired + self.config.swerve;
        let right = desired - self.config.swerve;

        // Candidates are scored by probe distance to the nearest obstacle
        // center, radius ignored. Ties go left.
        let left_clearance = self.min_center_distance(position, left, obstacles);
        let right_clearance = self.min_center_distance(position, right, obstacles);
        if left_clearance >= right_clearance {
            left
        } else {
            right
        }
    }

    fn probe(&self, position: Vec2, heading: f32) -> Vec2 {
        position + Vec2::from_angle(heading) * self.config.lookahead
    }

    fn min_center_distance(&self, position: Vec2, heading: f32, obstacles: &[Obstacle]) -> f32 {
        let probe = self.probe(position, heading);
        obstacles
            .iter()
            .map(|o| probe.distance(o.center))
            .fold(f32::INFINITY, f32::min)
    }
}
