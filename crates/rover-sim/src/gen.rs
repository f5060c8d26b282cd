//! Deterministic scenario generation.
//!
//! Reproduces the classic random board: a spread of circular obstacles in the
//! middle of the world and a band of candidate targets, seeded so the same
//! seed always yields the same board.

use bot_core::SplitMix64;

use crate::config::{ObstacleSpec, Scenario, ScenarioMode};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenParams {
    pub seed: u64,
    pub width: f32,
    pub height: f32,
    pub obstacle_count: usize,
    pub obstacle_radius: f32,
    pub target_count: usize,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            seed: 0,
            width: 1000.0,
            height: 700.0,
            obstacle_count: 8,
            obstacle_radius: 25.0,
            target_count: 10,
        }
    }
}

/// Build a target-mode scenario from `params`. Obstacles keep away from the
/// world edges; targets use a slightly wider band.
pub fn generate(params: &GenParams) -> Scenario {
    let mut rng = SplitMix64::new(params.seed);

    let obstacles = (0..params.obstacle_count)
        .map(|_| ObstacleSpec {
            x: rng.next_range(100.0, params.width - 100.0),
            y: rng.next_range(150.0, params.height - 100.0),
            radius: params.obstacle_radius,
        })
        .collect();

    let targets = (0..params.target_count)
        .map(|_| {
            [
                rng.next_range(80.0, params.width - 80.0),
                rng.next_range(120.0, params.height - 80.0),
            ]
        })
        .collect();

    Scenario {
        name: Some(format!("generated-{}", params.seed)),
        mode: ScenarioMode::Target,
        origin: [50.0, params.height - 50.0],
        speed: 2,
        obstacles,
        targets,
        path: Vec::new(),
    }
}
