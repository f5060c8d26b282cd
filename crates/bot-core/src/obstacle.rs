use crate::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Static circular obstacle. Never mutated once a session starts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Obstacle {
    pub center: Vec2,
    pub radius: f32,
}

impl Obstacle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Whether `point` lies within `radius + buffer` of the center.
    pub fn covers(&self, point: Vec2, buffer: f32) -> bool {
        point.distance(self.center) < self.radius + buffer
    }
}
