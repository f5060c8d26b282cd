use crate::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Robot position plus heading angle in radians.
///
/// The heading is unbounded; it only ever feeds trigonometric functions, so
/// wrapping is implicit.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pose {
    pub position: Vec2,
    pub heading: f32,
}

impl Pose {
    pub fn new(position: Vec2, heading: f32) -> Self {
        Self { position, heading }
    }

    /// Pose at `position` facing along the x-axis.
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            heading: 0.0,
        }
    }
}
