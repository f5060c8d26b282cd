#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-tick displacement magnitude (target mode) or waypoint-budget decrement
/// (path mode). Valid range 1..=5, matching the speed menu of the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Speed(u8);

impl Speed {
    pub const MIN: Speed = Speed(1);
    pub const MAX: Speed = Speed(5);

    /// Returns `None` unless `value` is in 1..=5.
    pub fn new(value: u8) -> Option<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Saturates `value` into 1..=5.
    pub fn clamped(value: u8) -> Self {
        Self(value.clamp(Self::MIN.0, Self::MAX.0))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Displacement in world units per tick.
    pub fn units(self) -> f32 {
        f32::from(self.0)
    }

    /// Budget consumed per tick in path mode.
    pub fn steps(self) -> i32 {
        i32::from(self.0)
    }
}

impl Default for Speed {
    fn default() -> Self {
        Speed(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range() {
        assert!(Speed::new(0).is_none());
        assert!(Speed::new(6).is_none());
        assert_eq!(Speed::new(3).map(Speed::get), Some(3));
    }

    #[test]
    fn clamped_saturates() {
        assert_eq!(Speed::clamped(0), Speed::MIN);
        assert_eq!(Speed::clamped(9), Speed::MAX);
        assert_eq!(Speed::clamped(4).get(), 4);
    }

    #[test]
    fn default_matches_ui_default() {
        assert_eq!(Speed::default().get(), 2);
    }
}
