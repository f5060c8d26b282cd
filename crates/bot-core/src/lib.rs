//! Deterministic, engine-agnostic point-robot simulation primitives.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod math;
pub mod obstacle;
pub mod pose;
pub mod rng;
pub mod speed;

pub use math::Vec2;
pub use obstacle::Obstacle;
pub use pose::Pose;
pub use rng::SplitMix64;
pub use speed::Speed;
