//! Weighted recommendation scoring.

pub mod engine;
pub mod types;

pub use engine::score;
pub use types::{Answer, OfferingScore, ScoringResult, SignalPathScore, Thresholds};
