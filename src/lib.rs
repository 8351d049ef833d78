//! Guided-questionnaire kiosk core.
//!
//! A content-driven recommendation engine: authored scenarios refine into
//! sub-scenarios, a short weighted questionnaire accumulates signals, and a
//! scoring pass ranks four offerings and resolves layered narrative content
//! into a single recommendation object. Admin overrides are sparse patches
//! merged over the authored content at session start.
//!
//! The library is the pure core; the `navigator` binary wraps it in a small
//! terminal shell for validation, scoring, and interactive runs.

#![forbid(unsafe_code)]

pub mod commands;
pub mod config;
pub mod content;
pub mod error;
pub mod matrix;
pub mod overrides;
pub mod recommend;
pub mod scoring;
pub mod session;

pub use config::NavigatorConfig;
pub use content::{ContentRepository, LabelCatalog};
pub use error::{NavigatorError, Result};
pub use matrix::{OfferingName, SignalMatrix};
pub use overrides::{JsonFileStore, OverrideRecord, OverrideStore};
pub use recommend::Recommendation;
pub use scoring::{score, Answer, ScoringResult, Thresholds};
pub use session::{NavigatorSession, Step};

/// Crate version, surfaced by the CLI.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
