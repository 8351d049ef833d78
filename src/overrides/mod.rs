//! Admin overrides: sparse patches, merge semantics, and persistence.

pub mod merge;
pub mod patch;
pub mod record;

pub use merge::{merge_scenario, merge_scenarios};
pub use patch::{
    MappingPatch, MatrixPatch, OptionPatch, QuestionPatch, ScenarioPatch, SubScenarioPatch,
};
pub use record::{default_export_name, JsonFileStore, OverrideRecord, OverrideStore};
