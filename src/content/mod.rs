//! Authored content: schema types, repository loading, and UI labels.

pub mod labels;
pub mod repository;
pub mod types;

pub use labels::{LabelCatalog, DEFAULT_LABELS};
pub use repository::ContentRepository;
pub use types::{
    AnswerModifier, ContentSet, ContextualContent, ContextualContentFile, OfferKind,
    OfferReference, Question, QuestionOption, Scenario, SignalPathMapping, SubScenario,
};
