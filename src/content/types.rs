//! Content schema types.
//!
//! These structs mirror the authored JSON documents (content set and
//! contextual content file) field for field, so serde does the boundary
//! validation. All wire names are camelCase.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::matrix::SignalOfferingMapping;

/// Top-level authored content document: scenarios plus the signal matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSet {
    pub scenarios: Vec<Scenario>,
    pub signal_mapping_matrix: Vec<SignalOfferingMapping>,
}

/// A top-level entry point the visitor chooses from.
///
/// Disabled scenarios stay in the content set (and still merge overrides)
/// but the session refuses to select them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offering_group: Option<String>,
    pub sub_scenarios: Vec<SubScenario>,
    pub signal_path_mappings: Vec<SignalPathMapping>,
}

impl Scenario {
    pub fn sub_scenario(&self, id: &str) -> Option<&SubScenario> {
        self.sub_scenarios.iter().find(|sub| sub.id == id)
    }

    pub fn signal_path_mapping(&self, signal_path: &str) -> Option<&SignalPathMapping> {
        self.signal_path_mappings
            .iter()
            .find(|mapping| mapping.signal_path == signal_path)
    }
}

/// A refinement of a scenario. Owns the question flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScenario {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub business_meaning: String,
    pub signal_path: String,
    pub weight: u32,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    pub text: String,
    pub options: Vec<QuestionOption>,
}

impl Question {
    pub fn option(&self, id: &str) -> Option<&QuestionOption> {
        self.options.iter().find(|option| option.id == id)
    }
}

/// One selectable answer. Its signal path and weight drive scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionOption {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub business_meaning: String,
    pub signal_path: String,
    pub weight: u32,
}

/// Narrative content attached to a signal path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalPathMapping {
    pub signal_path: String,
    pub primary_recommendation: String,
    pub supporting_capability: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub solutions: Vec<String>,
    #[serde(default)]
    pub approach: Vec<String>,
    #[serde(default)]
    pub capabilities: Vec<String>,
    #[serde(default)]
    pub offers: Vec<OfferReference>,
}

/// A rich-media artifact linked from a recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferReference {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: OfferKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub reference_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferKind {
    Video,
    Architecture,
    Demo,
    Document,
    Tool,
}

/// Contextual narrative for a specific sub-scenario and outcome pair.
/// Any empty field falls back to the signal path mapping's version.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextualContent {
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub solutions: Vec<String>,
    #[serde(default)]
    pub approach: Vec<String>,
}

/// Extra narrative injected when a strongly weighted answer was picked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerModifier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

/// Authored contextual document: entries keyed
/// `"<subScenarioId>:<primarySignalPath>"`, modifiers keyed by option id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextualContentFile {
    #[serde(default)]
    pub entries: HashMap<String, ContextualContent>,
    #[serde(default)]
    pub answer_modifiers: HashMap<String, AnswerModifier>,
}

impl ContextualContentFile {
    /// Looks up the contextual entry for a sub-scenario and outcome.
    /// This is the only place the compound key is built.
    pub fn entry(&self, sub_scenario_id: &str, signal_path: &str) -> Option<&ContextualContent> {
        self.entries
            .get(&format!("{}:{}", sub_scenario_id, signal_path))
    }

    pub fn modifier(&self, option_id: &str) -> Option<&AnswerModifier> {
        self.answer_modifiers.get(option_id)
    }
}
