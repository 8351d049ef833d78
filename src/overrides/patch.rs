//! Typed sparse patches.
//!
//! An admin edit is stored as the difference from the authored content, not
//! as a full copy. Scalar fields are `Option` (set means replace); child
//! collections are maps keyed by the child's id, so patches survive authored
//! reordering. Every struct tolerates missing fields on the wire.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub sub_scenarios: HashMap<String, SubScenarioPatch>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub signal_path_mappings: HashMap<String, MappingPatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScenarioPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_meaning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub questions: HashMap<String, QuestionPatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub options: HashMap<String, OptionPatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_meaning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signal_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

/// Patch for a signal path mapping's narrative fields. List fields replace
/// wholesale when present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_recommendation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supporting_capability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solutions: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approach: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<String>>,
}

/// Per-offering multiplier overrides for one matrix row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatrixPatch {
    #[serde(default, rename = "Data", skip_serializing_if = "Option::is_none")]
    pub data: Option<u32>,
    #[serde(default, rename = "AI", skip_serializing_if = "Option::is_none")]
    pub ai: Option<u32>,
    #[serde(default, rename = "AMM", skip_serializing_if = "Option::is_none")]
    pub amm: Option<u32>,
    #[serde(default, rename = "DPDE", skip_serializing_if = "Option::is_none")]
    pub dpde: Option<u32>,
}

impl ScenarioPatch {
    /// Number of leaf edits in this patch.
    pub fn change_count(&self) -> usize {
        let scalars = [
            self.title.is_some(),
            self.description.is_some(),
            self.icon.is_some(),
            self.color.is_some(),
            self.enabled.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count();
        let subs: usize = self
            .sub_scenarios
            .values()
            .map(SubScenarioPatch::change_count)
            .sum();
        let mappings: usize = self
            .signal_path_mappings
            .values()
            .map(MappingPatch::change_count)
            .sum();
        scalars + subs + mappings
    }
}

impl SubScenarioPatch {
    pub fn change_count(&self) -> usize {
        let scalars = [
            self.text.is_some(),
            self.business_meaning.is_some(),
            self.signal_path.is_some(),
            self.weight.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count();
        let questions: usize = self.questions.values().map(QuestionPatch::change_count).sum();
        scalars + questions
    }
}

impl QuestionPatch {
    pub fn change_count(&self) -> usize {
        let scalars = usize::from(self.text.is_some());
        let options: usize = self.options.values().map(OptionPatch::change_count).sum();
        scalars + options
    }
}

impl OptionPatch {
    pub fn change_count(&self) -> usize {
        [
            self.text.is_some(),
            self.business_meaning.is_some(),
            self.signal_path.is_some(),
            self.weight.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

impl MappingPatch {
    pub fn change_count(&self) -> usize {
        [
            self.primary_recommendation.is_some(),
            self.supporting_capability.is_some(),
            self.description.is_some(),
            self.tech_stack.is_some(),
            self.challenges.is_some(),
            self.solutions.is_some(),
            self.approach.is_some(),
            self.capabilities.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

impl MatrixPatch {
    pub fn change_count(&self) -> usize {
        [
            self.data.is_some(),
            self.ai.is_some(),
            self.amm.is_some(),
            self.dpde.is_some(),
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}
