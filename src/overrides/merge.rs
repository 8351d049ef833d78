//! Override merge.
//!
//! Pure functions that produce a merged copy of authored content with admin
//! patches applied. Children merge strictly by id, so patches keep applying
//! after authored content is reordered or extended. Patch entries that
//! reference ids the content no longer has are logged and skipped; a stale
//! record must never block a kiosk from starting.

use std::collections::HashMap;

use tracing::warn;

use crate::content::types::{Question, QuestionOption, Scenario, SignalPathMapping, SubScenario};
use crate::overrides::patch::{
    MappingPatch, OptionPatch, QuestionPatch, ScenarioPatch, SubScenarioPatch,
};

/// Applies a patch to one scenario. The base is never mutated.
pub fn merge_scenario(base: &Scenario, patch: &ScenarioPatch) -> Scenario {
    let mut merged = base.clone();
    if let Some(title) = &patch.title {
        merged.title = title.clone();
    }
    if let Some(description) = &patch.description {
        merged.description = description.clone();
    }
    if let Some(icon) = &patch.icon {
        merged.icon = icon.clone();
    }
    if let Some(color) = &patch.color {
        merged.color = color.clone();
    }
    if let Some(enabled) = patch.enabled {
        merged.enabled = enabled;
    }
    for (id, sub_patch) in &patch.sub_scenarios {
        match merged.sub_scenarios.iter_mut().find(|sub| &sub.id == id) {
            Some(sub) => *sub = merge_sub_scenario(sub, sub_patch),
            None => warn!("Override for unknown sub-scenario id: {}", id),
        }
    }
    for (signal_path, mapping_patch) in &patch.signal_path_mappings {
        match merged
            .signal_path_mappings
            .iter_mut()
            .find(|mapping| &mapping.signal_path == signal_path)
        {
            Some(mapping) => *mapping = merge_mapping(mapping, mapping_patch),
            None => warn!("Override for unknown signal path mapping: {}", signal_path),
        }
    }
    merged
}

/// Applies patches to a whole scenario list, in authored order.
pub fn merge_scenarios(
    base: &[Scenario],
    patches: &HashMap<String, ScenarioPatch>,
) -> Vec<Scenario> {
    for id in patches.keys() {
        if !base.iter().any(|scenario| &scenario.id == id) {
            warn!("Override for unknown scenario id: {}", id);
        }
    }
    base.iter()
        .map(|scenario| match patches.get(&scenario.id) {
            Some(patch) => merge_scenario(scenario, patch),
            None => scenario.clone(),
        })
        .collect()
}

fn merge_sub_scenario(base: &SubScenario, patch: &SubScenarioPatch) -> SubScenario {
    let mut merged = base.clone();
    if let Some(text) = &patch.text {
        merged.text = text.clone();
    }
    if let Some(business_meaning) = &patch.business_meaning {
        merged.business_meaning = business_meaning.clone();
    }
    if let Some(signal_path) = &patch.signal_path {
        merged.signal_path = signal_path.clone();
    }
    if let Some(weight) = patch.weight {
        merged.weight = weight;
    }
    for (id, question_patch) in &patch.questions {
        match merged.questions.iter_mut().find(|question| &question.id == id) {
            Some(question) => *question = merge_question(question, question_patch),
            None => warn!("Override for unknown question id: {}", id),
        }
    }
    merged
}

fn merge_question(base: &Question, patch: &QuestionPatch) -> Question {
    let mut merged = base.clone();
    if let Some(text) = &patch.text {
        merged.text = text.clone();
    }
    for (id, option_patch) in &patch.options {
        match merged.options.iter_mut().find(|option| &option.id == id) {
            Some(option) => *option = merge_option(option, option_patch),
            None => warn!("Override for unknown option id: {}", id),
        }
    }
    merged
}

fn merge_option(base: &QuestionOption, patch: &OptionPatch) -> QuestionOption {
    let mut merged = base.clone();
    if let Some(text) = &patch.text {
        merged.text = text.clone();
    }
    if let Some(business_meaning) = &patch.business_meaning {
        merged.business_meaning = business_meaning.clone();
    }
    if let Some(signal_path) = &patch.signal_path {
        merged.signal_path = signal_path.clone();
    }
    if let Some(weight) = patch.weight {
        merged.weight = weight;
    }
    merged
}

fn merge_mapping(base: &SignalPathMapping, patch: &MappingPatch) -> SignalPathMapping {
    let mut merged = base.clone();
    if let Some(primary_recommendation) = &patch.primary_recommendation {
        merged.primary_recommendation = primary_recommendation.clone();
    }
    if let Some(supporting_capability) = &patch.supporting_capability {
        merged.supporting_capability = supporting_capability.clone();
    }
    if let Some(description) = &patch.description {
        merged.description = description.clone();
    }
    if let Some(tech_stack) = &patch.tech_stack {
        merged.tech_stack = tech_stack.clone();
    }
    if let Some(challenges) = &patch.challenges {
        merged.challenges = challenges.clone();
    }
    if let Some(solutions) = &patch.solutions {
        merged.solutions = solutions.clone();
    }
    if let Some(approach) = &patch.approach {
        merged.approach = approach.clone();
    }
    if let Some(capabilities) = &patch.capabilities {
        merged.capabilities = capabilities.clone();
    }
    merged
}
