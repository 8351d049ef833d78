//! Content resolution.
//!
//! Picks the narrative lists for a result page. Resolution never fails:
//! a missing mapping or contextual entry just narrows the fallback chain,
//! ending at empty lists.

use std::collections::HashMap;

use crate::content::types::{AnswerModifier, ContextualContent, SignalPathMapping};
use crate::recommend::types::ResolvedContent;
use crate::scoring::types::Answer;

/// Answers at or above this weight pull their modifier content in.
const MODIFIER_WEIGHT_THRESHOLD: u32 = 3;

/// Challenges and solutions are capped for the result page layout.
const MAX_LIST_ITEMS: usize = 5;

/// Resolves result-page content for one outcome.
///
/// Challenges, solutions, and approach each resolve contextual first (only
/// when that contextual list is non-empty), then the mapping, then empty.
/// Capabilities and tech stack come from the mapping only. Strongly
/// weighted answers append their modifier content, in answer order, before
/// the lists are capped.
pub fn resolve_content(
    mapping: Option<&SignalPathMapping>,
    contextual: Option<&ContextualContent>,
    answers: &[Answer],
    modifiers: &HashMap<String, AnswerModifier>,
) -> ResolvedContent {
    let mut challenges = pick(
        contextual.map(|entry| entry.challenges.as_slice()),
        mapping.map(|entry| entry.challenges.as_slice()),
    );
    let mut solutions = pick(
        contextual.map(|entry| entry.solutions.as_slice()),
        mapping.map(|entry| entry.solutions.as_slice()),
    );
    let approach = pick(
        contextual.map(|entry| entry.approach.as_slice()),
        mapping.map(|entry| entry.approach.as_slice()),
    );
    let capabilities = mapping
        .map(|entry| entry.capabilities.clone())
        .unwrap_or_default();
    let tech_stack = mapping
        .map(|entry| entry.tech_stack.clone())
        .unwrap_or_default();

    for answer in answers {
        if answer.weight < MODIFIER_WEIGHT_THRESHOLD {
            continue;
        }
        let Some(modifier) = modifiers.get(&answer.option_id) else {
            continue;
        };
        if let Some(challenge) = &modifier.challenge {
            push_unique(&mut challenges, challenge);
        }
        if let Some(solution) = &modifier.solution {
            push_unique(&mut solutions, solution);
        }
    }

    challenges.truncate(MAX_LIST_ITEMS);
    solutions.truncate(MAX_LIST_ITEMS);

    ResolvedContent {
        challenges,
        solutions,
        approach,
        capabilities,
        tech_stack,
    }
}

fn pick(contextual: Option<&[String]>, mapping: Option<&[String]>) -> Vec<String> {
    match contextual {
        Some(list) if !list.is_empty() => list.to_vec(),
        _ => mapping.map(<[String]>::to_vec).unwrap_or_default(),
    }
}

fn push_unique(list: &mut Vec<String>, item: &str) {
    if !list.iter().any(|existing| existing == item) {
        list.push(item.to_string());
    }
}
