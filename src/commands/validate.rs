//! Content integrity checks.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::commands::load_repository;

/// Options for the validate command.
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    /// Content set file to validate (builtin when absent).
    pub content: Option<PathBuf>,
    /// Contextual content file to validate alongside.
    pub contextual: Option<PathBuf>,
}

/// Execute the validate command.
///
/// Structural problems (enabled scenarios without sub-scenarios, questions
/// without options) are errors; a signal path without a matrix row is only
/// a warning because scoring degrades to a zero row for it.
pub fn execute_validate(options: ValidateOptions) -> Result<()> {
    let repository = load_repository(options.content.as_deref(), options.contextual.as_deref())?;
    let matrix = repository.matrix();

    let mut errors = 0usize;
    let mut warnings = 0usize;

    for scenario in repository.scenarios() {
        if scenario.enabled && scenario.sub_scenarios.is_empty() {
            eprintln!(
                "{} enabled scenario '{}' has no sub-scenarios",
                style("✗").red(),
                scenario.id
            );
            errors += 1;
        }
        for sub in &scenario.sub_scenarios {
            if !matrix.contains(&sub.signal_path) {
                eprintln!(
                    "{} sub-scenario '{}' references signal path '{}' with no matrix row",
                    style("!").yellow(),
                    sub.id,
                    sub.signal_path
                );
                warnings += 1;
            }
            for question in &sub.questions {
                if question.options.is_empty() {
                    eprintln!(
                        "{} question '{}' has no options",
                        style("✗").red(),
                        question.id
                    );
                    errors += 1;
                }
                for option in &question.options {
                    if !matrix.contains(&option.signal_path) {
                        eprintln!(
                            "{} option '{}' references signal path '{}' with no matrix row",
                            style("!").yellow(),
                            option.id,
                            option.signal_path
                        );
                        warnings += 1;
                    }
                }
            }
        }
        for mapping in &scenario.signal_path_mappings {
            if !matrix.contains(&mapping.signal_path) {
                eprintln!(
                    "{} mapping for signal path '{}' has no matrix row",
                    style("!").yellow(),
                    mapping.signal_path
                );
                warnings += 1;
            }
        }
    }

    let known_sub_ids: Vec<&str> = repository
        .scenarios()
        .iter()
        .flat_map(|scenario| scenario.sub_scenarios.iter())
        .map(|sub| sub.id.as_str())
        .collect();
    let known_option_ids: Vec<&str> = repository
        .scenarios()
        .iter()
        .flat_map(|scenario| scenario.sub_scenarios.iter())
        .flat_map(|sub| sub.questions.iter())
        .flat_map(|question| question.options.iter())
        .map(|option| option.id.as_str())
        .collect();

    for key in repository.contextual().entries.keys() {
        let Some((sub_id, _signal_path)) = key.split_once(':') else {
            eprintln!(
                "{} contextual key '{}' is not '<subScenarioId>:<signalPath>'",
                style("✗").red(),
                key
            );
            errors += 1;
            continue;
        };
        if !known_sub_ids.contains(&sub_id) {
            eprintln!(
                "{} contextual key '{}' references unknown sub-scenario '{}'",
                style("!").yellow(),
                key,
                sub_id
            );
            warnings += 1;
        }
    }
    for option_id in repository.contextual().answer_modifiers.keys() {
        if !known_option_ids.contains(&option_id.as_str()) {
            eprintln!(
                "{} answer modifier references unknown option '{}'",
                style("!").yellow(),
                option_id
            );
            warnings += 1;
        }
    }

    if errors > 0 {
        eprintln!(
            "{} validation failed: {} error(s), {} warning(s)",
            style("✗").red(),
            errors,
            warnings
        );
        std::process::exit(1);
    }
    println!(
        "{} content is valid ({} scenario(s), {} matrix row(s), {} warning(s))",
        style("✓").green(),
        repository.scenarios().len(),
        matrix.len(),
        warnings
    );
    Ok(())
}
