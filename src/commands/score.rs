//! Non-interactive scoring from CLI arguments.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use crate::commands::{load_repository, output};
use crate::config::NavigatorConfig;
use crate::content::LabelCatalog;
use crate::overrides::{JsonFileStore, OverrideRecord, OverrideStore};
use crate::session::{NavigatorSession, Step};

/// Options for the score command.
#[derive(Debug, Clone)]
pub struct ScoreOptions {
    pub content: Option<PathBuf>,
    pub contextual: Option<PathBuf>,
    pub overrides: Option<PathBuf>,
    pub config: Option<PathBuf>,
    /// Scenario to select.
    pub scenario: String,
    /// Sub-scenario to select.
    pub sub_scenario: String,
    /// Answers, one per question in order. Either a bare option id or
    /// `question-id:option-id`.
    pub picks: Vec<String>,
    /// Print the recommendation as JSON instead of a styled summary.
    pub json: bool,
}

/// Execute the score command by driving a full session.
pub fn execute_score(options: ScoreOptions) -> Result<()> {
    let repository = load_repository(options.content.as_deref(), options.contextual.as_deref())?;
    let record = match &options.overrides {
        Some(path) => JsonFileStore::new(path).load()?,
        None => OverrideRecord::default(),
    };
    let config = match &options.config {
        Some(path) => NavigatorConfig::load_or_default(path)?,
        None => NavigatorConfig::default(),
    };
    let labels = LabelCatalog::new(record.labels.clone());

    let mut session = NavigatorSession::new(&repository, &record, config);
    session.start()?;
    session.select_scenario(&options.scenario)?;
    session.select_sub_scenario(&options.sub_scenario)?;

    for pick in &options.picks {
        if session.step() != Step::Questions {
            bail!("more picks than questions: '{}' has no question left", pick);
        }
        let (expected_question, option_id) = match pick.split_once(':') {
            Some((question_id, option_id)) => (Some(question_id), option_id),
            None => (None, pick.as_str()),
        };
        if let (Some(expected), Some(current)) = (expected_question, session.current_question()) {
            if current.id != expected {
                bail!(
                    "pick '{}' targets question '{}' but the current question is '{}'",
                    pick,
                    expected,
                    current.id
                );
            }
        }
        session.answer(option_id)?;
    }

    if session.step() != Step::Results {
        let total = session
            .current_sub_scenario()
            .map(|sub| sub.questions.len())
            .unwrap_or(0);
        bail!(
            "sub-scenario '{}' has {} question(s) but only {} pick(s) were given",
            options.sub_scenario,
            total,
            options.picks.len()
        );
    }

    let recommendation = session
        .recommendation()
        .context("session finished without a recommendation")?;
    if options.json {
        println!("{}", serde_json::to_string_pretty(recommendation)?);
    } else {
        output::render_recommendation(recommendation, &labels);
    }
    Ok(())
}
