//! Interactive kiosk session in the terminal.

use std::path::PathBuf;

use anyhow::{Context, Result};
use console::style;
use dialoguer::{theme::ColorfulTheme, Select};

use crate::commands::{load_repository, output};
use crate::config::NavigatorConfig;
use crate::content::LabelCatalog;
use crate::overrides::{JsonFileStore, OverrideRecord, OverrideStore};
use crate::session::{NavigatorSession, Step};

/// Options for the run command.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub content: Option<PathBuf>,
    pub contextual: Option<PathBuf>,
    pub overrides: Option<PathBuf>,
    pub config: Option<PathBuf>,
}

/// Execute the run command: walk one visitor through the full flow.
pub fn execute_run(options: RunOptions) -> Result<()> {
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

    println!("{}", style(labels.get("landing.title")).bold());
    println!("{}", style(labels.get("landing.subtitle")).dim());
    session.start()?;

    loop {
        match session.step() {
            Step::ScenarioSelect => {
                let scenarios: Vec<_> = session.scenarios().to_vec();
                let items: Vec<String> = scenarios
                    .iter()
                    .map(|scenario| {
                        if scenario.enabled {
                            scenario.title.clone()
                        } else {
                            format!(
                                "{} ({})",
                                scenario.title,
                                labels.get("scenario.comingSoon")
                            )
                        }
                    })
                    .collect();
                let choice = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt(labels.get("scenario.title"))
                    .items(&items)
                    .default(0)
                    .interact()?;
                let scenario = &scenarios[choice];
                if !scenario.enabled {
                    println!(
                        "{} {}",
                        style("!").yellow(),
                        labels.get("scenario.comingSoon")
                    );
                    continue;
                }
                session.select_scenario(&scenario.id)?;
            }
            Step::SubScenarioSelect => {
                let scenario = session
                    .current_scenario()
                    .context("no scenario selected")?
                    .clone();
                let mut items: Vec<String> = scenario
                    .sub_scenarios
                    .iter()
                    .map(|sub| sub.text.clone())
                    .collect();
                items.push(format!("← {}", labels.get("questions.back")));
                let choice = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt(labels.get("subScenario.title"))
                    .items(&items)
                    .default(0)
                    .interact()?;
                if choice == scenario.sub_scenarios.len() {
                    session.go_back()?;
                    continue;
                }
                session.select_sub_scenario(&scenario.sub_scenarios[choice].id)?;
            }
            Step::Questions => {
                let question = session
                    .current_question()
                    .context("no question pending")?
                    .clone();
                let total = session
                    .current_sub_scenario()
                    .map(|sub| sub.questions.len())
                    .unwrap_or(0);
                let prompt = format!(
                    "[{}/{}] {}",
                    session.question_index() + 1,
                    total,
                    question.text
                );
                let mut items: Vec<String> = question
                    .options
                    .iter()
                    .map(|option| option.text.clone())
                    .collect();
                items.push(format!("← {}", labels.get("questions.back")));
                let choice = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt(prompt)
                    .items(&items)
                    .default(0)
                    .interact()?;
                if choice == question.options.len() {
                    session.go_back()?;
                    continue;
                }
                session.answer(&question.options[choice].id)?;
            }
            Step::Results => {
                let recommendation = session
                    .recommendation()
                    .context("session finished without a recommendation")?;
                output::render_recommendation(recommendation, &labels);
                return Ok(());
            }
            Step::Landing => {
                session.start()?;
            }
        }
    }
}
