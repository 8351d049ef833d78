//! Default UI label registry.
//!
//! Every user-visible string the shell renders has a key here, so admin
//! overrides can replace any of them without touching content. Keys are
//! `"screen.element"`.

use std::collections::HashMap;

/// Authored defaults for every label key.
pub const DEFAULT_LABELS: &[(&str, &str)] = &[
    ("landing.title", "What brings you here today?"),
    ("landing.subtitle", "Pick the situation closest to yours"),
    ("landing.start", "Get Started"),
    ("scenario.title", "Choose your scenario"),
    ("scenario.comingSoon", "Coming Soon"),
    ("subScenario.title", "Which of these fits best?"),
    ("questions.title", "A few quick questions"),
    ("questions.back", "Back"),
    ("questions.progress", "Question {current} of {total}"),
    ("results.title", "Your recommendation"),
    ("results.confidence", "Confidence"),
    ("results.primaryHeading", "Recommended focus"),
    ("results.supportingHeading", "Supported by"),
    ("results.optionalHeading", "Worth considering"),
    ("results.challengesHeading", "Challenges we heard"),
    ("results.solutionsHeading", "How we address them"),
    ("results.approachHeading", "Suggested approach"),
    ("results.capabilitiesHeading", "Key capabilities"),
    ("results.techStackHeading", "Technology stack"),
    ("results.offersHeading", "Explore further"),
    ("results.startOver", "Start Over"),
    ("results.offeringLabel.Data", "Data Platform"),
    ("results.offeringLabel.AI", "AI & Machine Learning"),
    ("results.offeringLabel.AMM", "Application Modernization"),
    ("results.offeringLabel.DPDE", "Developer Platform Engineering"),
];

/// Label lookup with admin overrides layered over the defaults.
///
/// Resolution order is override, then default, then the key itself. The
/// key fallback keeps a typo visible instead of rendering a blank.
#[derive(Debug, Clone, Default)]
pub struct LabelCatalog {
    overrides: HashMap<String, String>,
}

impl LabelCatalog {
    pub fn new(overrides: HashMap<String, String>) -> Self {
        LabelCatalog { overrides }
    }

    pub fn get<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(value) = self.overrides.get(key) {
            return value;
        }
        DEFAULT_LABELS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or(key)
    }

    /// Display label for an offering, via the `results.offeringLabel.*` keys.
    pub fn offering(&self, offering: crate::matrix::OfferingName) -> String {
        let key = format!("results.offeringLabel.{}", offering.as_str());
        if let Some(value) = self.overrides.get(&key) {
            return value.clone();
        }
        DEFAULT_LABELS
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| (*v).to_string())
            .unwrap_or_else(|| offering.as_str().to_string())
    }
}
