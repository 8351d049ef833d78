//! Recommendation output types.

use serde::{Deserialize, Serialize};

use crate::content::types::OfferReference;
use crate::matrix::OfferingName;
use crate::scoring::types::{OfferingScore, SignalPathScore};

/// Narrative lists after the contextual/mapping fallback chain, modifier
/// injection, and capping have been applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedContent {
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
    pub approach: Vec<String>,
    pub capabilities: Vec<String>,
    pub tech_stack: Vec<String>,
}

/// The complete result object handed to the rendering shell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_group: Option<String>,
    pub scenario_title: String,
    pub sub_scenario_text: String,

    pub primary_offering: OfferingName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting_offering: Option<OfferingName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional_offering: Option<OfferingName>,
    pub offering_scores: Vec<OfferingScore>,

    pub primary_signal_path: String,
    pub primary_recommendation: String,
    pub primary_description: String,
    pub primary_tech_stack: Vec<String>,

    pub supporting_signal_path: String,
    pub supporting_capability: String,
    pub supporting_description: String,

    pub confidence: u8,
    pub signal_scores: Vec<SignalPathScore>,

    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
    pub approach: Vec<String>,
    pub capabilities: Vec<String>,
    pub offers: Vec<OfferReference>,
}
