//! Scoring input and output types.

use serde::{Deserialize, Serialize};

use crate::matrix::OfferingName;

/// One recorded answer. Created by the session as the visitor picks options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub option_id: String,
    pub signal_path: String,
    pub weight: u32,
}

/// An offering with its accumulated score, in ranked order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferingScore {
    pub offering: OfferingName,
    pub score: u32,
}

/// A signal path with its accumulated weight, in ranked order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignalPathScore {
    pub signal_path: String,
    pub weight: u32,
}

/// Tiering thresholds, normally derived from `NavigatorConfig`.
///
/// Both fractions are measured against the primary offering's score; the
/// optional tier is not relative to the supporting score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub supporting: f64,
    pub optional: f64,
    pub min_absolute: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            supporting: 0.4,
            optional: 0.25,
            min_absolute: 10,
        }
    }
}

/// Everything the scoring engine derives from one completed questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringResult {
    /// All four offerings, ranked by score descending.
    pub offering_scores: Vec<OfferingScore>,
    pub primary: OfferingName,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supporting: Option<OfferingName>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub optional: Option<OfferingName>,
    /// Signal paths touched by the seed or an answer, ranked by weight.
    pub signal_scores: Vec<SignalPathScore>,
    /// Percentage 0..=95.
    pub confidence: u8,
}

impl ScoringResult {
    pub fn primary_score(&self) -> u32 {
        self.offering_scores
            .first()
            .map(|entry| entry.score)
            .unwrap_or(0)
    }

    /// The top-ranked signal path. Always present: the seed path is
    /// inserted before any answer is folded.
    pub fn primary_signal_path(&self) -> &str {
        self.signal_scores
            .first()
            .map(|entry| entry.signal_path.as_str())
            .unwrap_or("")
    }

    /// The second-ranked signal path, if any answer touched another path.
    pub fn supporting_signal_path(&self) -> Option<&str> {
        self.signal_scores
            .get(1)
            .map(|entry| entry.signal_path.as_str())
    }
}
