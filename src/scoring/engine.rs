//! Weighted scoring.
//!
//! Scores are built in two folds over the same inputs: per-offering totals
//! (answer weight times the matrix multiplier for that offering) and
//! per-signal-path totals (raw answer weights). The sub-scenario itself
//! seeds both folds, so a visitor who answers nothing still gets a ranked
//! result.

use crate::content::types::SubScenario;
use crate::matrix::{OfferingName, SignalMatrix};
use crate::scoring::types::{Answer, OfferingScore, ScoringResult, SignalPathScore, Thresholds};

/// Reported when no signal contributed anything, so the result page still
/// has a number to show.
const FALLBACK_CONFIDENCE: u8 = 70;

/// Confidence is capped below 100; the kiosk never claims certainty.
const CONFIDENCE_CEILING: u8 = 95;

/// Scores one completed questionnaire.
///
/// Deterministic for identical inputs: offering ranking is a stable sort
/// over `OfferingName::ALL` order, and signal ranking is a stable sort over
/// first-touch insertion order with the seed path inserted first.
pub fn score(
    sub: &SubScenario,
    answers: &[Answer],
    matrix: &SignalMatrix,
    thresholds: &Thresholds,
) -> ScoringResult {
    let mut totals = [0u32; 4];
    let mut signals: Vec<SignalPathScore> = Vec::new();

    accumulate(&mut totals, &mut signals, &sub.signal_path, sub.weight, matrix);
    for answer in answers {
        accumulate(&mut totals, &mut signals, &answer.signal_path, answer.weight, matrix);
    }

    let mut offering_scores: Vec<OfferingScore> = OfferingName::ALL
        .iter()
        .zip(totals.iter())
        .map(|(offering, score)| OfferingScore {
            offering: *offering,
            score: *score,
        })
        .collect();
    offering_scores.sort_by(|a, b| b.score.cmp(&a.score));

    signals.sort_by(|a, b| b.weight.cmp(&a.weight));

    let primary = offering_scores[0];
    let supporting = tier_candidate(&offering_scores, 1, thresholds.supporting, thresholds, primary.score);
    let optional = tier_candidate(&offering_scores, 2, thresholds.optional, thresholds, primary.score);

    let total: u32 = totals.iter().sum();
    let confidence = confidence(primary.score, total);

    ScoringResult {
        offering_scores,
        primary: primary.offering,
        supporting,
        optional,
        signal_scores: signals,
        confidence,
    }
}

fn accumulate(
    totals: &mut [u32; 4],
    signals: &mut Vec<SignalPathScore>,
    signal_path: &str,
    weight: u32,
    matrix: &SignalMatrix,
) {
    let row = matrix.row(signal_path);
    for (slot, offering) in totals.iter_mut().zip(OfferingName::ALL.iter()) {
        *slot += weight * row.get(*offering);
    }
    match signals.iter_mut().find(|entry| entry.signal_path == signal_path) {
        Some(entry) => entry.weight += weight,
        None => signals.push(SignalPathScore {
            signal_path: signal_path.to_string(),
            weight,
        }),
    }
}

/// A tier candidate must sit at exactly the given rank, clear the fraction
/// of the primary score, and clear the absolute floor.
fn tier_candidate(
    ranked: &[OfferingScore],
    rank: usize,
    fraction: f64,
    thresholds: &Thresholds,
    primary_score: u32,
) -> Option<OfferingName> {
    let candidate = ranked.get(rank)?;
    let relative_floor = primary_score as f64 * fraction;
    if (candidate.score as f64) >= relative_floor && candidate.score >= thresholds.min_absolute {
        Some(candidate.offering)
    } else {
        None
    }
}

fn confidence(primary_score: u32, total: u32) -> u8 {
    if total == 0 {
        return FALLBACK_CONFIDENCE;
    }
    let pct = (primary_score as f64 / total as f64 * 100.0).round() as u8;
    pct.min(CONFIDENCE_CEILING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::SignalOfferingMapping;
    use pretty_assertions::assert_eq;

    fn matrix() -> SignalMatrix {
        SignalMatrix::from_rows(&[
            SignalOfferingMapping {
                signal_path: "Data Platform Modernization".to_string(),
                data: 3,
                ai: 1,
                amm: 0,
                dpde: 0,
            },
            SignalOfferingMapping {
                signal_path: "AI-Ready Data Foundation".to_string(),
                data: 1,
                ai: 3,
                amm: 0,
                dpde: 0,
            },
            SignalOfferingMapping {
                signal_path: "App Modernization".to_string(),
                data: 0,
                ai: 0,
                amm: 3,
                dpde: 0,
            },
        ])
    }

    fn sub(signal_path: &str, weight: u32) -> SubScenario {
        SubScenario {
            id: "sub-test".to_string(),
            text: "Test sub-scenario".to_string(),
            business_meaning: String::new(),
            signal_path: signal_path.to_string(),
            weight,
            questions: vec![],
        }
    }

    fn answer(n: u32, signal_path: &str, weight: u32) -> Answer {
        Answer {
            question_id: format!("q-{}", n),
            option_id: format!("q-{}-opt", n),
            signal_path: signal_path.to_string(),
            weight,
        }
    }

    #[test]
    fn test_worked_example() {
        // Seed 3 on a Data-heavy path plus five answers on the same path
        // family lands Data at 54, AI at 18, confidence 75.
        let sub = sub("Data Platform Modernization", 3);
        let answers = vec![
            answer(1, "Data Platform Modernization", 3),
            answer(2, "Data Platform Modernization", 3),
            answer(3, "Data Platform Modernization", 3),
            answer(4, "Data Platform Modernization", 3),
            answer(5, "Data Platform Modernization", 3),
        ];
        let result = score(&sub, &answers, &matrix(), &Thresholds::default());
        assert_eq!(result.primary, OfferingName::Data);
        assert_eq!(result.primary_score(), 54);
        assert_eq!(result.offering_scores[1].score, 18);
        assert_eq!(result.offering_scores[1].offering, OfferingName::Ai);
        // 18 < 54 * 0.4, so no supporting tier.
        assert_eq!(result.supporting, None);
        assert_eq!(result.optional, None);
        assert_eq!(result.confidence, 75);
    }

    #[test]
    fn test_zero_answers_seed_only() {
        let sub = sub("App Modernization", 2);
        let result = score(&sub, &[], &matrix(), &Thresholds::default());
        assert_eq!(result.primary, OfferingName::Amm);
        assert_eq!(result.primary_score(), 6);
        assert_eq!(result.signal_scores.len(), 1);
        assert_eq!(result.signal_scores[0].signal_path, "App Modernization");
    }

    #[test]
    fn test_unknown_paths_degrade_to_fallback_confidence() {
        let sub = sub("No Such Path", 3);
        let answers = vec![answer(1, "Another Missing Path", 2)];
        let result = score(&sub, &answers, &matrix(), &Thresholds::default());
        assert_eq!(result.primary_score(), 0);
        assert_eq!(result.confidence, 70);
        // Enumeration order decides the all-zero ranking.
        assert_eq!(result.primary, OfferingName::Data);
    }

    #[test]
    fn test_tie_break_is_enumeration_order() {
        let sub = sub("Data Platform Modernization", 1);
        let answers = vec![answer(1, "AI-Ready Data Foundation", 1)];
        // Data: 3+1 = 4, AI: 1+3 = 4. Equal totals, Data wins by order.
        let result = score(&sub, &answers, &matrix(), &Thresholds::default());
        assert_eq!(result.offering_scores[0].score, result.offering_scores[1].score);
        assert_eq!(result.primary, OfferingName::Data);
    }

    #[test]
    fn test_supporting_tier_requires_both_floors() {
        // AMM answers strong enough to clear 40% of primary and the
        // absolute floor.
        let sub = sub("Data Platform Modernization", 3);
        let answers = vec![
            answer(1, "Data Platform Modernization", 3),
            answer(2, "App Modernization", 3),
            answer(3, "App Modernization", 3),
        ];
        let result = score(&sub, &answers, &matrix(), &Thresholds::default());
        // Data: 6*3 = 18, AMM: 6*3 = 18, AI: 6*1 = 6.
        assert_eq!(result.primary, OfferingName::Data);
        assert_eq!(result.supporting, Some(OfferingName::Amm));
        // AI at 6 misses the absolute floor of 10 for the optional tier.
        assert_eq!(result.optional, None);
    }

    #[test]
    fn test_optional_measured_against_primary() {
        // The optional floor is a fraction of the primary score, not the
        // supporting score.
        let thresholds = Thresholds {
            supporting: 0.4,
            optional: 0.25,
            min_absolute: 4,
        };
        let sub = sub("Data Platform Modernization", 2);
        let answers = vec![
            answer(1, "AI-Ready Data Foundation", 2),
            answer(2, "App Modernization", 2),
        ];
        // Data: 2*3 + 2*1 = 8, AI: 2*1 + 2*3 = 8, AMM: 2*3 = 6.
        let result = score(&sub, &answers, &matrix(), &thresholds);
        assert_eq!(result.primary, OfferingName::Data);
        assert_eq!(result.supporting, Some(OfferingName::Ai));
        // 6 >= 8 * 0.25 and 6 >= 4.
        assert_eq!(result.optional, Some(OfferingName::Amm));
    }

    #[test]
    fn test_signal_ranking_seed_wins_ties() {
        let sub = sub("Data Platform Modernization", 2);
        let answers = vec![answer(1, "App Modernization", 2)];
        let result = score(&sub, &answers, &matrix(), &Thresholds::default());
        assert_eq!(result.signal_scores[0].signal_path, "Data Platform Modernization");
        assert_eq!(result.signal_scores[1].signal_path, "App Modernization");
        assert_eq!(result.supporting_signal_path(), Some("App Modernization"));
    }

    #[test]
    fn test_monotonicity() {
        let sub = sub("Data Platform Modernization", 2);
        let base = vec![answer(1, "App Modernization", 2)];
        let mut extended = base.clone();
        extended.push(answer(2, "Data Platform Modernization", 3));
        let before = score(&sub, &base, &matrix(), &Thresholds::default());
        let after = score(&sub, &extended, &matrix(), &Thresholds::default());
        let data_before = before
            .offering_scores
            .iter()
            .find(|entry| entry.offering == OfferingName::Data)
            .map(|entry| entry.score);
        let data_after = after
            .offering_scores
            .iter()
            .find(|entry| entry.offering == OfferingName::Data)
            .map(|entry| entry.score);
        assert!(data_after >= data_before);
    }

    #[test]
    fn test_confidence_ceiling() {
        let sub = sub("App Modernization", 3);
        let answers = vec![answer(1, "App Modernization", 3)];
        // AMM is the only nonzero offering, so raw pct would be 100.
        let result = score(&sub, &answers, &matrix(), &Thresholds::default());
        assert_eq!(result.confidence, 95);
    }

    #[test]
    fn test_determinism() {
        let sub = sub("Data Platform Modernization", 3);
        let answers = vec![
            answer(1, "AI-Ready Data Foundation", 2),
            answer(2, "App Modernization", 1),
            answer(3, "Data Platform Modernization", 3),
        ];
        let first = score(&sub, &answers, &matrix(), &Thresholds::default());
        let second = score(&sub, &answers, &matrix(), &Thresholds::default());
        assert_eq!(first, second);
    }
}
