//! Recommendation assembly.
//!
//! Joins the scoring result with resolved narrative content into the one
//! object the rendering shell consumes. Missing mappings produce empty
//! narrative fields, never errors.

use crate::content::types::{Scenario, SubScenario};
use crate::recommend::types::{Recommendation, ResolvedContent};
use crate::scoring::types::ScoringResult;

/// Builds the final result object for one completed questionnaire.
pub fn build_recommendation(
    scenario: &Scenario,
    sub: &SubScenario,
    scoring: &ScoringResult,
    resolved: ResolvedContent,
) -> Recommendation {
    let primary_signal_path = scoring.primary_signal_path().to_string();
    let primary_mapping = scenario.signal_path_mapping(&primary_signal_path);

    let supporting_signal_path = scoring.supporting_signal_path().unwrap_or("").to_string();
    let supporting_mapping = scenario.signal_path_mapping(&supporting_signal_path);

    Recommendation {
        offering_group: scenario.offering_group.clone(),
        scenario_title: scenario.title.clone(),
        sub_scenario_text: sub.text.clone(),

        primary_offering: scoring.primary,
        supporting_offering: scoring.supporting,
        optional_offering: scoring.optional,
        offering_scores: scoring.offering_scores.clone(),

        primary_recommendation: primary_mapping
            .map(|mapping| mapping.primary_recommendation.clone())
            .unwrap_or_default(),
        primary_description: primary_mapping
            .map(|mapping| mapping.description.clone())
            .unwrap_or_default(),
        primary_tech_stack: resolved.tech_stack,
        primary_signal_path,

        supporting_capability: supporting_mapping
            .map(|mapping| mapping.supporting_capability.clone())
            .unwrap_or_default(),
        supporting_description: supporting_mapping
            .map(|mapping| mapping.description.clone())
            .unwrap_or_default(),
        supporting_signal_path,

        confidence: scoring.confidence,
        signal_scores: scoring.signal_scores.clone(),

        challenges: resolved.challenges,
        solutions: resolved.solutions,
        approach: resolved.approach,
        capabilities: resolved.capabilities,
        offers: primary_mapping
            .map(|mapping| mapping.offers.clone())
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::OfferingName;
    use crate::scoring::types::{OfferingScore, SignalPathScore};

    fn scenario() -> Scenario {
        serde_json::from_str(
            r#"{
                "id": "modernize",
                "title": "Modernize",
                "description": "Modernize the estate",
                "enabled": true,
                "offeringGroup": "Platform",
                "subScenarios": [{
                    "id": "sub-1",
                    "text": "Modernize the data platform",
                    "signalPath": "Data Platform Modernization",
                    "weight": 3,
                    "questions": []
                }],
                "signalPathMappings": [
                    {
                        "signalPath": "Data Platform Modernization",
                        "primaryRecommendation": "Adopt a governed lakehouse",
                        "supportingCapability": "Unified governance",
                        "description": "Primary description",
                        "offers": [{
                            "id": "offer-1",
                            "title": "Lakehouse demo",
                            "description": "Recorded walkthrough",
                            "type": "demo",
                            "referenceUrl": "https://example.com/demo"
                        }]
                    },
                    {
                        "signalPath": "AI-Ready Data Foundation",
                        "primaryRecommendation": "Prepare data for AI",
                        "supportingCapability": "Feature pipelines",
                        "description": "Supporting description"
                    }
                ]
            }"#,
        )
        .expect("scenario fixture")
    }

    fn scoring() -> ScoringResult {
        ScoringResult {
            offering_scores: vec![
                OfferingScore { offering: OfferingName::Data, score: 30 },
                OfferingScore { offering: OfferingName::Ai, score: 14 },
                OfferingScore { offering: OfferingName::Amm, score: 0 },
                OfferingScore { offering: OfferingName::Dpde, score: 0 },
            ],
            primary: OfferingName::Data,
            supporting: Some(OfferingName::Ai),
            optional: None,
            signal_scores: vec![
                SignalPathScore {
                    signal_path: "Data Platform Modernization".to_string(),
                    weight: 9,
                },
                SignalPathScore {
                    signal_path: "AI-Ready Data Foundation".to_string(),
                    weight: 4,
                },
            ],
            confidence: 68,
        }
    }

    #[test]
    fn test_narratives_come_from_ranked_mappings() {
        let scenario = scenario();
        let sub = scenario.sub_scenarios[0].clone();
        let recommendation =
            build_recommendation(&scenario, &sub, &scoring(), ResolvedContent::default());
        assert_eq!(recommendation.primary_recommendation, "Adopt a governed lakehouse");
        assert_eq!(recommendation.primary_description, "Primary description");
        // Supporting narrative comes from the second-ranked signal path.
        assert_eq!(recommendation.supporting_signal_path, "AI-Ready Data Foundation");
        assert_eq!(recommendation.supporting_capability, "Feature pipelines");
        assert_eq!(recommendation.supporting_description, "Supporting description");
        // Offers come from the primary mapping.
        assert_eq!(recommendation.offers.len(), 1);
        assert_eq!(recommendation.offering_group.as_deref(), Some("Platform"));
    }

    #[test]
    fn test_missing_supporting_mapping_yields_empty_narrative() {
        let scenario = scenario();
        let sub = scenario.sub_scenarios[0].clone();
        let mut scoring = scoring();
        scoring.signal_scores.truncate(1);
        let recommendation =
            build_recommendation(&scenario, &sub, &scoring, ResolvedContent::default());
        assert_eq!(recommendation.supporting_signal_path, "");
        assert_eq!(recommendation.supporting_capability, "");
        assert_eq!(recommendation.supporting_description, "");
    }
}
