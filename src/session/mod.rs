//! The kiosk session state machine.
//!
//! A session walks one visitor through Landing, scenario selection,
//! sub-scenario selection, the question flow, and the result page. The
//! override record and config are merged once at construction, so a session
//! is a consistent snapshot even if an admin edits overrides mid-flow.
//!
//! Methods called in a step that does not permit them return
//! `InvalidTransition`; selections naming ids that do not exist return
//! `UnknownId`. The answers list and question index move in lockstep, both
//! forward and during backward navigation.

use tracing::debug;

use crate::config::NavigatorConfig;
use crate::content::types::{ContextualContentFile, Question, Scenario, SubScenario};
use crate::content::ContentRepository;
use crate::error::{NavigatorError, Result};
use crate::matrix::SignalMatrix;
use crate::overrides::{merge_scenarios, OverrideRecord};
use crate::recommend::{build_recommendation, resolve_content, Recommendation};
use crate::scoring::{score, Answer, Thresholds};

/// Where the visitor is in the flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Landing,
    ScenarioSelect,
    SubScenarioSelect,
    Questions,
    Results,
}

#[derive(Debug, Clone)]
pub struct NavigatorSession {
    scenarios: Vec<Scenario>,
    matrix: SignalMatrix,
    thresholds: Thresholds,
    contextual: ContextualContentFile,

    step: Step,
    scenario_id: Option<String>,
    sub_scenario_id: Option<String>,
    answers: Vec<Answer>,
    question_index: usize,
    recommendation: Option<Recommendation>,
}

impl NavigatorSession {
    /// Builds a session over a merged snapshot of content, overrides, and
    /// config.
    pub fn new(
        repository: &ContentRepository,
        overrides: &OverrideRecord,
        mut config: NavigatorConfig,
    ) -> Self {
        let scenarios = merge_scenarios(repository.scenarios(), &overrides.scenarios);
        let matrix = repository.matrix().merged(&overrides.signal_matrix);
        config.apply_overrides(&overrides.config);
        NavigatorSession {
            scenarios,
            matrix,
            thresholds: config.thresholds(),
            contextual: repository.contextual().clone(),
            step: Step::Landing,
            scenario_id: None,
            sub_scenario_id: None,
            answers: Vec::new(),
            question_index: 0,
            recommendation: None,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// The merged scenario list this session runs against.
    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        self.recommendation.as_ref()
    }

    pub fn current_scenario(&self) -> Option<&Scenario> {
        let id = self.scenario_id.as_deref()?;
        self.scenarios.iter().find(|scenario| scenario.id == id)
    }

    pub fn current_sub_scenario(&self) -> Option<&SubScenario> {
        let id = self.sub_scenario_id.as_deref()?;
        self.current_scenario()?.sub_scenario(id)
    }

    /// The question the visitor is currently on.
    pub fn current_question(&self) -> Option<&Question> {
        self.current_sub_scenario()?.questions.get(self.question_index)
    }

    pub fn start(&mut self) -> Result<()> {
        if self.step != Step::Landing {
            return Err(NavigatorError::InvalidTransition(format!(
                "start called in {:?}",
                self.step
            )));
        }
        debug!("session: Landing -> ScenarioSelect");
        self.step = Step::ScenarioSelect;
        Ok(())
    }

    /// Selects a scenario. Disabled scenarios are listed but not
    /// selectable; choosing one is a transition error, not an unknown id.
    pub fn select_scenario(&mut self, id: &str) -> Result<()> {
        if self.step != Step::ScenarioSelect {
            return Err(NavigatorError::InvalidTransition(format!(
                "select_scenario called in {:?}",
                self.step
            )));
        }
        let scenario = self
            .scenarios
            .iter()
            .find(|scenario| scenario.id == id)
            .ok_or_else(|| NavigatorError::UnknownId {
                kind: "scenario",
                id: id.to_string(),
            })?;
        if !scenario.enabled {
            return Err(NavigatorError::InvalidTransition(format!(
                "scenario {} is not yet available",
                id
            )));
        }
        debug!(scenario = id, "session: ScenarioSelect -> SubScenarioSelect");
        self.scenario_id = Some(id.to_string());
        self.step = Step::SubScenarioSelect;
        Ok(())
    }

    /// Selects a sub-scenario and enters the question flow. A sub-scenario
    /// with no questions finalizes immediately.
    pub fn select_sub_scenario(&mut self, id: &str) -> Result<()> {
        if self.step != Step::SubScenarioSelect {
            return Err(NavigatorError::InvalidTransition(format!(
                "select_sub_scenario called in {:?}",
                self.step
            )));
        }
        let scenario = self.current_scenario().ok_or_else(|| {
            NavigatorError::InvalidTransition("no scenario selected".to_string())
        })?;
        let sub = scenario
            .sub_scenario(id)
            .ok_or_else(|| NavigatorError::UnknownId {
                kind: "sub-scenario",
                id: id.to_string(),
            })?;
        let question_count = sub.questions.len();
        debug!(sub_scenario = id, "session: SubScenarioSelect -> Questions");
        self.sub_scenario_id = Some(id.to_string());
        self.answers.clear();
        self.question_index = 0;
        self.step = Step::Questions;
        if question_count == 0 {
            self.finalize()?;
        }
        Ok(())
    }

    /// Records the answer to the current question and advances. Answering
    /// the last question finalizes the session.
    pub fn answer(&mut self, option_id: &str) -> Result<()> {
        if self.step != Step::Questions {
            return Err(NavigatorError::InvalidTransition(format!(
                "answer called in {:?}",
                self.step
            )));
        }
        let question = self.current_question().ok_or_else(|| {
            NavigatorError::InvalidTransition("no question pending".to_string())
        })?;
        let option = question
            .option(option_id)
            .ok_or_else(|| NavigatorError::UnknownId {
                kind: "option",
                id: option_id.to_string(),
            })?;
        let answer = Answer {
            question_id: question.id.clone(),
            option_id: option.id.clone(),
            signal_path: option.signal_path.clone(),
            weight: option.weight,
        };
        debug!(
            question = answer.question_id.as_str(),
            option = answer.option_id.as_str(),
            "session: answer recorded"
        );
        self.answers.push(answer);
        self.question_index += 1;
        let total = self
            .current_sub_scenario()
            .map(|sub| sub.questions.len())
            .unwrap_or(0);
        if self.question_index >= total {
            self.finalize()?;
        }
        Ok(())
    }

    /// Steps backward one screen. Within the question flow this rewinds
    /// one question and discards its answer.
    pub fn go_back(&mut self) -> Result<()> {
        match self.step {
            Step::Landing => Err(NavigatorError::InvalidTransition(
                "go_back called on the landing step".to_string(),
            )),
            Step::ScenarioSelect => {
                debug!("session: ScenarioSelect -> Landing");
                self.step = Step::Landing;
                Ok(())
            }
            Step::SubScenarioSelect => {
                debug!("session: SubScenarioSelect -> ScenarioSelect");
                self.scenario_id = None;
                self.sub_scenario_id = None;
                self.step = Step::ScenarioSelect;
                Ok(())
            }
            Step::Questions => {
                if self.question_index > 0 {
                    self.question_index -= 1;
                    self.answers.pop();
                    debug!(index = self.question_index, "session: question rewound");
                } else {
                    debug!("session: Questions -> SubScenarioSelect");
                    self.sub_scenario_id = None;
                    self.answers.clear();
                    self.step = Step::SubScenarioSelect;
                }
                Ok(())
            }
            Step::Results => {
                // The sub-scenario stays selected so the visitor can retake
                // the same questionnaire.
                debug!("session: Results -> SubScenarioSelect");
                self.recommendation = None;
                self.answers.clear();
                self.question_index = 0;
                self.step = Step::SubScenarioSelect;
                Ok(())
            }
        }
    }

    /// Returns the session to the landing step and clears every selection.
    pub fn reset(&mut self) {
        debug!("session: reset");
        self.step = Step::Landing;
        self.scenario_id = None;
        self.sub_scenario_id = None;
        self.answers.clear();
        self.question_index = 0;
        self.recommendation = None;
    }

    fn finalize(&mut self) -> Result<()> {
        let sub_id = self.sub_scenario_id.clone().ok_or_else(|| {
            NavigatorError::InvalidTransition("finalize without a sub-scenario".to_string())
        })?;
        let scenario = self
            .current_scenario()
            .ok_or_else(|| {
                NavigatorError::InvalidTransition("finalize without a scenario".to_string())
            })?
            .clone();
        let sub = scenario
            .sub_scenario(&sub_id)
            .ok_or_else(|| NavigatorError::UnknownId {
                kind: "sub-scenario",
                id: sub_id.clone(),
            })?;

        let scoring = score(sub, &self.answers, &self.matrix, &self.thresholds);
        let primary_path = scoring.primary_signal_path().to_string();
        let resolved = resolve_content(
            scenario.signal_path_mapping(&primary_path),
            self.contextual.entry(&sub_id, &primary_path),
            &self.answers,
            &self.contextual.answer_modifiers,
        );
        let recommendation = build_recommendation(&scenario, sub, &scoring, resolved);
        debug!(
            primary = %recommendation.primary_offering,
            confidence = recommendation.confidence,
            "session: Questions -> Results"
        );
        self.recommendation = Some(recommendation);
        self.step = Step::Results;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::OfferingName;

    fn repository() -> ContentRepository {
        let content = serde_json::from_str(
            r#"{
                "scenarios": [
                    {
                        "id": "modernize",
                        "title": "Modernize",
                        "description": "Modernize the estate",
                        "enabled": true,
                        "subScenarios": [{
                            "id": "sub-1",
                            "text": "Modernize the data platform",
                            "signalPath": "Data Platform Modernization",
                            "weight": 3,
                            "questions": [
                                {
                                    "id": "q-1",
                                    "text": "Where does your data live?",
                                    "options": [
                                        {"id": "q1-a", "text": "Warehouses", "signalPath": "Data Platform Modernization", "weight": 3},
                                        {"id": "q1-b", "text": "Spread everywhere", "signalPath": "AI-Ready Data Foundation", "weight": 2}
                                    ]
                                },
                                {
                                    "id": "q-2",
                                    "text": "What is the goal?",
                                    "options": [
                                        {"id": "q2-a", "text": "Faster reporting", "signalPath": "Data Platform Modernization", "weight": 2},
                                        {"id": "q2-b", "text": "AI readiness", "signalPath": "AI-Ready Data Foundation", "weight": 3}
                                    ]
                                }
                            ]
                        }],
                        "signalPathMappings": [{
                            "signalPath": "Data Platform Modernization",
                            "primaryRecommendation": "Adopt a governed lakehouse",
                            "supportingCapability": "Unified governance",
                            "description": "Move to a governed lakehouse",
                            "challenges": ["Fragmented data"],
                            "solutions": ["Consolidate stores"]
                        }]
                    },
                    {
                        "id": "coming-soon",
                        "title": "Coming Soon",
                        "description": "Not yet available",
                        "enabled": false,
                        "subScenarios": [],
                        "signalPathMappings": []
                    }
                ],
                "signalMappingMatrix": [
                    {"signalPath": "Data Platform Modernization", "Data": 3, "AI": 1, "AMM": 0, "DPDE": 0},
                    {"signalPath": "AI-Ready Data Foundation", "Data": 1, "AI": 3, "AMM": 0, "DPDE": 0}
                ]
            }"#,
        )
        .expect("content fixture");
        ContentRepository::from_parts(content, ContextualContentFile::default())
    }

    fn session() -> NavigatorSession {
        NavigatorSession::new(
            &repository(),
            &OverrideRecord::default(),
            NavigatorConfig::default(),
        )
    }

    #[test]
    fn test_full_flow_reaches_results() {
        let mut session = session();
        session.start().expect("start");
        session.select_scenario("modernize").expect("scenario");
        session.select_sub_scenario("sub-1").expect("sub");
        session.answer("q1-a").expect("first answer");
        assert_eq!(session.step(), Step::Questions);
        session.answer("q2-a").expect("last answer");
        assert_eq!(session.step(), Step::Results);
        let recommendation = session.recommendation().expect("recommendation");
        assert_eq!(recommendation.primary_offering, OfferingName::Data);
    }

    #[test]
    fn test_out_of_step_calls_rejected() {
        let mut session = session();
        assert!(matches!(
            session.select_scenario("modernize"),
            Err(NavigatorError::InvalidTransition(_))
        ));
        session.start().expect("start");
        assert!(matches!(
            session.answer("q1-a"),
            Err(NavigatorError::InvalidTransition(_))
        ));
        assert!(matches!(
            session.start(),
            Err(NavigatorError::InvalidTransition(_))
        ));
    }

    #[test]
    fn test_unknown_ids_rejected() {
        let mut session = session();
        session.start().expect("start");
        assert!(matches!(
            session.select_scenario("ghost"),
            Err(NavigatorError::UnknownId { kind: "scenario", .. })
        ));
        session.select_scenario("modernize").expect("scenario");
        assert!(matches!(
            session.select_sub_scenario("ghost"),
            Err(NavigatorError::UnknownId { kind: "sub-scenario", .. })
        ));
        session.select_sub_scenario("sub-1").expect("sub");
        assert!(matches!(
            session.answer("ghost"),
            Err(NavigatorError::UnknownId { kind: "option", .. })
        ));
        // A rejected answer leaves the lockstep state untouched.
        assert_eq!(session.answers().len(), 0);
        assert_eq!(session.question_index(), 0);
    }

    #[test]
    fn test_disabled_scenario_not_selectable() {
        let mut session = session();
        session.start().expect("start");
        assert!(matches!(
            session.select_scenario("coming-soon"),
            Err(NavigatorError::InvalidTransition(_))
        ));
        assert_eq!(session.step(), Step::ScenarioSelect);
    }

    #[test]
    fn test_go_back_rewinds_one_question() {
        let mut session = session();
        session.start().expect("start");
        session.select_scenario("modernize").expect("scenario");
        session.select_sub_scenario("sub-1").expect("sub");
        session.answer("q1-a").expect("answer");
        assert_eq!(session.question_index(), 1);
        session.go_back().expect("rewind");
        assert_eq!(session.question_index(), 0);
        assert!(session.answers().is_empty());
        assert_eq!(session.step(), Step::Questions);
    }

    #[test]
    fn test_go_back_from_first_question_leaves_flow() {
        let mut session = session();
        session.start().expect("start");
        session.select_scenario("modernize").expect("scenario");
        session.select_sub_scenario("sub-1").expect("sub");
        session.go_back().expect("back to sub select");
        assert_eq!(session.step(), Step::SubScenarioSelect);
        assert!(session.current_sub_scenario().is_none());
    }

    #[test]
    fn test_go_back_from_results_allows_retake() {
        let mut session = session();
        session.start().expect("start");
        session.select_scenario("modernize").expect("scenario");
        session.select_sub_scenario("sub-1").expect("sub");
        session.answer("q1-a").expect("answer");
        session.answer("q2-b").expect("answer");
        assert_eq!(session.step(), Step::Results);
        session.go_back().expect("back from results");
        assert_eq!(session.step(), Step::SubScenarioSelect);
        assert!(session.recommendation().is_none());
        assert!(session.answers().is_empty());
        // Retaking the same sub-scenario works immediately.
        session.select_sub_scenario("sub-1").expect("retake");
        assert_eq!(session.step(), Step::Questions);
    }

    #[test]
    fn test_go_back_on_landing_rejected() {
        let mut session = session();
        assert!(matches!(
            session.go_back(),
            Err(NavigatorError::InvalidTransition(_))
        ));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = session();
        session.start().expect("start");
        session.select_scenario("modernize").expect("scenario");
        session.select_sub_scenario("sub-1").expect("sub");
        session.answer("q1-a").expect("answer");
        session.reset();
        assert_eq!(session.step(), Step::Landing);
        assert!(session.current_scenario().is_none());
        assert!(session.answers().is_empty());
        assert!(session.recommendation().is_none());
    }

    #[test]
    fn test_overrides_shape_the_session() {
        let mut record = OverrideRecord::default();
        record.signal_matrix.insert(
            "Data Platform Modernization".to_string(),
            crate::overrides::MatrixPatch {
                data: Some(0),
                ai: Some(3),
                ..crate::overrides::MatrixPatch::default()
            },
        );
        let mut session =
            NavigatorSession::new(&repository(), &record, NavigatorConfig::default());
        session.start().expect("start");
        session.select_scenario("modernize").expect("scenario");
        session.select_sub_scenario("sub-1").expect("sub");
        session.answer("q1-a").expect("answer");
        session.answer("q2-a").expect("answer");
        let recommendation = session.recommendation().expect("recommendation");
        // The patched matrix flips the outcome to AI.
        assert_eq!(recommendation.primary_offering, OfferingName::Ai);
    }
}
