//! Quiz session state machine
//!
//! A session walks through one [`QuestionSet`]. The state is a plain record
//! ([`SessionState`]) that only changes through the transitions on
//! [`QuizSession`]: `select_option`, `request_help`/`complete_help`,
//! `advance` and `reset`.

use std::fmt::Display;
use std::sync::Arc;

use super::error::QuizError;
use crate::catalog::{Question, QuestionSet, Topic};

/// Shown in place of the supplemental explanation when the provider fails
pub const FALLBACK_EXPLANATION: &str = "Sorry, I could not get an explanation at this time.";

/// Observable session fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    /// Index of the question on screen
    pub current_index: usize,
    /// Correct answers so far
    pub score: usize,
    /// Option chosen for the current question
    pub selected_option: Option<usize>,
    /// Whether the canned explanation is shown
    pub explanation_visible: bool,
    /// Text from the explanation provider (or the fallback)
    pub supplemental_explanation: Option<String>,
    /// A provider call for the current question is in flight
    pub provider_pending: bool,
    /// Help was requested for the current question
    pub help_requested: bool,
}

/// Result of answering a question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Correct,
    Incorrect,
}

/// Tag identifying which question a help request was made for.
///
/// The generation changes on every `advance` and `reset`, so a ticket from a
/// previous question or a previous topic never matches again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpTicket {
    generation: u64,
    question_index: usize,
}

impl HelpTicket {
    pub fn question_index(&self) -> usize {
        self.question_index
    }
}

/// Everything needed to ask the explanation provider about the current question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpRequest {
    pub ticket: HelpTicket,
    pub topic: Topic,
    pub concept: String,
}

/// What happened to a provider result handed back to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpDelivery {
    /// Stored as the supplemental explanation
    Applied,
    /// The session moved on; result dropped
    Stale,
}

/// One run through a question set
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Arc<QuestionSet>,
    state: SessionState,
    generation: u64,
}

impl QuizSession {
    /// Start a session at the first question with a zero score
    pub fn new(questions: Arc<QuestionSet>) -> Self {
        Self { questions, state: SessionState::default(), generation: 0 }
    }

    /// Rebind to a (possibly different) question set and start over
    pub fn reset(&mut self, questions: Arc<QuestionSet>) {
        tracing::debug!(topic = %questions.topic(), "Resetting quiz session");
        self.questions = questions;
        self.state = SessionState::default();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Answer the current question
    pub fn select_option(&mut self, index: usize) -> Result<AnswerOutcome, QuizError> {
        if self.is_answered() {
            return Err(QuizError::AlreadyAnswered);
        }

        let question = self.current_question();
        let len = question.options.len();
        if index >= len {
            return Err(QuizError::OptionOutOfRange { index, len });
        }

        let outcome =
            if question.is_correct(index) { AnswerOutcome::Correct } else { AnswerOutcome::Incorrect };

        self.state.selected_option = Some(index);
        self.state.explanation_visible = true;
        if outcome == AnswerOutcome::Correct {
            self.state.score += 1;
        }

        Ok(outcome)
    }

    /// Ask for a supplemental explanation of the current question.
    ///
    /// The canned explanation becomes visible straight away and the question
    /// counts as answered (unscored). The returned request must be passed to
    /// an explanation provider and its result fed to [`Self::complete_help`].
    pub fn request_help(&mut self) -> Result<HelpRequest, QuizError> {
        if self.is_answered() {
            return Err(QuizError::AlreadyAnswered);
        }

        self.state.help_requested = true;
        self.state.explanation_visible = true;
        self.state.provider_pending = true;

        Ok(HelpRequest {
            ticket: self.ticket(),
            topic: self.topic(),
            concept: self.current_question().concept.clone(),
        })
    }

    /// Apply the provider's answer to a help request.
    ///
    /// Failures are replaced with [`FALLBACK_EXPLANATION`]. Results for a
    /// question the session has moved past are dropped.
    pub fn complete_help<E: Display>(
        &mut self,
        ticket: HelpTicket,
        result: Result<String, E>,
    ) -> HelpDelivery {
        if ticket != self.ticket() || !self.state.provider_pending {
            tracing::debug!(
                question = ticket.question_index,
                current = self.state.current_index,
                "Dropping stale explanation"
            );
            return HelpDelivery::Stale;
        }

        let text = match result {
            Ok(text) => text,
            Err(_) => FALLBACK_EXPLANATION.to_string(),
        };

        self.state.supplemental_explanation = Some(text);
        self.state.provider_pending = false;
        HelpDelivery::Applied
    }

    /// Move to the next question
    pub fn advance(&mut self) -> Result<(), QuizError> {
        if !self.state.explanation_visible {
            return Err(QuizError::NotAnswered);
        }
        if self.is_last_question() {
            return Err(QuizError::LastQuestion);
        }

        self.state = SessionState {
            current_index: self.state.current_index + 1,
            score: self.state.score,
            ..SessionState::default()
        };
        self.generation = self.generation.wrapping_add(1);
        Ok(())
    }

    fn ticket(&self) -> HelpTicket {
        HelpTicket { generation: self.generation, question_index: self.state.current_index }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn topic(&self) -> Topic {
        self.questions.topic()
    }

    pub fn questions(&self) -> &QuestionSet {
        &self.questions
    }

    pub fn current_question(&self) -> &Question {
        // current_index < len, and sets are never empty
        &self.questions.as_slice()[self.state.current_index]
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn score(&self) -> usize {
        self.state.score
    }

    pub fn selected_option(&self) -> Option<usize> {
        self.state.selected_option
    }

    pub fn explanation_visible(&self) -> bool {
        self.state.explanation_visible
    }

    pub fn supplemental_explanation(&self) -> Option<&str> {
        self.state.supplemental_explanation.as_deref()
    }

    pub fn provider_pending(&self) -> bool {
        self.state.provider_pending
    }

    /// Answered by selection or resolved through a help request
    pub fn is_answered(&self) -> bool {
        self.state.selected_option.is_some() || self.state.help_requested
    }

    pub fn answered_via_help(&self) -> bool {
        self.state.help_requested
    }

    pub fn is_last_question(&self) -> bool {
        self.state.current_index + 1 >= self.questions.len()
    }

    pub fn can_advance(&self) -> bool {
        self.state.explanation_visible && !self.is_last_question()
    }

    /// Last question answered; nothing left to do but reset
    pub fn is_terminal(&self) -> bool {
        self.is_last_question() && self.is_answered()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Difficulty};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn javascript() -> QuizSession {
        let catalog = Catalog::builtin().unwrap();
        QuizSession::new(catalog.question_set(Topic::JavaScript))
    }

    fn small_set() -> Arc<QuestionSet> {
        let q = |correct| {
            Question::new("Q?", &["a", "b", "c"], correct, "concept", "why", Difficulty::Beginner)
        };
        Arc::new(QuestionSet::new(Topic::React, vec![q(0), q(1), q(2)]).unwrap())
    }

    #[test]
    fn new_session_starts_empty() {
        let session = javascript();
        assert_eq!(session.state(), &SessionState::default());
        assert_eq!(session.len(), 10);
        assert!(!session.is_answered());
    }

    #[test]
    fn correct_answer_scores_once() {
        let mut session = javascript();
        assert_eq!(session.select_option(1), Ok(AnswerOutcome::Correct));
        assert_eq!(session.score(), 1);
        assert!(session.explanation_visible());
        assert_eq!(session.selected_option(), Some(1));
    }

    #[test]
    fn wrong_answer_keeps_score() {
        let mut session = javascript();
        assert_eq!(session.select_option(0), Ok(AnswerOutcome::Incorrect));
        assert_eq!(session.score(), 0);
        assert!(session.explanation_visible());
        assert_eq!(session.selected_option(), Some(0));
    }

    #[test]
    fn second_answer_is_rejected() {
        let mut session = javascript();
        session.select_option(0).unwrap();
        let before = session.state().clone();

        assert_eq!(session.select_option(1), Err(QuizError::AlreadyAnswered));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn out_of_range_option_is_rejected() {
        let mut session = javascript();
        assert_eq!(session.select_option(4), Err(QuizError::OptionOutOfRange { index: 4, len: 4 }));
        assert_eq!(session.state(), &SessionState::default());
    }

    #[test]
    fn advance_requires_answer() {
        let mut session = javascript();
        assert_eq!(session.advance(), Err(QuizError::NotAnswered));
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn advance_resets_question_state_but_not_score() {
        let mut session = javascript();
        session.select_option(1).unwrap();
        session.advance().unwrap();

        let state = session.state();
        assert_eq!(state.current_index, 1);
        assert_eq!(state.selected_option, None);
        assert!(!state.explanation_visible);
        assert_eq!(state.supplemental_explanation, None);
        assert!(!state.provider_pending);
        assert_eq!(state.score, 1);
    }

    #[test]
    fn advance_is_rejected_on_last_question() {
        let mut session = QuizSession::new(small_set());
        for i in 0..2 {
            session.select_option(i).unwrap();
            session.advance().unwrap();
        }
        session.select_option(2).unwrap();
        assert!(session.is_terminal());
        assert!(!session.can_advance());

        let before = session.state().clone();
        assert_eq!(session.advance(), Err(QuizError::LastQuestion));
        assert_eq!(session.state(), &before);
        assert_eq!(session.score(), 3);
    }

    #[test]
    fn help_shows_explanation_immediately() {
        let mut session = javascript();
        let request = session.request_help().unwrap();

        assert_eq!(request.topic, Topic::JavaScript);
        assert_eq!(request.concept, "typeof operator and type coercion");
        assert_eq!(request.ticket.question_index(), 0);
        assert!(session.explanation_visible());
        assert!(session.provider_pending());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn help_success_stores_text() {
        let mut session = javascript();
        let request = session.request_help().unwrap();

        let delivery = session.complete_help::<String>(request.ticket, Ok("## typeof".into()));

        assert_eq!(delivery, HelpDelivery::Applied);
        assert_eq!(session.supplemental_explanation(), Some("## typeof"));
        assert!(!session.provider_pending());
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn help_failure_uses_fallback() {
        let mut session = javascript();
        let request = session.request_help().unwrap();

        session.complete_help(request.ticket, Err::<String, _>("connection refused"));

        assert_eq!(session.supplemental_explanation(), Some(FALLBACK_EXPLANATION));
        assert!(!session.provider_pending());
    }

    #[test]
    fn help_blocks_answering() {
        let mut session = javascript();
        session.request_help().unwrap();

        assert_eq!(session.select_option(1), Err(QuizError::AlreadyAnswered));
        assert_eq!(session.score(), 0);
        assert!(session.answered_via_help());
    }

    #[test]
    fn help_is_rejected_after_answer_or_second_request() {
        let mut session = javascript();
        session.select_option(1).unwrap();
        assert_eq!(session.request_help(), Err(QuizError::AlreadyAnswered));

        let mut session = javascript();
        session.request_help().unwrap();
        assert_eq!(session.request_help(), Err(QuizError::AlreadyAnswered));
    }

    #[test]
    fn stale_help_after_advance_is_dropped() {
        let mut session = javascript();
        let request = session.request_help().unwrap();
        session.advance().unwrap();

        let delivery = session.complete_help::<String>(request.ticket, Ok("late".into()));

        assert_eq!(delivery, HelpDelivery::Stale);
        assert_eq!(session.supplemental_explanation(), None);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn stale_help_after_reset_to_other_topic_is_dropped() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = QuizSession::new(catalog.question_set(Topic::JavaScript));
        let request = session.request_help().unwrap();
        session.reset(catalog.question_set(Topic::React));
        session.request_help().unwrap();

        // Same question index, different session generation
        let delivery = session.complete_help::<String>(request.ticket, Ok("javascript".into()));

        assert_eq!(delivery, HelpDelivery::Stale);
        assert!(session.provider_pending());
        assert_eq!(session.supplemental_explanation(), None);
    }

    #[test]
    fn duplicate_completion_is_dropped() {
        let mut session = javascript();
        let request = session.request_help().unwrap();
        session.complete_help::<String>(request.ticket, Ok("first".into()));

        let delivery = session.complete_help::<String>(request.ticket, Ok("second".into()));

        assert_eq!(delivery, HelpDelivery::Stale);
        assert_eq!(session.supplemental_explanation(), Some("first"));
    }

    #[test]
    fn javascript_walkthrough() {
        let mut session = javascript();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);

        session.select_option(1).unwrap();
        assert_eq!(session.score(), 1);
        assert!(session.explanation_visible());

        session.advance().unwrap();
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.selected_option(), None);
        assert!(!session.explanation_visible());
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn reset_to_react_mid_quiz() {
        let catalog = Catalog::builtin().unwrap();
        let mut session = QuizSession::new(catalog.question_set(Topic::JavaScript));
        session.select_option(1).unwrap();
        session.advance().unwrap();
        session.request_help().unwrap();

        session.reset(catalog.question_set(Topic::React));

        assert_eq!(session.topic(), Topic::React);
        assert_eq!(session.state(), &SessionState::default());
        assert_eq!(
            session.current_question().concept,
            catalog.question_set(Topic::React).get(0).unwrap().concept
        );
    }

    #[derive(Debug, Clone)]
    enum Action {
        Select(usize),
        Help,
        Complete(bool),
        Advance,
    }

    fn action() -> impl Strategy<Value = Action> {
        prop_oneof![
            (0usize..6).prop_map(Action::Select),
            Just(Action::Help),
            any::<bool>().prop_map(Action::Complete),
            Just(Action::Advance),
        ]
    }

    proptest! {
        #[test]
        fn score_is_bounded_and_monotonic(actions in proptest::collection::vec(action(), 0..60)) {
            let mut session = javascript();
            let mut pending: Option<HelpTicket> = None;
            let mut scored_selections = 0usize;

            for action in actions {
                let before = session.score();
                match action {
                    Action::Select(i) => {
                        if let Ok(AnswerOutcome::Correct) = session.select_option(i) {
                            scored_selections += 1;
                        }
                    }
                    Action::Help => {
                        if let Ok(request) = session.request_help() {
                            pending = Some(request.ticket);
                        }
                    }
                    Action::Complete(ok) => {
                        if let Some(ticket) = pending.take() {
                            let result = if ok { Ok("text".to_string()) } else { Err("boom") };
                            session.complete_help(ticket, result);
                        }
                    }
                    Action::Advance => {
                        let _ = session.advance();
                    }
                }

                prop_assert!(session.score() >= before);
                prop_assert!(session.score() <= before + 1);
                prop_assert_eq!(session.score(), scored_selections);
                prop_assert!(session.current_index() < session.len());
                prop_assert!(session.score() <= session.current_index() + 1);
            }
        }
    }
}
