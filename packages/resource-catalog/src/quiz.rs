//! Guided "Get Started" flow.
//!
//! Three questions (role, language, category) answered in order. Finishing
//! the last step writes the answers to the session store exactly once; the
//! catalog reads them on its next load.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{FlowError, FlowResult};
use crate::traits::session::SessionStore;
use crate::types::flow::{FlowAnswers, FlowLanguage, Role};

/// A question in the guided flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuizStep {
    Role,
    Language,
    Category,
}

impl QuizStep {
    pub const TOTAL: u8 = 3;

    /// 1-based step number.
    pub fn number(&self) -> u8 {
        match self {
            QuizStep::Role => 1,
            QuizStep::Language => 2,
            QuizStep::Category => 3,
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self {
            QuizStep::Role => "Who are you looking for resources for?",
            QuizStep::Language => "Which language do you prefer?",
            QuizStep::Category => "What would you like to learn about?",
        }
    }

    fn next(&self) -> Option<QuizStep> {
        match self {
            QuizStep::Role => Some(QuizStep::Language),
            QuizStep::Language => Some(QuizStep::Category),
            QuizStep::Category => None,
        }
    }

    fn previous(&self) -> Option<QuizStep> {
        match self {
            QuizStep::Role => None,
            QuizStep::Language => Some(QuizStep::Role),
            QuizStep::Category => Some(QuizStep::Language),
        }
    }
}

/// Result of answering or skipping a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    Advanced(QuizStep),
    /// Answers were written to the session store
    Completed(FlowAnswers),
}

/// Result of going back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackOutcome {
    Moved(QuizStep),
    /// Already on the first step; the caller leaves the flow
    AtStart,
}

/// The questionnaire state machine.
pub struct GuidedFlow<S: SessionStore> {
    store: S,
    session_key: String,
    step: QuizStep,
    answers: FlowAnswers,
    completed: bool,
}

impl<S: SessionStore> GuidedFlow<S> {
    pub fn new(store: S, session_key: impl Into<String>) -> Self {
        Self {
            store,
            session_key: session_key.into(),
            step: QuizStep::Role,
            answers: FlowAnswers::default(),
            completed: false,
        }
    }

    pub fn step(&self) -> QuizStep {
        self.step
    }

    pub fn answers(&self) -> &FlowAnswers {
        &self.answers
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Progress bar fill for the current step: `(step - 1) / total * 100`.
    pub fn progress_percent(&self) -> f32 {
        f32::from(self.step.number() - 1) / f32::from(QuizStep::TOTAL) * 100.0
    }

    /// Record an answer for the current step and move on.
    pub fn answer(&mut self, value: &str) -> FlowResult<FlowOutcome> {
        self.ensure_open()?;
        let invalid = || FlowError::InvalidAnswer {
            step: self.step.number(),
            value: value.to_string(),
        };

        match self.step {
            QuizStep::Role => {
                self.answers.role = Some(value.parse::<Role>().map_err(|_| invalid())?);
            }
            QuizStep::Language => {
                self.answers.language = Some(value.parse::<FlowLanguage>().map_err(|_| invalid())?);
            }
            QuizStep::Category => {
                let category = value.trim();
                if category.is_empty() {
                    return Err(invalid());
                }
                self.answers.category = Some(category.to_string());
            }
        }

        self.advance()
    }

    /// Leave the current step unanswered and move on.
    pub fn skip(&mut self) -> FlowResult<FlowOutcome> {
        self.ensure_open()?;
        self.advance()
    }

    /// Go back one step. Recorded answers are kept until overwritten.
    pub fn back(&mut self) -> BackOutcome {
        match self.step.previous() {
            Some(previous) if !self.completed => {
                self.step = previous;
                BackOutcome::Moved(previous)
            }
            _ => BackOutcome::AtStart,
        }
    }

    fn ensure_open(&self) -> FlowResult<()> {
        if self.completed {
            return Err(FlowError::AlreadyCompleted);
        }
        Ok(())
    }

    fn advance(&mut self) -> FlowResult<FlowOutcome> {
        if let Some(next) = self.step.next() {
            self.step = next;
            return Ok(FlowOutcome::Advanced(next));
        }

        self.store.save_flow_answers(&self.session_key, &self.answers)?;
        self.completed = true;
        info!(
            role = ?self.answers.role,
            language = ?self.answers.language,
            category = ?self.answers.category,
            "Guided flow completed"
        );
        Ok(FlowOutcome::Completed(self.answers.clone()))
    }
}
