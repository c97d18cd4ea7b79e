use std::thread;
use std::time::Duration;

use crate::catalog;
use crate::scoring::{compute_assessment, AnswerSet, Assessment, MIN_ANSWERS};
use crate::severity::Severity;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
}

/// Holds the answers entered so far and the last assessment, if any.
/// The only states are Idle and Submitting; no transition can fail.
pub struct FormSession {
    answers: AnswerSet,
    result: Option<Assessment>,
    phase: Phase,
    submit_delay: Duration,
}

impl FormSession {
    pub fn new(submit_delay: Duration) -> Self {
        FormSession {
            answers: AnswerSet::new(),
            result: None,
            phase: Phase::Idle,
            submit_delay,
        }
    }

    /// Overwrite-or-insert. Validation happens at the interface edge;
    /// the session accepts whatever the form offered.
    pub fn set_answer(&mut self, id: &str, severity: Severity) {
        self.answers.insert(id.to_string(), severity);
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn result(&self) -> Option<&Assessment> {
        self.result.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Idle && self.answered_count() >= MIN_ANSWERS
    }

    /// The submit affordance text, a pure function of the answer count
    /// and the in-flight flag.
    pub fn submit_label(&self) -> &'static str {
        match self.phase {
            Phase::Submitting => "Checking...",
            Phase::Idle if self.answered_count() < MIN_ANSWERS => "Answer at least 4 symptoms",
            Phase::Idle => "Check symptoms",
        }
    }

    /// Gated submit: a no-op unless enough symptoms are answered and no
    /// submission is in flight. The delay is a loading-state affordance
    /// only; it carries no retry or cancellation semantics.
    pub fn submit(&mut self) -> Option<&Assessment> {
        if !self.can_submit() {
            return None;
        }
        self.phase = Phase::Submitting;
        thread::sleep(self.submit_delay);
        self.result = Some(compute_assessment(&self.answers, catalog::catalog()));
        self.phase = Phase::Idle;
        self.result.as_ref()
    }
}
