use std::time::Duration;

use crate::catalog;
use crate::config::Config;
use crate::scoring::{compute_assessment, AnswerSet, Assessment};
use crate::session::FormSession;
use crate::severity::Severity;

#[derive(Debug)]
pub struct EngineResult {
    pub assessment: Assessment,
    pub answers: AnswerSet,
    pub answered: usize,
    pub catalog_size: usize,
    pub fail_on_positive: bool,
}

/// Non-interactive flow: validate the given answers against the
/// catalog, feed a session, submit, and collect the outcome.
pub fn run(answers: &[(String, Severity)], config: &Config) -> Result<EngineResult, String> {
    let mut session = FormSession::new(Duration::from_millis(config.submit.delay_ms));

    for (id, severity) in answers {
        let symptom =
            catalog::find(id).ok_or_else(|| format!("Unknown symptom \"{id}\""))?;
        if !symptom.options.contains(severity) {
            let offered: Vec<&str> = symptom.options.iter().map(|s| s.label()).collect();
            return Err(format!(
                "\"{severity}\" is not offered for {id} (choices: {})",
                offered.join(", ")
            ));
        }
        session.set_answer(id, *severity);
    }

    session.submit();
    Ok(finish(&session, config))
}

/// Fold a finished session into an `EngineResult`. When the under-four
/// gate kept `submit` from running, the scorer still produces its
/// defined no-result output; that is a policy branch, not an error.
pub fn finish(session: &FormSession, config: &Config) -> EngineResult {
    let assessment = match session.result() {
        Some(a) => *a,
        None => compute_assessment(session.answers(), catalog::catalog()),
    };

    EngineResult {
        assessment,
        answers: session.answers().clone(),
        answered: session.answered_count(),
        catalog_size: catalog::catalog().len(),
        fail_on_positive: config.ci.fail_on_positive,
    }
}
