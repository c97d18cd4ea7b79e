pub mod cli;
pub mod json;

use std::time::Duration;

use crate::engine::EngineResult;
use crate::scoring::Assessment;

pub trait Reporter {
    fn format(&self, result: &EngineResult, verbose: bool, elapsed: Duration) -> String;
}

/// One-line output for scripting: `positive 91.7` / `negative 0.0`.
pub fn score_only(assessment: &Assessment) -> String {
    format!(
        "{} {:.1}\n",
        if assessment.diagnosis {
            "positive"
        } else {
            "negative"
        },
        assessment.accuracy_percent
    )
}
