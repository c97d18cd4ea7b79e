use std::collections::BTreeMap;
use std::time::Duration;

use serde::Serialize;

use crate::engine::EngineResult;
use crate::scoring::Assessment;
use crate::severity::Severity;

use super::Reporter;

pub struct JsonReporter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    version: &'static str,
    assessment: &'a Assessment,
    summary: SummaryJson,
    answers: BTreeMap<&'a str, Severity>,
}

#[derive(Serialize)]
struct SummaryJson {
    answered: usize,
    catalog_size: usize,
}

impl Reporter for JsonReporter {
    fn format(&self, result: &EngineResult, _verbose: bool, _elapsed: Duration) -> String {
        let answers: BTreeMap<&str, Severity> = result
            .answers
            .iter()
            .map(|(id, severity)| (id.as_str(), *severity))
            .collect();
        let output = JsonOutput {
            version: env!("CARGO_PKG_VERSION"),
            assessment: &result.assessment,
            summary: SummaryJson {
                answered: result.answered,
                catalog_size: result.catalog_size,
            },
            answers,
        };
        serde_json::to_string_pretty(&output).unwrap_or_else(|_| "{}".to_string())
    }
}
