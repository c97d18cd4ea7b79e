use std::collections::HashMap;

use serde::Serialize;

use crate::catalog::Symptom;
use crate::severity::Severity;

/// Answers collected so far, keyed by symptom id.
pub type AnswerSet = HashMap<String, Severity>;

/// Fewer answers than this and the assessment is a hard no-result.
pub const MIN_ANSWERS: usize = 4;

/// Normalized scores at or above this threshold yield a positive diagnosis.
pub const DIAGNOSIS_THRESHOLD: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Assessment {
    pub diagnosis: bool,
    pub accuracy_percent: f64,
}

/// Weighted-average severity across answered symptoms, scaled into
/// [0, 1] by the maximum possible weighted score.
pub fn normalized_score(answers: &AnswerSet, catalog: &[Symptom]) -> f64 {
    let (total_score, max_possible, _) = weighted_totals(answers, catalog);
    if max_possible == 0.0 {
        0.0
    } else {
        total_score / max_possible
    }
}

pub fn compute_assessment(answers: &AnswerSet, catalog: &[Symptom]) -> Assessment {
    let (total_score, max_possible, filled) = weighted_totals(answers, catalog);

    if filled < MIN_ANSWERS {
        return Assessment {
            diagnosis: false,
            accuracy_percent: 0.0,
        };
    }

    let normalized = total_score / max_possible;
    let coverage = filled as f64 / catalog.len() as f64;

    Assessment {
        diagnosis: normalized >= DIAGNOSIS_THRESHOLD,
        accuracy_percent: 85.0 + coverage * 10.0,
    }
}

fn weighted_totals(answers: &AnswerSet, catalog: &[Symptom]) -> (f64, f64, usize) {
    let mut total_score = 0.0;
    let mut max_possible = 0.0;
    let mut filled = 0usize;

    for symptom in catalog {
        // Unanswered symptoms still count toward the maximum.
        max_possible += symptom.weight;
        if let Some(severity) = answers.get(symptom.id) {
            total_score += symptom.weight * severity.value();
            filled += 1;
        }
    }

    (total_score, max_possible, filled)
}
