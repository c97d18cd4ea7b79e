use std::time::Duration;

use owo_colors::OwoColorize;

use crate::catalog;
use crate::engine::EngineResult;
use crate::scoring::MIN_ANSWERS;
use crate::severity::Severity;

use super::Reporter;

pub struct CliReporter;

/// Color tier follows the numeric score, not the label, so aliased
/// labels always render alike.
pub fn severity_colored(severity: Severity) -> String {
    let label = severity.label();
    if severity.value() >= 1.0 {
        label.red().to_string()
    } else if severity.value() >= 0.5 {
        label.yellow().to_string()
    } else {
        label.green().to_string()
    }
}

impl Reporter for CliReporter {
    fn format(&self, result: &EngineResult, verbose: bool, elapsed: Duration) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "\n  {} v{}\n\n",
            "symptom-doctor".bold(),
            env!("CARGO_PKG_VERSION")
        ));

        for symptom in catalog::catalog() {
            match result.answers.get(symptom.id) {
                Some(severity) => {
                    out.push_str(&format!(
                        "  {:<22} {}",
                        symptom.id,
                        severity_colored(*severity)
                    ));
                    if verbose {
                        out.push_str(&format!(
                            "  {}",
                            format!("({:.3} × {:.2})", symptom.weight, severity.value())
                                .dimmed()
                        ));
                    }
                    out.push('\n');
                }
                None => {
                    out.push_str(&format!(
                        "  {:<22} {}\n",
                        symptom.id,
                        "unanswered".dimmed()
                    ));
                }
            }
        }

        out.push_str(&format!(
            "\n  {} of {} symptoms answered\n",
            result.answered, result.catalog_size
        ));

        if result.answered < MIN_ANSWERS {
            out.push_str(&format!(
                "\n  {}\n",
                format!("Inconclusive: answer at least {MIN_ANSWERS} symptoms for an assessment.")
                    .yellow()
            ));
        } else {
            let verdict = if result.assessment.diagnosis {
                "POSITIVE".red().bold().to_string()
            } else {
                "NEGATIVE".green().to_string()
            };
            out.push_str(&format!("\n  Diagnosis: {verdict}\n"));
            out.push_str(&format!(
                "  Confidence: {:.1}%\n",
                result.assessment.accuracy_percent
            ));
        }

        if verbose {
            out.push_str(&format!("\n  Assessed in {:.2?}\n", elapsed));
        }
        out.push('\n');
        out
    }
}
