use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// How strongly a symptom presents. Each label maps to a normalized
/// score in [0, 1]; "Mild"/"Slight" and "Severe"/"Significant" are
/// interchangeable phrasings that alias to the same score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Severity {
    None,
    Mild,
    Slight,
    Moderate,
    Severe,
    Significant,
}

impl Severity {
    /// The single severity-to-score table. The scorer and the
    /// presentation color tiers both read from here.
    pub fn value(&self) -> f64 {
        match self {
            Severity::None => 0.0,
            Severity::Mild | Severity::Slight => 0.25,
            Severity::Moderate => 0.5,
            Severity::Severe | Severity::Significant => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::None => "None",
            Severity::Mild => "Mild",
            Severity::Slight => "Slight",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
            Severity::Significant => "Significant",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Severity::None),
            "mild" => Ok(Severity::Mild),
            "slight" => Ok(Severity::Slight),
            "moderate" => Ok(Severity::Moderate),
            "severe" => Ok(Severity::Severe),
            "significant" => Ok(Severity::Significant),
            other => Err(format!(
                "Unknown severity \"{other}\" (expected one of: none, mild, slight, moderate, severe, significant)"
            )),
        }
    }
}
