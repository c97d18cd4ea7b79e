use crate::severity::Severity;

/// One entry of the fixed symptom catalog.
#[derive(Debug)]
pub struct Symptom {
    pub id: &'static str,
    pub prompt: &'static str,
    /// Importance weight in (0, 1].
    pub weight: f64,
    /// Severity choices offered for this symptom, ordered from least
    /// to most severe.
    pub options: &'static [Severity],
}

const STANDARD_SCALE: &[Severity] = &[
    Severity::None,
    Severity::Mild,
    Severity::Moderate,
    Severity::Severe,
];

const GRADED_SCALE: &[Severity] = &[
    Severity::None,
    Severity::Slight,
    Severity::Moderate,
    Severity::Significant,
];

// Weights are exact binary fractions so weighted sums stay exact.
static CATALOG: &[Symptom] = &[
    Symptom {
        id: "fever",
        prompt: "Do you have a fever or elevated temperature?",
        weight: 1.0,
        options: STANDARD_SCALE,
    },
    Symptom {
        id: "shortness-of-breath",
        prompt: "Do you experience shortness of breath?",
        weight: 1.0,
        options: STANDARD_SCALE,
    },
    Symptom {
        id: "cough",
        prompt: "Do you have a cough?",
        weight: 0.875,
        options: STANDARD_SCALE,
    },
    Symptom {
        id: "fatigue",
        prompt: "How tired or fatigued do you feel?",
        weight: 0.75,
        options: GRADED_SCALE,
    },
    Symptom {
        id: "headache",
        prompt: "Do you have headaches?",
        weight: 0.75,
        options: STANDARD_SCALE,
    },
    Symptom {
        id: "sore-throat",
        prompt: "Is your throat sore?",
        weight: 0.625,
        options: GRADED_SCALE,
    },
];

/// The fixed catalog. Static, never mutated at runtime.
pub fn catalog() -> &'static [Symptom] {
    CATALOG
}

pub fn find(id: &str) -> Option<&'static Symptom> {
    CATALOG.iter().find(|s| s.id == id)
}
