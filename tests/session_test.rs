use std::time::Duration;

use symptom_doctor::catalog;
use symptom_doctor::scoring::compute_assessment;
use symptom_doctor::session::{FormSession, Phase};
use symptom_doctor::severity::Severity;

fn session() -> FormSession {
    FormSession::new(Duration::ZERO)
}

#[test]
fn test_fresh_session() {
    let session = session();
    assert_eq!(session.answered_count(), 0);
    assert!(session.result().is_none());
    assert_eq!(session.phase(), Phase::Idle);
    assert!(!session.can_submit());
    assert_eq!(session.submit_label(), "Answer at least 4 symptoms");
}

#[test]
fn test_set_answer_overwrites() {
    let mut session = session();
    session.set_answer("fever", Severity::Mild);
    session.set_answer("fever", Severity::Severe);
    assert_eq!(session.answered_count(), 1);
    assert_eq!(session.answers().get("fever"), Some(&Severity::Severe));
}

#[test]
fn test_answers_only_grow() {
    let mut session = session();
    let mut seen = 0;
    for symptom in catalog::catalog() {
        session.set_answer(symptom.id, Severity::Moderate);
        assert!(session.answered_count() >= seen);
        seen = session.answered_count();
    }
    assert_eq!(seen, catalog::catalog().len());
}

#[test]
fn test_submit_is_gated_below_four_answers() {
    let mut session = session();
    session.set_answer("fever", Severity::Severe);
    session.set_answer("cough", Severity::Severe);
    session.set_answer("headache", Severity::Severe);
    assert!(!session.can_submit());
    assert!(session.submit().is_none());
    assert!(session.result().is_none());
}

#[test]
fn test_submit_stores_the_assessment() {
    let mut session = session();
    session.set_answer("fever", Severity::Severe);
    session.set_answer("shortness-of-breath", Severity::Severe);
    session.set_answer("cough", Severity::None);
    session.set_answer("fatigue", Severity::None);
    assert!(session.can_submit());
    assert_eq!(session.submit_label(), "Check symptoms");

    let expected = compute_assessment(session.answers(), catalog::catalog());
    let result = *session.submit().expect("submit should run");
    assert_eq!(result, expected);
    assert!(result.diagnosis);

    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.result(), Some(&result));
}

#[test]
fn test_resubmit_recomputes_fully() {
    let mut session = session();
    for id in ["fever", "shortness-of-breath", "cough", "fatigue"] {
        session.set_answer(id, Severity::None);
    }
    let first = *session.submit().unwrap();
    assert!((first.accuracy_percent - (85.0 + 10.0 * 4.0 / 6.0)).abs() < 1e-9);

    session.set_answer("headache", Severity::None);
    session.set_answer("sore-throat", Severity::None);
    let second = *session.submit().unwrap();
    assert_eq!(second.accuracy_percent, 95.0);
}
