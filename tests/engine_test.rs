use symptom_doctor::config::Config;
use symptom_doctor::engine;
use symptom_doctor::severity::Severity;

fn zero_delay_config() -> Config {
    let mut config = Config::default();
    config.submit.delay_ms = 0;
    config
}

fn answer(id: &str, severity: Severity) -> (String, Severity) {
    (id.to_string(), severity)
}

#[test]
fn test_run_with_four_answers() {
    let answers = vec![
        answer("fever", Severity::Severe),
        answer("shortness-of-breath", Severity::Severe),
        answer("cough", Severity::None),
        answer("fatigue", Severity::None),
    ];
    let result = engine::run(&answers, &zero_delay_config()).unwrap();
    assert!(result.assessment.diagnosis);
    assert_eq!(result.answered, 4);
    assert_eq!(result.catalog_size, 6);
    assert_eq!(result.answers.get("fever"), Some(&Severity::Severe));
}

#[test]
fn test_unknown_symptom_is_rejected() {
    let answers = vec![answer("toothache", Severity::Mild)];
    let err = engine::run(&answers, &zero_delay_config()).unwrap_err();
    assert!(err.contains("toothache"));
}

#[test]
fn test_severity_not_offered_for_symptom_is_rejected() {
    // fatigue's scale is phrased None/Slight/Moderate/Significant.
    let answers = vec![answer("fatigue", Severity::Mild)];
    let err = engine::run(&answers, &zero_delay_config()).unwrap_err();
    assert!(err.contains("fatigue"));
    assert!(err.contains("Slight"));
}

#[test]
fn test_under_four_answers_is_not_an_error() {
    let answers = vec![
        answer("fever", Severity::Severe),
        answer("cough", Severity::Severe),
    ];
    let result = engine::run(&answers, &zero_delay_config()).unwrap();
    assert!(!result.assessment.diagnosis);
    assert_eq!(result.assessment.accuracy_percent, 0.0);
    assert_eq!(result.answered, 2);
}

#[test]
fn test_fail_on_positive_flag_is_carried() {
    let mut config = zero_delay_config();
    config.ci.fail_on_positive = true;
    let result = engine::run(&[], &config).unwrap();
    assert!(result.fail_on_positive);
}
