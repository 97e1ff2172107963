use super::*;
use crate::model::answers::{MeasureValue, Measurements};

fn answers_with_measurements(waist: &str, bust: &str, hips: &str) -> QuizAnswers {
    QuizAnswers {
        measurements: Measurements {
            waist: Some(MeasureValue::from(waist)),
            bust: Some(MeasureValue::from(bust)),
            hips: Some(MeasureValue::from(hips)),
            ..Measurements::default()
        },
        ..QuizAnswers::default()
    }
}

#[test]
fn test_empty_answers() {
    let out = normalize_answers(&QuizAnswers::default());
    assert_eq!(out.body_shape, None);
    assert!(!out.body_shape_provided);
    assert!(out.preferences.is_empty());
    assert!(!out.preferences_provided);
    assert_eq!(out.ratios, BodyRatios::default());
    assert!(out.choices.iter().all(Option::is_none));
}

#[test]
fn test_body_shape_case_insensitive() {
    let answers = QuizAnswers {
        body_shape: " Inverted-Triangle ".to_string(),
        ..QuizAnswers::default()
    };
    let out = normalize_answers(&answers);
    assert_eq!(out.body_shape, Some(BodyShape::InvertedTriangle));
    assert!(out.body_shape_provided);
}

#[test]
fn test_unknown_body_shape_still_provided() {
    let answers = QuizAnswers {
        body_shape: "pear".to_string(),
        ..QuizAnswers::default()
    };
    let out = normalize_answers(&answers);
    assert_eq!(out.body_shape, None);
    assert!(out.body_shape_provided);
}

#[test]
fn test_preferences_deduplicated_in_order() {
    let answers = QuizAnswers {
        style_preferences: vec![
            "edgy".to_string(),
            "Casual".to_string(),
            "EDGY".to_string(),
            "sporty".to_string(),
        ],
        ..QuizAnswers::default()
    };
    let out = normalize_answers(&answers);
    assert_eq!(out.preferences, vec![Style::Edgy, Style::Casual]);
    assert!(out.preferences_provided);
}

#[test]
fn test_unrecognized_preferences_count_as_provided() {
    let answers = QuizAnswers {
        style_preferences: vec!["sporty".to_string()],
        ..QuizAnswers::default()
    };
    let out = normalize_answers(&answers);
    assert!(out.preferences.is_empty());
    assert!(out.preferences_provided);
}

#[test]
fn test_question_choices() {
    let mut answers = QuizAnswers::default();
    answers
        .detailed_questions
        .insert("q1".to_string(), "a".to_string());
    answers
        .detailed_questions
        .insert("q10".to_string(), "D".to_string());
    answers
        .detailed_questions
        .insert("q4".to_string(), "E".to_string());
    answers
        .detailed_questions
        .insert("q11".to_string(), "A".to_string());
    answers
        .detailed_questions
        .insert("q5".to_string(), "AB".to_string());
    let out = normalize_answers(&answers);
    assert_eq!(out.choices[0], Some(Choice::A));
    assert_eq!(out.choices[9], Some(Choice::D));
    assert_eq!(out.choices[3], None);
    assert_eq!(out.choices[4], None);
    assert_eq!(out.choices.iter().flatten().count(), 2);
}

#[test]
fn test_ratios_from_strings() {
    let out = normalize_answers(&answers_with_measurements("28", "36in", "38"));
    assert!(out.ratios.all_measured);
    let btw = out.ratios.bust_to_waist.unwrap();
    let wth = out.ratios.waist_to_hips.unwrap();
    assert!((btw - 36.0 / 28.0).abs() < 1e-12);
    assert!((wth - 28.0 / 38.0).abs() < 1e-12);
}

#[test]
fn test_malformed_measurement_is_unknown() {
    let out = normalize_answers(&answers_with_measurements("28", "abc", "38"));
    assert!(!out.ratios.all_measured);
    assert_eq!(out.ratios.bust_to_waist, None);
    assert!(out.ratios.waist_to_hips.is_some());
}

#[test]
fn test_missing_hips_drops_both_ratios() {
    let out = normalize_answers(&answers_with_measurements("28", "36", ""));
    assert_eq!(out.ratios, BodyRatios::default());
}
