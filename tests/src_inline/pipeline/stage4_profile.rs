use super::*;
use crate::model::styles::{BodyShape, Choice};
use crate::pipeline::stage1_normalize::BodyRatios;

fn ranking(primary: Style, a: Style, b: Style) -> Ranking {
    let mut ordered = crate::model::styles::style_order().map(|s| (s, 0u32));
    ordered[0] = (primary, 3);
    ordered[1] = (a, 2);
    ordered[2] = (b, 1);
    Ranking {
        ordered,
        confidence: 0.65,
    }
}

#[test]
fn test_palette_from_primary_style() {
    let palette = color_palette(&NormalizedAnswers::default(), Style::Edgy);
    assert_eq!(palette, vec!["Black", "Gunmetal", "Crimson"]);
}

#[test]
fn test_palette_question_overrides_primary() {
    let mut answers = NormalizedAnswers::default();
    answers.choices[1] = Some(Choice::B);
    let palette = color_palette(&answers, Style::Trendy);
    assert_eq!(palette, vec!["Emerald", "Sapphire", "Deep Burgundy"]);

    answers.choices[1] = Some(Choice::D);
    let palette = color_palette(&answers, Style::Trendy);
    assert_eq!(palette, vec!["Warm Browns", "Cream", "Olive", "Denim Blue"]);
}

#[test]
fn test_other_questions_do_not_touch_palette() {
    let mut answers = NormalizedAnswers::default();
    answers.choices[0] = Some(Choice::B);
    answers.choices[2] = Some(Choice::B);
    let palette = color_palette(&answers, Style::Casual);
    assert_eq!(palette, vec!["Denim Blue", "Olive", "Warm Neutrals"]);
}

#[test]
fn test_no_body_shape_no_tailoring() {
    let answers = NormalizedAnswers {
        ratios: BodyRatios {
            bust_to_waist: None,
            waist_to_hips: Some(0.7),
            all_measured: false,
        },
        ..NormalizedAnswers::default()
    };
    assert!(tailoring_tips(&answers).is_empty());
}

#[test]
fn test_body_shape_tip_then_measurement_tip() {
    let answers = NormalizedAnswers {
        body_shape: Some(BodyShape::Hourglass),
        body_shape_provided: true,
        ratios: BodyRatios {
            bust_to_waist: None,
            waist_to_hips: Some(0.7),
            all_measured: false,
        },
        ..NormalizedAnswers::default()
    };
    let tips = tailoring_tips(&answers);
    assert_eq!(tips.len(), 2);
    assert!(tips[0].starts_with("Choose pieces that emphasize your defined waist"));
    assert_eq!(tips[1], TIP_HIGH_WAIST);
}

#[test]
fn test_unknown_shape_gets_measurement_tip_only() {
    let answers = NormalizedAnswers {
        body_shape: None,
        body_shape_provided: true,
        ratios: BodyRatios {
            bust_to_waist: None,
            waist_to_hips: Some(0.8),
            all_measured: false,
        },
        ..NormalizedAnswers::default()
    };
    assert_eq!(tailoring_tips(&answers), vec![TIP_HIGH_WAIST.to_string()]);
}

#[test]
fn test_assemble_profile() {
    let answers = NormalizedAnswers {
        body_shape: Some(BodyShape::Rectangle),
        body_shape_provided: true,
        ..NormalizedAnswers::default()
    };
    let profile = run_stage4(
        &answers,
        &ranking(Style::Minimalist, Style::Edgy, Style::Casual),
    );
    assert_eq!(profile.primary_style, Style::Minimalist);
    assert_eq!(profile.secondary_styles, [Style::Edgy, Style::Casual]);
    assert_eq!(profile.color_palette, vec!["Black", "White", "Beige"]);
    assert_eq!(profile.tailoring.len(), 1);
    assert!((profile.confidence - 0.65).abs() < 1e-6);
}
