use super::defs::*;
use crate::model::styles::{BodyShape, Choice, QUESTION_COUNT, Style, body_shape_order, style_order};

#[test]
fn test_related_styles_never_include_self() {
    for &style in style_order() {
        let related = related_styles(style);
        assert_eq!(related.len(), 2, "{style}");
        assert!(!related.contains(&style));
        assert_ne!(related[0], related[1]);
    }
}

#[test]
fn test_related_styles_table() {
    assert_eq!(
        related_styles(Style::Casual),
        &[Style::Minimalist, Style::Trendy]
    );
    assert_eq!(
        related_styles(Style::Minimalist),
        &[Style::Classic, Style::Professional]
    );
    assert_eq!(
        related_styles(Style::Romantic),
        &[Style::Bohemian, Style::Classic]
    );
}

#[test]
fn test_body_shape_boosts_are_small() {
    for &shape in body_shape_order() {
        let def = body_shape_def(shape);
        assert_eq!(def.shape, shape);
        assert!(!def.boosts.is_empty() && def.boosts.len() <= 2);
        for &(_, points) in def.boosts {
            assert!((1..=2).contains(&points));
        }
    }
}

#[test]
fn test_canonical_body_boosts() {
    let hourglass: &[Boost] = &[(Style::Classic, 2), (Style::Romantic, 1)];
    let athletic: &[Boost] = &[(Style::Edgy, 2), (Style::Minimalist, 1)];
    assert_eq!(body_shape_def(BodyShape::Hourglass).boosts, hourglass);
    assert_eq!(body_shape_def(BodyShape::Athletic).boosts, athletic);
}

#[test]
fn test_fallback_styles() {
    assert_eq!(fallback_style(Some(BodyShape::Hourglass)), Style::Classic);
    assert_eq!(fallback_style(Some(BodyShape::Athletic)), Style::Edgy);
    assert_eq!(fallback_style(Some(BodyShape::Rectangle)), Style::Minimalist);
    assert_eq!(fallback_style(Some(BodyShape::Round)), Style::Bohemian);
    assert_eq!(fallback_style(Some(BodyShape::Apple)), Style::Casual);
    assert_eq!(fallback_style(Some(BodyShape::InvertedTriangle)), Style::Casual);
    assert_eq!(fallback_style(None), Style::Casual);
}

#[test]
fn test_question_boosts_shape() {
    let choices = [Choice::A, Choice::B, Choice::C, Choice::D];
    for q in 1..=QUESTION_COUNT {
        for &choice in &choices {
            let boosts = question_boosts(q, choice);
            assert!(!boosts.is_empty() && boosts.len() <= 2, "q{q} {choice:?}");
            let total: u32 = boosts.iter().map(|&(_, p)| p).sum();
            assert!((1..=4).contains(&total), "q{q} {choice:?}");
        }
    }
    assert!(question_boosts(0, Choice::A).is_empty());
    assert!(question_boosts(11, Choice::A).is_empty());
}

#[test]
fn test_question_nine_d_is_strongest() {
    let expected: &[Boost] = &[(Style::Trendy, 3), (Style::Edgy, 1)];
    assert_eq!(question_boosts(9, Choice::D), expected);
}

#[test]
fn test_palettes() {
    for &style in style_order() {
        assert_eq!(style_palette(style).len(), 3);
    }
    assert_eq!(
        style_palette(Style::Casual),
        &["Denim Blue", "Olive", "Warm Neutrals"]
    );
    assert_eq!(
        palette_for_choice(Choice::B),
        &["Emerald", "Sapphire", "Deep Burgundy"]
    );
    assert_eq!(palette_for_choice(Choice::A).len(), 4);
    assert_eq!(palette_for_choice(Choice::D).len(), 4);
}

#[test]
fn test_round_and_apple_share_tailoring_tip() {
    assert_eq!(
        body_shape_def(BodyShape::Round).tailoring,
        body_shape_def(BodyShape::Apple).tailoring
    );
}

#[test]
fn test_shape_guide_falls_back_to_rectangle() {
    assert_eq!(shape_guide(None).shape, BodyShape::Rectangle);
    assert_eq!(shape_guide(Some(BodyShape::Apple)).shape, BodyShape::Apple);
    assert_eq!(shape_guide(Some(BodyShape::Athletic)).pieces.len(), 5);
}
