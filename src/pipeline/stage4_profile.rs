use crate::model::profile::StyleProfile;
use crate::model::styles::Style;
use crate::pipeline::stage1_normalize::NormalizedAnswers;
use crate::pipeline::stage3_rank::Ranking;
use crate::rules::defs::{
    PALETTE_QUESTION, TIP_HIGH_WAIST, WAIST_TO_HIPS_MAX, body_shape_def, palette_for_choice,
    style_palette,
};

pub fn run_stage4(answers: &NormalizedAnswers, ranking: &Ranking) -> StyleProfile {
    let primary = ranking.primary();
    StyleProfile {
        primary_style: primary,
        secondary_styles: ranking.secondary(),
        color_palette: color_palette(answers, primary),
        tailoring: tailoring_tips(answers),
        confidence: ranking.confidence,
    }
}

/// An answered palette question beats the primary style's palette.
pub fn color_palette(answers: &NormalizedAnswers, primary: Style) -> Vec<String> {
    let colors = match answers.choices[PALETTE_QUESTION - 1] {
        Some(choice) => palette_for_choice(choice),
        None => style_palette(primary),
    };
    colors.iter().map(|c| c.to_string()).collect()
}

pub fn tailoring_tips(answers: &NormalizedAnswers) -> Vec<String> {
    let mut tips = Vec::new();
    if !answers.body_shape_provided {
        return tips;
    }
    if let Some(shape) = answers.body_shape {
        tips.push(body_shape_def(shape).tailoring.to_string());
    }
    if answers
        .ratios
        .waist_to_hips
        .is_some_and(|r| r < WAIST_TO_HIPS_MAX)
    {
        tips.push(TIP_HIGH_WAIST.to_string());
    }
    tips
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_profile.rs"]
mod tests;
