use crate::model::scores::{ScoreSource, StyleScores};
use crate::model::styles::Style;
use crate::pipeline::stage1_normalize::NormalizedAnswers;
use crate::rules::defs::{
    BUST_TO_WAIST_MIN, FALLBACK_POINTS, MEASUREMENT_POINTS, PREFERENCE_POINTS, RELATED_POINTS,
    WAIST_TO_HIPS_MAX, body_shape_def, fallback_style, question_boosts, related_styles,
};

/// Additive scoring over the eight style buckets. Contributions are applied
/// in a fixed order so the driver list is stable for identical input.
pub fn run_stage2(answers: &NormalizedAnswers) -> StyleScores {
    let mut scores = StyleScores::default();

    apply_preferences(answers, &mut scores);
    apply_body_shape(answers, &mut scores);
    apply_measurements(answers, &mut scores);
    apply_fallback(answers, &mut scores);
    apply_questions(answers, &mut scores);

    scores
}

fn apply_preferences(answers: &NormalizedAnswers, scores: &mut StyleScores) {
    for &style in &answers.preferences {
        scores.add(ScoreSource::Preference { style }, style, PREFERENCE_POINTS);
        for &related in related_styles(style) {
            scores.add(
                ScoreSource::RelatedPreference { style },
                related,
                RELATED_POINTS,
            );
        }
    }
}

fn apply_body_shape(answers: &NormalizedAnswers, scores: &mut StyleScores) {
    let Some(shape) = answers.body_shape else {
        return;
    };
    for &(style, points) in body_shape_def(shape).boosts {
        scores.add(ScoreSource::BodyShape { shape }, style, points);
    }
}

fn apply_measurements(answers: &NormalizedAnswers, scores: &mut StyleScores) {
    let ratios = &answers.ratios;
    if !ratios.all_measured {
        return;
    }
    if ratios.bust_to_waist.is_some_and(|r| r > BUST_TO_WAIST_MIN) {
        scores.add(ScoreSource::BustToWaist, Style::Classic, MEASUREMENT_POINTS);
        scores.add(ScoreSource::BustToWaist, Style::Romantic, MEASUREMENT_POINTS);
    }
    if ratios.waist_to_hips.is_some_and(|r| r < WAIST_TO_HIPS_MAX) {
        scores.add(ScoreSource::WaistToHips, Style::Bohemian, MEASUREMENT_POINTS);
    }
}

fn apply_fallback(answers: &NormalizedAnswers, scores: &mut StyleScores) {
    if answers.preferences_provided {
        return;
    }
    let pick = fallback_style(answers.body_shape);
    scores.add(ScoreSource::NoPreferenceFallback, pick, FALLBACK_POINTS);
}

fn apply_questions(answers: &NormalizedAnswers, scores: &mut StyleScores) {
    for (i, choice) in answers.choices.iter().enumerate() {
        let Some(choice) = *choice else {
            continue;
        };
        let number = i + 1;
        for &(style, points) in question_boosts(number, choice) {
            scores.add(
                ScoreSource::Question {
                    number: number as u8,
                    choice,
                },
                style,
                points,
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_scores.rs"]
mod tests;
