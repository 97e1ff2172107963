use crate::model::answers::{QuizAnswers, measure};
use crate::model::styles::{BodyShape, Choice, QUESTION_COUNT, Style, question_key};

/// Typed view of a submission. Everything the scorer cannot interpret has
/// already been dropped here, so later stages never see raw strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedAnswers {
    pub body_shape: Option<BodyShape>,
    /// A non-empty body shape was submitted, recognized or not.
    pub body_shape_provided: bool,
    pub preferences: Vec<Style>,
    /// Raw preference list was non-empty, recognized or not.
    pub preferences_provided: bool,
    pub ratios: BodyRatios,
    pub choices: [Option<Choice>; QUESTION_COUNT],
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyRatios {
    /// Present only when waist, bust and hips are all non-zero.
    pub bust_to_waist: Option<f64>,
    /// Present when waist and hips are non-zero.
    pub waist_to_hips: Option<f64>,
    pub all_measured: bool,
}

pub fn normalize_answers(answers: &QuizAnswers) -> NormalizedAnswers {
    let body_raw = answers.body_shape.trim();
    let body_shape = BodyShape::parse(body_raw);
    if body_shape.is_none() && !body_raw.is_empty() {
        tracing::debug!(body_shape = body_raw, "unrecognized body shape ignored");
    }

    let mut preferences = Vec::with_capacity(answers.style_preferences.len());
    for raw in &answers.style_preferences {
        match Style::parse(raw) {
            Some(style) if !preferences.contains(&style) => preferences.push(style),
            Some(_) => {}
            None => tracing::debug!(preference = raw.as_str(), "unrecognized style preference"),
        }
    }

    let mut choices = [None; QUESTION_COUNT];
    for (i, slot) in choices.iter_mut().enumerate() {
        *slot = answers
            .detailed_questions
            .get(&question_key(i + 1))
            .and_then(|raw| Choice::parse(raw));
    }

    NormalizedAnswers {
        body_shape,
        body_shape_provided: !body_raw.is_empty(),
        preferences,
        preferences_provided: !answers.style_preferences.is_empty(),
        ratios: compute_ratios(answers),
        choices,
    }
}

fn compute_ratios(answers: &QuizAnswers) -> BodyRatios {
    let m = &answers.measurements;
    let waist = measure(m.waist.as_ref());
    let bust = measure(m.bust.as_ref());
    let hips = measure(m.hips.as_ref());

    let waist_to_hips = if waist != 0.0 && hips != 0.0 {
        Some(waist / hips)
    } else {
        None
    };
    let all_measured = waist != 0.0 && bust != 0.0 && hips != 0.0;
    let bust_to_waist = if all_measured {
        Some(bust / waist)
    } else {
        None
    };

    BodyRatios {
        bust_to_waist,
        waist_to_hips,
        all_measured,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_normalize.rs"]
mod tests;
