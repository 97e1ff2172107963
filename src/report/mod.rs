pub mod json;
pub mod text;

use crate::model::answers::QuizAnswers;
use crate::model::profile::StyleProfile;
use crate::model::styles::BodyShape;
use crate::rules::defs::{ShapeGuide, shape_guide};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Json,
    Explain,
}

/// Everything the results page shows, resolved up front so rendering is
/// plain formatting.
#[derive(Debug, Clone)]
pub struct ResultsContext<'a> {
    pub body_shape: Option<BodyShape>,
    pub body_shape_raw: &'a str,
    pub guide: Option<&'static ShapeGuide>,
    pub measurements: Vec<(&'static str, String)>,
    pub profile: &'a StyleProfile,
}

pub fn build_results_context<'a>(
    answers: &'a QuizAnswers,
    profile: &'a StyleProfile,
) -> ResultsContext<'a> {
    let body_shape_raw = answers.body_shape.trim();
    let body_shape = BodyShape::parse(body_shape_raw);
    let guide = if body_shape_raw.is_empty() {
        None
    } else {
        Some(shape_guide(body_shape))
    };

    ResultsContext {
        body_shape,
        body_shape_raw,
        guide,
        measurements: measurement_lines(answers),
        profile,
    }
}

fn measurement_lines(answers: &QuizAnswers) -> Vec<(&'static str, String)> {
    let m = &answers.measurements;
    let mut lines = Vec::new();
    if let Some(v) = m.bust.as_ref().and_then(|v| v.display()) {
        lines.push(("Bust/Chest", format!("{v}\"")));
    }
    if let Some(v) = m.waist.as_ref().and_then(|v| v.display()) {
        lines.push(("Waist", format!("{v}\"")));
    }
    if let Some(v) = m.hips.as_ref().and_then(|v| v.display()) {
        lines.push(("Hips", format!("{v}\"")));
    }
    if let Some(v) = m.shoes.as_ref().and_then(|v| v.display()) {
        lines.push(("Shoe size", v));
    }
    let feet = m.height.feet.as_ref().and_then(|v| v.display());
    let inches = m.height.inches.as_ref().and_then(|v| v.display());
    if let (Some(feet), Some(inches)) = (feet, inches) {
        lines.push(("Height", format!("{feet}'{inches}\"")));
    }
    lines
}

pub fn format_confidence(v: f32) -> String {
    format!("{:.0}%", v * 100.0)
}

/// "inverted-triangle" -> "Inverted triangle".
pub fn humanize(raw: &str) -> String {
    let spaced = raw.replace('-', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
