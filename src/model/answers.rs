use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Quiz submission exactly as the caller assembled it. Kept verbatim on the
/// profile record so a profile can always be recomputed from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizAnswers {
    pub body_shape: String,
    pub measurements: Measurements,
    pub measurements_public: bool,
    pub style_preferences: Vec<String>,
    pub detailed_questions: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Measurements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub waist: Option<MeasureValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bust: Option<MeasureValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hips: Option<MeasureValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shoes: Option<MeasureValue>,
    pub height: Height,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Height {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feet: Option<MeasureValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inches: Option<MeasureValue>,
}

/// Form fields arrive either as JSON numbers or as the raw text the user typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeasureValue {
    Number(f64),
    Text(String),
}

impl MeasureValue {
    /// Numeric value, 0.0 when the field holds nothing usable.
    pub fn value(&self) -> f64 {
        let v = match self {
            MeasureValue::Number(n) => *n,
            MeasureValue::Text(s) => parse_leading_float(s),
        };
        if v.is_finite() { v } else { 0.0 }
    }

    /// Raw text for display; empty strings and a numeric zero count as not provided.
    pub fn display(&self) -> Option<String> {
        match self {
            MeasureValue::Number(n) if *n == 0.0 || n.is_nan() => None,
            MeasureValue::Number(n) => Some(format!("{n}")),
            MeasureValue::Text(s) => {
                let t = s.trim();
                if t.is_empty() { None } else { Some(t.to_string()) }
            }
        }
    }
}

impl From<f64> for MeasureValue {
    fn from(value: f64) -> Self {
        MeasureValue::Number(value)
    }
}

impl From<&str> for MeasureValue {
    fn from(value: &str) -> Self {
        MeasureValue::Text(value.to_string())
    }
}

pub fn measure(value: Option<&MeasureValue>) -> f64 {
    value.map(MeasureValue::value).unwrap_or(0.0)
}

/// Parses the longest numeric prefix of `raw` ("28in" -> 28, "abc" -> 0).
pub fn parse_leading_float(raw: &str) -> f64 {
    let s = raw.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0usize;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }
    if digits == 0 {
        return 0.0;
    }
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/answers.rs"]
mod tests;
