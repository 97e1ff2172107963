use std::fmt;

use serde::{Deserialize, Serialize};

/// Style categories in declaration order. The order is part of the ranking
/// contract: equal scores are broken by the position in [`style_order`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Casual,
    Professional,
    Bohemian,
    Minimalist,
    Trendy,
    Classic,
    Edgy,
    Romantic,
}

pub const STYLE_COUNT: usize = 8;

pub fn style_order() -> &'static [Style; STYLE_COUNT] {
    &[
        Style::Casual,
        Style::Professional,
        Style::Bohemian,
        Style::Minimalist,
        Style::Trendy,
        Style::Classic,
        Style::Edgy,
        Style::Romantic,
    ]
}

impl Style {
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Style::Casual => "casual",
            Style::Professional => "professional",
            Style::Bohemian => "bohemian",
            Style::Minimalist => "minimalist",
            Style::Trendy => "trendy",
            Style::Classic => "classic",
            Style::Edgy => "edgy",
            Style::Romantic => "romantic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Style::Casual => "Casual",
            Style::Professional => "Professional",
            Style::Bohemian => "Bohemian",
            Style::Minimalist => "Minimalist",
            Style::Trendy => "Trendy",
            Style::Classic => "Classic",
            Style::Edgy => "Edgy",
            Style::Romantic => "Romantic",
        }
    }

    /// Case-insensitive lookup, surrounding whitespace ignored.
    pub fn parse(raw: &str) -> Option<Style> {
        let key = raw.trim();
        style_order()
            .iter()
            .copied()
            .find(|s| s.name().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodyShape {
    Round,
    Hourglass,
    Rectangle,
    InvertedTriangle,
    Apple,
    Athletic,
}

pub fn body_shape_order() -> &'static [BodyShape] {
    &[
        BodyShape::Round,
        BodyShape::Hourglass,
        BodyShape::Rectangle,
        BodyShape::InvertedTriangle,
        BodyShape::Apple,
        BodyShape::Athletic,
    ]
}

impl BodyShape {
    pub fn name(self) -> &'static str {
        match self {
            BodyShape::Round => "round",
            BodyShape::Hourglass => "hourglass",
            BodyShape::Rectangle => "rectangle",
            BodyShape::InvertedTriangle => "inverted-triangle",
            BodyShape::Apple => "apple",
            BodyShape::Athletic => "athletic",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BodyShape::Round => "Round",
            BodyShape::Hourglass => "Hourglass",
            BodyShape::Rectangle => "Rectangle",
            BodyShape::InvertedTriangle => "Inverted triangle",
            BodyShape::Apple => "Apple",
            BodyShape::Athletic => "Athletic",
        }
    }

    pub fn parse(raw: &str) -> Option<BodyShape> {
        let key = raw.trim();
        body_shape_order()
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(key))
    }
}

impl fmt::Display for BodyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Single-letter answer to a detailed question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    pub fn index(self) -> usize {
        self as usize
    }

    /// Accepts exactly one letter a-d in either case, surrounding whitespace ignored.
    pub fn parse(raw: &str) -> Option<Choice> {
        let mut chars = raw.trim().chars();
        let first = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        match first.to_ascii_uppercase() {
            'A' => Some(Choice::A),
            'B' => Some(Choice::B),
            'C' => Some(Choice::C),
            'D' => Some(Choice::D),
            _ => None,
        }
    }
}

pub const QUESTION_COUNT: usize = 10;

/// Map key of a detailed question, 1-based (`q1`..`q10`).
pub fn question_key(number: usize) -> String {
    format!("q{number}")
}
