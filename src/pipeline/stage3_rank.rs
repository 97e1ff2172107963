use crate::model::scores::StyleScores;
use crate::model::styles::{STYLE_COUNT, Style, style_order};
use crate::rules::defs::CONFIDENCE_OFFSET;

#[derive(Debug, Clone, PartialEq)]
pub struct Ranking {
    /// All styles, highest score first; ties keep declaration order.
    pub ordered: [(Style, u32); STYLE_COUNT],
    pub confidence: f32,
}

impl Ranking {
    pub fn primary(&self) -> Style {
        self.ordered[0].0
    }

    pub fn secondary(&self) -> [Style; 2] {
        [self.ordered[1].0, self.ordered[2].0]
    }
}

pub fn run_stage3(scores: &StyleScores) -> Ranking {
    let mut ordered = style_order().map(|s| (s, scores.get(s)));
    // stable: equal scores stay in declaration order
    ordered.sort_by(|a, b| b.1.cmp(&a.1));

    let confidence = confidence(ordered[0].1, scores.total());
    Ranking {
        ordered,
        confidence,
    }
}

pub fn confidence(top: u32, total: u32) -> f32 {
    let denom = if total == 0 { 1 } else { total };
    let raw = top as f32 / denom as f32 + CONFIDENCE_OFFSET;
    raw.min(1.0)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_rank.rs"]
mod tests;
