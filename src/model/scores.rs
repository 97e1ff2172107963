use serde::Serialize;

use crate::model::styles::{BodyShape, Choice, STYLE_COUNT, Style};

/// What caused a score contribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreSource {
    Preference { style: Style },
    RelatedPreference { style: Style },
    BodyShape { shape: BodyShape },
    BustToWaist,
    WaistToHips,
    NoPreferenceFallback,
    Question { number: u8, choice: Choice },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreDriver {
    pub source: ScoreSource,
    pub style: Style,
    pub points: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleScores {
    pub totals: [u32; STYLE_COUNT],
    pub drivers: Vec<ScoreDriver>,
}

impl StyleScores {
    pub fn add(&mut self, source: ScoreSource, style: Style, points: u32) {
        self.totals[style.index()] += points;
        self.drivers.push(ScoreDriver {
            source,
            style,
            points,
        });
    }

    pub fn get(&self, style: Style) -> u32 {
        self.totals[style.index()]
    }

    pub fn total(&self) -> u32 {
        self.totals.iter().sum()
    }
}
