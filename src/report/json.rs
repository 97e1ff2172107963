use serde::Serialize;

use crate::model::profile::StyleProfile;
use crate::model::scores::ScoreDriver;
use crate::model::styles::Style;
use crate::scorer::Scorecard;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RankedScore {
    style: Style,
    score: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Explanation<'a> {
    profile: &'a StyleProfile,
    ranking: Vec<RankedScore>,
    total_score: u32,
    drivers: &'a [ScoreDriver],
}

pub fn render_profile_json(profile: &StyleProfile) -> serde_json::Result<String> {
    serde_json::to_string_pretty(profile)
}

/// Profile plus the full ranked score table and every contribution behind it.
pub fn render_explain_json(card: &Scorecard) -> serde_json::Result<String> {
    let explanation = Explanation {
        profile: &card.profile,
        ranking: card
            .ranking
            .ordered
            .iter()
            .map(|&(style, score)| RankedScore { style, score })
            .collect(),
        total_score: card.scores.total(),
        drivers: &card.scores.drivers,
    };
    serde_json::to_string_pretty(&explanation)
}
