//! Entry points of the style scorer.
//!
//! Scoring is a pure function of the submitted answers: no clock, no global
//! state, no I/O. Calling it twice on the same answers yields identical
//! profiles, which is what lets stored profiles be re-verified later.

use crate::model::answers::QuizAnswers;
use crate::model::profile::StyleProfile;
use crate::model::scores::StyleScores;
use crate::pipeline::stage1_normalize::{NormalizedAnswers, normalize_answers};
use crate::pipeline::stage2_scores::run_stage2;
use crate::pipeline::stage3_rank::{Ranking, run_stage3};
use crate::pipeline::stage4_profile::run_stage4;

/// Profile together with everything that produced it.
#[derive(Debug, Clone)]
pub struct Scorecard {
    pub normalized: NormalizedAnswers,
    pub scores: StyleScores,
    pub ranking: Ranking,
    pub profile: StyleProfile,
}

pub fn compute_style_profile(answers: &QuizAnswers) -> StyleProfile {
    score_answers(answers).profile
}

pub fn score_answers(answers: &QuizAnswers) -> Scorecard {
    let normalized = normalize_answers(answers);
    let scores = run_stage2(&normalized);
    let ranking = run_stage3(&scores);
    let profile = run_stage4(&normalized, &ranking);

    tracing::debug!(
        primary = %profile.primary_style,
        confidence = profile.confidence,
        contributions = scores.drivers.len(),
        "style profile computed"
    );

    Scorecard {
        normalized,
        scores,
        ranking,
        profile,
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/scorer.rs"]
mod tests;
