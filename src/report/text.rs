use std::fmt::Write;

use crate::model::profile::StyleProfile;
use crate::report::{ResultsContext, format_confidence, humanize};

pub fn render_results_text(ctx: &ResultsContext<'_>) -> String {
    let mut out = String::new();
    let profile = ctx.profile;

    out.push_str("Your Style Profile\n");
    out.push_str("==================\n\n");

    if let Some(guide) = ctx.guide {
        let shape_label = match ctx.body_shape {
            Some(shape) => shape.label().to_string(),
            None => humanize(ctx.body_shape_raw),
        };
        let _ = writeln!(out, "Body shape: {shape_label}");
        let _ = writeln!(out, "{}", guide.description);
        let _ = writeln!(out, "Recommended pieces: {}\n", guide.pieces.join(", "));
    }

    if !ctx.measurements.is_empty() {
        out.push_str("Your measurements:\n");
        for (label, value) in &ctx.measurements {
            let _ = writeln!(out, "  - {label}: {value}");
        }
        out.push('\n');
    }

    let _ = writeln!(out, "Primary style: {}", profile.primary_style.label());
    let _ = writeln!(
        out,
        "Secondary styles: {}",
        profile
            .secondary_styles
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join(", ")
    );
    let _ = writeln!(out, "Confidence: {}", format_confidence(profile.confidence));
    let _ = writeln!(
        out,
        "Recommended color palette: {}",
        profile.color_palette.join(", ")
    );

    if !profile.tailoring.is_empty() {
        out.push_str("\nTailoring tips:\n");
        for tip in &profile.tailoring {
            let _ = writeln!(out, "  - {tip}");
        }
    }

    out.push('\n');
    out.push_str(&recommendation_summary(profile));
    out.push('\n');
    out
}

/// One-paragraph recommendation shown under the profile.
pub fn recommendation_summary(profile: &StyleProfile) -> String {
    format!(
        "Primary style: {}.\nWe will emphasize pieces and colors like {}. Complementary styles: {}.",
        profile.primary_style.label(),
        profile.color_palette.join(", "),
        profile
            .secondary_styles
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join(", ")
    )
}
