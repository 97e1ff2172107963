//! Deterministic style-quiz scoring.
//!
//! [`compute_style_profile`] turns a [`QuizAnswers`] submission into a
//! [`StyleProfile`]. The rule tables live in [`rules`], the scoring stages in
//! [`pipeline`], and [`store`] keeps one profile record per user.

pub mod model;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod scorer;
pub mod store;
pub mod telemetry;

pub use model::{BodyShape, Choice, QuizAnswers, Style, StyleProfile};
pub use scorer::{Scorecard, compute_style_profile, score_answers};
