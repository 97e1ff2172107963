pub mod answers;
pub mod profile;
pub mod scores;
pub mod styles;

pub use answers::{Height, MeasureValue, Measurements, QuizAnswers};
pub use profile::StyleProfile;
pub use scores::{ScoreDriver, ScoreSource, StyleScores};
pub use styles::{BodyShape, Choice, QUESTION_COUNT, STYLE_COUNT, Style, style_order};
