use serde::{Deserialize, Serialize};

use crate::model::styles::Style;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProfile {
    pub primary_style: Style,
    pub secondary_styles: [Style; 2],
    pub color_palette: Vec<String>,
    pub tailoring: Vec<String>,
    pub confidence: f32,
}
