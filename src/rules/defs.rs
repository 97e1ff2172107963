use crate::model::styles::{BodyShape, Choice, Style};

/// One `(style, points)` boost.
pub type Boost = (Style, u32);

pub const PREFERENCE_POINTS: u32 = 4;
pub const RELATED_POINTS: u32 = 1;
pub const FALLBACK_POINTS: u32 = 3;
pub const MEASUREMENT_POINTS: u32 = 1;

pub const BUST_TO_WAIST_MIN: f64 = 1.1;
pub const WAIST_TO_HIPS_MAX: f64 = 0.9;

pub const CONFIDENCE_OFFSET: f32 = 0.15;

#[derive(Debug, Clone, Copy)]
pub struct RelatedDef {
    pub style: Style,
    pub related: &'static [Style],
}

const RELATED_STYLES: &[RelatedDef] = &[
    RelatedDef {
        style: Style::Casual,
        related: &[Style::Minimalist, Style::Trendy],
    },
    RelatedDef {
        style: Style::Professional,
        related: &[Style::Classic, Style::Minimalist],
    },
    RelatedDef {
        style: Style::Bohemian,
        related: &[Style::Romantic, Style::Casual],
    },
    RelatedDef {
        style: Style::Minimalist,
        related: &[Style::Classic, Style::Professional],
    },
    RelatedDef {
        style: Style::Trendy,
        related: &[Style::Edgy, Style::Casual],
    },
    RelatedDef {
        style: Style::Classic,
        related: &[Style::Professional, Style::Minimalist],
    },
    RelatedDef {
        style: Style::Edgy,
        related: &[Style::Trendy, Style::Casual],
    },
    RelatedDef {
        style: Style::Romantic,
        related: &[Style::Bohemian, Style::Classic],
    },
];

pub fn related_styles(style: Style) -> &'static [Style] {
    RELATED_STYLES
        .iter()
        .find(|d| d.style == style)
        .map(|d| d.related)
        .unwrap_or(&[])
}

#[derive(Debug, Clone, Copy)]
pub struct BodyShapeDef {
    pub shape: BodyShape,
    pub boosts: &'static [Boost],
    pub fallback: Option<Style>,
    pub tailoring: &'static str,
}

const TIP_HOURGLASS: &str =
    "Choose pieces that emphasize your defined waist: belts, wrap styles, and tailored fits.";
const TIP_ROUND_APPLE: &str =
    "Look for pieces with vertical lines and V-necks to elongate your torso and create balance.";
const TIP_RECTANGLE: &str = "Add curves with peplum tops, belts, and layered silhouettes.";
const TIP_INVERTED_TRIANGLE: &str =
    "Soften shoulders with v-necks and add volume to hips with A-line skirts or wide-leg pants.";
const TIP_ATHLETIC: &str =
    "Mix structured and soft pieces to add femininity: tailored blazers with flowing skirts work well.";

pub const TIP_HIGH_WAIST: &str =
    "High-waisted bottoms can help define your waist and elongate legs.";

const BODY_SHAPES: &[BodyShapeDef] = &[
    BodyShapeDef {
        shape: BodyShape::Round,
        boosts: &[(Style::Bohemian, 1), (Style::Casual, 1)],
        fallback: Some(Style::Bohemian),
        tailoring: TIP_ROUND_APPLE,
    },
    BodyShapeDef {
        shape: BodyShape::Hourglass,
        boosts: &[(Style::Classic, 2), (Style::Romantic, 1)],
        fallback: Some(Style::Classic),
        tailoring: TIP_HOURGLASS,
    },
    BodyShapeDef {
        shape: BodyShape::Rectangle,
        boosts: &[(Style::Edgy, 1), (Style::Minimalist, 1)],
        fallback: Some(Style::Minimalist),
        tailoring: TIP_RECTANGLE,
    },
    BodyShapeDef {
        shape: BodyShape::InvertedTriangle,
        boosts: &[(Style::Casual, 1), (Style::Classic, 1)],
        fallback: None,
        tailoring: TIP_INVERTED_TRIANGLE,
    },
    BodyShapeDef {
        shape: BodyShape::Apple,
        boosts: &[(Style::Bohemian, 1), (Style::Casual, 1)],
        fallback: None,
        tailoring: TIP_ROUND_APPLE,
    },
    BodyShapeDef {
        shape: BodyShape::Athletic,
        boosts: &[(Style::Edgy, 2), (Style::Minimalist, 1)],
        fallback: Some(Style::Edgy),
        tailoring: TIP_ATHLETIC,
    },
];

pub const DEFAULT_FALLBACK: Style = Style::Casual;

pub fn body_shape_def(shape: BodyShape) -> &'static BodyShapeDef {
    BODY_SHAPES
        .iter()
        .find(|d| d.shape == shape)
        .unwrap_or(&BODY_SHAPES[0])
}

pub fn fallback_style(shape: Option<BodyShape>) -> Style {
    shape
        .and_then(|s| body_shape_def(s).fallback)
        .unwrap_or(DEFAULT_FALLBACK)
}

/// Boosts per detailed question, indexed `[question - 1][choice]`.
const QUESTION_BOOSTS: [[&[Boost]; 4]; 10] = [
    // q1: what the outfit is for
    [
        &[(Style::Casual, 2)],
        &[(Style::Edgy, 2), (Style::Trendy, 1)],
        &[(Style::Professional, 2), (Style::Classic, 1)],
        &[(Style::Bohemian, 2), (Style::Romantic, 1)],
    ],
    // q2: colour palette
    [
        &[(Style::Minimalist, 2), (Style::Classic, 1)],
        &[(Style::Classic, 2), (Style::Professional, 1)],
        &[(Style::Trendy, 2), (Style::Casual, 1)],
        &[(Style::Bohemian, 2), (Style::Casual, 1)],
    ],
    // q3: silhouette
    [
        &[(Style::Casual, 2)],
        &[(Style::Professional, 2), (Style::Classic, 1)],
        &[(Style::Bohemian, 2), (Style::Romantic, 1)],
        &[(Style::Trendy, 2), (Style::Edgy, 1)],
    ],
    // q4: accessories
    [
        &[(Style::Minimalist, 2)],
        &[(Style::Classic, 2)],
        &[(Style::Bohemian, 2)],
        &[(Style::Trendy, 2), (Style::Edgy, 1)],
    ],
    // q5: footwear
    [
        &[(Style::Casual, 2), (Style::Minimalist, 1)],
        &[(Style::Classic, 2), (Style::Professional, 1)],
        &[(Style::Bohemian, 2)],
        &[(Style::Trendy, 2)],
    ],
    // q6: logos and branding
    [
        &[(Style::Minimalist, 2)],
        &[(Style::Classic, 2)],
        &[(Style::Edgy, 2), (Style::Casual, 1)],
        &[(Style::Trendy, 2), (Style::Edgy, 1)],
    ],
    // q7: outfit choice
    [
        &[(Style::Casual, 2), (Style::Classic, 1)],
        &[(Style::Professional, 2)],
        &[(Style::Bohemian, 2)],
        &[(Style::Edgy, 2)],
    ],
    // q8: fabric texture
    [
        &[(Style::Casual, 2), (Style::Minimalist, 1)],
        &[(Style::Professional, 2), (Style::Classic, 1)],
        &[(Style::Romantic, 2), (Style::Bohemian, 1)],
        &[(Style::Edgy, 2), (Style::Trendy, 1)],
    ],
    // q9: trend adoption
    [
        &[(Style::Classic, 2), (Style::Minimalist, 1)],
        &[(Style::Classic, 1), (Style::Trendy, 1)],
        &[(Style::Trendy, 2), (Style::Bohemian, 1)],
        &[(Style::Trendy, 3), (Style::Edgy, 1)],
    ],
    // q10: focus on detail
    [
        &[(Style::Classic, 2)],
        &[(Style::Classic, 2), (Style::Professional, 1)],
        &[(Style::Bohemian, 2), (Style::Romantic, 1)],
        &[(Style::Trendy, 2), (Style::Edgy, 1)],
    ],
];

/// `number` is 1-based; out-of-range questions have no boosts.
pub fn question_boosts(number: usize, choice: Choice) -> &'static [Boost] {
    if number == 0 || number > QUESTION_BOOSTS.len() {
        return &[];
    }
    QUESTION_BOOSTS[number - 1][choice.index()]
}

const STYLE_PALETTES: [&[&str]; 8] = [
    &["Denim Blue", "Olive", "Warm Neutrals"],
    &["Navy", "Charcoal", "Ivory"],
    &["Earthy Terracotta", "Mustard", "Forest Green"],
    &["Black", "White", "Beige"],
    &["Hot Pink", "Electric Blue", "Lime Accent"],
    &["Navy", "Burgundy", "Camel"],
    &["Black", "Gunmetal", "Crimson"],
    &["Blush Pink", "Lavender", "Cream"],
];

const PALETTE_QUESTION_PALETTES: [&[&str]; 4] = [
    &["Black", "White", "Gray", "Beige"],
    &["Emerald", "Sapphire", "Deep Burgundy"],
    &["Bright Red", "Cobalt Blue", "Pastel Yellow"],
    &["Warm Browns", "Cream", "Olive", "Denim Blue"],
];

/// The detailed question whose answer overrides the style palette.
pub const PALETTE_QUESTION: usize = 2;

pub fn style_palette(style: Style) -> &'static [&'static str] {
    STYLE_PALETTES[style.index()]
}

pub fn palette_for_choice(choice: Choice) -> &'static [&'static str] {
    PALETTE_QUESTION_PALETTES[choice.index()]
}

#[derive(Debug, Clone, Copy)]
pub struct ShapeGuide {
    pub shape: BodyShape,
    pub description: &'static str,
    pub pieces: &'static [&'static str],
}

const SHAPE_GUIDES: &[ShapeGuide] = &[
    ShapeGuide {
        shape: BodyShape::Round,
        description: "Your round body shape is beautifully balanced. Focus on creating a flattering silhouette that highlights your best features.",
        pieces: &[
            "Empire waist dresses",
            "V-neck tops",
            "A-line skirts",
            "Flowy fabrics",
            "Vertical stripes",
        ],
    },
    ShapeGuide {
        shape: BodyShape::Hourglass,
        description: "Your hourglass figure is naturally balanced with a defined waist. Embrace styles that celebrate your curves.",
        pieces: &[
            "Wrap dresses",
            "Fitted tops",
            "High-waisted bottoms",
            "Belted styles",
            "Pencil skirts",
        ],
    },
    ShapeGuide {
        shape: BodyShape::Rectangle,
        description: "Your rectangle body shape has a naturally straight silhouette. Create curves and add visual interest with strategic styling.",
        pieces: &[
            "Peplum tops",
            "Layered looks",
            "Textured fabrics",
            "Cropped jackets",
            "Wide-leg pants",
        ],
    },
    ShapeGuide {
        shape: BodyShape::InvertedTriangle,
        description: "Your inverted triangle shape features broader shoulders. Balance your silhouette by adding volume to your lower half.",
        pieces: &[
            "A-line bottoms",
            "Flare jeans",
            "Detailed skirts",
            "Scoop necks",
            "Hip-emphasizing styles",
        ],
    },
    ShapeGuide {
        shape: BodyShape::Apple,
        description: "Your apple shape carries weight in the midsection. Draw attention upward and create a flowing silhouette.",
        pieces: &[
            "Empire waist",
            "Tunic tops",
            "V-necks",
            "Straight-leg pants",
            "Draped fabrics",
        ],
    },
    ShapeGuide {
        shape: BodyShape::Athletic,
        description: "Your athletic build is strong and toned. Show off your fit physique while adding feminine touches.",
        pieces: &[
            "Fitted styles",
            "Structured blazers",
            "Skinny jeans",
            "Crop tops",
            "Bodycon dresses",
        ],
    },
];

/// Unrecognized shapes get the rectangle guide.
pub fn shape_guide(shape: Option<BodyShape>) -> &'static ShapeGuide {
    let shape = shape.unwrap_or(BodyShape::Rectangle);
    SHAPE_GUIDES
        .iter()
        .find(|g| g.shape == shape)
        .unwrap_or(&SHAPE_GUIDES[2])
}
