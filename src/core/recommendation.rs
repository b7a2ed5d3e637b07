use crate::domain::model::{StyleRecommendation, StyleRequest};

pub const DEFAULT_BOTTOM: &str = "Classic Denim";

pub const ACCESSORIES: &str =
    "Keep accessories minimal: one watch or a slim chain, and a structured leather bag.";

pub const AVOID: &str =
    "Avoid competing statement pieces. Let the hero piece lead and keep everything else quiet.";

const TOP_SUFFIX: &str = ", worn as the statement layer";

/// Aesthetic label to bottom garment.
const BOTTOMS: [(&str, &str); 5] = [
    ("Minimalist", "Grey Wool Trousers"),
    ("Streetwear", "Baggy Cargo Pants"),
    ("Old Money", "White Chinos"),
    ("Grunge", "Ripped Black Jeans"),
    ("Preppy", "Slim Khakis"),
];

/// Exact-label lookup; anything not in the table gets [`DEFAULT_BOTTOM`].
pub fn lookup_bottom(aesthetic: &str) -> &'static str {
    BOTTOMS
        .iter()
        .find(|(label, _)| *label == aesthetic)
        .map(|(_, bottom)| *bottom)
        .unwrap_or(DEFAULT_BOTTOM)
}

/// Deterministic outfit suggestion for the mock stylist.
///
/// Total over every request, including an empty `anchor_piece` and unknown
/// aesthetics. Same input, same output.
pub fn recommend(request: &StyleRequest) -> StyleRecommendation {
    let bottom = lookup_bottom(request.aesthetic.label());

    StyleRecommendation {
        vibe: format!(
            "{} / {} / {}",
            request.aesthetic, request.occasion, request.time_of_day
        ),
        top: format!("{}{}", request.anchor_piece, TOP_SUFFIX),
        bottom: bottom.to_string(),
        accessories: ACCESSORIES.to_string(),
        explanation: format!(
            "Building the outfit around your {} keeps the {} direction clear while staying right for {}.",
            request.anchor_piece, request.aesthetic, request.occasion
        ),
        avoid: AVOID.to_string(),
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationEngine;

impl RecommendationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn recommend(&self, request: &StyleRequest) -> StyleRecommendation {
        recommend(request)
    }
}
