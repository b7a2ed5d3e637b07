use crate::utils::error::StyleError;
use crate::utils::validation::validate_hex_color;
use serde::{Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Lowercase alphanumerics only, so "Oversized/Relaxed" and
/// "oversized-relaxed" compare equal. Closed profile sets only.
fn normalize_label(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

fn unknown_label(field: &str, value: &str, allowed: &[&str]) -> StyleError {
    StyleError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: format!("Expected one of: {}", allowed.join(", ")),
    }
}

/// Serializes a label type through its `Display` impl.
macro_rules! serialize_as_label {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.collect_str(self)
                }
            }
        )*
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Occasion {
    Work,
    Casual,
    DateNight,
    Party,
    Travel,
    /// A label outside the known set, kept verbatim.
    Other(String),
}

impl Occasion {
    pub const KNOWN: [Occasion; 5] = [
        Occasion::Work,
        Occasion::Casual,
        Occasion::DateNight,
        Occasion::Party,
        Occasion::Travel,
    ];

    pub fn label(&self) -> &str {
        match self {
            Occasion::Work => "Work",
            Occasion::Casual => "Casual",
            Occasion::DateNight => "Date Night",
            Occasion::Party => "Party",
            Occasion::Travel => "Travel",
            Occasion::Other(raw) => raw,
        }
    }
}

/// Exact label match after trimming; anything else is kept verbatim.
impl From<&str> for Occasion {
    fn from(raw: &str) -> Self {
        let label = raw.trim();
        Occasion::KNOWN
            .into_iter()
            .find(|o| o.label() == label)
            .unwrap_or_else(|| Occasion::Other(raw.to_string()))
    }
}

impl FromStr for Occasion {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Occasion::from(s))
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Aesthetic {
    Minimalist,
    OldMoney,
    Streetwear,
    Grunge,
    Preppy,
    /// A label outside the known set, kept verbatim.
    Other(String),
}

impl Aesthetic {
    pub const KNOWN: [Aesthetic; 5] = [
        Aesthetic::Minimalist,
        Aesthetic::OldMoney,
        Aesthetic::Streetwear,
        Aesthetic::Grunge,
        Aesthetic::Preppy,
    ];

    pub fn label(&self) -> &str {
        match self {
            Aesthetic::Minimalist => "Minimalist",
            Aesthetic::OldMoney => "Old Money",
            Aesthetic::Streetwear => "Streetwear",
            Aesthetic::Grunge => "Grunge",
            Aesthetic::Preppy => "Preppy",
            Aesthetic::Other(raw) => raw,
        }
    }
}

/// Same rule as [`Occasion`]: "minimalist" is not "Minimalist".
impl From<&str> for Aesthetic {
    fn from(raw: &str) -> Self {
        let label = raw.trim();
        Aesthetic::KNOWN
            .into_iter()
            .find(|a| a.label() == label)
            .unwrap_or_else(|| Aesthetic::Other(raw.to_string()))
    }
}

impl FromStr for Aesthetic {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Aesthetic::from(s))
    }
}

impl fmt::Display for Aesthetic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeOfDay {
    #[default]
    Day,
    Night,
}

impl TimeOfDay {
    /// The form exposes this as an "after dark" toggle.
    pub fn from_after_dark(after_dark: bool) -> Self {
        if after_dark {
            TimeOfDay::Night
        } else {
            TimeOfDay::Day
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeOfDay::Day => f.write_str("Day"),
            TimeOfDay::Night => f.write_str("Night"),
        }
    }
}

/// Input to the recommendation engine.
///
/// `anchor_piece` is expected to be non-empty, but only the consultation
/// boundary enforces that; the engine accepts any string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleRequest {
    pub anchor_piece: String,
    pub occasion: Occasion,
    pub aesthetic: Aesthetic,
    pub time_of_day: TimeOfDay,
}

impl StyleRequest {
    pub fn new(
        anchor_piece: impl Into<String>,
        occasion: impl Into<Occasion>,
        aesthetic: impl Into<Aesthetic>,
        time_of_day: TimeOfDay,
    ) -> Self {
        Self {
            anchor_piece: anchor_piece.into(),
            occasion: occasion.into(),
            aesthetic: aesthetic.into(),
            time_of_day,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleRecommendation {
    pub vibe: String,
    pub top: String,
    pub bottom: String,
    pub accessories: String,
    pub explanation: String,
    pub avoid: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Season {
    #[default]
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];

    pub fn label(&self) -> &'static str {
        match self {
            Season::Spring => "Spring",
            Season::Summer => "Summer",
            Season::Fall => "Fall",
            Season::Winter => "Winter",
        }
    }
}

impl FromStr for Season {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_label(s);
        Season::ALL
            .into_iter()
            .find(|season| normalize_label(season.label()) == key)
            .ok_or_else(|| {
                unknown_label("season", s, &Season::ALL.map(|season| season.label()))
            })
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Silhouette {
    #[default]
    TailoredSlim,
    OversizedRelaxed,
    Athletic,
    ClassicFit,
}

impl Silhouette {
    pub const ALL: [Silhouette; 4] = [
        Silhouette::TailoredSlim,
        Silhouette::OversizedRelaxed,
        Silhouette::Athletic,
        Silhouette::ClassicFit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Silhouette::TailoredSlim => "Tailored/Slim",
            Silhouette::OversizedRelaxed => "Oversized/Relaxed",
            Silhouette::Athletic => "Athletic",
            Silhouette::ClassicFit => "Classic Fit",
        }
    }
}

impl FromStr for Silhouette {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_label(s);
        Silhouette::ALL
            .into_iter()
            .find(|silhouette| normalize_label(silhouette.label()) == key)
            .ok_or_else(|| {
                unknown_label("silhouette", s, &Silhouette::ALL.map(|silhouette| silhouette.label()))
            })
    }
}

impl fmt::Display for Silhouette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Material {
    Leather,
    Wool,
    Silk,
    Linen,
    Denim,
    Cotton,
}

impl Material {
    pub const ALL: [Material; 6] = [
        Material::Leather,
        Material::Wool,
        Material::Silk,
        Material::Linen,
        Material::Denim,
        Material::Cotton,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Material::Leather => "Leather",
            Material::Wool => "Wool",
            Material::Silk => "Silk",
            Material::Linen => "Linen",
            Material::Denim => "Denim",
            Material::Cotton => "Cotton",
        }
    }
}

impl FromStr for Material {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_label(s);
        Material::ALL
            .into_iter()
            .find(|material| normalize_label(material.label()) == key)
            .ok_or_else(|| {
                unknown_label("materials", s, &Material::ALL.map(|material| material.label()))
            })
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Energy {
    #[default]
    LazyComfort,
    Balanced,
    PowerfulSharp,
}

impl Energy {
    pub const ALL: [Energy; 3] = [Energy::LazyComfort, Energy::Balanced, Energy::PowerfulSharp];

    pub fn label(&self) -> &'static str {
        match self {
            Energy::LazyComfort => "Lazy/Comfort",
            Energy::Balanced => "Balanced",
            Energy::PowerfulSharp => "Powerful/Sharp",
        }
    }
}

impl FromStr for Energy {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_label(s);
        Energy::ALL
            .into_iter()
            .find(|energy| normalize_label(energy.label()) == key)
            .ok_or_else(|| unknown_label("energy", s, &Energy::ALL.map(|energy| energy.label())))
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A `#RRGGBB` color, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccentColor(String);

impl AccentColor {
    pub const DEFAULT: &'static str = "#D4AF37";

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        AccentColor(Self::DEFAULT.to_string())
    }
}

impl FromStr for AccentColor {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        validate_hex_color("accent_color", trimmed)?;
        Ok(AccentColor(trimmed.to_ascii_uppercase()))
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

serialize_as_label!(Occasion, Aesthetic, TimeOfDay, Season, Silhouette, Material, Energy, AccentColor);

/// Everything the form collects for one consultation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Consultation {
    pub request: StyleRequest,
    pub season: Season,
    pub silhouette: Silhouette,
    pub materials: Vec<Material>,
    pub energy: Energy,
    pub accent_color: AccentColor,
}

impl Consultation {
    /// Wraps a bare request with the default profile.
    pub fn new(request: StyleRequest) -> Self {
        Self {
            request,
            season: Season::default(),
            silhouette: Silhouette::default(),
            materials: Vec::new(),
            energy: Energy::default(),
            accent_color: AccentColor::default(),
        }
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.season = season;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DossierSource {
    Mock,
    Remote,
    /// The remote service failed and the fixed fallback text was used.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum DossierContent {
    Recommendation(StyleRecommendation),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub base: String,
    pub secondary: String,
    pub accent: String,
}

impl Palette {
    pub fn with_accent(accent: &AccentColor) -> Self {
        Self {
            base: "#FFFFFF".to_string(),
            secondary: "#000000".to_string(),
            accent: accent.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dossier {
    pub season: Season,
    pub source: DossierSource,
    pub content: DossierContent,
    pub palette: Palette,
}
