use crate::domain::model::Season;
use crate::utils::error::Result;
use crate::utils::validation::validate_hex_color;

pub const FALLBACK_THEME_COLOR: &str = "#000000";

const SEASON_COLORS: [(&str, &str); 4] = [
    ("Spring", "#7C9473"),
    ("Summer", "#E9C46A"),
    ("Fall", "#A85832"),
    ("Winter", "#264653"),
];

/// Theme color for a season label, black when the label is unknown.
pub fn season_color(label: &str) -> &'static str {
    SEASON_COLORS
        .iter()
        .find(|(season, _)| *season == label)
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_THEME_COLOR)
}

/// Page-wide styling, passed explicitly into rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub season: Season,
    pub primary_color: String,
}

impl Theme {
    pub fn for_season(season: Season) -> Self {
        Self {
            season,
            primary_color: season_color(season.label()).to_string(),
        }
    }

    pub fn with_primary_color(mut self, color: &str) -> Result<Self> {
        validate_hex_color("theme.primary_color", color)?;
        self.primary_color = color.to_ascii_uppercase();
        Ok(self)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::for_season(Season::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_colors() {
        assert_eq!(Theme::for_season(Season::Spring).primary_color, "#7C9473");
        assert_eq!(Theme::for_season(Season::Summer).primary_color, "#E9C46A");
        assert_eq!(Theme::for_season(Season::Fall).primary_color, "#A85832");
        assert_eq!(Theme::for_season(Season::Winter).primary_color, "#264653");
        assert_eq!(season_color("Monsoon"), FALLBACK_THEME_COLOR);
    }

    #[test]
    fn test_default_theme_is_spring() {
        let theme = Theme::default();
        assert_eq!(theme.season, Season::Spring);
        assert_eq!(theme.primary_color, "#7C9473");
    }

    #[test]
    fn test_primary_color_override() {
        let theme = Theme::for_season(Season::Fall)
            .with_primary_color("#112233")
            .unwrap();
        assert_eq!(theme.season, Season::Fall);
        assert_eq!(theme.primary_color, "#112233");

        assert!(Theme::default().with_primary_color("teal").is_err());
    }
}
