pub mod toml_config;

use crate::core::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECONDS};
use crate::domain::model::{
    AccentColor, Aesthetic, Consultation, Energy, Material, Occasion, Season, Silhouette,
    StyleRequest, TimeOfDay,
};
use crate::domain::ports::ConfigProvider;
use crate::presentation::{OutputFormat, Theme};
use crate::utils::error::{Result, StyleError};
use crate::utils::validation::{validate_non_empty_string, validate_range, validate_url, Validate};
use std::str::FromStr;

pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Which stylist answers the consultation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StylistMode {
    Mock,
    #[default]
    Remote,
}

impl FromStr for StylistMode {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mock" => Ok(StylistMode::Mock),
            "remote" | "gemini" => Ok(StylistMode::Remote),
            other => Err(StyleError::InvalidConfigValueError {
                field: "stylist.mode".to_string(),
                value: other.to_string(),
                reason: "Expected 'mock' or 'remote'".to_string(),
            }),
        }
    }
}

/// Shared checks for the remote service settings.
pub(crate) fn validate_service_settings<C: ConfigProvider + ?Sized>(
    config: &C,
    prefix: &str,
) -> Result<()> {
    validate_url(&format!("{}endpoint", prefix), config.service_endpoint())?;
    validate_non_empty_string(&format!("{}model", prefix), config.model())?;
    validate_range(
        &format!("{}timeout_seconds", prefix),
        config.timeout_seconds(),
        1,
        MAX_TIMEOUT_SECONDS,
    )?;
    Ok(())
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "style-sense")]
#[command(about = "Personal wardrobe consultation: build an outfit around your hero piece")]
pub struct CliConfig {
    /// Your hero piece, e.g. "A vintage oversized blazer"
    #[arg(long, default_value = "")]
    pub hero: String,

    /// Work, Casual, Date Night, Party or Travel
    #[arg(long, default_value = "Work")]
    pub occasion: Occasion,

    /// Minimalist, Old Money, Streetwear, Grunge or Preppy
    #[arg(long, default_value = "Minimalist")]
    pub aesthetic: Aesthetic,

    /// Style for the evening
    #[arg(long)]
    pub after_dark: bool,

    #[arg(long, default_value = "Spring")]
    pub season: Season,

    #[arg(long, default_value = "Tailored/Slim")]
    pub silhouette: Silhouette,

    /// Comma-separated preferred materials
    #[arg(long, value_delimiter = ',')]
    pub materials: Vec<Material>,

    #[arg(long, default_value = "Lazy/Comfort")]
    pub energy: Energy,

    #[arg(long, default_value = AccentColor::DEFAULT)]
    pub accent_color: AccentColor,

    /// Use the offline lookup-table stylist instead of the remote service
    #[arg(long)]
    pub mock: bool,

    #[arg(long, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// text, html or json
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn mode(&self) -> StylistMode {
        if self.mock {
            StylistMode::Mock
        } else {
            StylistMode::Remote
        }
    }

    pub fn consultation(&self) -> Consultation {
        Consultation {
            request: StyleRequest {
                anchor_piece: self.hero.clone(),
                occasion: self.occasion.clone(),
                aesthetic: self.aesthetic.clone(),
                time_of_day: TimeOfDay::from_after_dark(self.after_dark),
            },
            season: self.season,
            silhouette: self.silhouette,
            materials: self.materials.clone(),
            energy: self.energy,
            accent_color: self.accent_color.clone(),
        }
    }

    pub fn theme(&self) -> Theme {
        Theme::for_season(self.season)
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn service_endpoint(&self) -> &str {
        &self.endpoint
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.mode() == StylistMode::Remote {
            validate_service_settings(self, "")?;
        }
        Ok(())
    }
}
