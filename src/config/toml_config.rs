use crate::config::{validate_service_settings, StylistMode};
use crate::core::gemini::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECONDS};
use crate::domain::model::{
    AccentColor, Aesthetic, Consultation, Energy, Material, Occasion, Season, Silhouette,
    StyleRequest, TimeOfDay,
};
use crate::domain::ports::ConfigProvider;
use crate::presentation::{OutputFormat, Theme};
use crate::utils::error::{Result, StyleError};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub stylist: StylistConfig,
    pub theme: Option<ThemeConfig>,
    pub request: RequestConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StylistConfig {
    pub mode: Option<String>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub api_key: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub season: Option<String>,
    pub primary_color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestConfig {
    pub hero_piece: String,
    pub occasion: String,
    pub aesthetic: String,
    pub after_dark: Option<bool>,
    pub silhouette: Option<String>,
    pub materials: Option<Vec<String>>,
    pub energy: Option<String>,
    pub accent_color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

impl TomlConfig {
    /// Load a config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse config text, substituting `${VAR}` placeholders first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StyleError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unset variables are left as the literal placeholder.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StyleError::ConfigError {
            message: format!("Invalid placeholder pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn mode(&self) -> Result<StylistMode> {
        self.stylist
            .mode
            .as_deref()
            .map(str::parse::<StylistMode>)
            .transpose()
            .map(Option::unwrap_or_default)
    }

    pub fn season(&self) -> Result<Season> {
        self.theme
            .as_ref()
            .and_then(|t| t.season.as_deref())
            .map(str::parse::<Season>)
            .transpose()
            .map(Option::unwrap_or_default)
    }

    pub fn theme(&self) -> Result<Theme> {
        let theme = Theme::for_season(self.season()?);
        match self.theme.as_ref().and_then(|t| t.primary_color.as_deref()) {
            Some(color) => theme.with_primary_color(color),
            None => Ok(theme),
        }
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output
            .as_ref()
            .and_then(|o| o.format.as_deref())
            .map(str::parse::<OutputFormat>)
            .transpose()
            .map(Option::unwrap_or_default)
    }

    /// Parse the `[request]` table into a consultation.
    pub fn consultation(&self) -> Result<Consultation> {
        let request = &self.request;

        let silhouette = request
            .silhouette
            .as_deref()
            .map(str::parse::<Silhouette>)
            .transpose()?
            .unwrap_or_default();
        let materials = request
            .materials
            .iter()
            .flatten()
            .map(|m| m.parse::<Material>())
            .collect::<Result<Vec<_>>>()?;
        let energy = request
            .energy
            .as_deref()
            .map(str::parse::<Energy>)
            .transpose()?
            .unwrap_or_default();
        let accent_color = request
            .accent_color
            .as_deref()
            .map(str::parse::<AccentColor>)
            .transpose()?
            .unwrap_or_default();

        Ok(Consultation {
            request: StyleRequest {
                anchor_piece: request.hero_piece.clone(),
                occasion: Occasion::from(request.occasion.as_str()),
                aesthetic: Aesthetic::from(request.aesthetic.as_str()),
                time_of_day: TimeOfDay::from_after_dark(request.after_dark.unwrap_or(false)),
            },
            season: self.season()?,
            silhouette,
            materials,
            energy,
            accent_color,
        })
    }

    /// The mode a run will use; `force_mock` wins over the file.
    pub fn resolve_mode(&self, force_mock: bool) -> Result<StylistMode> {
        if force_mock {
            Ok(StylistMode::Mock)
        } else {
            self.mode()
        }
    }

    pub fn validate_config(&self) -> Result<()> {
        self.validate_for(self.mode()?)
    }

    /// Parse every field once so bad labels surface before any request.
    /// `[stylist]` service settings are only checked for a remote run.
    pub fn validate_for(&self, mode: StylistMode) -> Result<()> {
        if mode == StylistMode::Remote {
            validate_service_settings(self, "stylist.")?;
        }
        self.theme()?;
        self.output_format()?;
        self.consultation()?;
        Ok(())
    }

    pub fn is_mock_mode(&self) -> bool {
        matches!(self.mode(), Ok(StylistMode::Mock))
    }
}

impl ConfigProvider for TomlConfig {
    fn service_endpoint(&self) -> &str {
        self.stylist.endpoint.as_deref().unwrap_or(DEFAULT_ENDPOINT)
    }

    fn model(&self) -> &str {
        self.stylist.model.as_deref().unwrap_or(DEFAULT_MODEL)
    }

    /// Blank keys and unresolved `${VAR}` placeholders count as no key.
    fn api_key(&self) -> Option<&str> {
        self.stylist
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && !key.starts_with("${"))
    }

    fn timeout_seconds(&self) -> u64 {
        self.stylist.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FULL_CONFIG: &str = r##"
[stylist]
mode = "remote"
endpoint = "https://generativelanguage.googleapis.com"
model = "gemini-1.5-pro"
api_key = "abc123"
timeout_seconds = 10

[theme]
season = "Fall"

[request]
hero_piece = "A vintage oversized blazer"
occasion = "Date Night"
aesthetic = "Old Money"
after_dark = true
silhouette = "Oversized/Relaxed"
materials = ["Wool", "Silk"]
energy = "Powerful/Sharp"
accent_color = "#A85832"

[output]
format = "html"
"##;

    const MINIMAL_CONFIG: &str = r#"
[request]
hero_piece = "Trench Coat"
occasion = "Travel"
aesthetic = "Boho"
"#;

    #[test]
    fn test_parse_full_toml_config() {
        let config = TomlConfig::from_toml_str(FULL_CONFIG).unwrap();

        assert_eq!(config.mode().unwrap(), StylistMode::Remote);
        assert_eq!(config.model(), "gemini-1.5-pro");
        assert_eq!(config.api_key(), Some("abc123"));
        assert_eq!(config.timeout_seconds(), 10);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Html);
        assert_eq!(config.theme().unwrap().primary_color, "#A85832");

        let consultation = config.consultation().unwrap();
        assert_eq!(consultation.request.occasion, Occasion::DateNight);
        assert_eq!(consultation.request.aesthetic, Aesthetic::OldMoney);
        assert_eq!(consultation.request.time_of_day, TimeOfDay::Night);
        assert_eq!(consultation.season, Season::Fall);
        assert_eq!(consultation.silhouette, Silhouette::OversizedRelaxed);
        assert_eq!(consultation.materials, vec![Material::Wool, Material::Silk]);
        assert_eq!(consultation.energy, Energy::PowerfulSharp);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = TomlConfig::from_toml_str(MINIMAL_CONFIG).unwrap();

        assert_eq!(config.mode().unwrap(), StylistMode::Remote);
        assert_eq!(config.service_endpoint(), DEFAULT_ENDPOINT);
        assert_eq!(config.model(), DEFAULT_MODEL);
        assert_eq!(config.timeout_seconds(), DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(config.api_key(), None);
        assert_eq!(config.output_format().unwrap(), OutputFormat::Text);
        assert_eq!(config.theme().unwrap(), Theme::default());

        let consultation = config.consultation().unwrap();
        assert_eq!(
            consultation.request.aesthetic,
            Aesthetic::Other("Boho".to_string())
        );
        assert_eq!(consultation.request.time_of_day, TimeOfDay::Day);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STYLE_SENSE_TEST_KEY", "from-env");

        let content = format!(
            "[stylist]\napi_key = \"${{STYLE_SENSE_TEST_KEY}}\"\n{}",
            MINIMAL_CONFIG
        );
        let config = TomlConfig::from_toml_str(&content).unwrap();
        assert_eq!(config.api_key(), Some("from-env"));

        std::env::remove_var("STYLE_SENSE_TEST_KEY");
    }

    #[test]
    fn test_unresolved_placeholder_is_no_key() {
        let content = format!(
            "[stylist]\napi_key = \"${{STYLE_SENSE_UNSET_VARIABLE}}\"\n{}",
            MINIMAL_CONFIG
        );
        let config = TomlConfig::from_toml_str(&content).unwrap();

        assert_eq!(
            config.stylist.api_key.as_deref(),
            Some("${STYLE_SENSE_UNSET_VARIABLE}")
        );
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_config_validation() {
        let bad_endpoint = format!(
            "[stylist]\nendpoint = \"invalid-url\"\n{}",
            MINIMAL_CONFIG
        );
        let config = TomlConfig::from_toml_str(&bad_endpoint).unwrap();
        assert!(config.validate().is_err());

        let mock_mode = format!(
            "[stylist]\nmode = \"mock\"\nendpoint = \"invalid-url\"\n{}",
            MINIMAL_CONFIG
        );
        let config = TomlConfig::from_toml_str(&mock_mode).unwrap();
        assert!(config.is_mock_mode());
        assert!(config.validate().is_ok());

        let bad_season = format!("{}\n[theme]\nseason = \"Monsoon\"\n", MINIMAL_CONFIG);
        let config = TomlConfig::from_toml_str(&bad_season).unwrap();
        assert!(config.validate().is_err());

        let bad_material = MINIMAL_CONFIG.replace(
            "aesthetic = \"Boho\"",
            "aesthetic = \"Boho\"\nmaterials = [\"Velvet\"]",
        );
        let config = TomlConfig::from_toml_str(&bad_material).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_mock_override_skips_service_settings() {
        let bad_endpoint = format!(
            "[stylist]\nmode = \"remote\"\nendpoint = \"invalid-url\"\ntimeout_seconds = 0\n{}",
            MINIMAL_CONFIG
        );
        let config = TomlConfig::from_toml_str(&bad_endpoint).unwrap();

        assert_eq!(config.resolve_mode(false).unwrap(), StylistMode::Remote);
        assert_eq!(config.resolve_mode(true).unwrap(), StylistMode::Mock);
        assert!(config.validate_for(StylistMode::Remote).is_err());
        assert!(config.validate_for(StylistMode::Mock).is_ok());

        // Request labels are still checked offline.
        let bad_season = format!("{}\n[theme]\nseason = \"Monsoon\"\n", bad_endpoint);
        let config = TomlConfig::from_toml_str(&bad_season).unwrap();
        assert!(config.validate_for(StylistMode::Mock).is_err());
    }

    #[test]
    fn test_resolve_mode_with_unknown_file_mode() {
        let content = format!("[stylist]\nmode = \"offline\"\n{}", MINIMAL_CONFIG);
        let config = TomlConfig::from_toml_str(&content).unwrap();

        assert!(config.resolve_mode(false).is_err());
        assert_eq!(config.resolve_mode(true).unwrap(), StylistMode::Mock);
    }

    #[test]
    fn test_blank_api_key_is_no_key() {
        for key in ["", "   "] {
            let content = format!("[stylist]\napi_key = \"{}\"\n{}", key, MINIMAL_CONFIG);
            let config = TomlConfig::from_toml_str(&content).unwrap();
            assert_eq!(config.api_key(), None, "key {:?}", key);
        }

        let padded = format!("[stylist]\napi_key = \" abc123 \"\n{}", MINIMAL_CONFIG);
        let config = TomlConfig::from_toml_str(&padded).unwrap();
        assert_eq!(config.api_key(), Some("abc123"));
    }

    #[test]
    fn test_missing_request_table_fails_to_parse() {
        assert!(TomlConfig::from_toml_str("[stylist]\nmode = \"mock\"\n").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(FULL_CONFIG.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.request.hero_piece, "A vintage oversized blazer");
    }
}
