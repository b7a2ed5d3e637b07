pub mod config;
pub mod core;
pub mod domain;
pub mod presentation;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::{toml_config::TomlConfig, StylistMode};

pub use crate::core::{
    consultation::{ConsultationEngine, FALLBACK_MESSAGE},
    gemini::GeminiStylist,
    mock::MockStylist,
    prompt::build_prompt,
    recommendation::{recommend, RecommendationEngine},
};
pub use crate::domain::model::{
    Aesthetic, Consultation, Dossier, DossierContent, DossierSource, Occasion, Season,
    StyleRecommendation, StyleRequest, TimeOfDay,
};
pub use crate::domain::ports::{ConfigProvider, Stylist};
pub use crate::presentation::{render, OutputFormat, Theme};
pub use crate::utils::error::{Result, ServiceError, StyleError};
