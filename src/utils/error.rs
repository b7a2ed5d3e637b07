use thiserror::Error;

/// Failures of the remote text-generation service.
///
/// These never reach the user directly: the consultation engine logs them
/// and substitutes the fixed fallback message.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("No API key configured for the style service")]
    MissingCredentials,

    #[error("API key rejected by the style service")]
    CredentialsRejected,

    #[error("Style service quota exceeded")]
    QuotaExceeded,

    #[error("Style service returned HTTP {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Prompt blocked by the style service: {reason}")]
    Blocked { reason: String },

    #[error("Style service returned no text")]
    EmptyResponse,

    #[error("Style service request failed: {0}")]
    Network(#[from] reqwest::Error),
}

impl ServiceError {
    /// Stable label used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::MissingCredentials => "missing_credentials",
            ServiceError::CredentialsRejected => "credentials_rejected",
            ServiceError::QuotaExceeded => "quota_exceeded",
            ServiceError::UnexpectedStatus { .. } => "unexpected_status",
            ServiceError::Blocked { .. } => "blocked",
            ServiceError::EmptyResponse => "empty_response",
            ServiceError::Network(_) => "network",
        }
    }
}

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Style service error: {0}")]
    Service(#[from] ServiceError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Validation,
    Service,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for a run that failed at this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl StyleError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StyleError::Service(_) => ErrorCategory::Service,
            StyleError::IoError(_) | StyleError::SerializationError(_) => ErrorCategory::System,
            StyleError::ConfigError { .. }
            | StyleError::ConfigValidationError { .. }
            | StyleError::InvalidConfigValueError { .. }
            | StyleError::MissingConfigError { .. } => ErrorCategory::Configuration,
            StyleError::ValidationError { .. } => ErrorCategory::Validation,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StyleError::ValidationError { .. } => ErrorSeverity::Low,
            StyleError::Service(ServiceError::QuotaExceeded)
            | StyleError::Service(ServiceError::Network(_)) => ErrorSeverity::Medium,
            StyleError::Service(_) => ErrorSeverity::High,
            StyleError::ConfigError { .. }
            | StyleError::ConfigValidationError { .. }
            | StyleError::InvalidConfigValueError { .. }
            | StyleError::MissingConfigError { .. } => ErrorSeverity::High,
            StyleError::IoError(_) | StyleError::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            StyleError::ValidationError { message } => message.clone(),
            StyleError::Service(ServiceError::MissingCredentials)
            | StyleError::Service(ServiceError::CredentialsRejected) => {
                "API key error! Please check your GOOGLE_API_KEY.".to_string()
            }
            StyleError::Service(_) => "The style service is unavailable right now.".to_string(),
            StyleError::ConfigValidationError { field, .. }
            | StyleError::InvalidConfigValueError { field, .. } => {
                format!("The setting '{}' is not valid.", field)
            }
            StyleError::MissingConfigError { field } => {
                format!("The setting '{}' is required.", field)
            }
            StyleError::ConfigError { message } => message.clone(),
            StyleError::IoError(e) => format!("Could not read or write a file: {}", e),
            StyleError::SerializationError(_) => "Could not format the dossier.".to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StyleError::ValidationError { .. } => "Describe your hero piece, e.g. --hero \"A vintage oversized blazer\"",
            StyleError::Service(ServiceError::MissingCredentials)
            | StyleError::Service(ServiceError::CredentialsRejected) => {
                "Set GOOGLE_API_KEY or pass --api-key, or run with --mock"
            }
            StyleError::Service(ServiceError::QuotaExceeded) => "Wait a minute and try again",
            StyleError::Service(_) => "Try again later or run with --mock",
            StyleError::ConfigError { .. }
            | StyleError::ConfigValidationError { .. }
            | StyleError::InvalidConfigValueError { .. }
            | StyleError::MissingConfigError { .. } => "Check the configuration values and try again",
            StyleError::IoError(_) => "Check that the file exists and is readable",
            StyleError::SerializationError(_) => "Try a different --format",
        }
    }
}

pub type Result<T> = std::result::Result<T, StyleError>;
