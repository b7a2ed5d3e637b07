use crate::domain::model::{Consultation, DossierContent, DossierSource};
use crate::utils::error::ServiceError;
use async_trait::async_trait;

/// Settings for the remote text-generation service.
pub trait ConfigProvider: Send + Sync {
    fn service_endpoint(&self) -> &str;
    fn model(&self) -> &str;
    fn api_key(&self) -> Option<&str>;
    fn timeout_seconds(&self) -> u64;
}

/// Anything that can turn a consultation into dossier content.
#[async_trait]
pub trait Stylist: Send + Sync {
    fn source(&self) -> DossierSource;
    async fn style(&self, consultation: &Consultation) -> Result<DossierContent, ServiceError>;
}
