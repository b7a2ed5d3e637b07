use crate::core::recommendation::RecommendationEngine;
use crate::domain::model::{Consultation, DossierContent, DossierSource};
use crate::domain::ports::Stylist;
use crate::utils::error::ServiceError;
use async_trait::async_trait;

/// Offline stylist backed by the lookup-table engine. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MockStylist {
    engine: RecommendationEngine,
}

impl MockStylist {
    pub fn new() -> Self {
        Self {
            engine: RecommendationEngine::new(),
        }
    }
}

#[async_trait]
impl Stylist for MockStylist {
    fn source(&self) -> DossierSource {
        DossierSource::Mock
    }

    async fn style(&self, consultation: &Consultation) -> Result<DossierContent, ServiceError> {
        tracing::debug!(
            aesthetic = %consultation.request.aesthetic,
            occasion = %consultation.request.occasion,
            "Generating mock recommendation"
        );
        let recommendation = self.engine.recommend(&consultation.request);
        Ok(DossierContent::Recommendation(recommendation))
    }
}
