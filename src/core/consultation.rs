use crate::domain::model::{Consultation, Dossier, DossierContent, DossierSource, Palette};
use crate::domain::ports::Stylist;
use crate::utils::error::Result;
use crate::utils::validation::validate_hero_piece;

/// Shown in place of the dossier whenever the style service fails.
pub const FALLBACK_MESSAGE: &str = "Style service unavailable. Try again in a minute.";

pub struct ConsultationEngine<S: Stylist> {
    stylist: S,
}

impl<S: Stylist> ConsultationEngine<S> {
    pub fn new(stylist: S) -> Self {
        Self { stylist }
    }

    /// Validate the form, ask the stylist, and assemble the dossier.
    ///
    /// Only an empty hero piece is an error here. Service failures are
    /// logged and replaced by [`FALLBACK_MESSAGE`].
    pub async fn curate(&self, consultation: &Consultation) -> Result<Dossier> {
        validate_hero_piece(&consultation.request.anchor_piece)?;

        tracing::info!(
            "Styling '{}' for {} ({}, {})",
            consultation.request.anchor_piece.trim(),
            consultation.request.occasion,
            consultation.request.aesthetic,
            consultation.season
        );

        let (source, content) = match self.stylist.style(consultation).await {
            Ok(content) => (self.stylist.source(), content),
            Err(e) => {
                tracing::warn!(kind = e.kind(), "Style service failed: {}", e);
                (
                    DossierSource::Fallback,
                    DossierContent::Text(FALLBACK_MESSAGE.to_string()),
                )
            }
        };

        Ok(Dossier {
            season: consultation.season,
            source,
            content,
            palette: Palette::with_accent(&consultation.accent_color),
        })
    }
}
