pub mod consultation;
pub mod gemini;
pub mod mock;
pub mod prompt;
pub mod recommendation;

pub use crate::domain::model::{
    Consultation, Dossier, DossierContent, DossierSource, StyleRecommendation, StyleRequest,
};
pub use crate::domain::ports::{ConfigProvider, Stylist};
pub use crate::utils::error::Result;
