// Presentation layer: theming and rendering of a finished dossier.

pub mod render;
pub mod theme;

pub use render::{render, OutputFormat};
pub use theme::Theme;
