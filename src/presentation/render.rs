use crate::domain::model::{Dossier, DossierContent, Palette, StyleRecommendation};
use crate::presentation::theme::Theme;
use crate::utils::error::{Result, StyleError};
use html_escape::{encode_double_quoted_attribute, encode_text};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

impl FromStr for OutputFormat {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            other => Err(StyleError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Supported formats: text, html, json".to_string(),
            }),
        }
    }
}

pub fn render(dossier: &Dossier, theme: &Theme, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(dossier, theme)),
        OutputFormat::Html => Ok(render_html(dossier, theme)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(dossier)?),
    }
}

pub fn render_text(dossier: &Dossier, theme: &Theme) -> String {
    let mut out = String::new();

    out.push_str(&format!("StyleSense {}\n", theme.season));
    out.push_str("Personal Wardrobe Consultation\n\n");
    out.push_str("Your Styled Dossier\n");

    match &dossier.content {
        DossierContent::Recommendation(rec) => {
            for (label, value) in recommendation_rows(rec) {
                out.push_str(&format!("  {:<13} {}\n", format!("{}:", label), value));
            }
            out.push_str(&format!("\n!! Avoid: {}\n", rec.avoid));
        }
        DossierContent::Text(text) => {
            out.push_str(text.trim_end());
            out.push('\n');
        }
    }

    out.push_str("\nRecommended Palette\n");
    for (label, color) in palette_rows(&dossier.palette) {
        out.push_str(&format!("  {:<10} {}\n", format!("{}:", label), color));
    }

    out
}

/// Theme colors come from validated `#RRGGBB` values, so only dossier text
/// needs escaping.
pub fn render_html(dossier: &Dossier, theme: &Theme) -> String {
    let color = &theme.primary_color;
    let mut out = String::new();

    out.push_str("<style>\n");
    out.push_str(&format!(
        ".main-title {{ font-family: 'serif'; color: {}; font-size: 3.5rem; font-weight: 700; }}\n",
        color
    ));
    out.push_str(&format!(
        ".result-card {{ background-color: #f8f9fa; padding: 30px; border-radius: 15px; border-left: 10px solid {}; margin-top: 20px; color: #333333; }}\n",
        color
    ));
    out.push_str(".warning { background-color: #fff4f4; padding: 15px; border-radius: 10px; border-left: 10px solid #B00020; margin-top: 15px; }\n");
    out.push_str(".swatch { display: inline-block; width: 60px; height: 60px; border-radius: 8px; border: 1px solid #cccccc; }\n");
    out.push_str("</style>\n");

    out.push_str(&format!(
        "<h1 class=\"main-title\">StyleSense {}</h1>\n",
        theme.season
    ));
    out.push_str("<h3>Personal Wardrobe Consultation</h3>\n");
    out.push_str("<div class=\"result-card\">\n");

    match &dossier.content {
        DossierContent::Recommendation(rec) => {
            out.push_str("<dl>\n");
            for (label, value) in recommendation_rows(rec) {
                out.push_str(&format!("<dt>{}</dt><dd>{}</dd>\n", label, encode_text(value)));
            }
            out.push_str("</dl>\n");
            out.push_str(&format!(
                "<div class=\"warning\"><strong>Avoid:</strong> {}</div>\n",
                encode_text(&rec.avoid)
            ));
        }
        DossierContent::Text(text) => {
            let body = encode_text(text.trim_end()).replace('\n', "<br>\n");
            out.push_str(&format!("<p>{}</p>\n", body));
        }
    }
    out.push_str("</div>\n");

    out.push_str("<h3>Recommended Palette</h3>\n");
    out.push_str("<div class=\"palette\">\n");
    for (label, swatch) in palette_rows(&dossier.palette) {
        out.push_str(&format!(
            "<figure><span class=\"swatch\" style=\"background-color: {}\"></span><figcaption>{} {}</figcaption></figure>\n",
            encode_double_quoted_attribute(swatch),
            label,
            encode_text(swatch)
        ));
    }
    out.push_str("</div>\n");

    out
}

fn recommendation_rows(rec: &StyleRecommendation) -> [(&'static str, &str); 5] {
    [
        ("Vibe", rec.vibe.as_str()),
        ("Top", rec.top.as_str()),
        ("Bottom", rec.bottom.as_str()),
        ("Accessories", rec.accessories.as_str()),
        ("Why it works", rec.explanation.as_str()),
    ]
}

fn palette_rows(palette: &Palette) -> [(&'static str, &str); 3] {
    [
        ("Base", palette.base.as_str()),
        ("Secondary", palette.secondary.as_str()),
        ("Accent", palette.accent.as_str()),
    ]
}
