use crate::domain::model::Consultation;

/// Build the stylist prompt sent to the text-generation service.
pub fn build_prompt(consultation: &Consultation) -> String {
    let request = &consultation.request;
    let materials = if consultation.materials.is_empty() {
        "None specified".to_string()
    } else {
        consultation
            .materials
            .iter()
            .map(|m| m.label())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let mut prompt = String::new();

    prompt.push_str("Act as a professional high-fashion stylist. ");
    prompt.push_str("Build an elite outfit based on these:\n");
    prompt.push_str(&format!("HERO: {}.\n", request.anchor_piece.trim()));
    prompt.push_str(&format!("SEASON: {}.\n", consultation.season));
    prompt.push_str(&format!("SILHOUETTE: {}.\n", consultation.silhouette));
    prompt.push_str(&format!("MATERIALS: {}.\n", materials));
    prompt.push_str(&format!("OCCASION: {}.\n", request.occasion));
    prompt.push_str(&format!("TIME: {}.\n", request.time_of_day));
    prompt.push_str(&format!("ENERGY: {}.\n", consultation.energy));
    prompt.push_str(&format!("AESTHETIC: {}.\n", request.aesthetic));
    prompt.push_str(&format!("ACCENT COLOR: {}.\n\n", consultation.accent_color));

    prompt.push_str("Provide:\n");
    prompt.push_str("1. THE LOOK: (A catchy name)\n");
    prompt.push_str("2. THE CAPSULE: (List Top, Bottom, Shoes, Outerwear)\n");
    prompt.push_str(&format!(
        "3. STYLE STRATEGY: (Why this works for {})\n",
        consultation.season
    ));
    prompt.push_str("4. ACCESSORIZER: (Jewelry/Bags)\n");
    prompt.push_str("5. THE BIG NO-NO: (What to avoid)\n");

    prompt
}
