//! Display formatting helpers and type badge colors
//!
//! Pure presentation data for the embedding UI; nothing here feeds back into
//! matchup or coverage math.

use dexa_typing::Type;

/// Format a catalog id for display, e.g. `#025`
pub fn format_id(id: u32) -> String {
    format!("#{id:03}")
}

/// Format a height in decimetres, e.g. `1.7 m`
pub fn format_height(decimetres: u32) -> String {
    format!("{:.1} m", decimetres as f32 / 10.0)
}

/// Format a weight in hectograms, e.g. `90.5 kg`
pub fn format_weight(hectograms: u32) -> String {
    format!("{:.1} kg", hectograms as f32 / 10.0)
}

/// Uppercase the first letter of a lowercase catalog name
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Badge background color for a type, as a CSS hex string
pub fn type_color(t: Type) -> &'static str {
    match t {
        Type::Normal => "#a8a878",
        Type::Fire => "#f08030",
        Type::Water => "#6890f0",
        Type::Electric => "#f8d030",
        Type::Grass => "#78c850",
        Type::Ice => "#98d8d8",
        Type::Fighting => "#c03028",
        Type::Poison => "#a040a0",
        Type::Ground => "#e0c068",
        Type::Flying => "#a890f0",
        Type::Psychic => "#f85888",
        Type::Bug => "#a8b820",
        Type::Rock => "#b8a038",
        Type::Ghost => "#705898",
        Type::Dragon => "#7038f8",
        Type::Dark => "#705848",
        Type::Steel => "#b8b8d0",
        Type::Fairy => "#ee99ac",
    }
}
