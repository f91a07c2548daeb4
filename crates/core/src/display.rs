//! Presentation helpers shared by every front end.

use crate::constants::MAX_BASE_STAT;
use crate::pokemon::Record;
use crate::sanitize::sanitize_display_text;

/// Image shown when a record carries no usable sprite.
pub const PLACEHOLDER_IMAGE: &str = "/images/default-pokemon.svg";

/// Colour used when the primary type is unknown.
pub const FALLBACK_TYPE_COLOR: &str = "#ef4444";

fn is_web_url(url: &str) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

/// Official artwork, then the default sprite, then [`PLACEHOLDER_IMAGE`].
#[must_use]
pub fn image_url(record: &Record) -> &str {
    let artwork = record
        .sprites
        .other
        .as_ref()
        .and_then(|o| o.official_artwork.as_ref())
        .and_then(|a| a.front_default.as_deref());
    artwork
        .into_iter()
        .chain(record.sprites.front_default.as_deref())
        .find(|url| is_web_url(url))
        .unwrap_or(PLACEHOLDER_IMAGE)
}

/// Species name, falling back to the record name, then `"Unknown"`.
#[must_use]
pub fn display_name(record: &Record) -> String {
    let raw = [record.species.name.as_str(), record.name.as_str()]
        .into_iter()
        .find(|n| !n.is_empty());
    match raw {
        Some(name) => sanitize_display_text(name),
        None => "Unknown".to_owned(),
    }
}

#[must_use]
pub fn stat_label(stat: &str) -> &str {
    match stat {
        "hp" => "HP",
        "attack" => "Attack",
        "defense" => "Defense",
        "special-attack" => "Sp. Attack",
        "special-defense" => "Sp. Defense",
        "speed" => "Speed",
        other => other,
    }
}

/// Base stat scaled to a 0-100 bar (values above 255 exceed 100).
#[must_use]
pub fn stat_percentage(base_stat: u32) -> f64 {
    f64::from(base_stat) / f64::from(MAX_BASE_STAT) * 100.0
}

/// Hex colour for a type name, case-insensitive.
#[must_use]
pub fn type_color(type_name: &str) -> &'static str {
    match type_name.to_ascii_lowercase().as_str() {
        "normal" => "#a3a3a3",
        "fire" => "#f97316",
        "water" => "#3b82f6",
        "electric" => "#eab308",
        "grass" => "#22c55e",
        "ice" => "#93c5fd",
        "fighting" => "#dc2626",
        "poison" => "#a855f7",
        "ground" => "#ca8a04",
        "flying" => "#818cf8",
        "psychic" => "#ec4899",
        "bug" => "#84cc16",
        "rock" => "#a16207",
        "ghost" => "#7c3aed",
        "dragon" => "#4338ca",
        "dark" => "#52525b",
        "steel" => "#6b7280",
        "fairy" => "#f9a8d4",
        _ => FALLBACK_TYPE_COLOR,
    }
}

/// Colour of the record's primary type.
#[must_use]
pub fn record_color(record: &Record) -> &'static str {
    record.primary_type().map_or(FALLBACK_TYPE_COLOR, type_color)
}
