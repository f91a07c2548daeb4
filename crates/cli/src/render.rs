//! Plain-text and JSON output.

use std::fmt::Write as _;

use anyhow::Result;
use pokedex_client::truncate;
use pokedex_core::display::{display_name, image_url, record_color, stat_label, stat_percentage};
use pokedex_core::{ListPage, Record};
use serde::Serialize;

const NAME_COLUMN: usize = 24;
const BAR_WIDTH: usize = 20;

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn type_names(record: &Record) -> String {
    let names: Vec<&str> = record.types.iter().map(|t| t.type_ref.name.as_str()).collect();
    if names.is_empty() { "-".to_owned() } else { names.join("/") }
}

pub(crate) fn list_page(page: &ListPage) -> String {
    let mut out = String::new();
    for reference in &page.results {
        let _ = writeln!(out, "{:<NAME_COLUMN$} {}", reference.name, reference.url);
    }
    let _ = write!(out, "{} shown, {} total", page.results.len(), page.count);
    out
}

/// One line per record: id, name, types, colour.
pub(crate) fn record_table(records: &[Record]) -> String {
    if records.is_empty() {
        return "No Pokémon found.".to_owned();
    }
    let mut out = String::new();
    for record in records {
        let name = capitalize(&display_name(record));
        let _ = writeln!(
            out,
            "#{:<5} {:<NAME_COLUMN$} {:<18} {}",
            record.id,
            truncate(&name, NAME_COLUMN),
            type_names(record),
            record_color(record)
        );
    }
    let _ = write!(out, "{} Pokémon", records.len());
    out
}

fn stat_bar(base_stat: u32) -> String {
    let pct = stat_percentage(base_stat).clamp(0.0, 100.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "clamped to 0..=100")]
    let filled = (pct / 100.0 * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(BAR_WIDTH.saturating_sub(filled)))
}

fn optional<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_owned(), |v| v.to_string())
}

pub(crate) fn record_detail(record: &Record) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "#{} {}", record.id, capitalize(&display_name(record)));
    let _ = writeln!(out, "Types:   {}", type_names(record));
    let _ = writeln!(
        out,
        "Height:  {}   Weight: {}   Base XP: {}",
        optional(record.height),
        optional(record.weight),
        optional(record.base_experience)
    );
    let _ = writeln!(out, "Image:   {}", image_url(record));
    let _ = write!(out, "Color:   {}", record_color(record));
    if !record.stats.is_empty() {
        out.push_str("\nStats:");
        for entry in &record.stats {
            let _ = write!(
                out,
                "\n  {:<12} {:>3}  {} {:>5.1}%",
                stat_label(&entry.stat.name),
                entry.base_stat,
                stat_bar(entry.base_stat),
                stat_percentage(entry.base_stat)
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pikachu() -> Record {
        serde_json::from_value(serde_json::json!({
            "id": 25,
            "name": "pikachu",
            "species": { "name": "pikachu" },
            "types": [{ "slot": 1, "type": { "name": "electric" } }],
            "stats": [
                { "base_stat": 35, "effort": 0, "stat": { "name": "hp" } },
                { "base_stat": 255, "effort": 2, "stat": { "name": "speed" } }
            ],
            "height": 4,
            "weight": 60
        }))
        .unwrap()
    }

    #[test]
    fn test_record_table_row() {
        let table = record_table(&[pikachu()]);
        assert!(table.starts_with("#25    Pikachu"));
        assert!(table.contains("electric"));
        assert!(table.contains("#eab308"));
        assert!(table.ends_with("1 Pokémon"));
    }

    #[test]
    fn test_record_table_empty() {
        assert_eq!(record_table(&[]), "No Pokémon found.");
    }

    #[test]
    fn test_record_detail_lists_stats_with_labels() {
        let detail = record_detail(&pikachu());
        assert!(detail.starts_with("#25 Pikachu\n"));
        assert!(detail.contains("Base XP: -"));
        assert!(detail.contains("HP"));
        assert!(detail.contains(&format!("{} 100.0%", "#".repeat(BAR_WIDTH))));
    }

    #[test]
    fn test_stat_bar_scales_to_width() {
        assert_eq!(stat_bar(0), ".".repeat(BAR_WIDTH));
        assert_eq!(stat_bar(300), "#".repeat(BAR_WIDTH));
        assert_eq!(stat_bar(128).matches('#').count(), 10);
    }

    #[test]
    fn test_list_page_footer() {
        let page: ListPage = serde_json::from_value(serde_json::json!({
            "count": 1302,
            "next": null,
            "previous": null,
            "results": [{ "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" }]
        }))
        .unwrap();
        let text = list_page(&page);
        assert!(text.starts_with("bulbasaur"));
        assert!(text.ends_with("1 shown, 1302 total"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("mr-mime"), "Mr-mime");
        assert_eq!(capitalize(""), "");
    }
}
