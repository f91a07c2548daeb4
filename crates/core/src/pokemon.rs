//! Catalog domain types as served by the upstream API.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::constants::MAX_NAME_LEN;

/// Lightweight name + URL pointer to a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub name: String,
    pub url: String,
}

/// One page of references plus pagination cursors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPage {
    /// Total entries known upstream
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Reference>,
}

/// Full detail object for one catalog entry.
///
/// Decoding is lenient: a missing or wrongly typed field decodes to its
/// default (`id` 0, `name` ""), and malformed `types`/`stats` entries are
/// skipped. The catalog session, not the client, decides what is displayable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "lenient")]
    pub id: i64,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub sprites: Sprites,
    #[serde(default, deserialize_with = "lenient")]
    pub species: NamedResource,
    #[serde(default, deserialize_with = "lenient_entries")]
    pub types: Vec<TypeSlot>,
    #[serde(default, deserialize_with = "lenient_entries")]
    pub stats: Vec<StatEntry>,
    #[serde(default, deserialize_with = "lenient")]
    pub height: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub weight: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub base_experience: Option<u32>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

fn lenient_entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(entries) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(entries.into_iter().filter_map(|entry| serde_json::from_value(entry).ok()).collect())
}

impl Record {
    /// Decodes a detail body. Anything that is not an object yields an empty,
    /// non-displayable record instead of an error.
    #[must_use]
    pub fn from_json(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "detail body is not a record object");
            Self::default()
        })
    }

    /// Positive id and a non-empty name of at most 50 characters.
    #[must_use]
    pub fn is_displayable(&self) -> bool {
        self.id > 0 && !self.name.is_empty() && self.name.chars().count() <= MAX_NAME_LEN
    }

    /// Name of the first (primary) type, if any.
    #[must_use]
    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(|t| t.type_ref.name.as_str())
    }
}

/// Drops every record that is not displayable, keeping order.
#[must_use]
pub fn retain_displayable(records: Vec<Record>) -> Vec<Record> {
    let before = records.len();
    let kept: Vec<Record> = records.into_iter().filter(Record::is_displayable).collect();
    let dropped = before.saturating_sub(kept.len());
    if dropped > 0 {
        tracing::debug!(dropped, "discarded malformed records");
    }
    kept
}

/// `{name}` wrapper the upstream uses for species, types and stats.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(default, rename = "official-artwork")]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}
