//! Listing domain model
//!
//! A listing is one project offered in the catalog. Only `title` and
//! `description` take part in text matching and only `category` takes part in
//! facet matching; every other field is carried for display.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

use crate::ids::{CategoryId, ListingId};

/// One project listing as served by the listings endpoint.
///
/// `id`, `title` and `description` are required. Display-only fields accept
/// any JSON scalar or `null`, so a loosely typed value on one record never
/// rejects the whole catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub description: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub seller: String,
    /// Free-form on the wire; unknown values never match a category filter.
    #[serde(default, deserialize_with = "text_or_empty")]
    pub category: String,
    #[serde(default, deserialize_with = "tags_or_empty")]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub completion_status: DisplayValue,
    #[serde(default = "DisplayValue::zero", deserialize_with = "count_or_zero")]
    pub views: DisplayValue,
    #[serde(default)]
    pub price: DisplayValue,
}

impl Listing {
    /// Whether this listing belongs to `category`.
    ///
    /// The wildcard matches every listing, including ones with an empty or
    /// unknown category.
    pub fn in_category(&self, category: &CategoryId) -> bool {
        category.is_wildcard() || self.category == category.as_str()
    }
}

/// A scalar shown to the user verbatim.
///
/// Keeps numbers as numbers and everything else as text. `null` becomes empty
/// text; booleans and nested values keep their JSON rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DisplayValue {
    Number(serde_json::Number),
    Text(String),
}

impl DisplayValue {
    pub fn zero() -> Self {
        Self::Number(0u64.into())
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }

    fn from_json(value: Value) -> Self {
        match value {
            Value::Null => Self::default(),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::Text(s),
            other => Self::Text(other.to_string()),
        }
    }
}

impl Default for DisplayValue {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl<'de> Deserialize<'de> for DisplayValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::from_json)
    }
}

impl From<u64> for DisplayValue {
    fn from(n: u64) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for DisplayValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl Display for DisplayValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

fn text_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    DisplayValue::deserialize(deserializer).map(|v| v.to_string())
}

fn count_or_zero<'de, D>(deserializer: D) -> Result<DisplayValue, D::Error>
where
    D: Deserializer<'de>,
{
    let value = DisplayValue::deserialize(deserializer)?;
    Ok(if value.is_blank() {
        DisplayValue::zero()
    } else {
        value
    })
}

/// A tag list; a lone scalar becomes one tag and `null` entries are skipped.
fn tags_or_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        other => vec![other],
    };
    Ok(items
        .into_iter()
        .map(DisplayValue::from_json)
        .filter(|tag| !tag.is_blank())
        .map(|tag| tag.to_string())
        .collect())
}
