//! Free-form card metadata.
//!
//! The server attaches a loosely typed `metadata` object to cards. Only a
//! few keys matter for targeting (`category` above all), but the whole map
//! is kept so cards round-trip untouched.
//!
//! ## MetadataValue Types
//!
//! - `Bool`: Flags
//! - `Int`: Whole numbers
//! - `Float`: Other numbers
//! - `Text`: Strings (category, flavor)
//! - `TextList`: String lists (tags)

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Metadata key holding the card's attack category.
pub const CATEGORY_KEY: &str = "category";

/// Category value meaning "no particular vector".
pub const ANY_CATEGORY: &str = "any";

/// Value stored under a metadata key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    TextList(Vec<String>),
    /// Anything else (nested objects, mixed arrays, null).
    Other(serde_json::Value),
}

impl MetadataValue {
    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            MetadataValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MetadataValue::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(v: &str) -> Self {
        MetadataValue::Text(v.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(v: String) -> Self {
        MetadataValue::Text(v)
    }
}

impl From<i64> for MetadataValue {
    fn from(v: i64) -> Self {
        MetadataValue::Int(v)
    }
}

impl From<bool> for MetadataValue {
    fn from(v: bool) -> Self {
        MetadataValue::Bool(v)
    }
}

/// Card metadata map.
pub type Metadata = FxHashMap<String, MetadataValue>;

/// A category that constrains targeting: present, non-empty and not `"any"`.
#[must_use]
pub fn constraining_category(category: Option<&str>) -> Option<&str> {
    category.filter(|c| !c.is_empty() && *c != ANY_CATEGORY)
}
