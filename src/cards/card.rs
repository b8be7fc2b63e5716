//! Playable cards, as delivered by the game server.
//!
//! A `Card` is read-only input to the targeting resolver. The builder
//! methods exist for tests and for callers that assemble cards by hand;
//! cards coming off the wire go through `Card::from_json`.
//!
//! ## Example
//!
//! ```
//! use darknet_targeting::cards::{Card, CardType};
//! use darknet_targeting::core::AttackVector;
//!
//! let card = Card::new("A101", CardType::Attack)
//!     .with_name("SQL Injection")
//!     .with_vector(AttackVector::Web);
//!
//! assert_eq!(card.attack_vector, Some(AttackVector::Web));
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use super::card_type::CardType;
use super::metadata::{Metadata, MetadataValue, CATEGORY_KEY};
use super::wildcard::WildcardSpec;
use crate::core::error::DecodeError;
use crate::core::AttackVector;

/// What a card aims at when played.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// A single infrastructure node picked by the player.
    #[default]
    Infrastructure,
    /// The opponent's hand; no node is picked.
    OpponentHand,
    /// Every node at once; no node is picked.
    AllInfrastructure,
}

impl TargetKind {
    /// Target kind implied by legacy server card IDs.
    ///
    /// Older card data marks hand-disruption cards (`A307...`) and
    /// board-wide response cards (`D303...`) only through their ID.
    #[must_use]
    pub fn from_legacy_id(id: &str) -> Option<Self> {
        if id.starts_with("A307") {
            Some(Self::OpponentHand)
        } else if id.starts_with("D303") {
            Some(Self::AllInfrastructure)
        } else {
            None
        }
    }
}

/// A playable card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Server card ID (e.g. `A101`, `D204`).
    pub id: String,

    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Card type.
    #[serde(rename = "type")]
    pub card_type: CardType,

    /// What a wildcard may be played as. Ignored for other types.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wildcard_type: Option<WildcardSpec>,

    /// Explicit attack vector.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack_vector: Option<AttackVector>,

    /// Free-form metadata; `metadata.category` is a vector fallback.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Metadata::is_empty"
    )]
    pub metadata: Metadata,

    /// Legacy top-level category, the last vector fallback.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    /// Precomputed targets; when non-empty they override all rules.
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub valid_targets: Vec<String>,

    /// Forces the card into targeting mode regardless of type.
    #[serde(default, deserialize_with = "null_as_default")]
    pub requires_target: bool,

    /// What the card aims at. `None` means infrastructure.
    #[serde(default, rename = "target", skip_serializing_if = "Option::is_none")]
    pub target_kind: Option<TargetKind>,
}

/// Decode `null` the same as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Card {
    /// Create a card with only an ID and a type.
    #[must_use]
    pub fn new(id: impl Into<String>, card_type: CardType) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            card_type,
            wildcard_type: None,
            attack_vector: None,
            metadata: Metadata::default(),
            category: None,
            valid_targets: Vec::new(),
            requires_target: false,
            target_kind: None,
        }
    }

    /// Create a wildcard card.
    #[must_use]
    pub fn wildcard(id: impl Into<String>, spec: WildcardSpec) -> Self {
        Self::new(id, CardType::Wildcard).with_wildcard(spec)
    }

    /// Decode a card from server JSON.
    ///
    /// Cards without an explicit `target` get one from their legacy ID
    /// prefix, so nothing downstream has to look at IDs.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        let mut card: Card = serde_json::from_str(json).map_err(DecodeError::Card)?;
        if card.target_kind.is_none() {
            card.target_kind = TargetKind::from_legacy_id(&card.id);
        }
        Ok(card)
    }

    /// Set the display name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the wildcard spec (builder pattern).
    #[must_use]
    pub fn with_wildcard(mut self, spec: WildcardSpec) -> Self {
        self.wildcard_type = Some(spec);
        self
    }

    /// Set the explicit attack vector (builder pattern).
    #[must_use]
    pub fn with_vector(mut self, vector: impl Into<AttackVector>) -> Self {
        self.attack_vector = Some(vector.into());
        self
    }

    /// Set `metadata.category` (builder pattern).
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.metadata
            .insert(CATEGORY_KEY.to_string(), MetadataValue::Text(category.into()));
        self
    }

    /// Set the legacy top-level category (builder pattern).
    #[must_use]
    pub fn with_legacy_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set precomputed targets (builder pattern).
    #[must_use]
    pub fn with_valid_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.valid_targets = targets.into_iter().map(Into::into).collect();
        self
    }

    /// Force targeting mode (builder pattern).
    #[must_use]
    pub fn requiring_target(mut self) -> Self {
        self.requires_target = true;
        self
    }

    /// Set the target kind (builder pattern).
    #[must_use]
    pub fn with_target_kind(mut self, kind: TargetKind) -> Self {
        self.target_kind = Some(kind);
        self
    }

    /// What this card aims at.
    #[must_use]
    pub fn target_kind(&self) -> TargetKind {
        self.target_kind.unwrap_or_default()
    }

    /// `metadata.category`, if it is text.
    #[must_use]
    pub fn metadata_category(&self) -> Option<&str> {
        self.metadata.get(CATEGORY_KEY).and_then(MetadataValue::as_text)
    }

    /// Is this a wildcard card?
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.card_type == CardType::Wildcard
    }
}
