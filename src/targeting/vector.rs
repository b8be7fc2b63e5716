//! Attack vector extraction and compatibility.
//!
//! A card's effective vector is the first of:
//! 1. `attackVector` (unless empty)
//! 2. `metadata.category` (unless empty or `"any"`)
//! 3. legacy `category` (unless empty or `"any"`)
//!
//! Wildcards are never vector-constrained, whatever their fields say.

use serde::{Deserialize, Serialize};

use crate::cards::metadata::constraining_category;
use crate::cards::{Card, InfrastructureCard};
use crate::core::AttackVector;

/// Which card field a vector came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VectorSource {
    /// `attackVector`.
    Explicit,
    /// `metadata.category`.
    Metadata,
    /// Legacy top-level `category`.
    LegacyCategory,
}

/// An effective vector and where it came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VectorResolution {
    pub vector: AttackVector,
    pub source: VectorSource,
}

/// Effective attack vector of a card, or `None` if it is unconstrained.
#[must_use]
pub fn effective_vector(card: &Card) -> Option<VectorResolution> {
    if card.is_wildcard() {
        return None;
    }

    if let Some(vector) = card.attack_vector.as_ref().filter(|v| !v.as_str().is_empty()) {
        return Some(VectorResolution {
            vector: vector.clone(),
            source: VectorSource::Explicit,
        });
    }

    if let Some(category) = constraining_category(card.metadata_category()) {
        return Some(VectorResolution {
            vector: AttackVector::from(category),
            source: VectorSource::Metadata,
        });
    }

    constraining_category(card.category.as_deref()).map(|category| VectorResolution {
        vector: AttackVector::from(category),
        source: VectorSource::LegacyCategory,
    })
}

/// Can a card with `vector` affect `infra`?
///
/// No vector, or a node with no listed vectors, is always compatible.
#[must_use]
pub fn is_compatible(vector: Option<&AttackVector>, infra: &InfrastructureCard) -> bool {
    match vector {
        None => true,
        Some(_) if infra.vulnerable_vectors.is_empty() => true,
        Some(v) => infra.is_vulnerable_to(v),
    }
}
