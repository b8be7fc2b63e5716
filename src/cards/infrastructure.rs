//! Infrastructure nodes and board snapshots.
//!
//! `InfrastructureCard` is one targetable node. `Board` is an immutable
//! snapshot of all nodes, backed by `im::Vector` so that handing a copy to
//! several render passes is O(1).

use std::hash::{Hash, Hasher};

use im::Vector;
use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::null_as_default;
use crate::core::error::DecodeError;
use crate::core::{AttackVector, InfrastructureState};

/// Vectors a node is susceptible to.
pub type VectorList = SmallVec<[AttackVector; 4]>;

/// A targetable infrastructure node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfrastructureCard {
    /// Server node ID (e.g. `I001`).
    pub id: String,

    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Current security state.
    pub state: InfrastructureState,

    /// Vectors this node is susceptible to. Empty accepts any vector.
    #[serde(default, deserialize_with = "null_as_default")]
    pub vulnerable_vectors: VectorList,
}

impl InfrastructureCard {
    /// Create a node with no vector restriction.
    #[must_use]
    pub fn new(id: impl Into<String>, state: InfrastructureState) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            state,
            vulnerable_vectors: VectorList::new(),
        }
    }

    /// Set the display name (builder pattern).
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the vulnerable vectors (builder pattern).
    #[must_use]
    pub fn with_vectors<I, V>(mut self, vectors: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<AttackVector>,
    {
        self.vulnerable_vectors = vectors.into_iter().map(Into::into).collect();
        self
    }

    /// Is this node susceptible to `vector`?
    #[must_use]
    pub fn is_vulnerable_to(&self, vector: &AttackVector) -> bool {
        self.vulnerable_vectors.contains(vector)
    }
}

/// Immutable snapshot of the infrastructure row.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    nodes: Vector<InfrastructureCard>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a board from a server JSON array of nodes.
    ///
    /// `null` decodes to an empty board.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        let nodes: Option<Vec<InfrastructureCard>> =
            serde_json::from_str(json).map_err(DecodeError::Infrastructure)?;
        Ok(nodes.unwrap_or_default().into_iter().collect())
    }

    /// Number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the board has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate nodes in board order.
    pub fn iter(&self) -> impl Iterator<Item = &InfrastructureCard> {
        self.nodes.iter()
    }

    /// Find a node by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&InfrastructureCard> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// All node IDs in board order.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.nodes.iter().map(|node| node.id.clone()).collect()
    }

    /// A copy of this board with one node moved to `state`.
    ///
    /// The original snapshot is untouched. Unknown IDs yield an
    /// identical copy.
    #[must_use]
    pub fn with_state(&self, id: &str, state: InfrastructureState) -> Self {
        let mut nodes = self.nodes.clone();
        if let Some(index) = nodes.iter().position(|node| node.id == id) {
            let mut node = nodes[index].clone();
            node.state = state;
            nodes.set(index, node);
        }
        Self { nodes }
    }

    /// Deterministic hash of everything targeting depends on.
    ///
    /// Two boards with equal fingerprints resolve identically for every
    /// card, so `(card.id, fingerprint)` is a sound memoization key.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.nodes.len().hash(&mut hasher);
        for node in &self.nodes {
            node.id.hash(&mut hasher);
            node.state.hash(&mut hasher);
            node.vulnerable_vectors.hash(&mut hasher);
        }
        hasher.finish()
    }
}

impl FromIterator<InfrastructureCard> for Board {
    fn from_iter<I: IntoIterator<Item = InfrastructureCard>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<InfrastructureCard>> for Board {
    fn from(nodes: Vec<InfrastructureCard>) -> Self {
        nodes.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a Board {
    type Item = &'a InfrastructureCard;
    type IntoIter = im::vector::Iter<'a, InfrastructureCard>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
