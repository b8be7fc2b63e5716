//! Attack vectors.
//!
//! A vector is a category tag ("malware", "physical", ...) that constrains
//! which infrastructure nodes a card may affect. The server emits vectors as
//! plain strings; the known ones get their own variant and anything else is
//! carried through as `Other` so that matching still works.

use serde::{Deserialize, Serialize};

/// Category tag constraining which nodes a card may affect.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AttackVector {
    Exploit,
    Ddos,
    Attack,
    Network,
    Web,
    Social,
    Malware,
    /// A vector the client has no variant for.
    Other(String),
}

impl AttackVector {
    /// Wire spelling.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Exploit => "exploit",
            Self::Ddos => "ddos",
            Self::Attack => "attack",
            Self::Network => "network",
            Self::Web => "web",
            Self::Social => "social",
            Self::Malware => "malware",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for AttackVector {
    fn from(s: &str) -> Self {
        match s {
            "exploit" => Self::Exploit,
            "ddos" => Self::Ddos,
            "attack" => Self::Attack,
            "network" => Self::Network,
            "web" => Self::Web,
            "social" => Self::Social,
            "malware" => Self::Malware,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for AttackVector {
    fn from(s: String) -> Self {
        match Self::from(s.as_str()) {
            Self::Other(_) => Self::Other(s),
            known => known,
        }
    }
}

impl From<AttackVector> for String {
    fn from(vector: AttackVector) -> Self {
        match vector {
            AttackVector::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for AttackVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
