//! Card types and player sides.
//!
//! The card type decides which infrastructure states a card may target.
//! `Counter` is the server's alias for `CounterAttack`; both are kept so
//! that a card round-trips with the spelling it arrived in.

use serde::{Deserialize, Serialize};

use crate::core::error::ParseError;

/// The two asymmetric player roles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Compromises infrastructure.
    Attacker,
    /// Secures infrastructure.
    Defender,
}

/// Type of a playable card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardType {
    // === Attacker ===
    Exploit,
    Attack,
    CounterAttack,
    Counter,

    // === Defender ===
    Shield,
    Fortify,
    Response,
    Reaction,

    // === Either side ===
    Wildcard,
    Special,

    /// Any type string the client does not recognize.
    #[serde(other)]
    Unknown,
}

impl CardType {
    /// Number of card types.
    pub const COUNT: usize = 11;

    /// All card types, in declaration order.
    pub const ALL: [CardType; Self::COUNT] = [
        Self::Exploit,
        Self::Attack,
        Self::CounterAttack,
        Self::Counter,
        Self::Shield,
        Self::Fortify,
        Self::Response,
        Self::Reaction,
        Self::Wildcard,
        Self::Special,
        Self::Unknown,
    ];

    /// Types a wildcard may be played as.
    pub const CONCRETE: [CardType; 9] = [
        Self::Exploit,
        Self::Attack,
        Self::CounterAttack,
        Self::Counter,
        Self::Shield,
        Self::Fortify,
        Self::Response,
        Self::Reaction,
        Self::Special,
    ];

    /// Dense index, used by the rule table.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Wire spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exploit => "exploit",
            Self::Attack => "attack",
            Self::CounterAttack => "counter-attack",
            Self::Counter => "counter",
            Self::Shield => "shield",
            Self::Fortify => "fortify",
            Self::Response => "response",
            Self::Reaction => "reaction",
            Self::Wildcard => "wildcard",
            Self::Special => "special",
            Self::Unknown => "unknown",
        }
    }

    /// Capitalized name, as used in the server's validation messages.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Exploit => "Exploit",
            Self::Attack => "Attack",
            Self::CounterAttack => "Counter-attack",
            Self::Counter => "Counter",
            Self::Shield => "Shield",
            Self::Fortify => "Fortify",
            Self::Response => "Response",
            Self::Reaction => "Reaction",
            Self::Wildcard => "Wildcard",
            Self::Special => "Special",
            Self::Unknown => "Unknown",
        }
    }

    /// Which side plays this type, if it belongs to one.
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self {
            Self::Exploit | Self::Attack | Self::CounterAttack | Self::Counter => {
                Some(Side::Attacker)
            }
            Self::Shield | Self::Fortify | Self::Response | Self::Reaction => {
                Some(Side::Defender)
            }
            Self::Wildcard | Self::Special | Self::Unknown => None,
        }
    }

    /// Does playing a card of this type require picking a node?
    ///
    /// Every attacker and defender type does; `special` does when it is
    /// offered by a wildcard (lateral movement style effects).
    #[must_use]
    pub const fn is_targeting(self) -> bool {
        !matches!(self, Self::Wildcard | Self::Unknown)
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CardType {
    type Err = ParseError;

    /// Parse a server type string. Unlike deserialization, which maps
    /// unrecognized strings to `Unknown`, this rejects them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .filter(|t| *t != Self::Unknown)
            .find(|t| t.as_str() == s)
            .ok_or_else(|| ParseError::UnknownCardType(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_position() {
        for (i, t) in CardType::ALL.into_iter().enumerate() {
            assert_eq!(t.index(), i);
        }
    }

    #[test]
    fn test_wire_names() {
        let json = serde_json::to_string(&CardType::CounterAttack).unwrap();
        assert_eq!(json, "\"counter-attack\"");

        let t: CardType = serde_json::from_str("\"counter\"").unwrap();
        assert_eq!(t, CardType::Counter);

        for t in CardType::ALL {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t.as_str()));
        }
    }

    #[test]
    fn test_unrecognized_type_deserializes_to_unknown() {
        let t: CardType = serde_json::from_str("\"utility\"").unwrap();
        assert_eq!(t, CardType::Unknown);
    }

    #[test]
    fn test_from_str() {
        assert_eq!("shield".parse::<CardType>().unwrap(), CardType::Shield);
        assert_eq!(
            "counter-attack".parse::<CardType>().unwrap(),
            CardType::CounterAttack
        );
        assert_eq!(
            "utility".parse::<CardType>(),
            Err(ParseError::UnknownCardType("utility".to_string()))
        );
        assert!("unknown".parse::<CardType>().is_err());
    }

    #[test]
    fn test_display_names_capitalize_wire_names() {
        assert_eq!(CardType::CounterAttack.display_name(), "Counter-attack");
        for t in CardType::ALL {
            assert_eq!(t.display_name().to_lowercase(), t.as_str());
        }
    }

    #[test]
    fn test_sides() {
        assert_eq!(CardType::Exploit.side(), Some(Side::Attacker));
        assert_eq!(CardType::Counter.side(), Some(Side::Attacker));
        assert_eq!(CardType::Reaction.side(), Some(Side::Defender));
        assert_eq!(CardType::Wildcard.side(), None);
        assert_eq!(CardType::Special.side(), None);
    }

    #[test]
    fn test_concrete_types_exclude_wildcard() {
        assert!(!CardType::CONCRETE.contains(&CardType::Wildcard));
        assert!(!CardType::CONCRETE.contains(&CardType::Unknown));
        assert!(CardType::CONCRETE.iter().all(|t| t.is_targeting()));
    }
}
