//! Wildcard type specifications.
//!
//! The server sends `wildcardType` either as a single string token or as a
//! list of type names. Both decode into `WildcardSpec`:
//!
//! | Wire value | Spec |
//! |---|---|
//! | `"any"` | `Any` |
//! | `"exploit-attack"` | `Dual(Exploit, Attack)` |
//! | `"shield_or_fortify"` | `Dual(Shield, Fortify)` |
//! | `"attack"`, `"special"`, ... | `Single(..)` |
//! | `["shield", "response"]` | `Candidates(..)` |
//! | `"draw"`, `"disrupt"`, ... | `Unrecognized(..)` |

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card_type::CardType;

/// Up to four candidate types inline; wildcards rarely offer more.
pub type TypeList = SmallVec<[CardType; 4]>;

/// What a wildcard card may be played as.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WildcardRepr", into = "WildcardRepr")]
pub enum WildcardSpec {
    /// Exactly one type.
    Single(CardType),
    /// Compound token: targets of both types are offered together.
    Dual(CardType, CardType),
    /// Any type; the server decides which one applies to the chosen node.
    Any,
    /// Ordered list of types; one is picked by priority at play time.
    Candidates(TypeList),
    /// A token that names no card type.
    Unrecognized(String),
}

const TOKEN_ANY: &str = "any";
const TOKEN_EXPLOIT_ATTACK: &str = "exploit-attack";
const TOKEN_SHIELD_OR_FORTIFY: &str = "shield_or_fortify";

impl WildcardSpec {
    /// Types this wildcard offers, in the order the card lists them.
    #[must_use]
    pub fn offered_types(&self) -> TypeList {
        match self {
            Self::Single(t) => smallvec::smallvec![*t],
            Self::Dual(a, b) => smallvec::smallvec![*a, *b],
            Self::Any => CardType::CONCRETE.iter().copied().collect(),
            Self::Candidates(types) => types.clone(),
            Self::Unrecognized(_) => TypeList::new(),
        }
    }

    /// Can this wildcard be played as `card_type`?
    #[must_use]
    pub fn offers(&self, card_type: CardType) -> bool {
        match self {
            Self::Any => CardType::CONCRETE.contains(&card_type),
            Self::Single(t) => *t == card_type,
            Self::Dual(a, b) => *a == card_type || *b == card_type,
            Self::Candidates(types) => types.contains(&card_type),
            Self::Unrecognized(_) => false,
        }
    }

    fn from_token(token: String) -> Self {
        match token.as_str() {
            TOKEN_ANY => Self::Any,
            TOKEN_EXPLOIT_ATTACK => Self::Dual(CardType::Exploit, CardType::Attack),
            TOKEN_SHIELD_OR_FORTIFY => Self::Dual(CardType::Shield, CardType::Fortify),
            other => match other.parse::<CardType>() {
                Ok(t) => Self::Single(t),
                Err(_) => Self::Unrecognized(token),
            },
        }
    }
}

/// Wire shape of `wildcardType`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum WildcardRepr {
    Token(String),
    List(Vec<String>),
}

impl From<WildcardRepr> for WildcardSpec {
    fn from(repr: WildcardRepr) -> Self {
        match repr {
            WildcardRepr::Token(token) => Self::from_token(token),
            WildcardRepr::List(names) => Self::Candidates(
                names
                    .iter()
                    .filter_map(|name| name.parse::<CardType>().ok())
                    .collect(),
            ),
        }
    }
}

impl From<WildcardSpec> for WildcardRepr {
    fn from(spec: WildcardSpec) -> Self {
        match spec {
            WildcardSpec::Single(t) => Self::Token(t.as_str().to_string()),
            WildcardSpec::Dual(CardType::Exploit, CardType::Attack) => {
                Self::Token(TOKEN_EXPLOIT_ATTACK.to_string())
            }
            WildcardSpec::Dual(CardType::Shield, CardType::Fortify) => {
                Self::Token(TOKEN_SHIELD_OR_FORTIFY.to_string())
            }
            WildcardSpec::Dual(a, b) => {
                Self::List(vec![a.as_str().to_string(), b.as_str().to_string()])
            }
            WildcardSpec::Any => Self::Token(TOKEN_ANY.to_string()),
            WildcardSpec::Candidates(types) => {
                Self::List(types.iter().map(|t| t.as_str().to_string()).collect())
            }
            WildcardSpec::Unrecognized(token) => Self::Token(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> WildcardSpec {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_decode_tokens() {
        assert_eq!(decode("\"any\""), WildcardSpec::Any);
        assert_eq!(
            decode("\"exploit-attack\""),
            WildcardSpec::Dual(CardType::Exploit, CardType::Attack)
        );
        assert_eq!(
            decode("\"shield_or_fortify\""),
            WildcardSpec::Dual(CardType::Shield, CardType::Fortify)
        );
        assert_eq!(decode("\"special\""), WildcardSpec::Single(CardType::Special));
        assert_eq!(decode("\"draw\""), WildcardSpec::Unrecognized("draw".into()));
    }

    #[test]
    fn test_decode_list_drops_unknown_names() {
        let spec = decode(r#"["response", "teleport", "reaction"]"#);
        assert_eq!(
            spec,
            WildcardSpec::Candidates(smallvec::smallvec![CardType::Response, CardType::Reaction])
        );
    }

    #[test]
    fn test_compound_tokens_round_trip() {
        for token in ["\"exploit-attack\"", "\"shield_or_fortify\"", "\"any\""] {
            let spec = decode(token);
            assert_eq!(serde_json::to_string(&spec).unwrap(), token);
        }
    }

    #[test]
    fn test_offered_types() {
        let dual = WildcardSpec::Dual(CardType::Exploit, CardType::Attack);
        assert_eq!(dual.offered_types().as_slice(), &[CardType::Exploit, CardType::Attack]);
        assert!(dual.offers(CardType::Attack));
        assert!(!dual.offers(CardType::Shield));

        assert_eq!(WildcardSpec::Any.offered_types().len(), CardType::CONCRETE.len());
        assert!(WildcardSpec::Any.offers(CardType::Reaction));
        assert!(!WildcardSpec::Any.offers(CardType::Wildcard));

        assert!(WildcardSpec::Unrecognized("draw".into()).offered_types().is_empty());
    }
}
