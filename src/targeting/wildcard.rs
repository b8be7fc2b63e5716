//! Wildcard resolution.
//!
//! Before the rule table can apply, a wildcard has to be turned into the
//! concrete type(s) it will be evaluated as:
//!
//! - compound tokens (`exploit-attack`, `shield_or_fortify`) evaluate as both
//!   types, and their targets are unioned
//! - `any` offers every node and leaves the choice of type to the server
//! - single types and candidate lists pick the first type, in priority
//!   order, that has at least one target on the current board
//! - anything else stays a nominal `wildcard`, which targets nothing
//!
//! Wildcards are never vector-constrained, so selection here always runs
//! without a vector.

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::rules::RuleTable;
use crate::cards::{Card, CardType, InfrastructureCard, TypeList, WildcardSpec};

/// Default order in which a wildcard's candidate types are tried.
pub const DEFAULT_PRIORITY: [CardType; 9] = [
    CardType::Exploit,
    CardType::Attack,
    CardType::Shield,
    CardType::Fortify,
    CardType::Response,
    CardType::Reaction,
    CardType::Special,
    CardType::CounterAttack,
    CardType::Counter,
];

/// The type(s) a card is evaluated as.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// One or two types; targets of each are unioned in this order.
    Types(SmallVec<[CardType; 2]>),
    /// Every node, regardless of state.
    AnyInfrastructure,
}

impl Resolution {
    fn single(card_type: CardType) -> Self {
        Self::Types(smallvec::smallvec![card_type])
    }

    /// Effective types, empty for `AnyInfrastructure`.
    #[must_use]
    pub fn types(&self) -> &[CardType] {
        match self {
            Self::Types(types) => types,
            Self::AnyInfrastructure => &[],
        }
    }
}

/// Resolve the type(s) `card` is evaluated as on this board.
#[must_use]
pub fn resolve_effective_types(
    card: &Card,
    nodes: &[&InfrastructureCard],
    rules: &RuleTable,
    priority: &[CardType],
) -> Resolution {
    if !card.is_wildcard() {
        return Resolution::single(card.card_type);
    }

    let resolution = match &card.wildcard_type {
        None => Resolution::single(CardType::Wildcard),
        Some(WildcardSpec::Any) => Resolution::AnyInfrastructure,
        Some(WildcardSpec::Dual(a, b)) => Resolution::Types(smallvec::smallvec![*a, *b]),
        Some(spec) => first_viable_type(spec, nodes, rules, priority)
            .map_or_else(|| Resolution::single(CardType::Wildcard), Resolution::single),
    };

    debug!(card = %card.id, ?resolution, "resolved wildcard");
    resolution
}

/// First offered type, in priority order, with a target on the board.
fn first_viable_type(
    spec: &WildcardSpec,
    nodes: &[&InfrastructureCard],
    rules: &RuleTable,
    priority: &[CardType],
) -> Option<CardType> {
    priority
        .iter()
        .copied()
        .filter(|t| spec.offers(*t))
        .find(|t| {
            let count = rules.select(*t, nodes, None).len();
            trace!(card_type = %t, count, "trying wildcard type");
            count > 0
        })
}

/// Types a wildcard could be played as against `target`, in priority order.
///
/// A type qualifies when its rule would select `target` on this board.
/// Non-wildcards yield an empty list.
#[must_use]
pub fn playable_types(
    card: &Card,
    target: &InfrastructureCard,
    nodes: &[&InfrastructureCard],
    rules: &RuleTable,
    priority: &[CardType],
) -> TypeList {
    let Some(spec) = card.wildcard_type.as_ref().filter(|_| card.is_wildcard()) else {
        return TypeList::new();
    };

    priority
        .iter()
        .copied()
        .filter(|t| spec.offers(*t))
        .filter(|t| {
            rules
                .select(*t, nodes, None)
                .iter()
                .any(|node| node.id == target.id)
        })
        .collect()
}
