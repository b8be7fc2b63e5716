//! Card-type-to-state rule table.
//!
//! Which infrastructure states each card type may legally target. The table
//! is data: one `TargetRule` per `CardType`, so it can be checked pair by
//! pair and overridden per type when the server's validator disagrees.
//!
//! | Card type | Rule |
//! |---|---|
//! | `attack` | vulnerable |
//! | `exploit` | secure, fortified, fortified_weaken |
//! | `shield` | secure |
//! | `fortify` | shielded |
//! | `response` | compromised |
//! | `reaction` | vulnerable |
//! | `counter-attack` / `counter` | shielded |
//! | `special` | compromised, else every node |
//! | `wildcard` (unresolved) | nothing |
//! | unknown | every node |

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::vector::is_compatible;
use crate::cards::{CardType, InfrastructureCard};
use crate::core::{AttackVector, StateSet};

/// Nodes selected from a board, in board order.
pub type NodeList<'a> = SmallVec<[&'a InfrastructureCard; 8]>;

/// How one card type selects nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "states", rename_all = "snake_case")]
pub enum TargetRule {
    /// Nodes in these states that are vector-compatible.
    States(StateSet),
    /// Nodes in these states; every node if none are.
    PreferStates(StateSet),
    /// Every node.
    AllInfrastructure,
    /// No node.
    Nothing,
}

impl TargetRule {
    /// States this rule can ever select.
    #[must_use]
    pub const fn states(self) -> StateSet {
        match self {
            Self::States(set) | Self::PreferStates(set) => set,
            Self::AllInfrastructure => StateSet::all(),
            Self::Nothing => StateSet::empty(),
        }
    }

    /// Apply this rule to a board.
    #[must_use]
    pub fn select<'a>(
        self,
        nodes: &[&'a InfrastructureCard],
        vector: Option<&AttackVector>,
    ) -> NodeList<'a> {
        match self {
            Self::States(set) => nodes
                .iter()
                .copied()
                .filter(|node| set.has(node.state) && is_compatible(vector, node))
                .collect(),
            Self::PreferStates(set) => {
                let preferred: NodeList<'a> = nodes
                    .iter()
                    .copied()
                    .filter(|node| set.has(node.state))
                    .collect();
                if preferred.is_empty() {
                    nodes.iter().copied().collect()
                } else {
                    preferred
                }
            }
            Self::AllInfrastructure => nodes.iter().copied().collect(),
            Self::Nothing => NodeList::new(),
        }
    }
}

/// One rule per card type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleTable {
    rules: [TargetRule; CardType::COUNT],
}

const SHIELDED: TargetRule = TargetRule::States(StateSet::SHIELDED);

impl RuleTable {
    /// The standard table. Indexed in `CardType::ALL` order.
    pub const STANDARD: RuleTable = RuleTable {
        rules: [
            // exploit
            TargetRule::States(
                StateSet::SECURE
                    .union(StateSet::FORTIFIED)
                    .union(StateSet::FORTIFIED_WEAKEN),
            ),
            // attack
            TargetRule::States(StateSet::VULNERABLE),
            // counter-attack
            SHIELDED,
            // counter
            SHIELDED,
            // shield
            TargetRule::States(StateSet::SECURE),
            // fortify
            SHIELDED,
            // response
            TargetRule::States(StateSet::COMPROMISED),
            // reaction
            TargetRule::States(StateSet::VULNERABLE),
            // wildcard
            TargetRule::Nothing,
            // special
            TargetRule::PreferStates(StateSet::COMPROMISED),
            // unknown
            TargetRule::AllInfrastructure,
        ],
    };

    /// Rule for a card type.
    #[must_use]
    pub const fn rule(&self, card_type: CardType) -> TargetRule {
        self.rules[card_type.index()]
    }

    /// States a card type may target.
    #[must_use]
    pub const fn targetable_states(&self, card_type: CardType) -> StateSet {
        self.rule(card_type).states()
    }

    /// Replace the rule for one card type (builder pattern).
    #[must_use]
    pub fn with_rule(mut self, card_type: CardType, rule: TargetRule) -> Self {
        self.set_rule(card_type, rule);
        self
    }

    /// Replace the rule for one card type.
    pub fn set_rule(&mut self, card_type: CardType, rule: TargetRule) {
        self.rules[card_type.index()] = rule;
    }

    /// Iterate `(type, rule)` pairs in `CardType::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = (CardType, TargetRule)> + '_ {
        CardType::ALL.into_iter().map(move |t| (t, self.rule(t)))
    }

    /// Nodes a card of `card_type` with `vector` may target.
    #[must_use]
    pub fn select<'a>(
        &self,
        card_type: CardType,
        nodes: &[&'a InfrastructureCard],
        vector: Option<&AttackVector>,
    ) -> NodeList<'a> {
        self.rule(card_type).select(nodes, vector)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::STANDARD
    }
}
