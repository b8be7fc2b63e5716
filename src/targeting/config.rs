//! Resolver configuration.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::rules::{RuleTable, TargetRule};
use super::wildcard::DEFAULT_PRIORITY;
use crate::cards::CardType;
use crate::core::error::DecodeError;

/// Wildcard candidate order; the default fits inline.
pub type PriorityList = SmallVec<[CardType; 9]>;

/// Targeting resolver configuration.
///
/// The defaults reproduce the standard rule table. Overrides exist to line
/// individual rows up with the server's validator without a new release.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Rules replacing the standard table's row for a card type.
    pub rule_overrides: FxHashMap<CardType, TargetRule>,

    /// Order in which a wildcard's candidate types are tried.
    /// Types missing from this list are never picked.
    pub wildcard_priority: PriorityList,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            rule_overrides: FxHashMap::default(),
            wildcard_priority: PriorityList::from_slice(&DEFAULT_PRIORITY),
        }
    }
}

impl ResolverConfig {
    /// Decode a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, DecodeError> {
        serde_json::from_str(json).map_err(DecodeError::Config)
    }

    /// Override the rule for one card type.
    #[must_use]
    pub fn with_rule(mut self, card_type: CardType, rule: TargetRule) -> Self {
        self.rule_overrides.insert(card_type, rule);
        self
    }

    /// Replace the wildcard priority order.
    #[must_use]
    pub fn with_wildcard_priority(mut self, priority: impl IntoIterator<Item = CardType>) -> Self {
        self.wildcard_priority = priority.into_iter().collect();
        self
    }

    /// The standard table with overrides applied.
    #[must_use]
    pub fn rule_table(&self) -> RuleTable {
        self.rule_overrides
            .iter()
            .fold(RuleTable::STANDARD, |table, (card_type, rule)| {
                table.with_rule(*card_type, *rule)
            })
    }
}
