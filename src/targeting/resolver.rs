//! Targeting resolver.
//!
//! Composes vector extraction, wildcard resolution and the rule table into
//! the one question the UI asks: which nodes may this card target right now?
//!
//! The resolver is a pure function of `(card, board)`: no caching, no I/O,
//! no interior mutability. Calling it twice with the same inputs yields the
//! same IDs in the same order.

use rustc_hash::FxHashSet;
use tracing::{debug, trace};

use super::config::{PriorityList, ResolverConfig};
use super::error::TargetingError;
use super::rules::{NodeList, RuleTable};
use super::vector::{effective_vector, is_compatible};
use super::wildcard::{playable_types, resolve_effective_types, Resolution};
use crate::cards::{Card, CardType, InfrastructureCard, TargetKind};

/// Computes legal targets for cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetResolver {
    rules: RuleTable,
    priority: PriorityList,
}

impl Default for TargetResolver {
    fn default() -> Self {
        Self::with_config(&ResolverConfig::default())
    }
}

impl TargetResolver {
    /// Create a resolver with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver from a configuration.
    #[must_use]
    pub fn with_config(config: &ResolverConfig) -> Self {
        Self {
            rules: config.rule_table(),
            priority: config.wildcard_priority.clone(),
        }
    }

    /// The rule table in use.
    #[must_use]
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// The type(s) `card` is evaluated as on this board.
    pub fn resolve_types<'a, I>(&self, card: &Card, infrastructure: I) -> Resolution
    where
        I: IntoIterator<Item = &'a InfrastructureCard>,
    {
        let nodes: NodeList<'a> = infrastructure.into_iter().collect();
        resolve_effective_types(card, &nodes, &self.rules, &self.priority)
    }

    /// IDs of the nodes `card` may target, in board order.
    ///
    /// An empty result means the card cannot currently be played on
    /// infrastructure.
    pub fn valid_targets<'a, I>(&self, card: &Card, infrastructure: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a InfrastructureCard>,
    {
        if !card.valid_targets.is_empty() {
            debug!(card = %card.id, "using precomputed targets");
            return card.valid_targets.clone();
        }

        let nodes: NodeList<'a> = infrastructure.into_iter().collect();
        self.select(card, &nodes)
            .into_iter()
            .map(|node| node.id.clone())
            .collect()
    }

    fn select<'a>(&self, card: &Card, nodes: &[&'a InfrastructureCard]) -> NodeList<'a> {
        match card.target_kind() {
            TargetKind::OpponentHand => return NodeList::new(),
            TargetKind::AllInfrastructure => return nodes.iter().copied().collect(),
            TargetKind::Infrastructure => {}
        }

        let vector = effective_vector(card).map(|resolved| resolved.vector);
        let resolution = resolve_effective_types(card, nodes, &self.rules, &self.priority);

        let selected: NodeList<'a> = match &resolution {
            Resolution::AnyInfrastructure => nodes.iter().copied().collect(),
            Resolution::Types(types) => {
                let mut seen = FxHashSet::default();
                let mut union = NodeList::new();
                for card_type in types {
                    let picked = self.rules.select(*card_type, nodes, vector.as_ref());
                    trace!(%card_type, count = picked.len(), "selected by type");
                    for node in picked {
                        if seen.insert(node.id.as_str()) {
                            union.push(node);
                        }
                    }
                }
                union
            }
        };

        debug!(
            card = %card.id,
            card_type = %card.card_type,
            vector = ?vector,
            targets = selected.len(),
            nodes = nodes.len(),
            "resolved targets"
        );
        selected
    }

    /// Does playing `card` put the UI into targeting mode?
    #[must_use]
    pub fn needs_target(&self, card: &Card) -> bool {
        if card.target_kind() != TargetKind::Infrastructure {
            return false;
        }
        if card.requires_target {
            return true;
        }
        if card.is_wildcard() {
            return card
                .wildcard_type
                .as_ref()
                .is_some_and(|spec| spec.offered_types().iter().any(|t| t.is_targeting()));
        }
        card.card_type.side().is_some()
    }

    /// Check a chosen node before the play is dispatched.
    ///
    /// For single-node cards this accepts exactly the IDs `valid_targets`
    /// returns. Precomputed targets are trusted as-is, even when the node is
    /// missing from this board.
    pub fn validate_target<'a, I>(
        &self,
        card: &Card,
        infrastructure: I,
        target_id: &str,
    ) -> Result<(), TargetingError>
    where
        I: IntoIterator<Item = &'a InfrastructureCard>,
    {
        if !card.valid_targets.is_empty() {
            return if card.valid_targets.iter().any(|id| id == target_id) {
                Ok(())
            } else {
                Err(TargetingError::Ineligible {
                    target: target_id.to_string(),
                })
            };
        }

        if card.target_kind() != TargetKind::Infrastructure {
            return Err(TargetingError::NotInfrastructureTargeting {
                card: card.id.clone(),
            });
        }

        let nodes: NodeList<'a> = infrastructure.into_iter().collect();
        let target = nodes
            .iter()
            .copied()
            .find(|node| node.id == target_id)
            .ok_or_else(|| TargetingError::UnknownTarget {
                target: target_id.to_string(),
            })?;

        let selected = self.select(card, &nodes);
        if selected.iter().any(|node| node.id == target_id) {
            return Ok(());
        }
        if selected.is_empty() {
            return Err(TargetingError::NoValidTargets {
                card: card.id.clone(),
            });
        }

        Err(self.explain_rejection(card, target, &nodes))
    }

    /// Most specific reason a single-type card cannot hit `target`.
    fn explain_rejection(
        &self,
        card: &Card,
        target: &InfrastructureCard,
        nodes: &[&InfrastructureCard],
    ) -> TargetingError {
        let ineligible = TargetingError::Ineligible {
            target: target.id.clone(),
        };

        let Resolution::Types(types) =
            resolve_effective_types(card, nodes, &self.rules, &self.priority)
        else {
            return ineligible;
        };
        let [card_type] = types.as_slice() else {
            return ineligible;
        };

        let allowed = self.rules.targetable_states(*card_type);
        if !allowed.has(target.state) {
            return TargetingError::IneligibleState {
                card_type: *card_type,
                state: target.state,
                allowed,
            };
        }

        match effective_vector(card) {
            Some(resolved) if !is_compatible(Some(&resolved.vector), target) => {
                TargetingError::VectorMismatch {
                    target: target.id.clone(),
                    vector: resolved.vector,
                }
            }
            _ => ineligible,
        }
    }

    /// The concrete type `card` would be played as against `target_id`.
    ///
    /// Wildcards take the first offered type, in priority order, whose rule
    /// selects the node. Other cards yield their own type when the node is a
    /// legal target. `None` when the node is not targetable by this card.
    pub fn play_type_for_target<'a, I>(
        &self,
        card: &Card,
        infrastructure: I,
        target_id: &str,
    ) -> Option<CardType>
    where
        I: IntoIterator<Item = &'a InfrastructureCard>,
    {
        let nodes: NodeList<'a> = infrastructure.into_iter().collect();
        let target = nodes.iter().copied().find(|node| node.id == target_id)?;

        if card.is_wildcard() {
            return playable_types(card, target, &nodes, &self.rules, &self.priority)
                .first()
                .copied();
        }

        self.select(card, &nodes)
            .iter()
            .any(|node| node.id == target_id)
            .then_some(card.card_type)
    }
}

/// Legal target IDs for `card` under the standard rules.
///
/// Convenience for one-off calls; build a `TargetResolver` to use a custom
/// configuration.
#[must_use]
pub fn get_valid_targets(card: &Card, infrastructure: &[InfrastructureCard]) -> Vec<String> {
    TargetResolver::default().valid_targets(card, infrastructure)
}
