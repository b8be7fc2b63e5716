//! Target validation errors.
//!
//! Computing targets never fails. These come from `validate_target`, which
//! checks a single click before the play is sent to the server. Messages
//! follow the server's phrasing ("Attack cards can only target ..."); the
//! state lists are rendered from the active rule table.

use crate::cards::CardType;
use crate::core::{AttackVector, InfrastructureState, StateSet};

/// Why a chosen node is not a legal target.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TargetingError {
    /// The card aims at the opponent's hand or the whole board.
    #[error("Card {card} does not target a single infrastructure")]
    NotInfrastructureTargeting { card: String },

    /// No node with this ID on the board.
    #[error("Target infrastructure not found: {target}")]
    UnknownTarget { target: String },

    /// The card has no legal target at all right now.
    #[error("No valid targets for card {card}")]
    NoValidTargets { card: String },

    /// The node's state is outside the card type's rule.
    #[error(
        "{} cards can only target {} infrastructure",
        .card_type.display_name(),
        .allowed.describe()
    )]
    IneligibleState {
        card_type: CardType,
        state: InfrastructureState,
        allowed: StateSet,
    },

    /// The node is not susceptible to the card's vector.
    #[error("This infrastructure is not vulnerable to {vector} attacks")]
    VectorMismatch { target: String, vector: AttackVector },

    /// Rejected for any other reason (precomputed list, fallback rules).
    #[error("Invalid target for this card: {target}")]
    Ineligible { target: String },
}
