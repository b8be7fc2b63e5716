//! # darknet-targeting
//!
//! Card targeting rules for Darknet Duel, a two-player attacker vs defender
//! card game fought over infrastructure nodes.
//!
//! Given a card and a snapshot of the board, the resolver returns the IDs of
//! the nodes the card may legally target, so the client can highlight them
//! before the move is sent to the server.
//!
//! ## Design Principles
//!
//! 1. **Pure**: Resolution reads its inputs and returns a fresh list. No
//!    caching, no I/O, no shared mutable state.
//!
//! 2. **Rules as Data**: Which states a card type may target lives in a
//!    `RuleTable`, not in branches. Rows can be overridden by configuration.
//!
//! 3. **Never Fails**: Missing infrastructure yields no targets, unknown card
//!    types are permissive. Only `validate_target` returns errors.
//!
//! ## Modules
//!
//! - `core`: Infrastructure states, attack vectors, parse and decode errors
//! - `cards`: Cards, wildcard specs, infrastructure nodes, board snapshots
//! - `targeting`: Vector extraction, rule table, wildcard resolution, resolver

pub mod cards;
pub mod core;
pub mod targeting;

// Re-export commonly used types
pub use crate::core::{AttackVector, DecodeError, InfrastructureState, ParseError, StateSet};

pub use crate::cards::{
    Board, Card, CardType, InfrastructureCard, Metadata, MetadataValue, Side, TargetKind,
    WildcardSpec,
};

pub use crate::targeting::{
    get_valid_targets, Resolution, ResolverConfig, RuleTable, TargetResolver, TargetRule,
    TargetingError,
};
