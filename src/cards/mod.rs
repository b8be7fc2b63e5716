//! Card data: playable cards and infrastructure nodes.
//!
//! ## Key Types
//!
//! - `Card`: A playable card as delivered by the game server
//! - `CardType`: Closed set of card types, with the server's spellings
//! - `WildcardSpec`: What a wildcard may be played as
//! - `TargetKind`: What a card aims at (a node, the opponent's hand, the whole board)
//! - `InfrastructureCard`: A targetable node
//! - `Board`: Immutable snapshot of all nodes
//!
//! Everything here is read-only input to the targeting resolver.

pub mod card;
pub mod card_type;
pub mod infrastructure;
pub mod metadata;
pub mod wildcard;

pub use card::{Card, TargetKind};
pub use card_type::{CardType, Side};
pub use infrastructure::{Board, InfrastructureCard, VectorList};
pub use metadata::{Metadata, MetadataValue};
pub use wildcard::{TypeList, WildcardSpec};
