//! Target resolution for cards played onto infrastructure.
//!
//! Answers "which nodes may this card target right now?" and the questions
//! around it:
//! - `vector`: A card's effective attack vector and node compatibility
//! - `rules`: The card-type-to-state rule table
//! - `wildcard`: Which concrete type(s) a wildcard is evaluated as
//! - `resolver`: `TargetResolver`, composing the above
//! - `config`: Rule overrides and wildcard priority
//!
//! ## Usage
//!
//! ```
//! use darknet_targeting::cards::{Card, CardType, InfrastructureCard};
//! use darknet_targeting::core::InfrastructureState;
//! use darknet_targeting::targeting::TargetResolver;
//!
//! let board = vec![
//!     InfrastructureCard::new("I001", InfrastructureState::Secure),
//!     InfrastructureCard::new("I002", InfrastructureState::Vulnerable),
//! ];
//! let card = Card::new("A101", CardType::Attack);
//!
//! let resolver = TargetResolver::new();
//! assert_eq!(resolver.valid_targets(&card, &board), vec!["I002"]);
//! ```

pub mod config;
pub mod error;
pub mod resolver;
pub mod rules;
pub mod vector;
pub mod wildcard;

pub use config::{PriorityList, ResolverConfig};
pub use error::TargetingError;
pub use resolver::{get_valid_targets, TargetResolver};
pub use rules::{NodeList, RuleTable, TargetRule};
pub use vector::{effective_vector, is_compatible, VectorResolution, VectorSource};
pub use wildcard::{playable_types, resolve_effective_types, Resolution, DEFAULT_PRIORITY};
