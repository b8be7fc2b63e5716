//! Core value types: infrastructure states, attack vectors, errors.
//!
//! These are shared by the card model and the targeting rules and carry no
//! behavior beyond parsing and display.

pub mod error;
pub mod state;
pub mod vector;

pub use error::{DecodeError, ParseError};
pub use state::{InfrastructureState, StateSet};
pub use vector::AttackVector;
