//! Infrastructure security states.
//!
//! Every infrastructure node sits in exactly one state. Attacker cards push
//! nodes down the `secure -> vulnerable -> compromised` path, defender cards
//! push them along `secure -> shielded -> fortified -> fortified_weaken`.
//!
//! `StateSet` is the bit set the rule table is written in.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::error::ParseError;

/// Security state of an infrastructure node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InfrastructureState {
    /// Default state.
    Secure,
    /// Attacker path, step 1.
    Vulnerable,
    /// Attacker path, step 2 (final).
    Compromised,
    /// Defender path, step 1.
    Shielded,
    /// Defender path, step 2.
    Fortified,
    /// Defender path, step 3 (decays back to secure).
    FortifiedWeaken,
}

impl InfrastructureState {
    /// All states, in path order.
    pub const ALL: [InfrastructureState; 6] = [
        Self::Secure,
        Self::Vulnerable,
        Self::Compromised,
        Self::Shielded,
        Self::Fortified,
        Self::FortifiedWeaken,
    ];

    /// Wire spelling used by the game server.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Secure => "secure",
            Self::Vulnerable => "vulnerable",
            Self::Compromised => "compromised",
            Self::Shielded => "shielded",
            Self::Fortified => "fortified",
            Self::FortifiedWeaken => "fortified_weaken",
        }
    }
}

impl std::fmt::Display for InfrastructureState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for InfrastructureState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| ParseError::UnknownState(s.to_string()))
    }
}

bitflags! {
    /// Set of infrastructure states.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct StateSet: u8 {
        const SECURE = 1 << 0;
        const VULNERABLE = 1 << 1;
        const COMPROMISED = 1 << 2;
        const SHIELDED = 1 << 3;
        const FORTIFIED = 1 << 4;
        const FORTIFIED_WEAKEN = 1 << 5;
    }
}

impl StateSet {
    /// Check membership of a single state.
    #[must_use]
    pub const fn has(self, state: InfrastructureState) -> bool {
        self.contains(Self::of(state))
    }

    /// Singleton set.
    #[must_use]
    pub const fn of(state: InfrastructureState) -> Self {
        match state {
            InfrastructureState::Secure => Self::SECURE,
            InfrastructureState::Vulnerable => Self::VULNERABLE,
            InfrastructureState::Compromised => Self::COMPROMISED,
            InfrastructureState::Shielded => Self::SHIELDED,
            InfrastructureState::Fortified => Self::FORTIFIED,
            InfrastructureState::FortifiedWeaken => Self::FORTIFIED_WEAKEN,
        }
    }

    /// Human-readable list of member states ("secure or fortified").
    #[must_use]
    pub fn describe(&self) -> String {
        let names: Vec<_> = self.states().map(InfrastructureState::as_str).collect();
        match names.as_slice() {
            [] => "no".to_string(),
            [only] => (*only).to_string(),
            [rest @ .., last] => format!("{} or {}", rest.join(", "), last),
        }
    }

    /// Iterate member states in path order.
    pub fn states(self) -> impl Iterator<Item = InfrastructureState> {
        InfrastructureState::ALL
            .into_iter()
            .filter(move |state| self.has(*state))
    }
}

impl From<InfrastructureState> for StateSet {
    fn from(state: InfrastructureState) -> Self {
        Self::of(state)
    }
}

impl FromIterator<InfrastructureState> for StateSet {
    fn from_iter<I: IntoIterator<Item = InfrastructureState>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |set, state| set | Self::of(state))
    }
}
