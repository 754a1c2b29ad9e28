//! Side-by-side comparison of two profiles for compatibility readings.

use crate::numerology::{CoreNumberKind, NumerologyProfile};
use serde::{Deserialize, Serialize};

/// The user's and the partner's profiles (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfilePair {
    pub user: NumerologyProfile,
    pub partner: NumerologyProfile,
}

impl ProfilePair {
    pub fn new(user: NumerologyProfile, partner: NumerologyProfile) -> Self {
        Self { user, partner }
    }

    /// Core numbers both people have in common, in profile order
    pub fn shared_numbers(&self) -> Vec<(CoreNumberKind, u32)> {
        self.user
            .entries()
            .filter(|(kind, value)| self.partner.get(*kind) == *value)
            .collect()
    }

    /// `(kind, user value, partner value)` rows in profile order
    pub fn rows(&self) -> impl Iterator<Item = (CoreNumberKind, u32, u32)> + '_ {
        CoreNumberKind::ALL
            .into_iter()
            .map(|kind| (kind, self.user.get(kind), self.partner.get(kind)))
    }
}
