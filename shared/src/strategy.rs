use serde::{Serialize, Deserialize};
use crate::tally::TallyStore;

pub const MIN_WEIGHT: u8 = 1;
pub const MAX_WEIGHT: u8 = 5;

/// A vote weight, clamped into `MIN_WEIGHT..=MAX_WEIGHT` once at construction.
/// Deserialization goes through the same clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64")]
pub struct Weight(u8);

impl Weight {
    pub fn clamped(requested: i64) -> Self {
        Self(requested.clamp(i64::from(MIN_WEIGHT), i64::from(MAX_WEIGHT)) as u8)
    }

    pub const fn get(self) -> u8 { self.0 }
}

impl Default for Weight {
    fn default() -> Self { Self(MIN_WEIGHT) }
}

impl From<i64> for Weight {
    fn from(requested: i64) -> Self { Self::clamped(requested) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind { Simple, Weighted }

impl StrategyKind {
    /// Only the exact label `weighted` selects weighted voting; any other
    /// label falls back to simple.
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            Some("weighted") => StrategyKind::Weighted,
            _ => StrategyKind::Simple,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            StrategyKind::Simple => "simple",
            StrategyKind::Weighted => "weighted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VotingStrategy {
    #[default]
    Simple,
    Weighted(Weight),
}

impl VotingStrategy {
    pub fn simple() -> Self { VotingStrategy::Simple }

    pub fn weighted(requested: i64) -> Self {
        VotingStrategy::Weighted(Weight::clamped(requested))
    }

    pub const fn kind(&self) -> StrategyKind {
        match self {
            VotingStrategy::Simple => StrategyKind::Simple,
            VotingStrategy::Weighted(_) => StrategyKind::Weighted,
        }
    }

    pub const fn increment(&self) -> u64 {
        match self {
            VotingStrategy::Simple => 1,
            VotingStrategy::Weighted(w) => w.get() as u64,
        }
    }

    /// Counts one vote for `candidate`. Unknown names are ignored and
    /// reported by returning `false`.
    pub fn apply(&self, store: &mut TallyStore, candidate: &str) -> bool {
        store.add(candidate, self.increment())
    }
}
