use serde::{Serialize, Deserialize};
use crate::strategy::StrategyKind;

pub use crate::tally::{CandidateTally, TallyView};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VoteRequest {
    pub candidate: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
}

impl VoteRequest {
    pub fn simple(candidate: impl Into<String>) -> Self {
        Self {
            candidate: candidate.into(),
            strategy: None,
            weight: None,
        }
    }

    pub fn weighted(candidate: impl Into<String>, weight: i64) -> Self {
        Self {
            candidate: candidate.into(),
            strategy: Some(StrategyKind::Weighted.label().to_string()),
            weight: Some(weight),
        }
    }

    pub fn strategy_kind(&self) -> StrategyKind {
        StrategyKind::from_label(self.strategy.as_deref())
    }

    pub fn weight_or_default(&self) -> i64 {
        self.weight.unwrap_or(1)
    }
}
