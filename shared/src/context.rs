use crate::strategy::VotingStrategy;
use crate::tally::TallyStore;

/// Holds the active strategy and forwards votes to it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VotingContext {
    strategy: VotingStrategy,
}

impl VotingContext {
    pub fn new(strategy: VotingStrategy) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: VotingStrategy) {
        self.strategy = strategy;
    }

    pub fn strategy(&self) -> VotingStrategy { self.strategy }

    pub fn execute_voting(&self, store: &mut TallyStore, candidate: &str) -> bool {
        self.strategy.apply(store, candidate)
    }
}
