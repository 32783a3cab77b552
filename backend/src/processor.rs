use shared::{StrategyKind, TallyStore, VoteRequest, VotingContext, VotingStrategy};
use tracing::debug;

pub struct VoteProcessor;

impl VoteProcessor {
    pub fn strategy_for(request: &VoteRequest) -> VotingStrategy {
        match request.strategy_kind() {
            StrategyKind::Weighted => VotingStrategy::weighted(request.weight_or_default()),
            StrategyKind::Simple => VotingStrategy::simple(),
        }
    }

    /// Applies one vote to `tally`. Returns whether a candidate was counted;
    /// an unknown name leaves the tally untouched.
    pub fn cast(tally: &mut TallyStore, request: &VoteRequest) -> bool {
        let context = VotingContext::new(Self::strategy_for(request));
        let counted = context.execute_voting(tally, &request.candidate);
        if counted {
            debug!(
                strategy = context.strategy().kind().label(),
                increment = context.strategy().increment(),
                "Vote counted"
            );
        } else {
            debug!(candidate = %request.candidate, "Ignoring vote for unknown candidate");
        }
        counted
    }
}
