pub mod error;
pub mod models;
pub mod validation;
pub mod tally;
pub mod strategy;
pub mod context;

pub use error::{Error, ErrorCode, ErrorResponse};
pub use models::*;
pub use validation::*;
pub use tally::{TallyStore, CandidateCount, DEFAULT_CANDIDATES};
pub use strategy::{VotingStrategy, StrategyKind, Weight, MIN_WEIGHT, MAX_WEIGHT};
pub use context::VotingContext;
