use std::collections::HashSet;

pub const MIN_CANDIDATES: usize = 1;
pub const MAX_CANDIDATES: usize = 20;
pub const MAX_CANDIDATE_LENGTH: usize = 40;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Too many candidates (maximum {MAX_CANDIDATES})")]
    TooManyCandidates,
    #[error("Too few candidates (minimum {MIN_CANDIDATES})")]
    TooFewCandidates,
    #[error("Candidate name exceeds maximum length of {MAX_CANDIDATE_LENGTH}")]
    CandidateTooLong,
    #[error("Empty candidate name")]
    EmptyCandidate,
    #[error("Duplicate candidate: {0}")]
    DuplicateCandidate(String),
}

pub fn validate_candidates(names: &[String]) -> Result<(), ValidationError> {
    if names.len() < MIN_CANDIDATES { return Err(ValidationError::TooFewCandidates); }
    if names.len() > MAX_CANDIDATES { return Err(ValidationError::TooManyCandidates); }

    if names.iter().any(|name| name.trim().is_empty()) { return Err(ValidationError::EmptyCandidate); }
    if names.iter().any(|name| name.chars().count() > MAX_CANDIDATE_LENGTH) { return Err(ValidationError::CandidateTooLong); }

    let mut seen = HashSet::new();
    if let Some(dup) = names.iter().find(|name| !seen.insert(name.as_str())) {
        return Err(ValidationError::DuplicateCandidate(dup.clone()));
    }

    Ok(())
}

/// Splits a comma-separated candidate list, trimming whitespace around each name.
pub fn parse_candidate_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|name| name.trim().to_string())
        .collect()
}
