use serde::{Serialize, Deserialize};

pub const DEFAULT_CANDIDATES: [&str; 3] = ["Candidato A", "Candidato B", "Candidato C"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateCount {
    name: String,
    votes: u64,
}

impl CandidateCount {
    pub fn name(&self) -> &str { &self.name }
    pub fn votes(&self) -> u64 { self.votes }
}

/// Vote counts for one session, keyed by candidate name in insertion order.
///
/// The candidate set is fixed when the store is built: nothing adds or
/// removes a name afterwards, and `reset` only zeroes the counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TallyStore {
    entries: Vec<CandidateCount>,
}

impl Default for TallyStore {
    fn default() -> Self {
        Self::new(DEFAULT_CANDIDATES)
    }
}

impl TallyStore {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<CandidateCount> = Vec::new();
        for name in names {
            let name = name.into();
            if entries.iter().all(|e| e.name != name) {
                entries.push(CandidateCount { name, votes: 0 });
            }
        }
        Self { entries }
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.entries.iter().any(|e| e.name == candidate)
    }

    pub fn get(&self, candidate: &str) -> Option<u64> {
        self.entries.iter().find(|e| e.name == candidate).map(|e| e.votes)
    }

    /// Adds `amount` to an existing candidate. Returns `false` and leaves the
    /// store untouched when the name is unknown.
    pub fn add(&mut self, candidate: &str, amount: u64) -> bool {
        match self.entries.iter_mut().find(|e| e.name == candidate) {
            Some(entry) => {
                entry.votes = entry.votes.saturating_add(amount);
                true
            }
            None => false,
        }
    }

    pub fn reset(&mut self) {
        self.entries.iter_mut().for_each(|e| e.votes = 0);
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CandidateCount> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn total_votes(&self) -> u64 {
        self.entries.iter().fold(0u64, |acc, e| acc.saturating_add(e.votes))
    }

    pub fn view(&self) -> TallyView {
        let total = self.total_votes();
        TallyView {
            candidates: self.entries.iter()
                .map(|e| CandidateTally {
                    name: e.name.clone(),
                    votes: e.votes,
                    percentage: percentage_of(e.votes, total),
                })
                .collect(),
            total_votes: total,
        }
    }
}

fn percentage_of(votes: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        votes as f64 * 100.0 / total as f64
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateTally {
    pub name: String,
    pub votes: u64,
    pub percentage: f64,
}

/// Read-only projection of a [`TallyStore`] sent to the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TallyView {
    pub candidates: Vec<CandidateTally>,
    pub total_votes: u64,
}

impl TallyView {
    pub fn votes_for(&self, candidate: &str) -> Option<u64> {
        self.candidates.iter().find(|c| c.name == candidate).map(|c| c.votes)
    }
}
