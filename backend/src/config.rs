//! Startup configuration.
//!
//! Values come from the Shuttle secret store (`Secrets.toml`). Every key is
//! optional; a missing key falls back to its default.

use std::path::PathBuf;
use std::str::FromStr;
use shared::{parse_candidate_list, validate_candidates, ValidationError, DEFAULT_CANDIDATES};
use thiserror::Error;
use tracing::warn;

pub const CANDIDATES_KEY: &str = "CANDIDATES";
pub const SESSION_IDLE_MINUTES_KEY: &str = "SESSION_IDLE_MINUTES";
pub const MAX_SESSIONS_KEY: &str = "MAX_SESSIONS";
pub const CLEANUP_INTERVAL_SECS_KEY: &str = "CLEANUP_INTERVAL_SECS";
pub const STATIC_DIR_KEY: &str = "STATIC_DIR";

const DEFAULT_SESSION_IDLE_MINUTES: i64 = 30;
/// One year.
const MAX_SESSION_IDLE_MINUTES: i64 = 60 * 24 * 365;
const DEFAULT_MAX_SESSIONS: usize = 10_000;
const DEFAULT_CLEANUP_INTERVAL_SECS: u64 = 60;
const DEFAULT_STATIC_DIR: &str = "backend/static";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must be at most {max}, got {value}")]
    OutOfRange { key: &'static str, value: i64, max: i64 },
    #[error("invalid {CANDIDATES_KEY}: {0}")]
    InvalidCandidates(#[from] ValidationError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub candidates: Vec<String>,
    pub session_idle_minutes: i64,
    pub max_sessions: usize,
    pub cleanup_interval_secs: u64,
    pub static_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            candidates: DEFAULT_CANDIDATES.iter().map(|c| c.to_string()).collect(),
            session_idle_minutes: DEFAULT_SESSION_IDLE_MINUTES,
            max_sessions: DEFAULT_MAX_SESSIONS,
            cleanup_interval_secs: DEFAULT_CLEANUP_INTERVAL_SECS,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
        }
    }
}

impl AppConfig {
    /// Builds the config from a key lookup such as `SecretStore::get`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let candidates = match lookup(CANDIDATES_KEY) {
            Some(raw) => {
                let names = parse_candidate_list(&raw);
                validate_candidates(&names)?;
                names
            }
            None => defaults.candidates,
        };

        let static_dir = match lookup(STATIC_DIR_KEY) {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir.trim()),
            Some(_) => {
                warn!("{} is empty, serving from {:?}", STATIC_DIR_KEY, defaults.static_dir);
                defaults.static_dir
            }
            None => defaults.static_dir,
        };

        let session_idle_minutes = positive(&lookup, SESSION_IDLE_MINUTES_KEY, defaults.session_idle_minutes)?;
        if session_idle_minutes > MAX_SESSION_IDLE_MINUTES {
            return Err(ConfigError::OutOfRange {
                key: SESSION_IDLE_MINUTES_KEY,
                value: session_idle_minutes,
                max: MAX_SESSION_IDLE_MINUTES,
            });
        }

        Ok(Self {
            candidates,
            session_idle_minutes,
            max_sessions: positive(&lookup, MAX_SESSIONS_KEY, defaults.max_sessions)?,
            cleanup_interval_secs: positive(&lookup, CLEANUP_INTERVAL_SECS_KEY, defaults.cleanup_interval_secs)?,
            static_dir,
        })
    }
}

fn positive<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + PartialOrd + Default,
{
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };

    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(value),
        _ => Err(ConfigError::InvalidNumber { key, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.candidates, vec!["Candidato A", "Candidato B", "Candidato C"]);
    }

    #[test]
    fn overrides_are_applied() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (CANDIDATES_KEY, "Ana, Bruno"),
            (SESSION_IDLE_MINUTES_KEY, "5"),
            (MAX_SESSIONS_KEY, "12"),
            (CLEANUP_INTERVAL_SECS_KEY, " 10 "),
            (STATIC_DIR_KEY, "/srv/tally"),
        ])).unwrap();

        assert_eq!(config.candidates, vec!["Ana", "Bruno"]);
        assert_eq!(config.session_idle_minutes, 5);
        assert_eq!(config.max_sessions, 12);
        assert_eq!(config.cleanup_interval_secs, 10);
        assert_eq!(config.static_dir, PathBuf::from("/srv/tally"));
    }

    #[test]
    fn rejects_bad_numbers() {
        for bad in ["0", "-3", "soon", ""] {
            let err = AppConfig::from_lookup(lookup_from(&[(SESSION_IDLE_MINUTES_KEY, bad)])).unwrap_err();
            assert_eq!(err, ConfigError::InvalidNumber { key: SESSION_IDLE_MINUTES_KEY, value: bad.into() });
        }
        assert!(AppConfig::from_lookup(lookup_from(&[(MAX_SESSIONS_KEY, "-1")])).is_err());

        let err = AppConfig::from_lookup(lookup_from(&[(SESSION_IDLE_MINUTES_KEY, "9223372036854775807")])).unwrap_err();
        assert_eq!(err, ConfigError::OutOfRange {
            key: SESSION_IDLE_MINUTES_KEY,
            value: i64::MAX,
            max: MAX_SESSION_IDLE_MINUTES,
        });
        let year = MAX_SESSION_IDLE_MINUTES.to_string();
        let config = AppConfig::from_lookup(lookup_from(&[(SESSION_IDLE_MINUTES_KEY, year.as_str())])).unwrap();
        assert_eq!(config.session_idle_minutes, MAX_SESSION_IDLE_MINUTES);
    }

    #[test]
    fn rejects_bad_candidates() {
        let err = AppConfig::from_lookup(lookup_from(&[(CANDIDATES_KEY, "Ana,,Bruno")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidCandidates(ValidationError::EmptyCandidate));

        let err = AppConfig::from_lookup(lookup_from(&[(CANDIDATES_KEY, "Ana,Ana")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidCandidates(ValidationError::DuplicateCandidate(_))));
    }

    #[test]
    fn blank_static_dir_falls_back() {
        let config = AppConfig::from_lookup(lookup_from(&[(STATIC_DIR_KEY, "  ")])).unwrap();
        assert_eq!(config.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
        assert_eq!(config.static_dir, PathBuf::from("backend/static"));
    }
}
