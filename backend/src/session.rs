use std::collections::HashMap;
use std::sync::Mutex;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use ring::rand::{SecureRandom, SystemRandom};
use rocket::http::{Cookie, SameSite, Status};
use rocket::request::{FromRequest, Outcome};
use rocket::Request;
use shared::{TallyStore, TallyView};
use time::{Duration, OffsetDateTime};
use tracing::{debug, error, info};
use crate::error::ApiError;
use crate::routes::AppState;

pub const SESSION_COOKIE: &str = "tally_session";

#[derive(Debug)]
struct Session {
    tally: TallyStore,
    last_seen: OffsetDateTime,
}

/// Per-browser tally stores, keyed by the session cookie token.
///
/// Every read and write goes through one lock, so concurrent requests from
/// the same session never lose an update.
pub struct SessionRegistry {
    sessions: Mutex<HashMap<String, Session>>,
    rng: SystemRandom,
    candidates: Vec<String>,
    idle: Duration,
    max_sessions: usize,
}

impl SessionRegistry {
    pub fn new(candidates: Vec<String>, idle_minutes: i64, max_sessions: usize) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            rng: SystemRandom::new(),
            candidates,
            idle: Duration::seconds(idle_minutes.saturating_mul(60)),
            max_sessions,
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    fn fresh_tally(&self) -> TallyStore {
        TallyStore::new(self.candidates.iter().cloned())
    }

    fn generate_token(&self) -> Result<String, ApiError> {
        let mut bytes = [0u8; 32];
        self.rng.fill(&mut bytes).map_err(|_| {
            error!("Failed to generate session token");
            ApiError::Internal("session token generation failed".into())
        })?;
        Ok(URL_SAFE_NO_PAD.encode(bytes))
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Session>>, ApiError> {
        self.sessions.lock().map_err(|e| {
            error!("Failed to acquire session lock: {}", e);
            ApiError::Internal("session store unavailable".into())
        })
    }

    fn is_live(&self, session: &Session, now: OffsetDateTime) -> bool {
        now - session.last_seen <= self.idle
    }

    /// At the cap, drops expired sessions; refuses when that frees nothing.
    fn make_room(&self, sessions: &mut HashMap<String, Session>, now: OffsetDateTime) -> Result<(), ApiError> {
        if sessions.len() < self.max_sessions {
            return Ok(());
        }
        let before = sessions.len();
        sessions.retain(|_, s| now - s.last_seen <= self.idle);
        debug!("Session cap reached, purged {} expired sessions", before - sessions.len());
        if sessions.len() >= self.max_sessions {
            return Err(ApiError::SessionLimit);
        }
        Ok(())
    }

    /// Resolves the caller's session, creating a fresh one when the token is
    /// missing, unknown or expired. Returns the token together with whether it
    /// was newly issued.
    pub fn open(&self, token: Option<&str>) -> Result<(String, bool), ApiError> {
        self.open_at(token, OffsetDateTime::now_utc())
    }

    fn open_at(&self, token: Option<&str>, now: OffsetDateTime) -> Result<(String, bool), ApiError> {
        let mut sessions = self.lock()?;

        if let Some(token) = token {
            match sessions.get(token).map(|s| self.is_live(s, now)) {
                Some(true) => {
                    if let Some(session) = sessions.get_mut(token) {
                        session.last_seen = now;
                    }
                    return Ok((token.to_string(), false));
                }
                Some(false) => {
                    debug!("Session expired, issuing a new one");
                    sessions.remove(token);
                }
                None => debug!("Unknown session token, issuing a new one"),
            }
        }

        self.make_room(&mut sessions, now)?;

        let token = self.generate_token()?;
        sessions.insert(token.clone(), Session {
            tally: self.fresh_tally(),
            last_seen: now,
        });
        debug!("Opened session, {} live", sessions.len());
        Ok((token, true))
    }

    /// Runs `f` against the session's tally under the registry lock.
    ///
    /// A session that vanished between `open` and this call (purged by the
    /// cleanup task) is recreated with a zeroed tally under the same token,
    /// subject to the same cap as `open`.
    pub fn with_tally<R>(&self, token: &str, f: impl FnOnce(&mut TallyStore) -> R) -> Result<R, ApiError> {
        let now = OffsetDateTime::now_utc();
        let mut sessions = self.lock()?;
        if !sessions.contains_key(token) {
            self.make_room(&mut sessions, now)?;
            debug!("Session vanished, recreating it");
        }
        let session = sessions.entry(token.to_string()).or_insert_with(|| Session {
            tally: self.fresh_tally(),
            last_seen: now,
        });
        session.last_seen = now;
        Ok(f(&mut session.tally))
    }

    /// Replaces the session's tally with the configured candidates at zero.
    pub fn reset(&self, token: &str) -> Result<TallyView, ApiError> {
        let fresh = self.fresh_tally();
        self.with_tally(token, move |tally| {
            *tally = fresh;
            tally.view()
        })
    }

    pub fn purge_expired(&self) -> Result<usize, ApiError> {
        self.purge_expired_at(OffsetDateTime::now_utc())
    }

    fn purge_expired_at(&self, now: OffsetDateTime) -> Result<usize, ApiError> {
        let mut sessions = self.lock()?;
        let before = sessions.len();
        sessions.retain(|_, s| now - s.last_seen <= self.idle);
        Ok(before - sessions.len())
    }

    pub fn len(&self) -> usize {
        self.sessions.lock().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Request guard yielding the caller's session token, issuing the cookie
/// when a new session is opened.
#[derive(Debug, Clone)]
pub struct SessionToken(pub String);

impl SessionToken {
    pub fn as_str(&self) -> &str { &self.0 }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for SessionToken {
    type Error = ApiError;

    async fn from_request(req: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let Some(state) = req.rocket().state::<AppState>() else {
            error!("AppState is not managed");
            return Outcome::Error((Status::InternalServerError, ApiError::Internal("missing state".into())));
        };

        let cookies = req.cookies();
        let existing = cookies.get(SESSION_COOKIE).map(|c| c.value().to_string());

        match state.sessions.open(existing.as_deref()) {
            Ok((token, created)) => {
                if created {
                    info!("New voting session started");
                    cookies.add(
                        Cookie::build((SESSION_COOKIE, token.clone()))
                            .path("/")
                            .http_only(true)
                            .same_site(SameSite::Lax),
                    );
                }
                Outcome::Success(SessionToken(token))
            }
            Err(e) => Outcome::Error((e.status(), e)),
        }
    }
}
