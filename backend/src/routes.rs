use std::path::PathBuf;
use std::sync::Arc;
use rocket::{State, get, post, fs::NamedFile, http::Status, serde::json::Json};
use tracing::{debug, instrument};
use shared::models::*;
use crate::{
   config::AppConfig,
   error::ApiError,
   processor::VoteProcessor,
   session::{SessionRegistry, SessionToken},
};

pub struct AppState {
    pub sessions: Arc<SessionRegistry>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            sessions: Arc::new(SessionRegistry::new(
                config.candidates.clone(),
                config.session_idle_minutes,
                config.max_sessions,
            )),
            config,
        }
    }
}

#[get("/candidates")]
pub async fn list_candidates(state: &State<AppState>) -> Json<Vec<String>> {
    Json(state.sessions.candidates().to_vec())
}

#[get("/tally")]
pub async fn get_tally(state: &State<AppState>, session: SessionToken) -> Result<Json<TallyView>, ApiError> {
    state.sessions
        .with_tally(session.as_str(), |tally| tally.view())
        .map(Json)
}

#[instrument(skip_all, fields(candidate = %request.candidate))]
#[post("/vote", format = "json", data = "<request>")]
pub async fn cast_vote(
    state: &State<AppState>,
    session: SessionToken,
    request: Json<VoteRequest>,
) -> Result<Json<TallyView>, ApiError> {
    let request = request.into_inner();
    debug!(strategy = ?request.strategy, weight = ?request.weight, "Vote received");

    state.sessions
        .with_tally(session.as_str(), |tally| {
            VoteProcessor::cast(tally, &request);
            tally.view()
        })
        .map(Json)
}

#[instrument(skip_all)]
#[post("/reset")]
pub async fn reset_tally(state: &State<AppState>, session: SessionToken) -> Result<Json<TallyView>, ApiError> {
    let view = state.sessions.reset(session.as_str())?;
    debug!("Tally reset");
    Ok(Json(view))
}

#[rocket::options("/<_..>")]
pub async fn all_options() -> Status {
    Status::Ok
}

#[get("/<path..>", rank = 20)]
pub async fn spa_handler(path: PathBuf, state: &State<AppState>) -> Option<NamedFile> {
    let static_dir = &state.config.static_dir;
    let file_path = static_dir.join(&path);
    if file_path.is_file() {
        NamedFile::open(&file_path).await.ok()
    } else {
        NamedFile::open(static_dir.join("index.html")).await.ok()
    }
}
