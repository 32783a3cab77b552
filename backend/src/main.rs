use std::sync::Arc;
use backend::{build, config::AppConfig, routes::AppState};
use backend::session::SessionRegistry;
use rocket::fairing::AdHoc;
use shuttle_runtime::CustomError;
use tokio::time::{interval, Duration};
use tracing::{info, error};

async fn run_cleanup_task(sessions: Arc<SessionRegistry>, every_secs: u64) {
    let mut interval = interval(Duration::from_secs(every_secs));
    info!("🧹 Session cleanup started");

    loop {
        interval.tick().await;
        match sessions.purge_expired() {
            Ok(0) => {}
            Ok(count) => info!("🗑️ Removed {} expired sessions, {} live", count, sessions.len()),
            Err(e) => error!("Session cleanup failed: {}", e),
        }
    }
}

#[shuttle_runtime::main]
async fn rocket(
    #[shuttle_runtime::Secrets] secret_store: shuttle_runtime::SecretStore,
) -> shuttle_rocket::ShuttleRocket {
    info!("🚀 Starting tally server");

    let config = AppConfig::from_lookup(|key| secret_store.get(key))
        .map_err(CustomError::new)?;

    info!(
        "📋 {} candidates, sessions idle out after {} min",
        config.candidates.len(),
        config.session_idle_minutes
    );

    let cleanup_every = config.cleanup_interval_secs;
    let rocket = build(config).attach(AdHoc::on_liftoff("Session cleanup", move |rocket| {
        Box::pin(async move {
            match rocket.state::<AppState>() {
                Some(state) => {
                    tokio::spawn(run_cleanup_task(Arc::clone(&state.sessions), cleanup_every));
                }
                None => error!("AppState missing, session cleanup not started"),
            }
        })
    }));

    Ok(rocket.into())
}
