pub mod config;
pub mod processor;
pub mod routes;
pub mod session;
pub mod cors;
pub mod error;
pub mod catchers;
pub use shared::{models::*, error::*};
pub use shared::{TallyStore, VotingContext, VotingStrategy};

use rocket::{catchers, routes, Build, Rocket};
use crate::{
    catchers::{bad_request, internal_error, not_found, service_unavailable, unprocessable_entity},
    config::AppConfig,
    cors::CORS,
    routes::{all_options, cast_vote, get_tally, list_candidates, reset_tally, spa_handler, AppState},
};

/// Assembles the Rocket instance: JSON API under `/api`, the SPA everywhere else.
pub fn build(config: AppConfig) -> Rocket<Build> {
    rocket::build()
        .attach(CORS)
        .manage(AppState::new(config))
        .mount(
            "/api",
            routes![
                get_tally,
                cast_vote,
                reset_tally,
                list_candidates,
                all_options
            ],
        )
        .mount("/", routes![spa_handler])
        .register(
            "/",
            catchers![
                bad_request,
                not_found,
                unprocessable_entity,
                internal_error,
                service_unavailable
            ],
        )
}

#[cfg(test)]
mod tests;
