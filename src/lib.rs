use std::{sync::Arc, time::Duration};

use rocket::{
    Build, Rocket, catchers,
    fairing::{Fairing, Info, Kind},
    routes,
};
use tracing::{info, warn};

pub mod cleanup;
pub mod config;
pub mod cors;
pub mod data;
pub mod error;
pub mod logic;
pub mod model;
pub mod rate_limit;
pub mod routes;
pub mod session;
pub mod store;

use crate::{
    cleanup::start_cleanup_task,
    config::Settings,
    cors::create_cors,
    rate_limit::{Limiter, RateLimiter},
    routes::{current_game, default_catcher, new_game, turn},
    store::{GameStore, Games},
};

struct CleanupFairing {
    interval: Duration,
    idle_timeout: Duration,
}

#[rocket::async_trait]
impl Fairing for CleanupFairing {
    fn info(&self) -> Info {
        Info {
            name: "Session and Rate Limit Cleanup",
            kind: Kind::Ignite,
        }
    }

    async fn on_ignite(&self, rocket: Rocket<Build>) -> rocket::fairing::Result {
        if self.interval.is_zero() {
            info!("Session cleanup disabled");
            return Ok(rocket);
        }

        match (rocket.state::<Games>(), rocket.state::<Limiter>()) {
            (Some(games), Some(rate_limiter)) => {
                let games = games.clone();
                let rate_limiter = rate_limiter.clone();
                let (interval, idle_timeout) = (self.interval, self.idle_timeout);
                tokio::spawn(async move {
                    start_cleanup_task(games, rate_limiter, interval, idle_timeout).await;
                });
            }
            _ => warn!("Failed to get managed state for cleanup task"),
        }
        Ok(rocket)
    }
}

/// Assembles the server: game store, rate limiter, CORS, cleanup and routes under `/api/game`.
pub fn build(settings: Settings) -> Result<Rocket<Build>, rocket_cors::Error> {
    let games: Games = Arc::new(GameStore::new());
    let rate_limiter: Limiter = Arc::new(RateLimiter::per_minute(settings.games_per_minute));
    let cors = create_cors(&settings)?;

    info!(
        "Configured with {} games per minute, origins: {}",
        settings.games_per_minute,
        settings.cors_allowed_origins.join(", ")
    );

    Ok(rocket::build()
        .attach(cors)
        .attach(CleanupFairing {
            interval: settings.cleanup_interval,
            idle_timeout: settings.session_idle_timeout,
        })
        .manage(games)
        .manage(rate_limiter)
        .mount("/api/game", routes![new_game, turn, current_game])
        .register("/", catchers![default_catcher]))
}
