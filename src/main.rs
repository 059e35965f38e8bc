use minesweeper_backend::{build, config::Settings};
use tracing::{error, info};

#[rocket::main]
async fn main() {
    tracing_subscriber::fmt::init();
    info!("🚀 Starting Minesweeper server");

    let rocket = match build(Settings::from_env()) {
        Ok(rocket) => rocket,
        Err(e) => {
            error!("Invalid CORS configuration: {}", e);
            std::process::exit(1);
        }
    };

    info!("📡 Endpoints: POST /api/game/new, POST /api/game/turn, GET /api/game/current");

    if let Err(e) = rocket.launch().await {
        error!("Server stopped: {}", e);
        std::process::exit(1);
    }
}
