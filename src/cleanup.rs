use std::time::Duration;

use tokio::time;
use tracing::{debug, info};

use crate::{rate_limit::Limiter, store::Games};

pub async fn start_cleanup_task(
    games: Games,
    rate_limiter: Limiter,
    interval: Duration,
    idle_timeout: Duration,
) {
    info!(
        "Started cleanup task: checking every {}s, session idle timeout: {}s",
        interval.as_secs(),
        idle_timeout.as_secs()
    );

    let mut interval = time::interval(interval);
    loop {
        interval.tick().await;
        cleanup_sessions(&games, idle_timeout);
        cleanup_rate_limits(&rate_limiter);
    }
}

fn cleanup_sessions(games: &Games, idle_timeout: Duration) {
    let removed = games.evict_idle(idle_timeout);

    if removed > 0 {
        info!("Cleaned up {} idle sessions", removed);
    } else {
        debug!("No idle sessions, {} active", games.active_sessions());
    }
}

fn cleanup_rate_limits(rate_limiter: &Limiter) {
    let removed = rate_limiter.evict_stale();
    debug!(
        "Dropped {} stale rate limit buckets, {} clients tracked",
        removed,
        rate_limiter.tracked_clients()
    );
}
