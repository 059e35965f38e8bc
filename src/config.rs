use std::{env, fmt::Display, str::FromStr, time::Duration};

use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Exact origins, or `*` for any.
    pub cors_allowed_origins: Vec<String>,
    pub games_per_minute: u32,
    /// Zero disables the cleanup task.
    pub cleanup_interval: Duration,
    pub session_idle_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            cors_allowed_origins: vec!["*".to_string()],
            games_per_minute: 60,
            cleanup_interval: Duration::from_secs(60),
            session_idle_timeout: Duration::from_secs(3600),
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr + Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => default,
        Some(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("Invalid value {:?} for {}, using {}", value, key, default);
            default
        }),
    }
}

impl Settings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let cors_allowed_origins: Vec<String> = lookup("CORS_ALLOWED_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            cors_allowed_origins: if cors_allowed_origins.is_empty() {
                defaults.cors_allowed_origins
            } else {
                cors_allowed_origins
            },
            games_per_minute: parse_or(
                &lookup,
                "RATE_LIMIT_GAMES_PER_MINUTE",
                defaults.games_per_minute,
            ),
            cleanup_interval: Duration::from_secs(parse_or(
                &lookup,
                "CLEANUP_INTERVAL_SECONDS",
                defaults.cleanup_interval.as_secs(),
            )),
            session_idle_timeout: Duration::from_secs(parse_or(
                &lookup,
                "SESSION_IDLE_TIMEOUT_SECONDS",
                defaults.session_idle_timeout.as_secs(),
            )),
        }
    }

    pub fn allows_any_origin(&self) -> bool {
        self.cors_allowed_origins.iter().any(|origin| origin == "*")
    }
}
