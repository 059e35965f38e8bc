use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use dashmap::DashMap;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::{error::ApiError, logic::Game, model::GameResponse};

pub type Games = Arc<GameStore>;

#[derive(Debug)]
struct Slot {
    game: Game,
    last_activity: Instant,
}

/// One game slot per session. Starting a game replaces whatever the slot held.
#[derive(Debug, Default)]
pub struct GameStore {
    slots: DashMap<String, Slot>,
}

/// Request-level checks made before a turn reaches the engine.
fn validate_turn(game: &Game, game_id: &str) -> Result<(), ApiError> {
    let game_id = Uuid::parse_str(game_id.trim()).map_err(|_| ApiError::InvalidIdentifier)?;
    if game.id() != game_id {
        return Err(ApiError::GameIdMismatch);
    }
    if game.completed() {
        return Err(ApiError::GameAlreadyCompleted);
    }
    Ok(())
}

impl GameStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[instrument(level = "trace", skip(self, game), fields(game_id = %game.id()))]
    pub fn start(&self, session: &str, game: Game) -> GameResponse {
        let response = GameResponse::from(&game);
        let previous = self.slots.insert(
            session.to_string(),
            Slot {
                game,
                last_activity: Instant::now(),
            },
        );

        if let Some(previous) = previous {
            debug!(
                "Session {} discarded game {}",
                session,
                previous.game.id()
            );
        }
        response
    }

    #[instrument(level = "trace", skip(self))]
    pub fn take_turn(
        &self,
        session: &str,
        game_id: &str,
        col: i32,
        row: i32,
    ) -> Result<GameResponse, ApiError> {
        let mut slot = self.slots.get_mut(session).ok_or(ApiError::NoActiveGame)?;
        slot.last_activity = Instant::now();

        validate_turn(&slot.game, game_id)?;
        if !slot.game.turn(col, row) {
            return Err(ApiError::IllegalCell);
        }

        if slot.game.completed() {
            info!(
                "Game {} finished after {} opened cells",
                slot.game.id(),
                slot.game.opened_cells()
            );
        }
        Ok(GameResponse::from(&slot.game))
    }

    pub fn current(&self, session: &str) -> Option<GameResponse> {
        self.slots
            .get(session)
            .map(|slot| GameResponse::from(&slot.game))
    }

    /// Drops slots untouched for longer than `timeout`, returning how many went.
    pub fn evict_idle(&self, timeout: Duration) -> usize {
        self.evict_idle_at(timeout, Instant::now())
    }

    fn evict_idle_at(&self, timeout: Duration, now: Instant) -> usize {
        let before = self.slots.len();
        self.slots
            .retain(|_, slot| now.saturating_duration_since(slot.last_activity) <= timeout);
        before - self.slots.len()
    }

    pub fn active_sessions(&self) -> usize {
        self.slots.len()
    }
}
