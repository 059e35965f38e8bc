use rocket::{
    Request,
    http::Status,
    response::{self, Responder, status},
    serde::json::Json,
};
use thiserror::Error;
use tracing::warn;

use crate::model::ErrorResponse;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("No game has been started yet. Start a new game first.")]
    NoActiveGame,
    #[error("Game identifier is not valid.")]
    InvalidIdentifier,
    #[error("Game identifier does not match the current game.")]
    GameIdMismatch,
    #[error("The game is already over. Start a new game.")]
    GameAlreadyCompleted,
    #[error("This cell cannot be opened.")]
    IllegalCell,
    #[error("Too many new games, try again later.")]
    RateLimited,
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::RateLimited => Status::TooManyRequests,
            _ => Status::BadRequest,
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
        warn!("Rejected {} {}: {}", req.method(), req.uri(), self);
        status::Custom(
            self.status(),
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
        .respond_to(req)
    }
}
