use rocket::{
    Request, State, catch, get,
    http::Status,
    post,
    response::status,
    serde::json::Json,
};
use tracing::{info, instrument, warn};

use crate::{
    error::ApiError,
    logic::Game,
    model::{ErrorResponse, GameResponse, NewGameRequest, TurnRequest},
    rate_limit::{ClientIp, Limiter},
    session::Session,
    store::Games,
};

#[post("/new", data = "<params>")]
#[instrument(level = "trace", skip_all, fields(client_ip = %client_ip.0, session = %session.0))]
pub fn new_game(
    params: Json<NewGameRequest>,
    games: &State<Games>,
    rate_limiter: &State<Limiter>,
    client_ip: ClientIp,
    session: Session,
) -> Result<Json<GameResponse>, ApiError> {
    info!(
        "New game request from {}: {}x{} with {} mines",
        client_ip.0, params.width, params.height, params.mines_count
    );

    rate_limiter.check(&client_ip)?;

    let game = Game::new(params.width, params.height, params.mines_count);
    Ok(Json(games.start(&session.0, game)))
}

#[post("/turn", data = "<request>")]
#[instrument(level = "trace", skip_all, fields(session = %session.0, game_id = %request.game_id))]
pub fn turn(
    request: Json<TurnRequest>,
    games: &State<Games>,
    session: Session,
) -> Result<Json<GameResponse>, ApiError> {
    let response = games.take_turn(&session.0, &request.game_id, request.col, request.row)?;
    Ok(Json(response))
}

#[get("/current")]
#[instrument(level = "trace", skip_all, fields(session = %session.0))]
pub fn current_game(games: &State<Games>, session: Session) -> Result<Json<GameResponse>, ApiError> {
    games
        .current(&session.0)
        .map(Json)
        .ok_or(ApiError::NoActiveGame)
}

#[catch(default)]
pub fn default_catcher(code: Status, req: &Request<'_>) -> status::Custom<Json<ErrorResponse>> {
    let error = match code.code {
        400 | 422 => "Request is malformed.".to_string(),
        404 => "Not found.".to_string(),
        _ => code.reason().unwrap_or("Request failed.").to_string(),
    };

    warn!("{} {} failed with {}", req.method(), req.uri(), code);
    status::Custom(code, Json(ErrorResponse { error }))
}
