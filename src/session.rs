use rocket::{
    http::Status,
    request::{self, FromRequest, Request},
};

pub const SESSION_HEADER: &str = "X-Session-Id";
pub const DEFAULT_SESSION: &str = "default";
const MAX_SESSION_LEN: usize = 64;

/// Key of the game slot a request works on. Requests without the header share one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session(pub String);

#[derive(Debug)]
pub struct InvalidSession;

fn parse_session(header: Option<&str>) -> Result<Session, InvalidSession> {
    match header.map(str::trim) {
        None | Some("") => Ok(Session(DEFAULT_SESSION.to_string())),
        Some(id) if id.len() <= MAX_SESSION_LEN && id.chars().all(|c| c.is_ascii_graphic()) => {
            Ok(Session(id.to_string()))
        }
        Some(_) => Err(InvalidSession),
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Session {
    type Error = InvalidSession;

    async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        match parse_session(req.headers().get_one(SESSION_HEADER)) {
            Ok(session) => request::Outcome::Success(session),
            Err(e) => request::Outcome::Error((Status::BadRequest, e)),
        }
    }
}
