use rocket::http::Method;
use rocket_cors::{AllowedHeaders, AllowedOrigins, Cors, CorsOptions};

use crate::config::Settings;

pub fn create_cors(settings: &Settings) -> Result<Cors, rocket_cors::Error> {
    let allowed_origins = if settings.allows_any_origin() {
        AllowedOrigins::all()
    } else {
        AllowedOrigins::some_exact(&settings.cors_allowed_origins)
    };

    CorsOptions {
        allowed_origins,
        allowed_methods: vec![Method::Get, Method::Post, Method::Options]
            .into_iter()
            .map(|m| m.into())
            .collect(),
        allowed_headers: AllowedHeaders::all(),
        ..Default::default()
    }
    .to_cors()
}
