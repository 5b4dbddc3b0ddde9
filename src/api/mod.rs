use actix_cors::Cors;
use actix_web::http::header;

pub mod booking;
pub mod middleware;

/// Контракт relay для браузера: будь-який origin (wildcard),
/// методи POST/OPTIONS, з заголовків — лише Content-Type.
pub fn cors_policy() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods(vec!["POST", "OPTIONS"])
        .allowed_header(header::CONTENT_TYPE)
}
