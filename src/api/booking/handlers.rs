use actix_web::{HttpMessage, HttpRequest, HttpResponse, error::JsonPayloadError, web};

use crate::{api::middleware::RequestTraceId, app_state::AppState, errors::AppError};

use super::functions::compose_message;
use super::structures::{BookingRequest, OkResponse};

/// Приймає заявку з форми запису і пересилає її в Telegram.
///
/// Порядок перевірок повторює контракт relay: honeypot → обов'язкові поля →
/// секрети сервера → одна спроба доставки.
#[utoipa::path(
    post,
    path = "/api/booking",
    tag = "Booking",
    request_body = BookingRequest,
    responses(
        (status = 200, description = "Booking forwarded (or silently dropped as spam)", body = OkResponse),
        (status = 400, description = "Malformed payload or missing required fields"),
        (status = 405, description = "Method not allowed"),
        (status = 500, description = "Server misconfigured or unexpected error"),
        (status = 502, description = "Telegram delivery failed")
    )
)]
pub async fn submit_booking(
    req: HttpRequest,
    app_state: web::Data<AppState>,
    body: web::Json<BookingRequest>,
) -> Result<HttpResponse, AppError> {
    let trace_id = req
        .extensions()
        .get::<RequestTraceId>()
        .map(|trace| trace.0.clone())
        .unwrap_or_default();
    let request = body.into_inner();

    // Спам-пастка: відповідаємо успіхом, нічого не пересилаємо,
    // щоб бот не отримав сигналу для адаптації
    if !request.website.trim().is_empty() {
        log::info!("request_id={} booking dropped: honeypot field is non-empty", trace_id);
        return Ok(HttpResponse::Ok().json(OkResponse { ok: true }));
    }

    if request.name.trim().is_empty() || request.phone.trim().is_empty() {
        return Err(AppError::InvalidInput("Missing required fields".to_string()));
    }

    if !app_state.notifier.is_configured() {
        return Err(AppError::Misconfigured);
    }

    let message = compose_message(&request);
    app_state.notifier.deliver(&message).await?;

    log::info!("request_id={} booking forwarded to Telegram", trace_id);
    Ok(HttpResponse::Ok().json(OkResponse { ok: true }))
}

async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed)
}

/// Помилки JSON-екстрактора переводимо у формат `{error}` relay-контракту.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let app_error = match err {
        JsonPayloadError::ContentType => {
            AppError::InvalidInput("Invalid content type".to_string())
        }
        _ => AppError::InvalidInput("Invalid JSON body".to_string()),
    };
    app_error.into()
}

/// Реєстрація маршрутів заявки
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/booking")
            .route(web::post().to(submit_booking))
            // не-POST дає 405 з JSON-тілом, а не порожню відповідь
            .default_service(web::route().to(method_not_allowed)),
    );
}
