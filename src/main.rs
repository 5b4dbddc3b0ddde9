use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use dental_lab::api;
use dental_lab::api::booking::handlers::json_error_handler;
use dental_lab::api::booking::structures::{BookingRequest, OkResponse};
use dental_lab::app_state::AppState;
use dental_lab::config::Config;
use dental_lab::services::telegram::{Notifier, TelegramService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env().expect("Failed to load configuration");

    let notifier: Arc<dyn Notifier> = Arc::new(TelegramService::from_config(&config));
    if !config.telegram_configured() {
        log::warn!(
            "TELEGRAM_BOT_TOKEN / TELEGRAM_CHAT_ID not set: bookings will fail with 'Server misconfigured'"
        );
    }

    #[derive(OpenApi)]
    #[openapi(
        paths(api::booking::handlers::submit_booking),
        components(schemas(BookingRequest, OkResponse)),
        tags(
            (name = "Booking", description = "Booking form relay endpoint")
        )
    )]
    struct ApiDoc;

    let host = config.host.clone();
    let port = config.port;
    let max_body_bytes = config.effective_max_body_bytes();

    log::info!("Starting server at http://{}:{}", host, port);
    log::info!("Swagger UI available at http://{}:{}/swagger-ui/", host, port);

    HttpServer::new(move || {
        let cors = api::cors_policy();

        App::new()
            .wrap(middleware::NormalizePath::trim())
            .wrap(api::middleware::RequestId)
            .app_data(web::Data::new(AppState {
                config: config.clone(),
                notifier: notifier.clone(),
            }))
            .app_data(
                web::JsonConfig::default()
                    .limit(max_body_bytes)
                    .error_handler(json_error_handler),
            )
            .service(web::scope("/api").wrap(cors).configure(api::booking::init_routes))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
