use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use intern_match::config::Settings;
use intern_match::core::Ranker;
use intern_match::error::handle_json_payload_error;
use intern_match::routes::{self, AppState};
use intern_match::services::{load_catalog, ChatResponder, GeminiClient};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    // Initialize logging; LOG_LEVEL and LOG_FORMAT override the config file
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }

    info!("Starting Intern Match service...");

    // Catalog is loaded once and shared read-only
    let catalog = load_catalog(&settings.catalog.path);

    // Chat runs fallback-only without a credential
    let chat = match settings.chat.credential() {
        Some(key) => match GeminiClient::new(
            key.to_string(),
            settings.chat.endpoints.clone(),
            settings.chat.timeout(),
        ) {
            Ok(client) => {
                info!(
                    "Generative chat enabled ({} endpoints, {}s timeout)",
                    client.endpoints().len(),
                    settings.chat.timeout_secs
                );
                ChatResponder::new(Some(client))
            }
            Err(e) => {
                warn!("Generative chat disabled: {}", e);
                ChatResponder::fallback_only()
            }
        },
        None => {
            warn!("No chat API key configured, chat will use keyword replies only");
            ChatResponder::fallback_only()
        }
    };

    let weights = settings.scoring_weights();
    let ranker = Ranker::new(weights, settings.matching.min_score, settings.matching.max_results);

    info!(
        "Ranker initialized with weights: {:?}, min score {}, top {}",
        weights, settings.matching.min_score, settings.matching.max_results
    );

    // Build application state
    let app_state = AppState {
        catalog,
        ranker,
        chat: Arc::new(chat),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
