// Route exports
pub mod chat;
pub mod health;
pub mod recommend;

use actix_web::web;
use std::sync::Arc;

use crate::core::Ranker;
use crate::models::Catalog;
use crate::services::ChatResponder;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Catalog,
    pub ranker: Ranker,
    pub chat: Arc<ChatResponder>,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(recommend::configure)
            .configure(chat::configure)
            .configure(health::configure),
    );
}
