use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::error::AppError;
use crate::models::{ChatRequest, ChatResponse, MESSAGE_LENGTH_MESSAGE};
use crate::routes::AppState;

pub const EMPTY_MESSAGE: &str = "Please enter a message";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/chat", web::post().to(chat));
}

/// Chat endpoint
///
/// POST /api/v1/chat
///
/// Request body:
/// ```json
/// { "message": "How do I apply?" }
/// ```
async fn chat(
    state: web::Data<AppState>,
    req: web::Json<ChatRequest>,
) -> Result<HttpResponse, AppError> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(AppError::Validation(EMPTY_MESSAGE.to_string()));
    }

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for chat request: {}", errors);
        return Err(AppError::Validation(MESSAGE_LENGTH_MESSAGE.to_string()));
    }

    let reply = state.chat.reply(message).await;

    Ok(HttpResponse::Ok().json(ChatResponse {
        reply: reply.reply,
        source: reply.source,
    }))
}
