use crate::core::fallback::FallbackCategory;
use crate::models::ReplySource;
use crate::services::gemini::GeminiClient;

/// Reply produced for a chat message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub reply: String,
    pub source: ReplySource,
}

/// Answers chat messages, preferring the generative API and falling back
/// to keyword replies whenever it is unavailable or fails.
pub struct ChatResponder {
    client: Option<GeminiClient>,
}

impl ChatResponder {
    pub fn new(client: Option<GeminiClient>) -> Self {
        Self { client }
    }

    /// Responder that never calls out
    pub fn fallback_only() -> Self {
        Self { client: None }
    }

    pub fn is_generative(&self) -> bool {
        self.client.is_some()
    }

    /// Answer a message. Never fails; API errors are logged and absorbed.
    pub async fn reply(&self, message: &str) -> ChatReply {
        if let Some(client) = &self.client {
            match client.generate(message).await {
                Ok(text) => {
                    return ChatReply {
                        reply: text,
                        source: ReplySource::Generative,
                    }
                }
                Err(e) => {
                    tracing::warn!("Generative chat unavailable, using fallback: {}", e);
                }
            }
        }

        let category = FallbackCategory::classify(message);
        tracing::debug!("Fallback chat category: {:?}", category);

        ChatReply {
            reply: category.reply().to_string(),
            source: ReplySource::Fallback,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fallback::APPLY_REPLY;

    #[test]
    fn test_fallback_only_answers_apply_question() {
        let responder = ChatResponder::fallback_only();
        let reply = tokio_test::block_on(responder.reply("how to apply"));

        assert_eq!(reply.reply, APPLY_REPLY);
        assert_eq!(reply.source, ReplySource::Fallback);
        assert!(!responder.is_generative());
    }
}
