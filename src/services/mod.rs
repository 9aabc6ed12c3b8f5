// Service exports
pub mod catalog;
pub mod chat;
pub mod gemini;

pub use catalog::{load_catalog, parse_catalog, try_load_catalog, CatalogError};
pub use chat::{ChatReply, ChatResponder};
pub use gemini::{GeminiClient, GeminiError, DEFAULT_ENDPOINTS, DEFAULT_TIMEOUT_SECS};
