mod models;
mod openai;

pub use models::{ChatMessage, ChatRole};
pub use openai::OpenAiChat;

use crate::error::ChatResult;

/// A chat-completion endpoint
pub trait ChatBackend {
    /// Send the messages and return the first reply's content
    fn complete(&self, messages: &[ChatMessage]) -> impl Future<Output = ChatResult<String>>;
}
