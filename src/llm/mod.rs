mod client;
mod types;

#[cfg(test)]
pub use client::MockLlmClient;
pub use client::{LlmClient, OpenAiClient};
pub use types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, ContentPart, Usage,
};
