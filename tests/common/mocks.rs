use async_trait::async_trait;
use ekg_interpreter::{
    Error, Result,
    llm::{ChatCompletionRequest, ChatCompletionResponse, Choice, LlmClient, Usage},
};
use std::sync::Mutex;

/// Mock LLM client that records every request it receives
#[derive(Debug)]
pub struct RecordingLlmClient {
    pub reply: Option<String>,
    pub error: Option<String>,
    pub requests: Mutex<Vec<ChatCompletionRequest>>,
}

impl RecordingLlmClient {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Some(text.to_string()),
            error: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: &str) -> Self {
        Self {
            reply: None,
            error: Some(error.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn get_requests(&self) -> Vec<ChatCompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for RecordingLlmClient {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        self.requests.lock().unwrap().push(request);

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        Ok(create_mock_chat_response(self.reply.as_deref().unwrap_or_default()))
    }
}

pub fn create_mock_chat_response(content: &str) -> ChatCompletionResponse {
    ChatCompletionResponse {
        id: "chatcmpl-mock".to_string(),
        model: "gpt-4o-mini".to_string(),
        choices: vec![Choice {
            index: 0,
            content: Some(content.to_string()),
            finish_reason: Some("Stop".to_string()),
        }],
        usage: Some(Usage {
            prompt_tokens: 120,
            completion_tokens: 40,
            total_tokens: 160,
        }),
    }
}
