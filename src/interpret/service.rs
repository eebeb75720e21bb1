use super::{PatientContext, build_prompt, image_data_url};
use crate::{
    Result,
    config::LlmConfig,
    llm::{ChatCompletionRequest, ChatMessage, ContentPart, LlmClient, OpenAiClient},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct InterpretationRequest {
    pub image: Vec<u8>,
    pub context: PatientContext,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InterpretationResult {
    pub overall_interpretation: String,
    pub context_received: PatientContext,
}

/// Turns an uploaded EKG and its context into a single chat completion call.
pub struct Interpreter {
    llm_client: Arc<dyn LlmClient>,
    model: String,
    max_tokens: u32,
    system_prompt: String,
}

impl Interpreter {
    pub fn new(llm_client: Arc<dyn LlmClient>, config: &LlmConfig) -> Self {
        Self {
            llm_client,
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            system_prompt: config.system_prompt.clone(),
        }
    }

    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(Arc::new(OpenAiClient::new(config)), config)
    }

    pub fn build_request(&self, request: &InterpretationRequest) -> ChatCompletionRequest {
        let user = ChatMessage::user(vec![
            ContentPart::text(build_prompt(&request.context)),
            ContentPart::image_url(image_data_url(&request.image)),
        ]);

        ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage::system(self.system_prompt.clone()), user],
            max_tokens: Some(self.max_tokens),
        }
    }

    pub async fn interpret(&self, request: InterpretationRequest) -> Result<InterpretationResult> {
        info!(
            "Interpreting EKG image of {} bytes with {} context fields",
            request.image.len(),
            request.context.provided_count()
        );

        let chat_request = self.build_request(&request);
        let response = self.llm_client.create_chat_completion(chat_request).await?;

        if let Some(usage) = &response.usage {
            debug!(
                "Inference used {} prompt and {} completion tokens",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        Ok(InterpretationResult {
            overall_interpretation: response.first_choice_text()?,
            context_received: request.context,
        })
    }
}
