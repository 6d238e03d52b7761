// erdwatch-core/src/infrastructure/generator/chat_completion.rs
//
// OpenAI-compatible chat-completion adapter for the DiagramGenerator port.
// One request, temperature 0, no retry.

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, error, instrument};

use crate::domain::config::CheckConfig;
use crate::error::ErdwatchError;
use crate::infrastructure::error::{InfrastructureError, TransportError};
use crate::ports::generator::DiagramGenerator;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

pub struct ChatCompletionClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
    model: String,
}

impl ChatCompletionClient {
    pub fn new(api_base: &str, api_key: &str, model: &str) -> Self {
        Self::with_client(reqwest::Client::new(), api_base, api_key, model)
    }

    /// Useful for tests or custom transport settings.
    pub fn with_client(client: reqwest::Client, api_base: &str, api_key: &str, model: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/chat/completions", api_base.trim_end_matches('/')),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    pub fn from_config(config: &CheckConfig) -> Self {
        Self::new(&config.api_base, &config.api_key, &config.model)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn complete(&self, prompt: &str) -> Result<String, InfrastructureError> {
        let body = ChatRequest {
            model: &self.model,
            temperature: 0.0,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| TransportError::MalformedResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                TransportError::MalformedResponse("missing choices[0].message.content".to_string())
                    .into()
            })
    }
}

#[async_trait]
impl DiagramGenerator for ChatCompletionClient {
    #[instrument(skip(self, prompt), fields(model = %self.model, prompt.len = prompt.len()))]
    async fn generate(&self, prompt: &str) -> Result<String, ErdwatchError> {
        let start = Instant::now();
        debug!("📡 POST {}", self.endpoint);

        match self.complete(prompt).await {
            Ok(text) => {
                debug!("✅ Generator answered in {:.2?} ({} bytes)", start.elapsed(), text.len());
                Ok(text)
            }
            Err(e) => {
                error!("❌ Generator call failed after {:.2?}: {}", start.elapsed(), e);
                Err(e.into())
            }
        }
    }
}
