use crate::llm::client::LLMClient;
use crate::types::{AppError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Chat-completions client for OpenAI-compatible endpoints (Groq by default).
pub struct OpenAICompatibleClient {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
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

impl OpenAICompatibleClient {
    pub fn new(
        http: reqwest::Client,
        api_key: String,
        api_base: String,
        model: String,
        temperature: f32,
    ) -> Self {
        Self {
            http,
            api_key,
            api_base: api_base.trim_end_matches('/').to_string(),
            model,
            temperature,
        }
    }

    async fn chat(&self, messages: Vec<ChatMessage<'_>>) -> Result<String> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages,
            temperature: self.temperature,
        };

        tracing::debug!(model = %self.model, "sending chat completion request");

        let response = self
            .http
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AppError::LLM(format!("Chat completion request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::LLM(format!(
                "Chat completion returned {}: {}",
                status, body
            )));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AppError::LLM(format!("Failed to decode chat completion: {}", e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| AppError::LLM(format!("No response from {}", self.model)))
    }
}

#[async_trait]
impl LLMClient for OpenAICompatibleClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        self.chat(vec![ChatMessage {
            role: "user",
            content: prompt,
        }])
        .await
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OpenAICompatibleClient {
        OpenAICompatibleClient::new(
            reqwest::Client::new(),
            "test-key".to_string(),
            format!("{}/", server.uri()),
            "llama-3.3-70b-versatile".to_string(),
            0.0,
        )
    }

    #[tokio::test]
    async fn test_generate_returns_first_choice() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer test-key"))
            .and(body_partial_json(json!({
                "model": "llama-3.3-70b-versatile",
                "messages": [{"role": "user", "content": "Hello"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "Hi there"}}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let reply = client_for(&server).generate("Hello").await.unwrap();
        assert_eq!(reply, "Hi there");
    }

    #[tokio::test]
    async fn test_error_status_is_llm_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let err = client_for(&server).generate("Hello").await.unwrap_err();
        assert!(matches!(err, AppError::LLM(ref msg) if msg.contains("401")));
    }

    #[tokio::test]
    async fn test_empty_choices_is_llm_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"choices": []})))
            .mount(&server)
            .await;

        assert!(client_for(&server).generate("Hello").await.is_err());
    }
}
