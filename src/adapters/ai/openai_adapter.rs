//! OpenAI-compatible adapter for meal-plan generation.
//!
//! Works with Groq, OpenAI, Azure OpenAI, and local Ollama instances.
//! Implements `GenerationPort`; the assistant text is returned verbatim,
//! no parsing or validation of the plan body is performed.

use crate::domain::{DomainError, MealPlan, PlanRequest};
use crate::ports::GenerationPort;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info, warn};

/// OpenAI-compatible generation adapter.
pub struct OpenAiAdapter {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl OpenAiAdapter {
    /// Create a new adapter.
    ///
    /// # Arguments
    /// * `api_url` - Chat-completions endpoint (e.g. Groq's OpenAI-compatible URL)
    /// * `api_key` - API key (can be empty for local Ollama)
    /// * `model` - Model name (e.g. "llama-3.3-70b-versatile")
    /// * `temperature` - Sampling temperature
    pub fn new(api_url: String, api_key: String, model: String, temperature: f32) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            model,
            temperature,
        }
    }

    /// System prompt framing the assistant role. Profile details come in
    /// the user message built by `PlanRequest`.
    fn system_prompt() -> &'static str {
        "You are NutriAI, an expert nutritionist assistant. You produce practical, \
         regionally appropriate multi-day meal plans that respect the user's stated \
         allergies, dietary preference, budget, and daily calorie target. Answer in \
         clear, well-structured plain text."
    }

    /// Pull the provider's message out of a JSON error body
    /// (`{"error": {"message": ...}}`, the OpenAI/Groq shape).
    /// Returns None for non-JSON or unexpected shapes.
    fn extract_api_error(body: &str) -> Option<String> {
        let v: serde_json::Value = serde_json::from_str(body).ok()?;
        v.get("error")?
            .get("message")?
            .as_str()
            .map(str::to_string)
    }
}

/// OpenAI API request structure.
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// OpenAI API response structure.
#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: String,
}

#[async_trait::async_trait]
impl GenerationPort for OpenAiAdapter {
    async fn generate(&self, request: &PlanRequest) -> Result<MealPlan, DomainError> {
        info!(
            plan_days = request.plan_days,
            prompt_len = request.prompt.len(),
            model = %self.model,
            "sending plan request to provider"
        );

        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: Self::system_prompt().to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: request.prompt.clone(),
                },
            ],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| DomainError::Generation(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "provider returned error");
            let detail = Self::extract_api_error(&text)
                .unwrap_or_else(|| text.chars().take(200).collect());
            return Err(DomainError::Generation(format!(
                "API error {}: {}",
                status, detail
            )));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| DomainError::Generation(format!("Failed to parse API response: {}", e)))?;

        let text = chat_response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| DomainError::Generation("No response choices returned".to_string()))?;

        debug!(plan_len = text.len(), "received plan text");

        let generated_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64;

        info!(plan_len = text.len(), "plan generation complete");

        Ok(MealPlan {
            text,
            model: self.model.clone(),
            generated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_api_error_openai_shape() {
        let body = r#"{"error": {"message": "Invalid API Key", "type": "invalid_request_error"}}"#;
        assert_eq!(
            OpenAiAdapter::extract_api_error(body),
            Some("Invalid API Key".to_string())
        );
    }

    #[test]
    fn extract_api_error_non_json() {
        assert_eq!(OpenAiAdapter::extract_api_error("<html>502</html>"), None);
    }

    #[test]
    fn extract_api_error_unexpected_shape() {
        assert_eq!(OpenAiAdapter::extract_api_error(r#"{"detail": "nope"}"#), None);
        assert_eq!(OpenAiAdapter::extract_api_error(r#"{"error": "flat"}"#), None);
    }
}
