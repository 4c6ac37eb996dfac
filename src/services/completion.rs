use crate::config::CompletionSettings;
use crate::services::upstream::{ensure_success, UpstreamError};
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// Request body for the inference endpoint
#[derive(Debug, Serialize)]
struct InferenceRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f32,
}

/// Client for the text completion API that writes the school recommendations
pub struct CompletionClient {
    endpoint: String,
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    client: Client,
}

impl CompletionClient {
    pub fn new(settings: CompletionSettings) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            endpoint: settings.endpoint,
            api_key: settings.api_key,
            model: settings.model,
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
            client: builder.build()?,
        })
    }

    /// Send the prompt and return `output.choices[0].text` verbatim
    pub async fn get_recommendations(&self, prompt: &str) -> Result<String, UpstreamError> {
        let payload = InferenceRequest {
            model: &self.model,
            prompt,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        tracing::debug!(
            "Requesting completion from {} (model: {}, prompt: {} chars)",
            self.endpoint,
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?;

        let response = ensure_success("completion", response).await?;
        let body = response.text().await?;

        extract_completion_text(&body)
    }
}

/// Pull the generated text out of an inference response body
pub fn extract_completion_text(body: &str) -> Result<String, UpstreamError> {
    let json: Value = serde_json::from_str(body)
        .map_err(|e| UpstreamError::Response(format!("Completion body is not JSON: {}", e)))?;

    let choices = json
        .get("output")
        .ok_or_else(|| UpstreamError::Response("Missing output object".into()))?
        .get("choices")
        .and_then(|c| c.as_array())
        .ok_or_else(|| UpstreamError::Response("Missing output.choices array".into()))?;

    let text = choices
        .first()
        .ok_or_else(|| UpstreamError::Response("output.choices is empty".into()))?
        .get("text")
        .and_then(|t| t.as_str())
        .ok_or_else(|| UpstreamError::Response("Missing text in first choice".into()))?;

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_first_choice_text() {
        let body = r#"{"output":{"choices":[{"text":"X"},{"text":"Y"}]}}"#;
        assert_eq!(extract_completion_text(body).unwrap(), "X");
    }

    #[test]
    fn test_missing_output_is_an_error() {
        let err = extract_completion_text(r#"{"choices":[{"text":"X"}]}"#).unwrap_err();
        assert!(matches!(err, UpstreamError::Response(ref m) if m.contains("output")));
    }

    #[test]
    fn test_empty_choices_is_an_error() {
        let err = extract_completion_text(r#"{"output":{"choices":[]}}"#).unwrap_err();
        assert!(matches!(err, UpstreamError::Response(_)));
    }

    #[test]
    fn test_non_json_body_is_an_error() {
        assert!(extract_completion_text("<html>502</html>").is_err());
    }

    #[test]
    fn test_request_body_shape() {
        let payload = InferenceRequest {
            model: "togethercomputer/llama-2-70b-chat",
            prompt: "hola",
            max_tokens: 800,
            temperature: 0.7,
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["model"], "togethercomputer/llama-2-70b-chat");
        assert_eq!(json["prompt"], "hola");
        assert_eq!(json["max_tokens"], 800);
        assert!((json["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }
}
