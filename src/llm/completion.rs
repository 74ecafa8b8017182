//! Chat-completion call: one request, one answer.
//!
//! Unlike a chat client there is no history, no system prompt and no
//! sampling parameters: a single user message goes out and the first
//! choice's text comes back. Every failure collapses to an empty answer.

use super::prompts::MODEL;
use crate::settings::AppSettings;
use std::future::Future;

/// Something that turns a prompt into an answer.
///
/// Implementations must not fail: errors are logged and reported as an
/// empty string.
pub trait Completer {
    fn complete(&self, prompt: &str) -> impl Future<Output = String> + Send;
}

/// OpenAI-compatible `/chat/completions` client.
pub struct OpenAiCompleter {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl OpenAiCompleter {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(settings.api_key.clone(), settings.base_url.clone())
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }

    async fn request(&self, prompt: &str) -> Result<String, String> {
        let start = std::time::Instant::now();

        let resp = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&serde_json::json!({
                "model": MODEL,
                "messages": [{"role": "user", "content": prompt}]
            }))
            .send()
            .await
            .map_err(|e| format!("HTTP request failed: {}", e))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| format!("Failed to read response: {}", e))?;

        if !status.is_success() {
            let preview: String = body.chars().take(200).collect();
            return Err(format!("API returned {}: {}", status, preview));
        }

        log::info!("[LLM] API latency: {}ms", start.elapsed().as_millis());

        extract_choice_text(&body).ok_or_else(|| "Could not parse completion response".to_string())
    }
}

impl Completer for OpenAiCompleter {
    async fn complete(&self, prompt: &str) -> String {
        log::info!(
            "[LLM] Model: {}, prompt: {} chars",
            MODEL,
            prompt.chars().count()
        );
        match self.request(prompt).await {
            Ok(answer) => {
                log::info!("[LLM] Answer: {} chars", answer.chars().count());
                answer
            }
            Err(e) => {
                log::error!("[LLM] Error communicating with completion API: {}", e);
                String::new()
            }
        }
    }
}

/// Pull `choices[0].message.content` out of a response body, trimmed.
pub fn extract_choice_text(body: &str) -> Option<String> {
    let parsed: serde_json::Value = serde_json::from_str(body).ok()?;
    parsed
        .get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
        .map(|s| s.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_and_trims_first_choice() {
        let body = r#"{
            "id": "chatcmpl-1",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "  B) 4\n"}},
                {"index": 1, "message": {"role": "assistant", "content": "A) 3"}}
            ]
        }"#;
        assert_eq!(extract_choice_text(body).as_deref(), Some("B) 4"));
    }

    #[test]
    fn missing_choices_is_none() {
        assert_eq!(extract_choice_text(r#"{"error": {"message": "bad key"}}"#), None);
        assert_eq!(extract_choice_text(r#"{"choices": []}"#), None);
    }

    #[test]
    fn null_content_is_none() {
        let body = r#"{"choices": [{"message": {"role": "assistant", "content": null}}]}"#;
        assert_eq!(extract_choice_text(body), None);
    }

    #[test]
    fn non_json_is_none() {
        assert_eq!(extract_choice_text("<html>502</html>"), None);
    }

    #[test]
    fn endpoint_joins_base_url() {
        let completer = OpenAiCompleter::new("k", "http://localhost:1234/v1/");
        assert_eq!(completer.endpoint(), "http://localhost:1234/v1/chat/completions");
    }
}
