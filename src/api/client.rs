//! `generateContent` transport.
//!
//! Sends one [`GenerateContentRequest`] per prompt and extracts the first
//! candidate's first text part. No retries: a failed call is reported once and
//! the caller decides what to show.

use super::CompletionClient;
use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::types::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use std::time::Duration;

/// Header carrying the API key. Keeps the credential out of request URLs,
/// which tend to end up in logs.
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Client for the generative-language `generateContent` endpoint.
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    /// Build a client from resolved API configuration.
    pub fn new(config: &ApiConfig, timeout: Duration) -> Self {
        // Fall back to reqwest defaults if builder creation fails for any reason.
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.trim().to_string(),
            model: config.model.trim().to_string(),
        }
    }

    /// Full endpoint URL for the configured model.
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    /// Send one prompt and return the generated text.
    pub async fn generate(&self, prompt: &str) -> Result<String, ApiError> {
        let url = self.endpoint();
        tracing::debug!(%url, prompt_chars = prompt.chars().count(), "dispatching completion");

        let mut req = self
            .http
            .post(&url)
            .json(&GenerateContentRequest::from_prompt(prompt));
        if !self.api_key.is_empty() {
            req = req.header(API_KEY_HEADER, &self.api_key);
        }

        let response = req.send().await?;
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status(status, body));
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)
            .map_err(|e| ApiError::InvalidResponse(format!("undecodable body: {e}")))?;
        parsed
            .first_text()
            .map(str::to_string)
            .ok_or_else(|| ApiError::InvalidResponse("no candidate text in response".into()))
    }
}

#[async_trait]
impl CompletionClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, ApiError> {
        self.generate(prompt).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve exactly one canned HTTP response and hand back the raw request.
    async fn serve_once(
        status_line: &'static str,
        body: &'static str,
    ) -> (String, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.expect("accept");
            let raw = read_request(&mut stream).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = stream.write_all(response.as_bytes()).await;
            raw
        });
        (format!("http://{addr}/v1beta"), handle)
    }

    /// Read headers plus a `Content-Length` body, which may arrive in pieces.
    async fn read_request(stream: &mut tokio::net::TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 4096];
        loop {
            let n = stream.read(&mut chunk).await.unwrap_or(0);
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&buf);
            let Some(header_end) = text.find("\r\n\r\n") else {
                continue;
            };
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                })
                .unwrap_or(0);
            if buf.len() >= header_end + 4 + content_length {
                break;
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }

    fn api_config(base_url: String) -> ApiConfig {
        ApiConfig {
            base_url,
            api_key: "test-key".to_string(),
            model: "test-model".to_string(),
        }
    }

    #[tokio::test]
    async fn extracts_first_candidate_text() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"candidates":[{"content":{"parts":[{"text":"world"}]}}]}"#,
        )
        .await;
        let client = GeminiClient::new(&api_config(base_url), Duration::from_secs(3));
        let text = client.complete("hello").await.expect("completion");
        assert_eq!(text, "world");

        let raw = server.await.unwrap();
        assert!(
            raw.starts_with("POST /v1beta/models/test-model:generateContent "),
            "unexpected request line: {raw}"
        );
        assert!(raw.to_ascii_lowercase().contains("x-goog-api-key: test-key"));
        assert!(raw.contains(r#"{"contents":[{"parts":[{"text":"hello"}]}]}"#));
    }

    #[tokio::test]
    async fn non_success_status_is_status_error() {
        let (base_url, _server) =
            serve_once("429 Too Many Requests", r#"{"error":"rate"}"#).await;
        let client = GeminiClient::new(&api_config(base_url), Duration::from_secs(3));
        let err = client.complete("hello").await.expect_err("429 expected");
        assert_eq!(err.status_code(), Some(429));
        assert!(err.to_string().contains("rate"), "got: {err}");
    }

    #[tokio::test]
    async fn missing_candidates_is_invalid_response() {
        let (base_url, _server) = serve_once("200 OK", r#"{"candidates":[]}"#).await;
        let client = GeminiClient::new(&api_config(base_url), Duration::from_secs(3));
        let err = client.complete("hello").await.expect_err("shape error expected");
        assert!(matches!(err, ApiError::InvalidResponse(_)), "got: {err}");
    }

    #[tokio::test]
    async fn respects_timeout() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        // Accept and hold the connection open so the client must time out.
        let _accept = tokio::spawn(async move {
            let (_stream, _) = listener.accept().await.expect("accept");
            tokio::time::sleep(Duration::from_secs(5)).await;
        });

        let client = GeminiClient::new(
            &api_config(format!("http://{addr}")),
            Duration::from_millis(50),
        );
        let err = client.complete("hello").await.expect_err("timeout expected");
        match err {
            ApiError::Http(inner) => assert!(inner.is_timeout(), "unexpected error: {inner}"),
            other => panic!("expected timeout Http error, got: {other}"),
        }
    }

    #[test]
    fn endpoint_trims_trailing_slash() {
        let client = GeminiClient::new(
            &api_config("https://example.com/v1beta/".to_string()),
            Duration::from_secs(1),
        );
        assert_eq!(
            client.endpoint(),
            "https://example.com/v1beta/models/test-model:generateContent"
        );
    }
}
