use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use serde::{Deserialize, Serialize};
use crate::error::{AppError, Result};

/// Morphological analysis capability: splits text and returns the tokens
/// tagged as nouns, in the order they appear.
#[async_trait]
pub trait NounTagger: Send + Sync {
    async fn nouns(&self, text: &str) -> Result<Vec<String>>;
}

// Shared client so every request reuses the same connection pool
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .expect("Failed to build HTTP client")
});

#[derive(Serialize)]
struct TagRequest<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct TagResponse {
    nouns: Vec<String>,
}

/// Tagger backed by an HTTP analysis service that answers
/// `{"text": ...}` with `{"nouns": [...]}`.
pub struct RemoteTagger {
    endpoint: String,
}

impl RemoteTagger {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl NounTagger for RemoteTagger {
    async fn nouns(&self, text: &str) -> Result<Vec<String>> {
        let res = CLIENT
            .post(&self.endpoint)
            .json(&TagRequest { text })
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            let detail = res.text().await.unwrap_or_default();
            return Err(AppError::Tagger(format!(
                "tagger returned {}: {}",
                status,
                detail.trim()
            )));
        }

        let reply: TagResponse = res
            .json()
            .await
            .map_err(|e| AppError::Tagger(format!("Invalid response format from tagger: {}", e)))?;

        Ok(reply.nouns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_request_serializes_text_field() {
        let body = serde_json::to_string(&TagRequest { text: "오늘은 날씨가 좋다" }).unwrap();
        assert_eq!(body, r#"{"text":"오늘은 날씨가 좋다"}"#);
    }

    #[test]
    fn tag_response_reads_noun_list() {
        let reply: TagResponse =
            serde_json::from_str(r#"{"nouns": ["오늘", "날씨"], "pos": []}"#).unwrap();
        assert_eq!(reply.nouns, vec!["오늘", "날씨"]);
    }

    #[tokio::test]
    async fn unreachable_tagger_is_a_tagger_error() {
        // Reserve a free port, then release it so nothing is listening there
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let tagger = RemoteTagger::new(format!("http://{}/nouns", addr));
        let err = tagger.nouns("오늘").await.unwrap_err();
        assert!(matches!(err, AppError::Tagger(_)));
    }
}
