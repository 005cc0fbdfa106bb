/// Skill advisor: the single point of entry for generative-language calls.
///
/// Handlers depend on the `SkillAdvisor` trait; `GeminiAdvisor` talks to the
/// Gemini `generateContent` endpoint with bounded retry.
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all advice calls.
pub const MODEL: &str = "gemini-2.0-flash";
const MAX_RETRIES: u32 = 3;

#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Rate limited after {retries} retries")]
    RateLimited { retries: u32 },

    #[error("model returned empty content")]
    EmptyContent,
}

/// Ordered skill → advice pairs, serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillAdvice(Vec<(String, String)>);

impl SkillAdvice {
    #[cfg(test)]
    pub fn get(&self, skill: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == skill)
            .map(|(_, text)| text.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Serialize for SkillAdvice {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (skill, text) in &self.0 {
            map.serialize_entry(skill, text)?;
        }
        map.end()
    }
}

#[async_trait]
pub trait SkillAdvisor: Send + Sync {
    /// Returns a short learning brief for one skill.
    async fn skill_brief(&self, skill: &str) -> Result<String, AdvisorError>;

    /// One call per skill. A failed call degrades to an error message for
    /// that skill instead of failing the whole batch.
    async fn advise_all(&self, skills: &[String]) -> SkillAdvice {
        let mut advice = Vec::with_capacity(skills.len());
        for skill in skills {
            let text = match self.skill_brief(skill).await {
                Ok(text) => text,
                Err(e) => {
                    warn!("Advice for '{skill}' failed: {e}");
                    format!("Error fetching information about {skill}: {e}")
                }
            };
            advice.push((skill.clone(), text));
        }
        SkillAdvice(advice)
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text of the first candidate.
    fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        (!text.trim().is_empty()).then_some(text)
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

#[derive(Clone)]
pub struct GeminiAdvisor {
    client: Client,
    api_key: String,
}

impl GeminiAdvisor {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, AdvisorError> {
        Ok(Self {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
        })
    }

    /// Makes a raw generateContent call.
    /// Retries on 429, 5xx and transport errors with exponential backoff.
    async fn call(&self, prompt: &str) -> Result<String, AdvisorError> {
        let url = format!("{GEMINI_API_BASE}/{MODEL}:generateContent");
        let request_body = GenerateRequest {
            contents: vec![Content {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let mut last_error: Option<AdvisorError> = None;

        for attempt in 0..MAX_RETRIES {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s
                let delay = Duration::from_millis(1000 * (1 << (attempt - 1)));
                warn!(
                    "Advice call attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .post(&url)
                .header("x-goog-api-key", &self.api_key)
                .json(&request_body)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(AdvisorError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Gemini API returned {}: {}", status, body);
                last_error = Some(AdvisorError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                let message = serde_json::from_str::<GeminiError>(&body)
                    .map(|e| e.error.message)
                    .unwrap_or(body);
                return Err(AdvisorError::Api {
                    status: status.as_u16(),
                    message,
                });
            }

            let parsed: GenerateResponse = response.json().await?;
            debug!("Advice call succeeded on attempt {}", attempt + 1);
            return parsed.text().ok_or(AdvisorError::EmptyContent);
        }

        Err(last_error.unwrap_or(AdvisorError::RateLimited {
            retries: MAX_RETRIES,
        }))
    }
}

#[async_trait]
impl SkillAdvisor for GeminiAdvisor {
    async fn skill_brief(&self, skill: &str) -> Result<String, AdvisorError> {
        self.call(&prompts::skill_brief_prompt(skill)).await
    }
}
