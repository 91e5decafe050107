use crate::{NarrationError, NarrationService};
use async_trait::async_trait;
use pantryplan_planner::NarrationRequest;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Connection settings for the generative narration API.
///
/// Passed explicitly at construction; the adapter never reads the
/// environment itself.
#[derive(Debug, Clone, Deserialize)]
pub struct NarrationConfig {
    /// Base URL of the generative-language API.
    pub api_url: String,
    pub api_key: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Total attempts for transient failures, including the first.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base backoff, doubled on every further attempt.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

fn default_model() -> String {
    "gemini-2.5-flash-preview-09-2025".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_max_attempts() -> u32 {
    5
}

fn default_retry_backoff_ms() -> u64 {
    1000
}

/// HTTP adapter for a generative-language narration API.
///
/// Builds a deterministic prompt from the structured request and retries
/// transient transport and 5xx failures with exponential backoff, up to the
/// configured attempt budget. Retry policy lives here and nowhere else;
/// callers treat a returned error as final.
pub struct GenerativeNarrator {
    client: reqwest::Client,
    config: NarrationConfig,
}

impl GenerativeNarrator {
    pub fn new(config: NarrationConfig) -> Result<Self, NarrationError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(GenerativeNarrator { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_url.trim_end_matches('/'),
            self.config.model
        )
    }

    async fn attempt(&self, request: &NarrationRequest) -> Result<String, NarrationError> {
        let payload = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(request),
                }],
            }],
            system_instruction: Content {
                parts: vec![Part {
                    text: SYSTEM_PROMPT.to_string(),
                }],
            },
            generation_config: GenerationConfig { temperature: 0.7 },
        };

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(NarrationError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: GenerateResponse = serde_json::from_str(&body)
            .map_err(|err| NarrationError::MalformedResponse(err.to_string()))?;
        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .filter(|text| !text.is_empty())
            .ok_or_else(|| {
                NarrationError::MalformedResponse("response carries no text content".to_string())
            })
    }
}

#[async_trait]
impl NarrationService for GenerativeNarrator {
    async fn narrate(&self, request: &NarrationRequest) -> Result<String, NarrationError> {
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            match self.attempt(request).await {
                Ok(text) => return Ok(text),
                Err(err) if is_transient(&err) => {
                    if attempts >= self.config.max_attempts {
                        tracing::warn!(attempts, error = %err, "narration gave up");
                        return Err(NarrationError::ExhaustedRetries { attempts });
                    }
                    let backoff =
                        Duration::from_millis(self.config.retry_backoff_ms << (attempts - 1));
                    tracing::warn!(
                        attempts,
                        backoff_ms = backoff.as_millis() as u64,
                        error = %err,
                        "narration attempt failed, retrying"
                    );
                    tokio::time::sleep(backoff).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

fn is_transient(err: &NarrationError) -> bool {
    match err {
        NarrationError::Http(_) => true,
        NarrationError::Status { status, .. } => *status >= 500 || *status == 429,
        _ => false,
    }
}

const SYSTEM_PROMPT: &str = "You are a meal-planning assistant. You receive a menu that is \
already decided, one dish per day, with the ingredients still to buy for each. Describe the \
menu as friendly markdown with one section or table row per day. Never change, reorder, or \
replace the dishes.";

/// Deterministic prompt: one line per day in plan order.
fn build_prompt(request: &NarrationRequest) -> String {
    let mut prompt = format!(
        "Please narrate this {}-day menu.\n\n",
        request.horizon_days
    );
    for day in &request.days {
        let missing = if day.missing_ingredients.is_empty() {
            "nothing to buy".to_string()
        } else {
            format!("to buy: {}", day.missing_ingredients.join(", "))
        };
        prompt.push_str(&format!(
            "Day {}: {} ({} min prep, {} min cook, {}; {}) — {}\n",
            day.day,
            day.title,
            day.prep_minutes,
            day.cook_minutes,
            if day.contains_meat_or_fish {
                "contains meat/fish"
            } else {
                "meatless"
            },
            missing,
            day.source_url,
        ));
    }
    prompt
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "systemInstruction")]
    system_instruction: Content,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}
