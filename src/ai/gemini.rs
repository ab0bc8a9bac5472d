// Gemini generateContent implementation.
//
// Calls the Generative Language REST API and parses the model's free-text
// reply into an AiVerdict. The reply format is requested in the prompt but
// never guaranteed — parsing is best-effort (see parse.rs).
//
// API docs: https://ai.google.dev/api/generate-content

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::parse;
use super::traits::{AiVerdict, VerdictProducer};

pub const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini-backed verdict producer.
pub struct GeminiProducer {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
}

impl GeminiProducer {
    pub fn new(api_url: String, api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_url,
            api_key,
            model,
        }
    }
}

/// The fixed analysis prompt. Asks for the exact heading format parse.rs
/// expects.
fn build_prompt(message: &str) -> String {
    format!(
        "Analyze the following message for potential financial scams. Provide your \
         analysis in EXACTLY this format:\n\
         \n\
         Explanation\n\
         [Your explanation here. Explain why this message is or isn't a scam. Mention \
         specific red flags or safe indicators. Keep it concise but informative.]\n\
         \n\
         Safety Tips\n\
         [Provide 4-5 actionable safety tips. Each tip should be on a new line starting \
         with \"- \". Make them practical and specific for Indian students.]\n\
         \n\
         The message to analyze: \"{message}\"\n\
         \n\
         Important: Follow the format exactly as shown above with \"Explanation\" and \
         \"Safety Tips\" headings."
    )
}

#[async_trait]
impl VerdictProducer for GeminiProducer {
    async fn check(&self, message: &str) -> Result<AiVerdict> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.api_url, self.model, self.api_key
        );

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(message),
                }],
            }],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .context("Failed to call Gemini API")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Gemini API returned {}: {}", status, body);
        }

        let result: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse Gemini API response")?;

        let text = result
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .context("Gemini API returned no candidates")?;

        debug!(
            reply_chars = text.chars().count(),
            model = %self.model,
            "Received Gemini reply"
        );

        Ok(parse::verdict_from_text(&text))
    }
}

// --- Gemini API request/response types ---

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
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
