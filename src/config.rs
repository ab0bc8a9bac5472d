use std::env;

use anyhow::Result;

use crate::ai::gemini;
use crate::engine::Registry;

/// Central configuration loaded from environment variables.
///
/// All secrets come from env vars (never hardcoded). The .env file
/// is loaded automatically at startup via dotenvy.
pub struct Config {
    /// Gemini API key — only needed for `ai-check` and the web AI endpoint.
    pub gemini_api_key: String,
    /// Generative Language API base URL (defaults to the public endpoint).
    pub gemini_api_url: String,
    /// Model name used for generateContent calls.
    pub gemini_model: String,
    /// Optional path to a custom rules JSON file (KAVACH_RULES env var).
    pub rules_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables. Everything has a
    /// default except the API key, which only `require_gemini` demands.
    pub fn load() -> Result<Self> {
        Ok(Self {
            gemini_api_key: env::var("GEMINI_API_KEY").unwrap_or_default(),
            gemini_api_url: env::var("GEMINI_API_URL")
                .unwrap_or_else(|_| gemini::DEFAULT_API_URL.to_string()),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| gemini::DEFAULT_MODEL.to_string()),
            rules_path: env::var("KAVACH_RULES").ok(),
        })
    }

    /// Check that the Gemini API key is configured.
    /// Call this before any operation that needs the AI producer.
    pub fn require_gemini(&self) -> Result<()> {
        if self.gemini_api_key.is_empty() {
            anyhow::bail!(
                "GEMINI_API_KEY not set. Add it to your .env file.\n\
                 See .env.example for the required variables."
            );
        }
        Ok(())
    }

    /// Resolve the rule registry: an explicit `--rules` path wins, then
    /// KAVACH_RULES, then the compiled-in tables.
    pub fn load_registry(&self, rules_override: Option<&str>) -> Result<Registry> {
        match rules_override.or(self.rules_path.as_deref()) {
            Some(path) => Registry::from_json_file(path),
            None => Ok(Registry::builtin()),
        }
    }
}
