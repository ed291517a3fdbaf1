//! Application configuration. Provider credentials, paths.

use serde::Deserialize;

/// Groq's OpenAI-compatible chat-completions endpoint (default provider).
pub const DEFAULT_AI_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default model on the default provider.
pub const DEFAULT_AI_MODEL: &str = "llama-3.3-70b-versatile";

/// Default sampling temperature (low, for consistent plan structure).
pub const DEFAULT_AI_TEMPERATURE: f32 = 0.3;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Provider API key. Read from NUTRIAI_AI_API_KEY. Absence selects
    /// the mock adapter.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// Provider endpoint URL. Read from NUTRIAI_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// Model name. Read from NUTRIAI_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// Sampling temperature. Read from NUTRIAI_AI_TEMPERATURE.
    #[serde(default)]
    pub ai_temperature: Option<f32>,

    /// Data directory (reports live under `<data_dir>/reports`).
    /// Read from NUTRIAI_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("NUTRIAI").try_parsing(true));
        if let Ok(path) = std::env::var("NUTRIAI_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c.build()?.try_deserialize()
    }

    /// Returns the provider API key if configured.
    pub fn ai_api_key(&self) -> Option<String> {
        self.ai_api_key
            .clone()
            .or_else(|| std::env::var("NUTRIAI_AI_API_KEY").ok())
    }

    /// Returns the provider endpoint URL. Defaults to Groq.
    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .or_else(|| std::env::var("NUTRIAI_AI_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_AI_API_URL.to_string())
    }

    /// Returns the model name. Defaults to `DEFAULT_AI_MODEL`.
    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .or_else(|| std::env::var("NUTRIAI_AI_MODEL").ok())
            .unwrap_or_else(|| DEFAULT_AI_MODEL.to_string())
    }

    /// Returns the sampling temperature. Defaults to 0.3.
    pub fn ai_temperature_or_default(&self) -> f32 {
        self.ai_temperature.unwrap_or(DEFAULT_AI_TEMPERATURE)
    }

    /// Returns true if a real provider is configured (API key present).
    pub fn is_ai_configured(&self) -> bool {
        self.ai_api_key().is_some()
    }

    /// Returns the data directory. Defaults to "./data".
    pub fn data_dir_or_default(&self) -> String {
        self.data_dir
            .clone()
            .or_else(|| std::env::var("NUTRIAI_DATA_DIR").ok())
            .unwrap_or_else(|| "./data".to_string())
    }
}
