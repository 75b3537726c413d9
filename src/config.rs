use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::ai_provider::{AIConfig, AIProvider};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip)]
    pub data_dir: PathBuf,
    pub feed: FeedConfig,
    pub default_provider: String,
    pub providers: HashMap<String, ProviderConfig>,
    #[serde(default)]
    pub messaging: Option<MessagingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    pub endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub default_model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
}

/// WhatsApp delivery credentials. Numbers are E.164 without the
/// `whatsapp:` prefix, that gets added at send time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessagingConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub from_number: String,
    pub to_number: String,
}

impl MessagingConfig {
    pub fn is_complete(&self) -> bool {
        !self.account_sid.is_empty()
            && !self.auth_token.is_empty()
            && !self.from_number.is_empty()
            && !self.to_number.is_empty()
    }
}

impl Config {
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self> {
        let data_dir = data_dir.unwrap_or_else(|| {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("skywatch")
        });

        // Ensure data directory exists
        std::fs::create_dir_all(&data_dir).context("Failed to create data directory")?;

        let config_path = data_dir.join("config.json");

        if config_path.exists() {
            let config_str =
                std::fs::read_to_string(&config_path).context("Failed to read config.json")?;

            if config_str.trim().is_empty() {
                eprintln!("Config file is empty, recreating defaults");
            } else {
                let mut config: Config =
                    serde_json::from_str(&config_str).context("Failed to parse config.json")?;
                config.data_dir = data_dir;
                config.apply_env_overrides();
                return Ok(config);
            }
        }

        let mut config = Self::default_config(data_dir);
        config.save()?;
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = self.data_dir.join("config.json");
        let json_str = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&config_path, json_str).context("Failed to write config.json")?;
        Ok(())
    }

    /// Fill empty secrets from the environment so the config file never has
    /// to hold credentials.
    fn apply_env_overrides(&mut self) {
        if self.feed.api_key.as_ref().map_or(true, |key| key.is_empty()) {
            self.feed.api_key = std::env::var("SKYWATCH_FEED_API_KEY").ok();
        }

        if let Some(openai_config) = self.providers.get_mut("openai") {
            if openai_config.api_key.as_ref().map_or(true, |key| key.is_empty()) {
                openai_config.api_key = std::env::var("OPENAI_API_KEY").ok();
            }
        }

        if let Some(messaging) = self.messaging.as_mut() {
            if messaging.account_sid.is_empty() {
                if let Ok(sid) = std::env::var("TWILIO_ACCOUNT_SID") {
                    messaging.account_sid = sid;
                }
            }
            if messaging.auth_token.is_empty() {
                if let Ok(token) = std::env::var("TWILIO_AUTH_TOKEN") {
                    messaging.auth_token = token;
                }
            }
        }
    }

    fn default_config(data_dir: PathBuf) -> Self {
        let mut providers = HashMap::new();

        providers.insert(
            "ollama".to_string(),
            ProviderConfig {
                default_model: "qwen2.5".to_string(),
                host: Some("http://localhost:11434".to_string()),
                api_key: None,
                system_prompt: None,
            },
        );

        providers.insert(
            "openai".to_string(),
            ProviderConfig {
                default_model: "gpt-4o-mini".to_string(),
                host: None,
                api_key: std::env::var("OPENAI_API_KEY").ok(),
                system_prompt: None,
            },
        );

        Config {
            data_dir,
            feed: FeedConfig {
                endpoint: "https://fr24api.flightradar24.com/api/live/flight-positions/full"
                    .to_string(),
                api_key: None,
            },
            default_provider: "openai".to_string(),
            providers,
            messaging: None,
        }
    }

    pub fn get_provider(&self, provider_name: &str) -> Option<&ProviderConfig> {
        self.providers.get(provider_name)
    }

    pub fn get_ai_config(&self, provider: Option<String>, model: Option<String>) -> Result<AIConfig> {
        let provider_name = provider.as_deref().unwrap_or(&self.default_provider);
        let provider_config = self
            .get_provider(provider_name)
            .ok_or_else(|| anyhow::anyhow!("Unknown provider: {}", provider_name))?;

        let ai_provider: AIProvider = provider_name.parse()?;
        let model_name = model.unwrap_or_else(|| provider_config.default_model.clone());

        Ok(AIConfig {
            provider: ai_provider,
            model: model_name,
            api_key: provider_config.api_key.clone(),
            base_url: provider_config.host.clone(),
            max_tokens: Some(256),
            temperature: Some(0.7),
        })
    }
}
