use std::env;
use std::time::Duration;

use anyhow::{Result, bail};

#[derive(Clone, Debug, PartialEq)]
pub enum LlmProvider {
    Gemini,
    OpenAi,
}

impl LlmProvider {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "gemini" | "google" => Ok(Self::Gemini),
            "openai" => Ok(Self::OpenAi),
            other => bail!("Unknown LLM provider: {}", other),
        }
    }

    fn default_hostname(&self) -> &'static str {
        match self {
            Self::Gemini => "https://generativelanguage.googleapis.com",
            Self::OpenAi => "https://api.openai.com",
        }
    }

    fn default_model(&self) -> &'static str {
        match self {
            Self::Gemini => "gemini-1.5-flash",
            Self::OpenAi => "gpt-4.1-mini",
        }
    }

    fn api_key_var(&self) -> &'static str {
        match self {
            Self::Gemini => "GOOGLE_API_KEY",
            Self::OpenAi => "OPENAI_API_KEY",
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub llm_provider: LlmProvider,
    pub llm_api_hostname: String,
    pub llm_api_key: String,
    pub llm_model: String,
    pub business_profile_path: Option<String>,
    pub static_path: String,
    pub chat_timeout: Duration,
    // Sessions are kept forever when unset
    pub session_idle_ttl: Option<Duration>,
}

impl AppConfig {
    /// Build the config from an arbitrary variable lookup so it can be
    /// exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let llm_provider = match lookup("BIZBOT_LLM_PROVIDER") {
            Some(value) => LlmProvider::parse(&value)?,
            None => LlmProvider::Gemini,
        };
        let llm_api_hostname = lookup("BIZBOT_LLM_HOST")
            .unwrap_or_else(|| llm_provider.default_hostname().to_string());
        let llm_model = lookup("BIZBOT_LLM_MODEL")
            .unwrap_or_else(|| llm_provider.default_model().to_string());
        let llm_api_key = lookup("BIZBOT_LLM_API_KEY")
            .or_else(|| lookup(llm_provider.api_key_var()))
            .unwrap_or_else(|| "thiswontwork".to_string());
        let business_profile_path = lookup("BIZBOT_BUSINESS_PROFILE_PATH");
        let static_path = lookup("BIZBOT_STATIC_PATH").unwrap_or_else(|| "./static".to_string());
        let chat_timeout = match lookup("BIZBOT_CHAT_TIMEOUT_SECS") {
            Some(secs) => Duration::from_secs(parse_secs("BIZBOT_CHAT_TIMEOUT_SECS", &secs)?),
            None => Duration::from_secs(60),
        };
        let session_idle_ttl = match lookup("BIZBOT_SESSION_IDLE_TTL_SECS") {
            Some(secs) => match parse_secs("BIZBOT_SESSION_IDLE_TTL_SECS", &secs)? {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
            None => None,
        };

        Ok(Self {
            llm_provider,
            llm_api_hostname,
            llm_api_key,
            llm_model,
            business_profile_path,
            static_path,
            chat_timeout,
            session_idle_ttl,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }
}

fn parse_secs(name: &str, value: &str) -> Result<u64> {
    match value.trim().parse::<u64>() {
        Ok(secs) => Ok(secs),
        Err(_) => bail!("Invalid value for {}: {}", name, value),
    }
}
