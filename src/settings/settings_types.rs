// Settings type definitions

use serde::{Deserialize, Serialize};

use super::templates::{COT_MERGE_PROMPT, MERGE_PROMPT};

pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-20241022";
pub const DEFAULT_ANTHROPIC_ENDPOINT: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
pub const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Provider used for the generative merge call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    Anthropic,
    OpenAi,
}

impl std::str::FromStr for Provider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "anthropic" => Ok(Provider::Anthropic),
            "openai" => Ok(Provider::OpenAi),
            other => Err(format!("unknown provider '{}'", other)),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::Anthropic => write!(f, "anthropic"),
            Provider::OpenAi => write!(f, "openai"),
        }
    }
}

/// User settings. Missing fields on storage take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub provider: Provider,
    pub anthropic_key: String,
    pub anthropic_model: String,
    pub anthropic_endpoint_url: String,
    pub openai_key: String,
    pub openai_model: String,
    pub openai_endpoint_url: String,
    pub merge_prompt: String,
    pub cot_merge_prompt: String,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            provider: Provider::default(),
            anthropic_key: String::new(),
            anthropic_model: DEFAULT_ANTHROPIC_MODEL.to_string(),
            anthropic_endpoint_url: DEFAULT_ANTHROPIC_ENDPOINT.to_string(),
            openai_key: String::new(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            openai_endpoint_url: DEFAULT_OPENAI_ENDPOINT.to_string(),
            merge_prompt: MERGE_PROMPT.to_string(),
            cot_merge_prompt: COT_MERGE_PROMPT.to_string(),
        }
    }
}

impl Settings {
    pub fn active_key(&self) -> &str {
        match self.provider {
            Provider::Anthropic => &self.anthropic_key,
            Provider::OpenAi => &self.openai_key,
        }
    }

    pub fn active_model(&self) -> &str {
        match self.provider {
            Provider::Anthropic => &self.anthropic_model,
            Provider::OpenAi => &self.openai_model,
        }
    }

    pub fn active_endpoint_url(&self) -> &str {
        match self.provider {
            Provider::Anthropic => &self.anthropic_endpoint_url,
            Provider::OpenAi => &self.openai_endpoint_url,
        }
    }

    pub fn merge_template(&self, chain_of_thought: bool) -> &str {
        if chain_of_thought {
            &self.cot_merge_prompt
        } else {
            &self.merge_prompt
        }
    }
}

/// Hides all but the last four characters of a credential
pub fn mask_key(key: &str) -> String {
    let count = key.chars().count();
    if count == 0 {
        return "(not set)".to_string();
    }
    if count <= 4 {
        return "*".repeat(count);
    }
    let tail: String = key.chars().skip(count - 4).collect();
    format!("{}{}", "*".repeat(count - 4), tail)
}
