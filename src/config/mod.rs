//! @acp:module "Configuration"
//! @acp:summary "Tool configuration and read-only prompt store loading"
//! @acp:domain cli
//! @acp:layer config
//!
//! Instruction documents are edited elsewhere (the admin editor) and stored
//! as a `prompts.json` map from channel name to `{ name, prompt }`. This
//! module only reads them.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AdCopyError, Result};
use crate::guidelines::{resolve_constraints, Channel, ConstraintSet};

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".adcopy.config.json";

fn default_prompts_path() -> PathBuf {
    PathBuf::from("data/prompts.json")
}

fn default_use_fallback() -> bool {
    true
}

/// @acp:summary "Main configuration structure"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Prompt store with the per-channel instruction documents
    #[serde(default = "default_prompts_path")]
    pub prompts: PathBuf,

    /// Fill fields the instructions leave open from the built-in tables
    #[serde(default = "default_use_fallback")]
    pub use_fallback: bool,

    /// Channel used when a command does not name one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_channel: Option<Channel>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            prompts: default_prompts_path(),
            use_fallback: default_use_fallback(),
            default_channel: None,
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @acp:summary "Load config if the file exists, defaults otherwise"
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Load the configured prompt store, if the file exists
    pub fn prompt_store(&self) -> Result<Option<PromptStore>> {
        if !self.prompts.exists() {
            tracing::debug!("Prompt store {} not found", self.prompts.display());
            return Ok(None);
        }
        PromptStore::load(&self.prompts).map(Some)
    }

    /// @acp:summary "Constraints for a channel given optional instruction text"
    pub fn constraints_for(&self, channel: Channel, instructions: Option<&str>) -> ConstraintSet {
        if self.use_fallback {
            resolve_constraints(channel, instructions)
        } else {
            instructions
                .map(crate::guidelines::extract_constraints)
                .unwrap_or_default()
        }
    }
}

/// @acp:summary "Instruction document for one channel"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptData {
    /// Display name shown in the editor
    pub name: String,
    /// Full instruction text, including the conditions section
    pub prompt: String,
}

/// @acp:summary "Read-only map of channel name to instruction document"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptStore {
    prompts: HashMap<String, PromptData>,
}

impl PromptStore {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let store: Self = serde_json::from_str(content)?;
        for key in store.prompts.keys() {
            if key.parse::<Channel>().is_err() {
                tracing::warn!("Prompt store entry for unknown channel: {}", key);
            }
        }
        Ok(store)
    }

    pub fn get(&self, channel: Channel) -> Option<&PromptData> {
        self.prompts.get(channel.as_str())
    }

    /// Instruction text for a channel, or `MissingPrompt`
    pub fn prompt(&self, channel: Channel) -> Result<&str> {
        self.get(channel)
            .map(|data| data.prompt.as_str())
            .ok_or_else(|| AdCopyError::MissingPrompt(channel.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guidelines::{fallback_constraints, FieldKind};

    #[test]
    fn test_config_defaults_from_empty_object() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.use_fallback);
    }

    #[test]
    fn test_config_fields() {
        let config: Config = serde_json::from_str(
            r#"{ "prompts": "custom/prompts.json", "useFallback": false, "defaultChannel": "kakao" }"#,
        )
        .unwrap();
        assert_eq!(config.prompts, PathBuf::from("custom/prompts.json"));
        assert!(!config.use_fallback);
        assert_eq!(config.default_channel, Some(Channel::Kakao));
    }

    #[test]
    fn test_load_or_default() {
        let dir = tempfile::TempDir::new().unwrap();
        let missing = dir.path().join(DEFAULT_CONFIG_FILE);
        assert_eq!(Config::load_or_default(&missing).unwrap(), Config::default());

        let present = dir.path().join("present.json");
        std::fs::write(&present, r#"{ "defaultChannel": "social" }"#).unwrap();
        let config = Config::load_or_default(&present).unwrap();
        assert_eq!(config.default_channel, Some(Channel::Social));

        let broken = dir.path().join("broken.json");
        std::fs::write(&broken, "{ nope").unwrap();
        assert!(matches!(
            Config::load_or_default(&broken),
            Err(AdCopyError::Json(_))
        ));
    }

    #[test]
    fn test_constraints_without_fallback() {
        let config = Config {
            use_fallback: false,
            ..Config::default()
        };
        assert!(config.constraints_for(Channel::Naver, None).is_empty());
        assert_eq!(
            Config::default().constraints_for(Channel::Naver, None),
            fallback_constraints(Channel::Naver)
        );
    }

    #[test]
    fn test_prompt_store_lookup() {
        let store = PromptStore::from_json(
            r####"{ "naver": { "name": "Search banner", "prompt": "###조건\n- 제목: 1-10자" } }"####,
        )
        .unwrap();

        let prompt = store.prompt(Channel::Naver).unwrap();
        let set = Config::default().constraints_for(Channel::Naver, Some(prompt));
        assert_eq!(set.max_length(FieldKind::Title), Some(10));
        assert!(matches!(
            store.prompt(Channel::Kakao),
            Err(AdCopyError::MissingPrompt(name)) if name == "kakao"
        ));
    }
}
