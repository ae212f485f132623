//! Store configuration and factory.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use quizforge_core::model::Difficulty;
use quizforge_core::traits::QuestionStore;

use crate::memory::InMemoryStore;
use crate::rest::RestStore;

/// Configuration for a single question store.
///
/// Note: Custom Debug impl masks API keys to prevent accidental exposure in logs.
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StoreConfig {
    Memory,
    Rest { api_key: String, base_url: String },
}

impl std::fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreConfig::Memory => f.debug_struct("Memory").finish(),
            StoreConfig::Rest {
                api_key: _,
                base_url,
            } => f
                .debug_struct("Rest")
                .field("api_key", &"***")
                .field("base_url", base_url)
                .finish(),
        }
    }
}

/// Top-level quizforge configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizforgeConfig {
    /// Store configurations keyed by name.
    #[serde(default)]
    pub stores: HashMap<String, StoreConfig>,
    /// Default store to use.
    #[serde(default = "default_store")]
    pub default_store: String,
    /// Default number of questions per generation request.
    #[serde(default = "default_count")]
    pub default_count: usize,
    /// Default difficulty when a request does not pick one.
    #[serde(default = "default_difficulty")]
    pub default_difficulty: Difficulty,
}

fn default_store() -> String {
    "memory".to_string()
}
fn default_count() -> usize {
    5
}
fn default_difficulty() -> Difficulty {
    Difficulty::Intermediate
}

impl Default for QuizforgeConfig {
    fn default() -> Self {
        Self {
            stores: HashMap::new(),
            default_store: default_store(),
            default_count: default_count(),
            default_difficulty: default_difficulty(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Resolve env vars in a store config.
fn resolve_store_config(config: &StoreConfig) -> StoreConfig {
    match config {
        StoreConfig::Memory => StoreConfig::Memory,
        StoreConfig::Rest { api_key, base_url } => StoreConfig::Rest {
            api_key: resolve_env_vars(api_key),
            base_url: resolve_env_vars(base_url),
        },
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizforge.toml` in the current directory
/// 2. `~/.config/quizforge/config.toml`
///
/// Environment variable overrides: `QUIZFORGE_STORE_KEY` and
/// `QUIZFORGE_STORE_URL` replace the key / base URL of every configured
/// rest store.
pub fn load_config() -> Result<QuizforgeConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizforgeConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("quizforge.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            toml::from_str::<QuizforgeConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizforgeConfig::default(),
    };

    // Apply env var overrides
    if let Ok(key) = std::env::var("QUIZFORGE_STORE_KEY") {
        for store in config.stores.values_mut() {
            if let StoreConfig::Rest { api_key, .. } = store {
                *api_key = key.clone();
            }
        }
    }
    if let Ok(url) = std::env::var("QUIZFORGE_STORE_URL") {
        for store in config.stores.values_mut() {
            if let StoreConfig::Rest { base_url, .. } = store {
                *base_url = url.clone();
            }
        }
    }

    // Resolve env vars in all store configs
    let resolved: HashMap<String, StoreConfig> = config
        .stores
        .iter()
        .map(|(k, v)| (k.clone(), resolve_store_config(v)))
        .collect();
    config.stores = resolved;

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizforge"))
}

/// Create a store instance from its configuration.
pub fn create_store(config: &StoreConfig) -> Result<Box<dyn QuestionStore>> {
    match config {
        StoreConfig::Memory => Ok(Box::new(InMemoryStore::new())),
        StoreConfig::Rest { api_key, base_url } => {
            Ok(Box::new(RestStore::new(api_key, base_url)))
        }
    }
}
