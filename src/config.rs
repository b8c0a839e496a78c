//! Runtime configuration, read from the environment (and an optional `.env` file).
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | `DISPATCH_CHANNEL_BUFFER` | `32` | Mailbox capacity of each actor |
//! | `DISPATCH_SHOPPING_LIST` | unset | JSON file with a recipe response or bare shopping list |

use crate::model::{parse_shopping_list, ShoppingList};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },

    #[error("Cannot read shopping list {}: {}", .path.display(), .source)]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse shopping list {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub channel_buffer: usize,
    pub shopping_list_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
            shopping_list_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok(); // Load .env file if present

        let config = Self::from_lookup(|var| env::var(var).ok())?;
        tracing::info!(channel_buffer = config.channel_buffer, "Configuration loaded");
        Ok(config)
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(get_env: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let channel_buffer = match get_env("DISPATCH_CHANNEL_BUFFER") {
            Some(raw) => {
                let buffer = raw.trim().parse::<usize>().map_err(|e| ConfigError::Invalid {
                    var: "DISPATCH_CHANNEL_BUFFER",
                    reason: e.to_string(),
                })?;
                // tokio::sync::mpsc::channel panics on zero capacity
                if buffer == 0 {
                    return Err(ConfigError::Invalid {
                        var: "DISPATCH_CHANNEL_BUFFER",
                        reason: "must be at least 1".to_string(),
                    });
                }
                buffer
            }
            None => DEFAULT_CHANNEL_BUFFER,
        };

        let shopping_list_path = get_env("DISPATCH_SHOPPING_LIST")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            channel_buffer,
            shopping_list_path,
        })
    }

    /// Reads the configured shopping list file, if any.
    pub fn load_shopping_list(&self) -> Result<Option<ShoppingList>, ConfigError> {
        let Some(path) = &self.shopping_list_path else {
            return Ok(None);
        };
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let list = parse_shopping_list(&json).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        Ok(Some(list))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.load_shopping_list().unwrap().is_none());
    }

    #[test]
    fn reads_values() {
        let config = AppConfig::from_lookup(lookup(&[
            ("DISPATCH_CHANNEL_BUFFER", "8"),
            ("DISPATCH_SHOPPING_LIST", "list.json"),
        ]))
        .unwrap();
        assert_eq!(config.channel_buffer, 8);
        assert_eq!(config.shopping_list_path, Some(PathBuf::from("list.json")));
    }

    #[test]
    fn rejects_bad_buffer() {
        for raw in ["zero", "0", "-3"] {
            let err = AppConfig::from_lookup(lookup(&[("DISPATCH_CHANNEL_BUFFER", raw)])).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid { var: "DISPATCH_CHANNEL_BUFFER", .. }));
        }
    }

    #[test]
    fn missing_list_file_is_reported() {
        let config = AppConfig {
            shopping_list_path: Some(PathBuf::from("/nonexistent/shopping-list.json")),
            ..AppConfig::default()
        };
        assert!(matches!(config.load_shopping_list(), Err(ConfigError::Read { .. })));
    }
}
