//! Configuration for lineage-core

use serde::{Deserialize, Serialize};

/// Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Chain assigned to content when no override names one
    #[serde(default = "default_chain")]
    pub default_chain: String,

    /// Prefix for generated content ids
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,

    /// Event bus channel capacity
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,

    /// Maximum accepted title length
    #[serde(default = "default_max_title_len")]
    pub max_title_len: usize,

    /// Maximum accepted description length
    #[serde(default = "default_max_description_len")]
    pub max_description_len: usize,
}

fn default_chain() -> String {
    "ethereum".to_string()
}

fn default_id_prefix() -> String {
    "content-".to_string()
}

fn default_event_capacity() -> usize {
    1024
}

fn default_max_title_len() -> usize {
    500
}

fn default_max_description_len() -> usize {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_chain: default_chain(),
            id_prefix: default_id_prefix(),
            event_capacity: default_event_capacity(),
            max_title_len: default_max_title_len(),
            max_description_len: default_max_description_len(),
        }
    }
}
