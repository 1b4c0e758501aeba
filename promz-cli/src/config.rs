use confy::ConfyError;
use serde::{Deserialize, Serialize};

pub const PROMZ_CLI: &str = "promz";

/// Defaults used when creating new documents.
#[derive(Debug, Serialize, Deserialize)]
pub struct PromzCliConfig {
    pub default_author: String,
    pub default_version: String,
}

impl Default for PromzCliConfig {
    fn default() -> Self {
        let default_author = std::env::var("USER")
            .or_else(|_| std::env::var("USERNAME"))
            .unwrap_or_default();

        Self {
            default_author,
            default_version: String::from("1.0"),
        }
    }
}

pub fn load_config() -> Result<PromzCliConfig, ConfyError> {
    confy::load(PROMZ_CLI, None)
}
