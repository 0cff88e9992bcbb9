//! # Configuration
//!
//! Layered loading via [`confique`]: environment variables over an optional
//! TOML file over compiled defaults.
//!
//! | Key | Env | Default |
//! |-----|-----|---------|
//! | `api_url` | `DECKLAB_API_URL` | `https://api.decklab.app/v2` |
//! | `session_url` | `DECKLAB_SESSION_URL` | `https://decklab.app/api/session` |
//! | `data_dir` | — | OS data dir (via `directories`) |
//! | `page_size` | `DECKLAB_PAGE_SIZE` | `20` |

use std::path::PathBuf;

use confique::Config;
use serde::{Deserialize, Serialize};

use crate::error::{DeckError, Result};

/// Configuration for decklab, stored in `decklab.toml`.
#[derive(Config, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DeckConfig {
    /// Base URL of the remote card catalog API.
    #[config(env = "DECKLAB_API_URL", default = "https://api.decklab.app/v2")]
    pub api_url: String,

    /// Same-origin endpoint that issues short-lived session tokens.
    #[config(env = "DECKLAB_SESSION_URL", default = "https://decklab.app/api/session")]
    pub session_url: String,

    /// Directory for the locally persisted deck. When absent, the
    /// OS-appropriate data directory is used.
    pub data_dir: Option<PathBuf>,

    /// Results per page for catalog searches.
    #[config(env = "DECKLAB_PAGE_SIZE", default = 20)]
    pub page_size: u32,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.decklab.app/v2".to_string(),
            session_url: "https://decklab.app/api/session".to_string(),
            data_dir: None,
            page_size: 20,
        }
    }
}

impl DeckConfig {
    /// Load configuration: env vars over `decklab.toml` (if present) over
    /// defaults.
    pub fn load(config_file: Option<&std::path::Path>) -> Result<Self> {
        let mut builder = DeckConfig::builder().env();
        if let Some(path) = config_file {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| DeckError::Config(e.to_string()))
    }

    /// The directory holding the persisted deck, creating no directories
    /// here; the storage backend does that on first write.
    pub fn data_dir(&self) -> PathBuf {
        if let Some(dir) = &self.data_dir {
            return dir.clone();
        }
        directories::ProjectDirs::from("app", "decklab", "decklab")
            .map(|dirs| dirs.data_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
