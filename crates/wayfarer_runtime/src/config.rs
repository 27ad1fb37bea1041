//! Console configuration.
//!
//! Loaded from a TOML file such as:
//!
//! ```toml
//! prompt = "match> "
//! actor = 1
//! log_filter = "wayfarer_parser=debug"
//! history_file = ".wayfarer_history"
//! threshold = 60
//! ```
//!
//! Every key is optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wayfarer_foundation::{Error, ErrorKind, ObjectRef, Result};
use wayfarer_storage::MATCH_THRESHOLD_OPTION;

use crate::serialize::io_error;

/// Configuration for the interactive console.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Primary prompt.
    pub prompt: String,

    /// Object the console acts as; `None` picks one from the world.
    pub actor: Option<ObjectRef>,

    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,

    /// Where line history is kept between runs.
    pub history_file: Option<PathBuf>,

    /// Match threshold written into the world's options on start.
    pub threshold: Option<i64>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: "wayfarer> ".to_string(),
            actor: None,
            log_filter: "warn".to_string(),
            history_file: None,
            threshold: None,
        }
    }
}

impl ConsoleConfig {
    /// Parses a configuration from TOML text and validates it.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, names an unknown key,
    /// or fails [`validate`](Self::validate).
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| Error::new(ErrorKind::Config(e.to_string())))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| io_error("read", path, &e))?;
        Self::from_toml_str(&text).map_err(|e| e.with_context(path.display().to_string()))
    }

    /// Checks values that TOML alone cannot constrain.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold lies outside 0–100.
    pub fn validate(&self) -> Result<()> {
        if let Some(threshold) = self.threshold {
            if !(0..=100).contains(&threshold) {
                return Err(Error::invalid_option(
                    MATCH_THRESHOLD_OPTION,
                    format!("{threshold} is outside 0..=100"),
                ));
            }
        }
        Ok(())
    }

    /// Builder method to set the prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Builder method to set the acting object.
    #[must_use]
    pub fn with_actor(mut self, actor: ObjectRef) -> Self {
        self.actor = Some(actor);
        self
    }

    /// Builder method to set the log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Builder method to set the history file.
    #[must_use]
    pub fn with_history_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_file = Some(path.into());
        self
    }

    /// Builder method to set the match threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: i64) -> Self {
        self.threshold = Some(threshold);
        self
    }
}
