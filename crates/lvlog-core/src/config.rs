//! Declarative logger configuration
//!
//! A [`LoggerConfig`] is read from TOML, optionally overridden from the
//! environment, and turned into a [`Logger`]:
//!
//! ```toml
//! level = "info"
//! file = "/var/log/app.log"
//! flags = ["date", "time", "shortfile"]
//! prefix = "app: "
//! caller_depth = 0
//! ```

use crate::errors::{LvlogError, Result};
use crate::flags::LineFlags;
use crate::logger::Logger;
use crate::logging_facility::macros::diag_debug;
use lvlog_core_types::schema::{EVENT_LOADED, OP_LOAD_CONFIG};
use lvlog_core_types::Severity;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding the configured threshold
pub const LEVEL_ENV_VAR: &str = "LVLOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggerConfig {
    /// Strictly parsed severity name
    pub level: String,
    /// Append to this file; stdout (or stderr) when absent
    pub file: Option<PathBuf>,
    /// Use stderr instead of stdout when no file is configured
    pub stderr: bool,
    pub flags: Vec<String>,
    pub prefix: String,
    pub caller_depth: usize,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: Severity::Trace.name().to_string(),
            file: None,
            stderr: false,
            flags: vec!["date".into(), "time".into(), "shortfile".into()],
            prefix: String::new(),
            caller_depth: 0,
        }
    }
}

impl LoggerConfig {
    /// Parse TOML text
    ///
    /// # Errors
    ///
    /// Returns [`LvlogError::ConfigParse`] on malformed TOML or unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    ///
    /// Returns [`LvlogError::ConfigRead`] if the file cannot be read, or
    /// [`LvlogError::ConfigParse`] if its contents are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LvlogError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        diag_debug!(OP_LOAD_CONFIG, EVENT_LOADED, path = %path.display());
        Ok(config)
    }

    /// Apply `LVLOG_LEVEL` when it is set and non-empty
    pub fn apply_env(self) -> Self {
        let value = std::env::var(LEVEL_ENV_VAR).ok();
        self.with_level_override(value.as_deref())
    }

    fn with_level_override(mut self, value: Option<&str>) -> Self {
        if let Some(level) = value.map(str::trim).filter(|v| !v.is_empty()) {
            self.level = level.to_string();
        }
        self
    }

    /// Validated threshold
    ///
    /// # Errors
    ///
    /// Returns [`LvlogError::InvalidLevel`] for unknown names.
    pub fn severity(&self) -> Result<Severity> {
        Ok(self.level.parse()?)
    }

    /// Validated line flags
    ///
    /// # Errors
    ///
    /// Returns [`LvlogError::UnknownFlag`] for unknown names.
    pub fn line_flags(&self) -> Result<LineFlags> {
        LineFlags::from_names(&self.flags)
    }

    /// Build the configured logger
    ///
    /// # Errors
    ///
    /// Returns any validation error, or [`LvlogError::SinkOpen`] when the
    /// configured file cannot be opened.
    pub fn build(&self) -> Result<Logger> {
        let level = self.severity()?;
        let flags = self.line_flags()?;
        let builder = Logger::builder()
            .level(level)
            .flags(flags)
            .prefix(self.prefix.clone())
            .caller_depth(self.caller_depth);

        let builder = match &self.file {
            Some(path) => builder.file(path)?,
            None if self.stderr => builder.sink(std::io::stderr()),
            None => builder.sink(std::io::stdout()),
        };
        Ok(builder.build())
    }
}
