use lvlog_core_types::ParseSeverityError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using LvlogError
pub type Result<T> = std::result::Result<T, LvlogError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable code usable by callers that branch on the
/// failure class rather than on the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LvlogErrorKind {
    /// The sink could not be opened (permissions, missing directory, full disk)
    SinkUnavailable,
    InvalidLevel,
    InvalidFlag,
    ConfigRead,
    ConfigParse,
}

impl LvlogErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            LvlogErrorKind::SinkUnavailable => "ERR_SINK_UNAVAILABLE",
            LvlogErrorKind::InvalidLevel => "ERR_INVALID_LEVEL",
            LvlogErrorKind::InvalidFlag => "ERR_INVALID_FLAG",
            LvlogErrorKind::ConfigRead => "ERR_CONFIG_READ",
            LvlogErrorKind::ConfigParse => "ERR_CONFIG_PARSE",
        }
    }
}

/// Errors surfaced while constructing or configuring a logger.
///
/// Emitting a message never returns one of these: suppressed and written
/// messages are both error-free from the caller's point of view.
#[derive(Error, Debug)]
pub enum LvlogError {
    /// Log file could not be opened
    #[error("Failed to open log file {}: {source}", path.display())]
    SinkOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Severity name not recognised by a strict parser
    #[error(transparent)]
    InvalidLevel(#[from] ParseSeverityError),

    /// Line flag name not recognised
    #[error("Unknown line flag: {flag}")]
    UnknownFlag { flag: String },

    /// Config file could not be read
    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML or has unknown keys
    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

impl LvlogError {
    /// Get the error kind
    pub fn kind(&self) -> LvlogErrorKind {
        match self {
            LvlogError::SinkOpen { .. } => LvlogErrorKind::SinkUnavailable,
            LvlogError::InvalidLevel(_) => LvlogErrorKind::InvalidLevel,
            LvlogError::UnknownFlag { .. } => LvlogErrorKind::InvalidFlag,
            LvlogError::ConfigRead { .. } => LvlogErrorKind::ConfigRead,
            LvlogError::ConfigParse(_) => LvlogErrorKind::ConfigParse,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}
