//! # Adapter Configuration
//!
//! Per-handle settings passed to [`AudioHandle::open_with_config`].
//!
//! Nothing here is process-wide: two handles may log to different sinks or
//! persist different ID3v2 versions.
//!
//! ```ignore
//! use bridge_traits::logging::ConsoleLogger;
//! use core_metadata::config::{AdapterConfig, Id3Version};
//! use std::sync::Arc;
//!
//! let config = AdapterConfig::default()
//!     .with_logger_sink(Arc::new(ConsoleLogger::default()))
//!     .with_id3_version(Id3Version::V23);
//! ```
//!
//! [`AudioHandle::open_with_config`]: crate::handler::AudioHandle::open_with_config

use bridge_traits::logging::LoggerSink;
use lofty::config::{ParseOptions, ParsingMode};
use std::fmt;
use std::sync::Arc;

use crate::models::DEFAULT_LYRICS_LANGUAGE;

/// ID3v2 revision written when persisting MP3 and WAV `id3 ` tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Id3Version {
    V23,
    #[default]
    V24,
}

impl From<Id3Version> for id3::Version {
    fn from(version: Id3Version) -> Self {
        match version {
            Id3Version::V23 => id3::Version::Id3v23,
            Id3Version::V24 => id3::Version::Id3v24,
        }
    }
}

/// Adapter configuration
#[derive(Clone)]
pub struct AdapterConfig {
    /// Optional sink receiving the handle's log events
    pub logger_sink: Option<Arc<dyn LoggerSink>>,
    /// Language reported for Vorbis lyrics and written on new `COMM` frames
    pub default_language: String,
    /// ID3v2 revision used on write
    pub id3_version: Id3Version,
    /// How strictly lofty treats malformed containers
    pub parsing_mode: ParsingMode,
    /// Log file basenames instead of full paths
    pub redact_paths: bool,
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            logger_sink: None,
            default_language: DEFAULT_LYRICS_LANGUAGE.to_string(),
            id3_version: Id3Version::default(),
            parsing_mode: ParsingMode::BestAttempt,
            redact_paths: true,
        }
    }
}

impl fmt::Debug for AdapterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterConfig")
            .field("logger_sink", &self.logger_sink.is_some())
            .field("default_language", &self.default_language)
            .field("id3_version", &self.id3_version)
            .field("parsing_mode", &self.parsing_mode)
            .field("redact_paths", &self.redact_paths)
            .finish()
    }
}

impl AdapterConfig {
    /// Set logger sink for host integration
    pub fn with_logger_sink(mut self, sink: Arc<dyn LoggerSink>) -> Self {
        self.logger_sink = Some(sink);
        self
    }

    /// Set the language reported for Vorbis lyrics
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = language.into();
        self
    }

    /// Set the ID3v2 revision used on write
    pub fn with_id3_version(mut self, version: Id3Version) -> Self {
        self.id3_version = version;
        self
    }

    /// Set lofty's parsing mode
    pub fn with_parsing_mode(mut self, mode: ParsingMode) -> Self {
        self.parsing_mode = mode;
        self
    }

    /// Enable or disable path redaction in log output
    pub fn with_path_redaction(mut self, redact: bool) -> Self {
        self.redact_paths = redact;
        self
    }

    pub(crate) fn parse_options(&self) -> ParseOptions {
        ParseOptions::new().parsing_mode(self.parsing_mode)
    }
}
