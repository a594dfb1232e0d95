//! Container detection by file extension.

use lofty::file::FileType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{MetadataError, Result};

/// Audio container handled by the adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioFormat {
    Mp3,
    Flac,
    Wav,
}

impl AudioFormat {
    /// Map a file extension (without the dot, any case) to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "mp3" => Some(AudioFormat::Mp3),
            "flac" => Some(AudioFormat::Flac),
            "wav" | "wave" => Some(AudioFormat::Wav),
            _ => None,
        }
    }

    /// Detect the format of `path` from its extension.
    ///
    /// # Errors
    ///
    /// Returns [`MetadataError::UnsupportedFormat`] when the extension is
    /// missing or not one of `mp3`, `flac`, `wav`, `wave`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        Self::from_extension(ext).ok_or_else(|| {
            MetadataError::UnsupportedFormat(if ext.is_empty() {
                format!("missing file extension: {}", path.display())
            } else {
                format!(".{} (expected mp3, flac, wav or wave)", ext)
            })
        })
    }

    /// Lowercase display name
    pub fn as_str(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Flac => "flac",
            AudioFormat::Wav => "wav",
        }
    }

    /// Canonical file extension, without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Flac => "flac",
            AudioFormat::Wav => "wav",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio/mpeg",
            AudioFormat::Flac => "audio/flac",
            AudioFormat::Wav => "audio/wav",
        }
    }

    /// Whether the stream is lossless (bit depth is meaningful)
    pub fn is_lossless(&self) -> bool {
        !matches!(self, AudioFormat::Mp3)
    }

    pub(crate) fn file_type(&self) -> FileType {
        match self {
            AudioFormat::Mp3 => FileType::Mpeg,
            AudioFormat::Flac => FileType::Flac,
            AudioFormat::Wav => FileType::Wav,
        }
    }
}

impl fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
