//! Normalized metadata records shared by every container format.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::format::AudioFormat;

/// ISO 639-2 code used when lyrics carry no language of their own
pub const DEFAULT_LYRICS_LANGUAGE: &str = "eng";

/// Descriptive song tags
///
/// Every field is independently optional. `None` means the source file does
/// not carry the tag; on write it means "leave the file's value alone".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongInfo {
    /// Track title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Track artist
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<String>,
    /// Album name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,
    /// Genre, verbatim (no ID3v1 genre index translation)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Album artist (for compilations)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_artist: Option<String>,
    /// Release date or year, verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Track number, verbatim (`"3"` or `"3/12"`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_number: Option<String>,
    /// Disc number, verbatim (`"1"` or `"1/2"`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disc_number: Option<String>,
    /// Free-form comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl SongInfo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_album_artist(mut self, album_artist: impl Into<String>) -> Self {
        self.album_artist = Some(album_artist.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_track_number(mut self, track_number: impl Into<String>) -> Self {
        self.track_number = Some(track_number.into());
        self
    }

    pub fn with_disc_number(mut self, disc_number: impl Into<String>) -> Self {
        self.disc_number = Some(disc_number.into());
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// True when no field is present
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Unsynchronized (untimed) lyrics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lyrics {
    /// Lyric text
    pub text: String,
    /// ISO 639-2 language code
    pub language: String,
}

impl Lyrics {
    /// Lyrics in the default language (`eng`)
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: DEFAULT_LYRICS_LANGUAGE.to_string(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

impl From<&str> for Lyrics {
    fn from(text: &str) -> Self {
        Lyrics::new(text)
    }
}

impl From<String> for Lyrics {
    fn from(text: String) -> Self {
        Lyrics::new(text)
    }
}

/// Stream properties reported by the container parser. Read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TechnicalInfo {
    /// Duration in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    /// Sample rate in Hz
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_rate: Option<u32>,
    /// Audio bitrate in bits per second
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bitrate: Option<u32>,
    /// Bits per sample (lossless formats only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bit_depth: Option<u8>,
    /// Number of audio channels
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<u8>,
}

/// File-level summary: path, container, size and stream properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioInfo {
    /// Resolved path of the file
    pub file_path: PathBuf,
    /// Container format
    pub format: AudioFormat,
    /// File size in bytes
    pub file_size: u64,
    /// Stream properties the parser exposed for this file
    #[serde(flatten)]
    pub technical: TechnicalInfo,
}

/// Everything the adapter knows about a file, read in one go
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioMetadata {
    pub song: SongInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lyrics: Option<Lyrics>,
    pub technical: TechnicalInfo,
}
