//! Audio Tag Handle
//!
//! [`AudioHandle`] binds one audio file to its parsed tags and exposes a
//! normalized read/write interface over them.
//!
//! ## Overview
//!
//! - The container is detected from the extension when the handle is opened.
//! - Tags are parsed on the first read or write and cached for the lifetime
//!   of the handle.
//! - Reads are permissive: missing tags are `None`, never errors.
//! - Writes merge: only the fields present in the input are touched, and the
//!   file is rewritten immediately.
//!
//! Container parsing, Vorbis comments, RIFF INFO and stream properties go
//! through `lofty`; ID3v2 frames (MP3 tags and the WAV `id3 ` chunk) go through
//! the `id3` crate, which keeps frame-level details such as the `USLT`
//! language.
//!
//! ## Usage
//!
//! ```ignore
//! use core_metadata::{AudioHandle, SongInfo};
//!
//! let mut handle = AudioHandle::open("song.flac")?;
//! handle.set_song_info(&SongInfo::new().with_title("New Title"))?;
//! handle.set_lyrics("first line\nsecond line")?;
//!
//! let info = handle.get_song_info()?;
//! println!("Title: {}", info.title.unwrap_or_default());
//! ```

use bridge_traits::logging::{LogEntry, LogLevel};
use core_runtime::logging::{forward_to_sink, strip_path};
use id3::frame::{Comment, Content, Lyrics as Id3Lyrics};
use id3::TagLike;
use lofty::config::WriteOptions;
use lofty::file::{AudioFile, TaggedFile, TaggedFileExt};
use lofty::probe::Probe;
use lofty::tag::{Tag, TagExt, TagType};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, instrument, trace, warn};

use crate::config::AdapterConfig;
use crate::error::{MetadataError, Result};
use crate::format::AudioFormat;
use crate::mapping::{
    is_vorbis_lyrics_key, vorbis_lyrics_item_key, SongField, ID3_COMMENT_FRAME, ID3_LYRICS_FRAME,
    VORBIS_LYRICS_KEYS,
};
use crate::models::{AudioInfo, AudioMetadata, Lyrics, SongInfo, TechnicalInfo};

const LOG_TARGET: &str = "core_metadata";

/// Tags parsed from one file.
struct ParsedTags {
    /// lofty's view: container, Vorbis comments / RIFF INFO, stream properties
    file: TaggedFile,
    /// ID3v2 tag of an MP3 or of a WAV `id3 ` chunk; `None` when absent
    id3: Option<id3::Tag>,
}

impl ParsedTags {
    fn read(path: &Path, format: AudioFormat, config: &AdapterConfig) -> Result<Self> {
        trace!(format = %format, "Parsing tags");

        let file = Probe::open(path)?
            .options(config.parse_options())
            .set_file_type(format.file_type())
            .read()?;

        // id3 sniffs the container: a leading tag for MP3, the `id3 ` chunk for WAV.
        let id3 = match format {
            AudioFormat::Mp3 | AudioFormat::Wav => optional_id3(id3::Tag::read_from_path(path))?,
            AudioFormat::Flac => None,
        };

        debug!(
            format = %format,
            tag_count = file.tags().len(),
            has_id3 = id3.is_some(),
            "Tags parsed"
        );

        Ok(Self { file, id3 })
    }
}

/// A missing ID3 header is an untagged file, not a failure.
fn optional_id3(result: id3::Result<id3::Tag>) -> Result<Option<id3::Tag>> {
    match result {
        Ok(tag) => Ok(Some(tag)),
        Err(err) if matches!(err.kind, id3::ErrorKind::NoTag) => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn load<'a>(
    slot: &'a mut Option<ParsedTags>,
    path: &Path,
    format: AudioFormat,
    config: &AdapterConfig,
) -> Result<&'a mut ParsedTags> {
    let parsed = match slot.take() {
        Some(parsed) => parsed,
        None => ParsedTags::read(path, format, config)?,
    };
    Ok(slot.insert(parsed))
}

/// Live binding between an audio file and its tags
///
/// All access dispatches on the [`AudioFormat`] fixed at construction. The
/// handle is the only writer it knows of: two handles racing writes on the
/// same file are not coordinated.
pub struct AudioHandle {
    path: PathBuf,
    format: AudioFormat,
    config: AdapterConfig,
    /// `None` until the first read or write
    tags: Option<ParsedTags>,
}

impl AudioHandle {
    /// Open `path` with the default [`AdapterConfig`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(path, AdapterConfig::default())
    }

    /// Open `path`.
    ///
    /// Tags are not parsed here; the first read or write does that.
    ///
    /// # Errors
    ///
    /// - [`MetadataError::FileNotFound`] if `path` is not an existing file
    /// - [`MetadataError::UnsupportedFormat`] if the extension is not `mp3`,
    ///   `flac`, `wav` or `wave`
    pub fn open_with_config(path: impl AsRef<Path>, config: AdapterConfig) -> Result<Self> {
        let path = path.as_ref();

        let resolved = fs::canonicalize(path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => MetadataError::FileNotFound(path.to_path_buf()),
            _ => MetadataError::Io(err),
        })?;
        if !resolved.is_file() {
            return Err(MetadataError::FileNotFound(path.to_path_buf()));
        }

        // The name the caller used decides the format, not a symlink target.
        let format = AudioFormat::from_path(path)?;

        let handle = Self {
            path: resolved,
            format,
            config,
            tags: None,
        };
        handle.log(LogLevel::Debug, "Opened audio file");

        Ok(handle)
    }

    /// Resolved path of the file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn format(&self) -> AudioFormat {
        self.format
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Whether tags have been parsed yet
    pub fn is_loaded(&self) -> bool {
        self.tags.is_some()
    }

    /// Drop the cached tags; the next access parses the file again.
    pub fn reload(&mut self) {
        self.tags = None;
    }

    // =========================================================================
    // Song info
    // =========================================================================

    /// Read title, artist, album, genre and the other [`SongInfo`] fields.
    ///
    /// Never fails for a well-formed file: absent tags give an empty record.
    #[instrument(level = "debug", skip_all, fields(format = %self.format))]
    pub fn get_song_info(&mut self) -> Result<SongInfo> {
        let format = self.format;
        let result = self.parsed().map(|parsed| match format {
            AudioFormat::Mp3 => (id3_song_info(parsed.id3.as_ref()), parsed.id3.is_none()),
            AudioFormat::Flac => {
                let tag = parsed.file.tag(TagType::VorbisComments);
                (lofty_song_info(tag, format), tag.is_none())
            }
            AudioFormat::Wav => {
                let tag = parsed.file.tag(TagType::RiffInfo);
                (lofty_song_info(tag, format), tag.is_none())
            }
        });

        match result {
            Ok((info, untagged)) => {
                if untagged {
                    self.log(LogLevel::Debug, "No tag block found; returning empty song info");
                }
                Ok(info)
            }
            Err(err) => Err(self.log_failure("read song info", err)),
        }
    }

    /// Write every present field of `info`; absent fields keep their current
    /// value in the file.
    ///
    /// MP3 files without an ID3v2 tag get a fresh one. Fields RIFF INFO cannot
    /// represent are skipped for WAV. The write is not transactional.
    #[instrument(level = "debug", skip_all, fields(format = %self.format))]
    pub fn set_song_info(&mut self, info: &SongInfo) -> Result<()> {
        if info.is_empty() {
            self.log(LogLevel::Debug, "Empty song info; nothing to write");
            return Ok(());
        }

        match self.write_song_info(info) {
            Ok(written) => {
                self.log(
                    LogLevel::Info,
                    format!("Song info written ({})", written.join(", ")),
                );
                Ok(())
            }
            Err(err) => {
                // The cached tags may hold changes that never reached the file.
                self.tags = None;
                Err(self.log_failure("write song info", err))
            }
        }
    }

    fn write_song_info(&mut self, info: &SongInfo) -> Result<Vec<&'static str>> {
        let parsed = load(&mut self.tags, &self.path, self.format, &self.config)?;
        let mut written = Vec::new();

        match self.format {
            AudioFormat::Mp3 => {
                let tag = parsed.id3.get_or_insert_with(id3::Tag::new);

                for field in SongField::ALL {
                    let Some(value) = field.get(info) else {
                        continue;
                    };
                    match field {
                        SongField::Comment => {
                            replace_comment(tag, value, &self.config.default_language)
                        }
                        _ => tag.set_text(field.id3_frame(), value),
                    }
                    written.push(field.name());
                }

                persist_id3(tag, &self.path, &self.config)?;
            }
            AudioFormat::Flac | AudioFormat::Wav => {
                let tag_type = lofty_tag_type(self.format);
                let tag = tag_or_insert(&mut parsed.file, tag_type)?;

                for field in SongField::ALL {
                    let Some(value) = field.get(info) else {
                        continue;
                    };
                    if field.native_key(self.format).is_none()
                        || !tag.insert_text(field.item_key(), value.to_string())
                    {
                        debug!(field = field.name(), "Field not representable; skipped");
                        continue;
                    }
                    written.push(field.name());
                }

                tag.save_to_path(&self.path, WriteOptions::default())?;

                if self.format == AudioFormat::Flac {
                    parsed.file = reread_flac(&self.path, &self.config)?;
                }
            }
        }

        Ok(written)
    }

    // =========================================================================
    // Lyrics
    // =========================================================================

    /// Read unsynchronized lyrics.
    ///
    /// - MP3 / WAV: first `USLT` frame, with its language
    /// - FLAC: `LYRICS`, else `DESCRIPTION`, in the configured default language
    ///
    /// Returns `Ok(None)` when no lyrics are stored.
    #[instrument(level = "debug", skip_all, fields(format = %self.format))]
    pub fn get_lyrics(&mut self) -> Result<Option<Lyrics>> {
        let format = self.format;
        let default_language = self.config.default_language.clone();

        let result = self.parsed().map(|parsed| match format {
            AudioFormat::Mp3 | AudioFormat::Wav => parsed.id3.as_ref().and_then(id3_lyrics),
            AudioFormat::Flac => parsed
                .file
                .tag(TagType::VorbisComments)
                .and_then(vorbis_lyrics)
                .map(|text| Lyrics::new(text).with_language(default_language)),
        });

        result.map_err(|err| self.log_failure("read lyrics", err))
    }

    /// Replace the file's lyrics.
    ///
    /// Accepts bare text (language `eng`) or a [`Lyrics`] value. For MP3 and
    /// WAV every existing `USLT` frame is removed and exactly one is written;
    /// FLAC overwrites `LYRICS`.
    #[instrument(level = "debug", skip_all, fields(format = %self.format))]
    pub fn set_lyrics(&mut self, lyrics: impl Into<Lyrics>) -> Result<()> {
        let lyrics = lyrics.into();

        match self.write_lyrics(&lyrics) {
            Ok(()) => {
                let message = format!(
                    "Lyrics written ({} chars, {})",
                    lyrics.text.chars().count(),
                    lyrics.language
                );
                self.log(LogLevel::Info, message);
                Ok(())
            }
            Err(err) => {
                self.tags = None;
                Err(self.log_failure("write lyrics", err))
            }
        }
    }

    fn write_lyrics(&mut self, lyrics: &Lyrics) -> Result<()> {
        let parsed = load(&mut self.tags, &self.path, self.format, &self.config)?;

        match self.format {
            AudioFormat::Mp3 | AudioFormat::Wav => {
                let tag = parsed.id3.get_or_insert_with(id3::Tag::new);

                let removed = tag.remove(ID3_LYRICS_FRAME);
                trace!(removed = removed.len(), "Removed existing lyrics frames");

                tag.add_frame(Id3Lyrics {
                    lang: lyrics.language.clone(),
                    description: String::new(),
                    text: lyrics.text.clone(),
                });

                persist_id3(tag, &self.path, &self.config)?;
            }
            AudioFormat::Flac => {
                if lyrics.language != self.config.default_language {
                    debug!(
                        language = %lyrics.language,
                        "Vorbis comments carry no lyrics language; dropping it"
                    );
                }

                let tag = tag_or_insert(&mut parsed.file, TagType::VorbisComments)?;
                let key = vorbis_lyrics_item_key(VORBIS_LYRICS_KEYS[0]);
                if !tag.insert_text(key, lyrics.text.clone()) {
                    return Err(MetadataError::TagLibrary(
                        "Vorbis comments rejected the LYRICS field".to_string(),
                    ));
                }
                tag.save_to_path(&self.path, WriteOptions::default())?;

                parsed.file = reread_flac(&self.path, &self.config)?;
            }
        }

        Ok(())
    }

    // =========================================================================
    // Technical info
    // =========================================================================

    /// Stream properties: duration, sample rate, bitrate, bit depth, channels.
    ///
    /// Properties the parser does not expose for this file are `None`.
    #[instrument(level = "debug", skip_all, fields(format = %self.format))]
    pub fn get_technical_info(&mut self) -> Result<TechnicalInfo> {
        let format = self.format;
        let result = self
            .parsed()
            .map(|parsed| technical_info(&parsed.file, format));

        result.map_err(|err| self.log_failure("read stream properties", err))
    }

    /// Path, format and size of the file plus whatever stream properties are
    /// available.
    #[instrument(level = "debug", skip_all, fields(format = %self.format))]
    pub fn get_audio_info(&mut self) -> Result<AudioInfo> {
        let file_size = fs::metadata(&self.path)?.len();
        let technical = self.get_technical_info()?;

        Ok(AudioInfo {
            file_path: self.path.clone(),
            format: self.format,
            file_size,
            technical,
        })
    }

    /// Song info, lyrics and stream properties in one call.
    pub fn get_metadata(&mut self) -> Result<AudioMetadata> {
        Ok(AudioMetadata {
            song: self.get_song_info()?,
            lyrics: self.get_lyrics()?,
            technical: self.get_technical_info()?,
        })
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn parsed(&mut self) -> Result<&mut ParsedTags> {
        load(&mut self.tags, &self.path, self.format, &self.config)
    }

    fn display_path(&self) -> String {
        let full = self.path.to_string_lossy();
        if self.config.redact_paths {
            strip_path(&full).to_string()
        } else {
            full.into_owned()
        }
    }

    fn log_failure(&self, operation: &str, err: MetadataError) -> MetadataError {
        self.log(LogLevel::Error, format!("Failed to {}: {}", operation, err));
        err
    }

    /// Emit a `tracing` event and mirror it to the configured sink.
    fn log(&self, level: LogLevel, message: impl Into<String>) {
        let message = message.into();
        let file = self.display_path();
        let format = self.format.as_str();

        match level {
            LogLevel::Trace => trace!(file = %file, format, "{}", message),
            LogLevel::Debug => debug!(file = %file, format, "{}", message),
            LogLevel::Info => info!(file = %file, format, "{}", message),
            LogLevel::Warn => warn!(file = %file, format, "{}", message),
            LogLevel::Error => error!(file = %file, format, "{}", message),
        }

        if let Some(sink) = self.config.logger_sink.as_deref() {
            let entry = LogEntry::new(level, LOG_TARGET, message)
                .with_field("file", file)
                .with_field("format", format);
            forward_to_sink(sink, entry);
        }
    }
}

// =============================================================================
// ID3v2 (MP3, WAV `id3 ` chunk)
// =============================================================================

fn id3_song_info(tag: Option<&id3::Tag>) -> SongInfo {
    let mut info = SongInfo::default();
    let Some(tag) = tag else {
        return info;
    };

    for field in SongField::ALL {
        let value = match field {
            SongField::Comment => first_comment(tag),
            _ => text_frame(tag, field.id3_frame()),
        };
        field.set(&mut info, value);
    }

    info
}

/// First value of a text frame. ID3v2.4 separates multiple values with NUL.
fn text_frame(tag: &id3::Tag, id: &str) -> Option<String> {
    let frame = tag.get(id)?;
    match frame.content() {
        Content::Text(s) => s.split('\0').next().map(str::to_owned),
        _ => None,
    }
}

fn first_comment(tag: &id3::Tag) -> Option<String> {
    tag.comments().next().map(|c| c.text.clone())
}

fn id3_lyrics(tag: &id3::Tag) -> Option<Lyrics> {
    tag.lyrics()
        .next()
        .map(|l| Lyrics::new(l.text.clone()).with_language(l.lang.clone()))
}

/// Replace all `COMM` frames with a single one.
fn replace_comment(tag: &mut id3::Tag, text: &str, language: &str) {
    tag.remove(ID3_COMMENT_FRAME);
    tag.add_frame(Comment {
        lang: language.to_string(),
        description: String::new(),
        text: text.to_string(),
    });
}

fn persist_id3(tag: &id3::Tag, path: &Path, config: &AdapterConfig) -> Result<()> {
    tag.write_to_path(path, id3::Version::from(config.id3_version))?;
    Ok(())
}

// =============================================================================
// lofty generic tags (Vorbis comments, RIFF INFO)
// =============================================================================

fn lofty_tag_type(format: AudioFormat) -> TagType {
    match format {
        AudioFormat::Mp3 => TagType::Id3v2,
        AudioFormat::Flac => TagType::VorbisComments,
        AudioFormat::Wav => TagType::RiffInfo,
    }
}

fn lofty_song_info(tag: Option<&Tag>, format: AudioFormat) -> SongInfo {
    let mut info = SongInfo::default();
    let Some(tag) = tag else {
        return info;
    };

    for field in SongField::ALL {
        if field.native_key(format).is_none() {
            continue;
        }
        // First value wins when a key repeats.
        let value = tag.get_string(&field.item_key()).map(str::to_owned);
        field.set(&mut info, value);
    }

    info
}

fn vorbis_lyrics(tag: &Tag) -> Option<String> {
    VORBIS_LYRICS_KEYS
        .iter()
        .find_map(|native| {
            tag.items()
                .find(|item| is_vorbis_lyrics_key(item.key(), native))
                .and_then(|item| item.value().text())
        })
        .map(str::to_owned)
}

/// Parse a just-written FLAC file again.
///
/// lofty can append the comment block after a STREAMINFO still flagged as the
/// last metadata block; such a tag is in the file but invisible to readers.
fn reread_flac(path: &Path, config: &AdapterConfig) -> Result<TaggedFile> {
    let file = Probe::open(path)?
        .options(config.parse_options())
        .set_file_type(AudioFormat::Flac.file_type())
        .read()?;

    if file.tag(TagType::VorbisComments).is_none() {
        return Err(MetadataError::TagLibrary(
            "Vorbis comments not readable after write".to_string(),
        ));
    }

    Ok(file)
}

fn tag_or_insert(file: &mut TaggedFile, tag_type: TagType) -> Result<&mut Tag> {
    if file.tag(tag_type).is_none() {
        debug!(tag_type = ?tag_type, "Creating empty tag");
        file.insert_tag(Tag::new(tag_type));
    }

    file.tag_mut(tag_type).ok_or_else(|| {
        MetadataError::UnsupportedFormat(format!("file does not support {:?} tags", tag_type))
    })
}

fn technical_info(file: &TaggedFile, format: AudioFormat) -> TechnicalInfo {
    let properties = file.properties();
    let duration = properties.duration();

    TechnicalInfo {
        duration: (!duration.is_zero()).then(|| duration.as_secs_f64()),
        sample_rate: properties.sample_rate().filter(|rate| *rate > 0),
        // lofty reports kbps
        bitrate: properties
            .audio_bitrate()
            .filter(|kbps| *kbps > 0)
            .map(|kbps| kbps * 1000),
        bit_depth: if format.is_lossless() {
            properties.bit_depth()
        } else {
            None
        },
        channels: properties.channels().filter(|channels| *channels > 0),
    }
}
