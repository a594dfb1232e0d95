//! # Audio Tag Adapter
//!
//! Reads and writes descriptive tags, lyrics and stream properties of MP3,
//! FLAC and WAV files through one normalized interface.
//!
//! ## Overview
//!
//! This module handles:
//! - Container detection by extension (`mp3`, `flac`, `wav`/`wave`)
//! - Song info: title, artist, album, genre and related text fields
//! - Unsynchronized lyrics with their language
//! - Stream properties: duration, sample rate, bitrate, bit depth, channels
//!
//! Each container keeps its tags in its own native scheme (ID3v2, Vorbis
//! comments, RIFF INFO); [`mapping`] documents how the normalized fields map
//! onto them.
//!
//! ## Example
//!
//! ```ignore
//! use core_metadata::{AudioHandle, SongInfo};
//!
//! let mut handle = AudioHandle::open("track.mp3")?;
//! handle.set_song_info(&SongInfo::new().with_artist("Boards of Canada"))?;
//!
//! let audio = handle.get_audio_info()?;
//! println!("{} bytes, {:?} s", audio.file_size, audio.technical.duration);
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod handler;
pub mod mapping;
pub mod models;

pub use config::{AdapterConfig, Id3Version};
pub use error::{MetadataError, Result};
pub use format::AudioFormat;
pub use handler::AudioHandle;
pub use models::{AudioInfo, AudioMetadata, Lyrics, SongInfo, TechnicalInfo, DEFAULT_LYRICS_LANGUAGE};

/// Re-exported so callers can pick a parsing mode without depending on lofty.
pub use lofty::config::ParsingMode;
