//! Minimal audio files for integration tests.
//!
//! Streams are silent and only as long as the parsers need to report
//! properties. No tags are written.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SAMPLE_RATE: u32 = 44_100;
pub const CHANNELS: u16 = 2;
pub const BITS_PER_SAMPLE: u16 = 16;

/// MPEG-1 Layer III, 128 kbps, 44.1 kHz, stereo, no padding.
const MP3_FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x00];
const MP3_FRAME_LEN: usize = 417;
const MP3_FRAME_COUNT: usize = 40;

pub fn tempdir() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

pub fn mp3_bytes() -> Vec<u8> {
    let mut bytes = Vec::with_capacity(MP3_FRAME_LEN * MP3_FRAME_COUNT);
    for _ in 0..MP3_FRAME_COUNT {
        let mut frame = vec![0u8; MP3_FRAME_LEN];
        frame[..4].copy_from_slice(&MP3_FRAME_HEADER);
        bytes.extend_from_slice(&frame);
    }
    bytes
}

/// `fLaC` marker, STREAMINFO, a trailing PADDING block, then a stand-in for
/// frame data. One second of audio.
pub fn flac_bytes() -> Vec<u8> {
    flac_with_padding(Some(FLAC_PADDING_LEN))
}

/// Like [`flac_bytes`] but STREAMINFO is the only (and last) metadata block.
pub fn flac_bytes_streaminfo_only() -> Vec<u8> {
    flac_with_padding(None)
}

const FLAC_LAST_BLOCK: u8 = 0x80;
const FLAC_STREAMINFO: u8 = 0;
const FLAC_PADDING: u8 = 1;
const FLAC_PADDING_LEN: usize = 1024;

fn flac_block_header(kind: u8, last: bool, len: usize) -> [u8; 4] {
    let flag = if last { FLAC_LAST_BLOCK } else { 0 };
    let len = (len as u32).to_be_bytes();
    [flag | kind, len[1], len[2], len[3]]
}

fn flac_with_padding(padding: Option<usize>) -> Vec<u8> {
    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"fLaC");

    bytes.extend_from_slice(&flac_block_header(FLAC_STREAMINFO, padding.is_none(), 34));
    bytes.extend_from_slice(&4096u16.to_be_bytes()); // min block size
    bytes.extend_from_slice(&4096u16.to_be_bytes()); // max block size
    bytes.extend_from_slice(&[0, 0, 0]); // min frame size (unknown)
    bytes.extend_from_slice(&[0, 0, 0]); // max frame size (unknown)

    let total_samples = u64::from(SAMPLE_RATE);
    let packed = (u64::from(SAMPLE_RATE) << 44)
        | (u64::from(CHANNELS - 1) << 41)
        | (u64::from(BITS_PER_SAMPLE - 1) << 36)
        | total_samples;
    bytes.extend_from_slice(&packed.to_be_bytes());
    bytes.extend_from_slice(&[0u8; 16]); // MD5

    if let Some(len) = padding {
        bytes.extend_from_slice(&flac_block_header(FLAC_PADDING, true, len));
        bytes.resize(bytes.len() + len, 0);
    }

    bytes.extend_from_slice(&[0u8; 1024]);
    bytes
}

/// PCM RIFF/WAVE with a `fmt ` and a `data` chunk. A tenth of a second.
pub fn wav_bytes() -> Vec<u8> {
    let block_align = CHANNELS * BITS_PER_SAMPLE / 8;
    let byte_rate = SAMPLE_RATE * u32::from(block_align);
    let data_len = byte_rate / 10;

    let mut body = Vec::new();
    body.extend_from_slice(b"WAVE");

    body.extend_from_slice(b"fmt ");
    body.extend_from_slice(&16u32.to_le_bytes());
    body.extend_from_slice(&1u16.to_le_bytes()); // PCM
    body.extend_from_slice(&CHANNELS.to_le_bytes());
    body.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    body.extend_from_slice(&byte_rate.to_le_bytes());
    body.extend_from_slice(&block_align.to_le_bytes());
    body.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    body.extend_from_slice(b"data");
    body.extend_from_slice(&data_len.to_le_bytes());
    body.resize(body.len() + data_len as usize, 0);

    let mut bytes = Vec::with_capacity(body.len() + 8);
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&(body.len() as u32).to_le_bytes());
    bytes.extend_from_slice(&body);
    bytes
}

fn write(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, bytes).expect("write fixture");
    path
}

pub fn write_mp3(dir: &Path, name: &str) -> PathBuf {
    write(dir, name, &mp3_bytes())
}

pub fn write_flac(dir: &Path, name: &str) -> PathBuf {
    write(dir, name, &flac_bytes())
}

pub fn write_flac_streaminfo_only(dir: &Path, name: &str) -> PathBuf {
    write(dir, name, &flac_bytes_streaminfo_only())
}

pub fn write_wav(dir: &Path, name: &str) -> PathBuf {
    write(dir, name, &wav_bytes())
}
