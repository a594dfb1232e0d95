//! Tag adapter demonstration
//!
//! Prints everything the adapter reads from a file as JSON, optionally
//! setting a new title first.
//!
//! Run with:
//! ```bash
//! # Read only
//! cargo run -p core-metadata --example tag_demo -- song.flac
//!
//! # Write a title, then read back
//! cargo run -p core-metadata --example tag_demo -- song.mp3 "New Title"
//!
//! # JSON logs with a custom filter
//! RUST_LOG=core_metadata=trace cargo run -p core-metadata --example tag_demo -- song.wav
//! ```

use bridge_traits::logging::LogLevel;
use core_metadata::{AudioHandle, SongInfo};
use core_runtime::logging::{init_logging, LogFormat, LoggingConfig};
use std::env;
use std::process;
use tracing::{error, info};

fn main() {
    let args: Vec<String> = env::args().collect();
    let Some(path) = args.get(1) else {
        eprintln!("usage: tag_demo <file> [title]");
        process::exit(2);
    };

    let mut config = LoggingConfig::default()
        .with_format(LogFormat::Compact)
        .with_level(LogLevel::Debug);
    if let Ok(filter) = env::var("RUST_LOG") {
        config = config.with_filter(filter);
    }
    init_logging(config).expect("Failed to initialize logging");

    let mut handle = match AudioHandle::open(path) {
        Ok(handle) => handle,
        Err(err) => {
            error!(error = %err, "Cannot open file");
            process::exit(1);
        }
    };
    info!(format = %handle.format(), "Opened");

    if let Some(title) = args.get(2) {
        if let Err(err) = handle.set_song_info(&SongInfo::new().with_title(title.as_str())) {
            error!(error = %err, "Write failed");
            process::exit(1);
        }
    }

    match handle.get_metadata() {
        Ok(metadata) => {
            let json = serde_json::to_string_pretty(&metadata).expect("metadata serializes");
            println!("{}", json);
        }
        Err(err) => {
            error!(error = %err, "Read failed");
            process::exit(1);
        }
    }
}
