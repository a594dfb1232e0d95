//! # Host Bridge Traits
//!
//! Contracts the tag adapter expects a host to satisfy.
//!
//! ## Overview
//!
//! The adapter crates never decide where their diagnostics end up. Instead a
//! host hands in a [`LoggerSink`](logging::LoggerSink) implementation (through
//! `core_metadata::config::AdapterConfig` or
//! `core_runtime::logging::LoggingConfig`) and receives structured
//! [`LogEntry`](logging::LogEntry) values.
//!
//! ## Traits
//!
//! - [`LoggerSink`](logging::LoggerSink) - Forward structured logs to host logging
//!
//! ## Error Handling
//!
//! Sink implementations report failures with [`BridgeError`](error::BridgeError).
//! Callers treat sink failures as non-fatal: a broken sink never aborts a tag
//! read or write.
//!
//! ## Thread Safety
//!
//! `LoggerSink` requires `Send + Sync` so one sink can be shared between
//! handles through an `Arc`.
//!
//! ## Example
//!
//! ```
//! use bridge_traits::logging::{LogEntry, LogLevel, LoggerSink};
//! use bridge_traits::error::Result;
//! use std::sync::Mutex;
//!
//! #[derive(Default)]
//! struct MemorySink {
//!     entries: Mutex<Vec<String>>,
//! }
//!
//! impl LoggerSink for MemorySink {
//!     fn log(&self, entry: LogEntry) -> Result<()> {
//!         self.entries.lock().unwrap().push(entry.message);
//!         Ok(())
//!     }
//! }
//!
//! let sink = MemorySink::default();
//! sink.log(LogEntry::new(LogLevel::Info, "demo", "hello")).unwrap();
//! assert_eq!(sink.entries.lock().unwrap().len(), 1);
//! ```

pub mod error;
pub mod logging;

pub use error::BridgeError;

pub use logging::{ConsoleLogger, LogEntry, LogLevel, LoggerSink};
