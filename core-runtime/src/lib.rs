//! # Core Runtime Module
//!
//! Provides the runtime infrastructure shared by the tag adapter crates:
//! - Logging and tracing infrastructure
//! - Host log forwarding through `LoggerSink`
//!
//! ## Overview
//!
//! This crate establishes the logging conventions used throughout the
//! workspace. Library code only emits `tracing` events; a host decides once,
//! at startup, how those events are formatted and where they go.

pub mod error;
pub mod logging;

pub use error::{Error, Result};
