//! Workspace placeholder crate.
//!
//! Exposes feature flags mapping to the workspace crates (`core-metadata`,
//! `core-runtime`) so host applications can depend on `audio-tags-workspace`
//! alone and enable what they need.
//!
//! - `metadata` (default): the tag adapter, re-exported as [`metadata`]
//! - `logging` (default): tracing setup, re-exported as [`runtime`]

pub use bridge_traits as bridge;

#[cfg(feature = "metadata")]
pub use core_metadata as metadata;

#[cfg(feature = "logging")]
pub use core_runtime as runtime;

#[cfg(feature = "metadata")]
pub use core_metadata::{AudioFormat, AudioHandle, Lyrics, MetadataError, SongInfo};
