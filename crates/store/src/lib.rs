//! High-score persistence.
//!
//! The core crate defines the [`HighScoreStore`] trait and an in-memory
//! implementation; this crate adds [`FileStore`], which keeps the best score
//! in a small JSON file so it survives across sessions.
//!
//! [`HighScoreStore`]: tui_2048_core::HighScoreStore

pub mod file_store;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use file_store::FileStore;
