//! JSON-file backed high-score store.
//!
//! # File Format
//!
//! A flat JSON object with the score under the `"hiscore"` key as decimal
//! text:
//!
//! ```json
//! {
//!   "hiscore": "2048"
//! }
//! ```
//!
//! Keys other than `"hiscore"` are preserved verbatim across saves, so the
//! file can be shared with future settings without this crate clobbering
//! them.
//!
//! # Failure Modes
//!
//! The [`HighScoreStore`] trait is deliberately infallible: a missing or
//! corrupt file reads as 0, and a failed save is dropped. Losing a high
//! score beats killing a running game over a read-only disk.
//!
//! # Atomic Writes
//!
//! Saves go to `{path}.tmp` first and are renamed into place, so a crash
//! mid-write cannot leave a truncated file behind.

use std::env;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Map, Value};

use crate::core::HighScoreStore;
use crate::types::HISCORE_KEY;

/// Environment variable overriding the default store location.
pub const HISCORE_PATH_ENV: &str = "TUI_2048_HISCORE";

#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store at the given path.
    ///
    /// The file does not need to exist; it is created on first save.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a store at the default location, see [`default_path`].
    ///
    /// [`default_path`]: Self::default_path
    pub fn at_default_path() -> Self {
        Self::new(Self::default_path())
    }

    /// Resolve the default store location.
    ///
    /// Checks `TUI_2048_HISCORE` first, then `$HOME/.tui-2048/hiscore.json`,
    /// and falls back to `.tui-2048-hiscore.json` in the working directory.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = env::var(HISCORE_PATH_ENV) {
            if !path.is_empty() {
                return PathBuf::from(path);
            }
        }
        if let Ok(home) = env::var("HOME") {
            if !home.is_empty() {
                return PathBuf::from(home).join(".tui-2048").join("hiscore.json");
            }
        }
        PathBuf::from(".tui-2048-hiscore.json")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone();
        tmp.set_extension("json.tmp");
        tmp
    }

    /// Load the whole file, treating a missing file as empty (first run).
    fn read_entries(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let file = File::open(&self.path)
            .with_context(|| format!("open {}", self.path.display()))?;
        let entries = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parse {}", self.path.display()))?;
        Ok(entries)
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create {}", parent.display()))?;
            }
        }

        let tmp = self.temp_path();
        {
            let file =
                File::create(&tmp).with_context(|| format!("create {}", tmp.display()))?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, entries)
                .with_context(|| format!("serialize {}", tmp.display()))?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
        }
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("rename into {}", self.path.display()))?;
        Ok(())
    }

    fn try_save(&self, score: u32) -> Result<()> {
        // A corrupt file reads as empty and gets replaced whole.
        let mut entries = self.read_entries().unwrap_or_default();
        entries.insert(HISCORE_KEY.to_string(), Value::String(score.to_string()));
        self.write_entries(&entries)
    }
}

impl HighScoreStore for FileStore {
    fn load_high_score(&self) -> u32 {
        match self.read_entries() {
            Ok(entries) => parse_score(entries.get(HISCORE_KEY)),
            Err(_) => 0,
        }
    }

    fn save_high_score(&mut self, score: u32) {
        let _ = self.try_save(score);
    }
}

/// Scores are written as decimal text; bare JSON numbers written by other
/// tools are accepted on read. Anything else reads as 0.
fn parse_score(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .unwrap_or(0),
        _ => 0,
    }
}
