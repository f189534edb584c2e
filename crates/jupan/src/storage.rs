// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! History persistence as pretty-printed JSON

use crate::calculation::Calculation;
use crate::error::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads and writes the calculation history file
#[derive(Debug, Clone)]
pub struct HistoryStorage {
    path: PathBuf,
}

impl HistoryStorage {
    /// Create a storage handle for the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this storage reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the parent directory of the history file if it is missing
    pub fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    /// Write the history to disk
    pub fn save(&self, history: &[Calculation]) -> Result<()> {
        self.ensure_parent_dir()?;
        let json = serde_json::to_string_pretty(history)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), entries = history.len(), "history saved");
        Ok(())
    }

    /// Read the history from disk.
    ///
    /// A missing file is not an error; it reads as an empty history.
    pub fn load(&self) -> Result<Vec<Calculation>> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no history file, starting empty");
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path)?;
        let history: Vec<Calculation> = serde_json::from_str(&json)?;
        tracing::debug!(path = %self.path.display(), entries = history.len(), "history loaded");
        Ok(history)
    }
}
