// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! The calculator state machine: history, undo/redo, persistence

use crate::calculation::Calculation;
use crate::config::CalculatorConfig;
use crate::error::Result;
use crate::operations::OperationKind;
use crate::storage::HistoryStorage;
use rust_decimal::Decimal;

/// Calculation history with linear undo/redo and disk persistence.
///
/// Every change to the history is an append at the tail, so the history
/// vector itself is the undo stack: undo pops the tail onto the redo stack
/// and redo moves it back. Performing a new calculation discards the redo
/// stack.
#[derive(Debug)]
pub struct Calculator {
    config: CalculatorConfig,
    storage: HistoryStorage,
    history: Vec<Calculation>,
    redo_stack: Vec<Calculation>,
}

impl Calculator {
    /// Create a calculator with empty history.
    ///
    /// Fails when the parent directory of the history file cannot be
    /// created; callers treat that as fatal.
    pub fn new(config: CalculatorConfig) -> Result<Self> {
        let storage = HistoryStorage::new(config.history_path.clone());
        storage.ensure_parent_dir()?;
        Ok(Self {
            config,
            storage,
            history: Vec::new(),
            redo_stack: Vec::new(),
        })
    }

    /// The active configuration
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// The calculations performed so far, oldest first
    pub fn history(&self) -> &[Calculation] {
        &self.history
    }

    /// Whether undo has anything to unwind
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Whether redo has anything to replay
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Perform an operation and append it to the history.
    ///
    /// The result is rounded to the configured precision before it is
    /// recorded. Nothing is mutated when the operation fails.
    pub fn perform(
        &mut self,
        operation: OperationKind,
        a: Decimal,
        b: Decimal,
    ) -> Result<Calculation> {
        let raw = operation.apply(a, b)?;
        let result = raw.round_dp(self.config.precision).normalize();
        let calculation = Calculation::new(operation, a, b, result);
        tracing::debug!(%calculation, "operation performed");

        self.history.push(calculation.clone());
        self.redo_stack.clear();
        if self.history.len() > self.config.max_history_size {
            self.history.remove(0);
        }
        self.autosave();
        Ok(calculation)
    }

    /// Undo the most recent calculation.
    ///
    /// Returns false when the history is empty.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(calculation) => {
                tracing::debug!(%calculation, "operation undone");
                self.redo_stack.push(calculation);
                self.autosave();
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone calculation.
    ///
    /// Returns false when the redo stack is empty.
    pub fn redo(&mut self) -> bool {
        match self.redo_stack.pop() {
            Some(calculation) => {
                tracing::debug!(%calculation, "operation redone");
                self.history.push(calculation);
                self.autosave();
                true
            }
            None => false,
        }
    }

    /// Drop all history and redo state
    pub fn clear(&mut self) {
        self.history.clear();
        self.redo_stack.clear();
        self.autosave();
    }

    /// Persist the history to the configured file
    pub fn save_history(&self) -> Result<()> {
        self.storage.save(&self.history)
    }

    /// Replace the in-memory history with the persisted one.
    ///
    /// Loaded entries behave like freshly performed ones, so they are
    /// undoable; the redo stack is discarded.
    pub fn load_history(&mut self) -> Result<()> {
        self.history = self.storage.load()?;
        self.redo_stack.clear();
        Ok(())
    }

    fn autosave(&self) {
        if !self.config.auto_save {
            return;
        }
        if let Err(error) = self.save_history() {
            tracing::warn!(%error, "auto-save failed");
        }
    }
}
