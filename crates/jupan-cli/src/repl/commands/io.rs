// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! I/O commands: save and load the history file.

use super::{Command, ExecutionContext, Output};
use jupan::Calculator;

/// Save the calculation history to the configured file.
pub struct SaveCommand;

impl Command for SaveCommand {
    fn name(&self) -> &str {
        "save"
    }

    fn description(&self) -> &str {
        "Save calculation history to file"
    }

    fn execute(&self, calculator: &mut Calculator, _ctx: &mut ExecutionContext<'_>) -> Output {
        match calculator.save_history() {
            Ok(()) => Output::success("History saved successfully"),
            Err(error) => Output::error(format!("Error saving history: {}", error)),
        }
    }
}

/// Load the calculation history from the configured file.
pub struct LoadCommand;

impl Command for LoadCommand {
    fn name(&self) -> &str {
        "load"
    }

    fn description(&self) -> &str {
        "Load calculation history from file"
    }

    fn execute(&self, calculator: &mut Calculator, _ctx: &mut ExecutionContext<'_>) -> Output {
        match calculator.load_history() {
            Ok(()) => Output::success("History loaded successfully"),
            Err(error) => Output::error(format!("Error loading history: {}", error)),
        }
    }
}
