// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! History commands: list, clear, undo, redo.

use super::{Command, ExecutionContext, Output};
use jupan::Calculator;

/// Show the calculation history.
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &str {
        "history"
    }

    fn description(&self) -> &str {
        "Show calculation history"
    }

    fn execute(&self, calculator: &mut Calculator, _ctx: &mut ExecutionContext<'_>) -> Output {
        if calculator.history().is_empty() {
            return Output::text("No calculations in history");
        }

        let mut output = String::from("Calculation History:");
        for (i, calculation) in calculator.history().iter().enumerate() {
            output.push_str(&format!("\n{}. {}", i + 1, calculation));
        }
        Output::text(output)
    }
}

/// Clear the calculation history.
pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &str {
        "clear"
    }

    fn description(&self) -> &str {
        "Clear calculation history"
    }

    fn execute(&self, calculator: &mut Calculator, _ctx: &mut ExecutionContext<'_>) -> Output {
        calculator.clear();
        Output::success("History cleared")
    }
}

/// Undo the last calculation.
pub struct UndoCommand;

impl Command for UndoCommand {
    fn name(&self) -> &str {
        "undo"
    }

    fn description(&self) -> &str {
        "Undo the last calculation"
    }

    fn execute(&self, calculator: &mut Calculator, _ctx: &mut ExecutionContext<'_>) -> Output {
        if calculator.undo() {
            Output::success("Operation undone")
        } else {
            Output::warning("Nothing to undo")
        }
    }
}

/// Redo the last undone calculation.
pub struct RedoCommand;

impl Command for RedoCommand {
    fn name(&self) -> &str {
        "redo"
    }

    fn description(&self) -> &str {
        "Redo the last undone calculation"
    }

    fn execute(&self, calculator: &mut Calculator, _ctx: &mut ExecutionContext<'_>) -> Output {
        if calculator.redo() {
            Output::success("Operation redone")
        } else {
            Output::warning("Nothing to redo")
        }
    }
}
