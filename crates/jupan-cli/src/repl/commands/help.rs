// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Help and exit commands.

use super::{Command, ExecutionContext, Output};
use jupan::Calculator;

const HELP_TEXT: &str = "\
Available commands:
  add, subtract, multiply, divide, power, root - Perform calculations
  history - Show calculation history
  clear - Clear calculation history
  undo - Undo the last calculation
  redo - Redo the last undone calculation
  save - Save calculation history to file
  load - Load calculation history from file
  help - Show this help
  exit - Exit the calculator";

/// Help command - shows available commands.
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &str {
        "help"
    }

    fn aliases(&self) -> &[&str] {
        &["?"]
    }

    fn description(&self) -> &str {
        "Show this help"
    }

    fn execute(&self, _calculator: &mut Calculator, _ctx: &mut ExecutionContext<'_>) -> Output {
        Output::text(HELP_TEXT)
    }
}

/// Exit command - leaves the REPL.
pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &str {
        "exit"
    }

    fn aliases(&self) -> &[&str] {
        &["quit", "q"]
    }

    fn description(&self) -> &str {
        "Exit the calculator"
    }

    fn execute(&self, _calculator: &mut Calculator, _ctx: &mut ExecutionContext<'_>) -> Output {
        Output::Quit
    }
}
