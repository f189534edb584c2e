// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! REPL command system.
//!
//! Provides the Command trait and command registry for the REPL.

mod arithmetic;
mod help;
mod history;
mod io;

pub use arithmetic::ArithmeticCommand;
pub use help::{ExitCommand, HelpCommand};
pub use history::{ClearCommand, HistoryCommand, RedoCommand, UndoCommand};
pub use io::{LoadCommand, SaveCommand};

use super::input::{Input, LineSource};
use super::prompt::PromptBuilder;
use jupan::{parse_number, Calculator, Decimal, OperationKind};
use std::collections::HashMap;

/// Output from a command.
#[derive(Debug)]
pub enum Output {
    /// Plain text output.
    Text(String),
    /// Success message.
    Success(String),
    /// Warning message.
    Warning(String),
    /// Error message.
    Error(String),
    /// Quit signal; the engine saves the history and says goodbye.
    Quit,
    /// The input stream ended mid-command; the engine stops without saving.
    Terminated,
}

impl Output {
    /// Create a success output.
    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    /// Create a warning output.
    pub fn warning(msg: impl Into<String>) -> Self {
        Self::Warning(msg.into())
    }

    /// Create an error output.
    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    /// Create a text output.
    pub fn text(msg: impl Into<String>) -> Self {
        Self::Text(msg.into())
    }
}

/// Execution context for commands.
pub struct ExecutionContext<'a> {
    /// Source of operand input lines.
    pub source: &'a mut (dyn LineSource + 'a),
    /// Prompt builder for operand prompts.
    pub prompts: &'a PromptBuilder,
}

/// What came back from one operand prompt.
pub enum OperandRead {
    /// A valid number.
    Value(Decimal),
    /// The user cancelled (the cancel token or Ctrl-C).
    Cancelled,
    /// The input could not be used; the message is ready for display.
    Invalid(String),
    /// The input stream ended.
    Terminated,
}

impl ExecutionContext<'_> {
    /// Prompt for one operand.
    ///
    /// The cancel token is matched case-insensitively after trimming, and
    /// an interrupt at the prompt reads as a cancel.
    pub fn read_operand(&mut self, label: &str) -> OperandRead {
        let prompt = self.prompts.operand(label);
        match self.source.read_line(&prompt) {
            Ok(Input::Line(line)) => {
                let token = line.trim();
                if token.eq_ignore_ascii_case("cancel") {
                    return OperandRead::Cancelled;
                }
                match parse_number(token) {
                    Ok(value) => OperandRead::Value(value),
                    Err(error) => OperandRead::Invalid(error.to_string()),
                }
            }
            Ok(Input::Interrupted) => OperandRead::Cancelled,
            Ok(Input::Eof) => OperandRead::Terminated,
            Err(error) => OperandRead::Invalid(error.to_string()),
        }
    }
}

/// Command trait for REPL commands.
pub trait Command: Send + Sync {
    /// Command name (e.g., "add").
    fn name(&self) -> &str;

    /// Command aliases (e.g., ["q"]).
    fn aliases(&self) -> &[&str] {
        &[]
    }

    /// Short description for help.
    fn description(&self) -> &str;

    /// Execute the command against the calculator state.
    fn execute(&self, calculator: &mut Calculator, ctx: &mut ExecutionContext<'_>) -> Output;
}

/// Command registry for looking up and executing commands.
pub struct CommandRegistry {
    /// Registered commands.
    commands: HashMap<String, Box<dyn Command>>,
    /// Alias to command name mapping.
    aliases: HashMap<String, String>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Create a registry with all default commands.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        // Arithmetic commands
        for kind in OperationKind::ALL {
            registry.register(Box::new(ArithmeticCommand::new(kind)));
        }

        // History commands
        registry.register(Box::new(HistoryCommand));
        registry.register(Box::new(ClearCommand));
        registry.register(Box::new(UndoCommand));
        registry.register(Box::new(RedoCommand));

        // I/O commands
        registry.register(Box::new(SaveCommand));
        registry.register(Box::new(LoadCommand));

        // Help commands
        registry.register(Box::new(HelpCommand));
        registry.register(Box::new(ExitCommand));

        registry
    }

    /// Register a command.
    pub fn register(&mut self, command: Box<dyn Command>) {
        let name = command.name().to_string();

        // Register aliases
        for alias in command.aliases() {
            self.aliases.insert(alias.to_string(), name.clone());
        }

        // Register command
        self.commands.insert(name, command);
    }

    /// Look up a command by name or alias.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        // Try direct lookup
        if let Some(cmd) = self.commands.get(name) {
            return Some(cmd.as_ref());
        }

        // Try alias lookup
        if let Some(cmd_name) = self.aliases.get(name) {
            if let Some(cmd) = self.commands.get(cmd_name) {
                return Some(cmd.as_ref());
            }
        }

        None
    }

    /// Get all command names.
    pub fn command_names(&self) -> Vec<&str> {
        self.commands.keys().map(|s| s.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repl::input::ScriptedSource;

    fn make_ctx<'a>(
        source: &'a mut ScriptedSource,
        prompts: &'a PromptBuilder,
    ) -> ExecutionContext<'a> {
        ExecutionContext { source, prompts }
    }

    #[test]
    fn test_output_constructors() {
        assert!(matches!(Output::success("ok"), Output::Success(_)));
        assert!(matches!(Output::warning("warn"), Output::Warning(_)));
        assert!(matches!(Output::error("err"), Output::Error(_)));
        assert!(matches!(Output::text("text"), Output::Text(_)));
    }

    #[test]
    fn test_command_registry() {
        let registry = CommandRegistry::with_defaults();

        assert!(registry.get("add").is_some());
        assert!(registry.get("history").is_some());
        assert!(registry.get("help").is_some());
        assert!(registry.get("exit").is_some());
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn test_command_registry_aliases() {
        let registry = CommandRegistry::with_defaults();

        assert_eq!(registry.get("quit").unwrap().name(), "exit");
        assert_eq!(registry.get("q").unwrap().name(), "exit");
        assert_eq!(registry.get("?").unwrap().name(), "help");
    }

    #[test]
    fn test_read_operand_value() {
        let mut source = ScriptedSource::lines(&["42"]);
        let prompts = PromptBuilder::new().without_colors();
        let mut ctx = make_ctx(&mut source, &prompts);

        match ctx.read_operand("First number") {
            OperandRead::Value(value) => assert_eq!(value, Decimal::from(42)),
            _ => panic!("expected a value"),
        }
    }

    #[test]
    fn test_read_operand_cancel_is_case_insensitive() {
        let mut source = ScriptedSource::lines(&["  CANCEL  "]);
        let prompts = PromptBuilder::new().without_colors();
        let mut ctx = make_ctx(&mut source, &prompts);

        assert!(matches!(
            ctx.read_operand("First number"),
            OperandRead::Cancelled
        ));
    }

    #[test]
    fn test_read_operand_invalid_input() {
        let mut source = ScriptedSource::lines(&["five"]);
        let prompts = PromptBuilder::new().without_colors();
        let mut ctx = make_ctx(&mut source, &prompts);

        match ctx.read_operand("First number") {
            OperandRead::Invalid(message) => assert!(message.contains("'five'")),
            _ => panic!("expected invalid input"),
        }
    }

    #[test]
    fn test_read_operand_interrupt_cancels() {
        let mut source = ScriptedSource::new(vec![Input::Interrupted]);
        let prompts = PromptBuilder::new().without_colors();
        let mut ctx = make_ctx(&mut source, &prompts);

        assert!(matches!(
            ctx.read_operand("First number"),
            OperandRead::Cancelled
        ));
    }

    #[test]
    fn test_read_operand_eof_terminates() {
        let mut source = ScriptedSource::lines(&[]);
        let prompts = PromptBuilder::new().without_colors();
        let mut ctx = make_ctx(&mut source, &prompts);

        assert!(matches!(
            ctx.read_operand("First number"),
            OperandRead::Terminated
        ));
    }
}
