// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! REPL engine implementation.

use super::commands::{CommandRegistry, ExecutionContext, Output};
use super::input::{Input, LineSource, ReedlineSource};
use super::prompt::PromptBuilder;
use console::style;
use jupan::{Calculator, CalculatorConfig};
use std::io::{self, Write};

/// The main REPL engine.
///
/// Generic over the input source and output sink so whole sessions can be
/// scripted and captured in tests.
pub struct Repl<S, W> {
    /// Calculator state.
    calculator: Calculator,
    /// Command registry.
    commands: CommandRegistry,
    /// Input source.
    source: S,
    /// Output sink.
    out: W,
    /// Prompt builder.
    prompt_builder: PromptBuilder,
}

impl Repl<ReedlineSource, io::Stdout> {
    /// Create an interactive REPL on stdin/stdout.
    ///
    /// Failures here (history directory, editor setup) are fatal and
    /// propagate to the caller.
    pub fn new(config: CalculatorConfig) -> anyhow::Result<Self> {
        let commands = CommandRegistry::with_defaults();
        let calculator = Calculator::new(config)?;
        let source = ReedlineSource::new(&commands)?;

        let prompt_builder = if std::env::var_os("NO_COLOR").is_some() {
            PromptBuilder::new().without_colors()
        } else {
            PromptBuilder::new()
        };

        Ok(Self {
            calculator,
            commands,
            source,
            out: io::stdout(),
            prompt_builder,
        })
    }
}

impl<S: LineSource, W: Write> Repl<S, W> {
    /// Create a REPL over explicit parts. Scripted sessions run without
    /// colors so their output is stable.
    #[cfg(test)]
    pub fn with_parts(calculator: Calculator, source: S, out: W) -> Self {
        Self {
            calculator,
            commands: CommandRegistry::with_defaults(),
            source,
            out,
            prompt_builder: PromptBuilder::new().without_colors(),
        }
    }

    /// Run the REPL loop until exit or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        self.print_welcome()?;

        loop {
            let prompt = self.prompt_builder.build(&self.calculator);

            match self.source.read_line(&prompt) {
                Ok(Input::Line(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    match self.execute_line(line) {
                        Output::Quit => {
                            // Exit always says goodbye; a failed save only
                            // downgrades to a warning.
                            if let Err(error) = self.calculator.save_history() {
                                writeln!(self.out, "Warning: Could not save history: {}", error)?;
                            }
                            writeln!(self.out, "Goodbye!")?;
                            break;
                        }
                        Output::Terminated => {
                            writeln!(self.out, "Input terminated. Exiting...")?;
                            break;
                        }
                        Output::Text(msg)
                        | Output::Success(msg)
                        | Output::Warning(msg)
                        | Output::Error(msg) => {
                            writeln!(self.out, "{}", msg)?;
                        }
                    }
                }
                Ok(Input::Interrupted) => {
                    writeln!(self.out, "Operation cancelled")?;
                }
                Ok(Input::Eof) => {
                    writeln!(self.out, "Input terminated. Exiting...")?;
                    break;
                }
                Err(error) => {
                    writeln!(self.out, "Error: {}", error)?;
                }
            }
        }

        Ok(())
    }

    /// Print the welcome message.
    fn print_welcome(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(
            self.out,
            "{} {}",
            style("Jupan Calculator").cyan().bold(),
            style(format!("v{}", env!("CARGO_PKG_VERSION"))).dim()
        )?;
        writeln!(
            self.out,
            "{}",
            style("Type 'help' for available commands, 'exit' to quit").dim()
        )?;
        writeln!(self.out)?;
        Ok(())
    }

    /// Execute a line of input.
    fn execute_line(&mut self, line: &str) -> Output {
        // The whole trimmed line is the command token, matched
        // case-insensitively.
        let token = line.to_lowercase();

        let command = match self.commands.get(&token) {
            Some(command) => command,
            None => {
                return Output::error(format!(
                    "Unknown command: '{}'\nType 'help' for available commands",
                    token
                ));
            }
        };

        let mut ctx = ExecutionContext {
            source: &mut self.source,
            prompts: &self.prompt_builder,
        };

        command.execute(&mut self.calculator, &mut ctx)
    }
}
