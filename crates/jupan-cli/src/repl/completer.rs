// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Tab completion for the REPL.

use super::commands::CommandRegistry;
use reedline::{Completer, Span, Suggestion};

/// REPL tab completer.
pub struct ReplCompleter {
    /// Owned copies of the registered command names and descriptions.
    commands: Vec<(String, String)>,
}

impl ReplCompleter {
    /// Create a new completer from a command registry.
    pub fn new(registry: &CommandRegistry) -> Self {
        let mut commands: Vec<(String, String)> = registry
            .command_names()
            .into_iter()
            .filter_map(|name| {
                registry
                    .get(name)
                    .map(|command| (name.to_string(), command.description().to_string()))
            })
            .collect();
        commands.sort();
        Self { commands }
    }
}

impl Completer for ReplCompleter {
    fn complete(&mut self, line: &str, pos: usize) -> Vec<Suggestion> {
        let line_to_cursor = &line[..pos];

        // Commands are single tokens; nothing to complete past the first word.
        if line_to_cursor.contains(char::is_whitespace) {
            return vec![];
        }

        let span = Span::new(0, pos);
        self.commands
            .iter()
            .filter(|(name, _)| name.starts_with(line_to_cursor))
            .map(|(name, description)| Suggestion {
                value: name.clone(),
                description: Some(description.clone()),
                style: None,
                extra: None,
                span,
                append_whitespace: false,
            })
            .collect()
    }
}
