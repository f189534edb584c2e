// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Prompt construction for the REPL.

use console::style;
use jupan::Calculator;

/// Builds the command prompt and the operand prompts.
pub struct PromptBuilder {
    /// Whether to use colors.
    use_colors: bool,
}

impl PromptBuilder {
    /// Create a new prompt builder with colors enabled.
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    /// Create a prompt builder without colors (scripted sessions).
    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Build the command prompt for the current calculator state.
    ///
    /// Shows the history entry count once there is something to show.
    pub fn build(&self, calculator: &Calculator) -> String {
        let mut prompt = String::new();

        if self.use_colors {
            prompt.push_str(&style("jupan").cyan().bold().to_string());
        } else {
            prompt.push_str("jupan");
        }

        let entries = calculator.history().len();
        if entries > 0 {
            if self.use_colors {
                prompt.push_str(&format!(" ({})", style(entries).dim()));
            } else {
                prompt.push_str(&format!(" ({})", entries));
            }
        }

        prompt.push_str("> ");
        prompt
    }

    /// Build an operand prompt with the cancel hint.
    pub fn operand(&self, label: &str) -> String {
        let text = format!("{} (or 'cancel'): ", label);
        if self.use_colors {
            style(text).dim().to_string()
        } else {
            text
        }
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jupan::{CalculatorConfig, Decimal, OperationKind};
    use tempfile::TempDir;

    fn calculator(dir: &TempDir) -> Calculator {
        let config = CalculatorConfig::default()
            .with_history_path(dir.path().join("history.json"))
            .with_auto_save(false);
        Calculator::new(config).unwrap()
    }

    #[test]
    fn test_plain_prompt_has_name_and_marker() {
        let dir = TempDir::new().unwrap();
        let calc = calculator(&dir);

        let prompt = PromptBuilder::new().without_colors().build(&calc);
        assert_eq!(prompt, "jupan> ");
    }

    #[test]
    fn test_prompt_shows_history_count() {
        let dir = TempDir::new().unwrap();
        let mut calc = calculator(&dir);
        calc.perform(OperationKind::Add, Decimal::from(5), Decimal::from(3))
            .unwrap();

        let prompt = PromptBuilder::new().without_colors().build(&calc);
        assert_eq!(prompt, "jupan (1)> ");
    }

    #[test]
    fn test_plain_prompt_has_no_ansi_codes() {
        let dir = TempDir::new().unwrap();
        let calc = calculator(&dir);

        let prompt = PromptBuilder::new().without_colors().build(&calc);
        assert!(!prompt.contains('\x1b'));
    }

    #[test]
    fn test_operand_prompt_carries_cancel_hint() {
        let builder = PromptBuilder::new().without_colors();
        assert_eq!(
            builder.operand("First number"),
            "First number (or 'cancel'): "
        );
    }
}
