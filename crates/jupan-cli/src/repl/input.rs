// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Line input sources for the REPL.

use super::commands::CommandRegistry;
use super::completer::ReplCompleter;
use reedline::{
    Emacs, FileBackedHistory, Prompt, PromptEditMode, PromptHistorySearch,
    PromptHistorySearchStatus, Reedline, Signal,
};
use std::borrow::Cow;
use std::io;
use std::path::PathBuf;

/// One input event read at a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// A line of text was submitted.
    Line(String),
    /// The read was interrupted (Ctrl-C).
    Interrupted,
    /// The input stream ended (Ctrl-D or closed stdin).
    Eof,
}

/// Source of input lines.
///
/// The engine reads the command prompt and every operand prompt through
/// this trait, so a whole session can be driven by a scripted source.
pub trait LineSource {
    /// Read one line, rendering the given prompt text.
    fn read_line(&mut self, prompt: &str) -> io::Result<Input>;
}

/// Interactive source backed by a reedline editor.
pub struct ReedlineSource {
    editor: Reedline,
}

impl ReedlineSource {
    /// Create an editor with file-backed line recall and tab completion
    /// over the registered command names.
    pub fn new(registry: &CommandRegistry) -> anyhow::Result<Self> {
        let completer = Box::new(ReplCompleter::new(registry));

        let history = Box::new(
            FileBackedHistory::with_file(1000, Self::input_history_path())
                .map_err(|e| anyhow::anyhow!("Failed to create input history: {}", e))?,
        );

        let editor = Reedline::create()
            .with_history(history)
            .with_completer(completer)
            .with_edit_mode(Box::new(Emacs::default()));

        Ok(Self { editor })
    }

    /// Where the editor keeps its line-recall history. This is editor
    /// state, separate from the calculation history file.
    fn input_history_path() -> PathBuf {
        directories::ProjectDirs::from("io", "jupan", "jupan-cli")
            .map(|dirs| dirs.data_dir().join("repl_history.txt"))
            .unwrap_or_else(|| PathBuf::from(".jupan_repl_history"))
    }
}

impl LineSource for ReedlineSource {
    fn read_line(&mut self, prompt: &str) -> io::Result<Input> {
        let prompt = ReplPrompt::new(prompt);
        match self.editor.read_line(&prompt)? {
            Signal::Success(line) => Ok(Input::Line(line)),
            Signal::CtrlC => Ok(Input::Interrupted),
            Signal::CtrlD => Ok(Input::Eof),
        }
    }
}

/// Fixed-text prompt handed to reedline.
struct ReplPrompt {
    prompt_str: String,
}

impl ReplPrompt {
    fn new(prompt: &str) -> Self {
        Self {
            prompt_str: prompt.to_string(),
        }
    }
}

#[allow(clippy::all, warnings)] // Cow<str> lifetime pattern required by reedline Prompt trait
impl Prompt for ReplPrompt {
    fn render_prompt_left(&self) -> Cow<str> {
        Cow::Borrowed(&self.prompt_str)
    }

    fn render_prompt_right(&self) -> Cow<str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, _edit_mode: PromptEditMode) -> Cow<str> {
        Cow::Borrowed("")
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<str> {
        Cow::Borrowed("... ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse-search: {}) ",
            prefix, history_search.term
        ))
    }
}

/// Scripted source replaying a fixed sequence of input events.
///
/// An exhausted script reads as end-of-input, so scripted sessions always
/// terminate.
#[cfg(test)]
pub struct ScriptedSource {
    inputs: std::collections::VecDeque<Input>,
}

#[cfg(test)]
impl ScriptedSource {
    /// Replay the given events in order.
    pub fn new(inputs: impl IntoIterator<Item = Input>) -> Self {
        Self {
            inputs: inputs.into_iter().collect(),
        }
    }

    /// Replay the given lines in order.
    pub fn lines(lines: &[&str]) -> Self {
        Self::new(lines.iter().map(|line| Input::Line((*line).to_string())))
    }
}

#[cfg(test)]
impl LineSource for ScriptedSource {
    fn read_line(&mut self, _prompt: &str) -> io::Result<Input> {
        Ok(self.inputs.pop_front().unwrap_or(Input::Eof))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_source_replays_in_order() {
        let mut source = ScriptedSource::lines(&["add", "5"]);
        assert_eq!(
            source.read_line("> ").unwrap(),
            Input::Line("add".to_string())
        );
        assert_eq!(
            source.read_line("> ").unwrap(),
            Input::Line("5".to_string())
        );
    }

    #[test]
    fn test_exhausted_script_reads_as_eof() {
        let mut source = ScriptedSource::lines(&[]);
        assert_eq!(source.read_line("> ").unwrap(), Input::Eof);
    }

    #[test]
    fn test_scripted_events_pass_through() {
        let mut source = ScriptedSource::new(vec![Input::Interrupted]);
        assert_eq!(source.read_line("> ").unwrap(), Input::Interrupted);
        assert_eq!(source.read_line("> ").unwrap(), Input::Eof);
    }
}
