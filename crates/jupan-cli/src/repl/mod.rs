// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! REPL (Read-Eval-Print-Loop) for the calculator.
//!
//! This module provides an interactive environment for:
//! - Performing calculations with prompted operands
//! - Browsing, clearing, undoing and redoing the calculation history
//! - Saving and loading the history file

mod commands;
mod completer;
mod engine;
mod input;
mod prompt;

pub use engine::Repl;
