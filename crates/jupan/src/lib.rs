// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! # Jupan - Decimal Calculator Core
//!
//! Embeddable calculator engine with exact decimal arithmetic, linear
//! undo/redo, and JSON history persistence. The interactive CLI in
//! `jupan-cli` is a thin shell over this crate.
//!
//! ## Architecture
//!
//! - **Decimal first**: operands and results are `rust_decimal::Decimal`,
//!   so `0.1 + 0.2` is exactly `0.3`
//! - **History as undo stack**: every change appends to the history tail,
//!   which makes undo/redo a pair of pops between two stacks
//! - **Best-effort persistence**: history auto-saves after each change and
//!   a failed save never takes the calculator down
//!
//! ## Quick Start
//!
//! ```no_run
//! use jupan::{Calculator, CalculatorConfig, Decimal, OperationKind};
//!
//! # fn main() -> jupan::Result<()> {
//! let mut calc = Calculator::new(CalculatorConfig::from_env())?;
//!
//! let calculation = calc.perform(OperationKind::Add, Decimal::from(5), Decimal::from(3))?;
//! println!("{calculation}"); // add(5, 3) = 8
//!
//! calc.undo();
//! calc.save_history()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod calculation;
pub mod calculator;
pub mod config;
pub mod error;
pub mod operations;
pub mod storage;

pub use calculation::Calculation;
pub use calculator::Calculator;
pub use config::CalculatorConfig;
pub use error::{Error, Result};
pub use operations::{parse_number, OperationKind};
pub use storage::HistoryStorage;

/// Decimal number type used for operands and results
pub use rust_decimal::Decimal;
