// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! The record of one performed calculation

use crate::operations::OperationKind;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One performed calculation: what ran, on what, and what came out
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// The operation that was performed
    pub operation: OperationKind,
    /// First operand
    pub operand1: Decimal,
    /// Second operand
    pub operand2: Decimal,
    /// The result, already rounded to the configured precision
    pub result: Decimal,
    /// When the calculation was performed
    pub timestamp: DateTime<Utc>,
}

impl Calculation {
    /// Create a record stamped with the current time
    pub fn new(
        operation: OperationKind,
        operand1: Decimal,
        operand2: Decimal,
        result: Decimal,
    ) -> Self {
        Self {
            operation,
            operand1,
            operand2,
            result,
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}) = {}",
            self.operation, self.operand1, self.operand2, self.result
        )
    }
}
