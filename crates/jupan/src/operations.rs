// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! The fixed set of binary operations and operand parsing

use crate::error::{Error, Result};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The six operations the calculator understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    /// Addition
    Add,
    /// Subtraction
    Subtract,
    /// Multiplication
    Multiply,
    /// Division
    Divide,
    /// Exponentiation (a raised to b)
    Power,
    /// The b-th root of a
    Root,
}

impl OperationKind {
    /// All operations, in command-listing order
    pub const ALL: [OperationKind; 6] = [
        OperationKind::Add,
        OperationKind::Subtract,
        OperationKind::Multiply,
        OperationKind::Divide,
        OperationKind::Power,
        OperationKind::Root,
    ];

    /// Parse a command token into an operation
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "add" => Some(Self::Add),
            "subtract" => Some(Self::Subtract),
            "multiply" => Some(Self::Multiply),
            "divide" => Some(Self::Divide),
            "power" => Some(Self::Power),
            "root" => Some(Self::Root),
            _ => None,
        }
    }

    /// The command token for this operation
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
            Self::Root => "root",
        }
    }

    /// Apply the operation to two operands
    ///
    /// Domain violations (dividing by zero, even roots of negatives) come
    /// back as validation errors; overflow as operation errors.
    pub fn apply(&self, a: Decimal, b: Decimal) -> Result<Decimal> {
        match self {
            Self::Add => a.checked_add(b).ok_or_else(overflow),
            Self::Subtract => a.checked_sub(b).ok_or_else(overflow),
            Self::Multiply => a.checked_mul(b).ok_or_else(overflow),
            Self::Divide => {
                if b.is_zero() {
                    return Err(Error::validation("Division by zero is not allowed"));
                }
                a.checked_div(b).ok_or_else(overflow)
            }
            Self::Power => power(a, b),
            Self::Root => root(a, b),
        }
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn overflow() -> Error {
    Error::operation("Result is out of range")
}

/// Raise `a` to the power `b`.
///
/// Integer exponents go through the exact power path and may be negative;
/// fractional exponents require a non-negative base.
fn power(a: Decimal, b: Decimal) -> Result<Decimal> {
    if b.is_integer() {
        if a.is_zero() && b.is_sign_negative() {
            return Err(Error::validation(
                "Zero cannot be raised to a negative power",
            ));
        }
        let exp = b
            .to_i64()
            .ok_or_else(|| Error::operation("Exponent is out of range"))?;
        a.checked_powi(exp).ok_or_else(overflow)
    } else if a.is_sign_negative() {
        Err(Error::validation(
            "Cannot raise a negative number to a fractional power",
        ))
    } else {
        a.checked_powd(b).ok_or_else(overflow)
    }
}

/// Take the `b`-th root of `a`.
///
/// Odd integer roots of negative numbers flip the sign and recurse; every
/// other negative-base case is rejected. The root itself is computed as
/// a^(1/b) through f64, so callers are expected to round the result.
fn root(a: Decimal, b: Decimal) -> Result<Decimal> {
    if b.is_zero() {
        return Err(Error::validation("Zero root is undefined"));
    }
    if a.is_sign_negative() {
        if !b.is_integer() {
            return Err(Error::validation(
                "Cannot take a fractional root of a negative number",
            ));
        }
        let index = b
            .to_i64()
            .ok_or_else(|| Error::operation("Root index is out of range"))?;
        if index % 2 == 0 {
            return Err(Error::validation(
                "Cannot take an even root of a negative number",
            ));
        }
        return root(-a, b).map(|value| -value);
    }
    let base = a
        .to_f64()
        .ok_or_else(|| Error::operation("Operand is out of range"))?;
    let index = b
        .to_f64()
        .ok_or_else(|| Error::operation("Root index is out of range"))?;
    let value = base.powf(1.0 / index);
    if !value.is_finite() {
        return Err(Error::operation("Result is out of range"));
    }
    Decimal::from_f64(value).ok_or_else(overflow)
}

/// Parse an operand as a decimal number.
///
/// Accepts plain and scientific notation; the input is trimmed first.
pub fn parse_number(input: &str) -> Result<Decimal> {
    let token = input.trim();
    Decimal::from_str(token)
        .or_else(|_| Decimal::from_scientific(token))
        .map_err(|_| Error::validation(format!("Invalid number: '{token}'")))
}
