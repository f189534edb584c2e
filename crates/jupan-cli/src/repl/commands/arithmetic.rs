// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! The operand-prompting arithmetic commands.

use super::{Command, ExecutionContext, OperandRead, Output};
use jupan::{Calculator, Decimal, OperationKind};

/// One arithmetic command; the operation decides the token and semantics.
pub struct ArithmeticCommand {
    kind: OperationKind,
}

impl ArithmeticCommand {
    /// Create the command for the given operation.
    pub fn new(kind: OperationKind) -> Self {
        Self { kind }
    }
}

/// Read one operand, mapping every non-value outcome to the output the
/// engine should print.
fn operand(ctx: &mut ExecutionContext<'_>, label: &str) -> Result<Decimal, Output> {
    match ctx.read_operand(label) {
        OperandRead::Value(value) => Ok(value),
        OperandRead::Cancelled => Err(Output::text("Operation cancelled")),
        OperandRead::Invalid(message) => Err(Output::error(format!("Error: {}", message))),
        OperandRead::Terminated => Err(Output::Terminated),
    }
}

impl Command for ArithmeticCommand {
    fn name(&self) -> &str {
        self.kind.name()
    }

    fn description(&self) -> &str {
        match self.kind {
            OperationKind::Add => "Add two numbers",
            OperationKind::Subtract => "Subtract the second number from the first",
            OperationKind::Multiply => "Multiply two numbers",
            OperationKind::Divide => "Divide the first number by the second",
            OperationKind::Power => "Raise the first number to the second",
            OperationKind::Root => "Take the nth root of the first number",
        }
    }

    fn execute(&self, calculator: &mut Calculator, ctx: &mut ExecutionContext<'_>) -> Output {
        // Operands are validated as they are read; a rejected first operand
        // never reaches the second prompt.
        let a = match operand(ctx, "First number") {
            Ok(value) => value,
            Err(output) => return output,
        };
        let b = match operand(ctx, "Second number") {
            Ok(value) => value,
            Err(output) => return output,
        };

        match calculator.perform(self.kind, a, b) {
            Ok(calculation) => Output::success(format!("Result: {}", calculation.result)),
            Err(error) => Output::error(format!("Error: {}", error)),
        }
    }
}
