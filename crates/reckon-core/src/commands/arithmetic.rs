//! Two-operand decimal arithmetic: `add`, `subtract`, `multiply`, `divide`.
//!
//! Operands are parsed as [`BigDecimal`] rather than floats so that results
//! such as `0.1 + 0.2` print exactly. The echoed operands are the parsed
//! values in normalized display form, not the raw tokens (`1e5` echoes as
//! `100000`).
//!
//! Operands are bounded in significant digits and exponent so that every
//! operation finishes quickly and scale arithmetic inside [`BigDecimal`]
//! cannot overflow.

use bigdecimal::{BigDecimal, Zero};

use crate::command::Command;
use crate::error::CommandError;
use crate::registry::CommandRegistry;

/// Largest number of significant digits accepted in one operand.
const MAX_SIGNIFICANT_DIGITS: u64 = 1_000;

/// Largest accepted magnitude of an operand's scale (decimal exponent).
const MAX_SCALE: i64 = 10_000;

/// Parse one operand, rejecting values outside the supported range.
fn parse_operand(token: &str) -> Option<BigDecimal> {
    let value: BigDecimal = token.parse().ok()?;
    if value.digits() > MAX_SIGNIFICANT_DIGITS {
        return None;
    }
    let (_, scale) = value.as_bigint_and_exponent();
    if scale.unsigned_abs() > MAX_SCALE.unsigned_abs() {
        return None;
    }
    Some(value)
}

/// Validate the argument count and parse both operands.
fn parse_operands(name: &str, args: &[&str]) -> Result<(BigDecimal, BigDecimal), CommandError> {
    let [lhs, rhs] = args else {
        return Err(CommandError::usage(format!(
            "Usage: {name} <num1> <num2>"
        )));
    };

    let invalid = || CommandError::usage(format!("Invalid numeric input for {name} command."));
    let lhs = parse_operand(lhs).ok_or_else(invalid)?;
    let rhs = parse_operand(rhs).ok_or_else(invalid)?;
    Ok((lhs, rhs))
}

/// Render `"<lhs> <symbol> <rhs> = <result>"`.
fn equation(lhs: &BigDecimal, symbol: char, rhs: &BigDecimal, result: &BigDecimal) -> String {
    format!("{lhs} {symbol} {rhs} = {result}")
}

// ── add ───────────────────────────────────────────────────────────────────

/// `add <num1> <num2>`
#[derive(Debug, Default, Clone, Copy)]
pub struct AddCommand;

impl Command for AddCommand {
    fn name(&self) -> &str {
        "add"
    }

    fn execute(
        &self,
        args: &[&str],
        _registry: Option<&CommandRegistry>,
    ) -> Result<Option<String>, CommandError> {
        let (lhs, rhs) = parse_operands(self.name(), args)?;
        let sum = &lhs + &rhs;
        Ok(Some(equation(&lhs, '+', &rhs, &sum)))
    }
}

// ── subtract ──────────────────────────────────────────────────────────────

/// `subtract <num1> <num2>`
#[derive(Debug, Default, Clone, Copy)]
pub struct SubtractCommand;

impl Command for SubtractCommand {
    fn name(&self) -> &str {
        "subtract"
    }

    fn execute(
        &self,
        args: &[&str],
        _registry: Option<&CommandRegistry>,
    ) -> Result<Option<String>, CommandError> {
        let (lhs, rhs) = parse_operands(self.name(), args)?;
        let difference = &lhs - &rhs;
        Ok(Some(equation(&lhs, '-', &rhs, &difference)))
    }
}

// ── multiply ──────────────────────────────────────────────────────────────

/// `multiply <num1> <num2>`
#[derive(Debug, Default, Clone, Copy)]
pub struct MultiplyCommand;

impl Command for MultiplyCommand {
    fn name(&self) -> &str {
        "multiply"
    }

    fn execute(
        &self,
        args: &[&str],
        _registry: Option<&CommandRegistry>,
    ) -> Result<Option<String>, CommandError> {
        let (lhs, rhs) = parse_operands(self.name(), args)?;
        let product = &lhs * &rhs;
        Ok(Some(equation(&lhs, '*', &rhs, &product)))
    }
}

// ── divide ────────────────────────────────────────────────────────────────

/// `divide <num1> <num2>`
///
/// Terminating quotients are exact; non-terminating ones are cut off at the
/// default precision of [`BigDecimal`] division.
#[derive(Debug, Default, Clone, Copy)]
pub struct DivideCommand;

impl Command for DivideCommand {
    fn name(&self) -> &str {
        "divide"
    }

    fn execute(
        &self,
        args: &[&str],
        _registry: Option<&CommandRegistry>,
    ) -> Result<Option<String>, CommandError> {
        let (lhs, rhs) = parse_operands(self.name(), args)?;
        // Must be checked before dividing: BigDecimal panics on a zero divisor.
        if rhs.is_zero() {
            return Err(CommandError::usage("Cannot divide by zero."));
        }
        let quotient = &lhs / &rhs;
        Ok(Some(equation(&lhs, '/', &rhs, &quotient)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(cmd: &dyn Command, args: &[&str]) -> Result<Option<String>, CommandError> {
        cmd.execute(args, None)
    }

    fn ok(cmd: &dyn Command, args: &[&str]) -> String {
        run(cmd, args).unwrap().unwrap()
    }

    fn usage(cmd: &dyn Command, args: &[&str]) -> String {
        match run(cmd, args) {
            Err(CommandError::Usage(msg)) => msg,
            other => panic!("expected usage error, got {other:?}"),
        }
    }

    // ── add ────────────────────────────────────────────────────────────

    #[test]
    fn add_integers() {
        assert_eq!(ok(&AddCommand, &["5", "3"]), "5 + 3 = 8");
    }

    #[test]
    fn add_decimals_is_exact() {
        assert_eq!(ok(&AddCommand, &["0.1", "0.2"]), "0.1 + 0.2 = 0.3");
    }

    #[test]
    fn add_negative_operand() {
        assert_eq!(ok(&AddCommand, &["-2", "7"]), "-2 + 7 = 5");
    }

    #[test]
    fn add_wrong_arg_count() {
        assert_eq!(usage(&AddCommand, &["5"]), "Usage: add <num1> <num2>");
        assert_eq!(usage(&AddCommand, &[]), "Usage: add <num1> <num2>");
        assert_eq!(
            usage(&AddCommand, &["1", "2", "3"]),
            "Usage: add <num1> <num2>"
        );
    }

    #[test]
    fn add_invalid_numeric() {
        assert_eq!(
            usage(&AddCommand, &["abc", "2"]),
            "Invalid numeric input for add command."
        );
    }

    // ── subtract ───────────────────────────────────────────────────────

    #[test]
    fn subtract_integers() {
        assert_eq!(ok(&SubtractCommand, &["10", "4"]), "10 - 4 = 6");
    }

    #[test]
    fn subtract_below_zero() {
        assert_eq!(ok(&SubtractCommand, &["1.5", "2"]), "1.5 - 2 = -0.5");
    }

    #[test]
    fn subtract_wrong_arg_count() {
        assert_eq!(
            usage(&SubtractCommand, &["10"]),
            "Usage: subtract <num1> <num2>"
        );
    }

    #[test]
    fn subtract_invalid_numeric() {
        assert_eq!(
            usage(&SubtractCommand, &["xyz", "5"]),
            "Invalid numeric input for subtract command."
        );
    }

    // ── multiply ───────────────────────────────────────────────────────

    #[test]
    fn multiply_integers() {
        assert_eq!(ok(&MultiplyCommand, &["4", "5"]), "4 * 5 = 20");
    }

    #[test]
    fn multiply_decimals() {
        assert_eq!(ok(&MultiplyCommand, &["-3", "2.5"]), "-3 * 2.5 = -7.5");
    }

    #[test]
    fn multiply_wrong_arg_count() {
        assert_eq!(
            usage(&MultiplyCommand, &["4"]),
            "Usage: multiply <num1> <num2>"
        );
    }

    #[test]
    fn multiply_invalid_numeric() {
        assert_eq!(
            usage(&MultiplyCommand, &["foo", "3"]),
            "Invalid numeric input for multiply command."
        );
    }

    // ── divide ─────────────────────────────────────────────────────────

    #[test]
    fn divide_exact() {
        assert_eq!(ok(&DivideCommand, &["20", "5"]), "20 / 5 = 4");
    }

    #[test]
    fn divide_terminating_fraction() {
        assert_eq!(ok(&DivideCommand, &["10", "4"]), "10 / 4 = 2.5");
    }

    #[test]
    fn divide_repeating_fraction() {
        let output = ok(&DivideCommand, &["1", "3"]);
        assert!(output.starts_with("1 / 3 = 0.3333333333"), "got: {output}");
    }

    #[test]
    fn divide_by_zero() {
        assert_eq!(usage(&DivideCommand, &["10", "0"]), "Cannot divide by zero.");
    }

    #[test]
    fn divide_by_decimal_zero() {
        assert_eq!(
            usage(&DivideCommand, &["10", "0.000"]),
            "Cannot divide by zero."
        );
    }

    #[test]
    fn divide_wrong_arg_count() {
        assert_eq!(
            usage(&DivideCommand, &["20"]),
            "Usage: divide <num1> <num2>"
        );
    }

    #[test]
    fn divide_invalid_numeric() {
        assert_eq!(
            usage(&DivideCommand, &["abc", "1"]),
            "Invalid numeric input for divide command."
        );
    }

    #[test]
    fn divide_invalid_divisor_reported_before_zero_check() {
        assert_eq!(
            usage(&DivideCommand, &["1", "zero"]),
            "Invalid numeric input for divide command."
        );
    }

    // ── operand form and range ─────────────────────────────────────────

    #[test]
    fn exponent_operands_echo_normalized() {
        assert_eq!(ok(&AddCommand, &["1e5", "1"]), "100000 + 1 = 100001");
        assert_eq!(ok(&MultiplyCommand, &["1E+2", "3"]), "100 * 3 = 300");
    }

    #[test]
    fn trailing_zeros_are_kept() {
        assert_eq!(ok(&AddCommand, &["1.50", "1"]), "1.50 + 1 = 2.50");
    }

    #[test]
    fn extreme_exponents_are_rejected() {
        let tiny = "1e-9223372036854775807";
        assert_eq!(
            usage(&MultiplyCommand, &[tiny, tiny]),
            "Invalid numeric input for multiply command."
        );
        assert_eq!(
            usage(&MultiplyCommand, &[tiny, "1e-2"]),
            "Invalid numeric input for multiply command."
        );
        assert_eq!(
            usage(&DivideCommand, &["1", tiny]),
            "Invalid numeric input for divide command."
        );
    }

    #[test]
    fn huge_exponent_is_rejected_without_expanding() {
        assert_eq!(
            usage(&AddCommand, &["1e10000000", "1"]),
            "Invalid numeric input for add command."
        );
        assert_eq!(
            usage(&SubtractCommand, &["1", "1e1000000000"]),
            "Invalid numeric input for subtract command."
        );
    }

    #[test]
    fn exponent_bound_is_inclusive() {
        assert!(run(&MultiplyCommand, &["1e-10000", "1e-10000"]).is_ok());
        assert!(run(&DivideCommand, &["1e-10000", "1e10000"]).is_ok());
        assert_eq!(
            usage(&AddCommand, &["1e10001", "1"]),
            "Invalid numeric input for add command."
        );
        assert_eq!(
            usage(&AddCommand, &["1e-10001", "1"]),
            "Invalid numeric input for add command."
        );
    }

    #[test]
    fn digit_bound_is_inclusive() {
        let widest = "9".repeat(1_000);
        assert!(run(&MultiplyCommand, &[widest.as_str(), widest.as_str()]).is_ok());

        let too_wide = "9".repeat(1_001);
        assert_eq!(
            usage(&MultiplyCommand, &[too_wide.as_str(), "2"]),
            "Invalid numeric input for multiply command."
        );
    }

    #[test]
    fn arithmetic_ignores_registry() {
        let registry = CommandRegistry::builtin().unwrap();
        let output = AddCommand.execute(&["1", "1"], Some(&registry)).unwrap();
        assert_eq!(output.as_deref(), Some("1 + 1 = 2"));
    }
}
