use thiserror::Error;

/// Problems with how the calculator was put together. Any of these means the
/// program must refuse to start.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("repeated {kind} alias '{alias}'")]
    DuplicateAlias { kind: &'static str, alias: String },

    #[error("alias '{alias}' is used by both a command and an operation")]
    AmbiguousAlias { alias: String },

    #[error("division precision must be in range of [1: {max}], got {got}")]
    InvalidPrecision { got: u64, max: u64 },
}

/// Failures of an operation's compute step that its precondition could not rule out.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ArithmeticError {
    #[error("this operation cannot be executed, power parameter seems to be out of range")]
    PowerOutOfRange,

    #[error("this operation cannot be executed, the result is out of the representable range")]
    ScaleOutOfRange,
}

/// Why a line could not be read as a decimal operand.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("not a decimal number: {0}")]
    Syntax(#[from] bigdecimal::ParseBigDecimalError),

    #[error("exponent of the literal is out of range (scale {0})")]
    ScaleOutOfRange(i64),
}

/// Why an operation refused to produce an answer for the operands it was given.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CalculationError {
    #[error("{0}")]
    Precondition(&'static str),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
