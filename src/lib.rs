//! Interactive two-operand decimal calculator: a small phase-driven session over an alias table of operations.

#[cfg(target_family = "wasm")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

mod calculator;
mod command;
mod config;
mod decimal;
mod error;
mod operation;
mod session;
mod table;
pub mod console;
pub mod embed;
#[cfg(target_family = "wasm")]
mod wasm;

pub use calculator::{Calculator, Flow, ANSWER_PREFIX, DELIMITER, INTRO, INVALID_VALUE, OPERAND_PROMPT, OPERATION_PROMPT};
pub use command::{Command, CommandTable};
pub use config::{Config, DEFAULT_DIVISION_PRECISION, MAX_DIVISION_PRECISION};
pub use decimal::{can_be_exponent, parse_decimal, to_plain_string, MAX_EXPONENT};
pub use error::{ArithmeticError, CalculationError, ConfigError, ParseError};
pub use operation::{Operation, OperationTable, BUILTIN_OPERATIONS};
pub use session::{Phase, Session};
pub use table::{Aliased, AliasTable};
