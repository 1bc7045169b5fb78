use bigdecimal::BigDecimal;
use num_traits::Zero;
use std::fmt;

use crate::decimal;
use crate::error::{ArithmeticError, CalculationError, ConfigError};
use crate::table::{Aliased, AliasTable};

pub type Precondition = fn(&BigDecimal, &BigDecimal) -> bool;
// The last argument is the number of significant digits kept by inexact division
pub type Compute = fn(&BigDecimal, &BigDecimal, u64) -> Result<BigDecimal, ArithmeticError>;

/// A binary arithmetic operation the user can pick by alias.
#[derive(Clone, Copy)]
pub struct Operation {
    pub name: &'static str,
    pub alias: &'static str,
    pub error_message: &'static str,
    precondition: Precondition,
    compute: Compute,
}

impl Operation {
    pub const fn new(
        name: &'static str,
        alias: &'static str,
        error_message: &'static str,
        precondition: Precondition,
        compute: Compute,
    ) -> Self {
        Operation { name, alias, error_message, precondition, compute }
    }

    pub fn can_be_calculated(&self, a: &BigDecimal, b: &BigDecimal) -> bool {
        (self.precondition)(a, b)
    }

    // Callers check the precondition first. An error here means the operands passed it but the result still cannot be represented.
    pub fn calculate(&self, a: &BigDecimal, b: &BigDecimal, precision: u64) -> Result<BigDecimal, ArithmeticError> {
        (self.compute)(a, b, precision)
    }

    /// Precondition check followed by the computation.
    pub fn apply(&self, a: &BigDecimal, b: &BigDecimal, precision: u64) -> Result<BigDecimal, CalculationError> {
        if !self.can_be_calculated(a, b) {
            return Err(CalculationError::Precondition(self.error_message));
        }
        Ok(self.calculate(a, b, precision)?)
    }
}

impl fmt::Debug for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operation")
            .field("name", &self.name)
            .field("alias", &self.alias)
            .finish()
    }
}

// Aliases are unique within a table, so they identify an operation
impl PartialEq for Operation {
    fn eq(&self, other: &Self) -> bool {
        self.alias == other.alias
    }
}

impl Aliased for Operation {
    fn alias(&self) -> &str {
        self.alias
    }
}

const DIVISOR_IS_ZERO: &str = "divisor can not be equal to 0";
const BAD_POWER: &str = "power can be an integer in range of [0: 999999999], and 0^0 is undefined";

fn no_restrictions(_: &BigDecimal, _: &BigDecimal) -> bool {
    true
}

fn divisor_is_not_zero(_: &BigDecimal, b: &BigDecimal) -> bool {
    !b.is_zero()
}

fn power_is_valid(value: &BigDecimal, power: &BigDecimal) -> bool {
    // 0^0 is refused along with anything the exponent range excludes
    decimal::can_be_exponent(power) && !(value.is_zero() && power.is_zero())
}

fn add(a: &BigDecimal, b: &BigDecimal, _: u64) -> Result<BigDecimal, ArithmeticError> {
    decimal::within_scale(a + b)
}

fn subtract(a: &BigDecimal, b: &BigDecimal, _: u64) -> Result<BigDecimal, ArithmeticError> {
    decimal::within_scale(a - b)
}

fn multiply(a: &BigDecimal, b: &BigDecimal, _: u64) -> Result<BigDecimal, ArithmeticError> {
    decimal::within_scale(a * b)
}

fn divide(a: &BigDecimal, b: &BigDecimal, precision: u64) -> Result<BigDecimal, ArithmeticError> {
    decimal::within_scale(decimal::divide(a, b, precision))
}

fn integer_divide(a: &BigDecimal, b: &BigDecimal, _: u64) -> Result<BigDecimal, ArithmeticError> {
    decimal::within_scale(decimal::integer_quotient(a, b))
}

fn remainder(a: &BigDecimal, b: &BigDecimal, _: u64) -> Result<BigDecimal, ArithmeticError> {
    decimal::within_scale(decimal::remainder(a, b))
}

fn exponentiate(a: &BigDecimal, b: &BigDecimal, _: u64) -> Result<BigDecimal, ArithmeticError> {
    decimal::pow(a, b)
}

pub const BUILTIN_OPERATIONS: [Operation; 7] = [
    Operation::new("addition", "+", "", no_restrictions, add),
    Operation::new("subtraction", "-", "", no_restrictions, subtract),
    Operation::new("multiplication", "*", "", no_restrictions, multiply),
    Operation::new("division", "/", DIVISOR_IS_ZERO, divisor_is_not_zero, divide),
    Operation::new("integer division", "//", DIVISOR_IS_ZERO, divisor_is_not_zero, integer_divide),
    Operation::new("remainder of the division", "%", DIVISOR_IS_ZERO, divisor_is_not_zero, remainder),
    Operation::new("exponentiation", "^", BAD_POWER, power_is_valid, exponentiate),
];

pub type OperationTable = AliasTable<Operation>;

impl AliasTable<Operation> {
    pub fn builtin() -> Result<Self, ConfigError> {
        AliasTable::new("operation", BUILTIN_OPERATIONS)
    }

    /// (alias, name) pairs in registration order, for the help listing.
    pub fn all_aliases(&self) -> Vec<(&'static str, &'static str)> {
        self.iter().map(|op| (op.alias, op.name)).collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::decimal::{parse_decimal, to_plain_string};

    fn run(alias: &str, a: &str, b: &str) -> Result<String, CalculationError> {
        let table = OperationTable::builtin().unwrap();
        let op = table.lookup(alias).unwrap();
        op.apply(&parse_decimal(a).unwrap(), &parse_decimal(b).unwrap(), 100)
            .map(|v| to_plain_string(&v))
    }

    #[test]
    fn builtin_table() {
        let table = OperationTable::builtin().unwrap();
        assert_eq!(
            table.all_aliases(),
            vec![
                ("+", "addition"),
                ("-", "subtraction"),
                ("*", "multiplication"),
                ("/", "division"),
                ("//", "integer division"),
                ("%", "remainder of the division"),
                ("^", "exponentiation"),
            ]
        );
        assert!(table.lookup("x").is_none());
    }

    #[test]
    fn computes() {
        let cases = [
            ("+", "0.1", "0.2", "0.3"),
            ("-", "1", "2.5", "-1.5"),
            ("*", "1.5", "1.5", "2.25"),
            ("/", "1", "8", "0.125"),
            ("//", "9", "4", "2"),
            ("%", "9", "4", "1"),
            ("^", "10", "3", "1000"),
            ("^", "0", "5", "0"),
            ("^", "5", "0", "1"),
        ];
        for (alias, a, b, expected) in cases {
            assert_eq!(run(alias, a, b), Ok(expected.to_string()), "{} {} {}", a, alias, b);
        }
    }

    #[test]
    fn division_by_zero_never_computes() {
        for alias in ["/", "//", "%"] {
            assert_eq!(run(alias, "1", "0"), Err(CalculationError::Precondition(DIVISOR_IS_ZERO)));
            assert_eq!(run(alias, "1", "0.000"), Err(CalculationError::Precondition(DIVISOR_IS_ZERO)));
        }
    }

    #[test]
    fn power_preconditions() {
        let rejected = Err(CalculationError::Precondition(BAD_POWER));
        assert_eq!(run("^", "0", "0"), rejected);
        assert_eq!(run("^", "2", "-1"), rejected);
        assert_eq!(run("^", "2", "0.5"), rejected);
        assert_eq!(run("^", "2", "1000000000"), rejected);
        assert!(run("^", "1", "999999999").is_ok());
    }

    #[test]
    fn unrepresentable_results_are_errors() {
        let out_of_range = Err(CalculationError::Arithmetic(ArithmeticError::ScaleOutOfRange));
        assert_eq!(run("*", "1e-2000000000", "1e-2000000000"), out_of_range);
        assert_eq!(run("/", "1e-2000000000", "1e2000000000"), out_of_range);
        assert_eq!(run("*", "1e-2000000000", "0"), Ok(String::from("0")));
    }

    #[test]
    fn deterministic() {
        for alias in ["+", "-", "*", "^"] {
            assert_eq!(run(alias, "3.25", "4"), run(alias, "3.25", "4"));
        }
    }
}
