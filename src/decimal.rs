// Arbitrary-precision helpers on top of `BigDecimal`.
// Everything here is exact except `divide`, which rounds quotients that do not terminate.
// No floating point is used anywhere, so there is no approximation boundary beyond that rounding.

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::{ToPrimitive, Zero};
use std::str::FromStr;

use crate::error::{ArithmeticError, ParseError};

/// Largest exponent accepted by `^`.
pub const MAX_EXPONENT: u32 = 999_999_999;

// Literals and results whose scale does not fit this range are refused; their plain rendering would not fit in memory.
const MAX_SCALE: u64 = i32::MAX as u64;

pub fn parse_decimal(input: &str) -> Result<BigDecimal, ParseError> {
    let value = BigDecimal::from_str(input.trim())?;
    let (_, scale) = value.as_bigint_and_exponent();
    if scale.unsigned_abs() > MAX_SCALE {
        return Err(ParseError::ScaleOutOfRange(scale));
    }
    Ok(value)
}

pub fn within_scale(value: BigDecimal) -> Result<BigDecimal, ArithmeticError> {
    let (_, scale) = value.as_bigint_and_exponent();
    if scale.unsigned_abs() > MAX_SCALE {
        return Err(ArithmeticError::ScaleOutOfRange);
    }
    Ok(value)
}

// Quotient rounded half-to-even to `precision` significant digits; terminating quotients shorter than that are exact.
pub fn divide(a: &BigDecimal, b: &BigDecimal, precision: u64) -> BigDecimal {
    (a / b).with_prec(precision).normalized()
}

// Brings both operands to a common scale so that their unscaled integers can be divided exactly.
fn aligned(a: &BigDecimal, b: &BigDecimal) -> (BigInt, BigInt, i64) {
    let (_, a_scale) = a.as_bigint_and_exponent();
    let (_, b_scale) = b.as_bigint_and_exponent();
    let scale = a_scale.max(b_scale);
    let (a_digits, _) = a.with_scale(scale).into_bigint_and_exponent();
    let (b_digits, _) = b.with_scale(scale).into_bigint_and_exponent();
    (a_digits, b_digits, scale)
}

/// Integral part of `a / b`, truncated toward zero.
pub fn integer_quotient(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    let (a_digits, b_digits, _) = aligned(a, b);
    BigDecimal::new(a_digits / b_digits, 0)
}

/// `a - integer_quotient(a, b) * b`; carries the sign of `a`.
pub fn remainder(a: &BigDecimal, b: &BigDecimal) -> BigDecimal {
    let (a_digits, b_digits, scale) = aligned(a, b);
    BigDecimal::new(a_digits % b_digits, scale)
}

pub fn can_be_exponent(value: &BigDecimal) -> bool {
    value.is_integer() && *value >= BigDecimal::zero() && *value <= BigDecimal::from(MAX_EXPONENT)
}

pub fn pow(base: &BigDecimal, exponent: &BigDecimal) -> Result<BigDecimal, ArithmeticError> {
    if !exponent.is_integer() {
        return Err(ArithmeticError::PowerOutOfRange);
    }
    let exponent = exponent
        .to_u32()
        .filter(|e| *e <= MAX_EXPONENT)
        .ok_or(ArithmeticError::PowerOutOfRange)?;
    let (digits, scale) = base.normalized().into_bigint_and_exponent();
    let scale = scale
        .checked_mul(i64::from(exponent))
        .ok_or(ArithmeticError::PowerOutOfRange)?;
    // Checked before raising the digits, which is the expensive part
    if scale.unsigned_abs() > MAX_SCALE {
        return Err(ArithmeticError::ScaleOutOfRange);
    }
    Ok(BigDecimal::new(digits.pow(exponent), scale))
}

/// Renders without trailing fractional zeros and never in exponential notation.
pub fn to_plain_string(value: &BigDecimal) -> String {
    let (digits, scale) = value.normalized().into_bigint_and_exponent();
    if digits.is_zero() {
        return String::from("0");
    }
    let magnitude = digits.magnitude().to_string();
    let mut out = String::with_capacity(magnitude.len() + 2);
    if digits.sign() == Sign::Minus {
        out.push('-');
    }
    if scale <= 0 {
        out.push_str(&magnitude);
        out.push_str(&"0".repeat(scale.unsigned_abs() as usize));
    } else {
        let scale = scale as usize;
        if magnitude.len() > scale {
            let (int_part, frac_part) = magnitude.split_at(magnitude.len() - scale);
            out.push_str(int_part);
            out.push('.');
            out.push_str(frac_part);
        } else {
            out.push_str("0.");
            out.push_str(&"0".repeat(scale - magnitude.len()));
            out.push_str(&magnitude);
        }
    }
    out
}

#[cfg(test)]
mod test {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        parse_decimal(s).unwrap()
    }

    #[test]
    fn plain_formatting() {
        let cases = [
            ("1.50", "1.5"),
            ("2.00", "2"),
            ("0", "0"),
            ("0.000", "0"),
            ("-0.5", "-0.5"),
            ("1e3", "1000"),
            ("1E-3", "0.001"),
            ("-12.3400", "-12.34"),
            ("1200", "1200"),
            ("123456789012345678901234567890.5", "123456789012345678901234567890.5"),
        ];
        for (input, expected) in cases {
            assert_eq!(to_plain_string(&dec(input)), expected, "formatting {}", input);
        }
    }

    #[test]
    fn parsing() {
        assert!(parse_decimal("2.5E-2").is_ok());
        assert!(parse_decimal(" 7 ").is_ok());
        assert!(parse_decimal("-3").is_ok());
        assert!(parse_decimal("").is_err());
        assert!(parse_decimal("abc").is_err());
        assert!(parse_decimal("1.2.3").is_err());
        assert!(parse_decimal("1e99999999999").is_err());
    }

    #[test]
    fn integer_division_truncates() {
        assert_eq!(to_plain_string(&integer_quotient(&dec("7"), &dec("2"))), "3");
        assert_eq!(to_plain_string(&integer_quotient(&dec("-7"), &dec("2"))), "-3");
        assert_eq!(to_plain_string(&integer_quotient(&dec("7.5"), &dec("0.2"))), "37");
        assert_eq!(to_plain_string(&integer_quotient(&dec("1e3"), &dec("7"))), "142");
    }

    #[test]
    fn remainder_follows_dividend() {
        assert_eq!(to_plain_string(&remainder(&dec("7"), &dec("2"))), "1");
        assert_eq!(to_plain_string(&remainder(&dec("-7"), &dec("2"))), "-1");
        assert_eq!(to_plain_string(&remainder(&dec("7"), &dec("-2"))), "1");
        assert_eq!(to_plain_string(&remainder(&dec("7.5"), &dec("2"))), "1.5");
        assert_eq!(to_plain_string(&remainder(&dec("7.5"), &dec("0.2"))), "0.1");
    }

    #[test]
    fn division_precision() {
        assert_eq!(to_plain_string(&divide(&dec("1"), &dec("4"), 100)), "0.25");
        assert_eq!(to_plain_string(&divide(&dec("1"), &dec("3"), 5)), "0.33333");
        assert_eq!(to_plain_string(&divide(&dec("2"), &dec("3"), 5)), "0.66667");
        assert_eq!(to_plain_string(&divide(&dec("10"), &dec("4"), 100)), "2.5");
    }

    #[test]
    fn exponent_bounds() {
        assert!(can_be_exponent(&dec("0")));
        assert!(can_be_exponent(&dec("999999999")));
        assert!(can_be_exponent(&dec("2.000")));
        assert!(!can_be_exponent(&dec("1000000000")));
        assert!(!can_be_exponent(&dec("-1")));
        assert!(!can_be_exponent(&dec("0.5")));
    }

    #[test]
    fn powers() {
        assert_eq!(to_plain_string(&pow(&dec("2"), &dec("10")).unwrap()), "1024");
        assert_eq!(to_plain_string(&pow(&dec("1.5"), &dec("2")).unwrap()), "2.25");
        assert_eq!(to_plain_string(&pow(&dec("-2"), &dec("3")).unwrap()), "-8");
        assert_eq!(to_plain_string(&pow(&dec("7"), &dec("0")).unwrap()), "1");
        assert_eq!(to_plain_string(&pow(&dec("1e2"), &dec("2")).unwrap()), "10000");
        assert_eq!(pow(&dec("2"), &dec("0.5")), Err(ArithmeticError::PowerOutOfRange));
        assert_eq!(pow(&dec("2"), &dec("1e10")), Err(ArithmeticError::PowerOutOfRange));
    }

    #[test]
    fn powers_with_unrepresentable_scale() {
        let tiny = pow(&dec("0.1"), &dec("999999999")).unwrap();
        assert_eq!(pow(&tiny, &dec("999999999")), Err(ArithmeticError::ScaleOutOfRange));
        assert_eq!(pow(&dec("1e9"), &dec("999999999")), Err(ArithmeticError::ScaleOutOfRange));
    }

    #[test]
    fn scale_bounds() {
        assert!(within_scale(dec("1e-2000000000")).is_ok());
        let product = dec("1e-2000000000") * dec("1e-2000000000");
        assert_eq!(within_scale(product), Err(ArithmeticError::ScaleOutOfRange));
        let product = dec("1e2000000000") * dec("1e2000000000");
        assert_eq!(within_scale(product), Err(ArithmeticError::ScaleOutOfRange));
    }
}
