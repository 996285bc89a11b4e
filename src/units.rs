//! Denomination conversion over arbitrary-precision amounts.
//!
//! The unit table comes from ethjs-unit and maps each denomination name to
//! its scale factor in wei, as a base-10 string. Names are case-sensitive
//! and several alias the same scale (`kwei`/`Kwei`/`babbage`/`femtoether`
//! all mean 1000). The table is a process-wide constant and is never
//! mutated, so every function here is safe to call from any thread.

use std::fmt;
use std::str::FromStr;

use alloy::primitives::U256;
use bigdecimal::{BigDecimal, ToPrimitive};
use num_bigint::BigInt;
use num_traits::Zero;

use crate::errors::Error;
use crate::hex::{is_hex_prefixed, strip_hex_prefix};

/// Denomination name to wei scale factor, as base-10 strings.
pub const UNITS: &[(&str, &str)] = &[
    ("noether", "0"),
    ("wei", "1"),
    ("kwei", "1000"),
    ("Kwei", "1000"),
    ("babbage", "1000"),
    ("femtoether", "1000"),
    ("mwei", "1000000"),
    ("Mwei", "1000000"),
    ("lovelace", "1000000"),
    ("picoether", "1000000"),
    ("gwei", "1000000000"),
    ("Gwei", "1000000000"),
    ("shannon", "1000000000"),
    ("nanoether", "1000000000"),
    ("nano", "1000000000"),
    ("szabo", "1000000000000"),
    ("microether", "1000000000000"),
    ("micro", "1000000000000"),
    ("finney", "1000000000000000"),
    ("milliether", "1000000000000000"),
    ("milli", "1000000000000000"),
    ("ether", "1000000000000000000"),
    ("kether", "1000000000000000000000"),
    ("grand", "1000000000000000000000"),
    ("mether", "1000000000000000000000000"),
    ("gether", "1000000000000000000000000000"),
    ("tether", "1000000000000000000000000000000"),
];

/// Looks a unit up verbatim; no normalization is applied.
fn unit_scale(unit: &str) -> Result<&'static str, Error> {
    UNITS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, scale)| *scale)
        .ok_or_else(|| Error::UnsupportedUnit(unit.to_string()))
}

/// An immutable arbitrary-precision integer quantity in base units (wei).
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Amount(BigInt);

impl Amount {
    /// Parses a base-10 integer string, with an optional leading sign.
    pub fn from_decimal_str(value: &str) -> Result<Self, Error> {
        BigInt::parse_bytes(value.as_bytes(), 10)
            .map(Self)
            .ok_or_else(|| Error::DecodeError(format!("'{value}' is not a base-10 integer")))
    }

    /// Parses a base-16 integer string, stripping at most one leading `0x`.
    pub fn from_hex_str(value: &str) -> Result<Self, Error> {
        let digits = strip_hex_prefix(value);
        BigInt::parse_bytes(digits.as_bytes(), 16)
            .map(Self)
            .ok_or_else(|| Error::DecodeError(format!("'{value}' is not a base-16 integer")))
    }

    /// Multiplies two amounts. Exact; never overflows.
    pub fn multiply(&self, other: &Amount) -> Amount {
        Amount(&self.0 * &other.0)
    }

    /// Divides by `divisor`, returning quotient and remainder. Division
    /// truncates toward zero and the remainder keeps the sign of the
    /// dividend. A zero divisor fails with `InvalidArgument`.
    pub fn div_rem(&self, divisor: &Amount) -> Result<(Amount, Amount), Error> {
        if divisor.0.is_zero() {
            return Err(Error::InvalidArgument("division by zero".to_string()));
        }
        Ok((Amount(&self.0 / &divisor.0), Amount(&self.0 % &divisor.0)))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<BigInt> for Amount {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

macro_rules! amount_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Amount {
            fn from(value: $t) -> Self {
                Self(BigInt::from(value))
            }
        })*
    };
}
amount_from_int!(i32, u32, i64, u64, i128, u128);

/// Polymorphic numeric input: an already-built [`Amount`], a native
/// integer, or text that is parsed by [`to_amount`]'s base-detection rule.
#[derive(Clone, Debug)]
pub enum Numeric {
    Amount(Amount),
    Int(i128),
    Text(String),
}

impl From<Amount> for Numeric {
    fn from(value: Amount) -> Self {
        Self::Amount(value)
    }
}

impl From<BigInt> for Numeric {
    fn from(value: BigInt) -> Self {
        Self::Amount(Amount(value))
    }
}

impl From<&str> for Numeric {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Numeric {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

macro_rules! numeric_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Numeric {
            fn from(value: $t) -> Self {
                Self::Int(value.into())
            }
        })*
    };
}
numeric_from_int!(i32, u32, i64, u64, i128);

/// Optional sign followed by ASCII digits only.
fn is_decimal(value: &str) -> bool {
    let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Converts a polymorphic number into an [`Amount`].
///
/// Decimal-looking text parses base-10. Other text is lowercased and
/// parses base-16 when it carries the `0x` marker or contains any of the
/// hex letters `a`-`f`, otherwise base-10. Parse failures surface as
/// `DecodeError`.
pub fn to_amount(number: impl Into<Numeric>) -> Result<Amount, Error> {
    match number.into() {
        Numeric::Amount(amount) => Ok(amount),
        Numeric::Int(value) => Ok(Amount::from(value)),
        Numeric::Text(text) => {
            if is_decimal(&text) {
                return Amount::from_decimal_str(&text);
            }
            let lowered = text.to_lowercase();
            if is_hex_prefixed(&lowered) || lowered.bytes().any(|b| matches!(b, b'a'..=b'f')) {
                Amount::from_hex_str(&lowered)
            } else {
                Amount::from_decimal_str(&lowered)
            }
        }
    }
}

/// Converts a number in the given unit into base units (wei).
/// Exact arbitrary-precision multiplication; unknown unit names fail with
/// `UnsupportedUnit`.
pub fn to_base_unit(number: impl Into<Numeric>, unit: &str) -> Result<Amount, Error> {
    let scale = Amount::from_decimal_str(unit_scale(unit)?)?;
    Ok(to_amount(number)?.multiply(&scale))
}

/// Converts a number of base units (wei) into the given unit, returning
/// quotient and remainder. Dividing by the zero-scale `noether` unit fails
/// with `InvalidArgument`.
pub fn from_base_unit(
    number: impl Into<Numeric>,
    unit: &str,
) -> Result<(Amount, Amount), Error> {
    let scale = Amount::from_decimal_str(unit_scale(unit)?)?;
    to_amount(number)?.div_rem(&scale)
}

/// Converts a number in the given unit into ether, returning quotient and
/// remainder. Converting from `ether` itself is disallowed; use another
/// unit.
pub fn to_ether(number: impl Into<Numeric>, unit: &str) -> Result<(Amount, Amount), Error> {
    if unit == "ether" {
        return Err(Error::InvalidArgument("please use another unit".to_string()));
    }
    let wei = to_base_unit(number, unit)?;
    let scale = Amount::from_decimal_str(unit_scale("ether")?)?;
    wei.div_rem(&scale)
}

/// Converts an ETH amount to wei as a `U256`.
/// Accepts a `BigDecimal` ETH value, for preparing values for transactions.
/// Returns an error if the value is too large to fit in a `u128`.
pub fn eth_to_wei(eth: BigDecimal) -> Result<U256, Error> {
    let wei = (eth * BigDecimal::from(1_000_000_000_000_000_000u128))
        .to_u128()
        .ok_or_else(|| Error::InvalidArgument("value too large".to_string()))?;
    Ok(U256::from(wei))
}

/// Converts a wei amount (`U256`) to ETH as a `BigDecimal`.
/// Useful for displaying human-readable ETH values from raw wei amounts.
pub fn wei_to_eth(wei: U256) -> BigDecimal {
    // U256 always prints as a plain decimal integer.
    BigDecimal::from_str(&wei.to_string()).unwrap_or_default()
        / BigDecimal::from(1_000_000_000_000_000_000u128)
}
