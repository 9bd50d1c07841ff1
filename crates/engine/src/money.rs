use std::{
    fmt,
    iter::Sum,
    ops::{Add, Neg, Sub},
    str::FromStr,
};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Signed money amount backed by a [`Decimal`].
///
/// Every amount in the engine (income, budgets, expense amounts) goes through
/// this type so shares and sums stay exact: `5000 * 0.5` is `2500`, never
/// `2499.9999…`.
///
/// Arithmetic saturates at the `Decimal` bounds instead of panicking, since
/// amounts come straight from user input.
///
/// # Examples
///
/// ```rust
/// use engine::Money;
///
/// let amount = Money::parse_lenient("1200.5").unwrap();
/// assert_eq!(amount.to_string(), "$1200.50");
/// assert_eq!((-amount).to_string(), "-$1200.50");
/// ```
///
/// Parsing reads the leading number and ignores whatever follows it:
///
/// ```rust
/// use engine::Money;
///
/// assert_eq!(Money::parse_lenient("12abc"), Money::parse_lenient("12"));
/// assert_eq!(Money::parse_lenient("1.2.3"), Money::parse_lenient("1.2"));
/// assert!(Money::parse_lenient("-").is_none());
/// assert!(Money::parse_lenient("").is_none());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Returns the underlying decimal value.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    #[must_use]
    pub fn is_negative(self) -> bool {
        self.0.is_sign_negative() && !self.0.is_zero()
    }

    #[must_use]
    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Multiplies by a ratio (e.g. a category share), saturating on overflow.
    #[must_use]
    pub fn scale(self, ratio: Decimal) -> Self {
        Self(self.0.saturating_mul(ratio))
    }

    /// Rounds up to the next whole unit.
    #[must_use]
    pub fn ceil(self) -> Self {
        Self(self.0.ceil())
    }

    /// Parses the leading decimal number of `input`.
    ///
    /// Leading whitespace is skipped, then an optional sign, digits, an
    /// optional fractional part and an optional exponent are read. Anything
    /// after the number is ignored. Returns `None` when no digit is found or
    /// when the value does not fit a `Decimal`, whose magnitude tops out near
    /// `7.9e28`: a 30-digit integer or `"1e30"` is rejected, so income typed
    /// that way reads as `0` and an import amount with 30 digits is skipped.
    #[must_use]
    pub fn parse_lenient(input: &str) -> Option<Self> {
        let s = input.trim_start();
        let bytes = s.as_bytes();
        let mut i = 0;

        let negative = match bytes.first() {
            Some(b'-') => {
                i += 1;
                true
            }
            Some(b'+') => {
                i += 1;
                false
            }
            _ => false,
        };

        let int_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        let int_part = &s[int_start..i];

        let mut frac_part = "";
        if i < bytes.len() && bytes[i] == b'.' {
            let frac_start = i + 1;
            let mut j = frac_start;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            frac_part = &s[frac_start..j];
            i = j;
        }

        if int_part.is_empty() && frac_part.is_empty() {
            return None;
        }

        let mut exponent = None;
        if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
            let mut j = i + 1;
            if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
                j += 1;
            }
            let digits_start = j;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j > digits_start {
                exponent = Some(&s[i + 1..j]);
            }
        }

        let mut text = String::with_capacity(int_part.len() + frac_part.len() + 2);
        if negative {
            text.push('-');
        }
        text.push_str(if int_part.is_empty() { "0" } else { int_part });
        if !frac_part.is_empty() {
            text.push('.');
            text.push_str(frac_part);
        }

        let value = match exponent {
            None => Decimal::from_str(&text).ok()?,
            Some(exp) => Decimal::from_scientific(&format!("{text}e{exp}")).ok()?,
        };

        if value.is_zero() {
            return Some(Self::ZERO);
        }
        Some(Self(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self
            .0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        write!(f, "{sign}${:.2}", rounded.abs())
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<i64> for Money {
    fn from(value: i64) -> Self {
        Self(Decimal::from(value))
    }
}

impl From<i32> for Money {
    fn from(value: i32) -> Self {
        Self(Decimal::from(value))
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money(self.0.saturating_sub(rhs.0))
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, amount| acc + amount)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
