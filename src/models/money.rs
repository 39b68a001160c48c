//! Money type for representing currency amounts
//!
//! Internally stores amounts in cents (i64) to avoid floating-point precision
//! issues. Expense payloads carry decimal numbers (`12.5`), so the
//! [`as_decimal`] serde adapter converts at the record boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// Represents a monetary amount stored as cents (hundredths of the currency unit)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from cents
    ///
    /// # Examples
    /// ```
    /// use spendwise::models::Money;
    /// let amount = Money::from_cents(1050); // $10.50
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Largest amount a single expense may carry ($1,000,000,000.00)
    ///
    /// Keeps any realistic number of records summable in an i64.
    pub const MAX_EXPENSE: Money = Money(100_000_000_000);

    /// Create a Money amount from a decimal value, rounding to the nearest cent
    ///
    /// Returns `None` for NaN, infinities and values outside the i64 cent range.
    pub fn from_decimal(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let cents = (value * 100.0).round();
        if cents < i64::MIN as f64 || cents > i64::MAX as f64 {
            return None;
        }
        Some(Self(cents as i64))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in cents
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Get the whole dollars portion (truncated toward zero)
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Get the cents portion (0-99)
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// The amount as a decimal number of currency units
    pub fn to_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "$10.50", "10", "10.5"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        let s = s.strip_prefix('$').unwrap_or(s);
        let invalid = || MoneyParseError::InvalidFormat(s.to_string());

        let digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
        if (whole.is_empty() && frac.is_empty()) || !digits(whole) || !digits(frac) {
            return Err(invalid());
        }

        let dollars: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().map_err(|_| invalid())?
        };

        // Two fraction digits are kept; the third rounds half up, as
        // `from_decimal` does for JSON numbers
        let frac = frac.as_bytes();
        let digit = |i: usize| frac.get(i).map_or(0, |b| i64::from(b - b'0'));
        let mut cents = digit(0) * 10 + digit(1);
        if digit(2) >= 5 {
            cents += 1;
        }

        let cents = dollars
            .checked_mul(100)
            .and_then(|c| c.checked_add(cents))
            .ok_or_else(invalid)?;

        Ok(Self(if negative { -cents } else { cents }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.dollars().abs(),
                self.cents_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.dollars(), self.cents_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

impl<'a> std::iter::Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

/// Serde adapter storing [`Money`] as a decimal JSON number.
///
/// Deserialization accepts a number (`12.5`) or a numeric string (`"12.50"`).
pub mod as_decimal {
    use super::Money;
    use serde::de::{self, Deserializer};
    use serde::{Deserialize, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DecimalRepr {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S: Serializer>(money: &Money, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(money.to_decimal())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Money, D::Error> {
        match DecimalRepr::deserialize(deserializer)? {
            DecimalRepr::Number(value) => Money::from_decimal(value)
                .ok_or_else(|| de::Error::custom(format!("amount out of range: {}", value))),
            DecimalRepr::Text(text) => Money::parse(&text).map_err(de::Error::custom),
        }
    }
}

/// Same as [`as_decimal`] for optional amounts; `null` maps to `None`.
pub mod as_optional_decimal {
    use super::Money;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(transparent)]
    struct Wrapped(#[serde(with = "super::as_decimal")] Money);

    pub fn serialize<S: Serializer>(money: &Option<Money>, serializer: S) -> Result<S::Ok, S::Error> {
        money.map(Wrapped).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Money>, D::Error> {
        Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|w| w.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let m = Money::from_cents(1050);
        assert_eq!(m.cents(), 1050);
        assert_eq!(m.dollars(), 10);
        assert_eq!(m.cents_part(), 50);
    }

    #[test]
    fn test_from_decimal_rounds_to_cents() {
        assert_eq!(Money::from_decimal(12.5).unwrap().cents(), 1250);
        assert_eq!(Money::from_decimal(0.1 + 0.2).unwrap().cents(), 30);
        assert_eq!(Money::from_decimal(19.999).unwrap().cents(), 2000);
        assert!(Money::from_decimal(f64::NAN).is_none());
        assert!(Money::from_decimal(f64::INFINITY).is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1050)), "$10.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
        assert_eq!(format!("{}", Money::from_cents(-1050)), "-$10.50");
        assert_eq!(format!("{}", Money::from_cents(5)), "$0.05");
        assert_eq!(Money::from_cents(250).format_with_symbol("€"), "€2.50");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("$10.50").unwrap().cents(), 1050);
        assert_eq!(Money::parse("-10.50").unwrap().cents(), -1050);
        assert_eq!(Money::parse("10").unwrap().cents(), 1000);
        assert_eq!(Money::parse("10.5").unwrap().cents(), 1050);
        assert_eq!(Money::parse("0.05").unwrap().cents(), 5);
        assert_eq!(Money::parse(".75").unwrap().cents(), 75);
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("1.x").is_err());
        assert!(Money::parse("--5").is_err());
        assert!(Money::parse("+5").is_err());
        assert!(Money::parse(".").is_err());
        assert!(Money::parse("").is_err());
    }

    #[test]
    fn test_parse_rounds_third_digit() {
        assert_eq!(Money::parse("1.999").unwrap().cents(), 200);
        assert_eq!(Money::parse("1.994").unwrap().cents(), 199);
        assert_eq!(Money::parse("1.9951").unwrap().cents(), 200);
        assert_eq!(Money::parse("-2.126").unwrap().cents(), -213);
    }

    #[test]
    fn test_parse_overflow_is_an_error() {
        assert!(Money::parse("92233720368547759").is_err());
        assert!(Money::parse("92233720368547758.07").is_err());
        assert!(Money::parse("99999999999999999999").is_err());
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_cents(i64::MAX - 1);
        assert_eq!((big + Money::from_cents(5)).cents(), i64::MAX);

        let mut total = big;
        total += big;
        assert_eq!(total.cents(), i64::MAX);

        assert_eq!((Money::from_cents(i64::MIN) - Money::from_cents(1)).cents(), i64::MIN);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![
            Money::from_cents(100),
            Money::from_cents(200),
            Money::from_cents(300),
        ];
        let by_ref: Money = amounts.iter().sum();
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.cents(), 600);
        assert_eq!(by_ref, total);
    }

    #[test]
    fn test_decimal_adapter() {
        #[derive(Serialize, Deserialize)]
        struct Row {
            #[serde(with = "as_decimal")]
            amount: Money,
        }

        let row: Row = serde_json::from_str(r#"{"amount": 12.5}"#).unwrap();
        assert_eq!(row.amount.cents(), 1250);

        let row: Row = serde_json::from_str(r#"{"amount": "7.25"}"#).unwrap();
        assert_eq!(row.amount.cents(), 725);

        // Number and string encodings of the same amount agree
        let number: Row = serde_json::from_str(r#"{"amount": 1.999}"#).unwrap();
        let text: Row = serde_json::from_str(r#"{"amount": "1.999"}"#).unwrap();
        assert_eq!(number.amount.cents(), 200);
        assert_eq!(text.amount, number.amount);

        assert!(serde_json::from_str::<Row>(r#"{"amount": "lots"}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"amount": true}"#).is_err());

        let json = serde_json::to_string(&Row {
            amount: Money::from_cents(1999),
        })
        .unwrap();
        assert_eq!(json, r#"{"amount":19.99}"#);
    }

    #[test]
    fn test_optional_decimal_adapter() {
        #[derive(Serialize, Deserialize)]
        struct Profile {
            #[serde(default, with = "as_optional_decimal")]
            budget: Option<Money>,
        }

        let p: Profile = serde_json::from_str(r#"{"budget": 2000}"#).unwrap();
        assert_eq!(p.budget, Some(Money::from_cents(200000)));

        let p: Profile = serde_json::from_str(r#"{"budget": null}"#).unwrap();
        assert_eq!(p.budget, None);

        let p: Profile = serde_json::from_str("{}").unwrap();
        assert_eq!(p.budget, None);
    }
}
