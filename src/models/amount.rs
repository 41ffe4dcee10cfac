//! Amount type for expense values
//!
//! An amount keeps the text it was written as next to its decimal value. The
//! text is what gets persisted and compared for duplicates; the decimal value
//! is what gets summed. Decimal arithmetic avoids floating-point drift in totals.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// A strictly positive expense amount
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amount {
    text: String,
    value: Decimal,
}

impl Amount {
    /// Largest accepted amount
    pub const MAX: Decimal = Decimal::MAX;

    /// Parse an amount from user or file text
    ///
    /// Accepts plain decimals ("12", "12.50", "+3") and scientific notation
    /// ("1e3"). Surrounding whitespace is dropped. Zero, negatives and
    /// non-numeric text are rejected.
    ///
    /// Positive numbers must fit a `Decimal`: at most [`Amount::MAX`] and no
    /// smaller than `1e-28`. Finite numbers outside that range are reported as
    /// out of range rather than malformed.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let text = s.trim();
        if text.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let value = match Decimal::from_str(text).or_else(|_| Decimal::from_scientific(text)) {
            Ok(value) => value,
            Err(_) => {
                return Err(match finite_value(text) {
                    Some(v) if v > 0.0 => AmountParseError::OutOfRange(text.to_string()),
                    Some(_) => AmountParseError::NotPositive(text.to_string()),
                    None => AmountParseError::InvalidFormat(text.to_string()),
                });
            }
        };

        if value <= Decimal::ZERO {
            // Positive values below 1e-28 round to zero
            if finite_value(text).is_some_and(|v| v > 0.0) {
                return Err(AmountParseError::OutOfRange(text.to_string()));
            }
            return Err(AmountParseError::NotPositive(text.to_string()));
        }

        Ok(Self {
            text: text.to_string(),
            value,
        })
    }

    /// The amount exactly as written
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// The numeric value
    pub fn value(&self) -> Decimal {
        self.value
    }
}

// Equality is on the written text so "10" and "10.0" are distinct records.
impl PartialEq for Amount {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for Amount {}

impl Hash for Amount {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Amount {
    type Error = AmountParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Amount> for String {
    fn from(amount: Amount) -> Self {
        amount.text
    }
}

/// The value of `text` as a float, if it spells a finite number
fn finite_value(text: &str) -> Option<f64> {
    let lower = text.to_ascii_lowercase();
    if lower.contains("inf") || lower.contains("nan") {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format a decimal sum with a currency symbol and two decimal places
pub fn format_money(symbol: &str, value: Decimal) -> String {
    format!(
        "{}{:.2}",
        symbol,
        value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
    NotPositive(String),
    OutOfRange(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::Empty => write!(f, "Amount is required"),
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount format: {}", s),
            AmountParseError::NotPositive(s) => {
                write!(f, "Amount must be greater than zero: {}", s)
            }
            AmountParseError::OutOfRange(s) => write!(
                f,
                "Amount out of range: {} (accepted: 1e-28 to {})",
                s,
                Amount::MAX
            ),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        let amount = Amount::parse("12.50").unwrap();
        assert_eq!(amount.as_str(), "12.50");
        assert_eq!(amount.value(), Decimal::new(1250, 2));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let amount = Amount::parse("  42 ").unwrap();
        assert_eq!(amount.as_str(), "42");
        assert_eq!(amount.value(), Decimal::from(42));
    }

    #[test]
    fn test_parse_scientific() {
        let amount = Amount::parse("1e3").unwrap();
        assert_eq!(amount.value(), Decimal::from(1000));
        assert_eq!(amount.as_str(), "1e3");
    }

    #[test]
    fn test_rejects_non_positive() {
        assert_eq!(
            Amount::parse("0"),
            Err(AmountParseError::NotPositive("0".into()))
        );
        assert_eq!(
            Amount::parse("-5"),
            Err(AmountParseError::NotPositive("-5".into()))
        );
        assert!(Amount::parse("0.00").is_err());
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(Amount::parse(""), Err(AmountParseError::Empty));
        assert!(Amount::parse("abc").is_err());
        assert!(Amount::parse("inf").is_err());
        assert!(Amount::parse("NaN").is_err());
        assert!(Amount::parse("1,000").is_err());
    }

    #[test]
    fn test_equality_uses_written_text() {
        let a = Amount::parse("10").unwrap();
        let b = Amount::parse("10.0").unwrap();
        assert_eq!(a.value(), b.value());
        assert_ne!(a, b);
        assert_eq!(a, Amount::parse("10").unwrap());
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money("₹", Decimal::from(300)), "₹300.00");
        assert_eq!(format_money("$", Decimal::new(12345, 3)), "$12.35");
    }

    #[test]
    fn test_range_boundaries() {
        let max = Amount::parse("79228162514264337593543950335").unwrap();
        assert_eq!(max.value(), Amount::MAX);
        assert_eq!(
            Amount::parse("0.0000000000000000000000000001").unwrap().value(),
            Decimal::new(1, 28)
        );

        for text in [
            "1e29",
            "79228162514264337593543950336",
            "1e-30",
            "0.0000000000000000000000000000001",
        ] {
            assert_eq!(
                Amount::parse(text),
                Err(AmountParseError::OutOfRange(text.into())),
                "{}",
                text
            );
        }
        assert!(Amount::parse("1e29")
            .unwrap_err()
            .to_string()
            .starts_with("Amount out of range"));

        assert_eq!(
            Amount::parse("-1e29"),
            Err(AmountParseError::NotPositive("-1e29".into()))
        );
        assert_eq!(
            Amount::parse("1e400"),
            Err(AmountParseError::InvalidFormat("1e400".into()))
        );
    }
}
