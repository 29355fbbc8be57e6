//! Fixed-point monetary amounts.

use core::fmt;
use core::iter::Sum;
use core::ops::Add;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

const CENTS_PER_UNIT: i64 = 100;

/// Price in smallest currency unit (cents).
///
/// Negative amounts are representable; nothing in the menu model rejects
/// them. Equality is exact integer comparison.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let per_unit = CENTS_PER_UNIT as u64;
        write!(f, "{sign}{}.{:02}", abs / per_unit, abs % per_unit)
    }
}

/// Parses decimal text such as `"1.5"`, `"2"`, `"-0.25"`.
///
/// At most two fractional digits are accepted; anything finer cannot be
/// represented without rounding and is rejected.
impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };

        let (units, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());

        if units.is_empty() || !all_digits(units) {
            return Err(DomainError::invalid_price(format!("{s:?}: expected digits")));
        }
        if unsigned.contains('.') && (fraction.is_empty() || !all_digits(fraction)) {
            return Err(DomainError::invalid_price(format!(
                "{s:?}: expected digits after decimal point"
            )));
        }
        if fraction.len() > 2 {
            return Err(DomainError::invalid_price(format!(
                "{s:?}: more than two fractional digits"
            )));
        }

        let overflow = || DomainError::invalid_price(format!("{s:?}: out of range"));
        let units: i64 = units.parse().map_err(|_| overflow())?;
        let fraction_cents: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| overflow())? * 10,
            _ => fraction.parse::<i64>().map_err(|_| overflow())?,
        };

        let cents = units
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|c| c.checked_add(fraction_cents))
            .ok_or_else(overflow)?;

        Ok(Self(if negative { -cents } else { cents }))
    }
}

impl Add for Price {
    type Output = Price;

    /// Saturates at the `i64` bounds instead of overflowing.
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!("2".parse::<Price>().unwrap(), Price::from_cents(200));
        assert_eq!("1.5".parse::<Price>().unwrap(), Price::from_cents(150));
        assert_eq!("1.05".parse::<Price>().unwrap(), Price::from_cents(105));
        assert_eq!(" 0.99 ".parse::<Price>().unwrap(), Price::from_cents(99));
        assert_eq!("+3.10".parse::<Price>().unwrap(), Price::from_cents(310));
    }

    #[test]
    fn parses_negative_amounts() {
        assert_eq!("-0.25".parse::<Price>().unwrap(), Price::from_cents(-25));
        assert_eq!("-4".parse::<Price>().unwrap(), Price::from_cents(-400));
    }

    #[test]
    fn rejects_unrepresentable_input() {
        for input in ["", "-", "abc", "1.", ".5", "1.234", "1,5", "1.5x", "--1", "99999999999999999999"] {
            let err = input.parse::<Price>().unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidPrice(_)),
                "expected InvalidPrice for {input:?}, got {err:?}"
            );
        }
    }

    #[test]
    fn displays_two_fractional_digits() {
        assert_eq!(Price::from_cents(850).to_string(), "8.50");
        assert_eq!(Price::from_cents(200).to_string(), "2.00");
        assert_eq!(Price::from_cents(7).to_string(), "0.07");
        assert_eq!(Price::from_cents(-25).to_string(), "-0.25");
        assert_eq!(Price::ZERO.to_string(), "0.00");
    }

    #[test]
    fn sums_owned_and_borrowed() {
        let prices = [Price::from_cents(150), Price::from_cents(200)];
        let by_ref: Price = prices.iter().sum();
        let owned: Price = prices.into_iter().sum();
        assert_eq!(by_ref, Price::from_cents(350));
        assert_eq!(owned, by_ref);

        let empty: [Price; 0] = [];
        assert_eq!(empty.iter().sum::<Price>(), Price::ZERO);
    }

    #[test]
    fn sums_saturate_instead_of_overflowing() {
        let max = Price::from_cents(i64::MAX);
        let min = Price::from_cents(i64::MIN);

        assert_eq!(max + Price::from_cents(1), max);
        assert_eq!(min + Price::from_cents(-1), min);
        assert_eq!([max, max, Price::from_cents(1)].iter().sum::<Price>(), max);
    }

    #[test]
    fn decimal_sums_are_exact() {
        // 0.1 + 0.2 drifts in binary floating point; cents do not.
        let total: Price = ["0.1", "0.2"]
            .iter()
            .map(|s| s.parse::<Price>().unwrap())
            .sum();
        assert_eq!(total, "0.3".parse::<Price>().unwrap());
    }

    #[test]
    fn serializes_as_plain_cents() {
        let json = serde_json::to_string(&Price::from_cents(350)).unwrap();
        assert_eq!(json, "350");
        let back: Price = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Price::from_cents(350));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: Display output parses back to the same amount.
            #[test]
            fn display_parses_back(cents in -1_000_000_000i64..1_000_000_000i64) {
                let price = Price::from_cents(cents);
                let parsed: Price = price.to_string().parse().unwrap();
                prop_assert_eq!(parsed, price);
            }

            /// Property: Sum equals the integer sum of the cents.
            #[test]
            fn sum_matches_cents(cents in prop::collection::vec(-100_000i64..100_000i64, 0..20)) {
                let total: Price = cents.iter().copied().map(Price::from_cents).sum();
                prop_assert_eq!(total.cents(), cents.iter().sum::<i64>());
            }
        }
    }
}
