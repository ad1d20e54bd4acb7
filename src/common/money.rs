use bigdecimal::{BigDecimal, ParseBigDecimalError};
use num_traits::ToPrimitive;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// Minor units per currency unit (4 decimal places).
const SCALE: i64 = 10_000;

#[derive(Debug, Clone, Copy, Default)]
/// A monetary amount stored as a whole number of minor units (1/10 000 of a
/// currency unit).
///
/// Balances and transaction amounts never touch floating point: input is
/// parsed through `BigDecimal`, rounded to four places and kept as `i64`.
///
/// # Examples
/// ```
/// use account_ledger::common::money::Money;
///
/// let amount: Money = "12.5".parse().unwrap();
/// assert_eq!(amount.minor_units(), 125_000);
/// assert_eq!(amount.to_string(), "12.5000");
/// assert!(amount.is_positive());
/// ```
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_minor(units: i64) -> Self {
        Self(units)
    }

    /// Whole currency units, e.g. `Money::from_units(500)` is `500.0000`.
    ///
    /// # Panics
    ///
    /// If `units` does not fit once scaled to minor units; see
    /// [`Money::checked_from_units`] for the non-panicking form.
    pub fn from_units(units: i64) -> Self {
        match Self::checked_from_units(units) {
            Some(m) => m,
            None => panic!("{units} currency units overflow Money"),
        }
    }

    pub fn checked_from_units(units: i64) -> Option<Self> {
        units.checked_mul(SCALE).map(Money)
    }

    pub fn minor_units(&self) -> i64 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money)
    }

    fn to_decimal(self) -> BigDecimal {
        BigDecimal::from(self.0) / BigDecimal::from(SCALE)
    }
}

impl std::str::FromStr for Money {
    type Err = ParseBigDecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().trim_start_matches('$');
        if t.is_empty() {
            return Err(ParseBigDecimalError::Other("empty amount".into()));
        }

        let bd: BigDecimal = t.parse()?;

        let scaled = (bd * BigDecimal::from(SCALE)).round(0);
        let value = scaled
            .to_i64()
            .ok_or_else(|| ParseBigDecimalError::Other("amount overflow".into()))?;

        Ok(Money(value))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.to_decimal())
    }
}

impl PartialEq for Money {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl Eq for Money {}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        *self = *self - rhs;
    }
}
