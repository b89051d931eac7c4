use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Maximum number of records the menu store will hold.
pub const MAX_MENU_ITEMS: usize = 30;

/// Sales tax applied once at checkout, in whole percent.
pub const TAX_RATE_PERCENT: i64 = 7;

/// Field separator used by the menu and credentials files.
pub const FIELD_DELIMITER: char = ';';

/// A monetary amount in whole cents.
///
/// Prices live in the menu file as raw text and are only parsed into
/// `Money` when an order needs them. Keeping cents as an integer makes
/// the tax and display rounding deterministic: tax is rounded half-up
/// to the nearest cent, display is always two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    pub fn cents(self) -> i64 {
        self.0
    }

    pub fn add(self, other: Money) -> Money {
        Money(self.0 + other.0)
    }

    /// Amount plus sales tax, tax rounded half-up to the nearest cent.
    pub fn with_tax(self) -> Money {
        let tax = (self.0 * TAX_RATE_PERCENT + 50) / 100;
        Money(self.0 + tax)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl FromStr for Money {
    type Err = ValidationError;

    /// Accepts plain decimal text: `"4"`, `"4.5"`, `"4.50"`, `".50"`.
    /// Anything else (signs, currency symbols, more than two fraction
    /// digits) is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ValidationError::InvalidPrice { raw: s.to_string() };

        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(invalid());
        }
        if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }
        if frac.len() > 2 {
            return Err(invalid());
        }

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<i64>()
                .ok()
                .and_then(|w| w.checked_mul(100))
                .ok_or_else(invalid)?
        };
        let frac_cents = match frac.len() {
            0 => 0,
            1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => frac.parse::<i64>().map_err(|_| invalid())?,
        };
        whole_cents
            .checked_add(frac_cents)
            .map(Money)
            .ok_or_else(invalid)
    }
}

/// One menu entry as stored in the backing file.
///
/// The price field stays raw text until order time; the editor does not
/// validate it numerically. Identity is positional: items have no stable
/// id, and removing one shifts every later 1-based position down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub category: String,
    pub name: String,
    pub price: String,
    pub description: String,
}

impl MenuItem {
    pub fn new(
        category: impl Into<String>,
        name: impl Into<String>,
        price: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            name: name.into(),
            price: price.into(),
            description: description.into(),
        }
    }

    /// Serializes as `category;name;price;description`. Fields must not
    /// contain the delimiter; the format has no escaping.
    pub fn to_record(&self) -> String {
        format!(
            "{}{d}{}{d}{}{d}{}",
            self.category,
            self.name,
            self.price,
            self.description,
            d = FIELD_DELIMITER
        )
    }

    /// Splits a record line into the four fields. A line with fewer than
    /// three delimiters fills the remainder with empty fields; no
    /// per-line validation is performed.
    pub fn from_record(line: &str) -> Self {
        let mut fields = line.splitn(4, FIELD_DELIMITER);
        Self {
            category: fields.next().unwrap_or("").to_string(),
            name: fields.next().unwrap_or("").to_string(),
            price: fields.next().unwrap_or("").to_string(),
            description: fields.next().unwrap_or("").to_string(),
        }
    }

    /// Parses the stored price text into an amount.
    pub fn unit_price(&self) -> Result<Money, ValidationError> {
        self.price.parse()
    }
}
