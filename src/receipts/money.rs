//! Exact monetary parsing on integer cents.
//!
//! Every amount on a receipt flows through [`parse_amount`] before any rule
//! evaluates it. Keeping amounts in integer cents means the round-dollar and
//! quarter-multiple checks are exact modulo operations instead of
//! floating-point comparisons that misfire on values like `0.1 + 0.2`.

use std::fmt;

/// Monetary amount in integer cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cents(i64);

impl Cents {
    pub const fn new(cents: i64) -> Self {
        Cents(cents)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    /// Whole-dollar amount strictly greater than zero.
    pub const fn is_round_dollar(self) -> bool {
        self.0 > 0 && self.0 % 100 == 0
    }

    /// Exact multiple of 25 cents.
    pub const fn is_quarter_multiple(self) -> bool {
        self.0 % 25 == 0
    }
}

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Largest accepted amount, in cents: $10,000,000.00.
///
/// Keeps every downstream rule computation comfortably inside `i64` and
/// `u32`; no plausible purchase receipt comes anywhere near it.
pub const MAX_AMOUNT_CENTS: i64 = 1_000_000_000;

/// Rejections produced while parsing an amount string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("expected a non-negative decimal with exactly two fraction digits")]
    Format,
    #[error("amount exceeds the supported maximum of 10000000.00")]
    Overflow,
}

/// Parses a decimal amount string into cents.
///
/// The accepted grammar is `digits '.' digit digit` with no sign and no
/// separators, so `"35.35"` parses and `"35.5"`, `"-1.00"`, and `".50"`
/// do not. Amounts above [`MAX_AMOUNT_CENTS`] are rejected.
pub fn parse_amount(raw: &str) -> Result<Cents, AmountError> {
    let raw = raw.trim();
    let (dollars, cents) = raw.split_once('.').ok_or(AmountError::Format)?;

    if dollars.is_empty()
        || cents.len() != 2
        || !dollars.bytes().all(|b| b.is_ascii_digit())
        || !cents.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(AmountError::Format);
    }

    let dollars: i64 = dollars.parse().map_err(|_| AmountError::Overflow)?;
    let minor: i64 = cents.parse().map_err(|_| AmountError::Format)?;

    dollars
        .checked_mul(100)
        .and_then(|value| value.checked_add(minor))
        .filter(|&value| value <= MAX_AMOUNT_CENTS)
        .map(Cents::new)
        .ok_or(AmountError::Overflow)
}
