//! The loyalty rule engine.
//!
//! A pure function over a [`ValidatedReceipt`]: no side effects, no shared
//! state, and the same receipt always produces the same total. Each rule is
//! computed independently and the awards are summed, so the per-rule
//! breakdown is also exposed for the CLI and for log lines.

use chrono::{Datelike, Timelike};

use super::validate::{ValidatedItem, ValidatedReceipt};

/// Points awarded by a single rule, labelled for breakdown output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleAward {
    pub rule: &'static str,
    pub points: u32,
}

/// Total points for a validated receipt.
pub fn score(receipt: &ValidatedReceipt) -> u32 {
    breakdown(receipt)
        .iter()
        .map(|award| award.points)
        .fold(0, u32::saturating_add)
}

/// Per-rule awards, in rule order. Rules that did not fire report zero.
pub fn breakdown(receipt: &ValidatedReceipt) -> Vec<RuleAward> {
    vec![
        RuleAward {
            rule: "alphanumeric characters in retailer name",
            points: retailer_points(&receipt.retailer),
        },
        RuleAward {
            rule: "round-dollar total",
            points: if receipt.total.is_round_dollar() { 50 } else { 0 },
        },
        RuleAward {
            rule: "total is a multiple of 0.25",
            points: if receipt.total.is_quarter_multiple() { 25 } else { 0 },
        },
        RuleAward {
            rule: "five points per pair of items",
            points: (receipt.items.len() as u32 / 2) * 5,
        },
        RuleAward {
            rule: "description length a multiple of three",
            points: receipt
                .items
                .iter()
                .map(description_points)
                .fold(0, u32::saturating_add),
        },
        RuleAward {
            rule: "purchase between 14:00 and 16:00",
            points: if is_afternoon_window(receipt) { 10 } else { 0 },
        },
        RuleAward {
            rule: "odd purchase day",
            points: if receipt.purchase_date.day() % 2 == 1 { 6 } else { 0 },
        },
    ]
}

// Spaces and punctuation in the retailer name do not score.
fn retailer_points(retailer: &str) -> u32 {
    retailer.chars().filter(|c| c.is_ascii_alphanumeric()).count() as u32
}

// ceil(price * 0.2) in integer cents when the trimmed description length is
// a positive multiple of three. Dividing before rounding keeps the
// intermediate inside i64 for any amount the validator admits.
fn description_points(item: &ValidatedItem) -> u32 {
    let trimmed = item.description.trim();
    if trimmed.is_empty() || trimmed.chars().count() % 3 != 0 {
        return 0;
    }
    let cents = item.price.value();
    let bonus = cents / 500 + i64::from(cents % 500 != 0);
    u32::try_from(bonus).unwrap_or(u32::MAX)
}

// Both endpoints are excluded: 14:00 and 16:00 exactly do not qualify.
fn is_afternoon_window(receipt: &ValidatedReceipt) -> bool {
    let (hour, minute) = (receipt.purchase_time.hour(), receipt.purchase_time.minute());
    hour == 15 || (hour == 14 && minute > 0)
}
