//! Field-level receipt validation.
//!
//! Runs before the rule engine so malformed input is rejected with the
//! offending field named, instead of silently scoring as zero through a
//! failed parse. A successful validation yields a [`ValidatedReceipt`] with
//! every amount, date, and time already in typed form, which is what the
//! engine consumes.

use chrono::{NaiveDate, NaiveTime};

use super::money::{parse_amount, Cents};
use super::Receipt;

/// Receipt with all string fields parsed into typed values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedReceipt {
    pub retailer: String,
    pub purchase_date: NaiveDate,
    pub purchase_time: NaiveTime,
    pub items: Vec<ValidatedItem>,
    pub total: Cents,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedItem {
    pub description: String,
    pub price: Cents,
}

/// Rejection naming the receipt field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    field: String,
    reason: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            field: field.into(),
            reason: reason.to_string(),
        }
    }

    /// Wire name of the offending field, e.g. `items[1].price`.
    pub fn field(&self) -> &str {
        &self.field
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid field '{}': {}", self.field, self.reason)
    }
}

impl std::error::Error for ValidationError {}

/// Checks every field of a candidate receipt.
///
/// Returns the typed receipt on success; on the first failure returns an
/// error naming the field, and nothing downstream runs.
pub fn validate(receipt: &Receipt) -> Result<ValidatedReceipt, ValidationError> {
    if receipt.retailer.trim().is_empty() {
        return Err(ValidationError::new("retailer", "must not be empty"));
    }

    let purchase_date = NaiveDate::parse_from_str(receipt.purchase_date.trim(), "%Y-%m-%d")
        .map_err(|err| ValidationError::new("purchaseDate", format!("expected YYYY-MM-DD ({err})")))?;

    let purchase_time = NaiveTime::parse_from_str(receipt.purchase_time.trim(), "%H:%M")
        .map_err(|err| {
            ValidationError::new("purchaseTime", format!("expected 24-hour HH:MM ({err})"))
        })?;

    if receipt.items.is_empty() {
        return Err(ValidationError::new("items", "must contain at least one item"));
    }

    let mut items = Vec::with_capacity(receipt.items.len());
    for (index, item) in receipt.items.iter().enumerate() {
        if item.short_description.trim().is_empty() {
            return Err(ValidationError::new(
                format!("items[{index}].shortDescription"),
                "must not be empty",
            ));
        }
        let price = parse_amount(&item.price)
            .map_err(|err| ValidationError::new(format!("items[{index}].price"), err))?;
        items.push(ValidatedItem {
            description: item.short_description.clone(),
            price,
        });
    }

    let total = parse_amount(&receipt.total)
        .map_err(|err| ValidationError::new("total", err))?;

    Ok(ValidatedReceipt {
        retailer: receipt.retailer.clone(),
        purchase_date,
        purchase_time,
        items,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipts::Item;

    fn sample_receipt() -> Receipt {
        Receipt {
            retailer: "Target".to_string(),
            purchase_date: "2023-08-16".to_string(),
            purchase_time: "15:30".to_string(),
            items: vec![
                Item {
                    short_description: "Mountain Dew 12PK".to_string(),
                    price: "6.49".to_string(),
                },
                Item {
                    short_description: "Dasani".to_string(),
                    price: "2.00".to_string(),
                },
            ],
            total: "14.49".to_string(),
        }
    }

    #[test]
    fn accepts_well_formed_receipt() {
        let validated = validate(&sample_receipt()).expect("receipt validates");
        assert_eq!(validated.retailer, "Target");
        assert_eq!(
            validated.purchase_date,
            NaiveDate::from_ymd_opt(2023, 8, 16).expect("valid date")
        );
        assert_eq!(
            validated.purchase_time,
            NaiveTime::from_hms_opt(15, 30, 0).expect("valid time")
        );
        assert_eq!(validated.total, Cents::new(1449));
        assert_eq!(validated.items[0].price, Cents::new(649));
    }

    #[test]
    fn rejects_blank_retailer() {
        let mut receipt = sample_receipt();
        receipt.retailer = "   ".to_string();
        let err = validate(&receipt).expect_err("blank retailer rejected");
        assert_eq!(err.field(), "retailer");
    }

    #[test]
    fn rejects_out_of_range_time() {
        let mut receipt = sample_receipt();
        receipt.purchase_time = "25:99".to_string();
        let err = validate(&receipt).expect_err("impossible time rejected");
        assert_eq!(err.field(), "purchaseTime");
    }

    #[test]
    fn rejects_non_calendar_date() {
        let mut receipt = sample_receipt();
        receipt.purchase_date = "2023-02-30".to_string();
        let err = validate(&receipt).expect_err("impossible date rejected");
        assert_eq!(err.field(), "purchaseDate");
    }

    #[test]
    fn rejects_empty_item_list() {
        let mut receipt = sample_receipt();
        receipt.items.clear();
        let err = validate(&receipt).expect_err("empty items rejected");
        assert_eq!(err.field(), "items");
    }

    #[test]
    fn names_the_offending_item_price() {
        let mut receipt = sample_receipt();
        receipt.items[1].price = "2.5".to_string();
        let err = validate(&receipt).expect_err("one-digit fraction rejected");
        assert_eq!(err.field(), "items[1].price");
    }

    #[test]
    fn rejects_blank_item_description() {
        let mut receipt = sample_receipt();
        receipt.items[0].short_description = " ".to_string();
        let err = validate(&receipt).expect_err("blank description rejected");
        assert_eq!(err.field(), "items[0].shortDescription");
    }

    #[test]
    fn rejects_prices_above_the_amount_cap() {
        let mut receipt = sample_receipt();
        receipt.items[0].price = "92233720368547758.07".to_string();
        let err = validate(&receipt).expect_err("oversized price rejected");
        assert_eq!(err.field(), "items[0].price");
    }

    #[test]
    fn rejects_malformed_total() {
        let mut receipt = sample_receipt();
        receipt.total = "14.495".to_string();
        let err = validate(&receipt).expect_err("three-digit fraction rejected");
        assert_eq!(err.field(), "total");
    }
}
