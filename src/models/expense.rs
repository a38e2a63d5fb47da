//! Expense line item model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A named fixed monthly cost, such as a dialing platform fee or a CRM fee.
///
/// Line items are read fresh on each calculation and never mutated by the
/// engine. Amounts are clamped non-negative by the presentation adapter
/// before they reach the engine.
///
/// # Example
///
/// ```
/// use salesfloor_engine::models::ExpenseLineItem;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let item = ExpenseLineItem {
///     name: "simplicity_crm".to_string(),
///     amount: Decimal::from_str("2000").unwrap(),
/// };
/// assert_eq!(item.name, "simplicity_crm");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseLineItem {
    /// Identifier for the expense line (e.g., "click_to_dial").
    pub name: String,
    /// The monthly cost, non-negative.
    pub amount: Decimal,
}
