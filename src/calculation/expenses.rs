//! Expense aggregation.
//!
//! This module provides the static and variable expense sums. Both are
//! pure functions with no error conditions: malformed or missing input is
//! coerced to zero upstream by the presentation adapter, so the engine
//! only ever sees clamped, non-negative amounts.

use rust_decimal::Decimal;

use crate::models::{ExpenseLineItem, PhoneLineGroup, StaffingGroup};

/// Sums all fixed monthly costs.
///
/// The sum is exact (decimal arithmetic) and order-independent.
///
/// # Example
///
/// ```
/// use salesfloor_engine::calculation::total_static_expenses;
/// use salesfloor_engine::models::ExpenseLineItem;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let items = vec![
///     ExpenseLineItem { name: "click_to_dial".into(), amount: Decimal::from_str("200").unwrap() },
///     ExpenseLineItem { name: "ace_dialer".into(), amount: Decimal::from_str("1200").unwrap() },
/// ];
/// assert_eq!(total_static_expenses(&items), Decimal::from_str("1400").unwrap());
/// ```
pub fn total_static_expenses(items: &[ExpenseLineItem]) -> Decimal {
    items.iter().map(|item| item.amount).sum()
}

/// Sums unit-cost times unit-count across staffing and phone-line groups.
///
/// Phone lines are included here as infrastructure cost even though they
/// never count as headcount. A zero count contributes nothing regardless
/// of the unit cost.
///
/// # Example
///
/// ```
/// use salesfloor_engine::calculation::total_variable_expenses;
/// use salesfloor_engine::models::{AgentRole, StaffingGroup};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let staffing = vec![StaffingGroup {
///     name: "overseas".into(),
///     role: AgentRole::Dialer,
///     unit_cost: Decimal::from_str("720").unwrap(),
///     count: 2,
/// }];
/// assert_eq!(
///     total_variable_expenses(&staffing, &[]),
///     Decimal::from_str("1440").unwrap(),
/// );
/// ```
pub fn total_variable_expenses(
    staffing: &[StaffingGroup],
    phone_lines: &[PhoneLineGroup],
) -> Decimal {
    let staffing_total: Decimal = staffing.iter().map(StaffingGroup::total_cost).sum();
    let lines_total: Decimal = phone_lines.iter().map(PhoneLineGroup::total_cost).sum();
    staffing_total + lines_total
}
