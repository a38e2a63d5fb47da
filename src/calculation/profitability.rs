//! Break-even and profit derivation.
//!
//! Net revenue is the retained fraction of sales after deductions; the
//! remit is the pass-through fraction owed to the external client, broken
//! out separately when configured. Break-even is the sales figure at which
//! net revenue would exactly cover total expenses.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};

/// Returns the retained revenue: `total_sales * net_revenue_rate`.
pub fn net_revenue(total_sales: Decimal, net_revenue_rate: Decimal) -> Decimal {
    total_sales * net_revenue_rate
}

/// Returns the pass-through remit amount: `total_sales * remit_rate`.
pub fn remit_amount(total_sales: Decimal, remit_rate: Decimal) -> Decimal {
    total_sales * remit_rate
}

/// Returns the sales figure at which net revenue exactly covers expenses.
///
/// # Errors
///
/// Returns `CalculationError` when the rate is not strictly positive; the
/// loader rejects such configs up front, so this only trips on configs
/// constructed in code.
///
/// # Example
///
/// ```
/// use salesfloor_engine::calculation::break_even_sales;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let expenses = Decimal::from_str("29310").unwrap();
/// let rate = Decimal::from_str("0.55").unwrap();
/// let break_even = break_even_sales(expenses, rate).unwrap();
/// assert_eq!(break_even * rate, expenses);
/// ```
pub fn break_even_sales(total_expenses: Decimal, net_revenue_rate: Decimal) -> EngineResult<Decimal> {
    if net_revenue_rate <= Decimal::ZERO {
        return Err(EngineError::CalculationError {
            message: format!("net revenue rate must be positive, got {}", net_revenue_rate),
        });
    }

    Ok(total_expenses / net_revenue_rate)
}

/// Returns the signed profit: `net_revenue - total_expenses`.
pub fn profit(net_revenue: Decimal, total_expenses: Decimal) -> Decimal {
    net_revenue - total_expenses
}
