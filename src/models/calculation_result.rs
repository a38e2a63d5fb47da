//! Calculation result models.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures that capture all outputs from one calculation pass: expense
//! totals, the reconciled sales figures, commission, break-even sales,
//! profit/loss, and the phone-line counts with their override states.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::LineState;

/// Tri-state classification of the profit figure.
///
/// Used purely for presentation; `BreakEven` is the exact-zero case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfitOutcome {
    /// Net revenue exceeds total expenses.
    Profit,
    /// Total expenses exceed net revenue.
    Loss,
    /// Net revenue exactly covers total expenses.
    BreakEven,
}

impl ProfitOutcome {
    /// Classifies a signed profit figure.
    ///
    /// # Example
    ///
    /// ```
    /// use salesfloor_engine::models::ProfitOutcome;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(ProfitOutcome::classify(Decimal::ZERO), ProfitOutcome::BreakEven);
    /// assert_eq!(ProfitOutcome::classify(Decimal::ONE), ProfitOutcome::Profit);
    /// assert_eq!(ProfitOutcome::classify(-Decimal::ONE), ProfitOutcome::Loss);
    /// ```
    pub fn classify(profit: Decimal) -> Self {
        if profit > Decimal::ZERO {
            ProfitOutcome::Profit
        } else if profit < Decimal::ZERO {
            ProfitOutcome::Loss
        } else {
            ProfitOutcome::BreakEven
        }
    }
}

/// The reconciled sales figures for one calculation.
///
/// When revenue was entered as a single total under a per-role commission
/// schedule the engine has no true per-role breakdown; both role averages
/// carry the blended total/agents figure and `blended` is set so callers
/// can surface the approximation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesSummary {
    /// The resolved total monthly sales.
    pub total_sales: Decimal,
    /// Average sale per dialer used for commission and display.
    pub dialer_average: Decimal,
    /// Average sale per closer used for commission and display.
    pub closer_average: Decimal,
    /// True when the role averages are a blended total/agents fallback
    /// rather than figures the user entered per role.
    pub blended: bool,
}

/// Commission amounts per role and in total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionBreakdown {
    /// Commission earned by dialers.
    pub dialer: Decimal,
    /// Commission earned by closers.
    pub closer: Decimal,
    /// Total commission payable.
    pub total: Decimal,
}

/// The resolved count and override state of one phone-line group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneLineStatus {
    /// Identifier of the line group.
    pub name: String,
    /// The count after auto-derivation (or the frozen override).
    pub count: u32,
    /// Whether the count tracks the formula or a user edit.
    pub state: LineState,
}

/// The complete result of one calculation pass.
///
/// # Example
///
/// ```
/// use salesfloor_engine::models::{
///     CalculationResult, CommissionBreakdown, ProfitOutcome, SalesSummary,
/// };
/// use chrono::Utc;
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let result = CalculationResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     static_expenses: Decimal::ZERO,
///     variable_expenses: Decimal::ZERO,
///     total_agents: 0,
///     sales: SalesSummary {
///         total_sales: Decimal::ZERO,
///         dialer_average: Decimal::ZERO,
///         closer_average: Decimal::ZERO,
///         blended: false,
///     },
///     commission: CommissionBreakdown {
///         dialer: Decimal::ZERO,
///         closer: Decimal::ZERO,
///         total: Decimal::ZERO,
///     },
///     total_expenses: Decimal::ZERO,
///     remit: None,
///     net_revenue: Decimal::ZERO,
///     break_even_sales: Decimal::ZERO,
///     profit: Decimal::ZERO,
///     outcome: ProfitOutcome::BreakEven,
///     phone_lines: vec![],
/// };
/// assert_eq!(result.outcome, ProfitOutcome::BreakEven);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Sum of all fixed monthly costs.
    pub static_expenses: Decimal,
    /// Sum of unit-cost times count across staffing and phone-line groups.
    pub variable_expenses: Decimal,
    /// Total agent headcount (staffing groups only).
    pub total_agents: u32,
    /// The reconciled sales figures.
    pub sales: SalesSummary,
    /// Commission per role and in total.
    pub commission: CommissionBreakdown,
    /// Static plus variable expenses plus commission.
    pub total_expenses: Decimal,
    /// The pass-through remit amount, when a remit rate is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remit: Option<Decimal>,
    /// Retained revenue after deductions.
    pub net_revenue: Decimal,
    /// The sales figure at which net revenue exactly covers expenses.
    pub break_even_sales: Decimal,
    /// Net revenue minus total expenses, signed.
    pub profit: Decimal,
    /// Tri-state classification of the profit figure.
    pub outcome: ProfitOutcome,
    /// Resolved phone-line counts and their override states.
    pub phone_lines: Vec<PhoneLineStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_result() -> CalculationResult {
        CalculationResult {
            calculation_id: Uuid::nil(),
            timestamp: DateTime::parse_from_rfc3339("2026-01-15T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            engine_version: "0.1.0".to_string(),
            static_expenses: dec("23710"),
            variable_expenses: dec("5000"),
            total_agents: 4,
            sales: SalesSummary {
                total_sales: dec("20000"),
                dialer_average: dec("5000"),
                closer_average: dec("5000"),
                blended: true,
            },
            commission: CommissionBreakdown {
                dialer: dec("300"),
                closer: dec("300"),
                total: dec("600"),
            },
            total_expenses: dec("29310"),
            remit: Some(dec("7400")),
            net_revenue: dec("11000"),
            break_even_sales: dec("53290.909090909090909090909091"),
            profit: dec("-18310"),
            outcome: ProfitOutcome::Loss,
            phone_lines: vec![PhoneLineStatus {
                name: "local_lines".to_string(),
                count: 6,
                state: LineState::Auto,
            }],
        }
    }

    #[test]
    fn test_outcome_classification() {
        assert_eq!(ProfitOutcome::classify(dec("0.01")), ProfitOutcome::Profit);
        assert_eq!(ProfitOutcome::classify(dec("-0.01")), ProfitOutcome::Loss);
        assert_eq!(ProfitOutcome::classify(dec("0")), ProfitOutcome::BreakEven);
    }

    #[test]
    fn test_result_serialization() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();

        assert!(json.contains("\"calculation_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"engine_version\":\"0.1.0\""));
        assert!(json.contains("\"static_expenses\":\"23710\""));
        assert!(json.contains("\"outcome\":\"loss\""));
        assert!(json.contains("\"remit\":\"7400\""));
        assert!(json.contains("\"blended\":true"));
        assert!(json.contains("\"phone_lines\":["));
    }

    #[test]
    fn test_remit_skipped_when_absent() {
        let mut result = sample_result();
        result.remit = None;
        let json = serde_json::to_string(&result).unwrap();
        assert!(!json.contains("\"remit\""));
    }

    #[test]
    fn test_result_deserialization() {
        let result = sample_result();
        let json = serde_json::to_string(&result).unwrap();
        let back: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back, result);
    }
}
