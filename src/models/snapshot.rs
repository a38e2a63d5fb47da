//! Immutable input snapshot consumed by the engine.

use serde::{Deserialize, Serialize};

use super::{ExpenseLineItem, PhoneLineGroup, RevenueInput, StaffingGroup};

/// The full set of inputs for one calculation pass.
///
/// The engine is a pure function of this snapshot plus the loaded
/// configuration; it holds no references to the display surfaces the
/// values came from. The presentation adapter builds a fresh snapshot on
/// every trigger, with all amounts already coerced and clamped.
///
/// # Example
///
/// ```
/// use salesfloor_engine::models::{InputSnapshot, RevenueInput};
/// use rust_decimal::Decimal;
///
/// let snapshot = InputSnapshot {
///     expenses: vec![],
///     staffing: vec![],
///     phone_lines: vec![],
///     revenue: RevenueInput::TotalSales { amount: Decimal::ZERO },
/// };
/// assert!(snapshot.expenses.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputSnapshot {
    /// Fixed monthly costs.
    pub expenses: Vec<ExpenseLineItem>,
    /// Compensated agent groups.
    pub staffing: Vec<StaffingGroup>,
    /// Phone-line groups, with their current counts and override states.
    pub phone_lines: Vec<PhoneLineGroup>,
    /// The active revenue input.
    pub revenue: RevenueInput,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgentRole, LineKind, LineState};
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_snapshot_round_trip() {
        let snapshot = InputSnapshot {
            expenses: vec![ExpenseLineItem {
                name: "click_to_dial".to_string(),
                amount: Decimal::from_str("200").unwrap(),
            }],
            staffing: vec![StaffingGroup {
                name: "overseas".to_string(),
                role: AgentRole::Dialer,
                unit_cost: Decimal::from_str("720").unwrap(),
                count: 2,
            }],
            phone_lines: vec![PhoneLineGroup {
                name: "local_lines".to_string(),
                kind: LineKind::Local,
                cost_per_line: Decimal::from_str("60").unwrap(),
                count: 6,
                state: LineState::Auto,
            }],
            revenue: RevenueInput::TotalSales {
                amount: Decimal::from_str("20000").unwrap(),
            },
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: InputSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
