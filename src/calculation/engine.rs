//! Full calculation pass.
//!
//! This module orchestrates the individual formulas into one pass over an
//! immutable input snapshot: phone-line sync, expense aggregation, sales
//! reconciliation, commission, and the break-even/profit derivation.

use chrono::Utc;
use uuid::Uuid;

use crate::config::EngineConfig;
use crate::error::EngineResult;
use crate::models::{
    AgentRole, CalculationResult, InputSnapshot, PhoneLineStatus, ProfitOutcome, SalesSummary,
};

use super::commission::total_commission;
use super::expenses::{total_static_expenses, total_variable_expenses};
use super::line_sync::sync_phone_lines;
use super::profitability::{break_even_sales, net_revenue, profit, remit_amount};
use super::revenue::resolve_revenue;
use super::staffing::{agents_in_role, total_agents};

/// Runs one full calculation pass.
///
/// The pass is pure and idempotent: identical snapshots and configuration
/// produce identical figures (the id and timestamp header aside). Phone
/// lines in the auto state are re-derived from staffing counts before
/// expenses are summed; overridden lines keep their displayed counts.
///
/// # Errors
///
/// Returns `CalculationError` only for configurations with a non-positive
/// net revenue rate, which the loader already rejects.
///
/// # Example
///
/// ```
/// use salesfloor_engine::calculation::calculate;
/// use salesfloor_engine::config::{
///     CommissionSchedule, CommissionTier, EngineConfig, PhoneLineRules, RevenueRates,
/// };
/// use salesfloor_engine::models::{InputSnapshot, RevenueInput};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let config = EngineConfig {
///     revenue: RevenueRates {
///         net_revenue_rate: Decimal::from_str("0.55").unwrap(),
///         remit_rate: None,
///     },
///     commission: CommissionSchedule::Flat {
///         tier: CommissionTier {
///             threshold: Decimal::from_str("4000").unwrap(),
///             rate: Decimal::from_str("0.15").unwrap(),
///         },
///     },
///     phone_lines: PhoneLineRules { auto_derive: false, admin_line_constant: 4 },
/// };
/// let snapshot = InputSnapshot {
///     expenses: vec![],
///     staffing: vec![],
///     phone_lines: vec![],
///     revenue: RevenueInput::TotalSales { amount: Decimal::ZERO },
/// };
///
/// let result = calculate(&snapshot, &config).unwrap();
/// assert_eq!(result.total_expenses, Decimal::ZERO);
/// ```
pub fn calculate(snapshot: &InputSnapshot, config: &EngineConfig) -> EngineResult<CalculationResult> {
    // Re-derive auto-state line counts before any cost is summed.
    let mut phone_lines = snapshot.phone_lines.clone();
    sync_phone_lines(&mut phone_lines, &snapshot.staffing, &config.phone_lines);

    let static_expenses = total_static_expenses(&snapshot.expenses);
    let variable_expenses = total_variable_expenses(&snapshot.staffing, &phone_lines);

    let agents = total_agents(&snapshot.staffing);
    let dialer_count = agents_in_role(&snapshot.staffing, AgentRole::Dialer);
    let closer_count = agents_in_role(&snapshot.staffing, AgentRole::Closer);

    let sales = resolve_revenue(&snapshot.revenue, &snapshot.staffing, &config.commission);
    let commission = total_commission(&config.commission, &sales, dialer_count, closer_count);

    let total_expenses = static_expenses + variable_expenses + commission.total;
    let net = net_revenue(sales.total_sales, config.revenue.net_revenue_rate);
    let remit = config
        .revenue
        .remit_rate
        .map(|rate| remit_amount(sales.total_sales, rate));
    let break_even = break_even_sales(total_expenses, config.revenue.net_revenue_rate)?;
    let profit_amount = profit(net, total_expenses);

    let phone_line_statuses: Vec<PhoneLineStatus> = phone_lines
        .iter()
        .map(|group| PhoneLineStatus {
            name: group.name.clone(),
            count: group.count,
            state: group.state,
        })
        .collect();

    Ok(CalculationResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        static_expenses,
        variable_expenses,
        total_agents: agents,
        sales: SalesSummary {
            total_sales: sales.total_sales,
            dialer_average: sales.dialer_average,
            closer_average: sales.closer_average,
            blended: sales.blended,
        },
        commission,
        total_expenses,
        remit,
        net_revenue: net,
        break_even_sales: break_even,
        profit: profit_amount,
        outcome: ProfitOutcome::classify(profit_amount),
        phone_lines: phone_line_statuses,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CommissionSchedule, CommissionTier, PhoneLineRules, RevenueRates};
    use crate::models::{
        ExpenseLineItem, LineKind, LineState, PhoneLineGroup, RevenueInput, StaffingGroup,
    };
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn scenario_config() -> EngineConfig {
        EngineConfig {
            revenue: RevenueRates {
                net_revenue_rate: dec("0.55"),
                remit_rate: Some(dec("0.37")),
            },
            commission: CommissionSchedule::PerRole {
                dialer: CommissionTier {
                    threshold: dec("4000"),
                    rate: dec("0.15"),
                },
                closer: CommissionTier {
                    threshold: dec("4000"),
                    rate: dec("0.15"),
                },
            },
            phone_lines: PhoneLineRules {
                auto_derive: true,
                admin_line_constant: 4,
            },
        }
    }

    fn scenario_snapshot() -> InputSnapshot {
        InputSnapshot {
            expenses: vec![
                ExpenseLineItem { name: "click_to_dial".into(), amount: dec("200") },
                ExpenseLineItem { name: "ace_dialer".into(), amount: dec("1200") },
                ExpenseLineItem { name: "cad_call_report".into(), amount: dec("140") },
                ExpenseLineItem { name: "incall_recordings".into(), amount: dec("70") },
                ExpenseLineItem { name: "broadcast_calls".into(), amount: dec("1600") },
                ExpenseLineItem { name: "simplicity_crm".into(), amount: dec("2000") },
                ExpenseLineItem { name: "idi_batching".into(), amount: dec("5000") },
                ExpenseLineItem { name: "admin_payroll".into(), amount: dec("12000") },
                ExpenseLineItem { name: "rsa_management".into(), amount: dec("1500") },
            ],
            staffing: vec![
                StaffingGroup {
                    name: "overseas".into(),
                    role: AgentRole::Dialer,
                    unit_cost: dec("720"),
                    count: 2,
                },
                StaffingGroup {
                    name: "tij".into(),
                    role: AgentRole::Closer,
                    unit_cost: dec("1300"),
                    count: 1,
                },
                StaffingGroup {
                    name: "rsa".into(),
                    role: AgentRole::Closer,
                    unit_cost: dec("1100"),
                    count: 1,
                },
            ],
            phone_lines: vec![
                PhoneLineGroup {
                    name: "local_lines".into(),
                    kind: LineKind::Local,
                    cost_per_line: dec("60"),
                    count: 0,
                    state: LineState::Auto,
                },
                PhoneLineGroup {
                    name: "dialer_lines".into(),
                    kind: LineKind::Dialer,
                    cost_per_line: dec("100"),
                    count: 0,
                    state: LineState::Auto,
                },
            ],
            revenue: RevenueInput::TotalSales {
                amount: dec("20000"),
            },
        }
    }

    /// EN-001: the full documented scenario end to end.
    #[test]
    fn test_en_001_full_scenario() {
        let result = calculate(&scenario_snapshot(), &scenario_config()).unwrap();

        assert_eq!(result.static_expenses, dec("23710"));
        // 2*720 + 1300 + 1100 + 60*6 + 100*8 = 5000 with auto-derived lines.
        assert_eq!(result.variable_expenses, dec("5000"));
        assert_eq!(result.total_agents, 4);

        // Blended average 20000/4 = 5000; both roles over the 4000 threshold.
        // Dialers: 1000 * 0.15 * 2 = 300; closers: 1000 * 0.15 * 2 = 300.
        assert_eq!(result.sales.dialer_average, dec("5000"));
        assert!(result.sales.blended);
        assert_eq!(result.commission.total, dec("600"));

        assert_eq!(result.total_expenses, dec("29310"));
        assert_eq!(result.net_revenue, dec("11000.00"));
        assert_eq!(result.remit, Some(dec("7400.00")));
        assert_eq!(result.profit, dec("-18310.00"));
        assert_eq!(result.outcome, ProfitOutcome::Loss);
        assert_eq!(result.break_even_sales * dec("0.55"), dec("29310"));

        assert_eq!(result.phone_lines[0].count, 6);
        assert_eq!(result.phone_lines[1].count, 8);
        assert_eq!(result.phone_lines[0].state, LineState::Auto);
    }

    /// EN-002: identical snapshots produce identical figures.
    #[test]
    fn test_en_002_idempotent_for_identical_inputs() {
        let snapshot = scenario_snapshot();
        let config = scenario_config();

        let first = calculate(&snapshot, &config).unwrap();
        let second = calculate(&snapshot, &config).unwrap();

        assert_eq!(first.total_expenses, second.total_expenses);
        assert_eq!(first.profit, second.profit);
        assert_eq!(first.phone_lines, second.phone_lines);
        assert_ne!(first.calculation_id, second.calculation_id);
    }

    /// EN-003: overridden line counts survive the pass untouched.
    #[test]
    fn test_en_003_override_survives_pass() {
        let mut snapshot = scenario_snapshot();
        snapshot.phone_lines[0].count = 10;
        snapshot.phone_lines[0].state = LineState::Overridden;

        let result = calculate(&snapshot, &scenario_config()).unwrap();

        assert_eq!(result.phone_lines[0].count, 10);
        assert_eq!(result.phone_lines[0].state, LineState::Overridden);
        // Dialer lines still auto-derive.
        assert_eq!(result.phone_lines[1].count, 8);
        // Variable expenses shift with the frozen count: 60 * 10 = 600.
        assert_eq!(result.variable_expenses, dec("5240"));
    }

    /// EN-004: the snapshot itself is never mutated.
    #[test]
    fn test_en_004_snapshot_untouched() {
        let snapshot = scenario_snapshot();
        let before = snapshot.clone();

        let _ = calculate(&snapshot, &scenario_config()).unwrap();

        assert_eq!(snapshot, before);
    }

    /// EN-005: zero agents, zero sales: everything zero except static costs.
    #[test]
    fn test_en_005_empty_floor() {
        let mut snapshot = scenario_snapshot();
        for group in &mut snapshot.staffing {
            group.count = 0;
        }
        snapshot.revenue = RevenueInput::TotalSales {
            amount: Decimal::ZERO,
        };

        let result = calculate(&snapshot, &scenario_config()).unwrap();

        assert_eq!(result.total_agents, 0);
        assert_eq!(result.commission.total, Decimal::ZERO);
        assert_eq!(result.sales.dialer_average, Decimal::ZERO);
        // Lines auto-derive to the admin constant alone: 60*4 + 100*4.
        assert_eq!(result.variable_expenses, dec("640"));
        assert_eq!(result.total_expenses, dec("24350"));
        assert_eq!(result.outcome, ProfitOutcome::Loss);
    }

    /// EN-006: per-agent averages mode uses entered averages directly.
    #[test]
    fn test_en_006_per_agent_averages_mode() {
        let mut snapshot = scenario_snapshot();
        snapshot.revenue = RevenueInput::PerAgentAverages {
            dialer: dec("2500"),
            closer: dec("5000"),
        };

        let result = calculate(&snapshot, &scenario_config()).unwrap();

        // 2*2500 + 2*5000 = 15000.
        assert_eq!(result.sales.total_sales, dec("15000"));
        assert!(!result.sales.blended);
        // Dialers at 2500 stay under the 4000 threshold; closers pay
        // (5000-4000)*0.15*2 = 300.
        assert_eq!(result.commission.dialer, Decimal::ZERO);
        assert_eq!(result.commission.total, dec("300.00"));
    }
}
