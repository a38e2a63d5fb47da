//! Sales reconciliation.
//!
//! This module resolves the active [`RevenueInput`] variant into a single
//! total-sales figure and the per-role averages the commission formulas
//! consume. The mode flag is consumed exactly once here; downstream
//! formulas never re-check it.

use rust_decimal::Decimal;

use crate::config::CommissionSchedule;
use crate::models::{AgentRole, RevenueInput, StaffingGroup};

use super::staffing::{agents_in_role, total_agents};

/// The reconciled sales figures for one calculation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSales {
    /// The resolved total monthly sales.
    pub total_sales: Decimal,
    /// Average sale per dialer.
    pub dialer_average: Decimal,
    /// Average sale per closer.
    pub closer_average: Decimal,
    /// True when both role averages are the blended total/agents fallback.
    pub blended: bool,
}

/// Resolves the active revenue variant against the current staffing counts.
///
/// - `TotalSales`: total sales is the entered amount; the per-role average
///   is total / total agents, or zero when there are no agents. Under a
///   per-role commission schedule the engine has no true per-role
///   breakdown in this mode, so the same blended average is applied to
///   both roles and `blended` is set so callers can surface the
///   approximation instead of presenting it as a true breakdown.
/// - `PerAgentAverages`: total sales is the sum over roles of
///   average × role count; each entered average is used directly.
///
/// # Example
///
/// ```
/// use salesfloor_engine::calculation::resolve_revenue;
/// use salesfloor_engine::config::{CommissionSchedule, CommissionTier};
/// use salesfloor_engine::models::{AgentRole, RevenueInput, StaffingGroup};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let staffing = vec![
///     StaffingGroup { name: "overseas".into(), role: AgentRole::Dialer,
///         unit_cost: Decimal::ZERO, count: 2 },
///     StaffingGroup { name: "tij".into(), role: AgentRole::Closer,
///         unit_cost: Decimal::ZERO, count: 3 },
/// ];
/// let revenue = RevenueInput::PerAgentAverages {
///     dialer: Decimal::from_str("2500").unwrap(),
///     closer: Decimal::from_str("5000").unwrap(),
/// };
/// let schedule = CommissionSchedule::Flat {
///     tier: CommissionTier { threshold: Decimal::ZERO, rate: Decimal::ZERO },
/// };
///
/// let resolved = resolve_revenue(&revenue, &staffing, &schedule);
/// assert_eq!(resolved.total_sales, Decimal::from_str("20000").unwrap());
/// assert!(!resolved.blended);
/// ```
pub fn resolve_revenue(
    revenue: &RevenueInput,
    staffing: &[StaffingGroup],
    schedule: &CommissionSchedule,
) -> ResolvedSales {
    match revenue {
        RevenueInput::TotalSales { amount } => {
            let agents = total_agents(staffing);
            let blended_average = if agents > 0 {
                amount / Decimal::from(agents)
            } else {
                Decimal::ZERO
            };

            ResolvedSales {
                total_sales: *amount,
                dialer_average: blended_average,
                closer_average: blended_average,
                blended: matches!(schedule, CommissionSchedule::PerRole { .. }),
            }
        }
        RevenueInput::PerAgentAverages { dialer, closer } => {
            let dialer_count = agents_in_role(staffing, AgentRole::Dialer);
            let closer_count = agents_in_role(staffing, AgentRole::Closer);

            let total_sales = *dialer * Decimal::from(dialer_count)
                + *closer * Decimal::from(closer_count);

            ResolvedSales {
                total_sales,
                dialer_average: *dialer,
                closer_average: *closer,
                blended: false,
            }
        }
    }
}
