//! Tiered commission calculation.
//!
//! Commission is earned on the portion of the per-agent average above the
//! tier threshold, scaled by the rate and the agent count. The comparison
//! at the threshold is strictly greater-than: the boundary value itself
//! earns no commission.

use rust_decimal::Decimal;

use crate::config::{CommissionSchedule, CommissionTier};
use crate::models::CommissionBreakdown;

use super::revenue::ResolvedSales;

/// Applies the single-tier commission formula.
///
/// Returns zero when the agent count is zero (division-by-zero guard on
/// the average is upstream; a role with no agents earns nothing regardless
/// of the average) or when the average does not exceed the threshold.
/// Otherwise the payout is `(average - threshold) * rate * count`.
///
/// # Example
///
/// ```
/// use salesfloor_engine::calculation::commission_for_tier;
/// use salesfloor_engine::config::CommissionTier;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tier = CommissionTier {
///     threshold: Decimal::from_str("4000").unwrap(),
///     rate: Decimal::from_str("0.15").unwrap(),
/// };
///
/// // 3 agents averaging 5000: (5000 - 4000) * 0.15 * 3 = 450
/// let payout = commission_for_tier(Decimal::from_str("5000").unwrap(), 3, &tier);
/// assert_eq!(payout, Decimal::from_str("450").unwrap());
///
/// // The boundary value earns nothing.
/// let at_threshold = commission_for_tier(Decimal::from_str("4000").unwrap(), 3, &tier);
/// assert_eq!(at_threshold, Decimal::ZERO);
/// ```
pub fn commission_for_tier(average: Decimal, agent_count: u32, tier: &CommissionTier) -> Decimal {
    if agent_count == 0 {
        return Decimal::ZERO;
    }

    if average > tier.threshold {
        (average - tier.threshold) * tier.rate * Decimal::from(agent_count)
    } else {
        Decimal::ZERO
    }
}

/// Applies the configured schedule to the reconciled sales figures.
///
/// Under a flat schedule the single tier is applied once to the blended
/// average (total sales / total agents) regardless of the entry mode, as
/// the single-tier variants of the operation always did. The breakdown
/// reports the whole amount under `closer` since a flat schedule has no
/// per-role attribution; the total is the meaningful figure. Under a
/// per-role schedule the tier formula runs independently for dialers and
/// closers and the payouts sum.
pub fn total_commission(
    schedule: &CommissionSchedule,
    sales: &ResolvedSales,
    dialer_count: u32,
    closer_count: u32,
) -> CommissionBreakdown {
    match schedule {
        CommissionSchedule::Flat { tier } => {
            let agents = dialer_count + closer_count;
            let blended_average = if agents > 0 {
                sales.total_sales / Decimal::from(agents)
            } else {
                Decimal::ZERO
            };
            let total = commission_for_tier(blended_average, agents, tier);
            CommissionBreakdown {
                dialer: Decimal::ZERO,
                closer: total,
                total,
            }
        }
        CommissionSchedule::PerRole { dialer, closer } => {
            let dialer_amount = commission_for_tier(sales.dialer_average, dialer_count, dialer);
            let closer_amount = commission_for_tier(sales.closer_average, closer_count, closer);
            CommissionBreakdown {
                dialer: dialer_amount,
                closer: closer_amount,
                total: dialer_amount + closer_amount,
            }
        }
    }
}
