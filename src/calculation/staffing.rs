//! Agent counting.
//!
//! Only staffing groups carry headcount; phone-line groups are
//! infrastructure and are never counted here. The totals feed both the
//! commission denominators and the displayed agent count.

use crate::models::{AgentRole, StaffingGroup};

/// Sums agent headcount across all staffing groups.
///
/// # Example
///
/// ```
/// use salesfloor_engine::calculation::total_agents;
/// use salesfloor_engine::models::{AgentRole, StaffingGroup};
/// use rust_decimal::Decimal;
///
/// let groups = vec![
///     StaffingGroup { name: "overseas".into(), role: AgentRole::Dialer, unit_cost: Decimal::ZERO, count: 2 },
///     StaffingGroup { name: "tij".into(), role: AgentRole::Closer, unit_cost: Decimal::ZERO, count: 3 },
/// ];
/// assert_eq!(total_agents(&groups), 5);
/// ```
pub fn total_agents(groups: &[StaffingGroup]) -> u32 {
    groups.iter().map(|g| g.count).sum()
}

/// Sums agent headcount for one role.
///
/// Closer counts span every closer-role group (e.g., in-country and
/// remote-admin staff together).
pub fn agents_in_role(groups: &[StaffingGroup], role: AgentRole) -> u32 {
    groups.iter().filter(|g| g.role == role).map(|g| g.count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn group(name: &str, role: AgentRole, count: u32) -> StaffingGroup {
        StaffingGroup {
            name: name.to_string(),
            role,
            unit_cost: Decimal::ZERO,
            count,
        }
    }

    #[test]
    fn test_total_agents_sums_all_groups() {
        let groups = vec![
            group("overseas", AgentRole::Dialer, 2),
            group("tij", AgentRole::Closer, 1),
            group("rsa", AgentRole::Closer, 1),
        ];
        assert_eq!(total_agents(&groups), 4);
    }

    #[test]
    fn test_closer_count_spans_all_closer_groups() {
        let groups = vec![
            group("overseas", AgentRole::Dialer, 2),
            group("tij", AgentRole::Closer, 3),
            group("rsa", AgentRole::Closer, 4),
        ];
        assert_eq!(agents_in_role(&groups, AgentRole::Closer), 7);
        assert_eq!(agents_in_role(&groups, AgentRole::Dialer), 2);
    }

    #[test]
    fn test_empty_staffing_counts_zero() {
        assert_eq!(total_agents(&[]), 0);
        assert_eq!(agents_in_role(&[], AgentRole::Dialer), 0);
    }
}
