//! Staffing group model and agent roles.
//!
//! This module defines the StaffingGroup struct and AgentRole enum for
//! representing compensated agents on the sales floor.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The commission role of a staffing group.
///
/// Dialers place outbound calls; closers finish sales. The two roles carry
/// independent commission tiers under a per-role schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    /// Outbound dialing agents (e.g., overseas staff).
    Dialer,
    /// Closing agents (e.g., in-country and remote-admin staff).
    Closer,
}

impl AgentRole {
    /// Returns the lowercase name of the role for display and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            AgentRole::Dialer => "dialer",
            AgentRole::Closer => "closer",
        }
    }
}

/// A named category of compensated agents.
///
/// Total cost for the group is `unit_cost * count`. Counts are headcount
/// and contribute to the agent total; phone lines do not (see
/// [`PhoneLineGroup`](super::PhoneLineGroup)).
///
/// # Example
///
/// ```
/// use salesfloor_engine::models::{AgentRole, StaffingGroup};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let overseas = StaffingGroup {
///     name: "overseas".to_string(),
///     role: AgentRole::Dialer,
///     unit_cost: Decimal::from_str("720").unwrap(),
///     count: 2,
/// };
/// assert_eq!(overseas.total_cost(), Decimal::from_str("1440").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingGroup {
    /// Identifier for the group (e.g., "overseas", "tij", "rsa").
    pub name: String,
    /// The commission role of agents in this group.
    pub role: AgentRole,
    /// Monthly salary per agent, non-negative.
    pub unit_cost: Decimal,
    /// Number of agents in the group.
    pub count: u32,
}

impl StaffingGroup {
    /// Returns the total monthly cost of the group.
    pub fn total_cost(&self) -> Decimal {
        self.unit_cost * Decimal::from(self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_total_cost_is_unit_cost_times_count() {
        let group = StaffingGroup {
            name: "tij".to_string(),
            role: AgentRole::Closer,
            unit_cost: dec("1300"),
            count: 3,
        };
        assert_eq!(group.total_cost(), dec("3900"));
    }

    #[test]
    fn test_zero_count_contributes_nothing() {
        let group = StaffingGroup {
            name: "rsa".to_string(),
            role: AgentRole::Closer,
            unit_cost: dec("1100"),
            count: 0,
        };
        assert_eq!(group.total_cost(), Decimal::ZERO);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&AgentRole::Dialer).unwrap(), "\"dialer\"");
        assert_eq!(serde_json::to_string(&AgentRole::Closer).unwrap(), "\"closer\"");

        let role: AgentRole = serde_json::from_str("\"closer\"").unwrap();
        assert_eq!(role, AgentRole::Closer);
    }
}
