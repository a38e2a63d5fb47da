//! Configuration types for the calculation engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ExpenseLineItem, PhoneLineGroup, StaffingGroup};

/// A commission tier: a per-agent average threshold and a payout rate.
///
/// Commission is earned only on the portion of the average above the
/// threshold; the boundary value itself earns nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommissionTier {
    /// Per-agent average sales above which commission accrues.
    pub threshold: Decimal,
    /// Fraction of the excess paid per agent.
    pub rate: Decimal,
}

/// The commission schedule in force.
///
/// Earlier versions of the operation paid one tier for all agents; the
/// latest splits dialers and closers onto independent tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "schedule", rename_all = "snake_case")]
pub enum CommissionSchedule {
    /// One tier applied to the blended average across all agents.
    Flat {
        /// The single tier for all agents.
        tier: CommissionTier,
    },
    /// Independent tiers per role, applied to each role's average and count.
    PerRole {
        /// Tier for dialing agents.
        dialer: CommissionTier,
        /// Tier for closing agents.
        closer: CommissionTier,
    },
}

/// Revenue rate constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueRates {
    /// Fraction of sales retained after deductions (0.55 in all variants).
    pub net_revenue_rate: Decimal,
    /// Optional pass-through fraction broken out as a separate remit figure.
    #[serde(default)]
    pub remit_rate: Option<Decimal>,
}

/// Phone-line auto-derivation rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneLineRules {
    /// Whether line counts are derived from staffing counts at all.
    pub auto_derive: bool,
    /// Fixed admin headcount added to every derived line count.
    pub admin_line_constant: u32,
}

/// The complete engine configuration loaded from `engine.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Revenue rate constants.
    pub revenue: RevenueRates,
    /// The commission schedule in force.
    pub commission: CommissionSchedule,
    /// Phone-line auto-derivation rules.
    pub phone_lines: PhoneLineRules,
}

/// Default form values loaded from `defaults.yaml`.
///
/// These are the values the reset flow restores: the named expense lines,
/// staffing groups, and phone-line groups of the operation, with both line
/// groups back in the auto state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefaults {
    /// Default expense line items.
    pub expenses: Vec<ExpenseLineItem>,
    /// Default staffing groups.
    pub staffing: Vec<StaffingGroup>,
    /// Default phone-line groups (state omitted in YAML, defaulting to auto).
    pub phone_lines: Vec<PhoneLineGroup>,
    /// Default total monthly sales figure.
    pub total_sales: Decimal,
}
