//! Phone-line auto-derivation and override tracking.
//!
//! The latest version of the operation keeps two phone-line counts
//! synchronized with staffing levels unless the user has frozen them:
//!
//! - local lines = closer count + admin constant
//! - dialer lines = closer count + dialer count + admin constant
//!
//! Each group is a two-state machine: `Auto` (the count tracks the
//! formula) and `Overridden` (the count is user-authored and frozen).
//! Provenance is tagged when the value is written, so a user edit always
//! overrides, even when the typed number equals what the formula would
//! have produced. Only an explicit form reset returns a group to `Auto`.

use crate::config::PhoneLineRules;
use crate::models::{AgentRole, LineKind, PhoneLineGroup, StaffingGroup};

use super::staffing::agents_in_role;

/// Derives the line count for a group kind from staffing counts.
///
/// # Example
///
/// ```
/// use salesfloor_engine::calculation::derived_line_count;
/// use salesfloor_engine::config::PhoneLineRules;
/// use salesfloor_engine::models::{AgentRole, LineKind, StaffingGroup};
/// use rust_decimal::Decimal;
///
/// let staffing = vec![
///     StaffingGroup { name: "overseas".into(), role: AgentRole::Dialer,
///         unit_cost: Decimal::ZERO, count: 2 },
///     StaffingGroup { name: "tij".into(), role: AgentRole::Closer,
///         unit_cost: Decimal::ZERO, count: 1 },
///     StaffingGroup { name: "rsa".into(), role: AgentRole::Closer,
///         unit_cost: Decimal::ZERO, count: 1 },
/// ];
/// let rules = PhoneLineRules { auto_derive: true, admin_line_constant: 4 };
///
/// assert_eq!(derived_line_count(LineKind::Local, &staffing, &rules), 6);
/// assert_eq!(derived_line_count(LineKind::Dialer, &staffing, &rules), 8);
/// ```
pub fn derived_line_count(
    kind: LineKind,
    staffing: &[StaffingGroup],
    rules: &PhoneLineRules,
) -> u32 {
    let closers = agents_in_role(staffing, AgentRole::Closer);
    match kind {
        LineKind::Local => closers + rules.admin_line_constant,
        LineKind::Dialer => {
            closers + agents_in_role(staffing, AgentRole::Dialer) + rules.admin_line_constant
        }
    }
}

/// Recomputes the counts of all auto-state line groups in place.
///
/// Overridden groups are left untouched; groups in the auto state have
/// their counts replaced with the derived values. When `auto_derive` is
/// off (earlier versions of the operation) every displayed count is kept
/// as entered.
pub fn sync_phone_lines(
    phone_lines: &mut [PhoneLineGroup],
    staffing: &[StaffingGroup],
    rules: &PhoneLineRules,
) {
    if !rules.auto_derive {
        return;
    }

    for group in phone_lines.iter_mut() {
        if group.is_auto() {
            group.count = derived_line_count(group.kind, staffing, rules);
        }
    }
}
