//! Phone-line group model and override state.
//!
//! Phone lines are infrastructure, not headcount: they contribute to
//! variable expenses but never to the agent total. Their counts may be
//! auto-derived from staffing levels or frozen by a user override.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kind of phone-line group, selecting its auto-derivation formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    /// In-country lines used by closers and admin staff.
    Local,
    /// Outbound dialing lines used by closers, dialers, and admin staff.
    Dialer,
}

/// Whether a phone-line count tracks the derivation formula or a user edit.
///
/// The state machine has exactly two states. A group starts in `Auto` and
/// moves to `Overridden` when the user authors its count; only an explicit
/// form reset returns it to `Auto`. Provenance is tagged on write, so a
/// user edit overrides even when the typed value equals what the formula
/// would have produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineState {
    /// The displayed count tracks the derivation formula.
    #[default]
    Auto,
    /// The displayed count is user-authored and frozen until reset.
    Overridden,
}

/// A phone-line group: a per-line cost and a line count.
///
/// # Example
///
/// ```
/// use salesfloor_engine::models::{LineKind, LineState, PhoneLineGroup};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let local = PhoneLineGroup {
///     name: "local_lines".to_string(),
///     kind: LineKind::Local,
///     cost_per_line: Decimal::from_str("60").unwrap(),
///     count: 6,
///     state: LineState::Auto,
/// };
/// assert_eq!(local.total_cost(), Decimal::from_str("360").unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneLineGroup {
    /// Identifier for the group (e.g., "local_lines", "dialer_lines").
    pub name: String,
    /// The kind of line, selecting the auto-derivation formula.
    pub kind: LineKind,
    /// Monthly cost per line, non-negative.
    pub cost_per_line: Decimal,
    /// Number of lines currently displayed.
    pub count: u32,
    /// Whether the count is auto-derived or user-overridden.
    #[serde(default)]
    pub state: LineState,
}

impl PhoneLineGroup {
    /// Returns the total monthly cost of the group.
    pub fn total_cost(&self) -> Decimal {
        self.cost_per_line * Decimal::from(self.count)
    }

    /// Returns true if the count still tracks the derivation formula.
    pub fn is_auto(&self) -> bool {
        self.state == LineState::Auto
    }
}
