//! Request types for the calculation API.
//!
//! This module defines the JSON request structure for the `/calculate`
//! endpoint. Every value field arrives as raw text exactly as the user
//! entered it; coercion and the negativity gate run when the request is
//! converted into an [`InputSnapshot`].

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{
    AgentRole, ExpenseLineItem, InputSnapshot, LineKind, LineState, PhoneLineGroup, RevenueInput,
    SalesMode, StaffingGroup,
};

use super::coerce::{integer_value, numeric_value, signed_integer_value, signed_numeric_value};

/// Request body for the `/calculate` endpoint.
///
/// The revenue fields are mode-gated: `total_sales` is read in
/// `TotalSales` mode, `averages` in `PerAgentAverage` mode; the inactive
/// field is ignored entirely, matching the one-active-variant invariant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Fixed monthly cost fields.
    pub expenses: Vec<ExpenseField>,
    /// Staffing group fields.
    pub staffing: Vec<StaffingField>,
    /// Phone-line group fields with their override trackers.
    pub phone_lines: Vec<PhoneLineField>,
    /// The revenue entry mode selected on the form.
    pub mode: SalesMode,
    /// Total monthly sales as entered (TotalSales mode).
    #[serde(default)]
    pub total_sales: Option<String>,
    /// Per-role average sales as entered (PerAgentAverage mode).
    #[serde(default)]
    pub averages: Option<AverageFields>,
}

/// A fixed monthly cost field as entered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseField {
    /// Identifier for the expense line.
    pub name: String,
    /// The amount as raw text.
    pub amount: String,
}

/// A staffing group field as entered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaffingField {
    /// Identifier for the group.
    pub name: String,
    /// The commission role of agents in this group.
    pub role: AgentRole,
    /// Monthly salary per agent as raw text.
    pub unit_cost: String,
    /// Agent count as raw text.
    pub count: String,
}

/// A phone-line group field as entered, with its override tracker.
///
/// `state` round-trips from the previous response so the server stays
/// stateless; `edited` is set by the adapter when the user authored the
/// displayed count in this submission, which moves the group to
/// `Overridden` regardless of the value typed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhoneLineField {
    /// Identifier for the line group.
    pub name: String,
    /// The kind of line, selecting the auto-derivation formula.
    pub kind: LineKind,
    /// Monthly cost per line as raw text.
    pub cost_per_line: String,
    /// Line count as raw text.
    pub count: String,
    /// Tracker state carried over from the previous response.
    #[serde(default)]
    pub state: LineState,
    /// True when the user authored the displayed count this submission.
    #[serde(default)]
    pub edited: bool,
}

/// Per-role average sales fields as entered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageFields {
    /// Average monthly sales per dialer as raw text.
    pub dialer: String,
    /// Average monthly sales per closer as raw text.
    pub closer: String,
}

impl CalculationRequest {
    /// Coerces and validates the raw fields into an engine snapshot.
    ///
    /// Validation inspects the pre-clamp signed parse, so a negative entry
    /// is rejected rather than silently flattened to zero:
    ///
    /// - total sales < 0 in TotalSales mode (`NegativeSales`)
    /// - any per-role average < 0 in PerAgentAverage mode (`NegativeAverage`)
    /// - any staffing or line count < 0 (`NegativeCount`)
    ///
    /// On rejection no snapshot is produced and nothing is calculated.
    pub fn to_snapshot(&self) -> EngineResult<InputSnapshot> {
        for field in &self.staffing {
            let count = signed_integer_value(&field.count);
            if count < 0 {
                return Err(EngineError::NegativeCount {
                    field: field.name.clone(),
                    value: count,
                });
            }
        }
        for field in &self.phone_lines {
            let count = signed_integer_value(&field.count);
            if count < 0 {
                return Err(EngineError::NegativeCount {
                    field: field.name.clone(),
                    value: count,
                });
            }
        }

        let revenue = match self.mode {
            SalesMode::TotalSales => {
                let raw = self.total_sales.as_deref().unwrap_or("");
                let amount = signed_numeric_value(raw);
                if amount.is_sign_negative() && !amount.is_zero() {
                    return Err(EngineError::NegativeSales { amount });
                }
                RevenueInput::TotalSales {
                    amount: numeric_value(raw),
                }
            }
            SalesMode::PerAgentAverage => {
                let (dialer_raw, closer_raw) = match &self.averages {
                    Some(averages) => (averages.dialer.as_str(), averages.closer.as_str()),
                    None => ("", ""),
                };

                for (role, raw) in [
                    (AgentRole::Dialer, dialer_raw),
                    (AgentRole::Closer, closer_raw),
                ] {
                    let amount = signed_numeric_value(raw);
                    if amount.is_sign_negative() && !amount.is_zero() {
                        return Err(EngineError::NegativeAverage {
                            role: role.as_str().to_string(),
                            amount,
                        });
                    }
                }

                RevenueInput::PerAgentAverages {
                    dialer: numeric_value(dialer_raw),
                    closer: numeric_value(closer_raw),
                }
            }
        };

        let expenses = self
            .expenses
            .iter()
            .map(|field| ExpenseLineItem {
                name: field.name.clone(),
                amount: numeric_value(&field.amount),
            })
            .collect();

        let staffing = self
            .staffing
            .iter()
            .map(|field| StaffingGroup {
                name: field.name.clone(),
                role: field.role,
                unit_cost: numeric_value(&field.unit_cost),
                count: integer_value(&field.count),
            })
            .collect();

        let phone_lines = self
            .phone_lines
            .iter()
            .map(|field| PhoneLineGroup {
                name: field.name.clone(),
                kind: field.kind,
                cost_per_line: numeric_value(&field.cost_per_line),
                count: integer_value(&field.count),
                // Provenance on write: an edit overrides, value regardless.
                state: if field.edited {
                    LineState::Overridden
                } else {
                    field.state
                },
            })
            .collect();

        Ok(InputSnapshot {
            expenses,
            staffing,
            phone_lines,
            revenue,
        })
    }
}
