//! Revenue input model.
//!
//! Revenue is a tagged union: either a single total-sales figure or
//! per-agent averages for each role. Exactly one variant is active at a
//! time, selected by the mode flag on the form.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The revenue entry mode selected on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SalesMode {
    /// A single total monthly sales figure is entered.
    TotalSales,
    /// Average sale per agent is entered for each role.
    PerAgentAverage,
}

/// The active revenue input, resolved once by the sales reconciler.
///
/// Modeling the mode as a tagged variant means downstream formulas never
/// re-check the mode flag; they consume the reconciled totals instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum RevenueInput {
    /// Total monthly sales entered directly.
    TotalSales {
        /// The total monthly sales figure, non-negative.
        amount: Decimal,
    },
    /// Average sale per agent, entered per role.
    PerAgentAverages {
        /// Average monthly sales per dialer.
        dialer: Decimal,
        /// Average monthly sales per closer.
        closer: Decimal,
    },
}

impl RevenueInput {
    /// Returns the mode this input was entered in.
    pub fn mode(&self) -> SalesMode {
        match self {
            RevenueInput::TotalSales { .. } => SalesMode::TotalSales,
            RevenueInput::PerAgentAverages { .. } => SalesMode::PerAgentAverage,
        }
    }
}
