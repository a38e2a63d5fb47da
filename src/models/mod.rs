//! Core data models for the calculation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod expense;
mod phone_line;
mod revenue;
mod snapshot;
mod staffing;

pub use calculation_result::{
    CalculationResult, CommissionBreakdown, PhoneLineStatus, ProfitOutcome, SalesSummary,
};
pub use expense::ExpenseLineItem;
pub use phone_line::{LineKind, LineState, PhoneLineGroup};
pub use revenue::{RevenueInput, SalesMode};
pub use snapshot::InputSnapshot;
pub use staffing::{AgentRole, StaffingGroup};
