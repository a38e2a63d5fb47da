//! Calculation logic for the sales floor engine.
//!
//! This module contains all the derivation formulas: static and variable
//! expense aggregation, agent counting, sales-mode reconciliation, tiered
//! commission, break-even and profit math, phone-line auto-derivation with
//! override tracking, and the orchestrator that runs one full pass.

mod commission;
mod engine;
mod expenses;
mod line_sync;
mod profitability;
mod revenue;
mod staffing;

pub use commission::{commission_for_tier, total_commission};
pub use engine::calculate;
pub use expenses::{total_static_expenses, total_variable_expenses};
pub use line_sync::{derived_line_count, sync_phone_lines};
pub use profitability::{break_even_sales, net_revenue, profit, remit_amount};
pub use revenue::{resolve_revenue, ResolvedSales};
pub use staffing::{agents_in_role, total_agents};
