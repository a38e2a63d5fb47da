//! Profit and break-even calculation engine for call-center sales operations.
//!
//! This crate derives expense totals, commission payouts, break-even sales,
//! and profit/loss from operating costs, staffing counts, and sales figures.
//! Revenue can be entered as a single total or as per-agent averages, and
//! phone-line counts can be auto-derived from staffing levels with per-field
//! override tracking.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
