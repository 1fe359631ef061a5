//! Expense Tracker - personal expense tracking web service
//!
//! This library records dated expenses by category, keeps a per-category
//! monthly budget and a monthly income, and derives a current-month analysis
//! with saving tips and chart data. Everything is exposed over a JSON HTTP
//! API and a small CLI.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, categories, expenses, budget, income)
//! - `storage`: Whole-file JSON record store
//! - `reports`: Month filter, analysis, tips and charts
//! - `export`: CSV export
//! - `services`: Business logic layer
//! - `api`: axum router and handlers
//! - `cli`: Command handlers for the binary
//! - `logging`: tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{paths::ExpensePaths, settings::Settings};
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
