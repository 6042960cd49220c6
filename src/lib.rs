//! Payroll Figures Engine
//!
//! This crate computes derived payroll figures (income tax, provident fund,
//! tax savings) from monthly salary inputs using the FY 2024-25 progressive
//! tax schedule for salaried individuals, and serves the results over a
//! JSON calculation endpoint.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
