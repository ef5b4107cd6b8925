//! ssnit — SSNIT pension calculator (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod config;
pub mod constants;
pub mod env;
pub mod input;
pub mod logging;
pub mod models;
pub mod months;
pub mod output;
pub mod pension;
