//! App-wide constants.
//!
//! Centralises the tool name, config paths, environment variable names
//! and the statutory SSNIT figures so a rename only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "ssnit";

/// Crate version, as set in `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compilation target triple (set by `build.rs`).
pub const TARGET: &str = env!("TARGET");

/// Local config filename (e.g. `.ssnit.toml` in the working directory).
pub const CONFIG_FILENAME: &str = ".ssnit.toml";

/// Directory name under `~/.config/` for global config.
pub const CONFIG_DIR: &str = "ssnit";

// ── Statutory scheme ────────────────────────────────────────────────

/// Minimum number of contributed months required to qualify.
pub const ELIGIBLE_MONTHS: i64 = 180;

/// Pension right earned at exactly [`ELIGIBLE_MONTHS`], in percent.
pub const BASE_ELIGIBLE_PERCENTAGE: f64 = 37.5;

/// Percent added to the pension right for every 12 months beyond the minimum.
pub const ACCRUAL_PER_YEAR: f64 = 1.125;

/// Upper bound on the pension right, in percent.
pub const MAX_PENSION_RIGHT: f64 = 60.0;

/// Currency suffix printed after the pension pay.
pub const CURRENCY: &str = "GHS";

// ── Prompts ─────────────────────────────────────────────────────────

pub const PROMPT_SALARY: &str = "Enter your average of best 3 years salary (per annum): ";
pub const PROMPT_MONTHS: &str = "Enter your total months contributed: ";

// ── Environment variable names ──────────────────────────────────────

pub const ENV_FORMAT: &str = "SSNIT_FORMAT";
pub const ENV_CURRENCY: &str = "SSNIT_CURRENCY";
pub const ENV_LOG: &str = "SSNIT_LOG";
