//! # namematch
//!
//! Runtime pieces around the `namematch-core` engine:
//! - **cli**: argument parsing and command dispatch for the `namematch` binary
//! - **config**: loading JSON match configs from disk
//! - **error**: top-level error type
//! - **tracing**: logging setup
//!
//! ## Usage
//!
//! ```text
//! namematch match "ODONNELL, ROBERT" "Bob Odonnell" "R.S.O." --alias bob=Robert
//! namematch --config names.json match "Dr. Jane Roe" "JANE Q ROE PHD"
//! namematch normalize "Rob ODonnell M.D. PH.D." --strip-suffix MD --strip-suffix PhD
//! namematch distance testing tseting
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod tracing;

pub use cli::Cli;
pub use error::{Error, Result};
