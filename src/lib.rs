//! Liveness probe for language runtime containers.
//!
//! Asks the runtime hosted in the container for its own version, compares it
//! against a minimum fixed at build time, and reports the outcome as a single
//! `OK` / `ERROR: <description>` line plus exit code `0` / `1`.

pub mod check;
pub mod config;
pub mod error;
pub mod logging;
pub mod report;
pub mod runtime;
pub mod version;
