//! FauxBase command-line bootstrap
//!
//! Persistent flags bound into a layered configuration store, one-time
//! configuration, subcommand dispatch, and the product version record.

pub mod about;
pub mod cli;
pub mod config;
pub mod exitcode;
pub mod logging;
pub mod util;
