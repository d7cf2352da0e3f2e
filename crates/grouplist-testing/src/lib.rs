//! Testing infrastructure for grouplist tests.
//!
//! - `TestWorld`: isolated temp directory with data/config files and a
//!   handle to run the `grouplist` binary
//! - `assertions`: checks over the JSON output of `grouplist list`
//! - `fixtures`: record builders and canned data sets

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
