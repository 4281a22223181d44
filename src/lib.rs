//! Colours - average colour and colour volume summaries for PNG images
//!
//! The analysis itself lives in the `colour-volumes` crate. This crate
//! supplies what surrounds it: PNG decoding, YAML configuration, report
//! formatting and the CLI. Modules are public for integration testing.

pub mod error;
pub mod models;
pub mod services;
