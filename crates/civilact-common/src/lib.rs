//! Common utilities for civilact
//!
//! This crate provides the error type and result alias shared across all
//! civilact crates.

pub mod error;

pub use error::{CivilactError, Result};
