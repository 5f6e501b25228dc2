//! MongoDB access for civilact
//!
//! This crate holds the connection handle and the operations on the
//! `heroes` collection. Operations are free functions taking the handle;
//! they return `Result` and leave failure policy to the caller.

pub mod connection;
pub mod hero;
pub mod heroes;

pub use civilact_common::{CivilactError, Result};
pub use connection::Connection;
pub use hero::Hero;
