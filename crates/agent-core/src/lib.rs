//! Core types shared across the arena analytics workspace
//!
//! Every tool, whatever domain error it produces internally, reports failures
//! through the [`Error`] defined here so that callers see a single error
//! channel at the tool boundary.

pub mod error;

pub use error::{Error, Result};
