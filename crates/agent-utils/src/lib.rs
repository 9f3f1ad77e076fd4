//! Shared utilities for the arena analytics workspace

pub mod logging;

pub use logging::{LogFormat, init_tracing, init_tracing_with};
