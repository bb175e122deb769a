//! # rulemap-observability
//!
//! Subscriber setup, span macros for the hot paths, and structured log events
//! shared by the matcher and the retriever.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter, LOG_ENV_VAR};
