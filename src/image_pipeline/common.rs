//! Common utilities module
//!
//! This module contains the error type and configuration shared across the pipeline stages.

pub mod config;
pub mod error;

pub use config::{GeneratorConfig, GeneratorConfigBuilder};
pub use error::{GeneratorError, Result};
