//! Riskgate Core Library
//!
//! Shared types, configuration, and the risk-oracle API client for the
//! riskgate system.

pub mod api;
pub mod config;
pub mod error;
pub mod types;

pub use error::{Error, Result};
