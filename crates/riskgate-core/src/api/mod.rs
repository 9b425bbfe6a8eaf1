//! API clients for external services.

pub mod oracle;

pub use oracle::OracleClient;
