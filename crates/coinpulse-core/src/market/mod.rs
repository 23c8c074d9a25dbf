//! Market-data access: upstream API client with deterministic mock fallback.

pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod mock;
pub mod transport;
pub mod types;

pub use client::*;
pub use config::*;
pub use error::*;
pub use format::*;
pub use mock::*;
pub use transport::*;
pub use types::*;
