//! Backend storage layer
//!
//! One client wrapper per backend kind. Handles are created once at startup
//! and shared across requests; reconnection behavior is whatever each driver
//! provides.

pub mod cache;
pub mod documents;
pub mod error;
pub mod outbound;
pub mod relational;

pub use cache::CacheStore;
pub use documents::DocumentStore;
pub use error::StoreError;
pub use outbound::HttpProbe;
pub use relational::{MySqlStore, PgStore};
