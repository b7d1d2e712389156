//! HTTP handlers

pub mod combos;
pub mod error;
pub mod health;
pub mod items;
pub mod probes;

pub use health::healthz;
