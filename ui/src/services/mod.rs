//! Infrastructure Services
//!
//! - **client**: HTTP lookups against the customer-service backend
//! - **config**: backend address and client settings
//!
//! The services are designed to be WASM-first, using async traits without
//! Send/Sync bounds for compatibility.

pub mod client;
pub mod config;
