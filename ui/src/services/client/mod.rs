// Client-side access to the customer-service backend
//
// This module provides:
// - Typed login errors with their user-facing messages
// - The identity directory seam and its HTTP implementation

pub mod errors;
pub mod identity_client;

pub use errors::LoginError;
pub use identity_client::{IdentityClient, IdentityDirectory};
