//! This crate contains the shared UI of the customer-service portal: the
//! identity login form, its state machine and the backend client behind it.

pub mod app;
pub use app::SupportPortal;

pub mod components;
pub mod login;
pub mod services;
pub mod utils;
