//! User Interface Components
//!
//! Reusable Dioxus components for the customer-service portal:
//!
//! - **forms**: the identity login form and its mode selector
//! - **display**: loading, feedback and signed-in summary components
//! - **input**: input fields with keyboard submit support

pub mod display;
pub mod forms;
pub mod input;
