//! Identity Login
//!
//! State and flow behind the portal's login form. A visitor signs in either as
//! a conference user (registration ID) or as an airline customer (account
//! number):
//!
//! - **types**: login mode, the form's phase machine and its reducer
//! - **form_validation**: identifier normalization and presentation helpers
//! - **record**: typed identity records and their shape validation
//! - **submission**: the lookup performed for one submit
//!
//! # Usage
//!
//! ```rust,ignore
//! let ticket = state.begin_submit()?;
//! let result = submit_login(&client, &ticket).await;
//! if let Some(success) = state.complete_submit(&ticket, result) {
//!     on_login.call(success);
//! }
//! ```

pub mod form_validation;
pub mod record;
pub mod submission;
pub mod types;

pub use form_validation::*;
pub use record::*;
pub use submission::submit_login;
pub use types::*;
