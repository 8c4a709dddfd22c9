pub mod identity_login_form;
pub mod mode_selector;

pub use identity_login_form::*;
pub use mode_selector::*;
