pub mod identity_summary_card;
pub mod loading_indicator;
pub mod login_feedback;

pub use identity_summary_card::*;
pub use loading_indicator::*;
pub use login_feedback::*;
