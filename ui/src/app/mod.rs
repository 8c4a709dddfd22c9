mod support_portal;

pub use support_portal::SupportPortal;
