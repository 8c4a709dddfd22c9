use super::types::{LoginFormState, LoginMode, LoginPhase};
use crate::services::client::LoginError;

/// Identifier as it is sent to the backend and handed to `on_login`.
///
/// Surrounding whitespace is trimmed from the typed text before it is used in
/// the request path or forwarded; inner characters and (for registration IDs)
/// case are kept as typed. Account numbers are uppercased. Whitespace-only
/// input is rejected.
pub fn normalize_identifier(mode: LoginMode, raw: &str) -> Result<String, LoginError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(LoginError::EmptyIdentifier);
    }
    Ok(mode.normalize_input(trimmed))
}

/// Label of the submit button for the current phase
pub fn submit_button_label(state: &LoginFormState) -> &'static str {
    match state.phase {
        LoginPhase::Submitting { .. } => "Signing in...",
        _ => "Sign In",
    }
}

pub fn identifier_input_class(state: &LoginFormState) -> &'static str {
    match state.phase {
        LoginPhase::Failed(_) => "input-field input-invalid",
        _ => "input-field",
    }
}
