// Core types for the identity login form - no dioxus imports needed here
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::form_validation::normalize_identifier;
use super::record::IdentityRecord;
use crate::services::client::LoginError;

/// Which identity domain the form targets
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginMode {
    /// Conference user, identified by registration ID
    #[default]
    User,
    /// Airline customer, identified by account number
    Customer,
}

impl LoginMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoginMode::User => "user",
            LoginMode::Customer => "customer",
        }
    }

    /// First path segment of the lookup endpoint
    pub fn endpoint_segment(&self) -> &'static str {
        self.as_str()
    }

    /// Apply the mode's case rule to text as it is typed
    pub fn normalize_input(&self, text: &str) -> String {
        match self {
            LoginMode::Customer => text.to_uppercase(),
            LoginMode::User => text.to_string(),
        }
    }

    pub fn identifier_label(&self) -> &'static str {
        match self {
            LoginMode::User => "Registration ID:",
            LoginMode::Customer => "Account number:",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            LoginMode::User => "Enter your registration ID (e.g. 50464)",
            LoginMode::Customer => "Enter your account number (e.g. CUST001)",
        }
    }

    pub fn tab_label(&self) -> &'static str {
        match self {
            LoginMode::User => "Conference Attendee",
            LoginMode::Customer => "Airline Customer",
        }
    }
}

/// Where the form is in its submit cycle
#[derive(Clone, PartialEq, Debug, Default)]
pub enum LoginPhase {
    #[default]
    Idle,
    /// A lookup is in flight; only completions for `attempt` are accepted
    Submitting { attempt: u64 },
    /// Last attempt failed with this message
    Failed(String),
    /// Last attempt handed a record to the parent
    Succeeded,
}

/// One accepted submit: what to look up and how to recognise its completion
#[derive(Clone, PartialEq, Debug)]
pub struct SubmitTicket {
    pub attempt: u64,
    pub mode: LoginMode,
    pub identifier: String,
}

/// Payload of the form's `on_login` callback
#[derive(Clone, PartialEq, Debug)]
pub struct LoginSuccess {
    pub identifier: String,
    pub record: IdentityRecord,
    pub mode: LoginMode,
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum LoginAction {
    SetIdentifier(String),
    SetMode(LoginMode),
}

#[derive(Clone, PartialEq, Debug, Default)]
pub struct LoginFormState {
    pub identifier: String,
    pub mode: LoginMode,
    pub phase: LoginPhase,
    last_attempt: u64,
}

impl LoginFormState {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoginPhase::Submitting { .. })
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.phase {
            LoginPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Whether a completion for `attempt` may still change the form
    pub fn is_current(&self, attempt: u64) -> bool {
        self.phase == LoginPhase::Submitting { attempt }
    }

    pub fn reduce_in_place(&mut self, action: LoginAction) {
        match action {
            LoginAction::SetIdentifier(text) => {
                self.identifier = self.mode.normalize_input(&text);
            }
            LoginAction::SetMode(mode) => {
                // Mode is locked while a lookup runs so the visible mode always
                // matches the request in flight; the selector is disabled too.
                if self.is_loading() {
                    warn!("Ignoring switch to {} mode while a lookup is in flight", mode.as_str());
                    return;
                }
                self.mode = mode;
                // Messages name the identifier kind, so they go stale on a switch
                if matches!(self.phase, LoginPhase::Failed(_)) {
                    self.phase = LoginPhase::Idle;
                }
            }
        }
    }

    /// Validate the identifier and enter `Submitting`. A rejected identifier
    /// leaves the form in `Failed` with the mode's prompt and no ticket.
    pub fn begin_submit(&mut self) -> Result<SubmitTicket, LoginError> {
        let identifier = match normalize_identifier(self.mode, &self.identifier) {
            Ok(identifier) => identifier,
            Err(e) => {
                self.phase = LoginPhase::Failed(e.user_message(self.mode));
                return Err(e);
            }
        };

        self.last_attempt += 1;
        self.phase = LoginPhase::Submitting {
            attempt: self.last_attempt,
        };

        Ok(SubmitTicket {
            attempt: self.last_attempt,
            mode: self.mode,
            identifier,
        })
    }

    /// Settle the attempt behind `ticket`. Returns the payload to hand to the
    /// parent on success; stale attempts change nothing and return `None`.
    pub fn complete_submit(
        &mut self,
        ticket: &SubmitTicket,
        result: Result<IdentityRecord, LoginError>,
    ) -> Option<LoginSuccess> {
        if !self.is_current(ticket.attempt) {
            debug!(
                "Discarding result of superseded attempt {} (phase: {:?})",
                ticket.attempt, self.phase
            );
            return None;
        }

        match result {
            Ok(record) => {
                self.phase = LoginPhase::Succeeded;
                Some(LoginSuccess {
                    identifier: ticket.identifier.clone(),
                    record,
                    mode: ticket.mode,
                })
            }
            Err(e) => {
                self.phase = LoginPhase::Failed(e.user_message(ticket.mode));
                None
            }
        }
    }
}
