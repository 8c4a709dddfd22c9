use tracing::{info, instrument, warn};

use super::record::IdentityRecord;
use super::types::SubmitTicket;
use crate::services::client::{IdentityDirectory, LoginError};

/// Look up the identity behind `ticket` and validate the record's shape.
///
/// Exactly one directory request is made per call.
#[instrument(skip(directory), fields(attempt = ticket.attempt), err)]
pub async fn submit_login<D>(directory: &D, ticket: &SubmitTicket) -> Result<IdentityRecord, LoginError>
where
    D: IdentityDirectory + ?Sized,
{
    let body = directory
        .fetch_record(ticket.mode, &ticket.identifier)
        .await?;

    match IdentityRecord::from_response(ticket.mode, body) {
        Ok(record) => {
            info!(
                "Identity lookup succeeded for {} {}",
                ticket.mode.as_str(),
                ticket.identifier
            );
            Ok(record)
        }
        Err(e) => {
            warn!(
                "Rejected {} record for {}: {}",
                ticket.mode.as_str(),
                ticket.identifier,
                e
            );
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::login::{LoginAction, LoginFormState, LoginMode, LoginPhase};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::cell::RefCell;

    /// In-memory directory that records every lookup
    struct FakeDirectory {
        response: Result<Value, LoginError>,
        calls: RefCell<Vec<(LoginMode, String)>>,
    }

    impl FakeDirectory {
        fn answering(response: Result<Value, LoginError>) -> Self {
            Self {
                response,
                calls: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(LoginMode, String)> {
            self.calls.borrow().clone()
        }
    }

    #[async_trait(?Send)]
    impl IdentityDirectory for FakeDirectory {
        async fn fetch_record(
            &self,
            mode: LoginMode,
            identifier: &str,
        ) -> Result<Value, LoginError> {
            self.calls.borrow_mut().push((mode, identifier.to_string()));
            self.response.clone()
        }
    }

    /// Drive one submit cycle the way the form component does
    async fn run_cycle(
        state: &mut LoginFormState,
        directory: &FakeDirectory,
    ) -> Option<crate::login::LoginSuccess> {
        let ticket = state.begin_submit().ok()?;
        let result = submit_login(directory, &ticket).await;
        state.complete_submit(&ticket, result)
    }

    fn state_with(mode: LoginMode, identifier: &str) -> LoginFormState {
        let mut state = LoginFormState::default();
        state.reduce_in_place(LoginAction::SetMode(mode));
        state.reduce_in_place(LoginAction::SetIdentifier(identifier.to_string()));
        state
    }

    #[tokio::test]
    async fn test_user_login_forwards_record_once() {
        let directory = FakeDirectory::answering(Ok(json!({
            "registration_id": "50464",
            "details": {"user_name": "Ada Lovelace"}
        })));
        let mut state = state_with(LoginMode::User, "50464");

        let success = run_cycle(&mut state, &directory).await.unwrap();

        assert_eq!(success.identifier, "50464");
        assert_eq!(success.mode, LoginMode::User);
        assert_eq!(success.record.summary().display_name, "Ada Lovelace");
        assert_eq!(directory.calls(), vec![(LoginMode::User, "50464".to_string())]);
        assert!(!state.is_loading());
        assert_eq!(state.error_message(), None);
    }

    #[tokio::test]
    async fn test_customer_identifier_is_uppercased_and_404_reported() {
        let directory = FakeDirectory::answering(Err(LoginError::NotFound));
        let mut state = LoginFormState::default();
        state.reduce_in_place(LoginAction::SetIdentifier("cust001".to_string()));
        // Typed in user mode, so still lower case in the field
        state.reduce_in_place(LoginAction::SetMode(LoginMode::Customer));
        assert_eq!(state.identifier, "cust001");

        let success = run_cycle(&mut state, &directory).await;

        assert!(success.is_none());
        assert_eq!(
            directory.calls(),
            vec![(LoginMode::Customer, "CUST001".to_string())]
        );
        assert!(state
            .error_message()
            .unwrap()
            .starts_with("Account number not found"));
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_empty_identifier_sends_nothing() {
        let directory = FakeDirectory::answering(Ok(json!({"details": {}})));
        let mut state = state_with(LoginMode::User, "");

        assert!(run_cycle(&mut state, &directory).await.is_none());

        assert!(directory.calls().is_empty());
        assert_eq!(
            state.error_message(),
            Some("Please enter your registration ID")
        );
    }

    #[tokio::test]
    async fn test_customer_without_account_number_is_invalid() {
        let directory = FakeDirectory::answering(Ok(json!({"name": "X"})));
        let mut state = state_with(LoginMode::Customer, "CUST002");

        assert!(run_cycle(&mut state, &directory).await.is_none());

        assert_eq!(
            state.error_message(),
            Some("Invalid customer data received. Please contact support.")
        );
        assert!(!state.is_loading());
    }

    #[tokio::test]
    async fn test_user_without_details_is_invalid() {
        let directory = FakeDirectory::answering(Ok(json!({"registration_id": "50464"})));
        let mut state = state_with(LoginMode::User, "50464");

        assert!(run_cycle(&mut state, &directory).await.is_none());
        assert_eq!(
            state.error_message(),
            Some("Invalid user data received. Please contact support.")
        );
    }

    #[tokio::test]
    async fn test_network_failure_clears_loading() {
        let directory = FakeDirectory::answering(Err(LoginError::Network {
            message: "fetch failed".to_string(),
        }));
        let mut state = state_with(LoginMode::User, "50464");

        assert!(run_cycle(&mut state, &directory).await.is_none());
        assert!(!state.is_loading());
        assert!(matches!(state.phase, LoginPhase::Failed(_)));
    }

    #[tokio::test]
    async fn test_mode_switch_changes_endpoint_and_rules() {
        let directory = FakeDirectory::answering(Ok(json!({"details": {"user_name": "Ada"}})));
        let mut state = state_with(LoginMode::User, "ab12");
        state.reduce_in_place(LoginAction::SetMode(LoginMode::Customer));

        // A user-shaped body fails customer validation
        assert!(run_cycle(&mut state, &directory).await.is_none());
        assert_eq!(
            directory.calls(),
            vec![(LoginMode::Customer, "AB12".to_string())]
        );
        assert!(state.error_message().unwrap().contains("customer"));

        state.reduce_in_place(LoginAction::SetMode(LoginMode::User));
        let success = run_cycle(&mut state, &directory).await.unwrap();
        assert_eq!(success.mode, LoginMode::User);
        assert_eq!(success.identifier, "ab12");
    }
}
