//! Login form for conference users and airline customers

use dioxus::prelude::*;

use crate::components::{
    display::{LoadingIndicator, LoginFeedback},
    forms::ModeSelector,
    input::ValidatedInput,
};
use crate::login::{
    identifier_input_class, submit_button_label, submit_login, LoginAction, LoginFormState,
    LoginMode, LoginSuccess,
};
use crate::services::client::{IdentityClient, LoginError};
use crate::services::config::ClientConfig;
use crate::{console_error, console_info, console_warn};

const IDENTIFIER_INPUT_ID: &str = "identity-identifier";

#[derive(Props, PartialEq, Clone)]
pub struct IdentityLoginFormProps {
    /// Called once per successful sign-in with the submitted identifier,
    /// the validated record and the mode it was looked up in
    pub on_login: EventHandler<LoginSuccess>,
    #[props(default)]
    pub config: ClientConfig,
}

#[component]
pub fn IdentityLoginForm(props: IdentityLoginFormProps) -> Element {
    let on_login = props.on_login;
    let config = props.config.clone();

    let mut state = use_signal(LoginFormState::default);
    let mut in_flight = use_signal(|| None::<Task>);
    let client = use_signal(move || {
        IdentityClient::new(&config).inspect_err(|e| {
            console_error!("[IdentityLoginForm] Identity client unavailable: {}", e);
        })
    });

    // Dispatch function for actions - using in-place reduction to preserve Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: LoginAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let mut submit = move || {
        if state.peek().is_loading() {
            return;
        }

        let ticket = match state.write().begin_submit() {
            Ok(ticket) => ticket,
            Err(e) => {
                console_warn!("[IdentityLoginForm] Submit rejected: {}", e);
                return;
            }
        };

        console_info!(
            "[IdentityLoginForm] Attempt {}: looking up {} {}",
            ticket.attempt,
            ticket.mode.as_str(),
            ticket.identifier
        );

        // A newer attempt supersedes whatever is still running
        if let Some(previous) = in_flight.write().take() {
            previous.cancel();
        }

        let directory = (*client.peek()).clone();
        let task = spawn(async move {
            let result = match directory {
                Ok(directory) => submit_login(&directory, &ticket).await,
                Err(e) => Err(LoginError::from(e)),
            };

            if let Err(e) = &result {
                console_error!("[IdentityLoginForm] Attempt {} failed: {}", ticket.attempt, e);
            }

            let success = state.write().complete_submit(&ticket, result);
            in_flight.set(None);

            if let Some(success) = success {
                console_info!(
                    "[IdentityLoginForm] Signed in {} {}",
                    success.mode.as_str(),
                    success.identifier
                );
                on_login.call(success);
            }
        });
        in_flight.set(Some(task));
    };

    let current = state();
    let loading = current.is_loading();
    let lookup_message = match current.mode {
        LoginMode::User => "Looking up your registration...",
        LoginMode::Customer => "Looking up your account...",
    };

    rsx! {
        div {
            class: "identity-login-form",

            h2 {
                class: "form-title",
                "Sign in to Customer Service"
            }

            ModeSelector {
                selected: current.mode,
                disabled: loading,
                on_change: move |mode: LoginMode| {
                    dispatch.call(LoginAction::SetMode(mode));
                }
            }

            // Identifier Input Section
            div {
                class: "input-section",
                label {
                    class: "input-label",
                    r#for: IDENTIFIER_INPUT_ID,
                    "{current.mode.identifier_label()}"
                }
                ValidatedInput {
                    id: IDENTIFIER_INPUT_ID.to_string(),
                    value: current.identifier.clone(),
                    placeholder: current.mode.placeholder().to_string(),
                    input_class: identifier_input_class(&current).to_string(),
                    on_change: move |text: String| {
                        dispatch.call(LoginAction::SetIdentifier(text));
                    },
                    on_enter: move |_| submit()
                }
            }

            // Sign In Button
            div {
                class: "button-section",
                button {
                    class: "login-button",
                    r#type: "button",
                    disabled: loading,
                    onclick: move |_| submit(),
                    "{submit_button_label(&current)}"
                }
            }

            if loading {
                LoadingIndicator {
                    message: lookup_message.to_string()
                }
            }

            LoginFeedback {
                phase: current.phase.clone()
            }
        }
    }
}
