use dioxus::prelude::*;

use crate::login::LoginPhase;

#[derive(Props, PartialEq, Clone)]
pub struct LoginFeedbackProps {
    pub phase: LoginPhase,
}

/// Result line under the login button: the current error, or nothing
#[component]
pub fn LoginFeedback(props: LoginFeedbackProps) -> Element {
    match props.phase {
        LoginPhase::Failed(message) => rsx! {
            div {
                class: "login-feedback error",
                role: "alert",
                style: "color: #ef4444; background-color: #fef2f2; border: 1px solid #ef4444; padding: 8px; border-radius: 4px; margin-top: 4px;",
                "⚠ {message}"
            }
        },
        _ => rsx! { div {} },
    }
}
