use dioxus::prelude::*;

use crate::login::{IdentitySummary, LoginMode};

#[derive(Props, PartialEq, Clone)]
pub struct IdentitySummaryCardProps {
    pub summary: IdentitySummary,
    pub identifier: String,
    pub mode: LoginMode,
    pub on_sign_out: EventHandler<()>,
}

#[component]
pub fn IdentitySummaryCard(props: IdentitySummaryCardProps) -> Element {
    let summary = props.summary;
    let name = if summary.display_name.is_empty() {
        props.identifier.clone()
    } else {
        summary.display_name.clone()
    };
    let id_label = props.mode.identifier_label();

    rsx! {
        div {
            class: "identity-summary",

            h2 {
                class: "summary-title",
                "Welcome, {name}"
            }

            div {
                class: "summary-row",
                span { class: "summary-label", "{id_label}" }
                span { class: "summary-value", "{props.identifier}" }
            }

            if let Some(email) = &summary.email {
                div {
                    class: "summary-row",
                    span { class: "summary-label", "Email:" }
                    span { class: "summary-value", "{email}" }
                }
            }

            if summary.conference_attendee {
                div {
                    class: "summary-row conference",
                    "🎫 Conference attendee"
                    if let Some(conference) = &summary.conference_name {
                        " ({conference})"
                    }
                }
            }

            button {
                class: "sign-out-button",
                onclick: move |_| props.on_sign_out.call(()),
                "Sign Out"
            }
        }
    }
}
