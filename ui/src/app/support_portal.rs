use crate::console_info;
use dioxus::prelude::*;

use crate::components::display::IdentitySummaryCard;
use crate::login::LoginSuccess;
use crate::services::config::ClientConfig;

#[cfg(feature = "web")]
use crate::components::forms::IdentityLoginForm;

const SUPPORT_PORTAL_CSS: Asset = asset!("/assets/styling/support_portal.css");

/// Render the login form when the browser client is enabled
fn render_login_form(config: ClientConfig, on_login: EventHandler<LoginSuccess>) -> Element {
    #[cfg(feature = "web")]
    {
        rsx! {
            IdentityLoginForm {
                config: config,
                on_login: on_login
            }
        }
    }

    #[cfg(not(feature = "web"))]
    {
        let _ = (config, on_login);
        rsx! {
            div { "Login form not available for non-web features" }
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct SupportPortalProps {
    #[props(default = ClientConfig::from_build_env())]
    pub config: ClientConfig,
}

#[component]
pub fn SupportPortal(props: SupportPortalProps) -> Element {
    let mut session = use_signal(|| None::<LoginSuccess>);

    let on_login = EventHandler::new(move |success: LoginSuccess| {
        console_info!(
            "[Support Portal] {} {} signed in",
            success.mode.as_str(),
            success.identifier
        );
        session.set(Some(success));
    });

    rsx! {
        document::Link { rel: "stylesheet", href: SUPPORT_PORTAL_CSS }

        div {
            class: "support-portal-container",

            div {
                class: "title-container",
                h1 {
                    class: "portal-title",
                    "Airline Customer Service"
                }
                p {
                    class: "portal-subtitle",
                    "Sign in with your conference registration ID or your airline account number."
                }
            }

            {
                match session() {
                    Some(signed_in) => rsx! {
                        IdentitySummaryCard {
                            summary: signed_in.record.summary(),
                            identifier: signed_in.identifier.clone(),
                            mode: signed_in.mode,
                            on_sign_out: move |_| session.set(None)
                        }
                    },
                    None => render_login_form(props.config.clone(), on_login),
                }
            }
        }
    }
}
