use dioxus::prelude::*;

use crate::login::LoginMode;

const MODES: [LoginMode; 2] = [LoginMode::User, LoginMode::Customer];

#[derive(Props, PartialEq, Clone)]
pub struct ModeSelectorProps {
    pub selected: LoginMode,
    pub disabled: bool,
    pub on_change: EventHandler<LoginMode>,
}

#[component]
pub fn ModeSelector(props: ModeSelectorProps) -> Element {
    let selected = props.selected;
    let disabled = props.disabled;
    let on_change = props.on_change;

    rsx! {
        div {
            class: "mode-selector",
            role: "tablist",
            for mode in MODES {
                button {
                    key: "{mode.as_str()}",
                    r#type: "button",
                    role: "tab",
                    class: if mode == selected { "mode-tab active" } else { "mode-tab" },
                    "aria-selected": mode == selected,
                    disabled: disabled,
                    onclick: move |_| {
                        if mode != selected {
                            on_change.call(mode);
                        }
                    },
                    "{mode.tab_label()}"
                }
            }
        }
    }
}
