use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub id: String,
    pub value: String,
    pub placeholder: String,
    pub input_class: String,
    pub on_change: EventHandler<String>,
    /// Fired when Enter is pressed inside the field
    pub on_enter: Option<EventHandler<()>>,
}

/// Whether a key press inside the field should submit
pub fn is_submit_key(key: &Key) -> bool {
    *key == Key::Enter
}

#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let on_enter = props.on_enter;

    rsx! {
        input {
            id: "{props.id}",
            class: "{props.input_class}",
            r#type: "text",
            value: "{props.value}",
            placeholder: "{props.placeholder}",
            autocomplete: "off",
            oninput: move |event| props.on_change.call(event.value()),
            onkeydown: move |event: KeyboardEvent| {
                if is_submit_key(&event.key()) {
                    if let Some(handler) = on_enter {
                        handler.call(());
                    }
                }
            }
        }
    }
}
