use dioxus::prelude::*;

use super::FieldErrorFeedback;

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum InputType {
    Text,
    Password,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Password => "password",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub label: String,
    pub value: String,
    pub placeholder: String,
    pub input_type: InputType,
    #[props(!optional)]
    pub error: Option<String>,
    pub on_change: EventHandler<String>,
}

/// Labelled input; marks itself invalid and shows the message when `error` is set
#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    let on_change = props.on_change;
    let input_class = if props.error.is_some() {
        "form-control is-invalid"
    } else {
        "form-control"
    };

    rsx! {
        div {
            class: "input-section",
            label {
                class: "input-label",
                "{props.label}"
            }
            input {
                class: "{input_class}",
                r#type: "{props.input_type.as_str()}",
                value: "{props.value}",
                placeholder: "{props.placeholder}",
                oninput: move |event| on_change.call(event.value())
            }
            FieldErrorFeedback {
                message: props.error.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[component]
    fn InvalidDisplayName() -> Element {
        rsx! {
            ValidatedInput {
                label: "Display Name".to_string(),
                value: "my-display-name".to_string(),
                placeholder: "Your display name".to_string(),
                input_type: InputType::Text,
                error: Some("Cannot be null".to_string()),
                on_change: move |_: String| {}
            }
        }
    }

    #[component]
    fn ValidPassword() -> Element {
        rsx! {
            ValidatedInput {
                label: "Password".to_string(),
                value: "P4ssword".to_string(),
                placeholder: "Your password".to_string(),
                input_type: InputType::Password,
                error: None,
                on_change: move |_: String| {}
            }
        }
    }

    fn render(root: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_error_renders_under_input() {
        let html = render(InvalidDisplayName);
        assert!(html.contains("is-invalid"));
        assert!(html.contains("Cannot be null"));
        assert!(html.contains("Display Name"));
    }

    #[test]
    fn test_valid_input_has_no_feedback() {
        let html = render(ValidPassword);
        assert!(!html.contains("is-invalid"));
        assert!(!html.contains("invalid-feedback"));
        assert!(html.contains("type=\"password\""));
    }
}
