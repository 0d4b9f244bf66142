use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct FieldErrorFeedbackProps {
    #[props(!optional)]
    pub message: Option<String>,
}

#[component]
pub fn FieldErrorFeedback(props: FieldErrorFeedbackProps) -> Element {
    match props.message {
        Some(message) => rsx! {
            div {
                class: "invalid-feedback",
                style: "color: #ef4444; margin-top: 4px;",
                "{message}"
            }
        },
        None => rsx! {},
    }
}
