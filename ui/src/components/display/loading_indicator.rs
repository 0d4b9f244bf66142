use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct LoadingIndicatorProps {
    pub message: String,
}

/// Inline spinner; the message is the element's accessible text
#[component]
pub fn LoadingIndicator(props: LoadingIndicatorProps) -> Element {
    rsx! {
        span {
            class: "loading-indicator spinner-border spinner-border-sm",
            role: "status",
            span {
                class: "sr-only",
                "{props.message}"
            }
        }
    }
}
