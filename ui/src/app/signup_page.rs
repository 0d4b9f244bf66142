use dioxus::prelude::*;

use crate::components::forms::SignupForm;
use crate::console_info;
use crate::features::signup::SignupActions;
use crate::services::client::HttpSignupApi;
use crate::services::config::SignupConfig;

#[derive(Props, PartialEq, Clone)]
pub struct SignupPageProps {
    #[props(default)]
    pub config: SignupConfig,
}

/// Sign-up page backed by the HTTP users endpoint
#[component]
pub fn SignupPage(props: SignupPageProps) -> Element {
    let config = props.config.clone();
    let actions = use_hook(move || {
        console_info!("[Signup Page] Posting sign ups to {}", config.users_endpoint());
        SignupActions::new(HttpSignupApi::new(config))
    });

    rsx! {
        div {
            class: "signup-page-container",
            SignupForm {
                actions: actions,
                loading_message: props.config.ui.loading_message.clone()
            }
        }
    }
}
