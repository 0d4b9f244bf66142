use dioxus::prelude::*;

use crate::components::{
    display::LoadingIndicator,
    input::{InputType, ValidatedInput},
};
use crate::features::signup::*;

#[derive(Props, PartialEq, Clone)]
pub struct SignupFormProps {
    /// Submit action; without one the button does nothing
    pub actions: Option<SignupActions>,
    #[props(default = "Loading...".to_string())]
    pub loading_message: String,
}

fn input_type_for(field: SignupField) -> InputType {
    if field.is_secret() {
        InputType::Password
    } else {
        InputType::Text
    }
}

#[component]
pub fn SignupForm(props: SignupFormProps) -> Element {
    let mut state = use_signal(SignupFormState::default);

    // In-place reduction keeps the signal's subscribers firing on every action
    let dispatch = EventHandler::new(move |action: SignupAction| {
        state.with_mut(|s| s.reduce_in_place(action));
    });

    let actions = props.actions.clone();
    let on_submit = move |_: MouseEvent| {
        let Some(task) = state.with_mut(|s| begin_submit(s, actions.as_ref())) else {
            return;
        };
        spawn(async move {
            let outcome = task.await;
            dispatch.call(outcome);
        });
    };

    let current = state();

    rsx! {
        div {
            class: "signup-form container",

            h1 {
                class: "form-title text-center",
                "Sign Up"
            }

            for field in SignupField::ALL {
                ValidatedInput {
                    key: "{field.as_str()}",
                    label: field.label().to_string(),
                    value: current.value(field).to_string(),
                    placeholder: field.placeholder().to_string(),
                    input_type: input_type_for(field),
                    error: current.error_for(field),
                    on_change: move |value: String| {
                        dispatch.call(SignupAction::SetField(field, value));
                    }
                }
            }

            div {
                class: "button-section text-center",
                button {
                    class: "signup-button btn btn-primary",
                    disabled: !validate_signup_ready(&current),
                    title: get_submit_hint(&current).unwrap_or_default(),
                    onclick: on_submit,
                    if current.pending_api_call {
                        LoadingIndicator {
                            message: props.loading_message.clone()
                        }
                    }
                    "Sign Up"
                }
            }
        }
    }
}
