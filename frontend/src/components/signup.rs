use shared::SignupRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct SignUpPageProps {
    pub api_client: ApiClient,
    /// Fired from the login link, and after a successful signup.
    pub on_switch_to_login: Callback<()>,
}

#[function_component(SignUpPage)]
pub fn signup_page(props: &SignUpPageProps) -> Html {
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let success = use_state(|| false);
    let submitting = use_state(|| false);

    let on_submit = {
        let api_client = props.api_client.clone();
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let success = success.clone();
        let submitting = submitting.clone();
        let on_switch_to_login = props.on_switch_to_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if name.is_empty() || email.is_empty() || password.is_empty() {
                error.set(Some("Name, email and password are required".to_string()));
                return;
            }

            let api_client = api_client.clone();
            let request = SignupRequest {
                name: (*name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let success = success.clone();
            let submitting = submitting.clone();
            let on_switch_to_login = on_switch_to_login.clone();

            submitting.set(true);
            error.set(None);

            spawn_local(async move {
                match api_client.signup(request).await {
                    Ok(()) => {
                        success.set(true);

                        // Show the confirmation briefly, then hand over to
                        // the login page.
                        spawn_local(async move {
                            gloo::timers::future::TimeoutFuture::new(1500).await;
                            on_switch_to_login.emit(());
                        });
                    }
                    Err(e) => {
                        Logger::error_with_component("signup", &format!("Signup failed: {}", e));
                        error.set(Some("Signup failed. Please try again.".to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };

    let on_email_change = {
        let email = email.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_change = {
        let password = password.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_switch = {
        let on_switch_to_login = props.on_switch_to_login.clone();
        Callback::from(move |_: MouseEvent| on_switch_to_login.emit(()))
    };

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1 class="auth-title">{"Sign Up"}</h1>

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="signup-name">{"Name"}</label>
                        <input
                            type="text"
                            id="signup-name"
                            placeholder="Name"
                            value={(*name).clone()}
                            onchange={on_name_change}
                            disabled={*submitting}
                        />
                    </div>

                    <div class="form-group">
                        <label for="signup-email">{"Email"}</label>
                        <input
                            type="email"
                            id="signup-email"
                            placeholder="Email"
                            value={(*email).clone()}
                            onchange={on_email_change}
                            disabled={*submitting}
                        />
                    </div>

                    <div class="form-group">
                        <label for="signup-password">{"Password"}</label>
                        <input
                            type="password"
                            id="signup-password"
                            placeholder="Password"
                            value={(*password).clone()}
                            onchange={on_password_change}
                            disabled={*submitting}
                        />
                    </div>

                    {if let Some(message) = (*error).as_ref() {
                        html! { <div class="form-message error">{message}</div> }
                    } else { html! {} }}

                    {if *success {
                        html! { <div class="form-message success">{"Account created successfully!"}</div> }
                    } else { html! {} }}

                    <button type="submit" class="btn btn-primary" disabled={*submitting}>
                        {if *submitting { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>

                <p class="auth-switch">
                    {"Already have an account? "}
                    <button class="link-button" onclick={on_switch}>{"Login"}</button>
                </p>
            </div>
        </div>
    }
}
