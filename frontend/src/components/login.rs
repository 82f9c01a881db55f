use shared::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;
use crate::services::session;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub api_client: ApiClient,
    /// Fired once the session is stored.
    pub on_login: Callback<()>,
    pub on_switch_to_signup: Callback<()>,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let api_client = props.api_client.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if email.is_empty() || password.is_empty() {
                error.set(Some("Email and password are required".to_string()));
                return;
            }

            let api_client = api_client.clone();
            let request = LoginRequest {
                email: (*email).clone(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let submitting = submitting.clone();
            let on_login = on_login.clone();

            submitting.set(true);
            error.set(None);

            spawn_local(async move {
                match api_client.login(request).await {
                    Ok(response) => {
                        session::save(&response.token, &response.user);
                        on_login.emit(());
                    }
                    Err(e) => {
                        // Invalid credentials and server errors read the
                        // same here; the detail only goes to the console.
                        Logger::error_with_component("login", &format!("Login failed: {}", e));
                        error.set(Some(
                            "Login failed. Please check your credentials.".to_string(),
                        ));
                    }
                }
                submitting.set(false);
            });
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
        let on_switch_to_signup = props.on_switch_to_signup.clone();
        Callback::from(move |_: MouseEvent| on_switch_to_signup.emit(()))
    };

    html! {
        <div class="auth-screen">
            <div class="auth-card">
                <h1 class="auth-title">{"Login"}</h1>

                <form class="auth-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="login-email">{"Email"}</label>
                        <input
                            type="email"
                            id="login-email"
                            placeholder="Email"
                            value={(*email).clone()}
                            onchange={on_email_change}
                            disabled={*submitting}
                        />
                    </div>

                    <div class="form-group">
                        <label for="login-password">{"Password"}</label>
                        <input
                            type="password"
                            id="login-password"
                            placeholder="Password"
                            value={(*password).clone()}
                            onchange={on_password_change}
                            disabled={*submitting}
                        />
                    </div>

                    {if let Some(message) = (*error).as_ref() {
                        html! { <div class="form-message error">{message}</div> }
                    } else { html! {} }}

                    <button type="submit" class="btn btn-primary" disabled={*submitting}>
                        {if *submitting { "Signing in..." } else { "Login" }}
                    </button>
                </form>

                <p class="auth-switch">
                    {"Don't have an account? "}
                    <button class="link-button" onclick={on_switch}>{"Sign up"}</button>
                </p>
            </div>
        </div>
    }
}
