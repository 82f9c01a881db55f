use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::dashboard::Dashboard;
use components::login::LoginPage;
use components::signup::SignUpPage;
use services::api::ApiClient;
use services::session;

/// Client-visible views: `/` (login), `/signup`, `/dashboard`. Routing is an
/// external concern, so views switch on local state.
#[derive(Clone, Copy, PartialEq)]
enum View {
    Login,
    SignUp,
    Dashboard,
}

#[function_component(App)]
fn app() -> Html {
    // A stored token lands returning users straight on the dashboard.
    let view = use_state(|| {
        if session::token().is_some() {
            View::Dashboard
        } else {
            View::Login
        }
    });
    let api_client = ApiClient::new();

    let show_login = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Login))
    };
    let show_signup = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::SignUp))
    };
    let show_dashboard = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Dashboard))
    };
    let on_logout = {
        let view = view.clone();
        Callback::from(move |_| {
            session::clear();
            view.set(View::Login);
        })
    };

    match *view {
        View::Login => html! {
            <LoginPage
                api_client={api_client}
                on_login={show_dashboard}
                on_switch_to_signup={show_signup}
            />
        },
        View::SignUp => html! {
            <SignUpPage
                api_client={api_client}
                on_switch_to_login={show_login}
            />
        },
        View::Dashboard => html! {
            <Dashboard
                api_client={api_client}
                on_logout={on_logout}
                on_unauthenticated={show_login}
            />
        },
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
