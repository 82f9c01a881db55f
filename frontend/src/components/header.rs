use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub user_name: String,
    pub on_logout: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <header class="dashboard-header">
            <h1>
                {if props.user_name.is_empty() {
                    "Welcome".to_string()
                } else {
                    format!("Welcome, {}", props.user_name)
                }}
            </h1>
            <button class="btn" onclick={on_logout}>{"Logout"}</button>
        </header>
    }
}
