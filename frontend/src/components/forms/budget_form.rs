use shared::validation::{validate_budget_form, BudgetFormError};
use shared::{CreateBudgetRequest, SUGGESTED_CATEGORIES};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::date_utils;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct BudgetFormProps {
    pub api_client: ApiClient,
    /// Fired after a successful submission so the dashboard can refetch.
    pub on_success: Callback<()>,
}

#[function_component(BudgetForm)]
pub fn budget_form(props: &BudgetFormProps) -> Html {
    let category = use_state(String::new);
    let amount = use_state(String::new);
    let month = use_state(date_utils::current_month);
    let errors = use_state(Vec::<BudgetFormError>::new);
    let form_error = use_state(|| None::<String>);
    let form_success = use_state(|| false);
    let submitting = use_state(|| false);

    let on_submit = {
        let api_client = props.api_client.clone();
        let category = category.clone();
        let amount = amount.clone();
        let month = month.clone();
        let errors = errors.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();
        let submitting = submitting.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let validation = validate_budget_form(&category, &amount, &month);
            if !validation.is_valid {
                errors.set(validation.errors);
                return;
            }
            errors.set(Vec::new());

            let Some(cleaned_amount) = validation.cleaned_amount else {
                return;
            };

            let request = CreateBudgetRequest {
                category: (*category).clone(),
                amount: cleaned_amount,
                month: (*month).clone(),
            };

            let api_client = api_client.clone();
            let category = category.clone();
            let amount = amount.clone();
            let month = month.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();
            let submitting = submitting.clone();
            let on_success = on_success.clone();

            submitting.set(true);
            form_error.set(None);
            form_success.set(false);

            spawn_local(async move {
                match api_client.create_budget(request).await {
                    Ok(_created) => {
                        category.set(String::new());
                        amount.set(String::new());
                        month.set(date_utils::current_month());
                        form_success.set(true);
                        on_success.emit(());

                        let form_success_clear = form_success.clone();
                        spawn_local(async move {
                            gloo::timers::future::TimeoutFuture::new(3000).await;
                            form_success_clear.set(false);
                        });
                    }
                    Err(e) => {
                        Logger::error_with_component(
                            "budget_form",
                            &format!("Failed to set budget: {}", e),
                        );
                        form_error.set(Some("Failed to set budget".to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value());
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_month_change = {
        let month = month.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            month.set(input.value());
        })
    };

    let category_error = errors.iter().find_map(|error| match error {
        BudgetFormError::MissingCategory => Some(error.message()),
        _ => None,
    });
    let amount_error = errors.iter().find_map(|error| match error {
        BudgetFormError::InvalidAmount(_) | BudgetFormError::AmountNotPositive => {
            Some(error.message())
        }
        _ => None,
    });
    let month_error = errors.iter().find_map(|error| match error {
        BudgetFormError::InvalidMonth(_) => Some(error.message()),
        _ => None,
    });

    html! {
        <form class="entry-form" onsubmit={on_submit}>
            {if let Some(message) = (*form_error).as_ref() {
                html! { <div class="form-message error">{message}</div> }
            } else { html! {} }}

            {if *form_success {
                html! { <div class="form-message success">{"Budget set successfully"}</div> }
            } else { html! {} }}

            <div class="form-group">
                <label for="budget-category">{"Category"}</label>
                <select id="budget-category" onchange={on_category_change} disabled={*submitting}>
                    <option value="" selected={category.is_empty()}>{"Select category"}</option>
                    {for SUGGESTED_CATEGORIES.iter().map(|name| html! {
                        <option value={*name} selected={*category == *name} class="capitalize">
                            {*name}
                        </option>
                    })}
                </select>
                {field_error(category_error)}
            </div>

            <div class="form-group">
                <label for="budget-amount">{"Amount"}</label>
                <input
                    type="number"
                    id="budget-amount"
                    placeholder="0.00"
                    step="0.01"
                    value={(*amount).clone()}
                    onchange={on_amount_change}
                    disabled={*submitting}
                />
                {field_error(amount_error)}
            </div>

            <div class="form-group">
                <label for="budget-month">{"Month"}</label>
                <input
                    type="month"
                    id="budget-month"
                    value={(*month).clone()}
                    onchange={on_month_change}
                    disabled={*submitting}
                />
                {field_error(month_error)}
            </div>

            <button type="submit" class="btn btn-primary" disabled={*submitting}>
                {if *submitting { "Saving..." } else { "Set Budget" }}
            </button>
        </form>
    }
}

fn field_error(message: Option<String>) -> Html {
    match message {
        Some(message) => html! { <div class="field-error">{message}</div> },
        None => html! {},
    }
}
