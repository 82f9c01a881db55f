use shared::validation::{validate_transaction_form, TransactionFormError};
use shared::{CreateTransactionRequest, TransactionType, SUGGESTED_CATEGORIES};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct TransactionFormProps {
    pub api_client: ApiClient,
    /// Fired after a successful submission so the dashboard can refetch.
    pub on_success: Callback<()>,
}

#[function_component(TransactionForm)]
pub fn transaction_form(props: &TransactionFormProps) -> Html {
    let type_input = use_state(|| "expense".to_string());
    let amount = use_state(String::new);
    let category = use_state(String::new);
    let description = use_state(String::new);
    let errors = use_state(Vec::<TransactionFormError>::new);
    let form_error = use_state(|| None::<String>);
    let form_success = use_state(|| false);
    let submitting = use_state(|| false);

    let on_submit = {
        let api_client = props.api_client.clone();
        let type_input = type_input.clone();
        let amount = amount.clone();
        let category = category.clone();
        let description = description.clone();
        let errors = errors.clone();
        let form_error = form_error.clone();
        let form_success = form_success.clone();
        let submitting = submitting.clone();
        let on_success = props.on_success.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // Validation gates the network call; a flagged field means
            // nothing is sent.
            let validation =
                validate_transaction_form(&type_input, &amount, &category, &description);
            if !validation.is_valid {
                errors.set(validation.errors);
                return;
            }
            errors.set(Vec::new());

            let (Some(transaction_type), Some(cleaned_amount)) = (
                TransactionType::parse(&type_input),
                validation.cleaned_amount,
            ) else {
                return;
            };

            let request = CreateTransactionRequest {
                transaction_type,
                category: (*category).clone(),
                description: (*description).clone(),
                amount: cleaned_amount,
            };

            let api_client = api_client.clone();
            let type_input = type_input.clone();
            let amount = amount.clone();
            let category = category.clone();
            let description = description.clone();
            let form_error = form_error.clone();
            let form_success = form_success.clone();
            let submitting = submitting.clone();
            let on_success = on_success.clone();

            submitting.set(true);
            form_error.set(None);
            form_success.set(false);

            spawn_local(async move {
                match api_client.create_transaction(request).await {
                    Ok(_created) => {
                        type_input.set("expense".to_string());
                        amount.set(String::new());
                        category.set(String::new());
                        description.set(String::new());
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
                            "transaction_form",
                            &format!("Failed to add transaction: {}", e),
                        );
                        form_error.set(Some("Failed to add transaction".to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let on_type_change = {
        let type_input = type_input.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            type_input.set(select.value());
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_category_change = {
        let category = category.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            category.set(select.value());
        })
    };

    let on_description_change = {
        let description = description.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            description.set(input.value());
        })
    };

    let type_error = errors.iter().find_map(|error| match error {
        TransactionFormError::MissingType => Some(error.message()),
        _ => None,
    });
    let amount_error = errors.iter().find_map(|error| match error {
        TransactionFormError::InvalidAmount(_) | TransactionFormError::AmountNotPositive => {
            Some(error.message())
        }
        _ => None,
    });
    let category_error = errors.iter().find_map(|error| match error {
        TransactionFormError::MissingCategory => Some(error.message()),
        _ => None,
    });
    let description_error = errors.iter().find_map(|error| match error {
        TransactionFormError::DescriptionTooShort(_) => Some(error.message()),
        _ => None,
    });

    html! {
        <form class="entry-form" onsubmit={on_submit}>
            {if let Some(message) = (*form_error).as_ref() {
                html! { <div class="form-message error">{message}</div> }
            } else { html! {} }}

            {if *form_success {
                html! { <div class="form-message success">{"Transaction added successfully"}</div> }
            } else { html! {} }}

            <div class="form-group">
                <label for="transaction-type">{"Type"}</label>
                <select id="transaction-type" onchange={on_type_change} disabled={*submitting}>
                    <option value="expense" selected={*type_input == "expense"}>{"Expense"}</option>
                    <option value="income" selected={*type_input == "income"}>{"Income"}</option>
                </select>
                {field_error(type_error)}
            </div>

            <div class="form-group">
                <label for="transaction-amount">{"Amount"}</label>
                <input
                    type="number"
                    id="transaction-amount"
                    placeholder="0.00"
                    step="0.01"
                    min="0.01"
                    value={(*amount).clone()}
                    onchange={on_amount_change}
                    disabled={*submitting}
                />
                {field_error(amount_error)}
            </div>

            <div class="form-group">
                <label for="transaction-category">{"Category"}</label>
                <select id="transaction-category" onchange={on_category_change} disabled={*submitting}>
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
                <label for="transaction-description">{"Description"}</label>
                <input
                    type="text"
                    id="transaction-description"
                    placeholder="Enter description"
                    value={(*description).clone()}
                    onchange={on_description_change}
                    disabled={*submitting}
                />
                {field_error(description_error)}
            </div>

            <button type="submit" class="btn btn-primary" disabled={*submitting}>
                {if *submitting { "Adding..." } else { "Add Transaction" }}
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
