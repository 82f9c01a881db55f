use shared::Budget;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct BudgetsState {
    pub budgets: Vec<Budget>,
    pub loading: bool,
}

pub struct UseBudgetsResult {
    pub state: BudgetsState,
    pub actions: UseBudgetsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseBudgetsActions {
    pub refresh: Callback<()>,
}

/// Fetch the budget list on mount and expose a refresh callback. Runs
/// independently of the transaction fetch; the dashboard tolerates one list
/// arriving before the other.
#[hook]
pub fn use_budgets(api_client: &ApiClient) -> UseBudgetsResult {
    let budgets = use_state(Vec::<Budget>::new);
    let loading = use_state(|| true);

    let refresh = {
        let api_client = api_client.clone();
        let budgets = budgets.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let budgets = budgets.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_budgets().await {
                    Ok(data) => budgets.set(data),
                    Err(e) => Logger::error_with_component(
                        "use_budgets",
                        &format!("Failed to fetch budgets: {}", e),
                    ),
                }

                loading.set(false);
            });
        })
    };

    // Load initial data
    use_effect_with((), {
        let refresh = refresh.clone();
        move |_| {
            refresh.emit(());
            || ()
        }
    });

    let state = BudgetsState {
        budgets: (*budgets).clone(),
        loading: *loading,
    };

    UseBudgetsResult {
        state,
        actions: UseBudgetsActions { refresh },
    }
}
