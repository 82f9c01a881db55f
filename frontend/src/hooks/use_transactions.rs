use shared::Transaction;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

#[derive(Clone, PartialEq)]
pub struct TransactionsState {
    pub transactions: Vec<Transaction>,
    pub loading: bool,
}

pub struct UseTransactionsResult {
    pub state: TransactionsState,
    pub actions: UseTransactionsActions,
}

#[derive(Clone, PartialEq)]
pub struct UseTransactionsActions {
    pub refresh: Callback<()>,
}

/// Fetch the transaction list on mount and expose a refresh callback for
/// form completion handlers.
#[hook]
pub fn use_transactions(api_client: &ApiClient) -> UseTransactionsResult {
    let transactions = use_state(Vec::<Transaction>::new);
    let loading = use_state(|| true);

    let refresh = {
        let api_client = api_client.clone();
        let transactions = transactions.clone();
        let loading = loading.clone();

        use_callback((), move |_, _| {
            let api_client = api_client.clone();
            let transactions = transactions.clone();
            let loading = loading.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_transactions().await {
                    Ok(data) => transactions.set(data),
                    Err(e) => Logger::error_with_component(
                        "use_transactions",
                        &format!("Failed to fetch transactions: {}", e),
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

    let state = TransactionsState {
        transactions: (*transactions).clone(),
        loading: *loading,
    };

    UseTransactionsResult {
        state,
        actions: UseTransactionsActions { refresh },
    }
}
