use shared::{Transaction, TransactionType};
use yew::prelude::*;

use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub open: bool,
    pub list_type: TransactionType,
    pub transactions: Vec<Transaction>,
    pub on_close: Callback<()>,
}

/// Modal table of one transaction type, opened from the summary cards.
#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    if !props.open {
        return html! {};
    }

    let filtered: Vec<&Transaction> = props
        .transactions
        .iter()
        .filter(|tx| tx.transaction_type == props.list_type)
        .collect();

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let swallow_click = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="modal-overlay" onclick={on_overlay_click}>
            <div class="modal" onclick={swallow_click}>
                <div class="modal-header">
                    <h2>{format!("{} Transactions", props.list_type.label())}</h2>
                    <button class="modal-close" onclick={on_close}>{"\u{00d7}"}</button>
                </div>

                <div class="table-container">
                    <table class="transactions-table">
                        <thead>
                            <tr>
                                <th>{"Date"}</th>
                                <th>{"Category"}</th>
                                <th>{"Description"}</th>
                                <th class="amount-col">{"Amount"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            {for filtered.iter().map(|tx| html! {
                                <tr>
                                    <td class="date">{date_utils::format_date(&tx.date)}</td>
                                    <td class="capitalize">{&tx.category}</td>
                                    <td class="description">{&tx.description}</td>
                                    <td class="amount-col">{format!("${:.2}", tx.amount)}</td>
                                </tr>
                            })}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
