use shared::summary::{MonthlySavings, TransactionTotals};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub totals: TransactionTotals,
    pub savings: MonthlySavings,
    pub month_label: String,
    pub on_show_income: Callback<()>,
    pub on_show_expense: Callback<()>,
}

#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    let on_show_income = {
        let on_show_income = props.on_show_income.clone();
        Callback::from(move |_: MouseEvent| on_show_income.emit(()))
    };
    let on_show_expense = {
        let on_show_expense = props.on_show_expense.clone();
        Callback::from(move |_: MouseEvent| on_show_expense.emit(()))
    };

    let savings = &props.savings;
    let savings_class = if savings.savings >= 0.0 {
        "stat-amount positive"
    } else {
        "stat-amount negative"
    };
    let rate_class = if savings.rate >= 20.0 {
        "rate good"
    } else {
        "rate low"
    };

    html! {
        <div class="stats-grid">
            <div class="card stat-card clickable" onclick={on_show_income}>
                <h3>{"Total Income"}</h3>
                <p class="stat-amount positive">{format!("${:.2}", props.totals.income)}</p>
            </div>

            <div class="card stat-card clickable" onclick={on_show_expense}>
                <h3>{"Total Expenses"}</h3>
                <p class="stat-amount negative">{format!("${:.2}", props.totals.expense)}</p>
            </div>

            <div class="card stat-card">
                <h3>{"Balance"}</h3>
                <p class="stat-amount">{format!("${:.2}", props.totals.balance())}</p>
            </div>

            <div class="card stat-card">
                <h3>{"Monthly Savings"}</h3>
                <p class="stat-subtitle">{&props.month_label}</p>
                <p class={savings_class}>{format!("${:.2}", savings.savings)}</p>
                <div class="rate-row">
                    <span>{"Savings Rate:"}</span>
                    <span class={rate_class}>{format!("{:.1}%", savings.rate)}</span>
                </div>
                {if savings.income > 0.0 {
                    let width = savings.rate.clamp(0.0, 100.0);
                    html! {
                        <div class="progress">
                            <div class="progress-fill" style={format!("width: {}%", width)}></div>
                        </div>
                    }
                } else { html! {} }}
            </div>
        </div>
    }
}
