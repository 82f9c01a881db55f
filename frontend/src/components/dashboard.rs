use shared::{summary, TransactionType};
use yew::prelude::*;

use crate::components::budget::budget_overview::BudgetOverview;
use crate::components::budget::monthly_budget_summary::MonthlyBudgetSummary;
use crate::components::forms::budget_form::BudgetForm;
use crate::components::forms::transaction_form::TransactionForm;
use crate::components::header::Header;
use crate::components::summary_cards::SummaryCards;
use crate::components::transactions::category_chart::CategoryChart;
use crate::components::transactions::transaction_list::TransactionList;
use crate::hooks::use_budgets::use_budgets;
use crate::hooks::use_transactions::use_transactions;
use crate::services::api::ApiClient;
use crate::services::{date_utils, session};

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub api_client: ApiClient,
    pub on_logout: Callback<()>,
    /// Fired when the dashboard mounts without a stored token.
    pub on_unauthenticated: Callback<()>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let transactions = use_transactions(&props.api_client);
    let budgets = use_budgets(&props.api_client);

    let show_income_list = use_state(|| false);
    let show_expense_list = use_state(|| false);

    // Token presence is checked eagerly; a signed-out mount goes straight
    // back to login.
    use_effect_with((), {
        let on_unauthenticated = props.on_unauthenticated.clone();
        move |_| {
            if session::token().is_none() {
                on_unauthenticated.emit(());
            }
            || ()
        }
    });

    let current_month = date_utils::current_month();
    let totals = summary::totals(&transactions.state.transactions);
    let by_category = summary::expense_by_category(&transactions.state.transactions);
    let savings = summary::monthly_savings(&transactions.state.transactions, &current_month);

    let user_name = session::user().map(|user| user.name).unwrap_or_default();

    let open_income_list = {
        let show_income_list = show_income_list.clone();
        Callback::from(move |_| show_income_list.set(true))
    };
    let close_income_list = {
        let show_income_list = show_income_list.clone();
        Callback::from(move |_| show_income_list.set(false))
    };
    let open_expense_list = {
        let show_expense_list = show_expense_list.clone();
        Callback::from(move |_| show_expense_list.set(true))
    };
    let close_expense_list = {
        let show_expense_list = show_expense_list.clone();
        Callback::from(move |_| show_expense_list.set(false))
    };

    html! {
        <div class="dashboard">
            <div class="container">
                <Header user_name={user_name} on_logout={props.on_logout.clone()} />

                <SummaryCards
                    totals={totals}
                    savings={savings}
                    month_label={date_utils::format_month(&current_month)}
                    on_show_income={open_income_list}
                    on_show_expense={open_expense_list}
                />

                <div class="dashboard-grid">
                    <section class="card">
                        <h2>{"Add Transaction"}</h2>
                        <TransactionForm
                            api_client={props.api_client.clone()}
                            on_success={transactions.actions.refresh.clone()}
                        />
                    </section>

                    <section class="card">
                        <h2>{"Expense Breakdown"}</h2>
                        <CategoryChart
                            data={by_category}
                            loading={transactions.state.loading}
                        />
                    </section>
                </div>

                <section class="card">
                    <h2>{"Budget Management"}</h2>
                    <BudgetForm
                        api_client={props.api_client.clone()}
                        on_success={budgets.actions.refresh.clone()}
                    />
                </section>

                <BudgetOverview
                    budgets={budgets.state.budgets.clone()}
                    transactions={transactions.state.transactions.clone()}
                    current_month={current_month.clone()}
                />

                <MonthlyBudgetSummary
                    budgets={budgets.state.budgets.clone()}
                    transactions={transactions.state.transactions.clone()}
                />

                <TransactionList
                    open={*show_income_list}
                    list_type={TransactionType::Income}
                    transactions={transactions.state.transactions.clone()}
                    on_close={close_income_list}
                />

                <TransactionList
                    open={*show_expense_list}
                    list_type={TransactionType::Expense}
                    transactions={transactions.state.transactions.clone()}
                    on_close={close_expense_list}
                />
            </div>
        </div>
    }
}
