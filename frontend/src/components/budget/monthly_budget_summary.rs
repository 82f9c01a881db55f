use shared::summary;
use shared::{Budget, Transaction};
use yew::prelude::*;

use crate::components::budget::budget_progress::BudgetProgress;
use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct MonthlyBudgetSummaryProps {
    pub budgets: Vec<Budget>,
    pub transactions: Vec<Transaction>,
}

/// Budgets grouped by month, newest first. Expanding a month shows the
/// per-category breakdown scoped to that month's spending.
#[function_component(MonthlyBudgetSummary)]
pub fn monthly_budget_summary(props: &MonthlyBudgetSummaryProps) -> Html {
    let expanded = use_state(|| None::<String>);
    let groups = summary::group_by_month(&props.budgets);

    html! {
        <section class="card monthly-summary">
            <h2>{"Monthly Budget Summary"}</h2>

            {if groups.is_empty() {
                html! { <div class="empty-note">{"No budgets set yet"}</div> }
            } else {
                html! {
                    <>
                        {for groups.iter().map(|group| {
                            let usage = summary::monthly_usage(
                                &group.month,
                                &group.budgets,
                                &props.transactions,
                            );
                            let is_expanded = expanded.as_deref() == Some(group.month.as_str());
                            let on_toggle = {
                                let expanded = expanded.clone();
                                let month = group.month.clone();
                                Callback::from(move |_: MouseEvent| {
                                    if expanded.as_deref() == Some(month.as_str()) {
                                        expanded.set(None);
                                    } else {
                                        expanded.set(Some(month.clone()));
                                    }
                                })
                            };
                            let bar_class = if usage.percentage > 90.0 {
                                "progress warning"
                            } else {
                                "progress"
                            };

                            html! {
                                <div class="month-group">
                                    <button type="button" class="month-group-header" onclick={on_toggle}>
                                        <div class="budget-row-header">
                                            <span>{date_utils::format_month(&group.month)}</span>
                                            <span class="muted">
                                                {format!("${:.2} / ${:.2}", usage.total_spent, usage.total_budget)}
                                            </span>
                                        </div>
                                        <div class={bar_class}>
                                            <div
                                                class="progress-fill"
                                                style={format!("width: {}%", usage.percentage.min(100.0))}
                                            ></div>
                                        </div>
                                    </button>

                                    {if is_expanded {
                                        html! {
                                            <div class="month-group-body">
                                                {for group.budgets.iter().map(|budget| {
                                                    let row = summary::budget_usage_in_month(
                                                        budget,
                                                        &props.transactions,
                                                    );
                                                    html! {
                                                        <BudgetProgress
                                                            category={row.category.clone()}
                                                            spent={row.spent}
                                                            budget={row.budget}
                                                        />
                                                    }
                                                })}
                                            </div>
                                        }
                                    } else { html! {} }}
                                </div>
                            }
                        })}
                    </>
                }
            }}
        </section>
    }
}
