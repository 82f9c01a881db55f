use shared::summary::{self, BudgetWarning};
use shared::{Budget, Transaction};
use yew::prelude::*;

use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct BudgetOverviewProps {
    pub budgets: Vec<Budget>,
    pub transactions: Vec<Transaction>,
    pub current_month: String,
}

#[function_component(BudgetOverview)]
pub fn budget_overview(props: &BudgetOverviewProps) -> Html {
    let usage = summary::overview(&props.budgets, &props.transactions);

    html! {
        <section class="card budget-overview">
            <h2>{format!("Budget Overview - {}", date_utils::format_month(&props.current_month))}</h2>

            {if usage.is_empty() {
                html! { <div class="empty-note">{"No budgets set for this month"}</div> }
            } else {
                html! {
                    <div class="budget-rows">
                        {for usage.iter().map(|row| {
                            let bar_class = if row.percentage > 90.0 {
                                "progress warning"
                            } else {
                                "progress"
                            };

                            html! {
                                <div class="budget-row">
                                    <div class="budget-row-header">
                                        <span class="capitalize">{&row.category}</span>
                                        <span>{format!("${:.2} / ${:.2}", row.spent, row.budget)}</span>
                                    </div>
                                    <span class="percentage">{format!("({:.1}%)", row.percentage)}</span>
                                    <div class={bar_class}>
                                        <div
                                            class="progress-fill"
                                            style={format!("width: {}%", row.clamped_percentage())}
                                        ></div>
                                    </div>
                                    {match row.warning() {
                                        Some(warning) => {
                                            let wording = match warning {
                                                BudgetWarning::Exceeded => "exceeded",
                                                BudgetWarning::NearlyExceeded => "nearly exceeded",
                                            };
                                            html! {
                                                <div class="alert">
                                                    {format!(
                                                        "Warning: {} budget is {} ({:.1}%)",
                                                        row.category, wording, row.percentage
                                                    )}
                                                </div>
                                            }
                                        }
                                        None => html! {},
                                    }}
                                </div>
                            }
                        })}
                    </div>
                }
            }}
        </section>
    }
}
