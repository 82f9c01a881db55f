use shared::summary::BudgetUsage;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BudgetProgressProps {
    pub category: String,
    pub spent: f64,
    pub budget: f64,
}

/// Floor-at-zero presentation of one category's spending: the bar caps at
/// 100% and remaining never shows negative.
#[function_component(BudgetProgress)]
pub fn budget_progress(props: &BudgetProgressProps) -> Html {
    let usage = BudgetUsage::from_amounts(props.category.clone(), props.spent, props.budget);

    html! {
        <div class="budget-row">
            <div class="budget-row-header">
                <span class="capitalize">{&usage.category}</span>
                <span class="muted">{format!("${:.2} / ${:.2}", usage.spent, usage.budget)}</span>
            </div>
            <div class="progress">
                <div
                    class="progress-fill"
                    style={format!("width: {}%", usage.clamped_percentage())}
                ></div>
            </div>
            <div class="muted">{format!("${:.2} remaining", usage.clamped_remaining())}</div>
        </div>
    }
}
