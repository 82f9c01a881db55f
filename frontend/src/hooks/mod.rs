pub mod use_budgets;
pub mod use_transactions;
