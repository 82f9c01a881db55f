pub mod budget_form;
pub mod transaction_form;
