//! Client-side aggregation over already-fetched transactions and budgets.
//!
//! Everything here is pure: empty input produces zero/empty output and no
//! function has error conditions. Money sums are carried at cent precision,
//! matching the rounding the entry form applies before submission.

use crate::{Budget, Transaction, TransactionType};

/// Round a currency amount to cents.
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// `spent / limit * 100`, coerced to 0 when the limit is 0 or the division
/// comes out non-finite, so invalid values never reach the UI.
fn percent_of(spent: f64, limit: f64) -> f64 {
    if limit == 0.0 {
        return 0.0;
    }
    let percentage = spent / limit * 100.0;
    if percentage.is_finite() {
        percentage
    } else {
        0.0
    }
}

/// Income and expense totals over a full transaction list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TransactionTotals {
    pub income: f64,
    pub expense: f64,
}

impl TransactionTotals {
    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}

pub fn totals(transactions: &[Transaction]) -> TransactionTotals {
    let mut result = TransactionTotals::default();
    for tx in transactions {
        match tx.transaction_type {
            TransactionType::Income => result.income += tx.amount,
            TransactionType::Expense => result.expense += tx.amount,
        }
    }
    result.income = round_cents(result.income);
    result.expense = round_cents(result.expense);
    result
}

/// Summed expense amounts for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

/// Per-category expense totals: one entry per distinct category appearing in
/// the expense subset, in first-appearance order.
pub fn expense_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut result: Vec<CategoryTotal> = Vec::new();
    for tx in transactions {
        if tx.transaction_type != TransactionType::Expense {
            continue;
        }
        match result.iter_mut().find(|entry| entry.category == tx.category) {
            Some(entry) => entry.amount += tx.amount,
            None => result.push(CategoryTotal {
                category: tx.category.clone(),
                amount: tx.amount,
            }),
        }
    }
    for entry in &mut result {
        entry.amount = round_cents(entry.amount);
    }
    result
}

/// Transactions whose date falls in `month` (`yyyy-mm` prefix match).
pub fn in_month<'a>(transactions: &'a [Transaction], month: &str) -> Vec<&'a Transaction> {
    transactions
        .iter()
        .filter(|tx| tx.date.starts_with(month))
        .collect()
}

/// Income, spending and savings for a single month.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlySavings {
    pub income: f64,
    pub expense: f64,
    pub savings: f64,
    /// Savings as a share of income, 0 when there is no income.
    pub rate: f64,
}

pub fn monthly_savings(transactions: &[Transaction], month: &str) -> MonthlySavings {
    let mut income = 0.0;
    let mut expense = 0.0;
    for tx in in_month(transactions, month) {
        match tx.transaction_type {
            TransactionType::Income => income += tx.amount,
            TransactionType::Expense => expense += tx.amount,
        }
    }
    let income = round_cents(income);
    let expense = round_cents(expense);
    let savings = round_cents(income - expense);
    let rate = if income > 0.0 {
        savings / income * 100.0
    } else {
        0.0
    };
    MonthlySavings {
        income,
        expense,
        savings,
        rate,
    }
}

/// How close a budget is to its limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetWarning {
    /// More than 90% of the limit is spent.
    NearlyExceeded,
    /// The limit itself is exceeded.
    Exceeded,
}

/// Spending measured against one budget's limit.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetUsage {
    pub category: String,
    /// Cent-rounded sum of matching expense amounts.
    pub spent: f64,
    /// The budget limit.
    pub budget: f64,
    /// `budget - spent`, unclamped; negative once the budget is exceeded.
    pub remaining: f64,
    /// `spent / budget * 100`, 0 when the limit is 0.
    pub percentage: f64,
}

impl BudgetUsage {
    pub fn from_amounts(category: impl Into<String>, spent: f64, budget: f64) -> Self {
        let spent = round_cents(spent);
        Self {
            category: category.into(),
            spent,
            budget,
            remaining: budget - spent,
            percentage: percent_of(spent, budget),
        }
    }

    /// Percentage capped at 100 for progress-bar rendering.
    pub fn clamped_percentage(&self) -> f64 {
        self.percentage.min(100.0)
    }

    /// Remaining amount floored at zero.
    pub fn clamped_remaining(&self) -> f64 {
        self.remaining.max(0.0)
    }

    /// Warning state once spending passes 90% of the limit.
    pub fn warning(&self) -> Option<BudgetWarning> {
        if self.percentage > 100.0 {
            Some(BudgetWarning::Exceeded)
        } else if self.percentage > 90.0 {
            Some(BudgetWarning::NearlyExceeded)
        } else {
            None
        }
    }
}

/// Cent-rounded sum of expense amounts matching `category` (exactly, as
/// stored) and, when given, the `yyyy-mm` month.
fn expense_total(transactions: &[Transaction], category: &str, month: Option<&str>) -> f64 {
    let sum: f64 = transactions
        .iter()
        .filter(|tx| tx.transaction_type == TransactionType::Expense)
        .filter(|tx| tx.category == category)
        .filter(|tx| month.map_or(true, |m| tx.date.starts_with(m)))
        .map(|tx| tx.amount)
        .sum();
    round_cents(sum)
}

/// Usage for one budget, counting matching expenses from every month (the
/// overview presentation).
pub fn budget_usage(budget: &Budget, transactions: &[Transaction]) -> BudgetUsage {
    BudgetUsage::from_amounts(
        budget.category.clone(),
        expense_total(transactions, &budget.category, None),
        budget.amount,
    )
}

/// Usage for one budget, counting only expenses dated in the budget's own
/// month.
pub fn budget_usage_in_month(budget: &Budget, transactions: &[Transaction]) -> BudgetUsage {
    BudgetUsage::from_amounts(
        budget.category.clone(),
        expense_total(transactions, &budget.category, Some(&budget.month)),
        budget.amount,
    )
}

/// Usage rows for the budget overview. Budgets without a positive limit are
/// left out of the rendered set.
pub fn overview(budgets: &[Budget], transactions: &[Transaction]) -> Vec<BudgetUsage> {
    budgets
        .iter()
        .map(|budget| budget_usage(budget, transactions))
        .filter(|usage| usage.budget > 0.0)
        .collect()
}

/// Budgets sharing one `yyyy-mm` month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup {
    pub month: String,
    pub budgets: Vec<Budget>,
}

/// Group budgets by month, newest month first. Lexicographic order on
/// `yyyy-mm` keys coincides with chronological order.
pub fn group_by_month(budgets: &[Budget]) -> Vec<MonthGroup> {
    let mut groups: Vec<MonthGroup> = Vec::new();
    for budget in budgets {
        match groups.iter_mut().find(|group| group.month == budget.month) {
            Some(group) => group.budgets.push(budget.clone()),
            None => groups.push(MonthGroup {
                month: budget.month.clone(),
                budgets: vec![budget.clone()],
            }),
        }
    }
    groups.sort_by(|a, b| b.month.cmp(&a.month));
    groups
}

/// Combined totals for one month's budgets.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlyUsage {
    pub total_budget: f64,
    pub total_spent: f64,
    pub percentage: f64,
}

pub fn monthly_usage(
    month: &str,
    budgets: &[Budget],
    transactions: &[Transaction],
) -> MonthlyUsage {
    let total_budget: f64 = budgets.iter().map(|b| b.amount).sum();
    let total_spent = round_cents(
        transactions
            .iter()
            .filter(|tx| tx.transaction_type == TransactionType::Expense)
            .filter(|tx| tx.date.starts_with(month))
            .map(|tx| tx.amount)
            .sum(),
    );
    MonthlyUsage {
        total_budget,
        total_spent,
        percentage: percent_of(total_spent, total_budget),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(transaction_type: TransactionType, amount: f64, category: &str, date: &str) -> Transaction {
        Transaction {
            id: format!("{}-{}-{}", category, date, amount),
            transaction_type,
            amount,
            category: category.to_string(),
            description: "test entry".to_string(),
            date: date.to_string(),
        }
    }

    fn expense(amount: f64, category: &str, date: &str) -> Transaction {
        tx(TransactionType::Expense, amount, category, date)
    }

    fn income(amount: f64, date: &str) -> Transaction {
        tx(TransactionType::Income, amount, "salary", date)
    }

    fn budget(category: &str, amount: f64, month: &str) -> Budget {
        Budget {
            category: category.to_string(),
            amount,
            month: month.to_string(),
        }
    }

    #[test]
    fn totals_on_empty_input_are_zero() {
        let result = totals(&[]);
        assert_eq!(result.income, 0.0);
        assert_eq!(result.expense, 0.0);
        assert_eq!(result.balance(), 0.0);
        assert!(expense_by_category(&[]).is_empty());
    }

    #[test]
    fn totals_split_by_type_and_are_order_independent() {
        let mut transactions = vec![
            income(1200.0, "2024-05-01"),
            expense(300.25, "food", "2024-05-02"),
            expense(99.75, "rent", "2024-05-03"),
            income(50.0, "2024-05-20"),
        ];
        let forward = totals(&transactions);
        transactions.reverse();
        let backward = totals(&transactions);

        assert_eq!(forward, backward);
        assert_eq!(forward.income, 1250.0);
        assert_eq!(forward.expense, 400.0);
        assert_eq!(forward.balance(), 850.0);

        // Income and expense together account for every amount.
        let all: f64 = transactions.iter().map(|t| t.amount).sum();
        assert_eq!(forward.income + forward.expense, round_cents(all));
    }

    #[test]
    fn category_totals_cover_distinct_expense_categories() {
        let transactions = vec![
            expense(10.0, "food", "2024-05-01"),
            expense(5.5, "food", "2024-05-09"),
            income(100.0, "2024-05-10"),
            expense(20.0, "rent", "2024-05-12"),
        ];
        let by_category = expense_by_category(&transactions);
        assert_eq!(by_category.len(), 2);
        assert_eq!(by_category[0].category, "food");
        assert_eq!(by_category[0].amount, 15.5);
        assert_eq!(by_category[1].category, "rent");
        assert_eq!(by_category[1].amount, 20.0);
    }

    #[test]
    fn month_filter_is_a_prefix_test() {
        let transactions = vec![
            expense(1.0, "food", "2024-05-31"),
            expense(2.0, "food", "2024-06-01"),
        ];
        let may = in_month(&transactions, "2024-05");
        assert_eq!(may.len(), 1);
        assert_eq!(may[0].date, "2024-05-31");
    }

    #[test]
    fn monthly_savings_rate_is_zero_without_income() {
        let transactions = vec![expense(40.0, "food", "2024-05-02")];
        let savings = monthly_savings(&transactions, "2024-05");
        assert_eq!(savings.income, 0.0);
        assert_eq!(savings.savings, -40.0);
        assert_eq!(savings.rate, 0.0);
    }

    #[test]
    fn monthly_savings_ignores_other_months() {
        let transactions = vec![
            income(200.0, "2024-05-01"),
            expense(150.0, "food", "2024-05-02"),
            expense(999.0, "rent", "2024-04-30"),
        ];
        let savings = monthly_savings(&transactions, "2024-05");
        assert_eq!(savings.savings, 50.0);
        assert_eq!(savings.rate, 25.0);
    }

    #[test]
    fn zero_limit_budget_has_zero_percentage() {
        let usage = budget_usage(
            &budget("food", 0.0, "2024-05"),
            &[expense(10.0, "food", "2024-05-01")],
        );
        assert_eq!(usage.percentage, 0.0);
        assert!(usage.percentage.is_finite());

        let untouched = budget_usage(&budget("food", 0.0, "2024-05"), &[]);
        assert_eq!(untouched.percentage, 0.0);
    }

    #[test]
    fn warning_threshold_respects_cent_precision() {
        let b = budget("food", 100.0, "2024-05");

        // 90.0001 carries as 90.00 once summed at cent precision: shows as
        // 90.0% and stays under the threshold.
        let just_under = vec![
            expense(90.0, "food", "2024-05-01"),
            expense(0.0001, "food", "2024-05-02"),
        ];
        let usage = budget_usage(&b, &just_under);
        assert_eq!(format!("{:.1}", usage.percentage), "90.0");
        assert_eq!(usage.warning(), None);

        // 90.01 is past the threshold.
        let just_over = vec![
            expense(90.0, "food", "2024-05-01"),
            expense(0.01, "food", "2024-05-02"),
        ];
        let usage = budget_usage(&b, &just_over);
        assert_eq!(usage.warning(), Some(BudgetWarning::NearlyExceeded));
    }

    #[test]
    fn warning_upgrades_past_the_limit() {
        let b = budget("food", 100.0, "2024-05");
        let usage = budget_usage(&b, &[expense(100.01, "food", "2024-05-01")]);
        assert_eq!(usage.warning(), Some(BudgetWarning::Exceeded));
        assert!(usage.remaining < 0.0);
        assert_eq!(usage.clamped_remaining(), 0.0);
        assert_eq!(usage.clamped_percentage(), 100.0);
    }

    #[test]
    fn budget_usage_matches_category_case_sensitively() {
        let b = budget("food", 100.0, "2024-05");
        let transactions = vec![
            expense(10.0, "food", "2024-05-01"),
            expense(99.0, "Food", "2024-05-02"),
        ];
        assert_eq!(budget_usage(&b, &transactions).spent, 10.0);
    }

    #[test]
    fn overview_counts_every_month_but_scoped_usage_does_not() {
        let b = budget("food", 100.0, "2024-05");
        let transactions = vec![
            expense(30.0, "food", "2024-05-10"),
            expense(20.0, "food", "2024-04-10"),
        ];
        assert_eq!(budget_usage(&b, &transactions).spent, 50.0);
        assert_eq!(budget_usage_in_month(&b, &transactions).spent, 30.0);
    }

    #[test]
    fn overview_hides_budgets_without_a_positive_limit() {
        let budgets = vec![
            budget("food", 0.0, "2024-05"),
            budget("rent", 500.0, "2024-05"),
        ];
        let rows = overview(&budgets, &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].category, "rent");
        assert_eq!(rows[0].remaining, 500.0);
    }

    #[test]
    fn months_group_newest_first() {
        let budgets = vec![
            budget("food", 100.0, "2024-01"),
            budget("rent", 500.0, "2024-03"),
            budget("food", 120.0, "2024-02"),
        ];
        let groups = group_by_month(&budgets);
        let months: Vec<&str> = groups.iter().map(|g| g.month.as_str()).collect();
        assert_eq!(months, ["2024-03", "2024-02", "2024-01"]);
    }

    #[test]
    fn duplicate_budgets_both_count_toward_group_totals() {
        let budgets = vec![
            budget("food", 100.0, "2024-05"),
            budget("food", 100.0, "2024-05"),
        ];
        let groups = group_by_month(&budgets);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].budgets.len(), 2);

        let usage = monthly_usage(
            "2024-05",
            &groups[0].budgets,
            &[expense(50.0, "food", "2024-05-01")],
        );
        assert_eq!(usage.total_budget, 200.0);
        assert_eq!(usage.total_spent, 50.0);
        assert_eq!(usage.percentage, 25.0);
    }

    #[test]
    fn monthly_usage_with_no_budgets_is_all_zero() {
        let usage = monthly_usage("2024-05", &[], &[expense(50.0, "food", "2024-05-01")]);
        assert_eq!(usage.total_budget, 0.0);
        assert_eq!(usage.percentage, 0.0);
    }
}
