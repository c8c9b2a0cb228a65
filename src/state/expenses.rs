//! Expense-list state for the dashboard.

#[cfg(test)]
#[path = "expenses_test.rs"]
mod expenses_test;

use crate::net::types::Expense;

/// Dashboard expense list backed by the REST API.
#[derive(Clone, Debug, Default)]
pub struct ExpensesState {
    pub items: Vec<Expense>,
    /// Server-side total, which may exceed `items.len()` when paginated.
    pub total: i64,
    pub loading: bool,
    pub error: Option<String>,
}

/// Sum of the listed expense amounts.
#[must_use]
pub fn listed_total(items: &[Expense]) -> f64 {
    items.iter().map(|e| e.amount).sum()
}

/// Drop the expense with `expense_id` from `items`, if present.
pub fn remove_expense(items: &mut Vec<Expense>, expense_id: &str) {
    items.retain(|e| e.id != expense_id);
}
