use super::non_empty;
use crate::dashboard::ids::generate_item_id;
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_CATEGORIES: [&str; 6] =
    ["Food", "Transport", "Entertainment", "Shopping", "Bills", "Other"];

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: String,
    pub amount: f64,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseTrackerData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_budget: Option<f64>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

impl Default for ExpenseTrackerData {
    fn default() -> Self {
        Self {
            monthly_budget: None,
            expenses: Vec::new(),
            categories: default_categories(),
        }
    }
}

impl ExpenseTrackerData {
    pub fn add(
        &mut self,
        amount: f64,
        description: &str,
        category: &str,
        now: DateTime<Utc>,
    ) -> Option<&Expense> {
        if !amount.is_finite() || amount <= 0.0 {
            return None;
        }
        let description = non_empty(description)?;
        let category = non_empty(category)?;
        self.expenses.push(Expense {
            id: generate_item_id(now),
            amount,
            description,
            category,
            date: now.date_naive(),
        });
        self.expenses.last()
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        self.expenses.len() != before
    }

    /// A non-positive budget clears it.
    pub fn set_budget(&mut self, budget: f64) {
        self.monthly_budget = (budget.is_finite() && budget > 0.0).then_some(budget);
    }

    fn in_month(&self, today: NaiveDate) -> impl Iterator<Item = &Expense> {
        self.expenses
            .iter()
            .filter(move |e| e.date.year() == today.year() && e.date.month() == today.month())
    }

    /// Spending in the calendar month containing `today`.
    pub fn monthly_total(&self, today: NaiveDate) -> f64 {
        self.in_month(today).map(|e| e.amount).sum()
    }

    pub fn category_totals(&self, today: NaiveDate) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for expense in self.in_month(today) {
            *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
        }
        totals
    }

    /// Category with the highest spending this month.
    pub fn top_category(&self, today: NaiveDate) -> Option<(String, f64)> {
        self.category_totals(today)
            .into_iter()
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Percent of the budget spent, capped at 100; `0` without a budget.
    pub fn budget_progress(&self, today: NaiveDate) -> f64 {
        match self.monthly_budget {
            Some(budget) if budget > 0.0 => {
                (self.monthly_total(today) / budget * 100.0).min(100.0)
            }
            _ => 0.0,
        }
    }
}
