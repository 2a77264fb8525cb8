//! Aggregates recomputed on every render. Nothing is cached.

use crate::{Expense, ExpenseCategory, Income};

/// Anything with an amount that contributes to a total
pub trait Amounted {
    fn amount(&self) -> f64;
}

impl Amounted for Expense {
    fn amount(&self) -> f64 {
        self.amount
    }
}

impl Amounted for Income {
    fn amount(&self) -> f64 {
        self.amount
    }
}

/// Sum of one category's expenses, as shown in the chart
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub total: f64,
}

pub fn total_amount<T: Amounted>(records: &[T]) -> f64 {
    records.iter().map(Amounted::amount).sum()
}

/// Per-category totals in display order. Only positive totals are charted.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    ExpenseCategory::ALL
        .iter()
        .map(|category| CategoryTotal {
            category: *category,
            total: expenses
                .iter()
                .filter(|expense| expense.category == *category)
                .map(|expense| expense.amount)
                .sum(),
        })
        .filter(|entry| entry.total > 0.0)
        .collect()
}

/// Whole amounts without decimals, everything else with two
pub fn format_amount(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("{:.0}", amount)
    } else {
        format!("{:.2}", amount)
    }
}
