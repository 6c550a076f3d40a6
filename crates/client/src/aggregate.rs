//! Derived financial aggregates.
//!
//! Nothing here is persisted; the stores recompute these from their
//! in-memory collections after every state change.

use api_types::{expense::Expense, revenue::Revenue};
use serde::Serialize;

/// Bucket name for expenses without a joined category.
pub const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct FinanceSummary {
    pub total_expenses: f64,
    pub total_revenue: f64,
    pub net_balance: f64,
    /// Share of revenue kept, in percent. 0 when there is no revenue.
    pub savings_rate: f64,
}

pub fn summarize(expenses: &[Expense], revenues: &[Revenue]) -> FinanceSummary {
    let total_expenses: f64 = expenses.iter().map(|expense| expense.amount).sum();
    let total_revenue: f64 = revenues.iter().map(|revenue| revenue.amount).sum();
    let net_balance = total_revenue - total_expenses;
    let savings_rate = if total_revenue == 0.0 {
        0.0
    } else {
        net_balance / total_revenue * 100.0
    };

    FinanceSummary {
        total_expenses,
        total_revenue,
        net_balance,
        savings_rate,
    }
}

/// One slice of the category breakdown chart.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub name: String,
    /// Display color of the joined category; absent for the
    /// uncategorized bucket.
    pub color: Option<String>,
    pub total: f64,
}

/// Sums expense amounts per category name, preserving first-seen order.
pub fn category_totals(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for expense in expenses {
        let (name, color) = match &expense.category {
            Some(category) => (category.name.as_str(), Some(category.color.clone())),
            None => (UNCATEGORIZED, None),
        };
        match totals.iter_mut().find(|entry| entry.name == name) {
            Some(entry) => entry.total += expense.amount,
            None => totals.push(CategoryTotal {
                name: name.to_string(),
                color,
                total: expense.amount,
            }),
        }
    }
    totals
}

#[cfg(test)]
mod tests {
    use api_types::expense::CategoryRef;
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn expense(amount: f64, category: Option<&str>) -> Expense {
        let category = category.map(|name| CategoryRef {
            id: Uuid::new_v4(),
            name: name.to_string(),
            color: "#FF6384".to_string(),
        });
        Expense {
            id: Uuid::new_v4(),
            amount,
            description: "x".to_string(),
            date: "2024-01-01".parse().unwrap(),
            category_id: category.as_ref().map(|c| c.id),
            user_id: Uuid::new_v4(),
            created_at: Utc::now(),
            category,
        }
    }

    fn revenue(amount: f64) -> Revenue {
        Revenue {
            id: Uuid::new_v4(),
            amount,
            description: "x".to_string(),
            source: "Other".to_string(),
            date: "2024-01-01".parse().unwrap(),
            user_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn empty_collections_sum_to_zero() {
        let summary = summarize(&[], &[]);
        assert_eq!(summary.total_expenses, 0.0);
        assert_eq!(summary.total_revenue, 0.0);
        assert_eq!(summary.net_balance, 0.0);
        assert_eq!(summary.savings_rate, 0.0);
    }

    #[test]
    fn totals_are_plain_sums() {
        let expenses = [expense(12.5, None), expense(7.5, Some("Food"))];
        let revenues = [revenue(100.0)];

        let summary = summarize(&expenses, &revenues);

        assert_eq!(summary.total_expenses, 20.0);
        assert_eq!(summary.total_revenue, 100.0);
        assert_eq!(summary.net_balance, 80.0);
        assert_eq!(summary.savings_rate, 80.0);
    }

    #[test]
    fn savings_rate_is_zero_without_revenue() {
        let summary = summarize(&[expense(50.0, None)], &[]);
        assert_eq!(summary.net_balance, -50.0);
        assert_eq!(summary.savings_rate, 0.0);
    }

    #[test]
    fn category_totals_keep_first_seen_order() {
        let expenses = [
            expense(10.0, Some("Food")),
            expense(5.0, Some("Transport")),
            expense(2.0, Some("Food")),
            expense(1.0, None),
        ];

        let totals = category_totals(&expenses);

        assert_eq!(totals.len(), 3);
        assert_eq!(totals[0].name, "Food");
        assert_eq!(totals[0].total, 12.0);
        assert_eq!(totals[1].name, "Transport");
        assert_eq!(totals[2].name, UNCATEGORIZED);
        assert_eq!(totals[2].color, None);
    }
}
