use std::sync::Arc;

use api_types::expense::{Expense, ExpenseChanges, ExpenseFilters, NewExpense};
use chrono::NaiveDate;
use uuid::Uuid;

use super::{ServiceResult, require_positive_amount, require_text};
use crate::{gateway::Gateway, session::Session};

/// Expense fields as captured by the entry form; the owner is attached here.
#[derive(Clone, Debug)]
pub struct ExpenseDraft {
    pub amount: f64,
    pub description: String,
    pub date: NaiveDate,
    pub category_id: Option<Uuid>,
}

pub struct ExpenseService<G> {
    gateway: Arc<G>,
    session: Session,
}

impl<G: Gateway> ExpenseService<G> {
    pub fn new(gateway: Arc<G>, session: Session) -> Self {
        Self { gateway, session }
    }

    /// Lists the user's expenses, newest first, category join hydrated.
    pub async fn list(&self, filters: &ExpenseFilters) -> ServiceResult<Vec<Expense>> {
        let rows = self
            .gateway
            .list_expenses(filters)
            .await
            .inspect_err(|err| tracing::error!("failed to fetch expenses: {err}"))?;
        Ok(rows)
    }

    pub async fn add(&self, draft: ExpenseDraft) -> ServiceResult<Expense> {
        require_positive_amount(draft.amount)?;
        let description = require_text(&draft.description, "description")?;

        let row = NewExpense {
            amount: draft.amount,
            description,
            date: draft.date,
            category_id: draft.category_id,
            user_id: self.session.user_id,
        };
        let expense = self
            .gateway
            .insert_expense(&row)
            .await
            .inspect_err(|err| tracing::error!("failed to add expense: {err}"))?;
        Ok(expense)
    }

    /// Replaces only the supplied fields and returns the updated record.
    pub async fn update(&self, id: Uuid, changes: ExpenseChanges) -> ServiceResult<Expense> {
        if let Some(amount) = changes.amount {
            require_positive_amount(amount)?;
        }
        if let Some(description) = &changes.description {
            require_text(description, "description")?;
        }
        let expense = self
            .gateway
            .update_expense(id, &changes)
            .await
            .inspect_err(|err| tracing::error!("failed to update expense: {err}"))?;
        Ok(expense)
    }

    pub async fn remove(&self, id: Uuid) -> ServiceResult<()> {
        self.gateway
            .delete_expense(id)
            .await
            .inspect_err(|err| tracing::error!("failed to delete expense: {err}"))?;
        Ok(())
    }
}
