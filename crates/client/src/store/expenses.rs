use std::sync::Arc;

use api_types::expense::{Expense, ExpenseChanges, ExpenseFilters};
use uuid::Uuid;

use super::reducer::{self, Mutation};
use crate::{
    gateway::Gateway,
    services::{ExpenseDraft, ExpenseService, ServiceResult},
    session::Session,
};

/// Owns the in-memory expense collection.
///
/// Every call goes through the same protocol: mark loading, invoke the
/// adapter, merge on success, record the message on failure, and hand
/// the result back to the caller. A previously loaded collection stays
/// visible while a later call is in flight or has failed.
pub struct ExpenseStore<G> {
    service: ExpenseService<G>,
    expenses: Vec<Expense>,
    loading: bool,
    error: Option<String>,
}

impl<G: Gateway> ExpenseStore<G> {
    pub fn new(gateway: Arc<G>, session: Session) -> Self {
        Self {
            service: ExpenseService::new(gateway, session),
            expenses: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Replaces the whole collection with a fresh list call.
    pub async fn refresh(&mut self, filters: &ExpenseFilters) -> ServiceResult<()> {
        self.begin();
        let result = match self.service.list(filters).await {
            Ok(expenses) => {
                self.expenses = expenses;
                Ok(())
            }
            Err(err) => Err(err),
        };
        self.settle(result)
    }

    pub async fn add_expense(&mut self, draft: ExpenseDraft) -> ServiceResult<Expense> {
        self.begin();
        let result = self.service.add(draft).await;
        if let Ok(expense) = &result {
            reducer::apply(&mut self.expenses, Mutation::Created(expense.clone()));
        }
        self.settle(result)
    }

    pub async fn update_expense(
        &mut self,
        id: Uuid,
        changes: ExpenseChanges,
    ) -> ServiceResult<Expense> {
        self.begin();
        let result = self.service.update(id, changes).await;
        if let Ok(expense) = &result {
            reducer::apply(&mut self.expenses, Mutation::Updated(expense.clone()));
        }
        self.settle(result)
    }

    pub async fn remove_expense(&mut self, id: Uuid) -> ServiceResult<()> {
        self.begin();
        let result = self.service.remove(id).await;
        if result.is_ok() {
            reducer::apply(&mut self.expenses, Mutation::Removed(id));
        }
        self.settle(result)
    }

    fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    fn settle<T>(&mut self, result: ServiceResult<T>) -> ServiceResult<T> {
        if let Err(err) = &result {
            self.error = Some(err.to_string());
        }
        self.loading = false;
        result
    }
}
