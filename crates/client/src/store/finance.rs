use std::sync::Arc;

use api_types::{
    expense::{Expense, ExpenseFilters},
    revenue::{Revenue, RevenueChanges, RevenueFilters},
};
use uuid::Uuid;

use super::reducer::{self, Mutation};
use crate::{
    aggregate::{self, CategoryTotal, FinanceSummary},
    gateway::Gateway,
    services::{ExpenseDraft, ExpenseService, RevenueDraft, RevenueService, ServiceResult},
    session::Session,
};

/// Owns the expense and revenue collections jointly and keeps the
/// derived aggregates in step with them.
///
/// The summary and category totals are recomputed once per successful
/// state change and served cached between changes.
pub struct FinanceStore<G> {
    expense_service: ExpenseService<G>,
    revenue_service: RevenueService<G>,
    expenses: Vec<Expense>,
    revenues: Vec<Revenue>,
    loading: bool,
    error: Option<String>,
    summary: FinanceSummary,
    category_totals: Vec<CategoryTotal>,
}

impl<G: Gateway> FinanceStore<G> {
    pub fn new(gateway: Arc<G>, session: Session) -> Self {
        Self {
            expense_service: ExpenseService::new(Arc::clone(&gateway), session.clone()),
            revenue_service: RevenueService::new(gateway, session),
            expenses: Vec::new(),
            revenues: Vec::new(),
            loading: false,
            error: None,
            summary: FinanceSummary::default(),
            category_totals: Vec::new(),
        }
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn revenues(&self) -> &[Revenue] {
        &self.revenues
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn summary(&self) -> &FinanceSummary {
        &self.summary
    }

    pub fn category_totals(&self) -> &[CategoryTotal] {
        &self.category_totals
    }

    /// Reloads both collections concurrently.
    ///
    /// Fails as a whole when either list fails: the first error wins and
    /// the other collection's fresh data is discarded for this refresh.
    pub async fn refresh_data(&mut self) -> ServiceResult<()> {
        self.begin();
        let expense_filters = ExpenseFilters::default();
        let revenue_filters = RevenueFilters::default();
        let (expenses, revenues) = tokio::join!(
            self.expense_service.list(&expense_filters),
            self.revenue_service.list(&revenue_filters),
        );
        let result = match (expenses, revenues) {
            (Ok(expenses), Ok(revenues)) => {
                self.expenses = expenses;
                self.revenues = revenues;
                self.recompute();
                Ok(())
            }
            (Err(err), _) | (_, Err(err)) => Err(err),
        };
        self.settle(result)
    }

    pub async fn add_expense(&mut self, draft: ExpenseDraft) -> ServiceResult<Expense> {
        self.begin();
        let result = self.expense_service.add(draft).await;
        if let Ok(expense) = &result {
            reducer::apply(&mut self.expenses, Mutation::Created(expense.clone()));
            self.recompute();
        }
        self.settle(result)
    }

    pub async fn remove_expense(&mut self, id: Uuid) -> ServiceResult<()> {
        self.begin();
        let result = self.expense_service.remove(id).await;
        if result.is_ok() {
            reducer::apply(&mut self.expenses, Mutation::Removed(id));
            self.recompute();
        }
        self.settle(result)
    }

    pub async fn add_revenue(&mut self, draft: RevenueDraft) -> ServiceResult<Revenue> {
        self.begin();
        let result = self.revenue_service.add(draft).await;
        if let Ok(revenue) = &result {
            reducer::apply(&mut self.revenues, Mutation::Created(revenue.clone()));
            self.recompute();
        }
        self.settle(result)
    }

    pub async fn update_revenue(
        &mut self,
        id: Uuid,
        changes: RevenueChanges,
    ) -> ServiceResult<Revenue> {
        self.begin();
        let result = self.revenue_service.update(id, changes).await;
        if let Ok(revenue) = &result {
            reducer::apply(&mut self.revenues, Mutation::Updated(revenue.clone()));
            self.recompute();
        }
        self.settle(result)
    }

    pub async fn remove_revenue(&mut self, id: Uuid) -> ServiceResult<()> {
        self.begin();
        let result = self.revenue_service.remove(id).await;
        if result.is_ok() {
            reducer::apply(&mut self.revenues, Mutation::Removed(id));
            self.recompute();
        }
        self.settle(result)
    }

    fn recompute(&mut self) {
        self.summary = aggregate::summarize(&self.expenses, &self.revenues);
        self.category_totals = aggregate::category_totals(&self.expenses);
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
