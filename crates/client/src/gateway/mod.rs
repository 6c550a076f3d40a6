//! Row-level access to the remote store.
//!
//! The trait is the seam between the service adapters and the managed
//! backend; [`RestGateway`] is the production implementation, tests plug
//! in an in-memory double.

use api_types::{
    category::{Category, CategoryChanges, NewCategory},
    expense::{Expense, ExpenseChanges, ExpenseFilters, NewExpense},
    revenue::{NewRevenue, Revenue, RevenueChanges, RevenueFilters},
};
use thiserror::Error;
use uuid::Uuid;

pub mod rest;

pub use rest::RestGateway;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("not authenticated")]
    Unauthorized,
    #[error("permission denied")]
    Forbidden,
    #[error("record not found")]
    NotFound,
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("{0}")]
    Validation(String),
    #[error("server error: {0}")]
    Server(String),
    #[error("server unreachable: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Authenticated create/read/update/delete over the three row collections.
///
/// Listing orders expenses and revenues by date, newest first, and
/// categories by name. Expense rows come back with the category join
/// hydrated.
#[allow(async_fn_in_trait)]
pub trait Gateway {
    async fn list_expenses(&self, filters: &ExpenseFilters) -> Result<Vec<Expense>, GatewayError>;
    async fn insert_expense(&self, row: &NewExpense) -> Result<Expense, GatewayError>;
    async fn update_expense(
        &self,
        id: Uuid,
        changes: &ExpenseChanges,
    ) -> Result<Expense, GatewayError>;
    async fn delete_expense(&self, id: Uuid) -> Result<(), GatewayError>;

    async fn list_categories(&self) -> Result<Vec<Category>, GatewayError>;
    async fn insert_category(&self, row: &NewCategory) -> Result<Category, GatewayError>;
    async fn update_category(
        &self,
        id: Uuid,
        changes: &CategoryChanges,
    ) -> Result<Category, GatewayError>;
    async fn delete_category(&self, id: Uuid) -> Result<(), GatewayError>;
    /// Bounded probe: is at least one expense still referencing the category?
    async fn expense_exists_for_category(
        &self,
        category_id: Uuid,
    ) -> Result<bool, GatewayError>;

    async fn list_revenues(
        &self,
        user_id: Uuid,
        filters: &RevenueFilters,
    ) -> Result<Vec<Revenue>, GatewayError>;
    async fn insert_revenue(&self, row: &NewRevenue) -> Result<Revenue, GatewayError>;
    async fn update_revenue(
        &self,
        id: Uuid,
        changes: &RevenueChanges,
    ) -> Result<Revenue, GatewayError>;
    async fn delete_revenue(&self, id: Uuid) -> Result<(), GatewayError>;
}
