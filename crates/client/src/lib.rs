//! Client-side financial state synchronization and aggregation.
//!
//! Storage, authentication, and querying live in an external managed
//! backend; this crate owns the in-memory copies of the expense,
//! category, and revenue collections, keeps them consistent through
//! optimistic local merge, and derives the financial aggregates the
//! presentation layer renders.

pub use aggregate::{CategoryTotal, FinanceSummary};
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use filter::ListFilter;
pub use gateway::{Gateway, GatewayError, RestGateway};
pub use services::{
    CategoryDraft, CategoryService, ExpenseDraft, ExpenseService, RevenueDraft, RevenueService,
    ServiceError, ServiceResult,
};
pub use session::Session;
pub use store::{CategoryStore, ExpenseStore, FinanceStore};

pub mod aggregate;
pub mod config;
pub mod error;
pub mod filter;
pub mod gateway;
pub mod services;
pub mod session;
pub mod store;
