use std::sync::Arc;

use api_types::category::{Category, CategoryChanges};
use uuid::Uuid;

use super::reducer::{self, Mutation};
use crate::{
    gateway::Gateway,
    services::{CategoryDraft, CategoryService, ServiceResult},
    session::Session,
};

/// Owns the in-memory category collection. Same protocol as the expense
/// store; a delete that fails the in-use check leaves the collection
/// untouched.
pub struct CategoryStore<G> {
    service: CategoryService<G>,
    categories: Vec<Category>,
    loading: bool,
    error: Option<String>,
}

impl<G: Gateway> CategoryStore<G> {
    pub fn new(gateway: Arc<G>, session: Session) -> Self {
        Self {
            service: CategoryService::new(gateway, session),
            categories: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub async fn refresh(&mut self) -> ServiceResult<()> {
        self.begin();
        let result = match self.service.list().await {
            Ok(categories) => {
                self.categories = categories;
                Ok(())
            }
            Err(err) => Err(err),
        };
        self.settle(result)
    }

    pub async fn add_category(&mut self, draft: CategoryDraft) -> ServiceResult<Category> {
        self.begin();
        let result = self.service.add(draft).await;
        if let Ok(category) = &result {
            reducer::apply(&mut self.categories, Mutation::Created(category.clone()));
        }
        self.settle(result)
    }

    pub async fn update_category(
        &mut self,
        id: Uuid,
        changes: CategoryChanges,
    ) -> ServiceResult<Category> {
        self.begin();
        let result = self.service.update(id, changes).await;
        if let Ok(category) = &result {
            reducer::apply(&mut self.categories, Mutation::Updated(category.clone()));
        }
        self.settle(result)
    }

    pub async fn remove_category(&mut self, id: Uuid) -> ServiceResult<()> {
        self.begin();
        let result = self.service.remove(id).await;
        if result.is_ok() {
            reducer::apply(&mut self.categories, Mutation::Removed(id));
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
