use std::sync::Arc;

use api_types::category::{Category, CategoryChanges, NewCategory};
use uuid::Uuid;

use super::{ServiceError, ServiceResult, require_text};
use crate::{gateway::Gateway, session::Session};

#[derive(Clone, Debug)]
pub struct CategoryDraft {
    pub name: String,
    pub color: String,
}

pub struct CategoryService<G> {
    gateway: Arc<G>,
    session: Session,
}

impl<G: Gateway> CategoryService<G> {
    pub fn new(gateway: Arc<G>, session: Session) -> Self {
        Self { gateway, session }
    }

    /// Lists the user's categories, ordered by name.
    pub async fn list(&self) -> ServiceResult<Vec<Category>> {
        let rows = self
            .gateway
            .list_categories()
            .await
            .inspect_err(|err| tracing::error!("failed to fetch categories: {err}"))?;
        Ok(rows)
    }

    pub async fn add(&self, draft: CategoryDraft) -> ServiceResult<Category> {
        let name = require_text(&draft.name, "name")?;
        let row = NewCategory {
            name,
            color: draft.color,
            user_id: self.session.user_id,
        };
        let category = self
            .gateway
            .insert_category(&row)
            .await
            .inspect_err(|err| tracing::error!("failed to create category: {err}"))?;
        Ok(category)
    }

    pub async fn update(&self, id: Uuid, changes: CategoryChanges) -> ServiceResult<Category> {
        if let Some(name) = &changes.name {
            require_text(name, "name")?;
        }
        let category = self
            .gateway
            .update_category(id, &changes)
            .await
            .inspect_err(|err| tracing::error!("failed to update category: {err}"))?;
        Ok(category)
    }

    /// Deletes the category unless an expense still references it.
    ///
    /// The existence probe is bounded (at most one row) and is not atomic
    /// with the delete; the remote store remains the final arbiter.
    pub async fn remove(&self, id: Uuid) -> ServiceResult<()> {
        let in_use = self
            .gateway
            .expense_exists_for_category(id)
            .await
            .inspect_err(|err| tracing::error!("failed to probe category usage: {err}"))?;
        if in_use {
            return Err(ServiceError::CategoryInUse);
        }

        self.gateway
            .delete_category(id)
            .await
            .inspect_err(|err| tracing::error!("failed to delete category: {err}"))?;
        Ok(())
    }
}
