use std::sync::Arc;

use api_types::revenue::{NewRevenue, Revenue, RevenueChanges, RevenueFilters};
use chrono::{Local, NaiveDate};
use uuid::Uuid;

use super::{ServiceResult, require_positive_amount, require_text};
use crate::{gateway::Gateway, session::Session};

/// Fallback when the user leaves the source blank.
const DEFAULT_SOURCE: &str = "Other";

#[derive(Clone, Debug)]
pub struct RevenueDraft {
    pub amount: f64,
    pub description: String,
    pub source: String,
    /// Defaults to today when absent.
    pub date: Option<NaiveDate>,
}

pub struct RevenueService<G> {
    gateway: Arc<G>,
    session: Session,
}

impl<G: Gateway> RevenueService<G> {
    pub fn new(gateway: Arc<G>, session: Session) -> Self {
        Self { gateway, session }
    }

    pub async fn list(&self, filters: &RevenueFilters) -> ServiceResult<Vec<Revenue>> {
        let rows = self
            .gateway
            .list_revenues(self.session.user_id, filters)
            .await
            .inspect_err(|err| tracing::error!("failed to fetch revenues: {err}"))?;
        Ok(rows)
    }

    pub async fn add(&self, draft: RevenueDraft) -> ServiceResult<Revenue> {
        require_positive_amount(draft.amount)?;
        let description = require_text(&draft.description, "description")?;
        let source = match draft.source.trim() {
            "" => DEFAULT_SOURCE.to_string(),
            trimmed => trimmed.to_string(),
        };

        let row = NewRevenue {
            amount: draft.amount,
            description,
            source,
            date: draft.date.unwrap_or_else(|| Local::now().date_naive()),
            user_id: self.session.user_id,
        };
        let revenue = self
            .gateway
            .insert_revenue(&row)
            .await
            .inspect_err(|err| tracing::error!("failed to add revenue: {err}"))?;
        Ok(revenue)
    }

    pub async fn update(&self, id: Uuid, changes: RevenueChanges) -> ServiceResult<Revenue> {
        if let Some(amount) = changes.amount {
            require_positive_amount(amount)?;
        }
        if let Some(description) = &changes.description {
            require_text(description, "description")?;
        }
        let revenue = self
            .gateway
            .update_revenue(id, &changes)
            .await
            .inspect_err(|err| tracing::error!("failed to update revenue: {err}"))?;
        Ok(revenue)
    }

    pub async fn remove(&self, id: Uuid) -> ServiceResult<()> {
        self.gateway
            .delete_revenue(id)
            .await
            .inspect_err(|err| tracing::error!("failed to delete revenue: {err}"))?;
        Ok(())
    }
}
