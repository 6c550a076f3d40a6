use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod expense {
    use super::*;

    /// Joined category record embedded in expense rows.
    ///
    /// The backend returns it under the relation key `categories`.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct CategoryRef {
        pub id: Uuid,
        pub name: String,
        pub color: String,
    }

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Expense {
        pub id: Uuid,
        pub amount: f64,
        pub description: String,
        /// Calendar date of the expense, no time component.
        pub date: NaiveDate,
        pub category_id: Option<Uuid>,
        pub user_id: Uuid,
        pub created_at: DateTime<Utc>,
        /// Hydrated category, present when the row was fetched with the join.
        #[serde(rename = "categories", default)]
        pub category: Option<CategoryRef>,
    }

    /// Insert payload; `user_id` is attached by the service layer.
    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct NewExpense {
        pub amount: f64,
        pub description: String,
        pub date: NaiveDate,
        pub category_id: Option<Uuid>,
        pub user_id: Uuid,
    }

    /// Partial update; absent fields are left untouched by the backend.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct ExpenseChanges {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub amount: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub date: Option<NaiveDate>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub category_id: Option<Uuid>,
    }

    /// List restriction: by category and/or an inclusive date range.
    ///
    /// The range applies only when both bounds are present.
    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct ExpenseFilters {
        pub category_id: Option<Uuid>,
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
    }
}

pub mod category {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Category {
        pub id: Uuid,
        pub name: String,
        /// Display color, hex string.
        pub color: String,
        pub user_id: Uuid,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct NewCategory {
        pub name: String,
        pub color: String,
        pub user_id: Uuid,
    }

    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct CategoryChanges {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub color: Option<String>,
    }
}

pub mod revenue {
    use super::*;

    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct Revenue {
        pub id: Uuid,
        pub amount: f64,
        pub description: String,
        /// Free-text origin, e.g. "Salary"; "Other" when the user left it blank.
        pub source: String,
        pub date: NaiveDate,
        pub user_id: Uuid,
    }

    #[derive(Clone, Debug, Serialize, Deserialize)]
    pub struct NewRevenue {
        pub amount: f64,
        pub description: String,
        pub source: String,
        pub date: NaiveDate,
        pub user_id: Uuid,
    }

    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct RevenueChanges {
        #[serde(skip_serializing_if = "Option::is_none")]
        pub amount: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub description: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub source: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub date: Option<NaiveDate>,
    }

    #[derive(Clone, Debug, Default, Serialize, Deserialize)]
    pub struct RevenueFilters {
        pub start_date: Option<NaiveDate>,
        pub end_date: Option<NaiveDate>,
    }
}
