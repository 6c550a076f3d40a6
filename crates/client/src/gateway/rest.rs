use api_types::{
    category::{Category, CategoryChanges, NewCategory},
    expense::{Expense, ExpenseChanges, ExpenseFilters, NewExpense},
    revenue::{NewRevenue, Revenue, RevenueChanges, RevenueFilters},
};
use reqwest::{RequestBuilder, Response, Url, header};
use serde::{Deserialize, de::DeserializeOwned};
use uuid::Uuid;

use super::{Gateway, GatewayError};
use crate::error::{AppError, Result};

const EXPENSE_SELECT: &str = "*,categories(id,name,color)";
/// Asks the backend to return the affected row as a bare object
/// instead of a one-element array.
const OBJECT_JSON: &str = "application/vnd.pgrst.object+json";

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    message: String,
}

/// Gateway speaking the PostgREST dialect of the managed backend.
#[derive(Debug, Clone)]
pub struct RestGateway {
    base_url: Url,
    api_key: String,
    access_token: String,
    http: reqwest::Client,
}

impl RestGateway {
    pub fn new(base_url: &str, api_key: &str, access_token: &str) -> Result<Self> {
        let base_url = Url::parse(base_url).map_err(|err| AppError::BaseUrl(err.to_string()))?;
        Ok(Self {
            base_url,
            api_key: api_key.to_string(),
            access_token: access_token.to_string(),
            http: reqwest::Client::new(),
        })
    }

    fn table(&self, name: &str) -> std::result::Result<Url, GatewayError> {
        self.base_url
            .join(&format!("rest/v1/{name}"))
            .map_err(|err| GatewayError::Server(format!("invalid table url: {err}")))
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", self.api_key.as_str())
            .bearer_auth(self.access_token.as_str())
    }

    /// Marks a write so the backend returns the resulting single row.
    fn returning_row(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("Prefer", "return=representation")
            .header(header::ACCEPT, OBJECT_JSON)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> std::result::Result<T, GatewayError> {
        let res = self.authed(builder).send().await?;
        let res = check(res).await?;
        res.json::<T>().await.map_err(GatewayError::from)
    }

    async fn execute(&self, builder: RequestBuilder) -> std::result::Result<(), GatewayError> {
        let res = self.authed(builder).send().await?;
        check(res).await?;
        Ok(())
    }
}

async fn check(res: Response) -> std::result::Result<Response, GatewayError> {
    if res.status().is_success() {
        return Ok(res);
    }

    let status = res.status();
    let body = res
        .json::<ErrorResponse>()
        .await
        .map(|err| err.message)
        .unwrap_or_else(|_| "unknown error".to_string());
    tracing::debug!("gateway request failed: {status} {body}");

    Err(match status.as_u16() {
        401 => GatewayError::Unauthorized,
        403 => GatewayError::Forbidden,
        // 406 is how the backend reports "zero rows" for single-object reads.
        404 | 406 => GatewayError::NotFound,
        409 => GatewayError::Conflict(body),
        400 | 422 => GatewayError::Validation(body),
        _ => GatewayError::Server(body),
    })
}

fn with_query(mut url: Url, pairs: &[(&str, String)]) -> Url {
    {
        let mut query = url.query_pairs_mut();
        for (key, value) in pairs {
            query.append_pair(key, value);
        }
    }
    url
}

fn expense_list_query(filters: &ExpenseFilters) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("select", EXPENSE_SELECT.to_string()),
        ("order", "date.desc".to_string()),
    ];
    if let Some(category_id) = filters.category_id {
        pairs.push(("category_id", format!("eq.{category_id}")));
    }
    if let (Some(start), Some(end)) = (filters.start_date, filters.end_date) {
        pairs.push(("date", format!("gte.{start}")));
        pairs.push(("date", format!("lte.{end}")));
    }
    pairs
}

fn revenue_list_query(user_id: Uuid, filters: &RevenueFilters) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("select", "*".to_string()),
        ("user_id", format!("eq.{user_id}")),
        ("order", "date.desc".to_string()),
    ];
    if let (Some(start), Some(end)) = (filters.start_date, filters.end_date) {
        pairs.push(("date", format!("gte.{start}")));
        pairs.push(("date", format!("lte.{end}")));
    }
    pairs
}

impl Gateway for RestGateway {
    async fn list_expenses(
        &self,
        filters: &ExpenseFilters,
    ) -> std::result::Result<Vec<Expense>, GatewayError> {
        let url = with_query(self.table("expenses")?, &expense_list_query(filters));
        self.fetch(self.http.get(url)).await
    }

    async fn insert_expense(
        &self,
        row: &NewExpense,
    ) -> std::result::Result<Expense, GatewayError> {
        let url = with_query(
            self.table("expenses")?,
            &[("select", EXPENSE_SELECT.to_string())],
        );
        self.fetch(self.returning_row(self.http.post(url).json(row)))
            .await
    }

    async fn update_expense(
        &self,
        id: Uuid,
        changes: &ExpenseChanges,
    ) -> std::result::Result<Expense, GatewayError> {
        let url = with_query(
            self.table("expenses")?,
            &[
                ("id", format!("eq.{id}")),
                ("select", EXPENSE_SELECT.to_string()),
            ],
        );
        self.fetch(self.returning_row(self.http.patch(url).json(changes)))
            .await
    }

    async fn delete_expense(&self, id: Uuid) -> std::result::Result<(), GatewayError> {
        let url = with_query(self.table("expenses")?, &[("id", format!("eq.{id}"))]);
        self.execute(self.http.delete(url)).await
    }

    async fn list_categories(&self) -> std::result::Result<Vec<Category>, GatewayError> {
        let url = with_query(
            self.table("categories")?,
            &[("select", "*".to_string()), ("order", "name.asc".to_string())],
        );
        self.fetch(self.http.get(url)).await
    }

    async fn insert_category(
        &self,
        row: &NewCategory,
    ) -> std::result::Result<Category, GatewayError> {
        let url = self.table("categories")?;
        self.fetch(self.returning_row(self.http.post(url).json(row)))
            .await
    }

    async fn update_category(
        &self,
        id: Uuid,
        changes: &CategoryChanges,
    ) -> std::result::Result<Category, GatewayError> {
        let url = with_query(self.table("categories")?, &[("id", format!("eq.{id}"))]);
        self.fetch(self.returning_row(self.http.patch(url).json(changes)))
            .await
    }

    async fn delete_category(&self, id: Uuid) -> std::result::Result<(), GatewayError> {
        let url = with_query(self.table("categories")?, &[("id", format!("eq.{id}"))]);
        self.execute(self.http.delete(url)).await
    }

    async fn expense_exists_for_category(
        &self,
        category_id: Uuid,
    ) -> std::result::Result<bool, GatewayError> {
        let url = with_query(
            self.table("expenses")?,
            &[
                ("select", "id".to_string()),
                ("category_id", format!("eq.{category_id}")),
                ("limit", "1".to_string()),
            ],
        );
        let rows: Vec<serde_json::Value> = self.fetch(self.http.get(url)).await?;
        Ok(!rows.is_empty())
    }

    async fn list_revenues(
        &self,
        user_id: Uuid,
        filters: &RevenueFilters,
    ) -> std::result::Result<Vec<Revenue>, GatewayError> {
        let url = with_query(
            self.table("revenues")?,
            &revenue_list_query(user_id, filters),
        );
        self.fetch(self.http.get(url)).await
    }

    async fn insert_revenue(
        &self,
        row: &NewRevenue,
    ) -> std::result::Result<Revenue, GatewayError> {
        let url = self.table("revenues")?;
        self.fetch(self.returning_row(self.http.post(url).json(row)))
            .await
    }

    async fn update_revenue(
        &self,
        id: Uuid,
        changes: &RevenueChanges,
    ) -> std::result::Result<Revenue, GatewayError> {
        let url = with_query(self.table("revenues")?, &[("id", format!("eq.{id}"))]);
        self.fetch(self.returning_row(self.http.patch(url).json(changes)))
            .await
    }

    async fn delete_revenue(&self, id: Uuid) -> std::result::Result<(), GatewayError> {
        let url = with_query(self.table("revenues")?, &[("id", format!("eq.{id}"))]);
        self.execute(self.http.delete(url)).await
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn new_rejects_an_invalid_base_url() {
        assert!(RestGateway::new("not a url", "anon", "token").is_err());
    }

    #[test]
    fn expense_query_defaults_to_join_and_date_order() {
        let pairs = expense_list_query(&ExpenseFilters::default());
        assert_eq!(
            pairs,
            vec![
                ("select", EXPENSE_SELECT.to_string()),
                ("order", "date.desc".to_string()),
            ]
        );
    }

    #[test]
    fn expense_query_includes_category_and_range() {
        let category_id = Uuid::new_v4();
        let filters = ExpenseFilters {
            category_id: Some(category_id),
            start_date: Some(date("2024-01-01")),
            end_date: Some(date("2024-01-31")),
        };
        let pairs = expense_list_query(&filters);
        assert!(pairs.contains(&("category_id", format!("eq.{category_id}"))));
        assert!(pairs.contains(&("date", "gte.2024-01-01".to_string())));
        assert!(pairs.contains(&("date", "lte.2024-01-31".to_string())));
    }

    #[test]
    fn date_range_needs_both_bounds() {
        let filters = ExpenseFilters {
            start_date: Some(date("2024-01-01")),
            ..ExpenseFilters::default()
        };
        let pairs = expense_list_query(&filters);
        assert!(!pairs.iter().any(|(key, _)| *key == "date"));
    }

    #[test]
    fn revenue_query_scopes_to_user() {
        let user_id = Uuid::new_v4();
        let pairs = revenue_list_query(user_id, &RevenueFilters::default());
        assert!(pairs.contains(&("user_id", format!("eq.{user_id}"))));
        assert!(pairs.contains(&("order", "date.desc".to_string())));
    }
}
