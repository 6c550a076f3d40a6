//! In-memory expense list filtering.
//!
//! Pure functions over the store's collection: free-text search combined
//! with a single chip selection, ordered newest first. The evaluation
//! date is always passed in by the caller, never read twice internally.

use api_types::expense::Expense;
use chrono::{Datelike, Days, NaiveDate};

/// Chip selection on the expense list screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListFilter {
    All,
    Today,
    ThisWeek,
    /// Matches the joined category by name.
    Category(String),
}

/// Keeps expenses whose description or category name contains `search`
/// (case-insensitive) and whose date/category satisfies `filter`,
/// ordered by date descending.
pub fn search_expenses<'a>(
    expenses: &'a [Expense],
    search: &str,
    filter: &ListFilter,
    today: NaiveDate,
) -> Vec<&'a Expense> {
    let needle = search.trim().to_lowercase();
    let mut matches: Vec<&Expense> = expenses
        .iter()
        .filter(|expense| matches_search(expense, &needle) && matches_filter(expense, filter, today))
        .collect();
    matches.sort_by(|a, b| b.date.cmp(&a.date));
    matches
}

fn matches_search(expense: &Expense, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    if expense.description.to_lowercase().contains(needle) {
        return true;
    }
    expense
        .category
        .as_ref()
        .is_some_and(|category| category.name.to_lowercase().contains(needle))
}

fn matches_filter(expense: &Expense, filter: &ListFilter, today: NaiveDate) -> bool {
    match filter {
        ListFilter::All => true,
        ListFilter::Today => expense.date == today,
        ListFilter::ThisWeek => {
            let (start, end) = week_bounds(today);
            expense.date >= start && expense.date <= end
        }
        ListFilter::Category(name) => expense
            .category
            .as_ref()
            .is_some_and(|category| category.name == *name),
    }
}

/// Inclusive bounds of the week containing `day`, starting on Sunday.
pub fn week_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = day - Days::new(u64::from(day.weekday().num_days_from_sunday()));
    (start, start + Days::new(6))
}

#[cfg(test)]
mod tests {
    use api_types::expense::CategoryRef;
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn expense(description: &str, category: &str, day: &str) -> Expense {
        Expense {
            id: Uuid::new_v4(),
            amount: 10.0,
            description: description.to_string(),
            date: date(day),
            category_id: None,
            user_id: Uuid::new_v4(),
            created_at: Utc::now(),
            category: Some(CategoryRef {
                id: Uuid::new_v4(),
                name: category.to_string(),
                color: "#36A2EB".to_string(),
            }),
        }
    }

    fn fixtures() -> Vec<Expense> {
        vec![
            expense("Lunch", "Food", "2024-01-01"),
            expense("Taxi", "Transport", "2024-01-02"),
        ]
    }

    #[test]
    fn search_matches_description_case_insensitively() {
        let expenses = fixtures();
        let hits = search_expenses(&expenses, "lun", &ListFilter::All, date("2024-01-02"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].description, "Lunch");
    }

    #[test]
    fn search_matches_category_name_too() {
        let expenses = fixtures();
        let hits = search_expenses(&expenses, "transp", &ListFilter::All, date("2024-01-02"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].description, "Taxi");
    }

    #[test]
    fn category_filter_selects_by_name() {
        let expenses = fixtures();
        let filter = ListFilter::Category("Transport".to_string());
        let hits = search_expenses(&expenses, "", &filter, date("2024-01-02"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].description, "Taxi");
    }

    #[test]
    fn today_filter_uses_calendar_equality() {
        let expenses = fixtures();
        let hits = search_expenses(&expenses, "", &ListFilter::Today, date("2024-01-02"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].description, "Taxi");
    }

    #[test]
    fn results_are_ordered_newest_first() {
        let expenses = fixtures();
        let hits = search_expenses(&expenses, "", &ListFilter::All, date("2024-01-02"));
        assert_eq!(hits[0].description, "Taxi");
        assert_eq!(hits[1].description, "Lunch");
    }

    #[test]
    fn week_bounds_start_on_sunday() {
        // 2024-01-03 was a Wednesday.
        let (start, end) = week_bounds(date("2024-01-03"));
        assert_eq!(start, date("2023-12-31"));
        assert_eq!(end, date("2024-01-06"));
    }

    #[test]
    fn week_bounds_on_a_sunday_span_that_sunday() {
        let (start, end) = week_bounds(date("2023-12-31"));
        assert_eq!(start, date("2023-12-31"));
        assert_eq!(end, date("2024-01-06"));
    }

    #[test]
    fn this_week_filter_is_inclusive() {
        let expenses = vec![
            expense("Inside", "Food", "2023-12-31"),
            expense("Edge", "Food", "2024-01-06"),
            expense("Outside", "Food", "2024-01-07"),
        ];
        let hits = search_expenses(&expenses, "", &ListFilter::ThisWeek, date("2024-01-03"));
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|e| e.description != "Outside"));
    }
}
