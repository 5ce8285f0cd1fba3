// src/pipeline.rs
//! Translation of a [`MapQuery`] into one SQL statement over the listing
//! store. The filters are applied in a fixed order:
//!
//! 1. room type, 2. neighbourhood group, 3. neighbourhood (set membership,
//!    skipped when nothing is selected)
//! 4. price in `0..=max` (skipped without a maximum)
//! 5. minimum nights and 6. availability in their closed intervals (always)
//! 7. last review date inside the window, unreviewed listings always pass
//! 8. unreviewed listings dropped when asked to
//! 9. `num_review` joined from the review counts, optionally windowed
//!
//! The "N/A" rendering of a missing review date happens when the rows are
//! turned into figures and table cells.
use crate::models::query::{DateWindow, MapQuery, Span};
use chrono::NaiveDate;
use rusqlite::types::Value;

const SELECT_COLUMNS: &str = "l.id, l.name, l.host_id, l.host_name, l.neighbourhood, \
     l.latitude, l.longitude, l.room_type, l.price, l.minimum_nights, l.availability_365, l.neighbourhood_group, \
     l.last_review_update, COALESCE(rc.num_review, 0) AS num_review";

#[derive(Debug, Clone, PartialEq)]
pub struct ListingFilter {
    conditions: Vec<String>,
    params: Vec<Value>,
    review_window: Option<(NaiveDate, NaiveDate)>,
}

impl ListingFilter {
    pub fn from_query(query: &MapQuery) -> Self {
        let mut filter = ListingFilter {
            conditions: Vec::new(),
            params: Vec::new(),
            review_window: query.review_window.bounds(),
        };

        filter.any_of("l.room_type", &query.room_types);
        filter.any_of("l.neighbourhood_group", &query.neighbourhood_groups);
        filter.any_of("l.neighbourhood", &query.neighbourhoods);
        if let Some(max) = query.max_price {
            filter.push("l.price BETWEEN 0 AND ?", vec![Value::Real(max)]);
        }
        filter.within("l.minimum_nights", query.minimum_nights);
        filter.within("l.availability_365", query.availability);
        filter.last_review(&query.last_review);
        if query.exclude_unreviewed {
            filter.push("l.last_review_update IS NOT NULL", Vec::new());
        }
        filter
    }

    fn push(&mut self, condition: &str, params: Vec<Value>) {
        self.conditions.push(condition.to_string());
        self.params.extend(params);
    }

    fn any_of(&mut self, column: &str, values: &[String]) {
        if values.is_empty() {
            return;
        }
        let placeholders = vec!["?"; values.len()].join(", ");
        self.push(
            &format!("{} IN ({})", column, placeholders),
            values.iter().cloned().map(Value::Text).collect(),
        );
    }

    fn within(&mut self, column: &str, span: Span) {
        self.push(
            &format!("{} BETWEEN ? AND ?", column),
            vec![Value::Integer(span.lo), Value::Integer(span.hi)],
        );
    }

    fn last_review(&mut self, window: &DateWindow) {
        if let Some((start, end)) = window.bounds() {
            self.push(
                "(l.last_review_update BETWEEN ? AND ? OR l.last_review_update IS NULL)",
                vec![date_value(start), date_value(end)],
            );
        }
    }

    pub fn sql(&self) -> String {
        let review_counts = match self.review_window {
            Some(_) => {
                "SELECT listing_id, COUNT(date) AS num_review FROM reviews \
                 WHERE date BETWEEN ? AND ? GROUP BY listing_id"
            }
            None => "SELECT listing_id, COUNT(date) AS num_review FROM reviews GROUP BY listing_id",
        };
        let predicate = if self.conditions.is_empty() {
            "1 = 1".to_string()
        } else {
            self.conditions.join(" AND ")
        };
        format!(
            "SELECT {} FROM listings l LEFT JOIN ({}) rc ON rc.listing_id = l.id WHERE {} ORDER BY l.row_order",
            SELECT_COLUMNS, review_counts, predicate
        )
    }

    /// Parameters in placeholder order: the review window of the joined
    /// subquery comes first, then the row filters.
    pub fn params(&self) -> Vec<Value> {
        let mut params = Vec::with_capacity(self.params.len() + 2);
        if let Some((start, end)) = self.review_window {
            params.push(date_value(start));
            params.push(date_value(end));
        }
        params.extend(self.params.iter().cloned());
        params
    }
}

fn date_value(date: NaiveDate) -> Value {
    Value::Text(date.format("%Y-%m-%d").to_string())
}
