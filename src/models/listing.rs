// src/models/listing.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Display value for a listing that has never been reviewed.
pub const NO_REVIEW: &str = "N/A";

/// A listing row as it appears in the listings source file.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    pub host_id: i64,
    #[serde(default)]
    pub host_name: String,
    pub neighbourhood: String,
    pub latitude: f64,
    pub longitude: f64,
    pub room_type: String,
    pub price: f64,
    pub minimum_nights: i64,
    pub availability_365: i64,
}

/// One row of the filtered map frame: the listing joined with its
/// neighbourhood group, its latest review date and its windowed review count.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ListingView {
    pub id: i64,
    pub name: String,
    pub host_id: i64,
    pub host_name: String,
    pub neighbourhood: String,
    pub latitude: f64,
    pub longitude: f64,
    pub room_type: String,
    pub price: f64,
    pub minimum_nights: i64,
    pub availability_365: i64,
    pub neighbourhood_group: Option<String>,
    pub last_review_update: Option<NaiveDate>,
    pub num_review: i64,
}

impl ListingView {
    pub fn last_review_display(&self) -> String {
        match self.last_review_update {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => NO_REVIEW.to_string(),
        }
    }

    /// Value of a categorical column, used for map coloring.
    pub fn category(&self, var: super::query::CategoryVar) -> &str {
        use super::query::CategoryVar;
        match var {
            CategoryVar::RoomType => &self.room_type,
            CategoryVar::Neighbourhood => &self.neighbourhood,
            CategoryVar::NeighbourhoodGroup => self.neighbourhood_group.as_deref().unwrap_or(""),
        }
    }
}
