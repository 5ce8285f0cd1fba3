// src/models/review.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Review {
    pub listing_id: i64, // ID of the listing the review belongs to
    pub date: NaiveDate, // Day the review was written
}
