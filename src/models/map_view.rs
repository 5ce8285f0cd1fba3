use crate::figures::{self, Figure};
use crate::models::listing::ListingView;
use crate::models::query::CategoryVar;
use crate::table::DetailTable;
use serde::{Deserialize, Serialize};

/// Everything the map section redraws after a filter change. All three parts
/// come from the same filtered listings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct MapView {
    pub figure: Figure,
    pub count: usize,
    pub table: DetailTable,
}

impl MapView {
    pub fn build(color: CategoryVar, listings: &[ListingView]) -> Self {
        MapView {
            figure: figures::listing_map(color, listings),
            count: listings.len(),
            table: DetailTable::from_listings(listings),
        }
    }
}
