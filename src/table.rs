// src/table.rs
/// Model of the listings detail table shown under the map, plus the
/// native sorting and paging the browser applies to it.
use crate::models::listing::ListingView;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

pub const PAGE_SIZE: usize = 5;

/// Column order of the filtered frame.
pub const COLUMNS: [&str; 14] = [
    "id",
    "name",
    "host_id",
    "host_name",
    "neighbourhood",
    "latitude",
    "longitude",
    "room_type",
    "price",
    "minimum_nights",
    "availability_365",
    "neighbourhood_group",
    "last_review_update",
    "num_review",
];

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TableColumn {
    pub name: String,
    pub id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Cell {
    Integer(i64),
    Number(f64),
    Text(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Integer(value) => write!(f, "{}", value),
            Cell::Number(value) => write!(f, "{}", value),
            Cell::Text(value) => f.write_str(value),
        }
    }
}

impl Cell {
    fn compare(&self, other: &Cell) -> Ordering {
        match (self, other) {
            (Cell::Integer(a), Cell::Integer(b)) => a.cmp(b),
            (Cell::Number(a), Cell::Number(b)) => a.total_cmp(b),
            (Cell::Integer(a), Cell::Number(b)) => (*a as f64).total_cmp(b),
            (Cell::Number(a), Cell::Integer(b)) => a.total_cmp(&(*b as f64)),
            (Cell::Text(a), Cell::Text(b)) => a.cmp(b),
            // numbers before text
            (Cell::Text(_), _) => Ordering::Greater,
            (_, Cell::Text(_)) => Ordering::Less,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Current sort state of the table: which column and which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    pub column: usize,
    pub direction: SortDirection,
}

impl SortKey {
    /// Next state after clicking the header of `column`: a new column starts
    /// ascending, the same column flips, and a descending column clears.
    pub fn cycle(current: Option<SortKey>, column: usize) -> Option<SortKey> {
        match current {
            Some(key) if key.column == column => match key.direction {
                SortDirection::Ascending => Some(SortKey {
                    column,
                    direction: SortDirection::Descending,
                }),
                SortDirection::Descending => None,
            },
            _ => Some(SortKey {
                column,
                direction: SortDirection::Ascending,
            }),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DetailTable {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<Cell>>,
    /// Literal value of every cell, shown on hover.
    pub tooltips: Vec<Vec<String>>,
}

impl DetailTable {
    pub fn from_listings(listings: &[ListingView]) -> Self {
        let columns = COLUMNS
            .iter()
            .map(|name| TableColumn {
                name: name.to_string(),
                id: name.to_string(),
            })
            .collect();
        let rows: Vec<Vec<Cell>> = listings.iter().map(row_cells).collect();
        let tooltips = rows
            .iter()
            .map(|row| row.iter().map(ToString::to_string).collect())
            .collect();

        DetailTable {
            columns,
            rows,
            tooltips,
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row indices in display order. Equal cells keep their original order.
    pub fn sorted_indices(&self, key: Option<SortKey>) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.rows.len()).collect();
        if let Some(key) = key {
            indices.sort_by(|&a, &b| {
                let (left, right) = (&self.rows[a][key.column], &self.rows[b][key.column]);
                match key.direction {
                    SortDirection::Ascending => left.compare(right),
                    SortDirection::Descending => right.compare(left),
                }
            });
        }
        indices
    }
}

fn row_cells(listing: &ListingView) -> Vec<Cell> {
    vec![
        Cell::Integer(listing.id),
        Cell::Text(listing.name.clone()),
        Cell::Integer(listing.host_id),
        Cell::Text(listing.host_name.clone()),
        Cell::Text(listing.neighbourhood.clone()),
        Cell::Number(listing.latitude),
        Cell::Number(listing.longitude),
        Cell::Text(listing.room_type.clone()),
        Cell::Number(listing.price),
        Cell::Integer(listing.minimum_nights),
        Cell::Integer(listing.availability_365),
        Cell::Text(listing.neighbourhood_group.clone().unwrap_or_default()),
        Cell::Text(listing.last_review_display()),
        Cell::Integer(listing.num_review),
    ]
}

pub fn page_count(rows: usize) -> usize {
    rows.div_ceil(PAGE_SIZE).max(1)
}

/// Slice of `indices` visible on `page` (zero based), clamped to the last page.
pub fn page_slice(indices: &[usize], page: usize) -> &[usize] {
    let page = page.min(page_count(indices.len()) - 1);
    let start = page * PAGE_SIZE;
    let end = (start + PAGE_SIZE).min(indices.len());
    &indices[start.min(end)..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const PRICE: usize = 8;

    fn listing(id: i64, price: f64, reviewed: Option<&str>) -> ListingView {
        ListingView {
            id,
            name: format!("Room {}", id),
            host_id: 9000 + id,
            host_name: "Mei".into(),
            neighbourhood: "Bedok".into(),
            latitude: 1.32,
            longitude: 103.93,
            room_type: "Private room".into(),
            price,
            minimum_nights: 1,
            availability_365: 360,
            neighbourhood_group: Some("East Region".into()),
            last_review_update: reviewed.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()),
            num_review: 2,
        }
    }

    #[test]
    fn table_carries_every_column_and_a_tooltip_per_cell() {
        let table = DetailTable::from_listings(&[listing(1, 55.5, None), listing(2, 20.0, Some("2022-01-02"))]);
        assert_eq!(table.columns.len(), COLUMNS.len());
        assert_eq!(table.len(), 2);
        assert_eq!(table.tooltips[0].len(), COLUMNS.len());
        assert_eq!(table.tooltips[0][2], "9001");
        assert_eq!(table.tooltips[0][3], "Mei");
        assert_eq!(table.tooltips[0][PRICE], "55.5");
        assert_eq!(table.tooltips[0][12], "N/A");
        assert_eq!(table.tooltips[1][12], "2022-01-02");
    }

    #[test]
    fn header_clicks_cycle_through_sort_states() {
        let first = SortKey::cycle(None, PRICE);
        assert_eq!(first, Some(SortKey { column: PRICE, direction: SortDirection::Ascending }));
        let second = SortKey::cycle(first, PRICE);
        assert_eq!(second.map(|k| k.direction), Some(SortDirection::Descending));
        assert_eq!(SortKey::cycle(second, PRICE), None);
        assert_eq!(SortKey::cycle(second, 0).map(|k| k.column), Some(0));
    }

    #[test]
    fn sorting_by_price_orders_numerically() {
        let table = DetailTable::from_listings(&[
            listing(1, 100.0, None),
            listing(2, 9.0, None),
            listing(3, 25.0, None),
        ]);
        let ascending = table.sorted_indices(SortKey::cycle(None, PRICE));
        assert_eq!(ascending, vec![1, 2, 0]);
        let descending = table.sorted_indices(Some(SortKey {
            column: PRICE,
            direction: SortDirection::Descending,
        }));
        assert_eq!(descending, vec![0, 2, 1]);
        assert_eq!(table.sorted_indices(None), vec![0, 1, 2]);
    }

    #[test]
    fn pages_hold_five_rows() {
        let indices: Vec<usize> = (0..12).collect();
        assert_eq!(page_count(12), 3);
        assert_eq!(page_slice(&indices, 0), &[0, 1, 2, 3, 4]);
        assert_eq!(page_slice(&indices, 2), &[10, 11]);
        assert_eq!(page_slice(&indices, 9), &[10, 11]);
        assert_eq!(page_count(0), 1);
        assert!(page_slice(&[], 0).is_empty());
    }
}
