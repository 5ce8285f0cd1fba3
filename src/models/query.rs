// src/models/query.rs
/// Inputs of the map pipeline and of the distribution charts, shared between
/// the server handlers and the browser components.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Categorical listing attribute: bar chart axis and map point color.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum CategoryVar {
    #[default]
    RoomType,
    Neighbourhood,
    NeighbourhoodGroup,
}

impl CategoryVar {
    pub const ALL: [CategoryVar; 3] = [
        CategoryVar::RoomType,
        CategoryVar::Neighbourhood,
        CategoryVar::NeighbourhoodGroup,
    ];

    pub fn column(self) -> &'static str {
        match self {
            CategoryVar::RoomType => "room_type",
            CategoryVar::Neighbourhood => "neighbourhood",
            CategoryVar::NeighbourhoodGroup => "neighbourhood_group",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryVar::RoomType => "Room Type",
            CategoryVar::Neighbourhood => "Neighbourhood",
            CategoryVar::NeighbourhoodGroup => "Neighbourhood Group",
        }
    }

    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|var| var.column() == column)
    }
}

/// Numeric listing attribute shown by the histogram.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuantityVar {
    #[default]
    Price,
    MinimumNights,
    #[serde(rename = "availability_365")]
    Availability365,
}

impl QuantityVar {
    pub const ALL: [QuantityVar; 3] = [
        QuantityVar::Price,
        QuantityVar::MinimumNights,
        QuantityVar::Availability365,
    ];

    pub fn column(self) -> &'static str {
        match self {
            QuantityVar::Price => "price",
            QuantityVar::MinimumNights => "minimum_nights",
            QuantityVar::Availability365 => "availability_365",
        }
    }

    pub fn from_column(column: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|var| var.column() == column)
    }
}

/// Closed integer interval `[lo, hi]`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub lo: i64,
    pub hi: i64,
}

impl Span {
    pub fn new(lo: i64, hi: i64) -> Self {
        Span { lo, hi }
    }

    pub fn contains(&self, value: i64) -> bool {
        self.lo <= value && value <= self.hi
    }
}

/// Date range picked in the settings panel. Either end may be cleared; the
/// window only restricts anything once both ends are set.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateWindow {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        DateWindow {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn bounds(&self) -> Option<(NaiveDate, NaiveDate)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some((start, end)),
            _ => None,
        }
    }
}

/// Every input of the map section. Missing JSON fields fall back to the
/// settings panel's initial state.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MapQuery {
    pub color: CategoryVar,
    pub room_types: Vec<String>,
    pub neighbourhood_groups: Vec<String>,
    pub neighbourhoods: Vec<String>,
    pub max_price: Option<f64>,
    pub minimum_nights: Span,
    pub availability: Span,
    pub last_review: DateWindow,
    pub exclude_unreviewed: bool,
    pub review_window: DateWindow,
}

pub const DEFAULT_MAX_PRICE: f64 = 100.0;

impl Default for MapQuery {
    fn default() -> Self {
        MapQuery {
            color: CategoryVar::RoomType,
            room_types: Vec::new(),
            neighbourhood_groups: Vec::new(),
            neighbourhoods: Vec::new(),
            max_price: Some(DEFAULT_MAX_PRICE),
            minimum_nights: Span::new(1, 7),
            availability: Span::new(360, 365),
            last_review: DateWindow::default(),
            exclude_unreviewed: false,
            review_window: DateWindow::default(),
        }
    }
}

/// Choices offered by the settings panel, read once from the loaded data.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct FilterOptions {
    pub room_types: Vec<String>,
    pub neighbourhood_groups: Vec<String>,
    pub max_minimum_nights: i64,
    pub first_review: Option<NaiveDate>,
    pub last_review: Option<NaiveDate>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct NeighbourhoodRequest {
    #[serde(default)]
    pub groups: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct BarParams {
    #[serde(default)]
    pub variable: CategoryVar,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct HistogramParams {
    #[serde(default)]
    pub variable: QuantityVar,
}
