// src/figures.rs
/// Plotly figure specifications. The server builds these and the browser hands
/// them to `Plotly.react` unchanged.
use crate::models::listing::ListingView;
use crate::models::query::{CategoryVar, QuantityVar};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const MAP_HEIGHT: u32 = 700;
pub const MAP_ZOOM: u32 = 8;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

impl Figure {
    /// Number of points drawn across all traces that carry latitude values.
    pub fn map_point_count(&self) -> usize {
        self.data
            .iter()
            .filter_map(|trace| trace.get("lat").and_then(Value::as_array))
            .map(Vec::len)
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationPosition {
    BottomLeft,
    Left,
    TopLeft,
}

impl AnnotationPosition {
    // (y in paper coordinates, yanchor)
    fn anchor(self) -> (f64, &'static str) {
        match self {
            AnnotationPosition::BottomLeft => (0.0, "bottom"),
            AnnotationPosition::Left => (0.5, "middle"),
            AnnotationPosition::TopLeft => (1.0, "top"),
        }
    }
}

/// A dated event marked on the review trend chart.
#[derive(Debug, Clone, Copy)]
pub struct Milestone {
    pub date: &'static str,
    pub label: &'static str,
    pub position: AnnotationPosition,
}

pub const MILESTONES: [Milestone; 3] = [
    Milestone {
        date: "2020-03-27",
        label: "27 Mar 2020, Covid-19 movement control law",
        position: AnnotationPosition::BottomLeft,
    },
    Milestone {
        date: "2021-09-08",
        label: "8 Sep 2021, Launch of Vaccinated Travel Lanes (VTL)",
        position: AnnotationPosition::Left,
    },
    Milestone {
        date: "2022-03-24",
        label: "24 Mar 2022, Relaxations for travel & social restrictions",
        position: AnnotationPosition::TopLeft,
    },
];

/// Horizontal bar chart of listings per category, smallest count first.
pub fn bar_chart(var: CategoryVar, counts: &[(String, i64)]) -> Figure {
    let labels: Vec<&str> = counts.iter().map(|(label, _)| label.as_str()).collect();
    let values: Vec<i64> = counts.iter().map(|(_, count)| *count).collect();

    Figure {
        data: vec![json!({
            "type": "bar",
            "orientation": "h",
            "x": values,
            "y": labels,
            "hovertemplate": format!("Number of listings=%{{x}}<br>{}=%{{y}}<extra></extra>", var.column()),
        })],
        layout: json!({
            "xaxis": { "title": { "text": "Number of listings" } },
            "yaxis": { "title": { "text": var.column() } },
            "margin": { "t": 30 },
        }),
    }
}

/// Histogram of a numeric column; Plotly picks the bins.
pub fn histogram(var: QuantityVar, values: &[f64]) -> Figure {
    Figure {
        data: vec![json!({
            "type": "histogram",
            "x": values,
        })],
        layout: json!({
            "xaxis": { "title": { "text": var.column() } },
            "yaxis": { "title": { "text": "count" } },
            "bargap": 0.0,
            "margin": { "t": 30 },
        }),
    }
}

/// Reviews per day over the whole dataset with the milestone markers.
pub fn trend_chart(series: &[(NaiveDate, i64)]) -> Figure {
    let dates: Vec<String> = series
        .iter()
        .map(|(date, _)| date.format("%Y-%m-%d").to_string())
        .collect();
    let counts: Vec<i64> = series.iter().map(|(_, count)| *count).collect();

    let shapes: Vec<Value> = MILESTONES
        .iter()
        .map(|milestone| {
            json!({
                "type": "line",
                "xref": "x",
                "yref": "paper",
                "x0": milestone.date,
                "x1": milestone.date,
                "y0": 0,
                "y1": 1,
                "line": { "dash": "dash" },
            })
        })
        .collect();
    let annotations: Vec<Value> = MILESTONES
        .iter()
        .map(|milestone| {
            let (y, yanchor) = milestone.position.anchor();
            json!({
                "text": milestone.label,
                "x": milestone.date,
                "xref": "x",
                "y": y,
                "yref": "paper",
                "xanchor": "right",
                "yanchor": yanchor,
                "showarrow": false,
                "font": { "size": 10 },
            })
        })
        .collect();

    Figure {
        data: vec![json!({
            "type": "scatter",
            "mode": "lines",
            "x": dates,
            "y": counts,
            "hovertemplate": "date=%{x}<br>num_review=%{y}<extra></extra>",
        })],
        layout: json!({
            "xaxis": { "title": { "text": "date" } },
            "yaxis": { "title": { "text": "num_review" } },
            "shapes": shapes,
            "annotations": annotations,
        }),
    }
}

const HOVER_FIELDS: [&str; 7] = [
    "name",
    "price",
    "minimum_nights",
    "availability_365",
    "room_type",
    "last_review_update",
    "num_review",
];

/// Scatter map of the filtered listings, one trace per value of `color` in
/// order of first appearance.
pub fn listing_map(color: CategoryVar, rows: &[ListingView]) -> Figure {
    let mut groups: Vec<(String, Vec<&ListingView>)> = Vec::new();
    for row in rows {
        let key = row.category(color);
        match groups.iter_mut().find(|(label, _)| label == key) {
            Some((_, members)) => members.push(row),
            None => groups.push((key.to_string(), vec![row])),
        }
    }

    let hover_lines: Vec<String> = HOVER_FIELDS
        .iter()
        .enumerate()
        .map(|(i, field)| format!("{}=%{{customdata[{}]}}", field, i))
        .collect();

    let data = groups
        .into_iter()
        .map(|(label, members)| {
            let hovertemplate = format!(
                "<b>%{{hovertext}}</b><br><br>{}={}<br>latitude=%{{lat}}<br>longitude=%{{lon}}<br>{}<extra></extra>",
                color.column(),
                label,
                hover_lines.join("<br>")
            );
            json!({
                "type": "scattermapbox",
                "mode": "markers",
                "name": label,
                "legendgroup": label,
                "showlegend": true,
                "lat": members.iter().map(|row| row.latitude).collect::<Vec<_>>(),
                "lon": members.iter().map(|row| row.longitude).collect::<Vec<_>>(),
                "hovertext": members.iter().map(|row| row.id).collect::<Vec<_>>(),
                "customdata": members.iter().map(|row| json!([
                    row.name,
                    row.price,
                    row.minimum_nights,
                    row.availability_365,
                    row.room_type,
                    row.last_review_display(),
                    row.num_review,
                ])).collect::<Vec<_>>(),
                "hovertemplate": hovertemplate,
            })
        })
        .collect();

    let mut mapbox = json!({ "style": "open-street-map", "zoom": MAP_ZOOM });
    if !rows.is_empty() {
        let n = rows.len() as f64;
        let lat = rows.iter().map(|row| row.latitude).sum::<f64>() / n;
        let lon = rows.iter().map(|row| row.longitude).sum::<f64>() / n;
        mapbox["center"] = json!({ "lat": lat, "lon": lon });
    }

    Figure {
        data,
        layout: json!({
            "mapbox": mapbox,
            "height": MAP_HEIGHT,
            "legend": { "title": { "text": color.column() } },
            "margin": { "t": 60 },
        }),
    }
}
