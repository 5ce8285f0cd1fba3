#![cfg(feature = "ssr")]

mod common;

use airbnb_dashboard::models::listing::ListingView;
use airbnb_dashboard::models::query::{CategoryVar, DateWindow, MapQuery, Span};
use airbnb_dashboard::table::COLUMNS;
use common::{date, fixture_dataset, fixture_db};
use leptos::logging::log;

fn ids(rows: &[ListingView]) -> Vec<i64> {
    rows.iter().map(|row| row.id).collect()
}

fn sample_queries() -> Vec<MapQuery> {
    vec![
        MapQuery::default(),
        MapQuery {
            max_price: None,
            color: CategoryVar::Neighbourhood,
            ..MapQuery::default()
        },
        MapQuery {
            room_types: vec!["Private room".into()],
            minimum_nights: Span::new(1, 365),
            availability: Span::new(0, 365),
            color: CategoryVar::NeighbourhoodGroup,
            ..MapQuery::default()
        },
        MapQuery {
            neighbourhood_groups: vec!["North Region".into()],
            ..MapQuery::default()
        },
        MapQuery {
            max_price: Some(0.0),
            last_review: DateWindow::new(date("2022-01-01"), date("2022-12-31")),
            exclude_unreviewed: true,
            review_window: DateWindow::new(date("2022-09-01"), date("2022-09-01")),
            ..MapQuery::default()
        },
    ]
}

#[tokio::test]
async fn outputs_share_one_filtered_set() {
    let db = fixture_db().await;
    for query in sample_queries() {
        let view = db.map_view(&query).await.unwrap();
        log!("[TEST] {:?} -> {} listings", query.color, view.count);
        assert_eq!(view.figure.map_point_count(), view.count);
        assert_eq!(view.table.len(), view.count);
        assert_eq!(view.table.tooltips.len(), view.count);
    }
}

#[tokio::test]
async fn identical_inputs_give_identical_outputs() {
    let db = fixture_db().await;
    for query in sample_queries() {
        let first = db.map_view(&query).await.unwrap();
        let second = db.map_view(&query).await.unwrap();
        assert_eq!(first, second);
    }
}

#[tokio::test]
async fn full_domain_intervals_pass_every_listing() {
    let db = fixture_db().await;
    let options = db.filter_options().await.unwrap();
    let query = MapQuery {
        max_price: None,
        minimum_nights: Span::new(1, options.max_minimum_nights),
        availability: Span::new(0, 365),
        ..MapQuery::default()
    };
    let rows = db.filter_listings(&query).await.unwrap();
    assert_eq!(rows.len(), fixture_dataset().listings.len());
}

#[tokio::test]
async fn default_intervals_select_matching_listings() {
    let db = fixture_db().await;
    let query = MapQuery {
        max_price: None,
        ..MapQuery::default()
    };
    let expected: Vec<i64> = fixture_dataset()
        .listings
        .iter()
        .filter(|l| (1..=7).contains(&l.minimum_nights) && (360..=365).contains(&l.availability_365))
        .map(|l| l.id)
        .collect();

    let rows = db.filter_listings(&query).await.unwrap();
    assert_eq!(ids(&rows), expected);
    assert_eq!(ids(&rows), vec![101, 102, 103, 104, 107, 108]);
}

#[tokio::test]
async fn group_filter_narrows_options_and_results() {
    let db = fixture_db().await;
    let group = "East Region".to_string();

    let expected: Vec<String> = fixture_dataset()
        .neighbourhoods
        .into_iter()
        .filter(|n| n.neighbourhood_group == group)
        .map(|n| n.neighbourhood)
        .collect();
    let options = db.neighbourhood_options(&[group.clone()]).await.unwrap();
    assert_eq!(options, expected);

    let query = MapQuery {
        neighbourhood_groups: vec![group.clone()],
        minimum_nights: Span::new(1, 365),
        availability: Span::new(0, 365),
        max_price: None,
        ..MapQuery::default()
    };
    let rows = db.filter_listings(&query).await.unwrap();
    assert!(!rows.is_empty());
    assert!(rows
        .iter()
        .all(|row| row.neighbourhood_group.as_deref() == Some(group.as_str())));
}

#[tokio::test]
async fn unreviewed_listing_survives_review_date_filter() {
    let db = fixture_db().await;
    let query = MapQuery {
        last_review: DateWindow::new(date("2022-01-01"), date("2022-12-31")),
        ..MapQuery::default()
    };

    let view = db.map_view(&query).await.unwrap();
    let rows = db.filter_listings(&query).await.unwrap();
    let position = rows.iter().position(|row| row.id == 107).expect("107 kept");
    assert_eq!(rows[position].last_review_display(), "N/A");
    assert_eq!(rows[position].num_review, 0);
    let column = |name: &str| COLUMNS.iter().position(|c| *c == name).unwrap();
    assert_eq!(view.table.tooltips[position][column("last_review_update")], "N/A");
    assert_eq!(view.table.tooltips[position][column("num_review")], "0");
    assert_eq!(view.table.tooltips[position][column("host_name")], "Lim");

    let excluded = MapQuery {
        exclude_unreviewed: true,
        ..query
    };
    let rows = db.filter_listings(&excluded).await.unwrap();
    assert!(rows.iter().all(|row| row.id != 107));
}

#[tokio::test]
async fn review_window_changes_counts_not_membership() {
    let db = fixture_db().await;
    let base = MapQuery::default();
    let windowed = MapQuery {
        review_window: DateWindow::new(date("2022-01-01"), date("2022-12-31")),
        ..base.clone()
    };

    let before = db.filter_listings(&base).await.unwrap();
    let after = db.filter_listings(&windowed).await.unwrap();
    assert_eq!(ids(&before), ids(&after));

    let count_of = |rows: &[ListingView], id: i64| rows.iter().find(|r| r.id == id).unwrap().num_review;
    assert_eq!(count_of(&before, 101), 3);
    assert_eq!(count_of(&after, 101), 1);
    assert_eq!(count_of(&before, 104), 1);
    assert_eq!(count_of(&after, 104), 0);
    assert_eq!(count_of(&after, 103), 2);
}

#[tokio::test]
async fn unmatched_selection_is_an_empty_result() {
    let db = fixture_db().await;
    let query = MapQuery {
        neighbourhoods: vec!["Sentosa".into()],
        ..MapQuery::default()
    };
    let view = db.map_view(&query).await.unwrap();
    assert_eq!(view.count, 0);
    assert!(view.table.is_empty());
    assert!(view.figure.data.is_empty());
}

#[tokio::test]
async fn price_bound_is_inclusive() {
    let db = fixture_db().await;
    let query = MapQuery {
        max_price: Some(95.0),
        ..MapQuery::default()
    };
    let rows = db.filter_listings(&query).await.unwrap();
    assert_eq!(ids(&rows), vec![101, 103, 104, 107, 108]);

    let free_only = MapQuery {
        max_price: Some(0.0),
        ..MapQuery::default()
    };
    let rows = db.filter_listings(&free_only).await.unwrap();
    assert_eq!(ids(&rows), vec![108]);
}

#[tokio::test]
async fn unreviewed_exclusion_applies_without_a_date_window() {
    let db = fixture_db().await;
    let query = MapQuery {
        exclude_unreviewed: true,
        ..MapQuery::default()
    };
    let rows = db.filter_listings(&query).await.unwrap();
    assert_eq!(ids(&rows), vec![101, 103, 104, 108]);
}

#[tokio::test]
async fn single_day_windows_include_that_day() {
    let db = fixture_db().await;
    let day = date("2022-06-01");
    let query = MapQuery {
        max_price: None,
        minimum_nights: Span::new(1, 365),
        availability: Span::new(0, 365),
        last_review: DateWindow::new(day, day),
        review_window: DateWindow::new(day, day),
        ..MapQuery::default()
    };
    let rows = db.filter_listings(&query).await.unwrap();
    let counts: Vec<(i64, i64)> = rows.iter().map(|row| (row.id, row.num_review)).collect();
    assert_eq!(counts, vec![(101, 1), (106, 1), (107, 0)]);
}
