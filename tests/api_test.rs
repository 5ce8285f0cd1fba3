#![cfg(feature = "ssr")]

mod common;

use actix_web::{test, web, App};
use airbnb_dashboard::api;
use airbnb_dashboard::figures::Figure;
use airbnb_dashboard::models::map_view::MapView;
use airbnb_dashboard::models::query::FilterOptions;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;

macro_rules! dashboard_app {
    () => {{
        let db = common::fixture_db().await;
        let trend = api::trend_figure(&db).await.unwrap();
        test::init_service(
            App::new()
                .app_data(web::Data::new(Arc::new(Mutex::new(db))))
                .app_data(web::Data::new(trend))
                .configure(api::configure),
        )
        .await
    }};
}

#[actix_web::test]
async fn options_describe_the_loaded_tables() {
    let app = dashboard_app!();
    let req = test::TestRequest::get().uri("/api/options").to_request();
    let options: FilterOptions = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        options.room_types,
        vec!["Private room", "Entire home/apt", "Shared room"]
    );
    assert_eq!(
        options.neighbourhood_groups,
        vec!["Central Region", "East Region", "North Region"]
    );
    assert_eq!(options.max_minimum_nights, 90);
    assert_eq!(options.first_review, Some(common::date("2018-12-24")));
    assert_eq!(options.last_review, Some(common::date("2022-09-01")));
}

#[actix_web::test]
async fn neighbourhood_options_follow_selected_groups() {
    let app = dashboard_app!();

    let req = test::TestRequest::post()
        .uri("/api/neighbourhoods")
        .set_json(json!({ "groups": ["East Region"] }))
        .to_request();
    let names: Vec<String> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(names, vec!["Bedok", "Tampines"]);

    let req = test::TestRequest::post()
        .uri("/api/neighbourhoods")
        .set_json(json!({ "groups": [] }))
        .to_request();
    let names: Vec<String> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(names.len(), 5);
}

#[actix_web::test]
async fn empty_map_query_uses_startup_defaults() {
    let app = dashboard_app!();
    let req = test::TestRequest::post()
        .uri("/api/map")
        .set_json(json!({}))
        .to_request();
    let view: MapView = test::call_and_read_body_json(&app, req).await;

    assert_eq!(view.count, 5);
    assert_eq!(view.figure.map_point_count(), 5);
    let ids: Vec<String> = view.table.tooltips.iter().map(|row| row[0].clone()).collect();
    assert_eq!(ids, vec!["101", "103", "104", "107", "108"]);
}

#[actix_web::test]
async fn cleared_price_input_disables_the_price_filter() {
    let app = dashboard_app!();
    let req = test::TestRequest::post()
        .uri("/api/map")
        .set_json(json!({ "max_price": null, "color": "neighbourhood_group" }))
        .to_request();
    let view: MapView = test::call_and_read_body_json(&app, req).await;

    assert_eq!(view.count, 6);
    let legend: Vec<&str> = view
        .figure
        .data
        .iter()
        .filter_map(|trace| trace["name"].as_str())
        .collect();
    assert_eq!(legend, vec!["Central Region", "East Region"]);
}

#[actix_web::test]
async fn bar_chart_lists_smallest_category_first() {
    let app = dashboard_app!();
    let req = test::TestRequest::get()
        .uri("/api/charts/bar?variable=room_type")
        .to_request();
    let figure: Figure = test::call_and_read_body_json(&app, req).await;

    assert_eq!(figure.data.len(), 1);
    assert_eq!(
        figure.data[0]["y"],
        json!(["Entire home/apt", "Shared room", "Private room"])
    );
    assert_eq!(figure.data[0]["x"], json!([2, 2, 4]));
}

#[actix_web::test]
async fn histogram_covers_every_listing() {
    let app = dashboard_app!();
    let req = test::TestRequest::get()
        .uri("/api/charts/histogram?variable=availability_365")
        .to_request();
    let figure: Figure = test::call_and_read_body_json(&app, req).await;

    let values = figure.data[0]["x"].as_array().unwrap();
    assert_eq!(values.len(), 8);
    assert_eq!(figure.layout["xaxis"]["title"]["text"], "availability_365");
}

#[actix_web::test]
async fn trend_chart_counts_reviews_per_day() {
    let app = dashboard_app!();
    let req = test::TestRequest::get().uri("/api/charts/trend").to_request();
    let figure: Figure = test::call_and_read_body_json(&app, req).await;

    let counts: Vec<i64> = figure.data[0]["y"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(Value::as_i64)
        .collect();
    assert_eq!(counts.len(), 9);
    assert_eq!(counts.iter().sum::<i64>(), 10);
    assert_eq!(figure.layout["shapes"].as_array().map(Vec::len), Some(3));
}

#[actix_web::test]
async fn unknown_chart_variable_is_rejected() {
    let app = dashboard_app!();
    let req = test::TestRequest::get()
        .uri("/api/charts/bar?variable=host_name")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_client_error());
}
