/// Browser-side calls to the dashboard API.
use crate::figures::Figure;
use crate::models::map_view::MapView;
use crate::models::query::{CategoryVar, FilterOptions, MapQuery, NeighbourhoodRequest, QuantityVar};
use gloo_net::http::{Request, Response};
use leptos::logging::log;
use serde::de::DeserializeOwned;

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(format!("{} {}", response.status(), body));
    }
    response.json::<T>().await.map_err(|e| e.to_string())
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url).send().await.map_err(|e| e.to_string())?;
    read_json(response).await
}

async fn post_json<B: serde::Serialize, T: DeserializeOwned>(url: &str, body: &B) -> Result<T, String> {
    let response = Request::post(url)
        .json(body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    read_json(response).await
}

pub async fn fetch_options() -> Result<FilterOptions, String> {
    get_json("/api/options").await
}

pub async fn fetch_neighbourhoods(groups: Vec<String>) -> Result<Vec<String>, String> {
    post_json("/api/neighbourhoods", &NeighbourhoodRequest { groups }).await
}

pub async fn fetch_map_view(query: MapQuery) -> Result<MapView, String> {
    log!("[CLIENT] Requesting map view");
    post_json("/api/map", &query).await
}

pub async fn fetch_bar_chart(variable: CategoryVar) -> Result<Figure, String> {
    get_json(&format!("/api/charts/bar?variable={}", variable.column())).await
}

pub async fn fetch_histogram(variable: QuantityVar) -> Result<Figure, String> {
    get_json(&format!("/api/charts/histogram?variable={}", variable.column())).await
}

pub async fn fetch_trend_chart() -> Result<Figure, String> {
    get_json("/api/charts/trend").await
}
