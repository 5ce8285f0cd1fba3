#[cfg(feature = "ssr")]
use actix_web::{web, HttpResponse};
#[cfg(feature = "ssr")]
use crate::db::Database;
#[cfg(feature = "ssr")]
use crate::figures::{self, Figure};
#[cfg(feature = "ssr")]
use crate::models::query::{BarParams, HistogramParams, MapQuery, NeighbourhoodRequest};
#[cfg(feature = "ssr")]
use std::sync::Arc;
#[cfg(feature = "ssr")]
use tokio::sync::Mutex;
#[cfg(feature = "ssr")]
use leptos::logging::log;

/// The trend chart never changes after startup, so it is built once and
/// served from shared state.
#[cfg(feature = "ssr")]
pub struct TrendFigure(pub Figure);

#[cfg(feature = "ssr")]
pub async fn trend_figure(db: &Database) -> Result<TrendFigure, rusqlite::Error> {
    let series = db.reviews_per_date().await?;
    log!("[API] Trend chart prepared over {} review dates", series.len());
    Ok(TrendFigure(figures::trend_chart(&series)))
}

#[cfg(feature = "ssr")]
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/options", web::get().to(get_options)) // GET /api/options
            .route("/neighbourhoods", web::post().to(get_neighbourhoods)) // POST /api/neighbourhoods
            .route("/map", web::post().to(get_map_view)) // POST /api/map
            .route("/charts/bar", web::get().to(get_bar_chart)) // GET /api/charts/bar?variable=..
            .route("/charts/histogram", web::get().to(get_histogram)) // GET /api/charts/histogram?variable=..
            .route("/charts/trend", web::get().to(get_trend_chart)), // GET /api/charts/trend
    );
}

#[cfg(feature = "ssr")]
pub async fn get_options(db: web::Data<Arc<Mutex<Database>>>) -> HttpResponse {
    let db = db.lock().await;
    match db.filter_options().await {
        Ok(options) => HttpResponse::Ok().json(options),
        Err(err) => {
            leptos::logging::error!("Failed to read filter options: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to read filter options")
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn get_neighbourhoods(
    db: web::Data<Arc<Mutex<Database>>>,
    request: web::Json<NeighbourhoodRequest>,
) -> HttpResponse {
    log!("[API] Neighbourhood options for groups: {:?}", request.groups);
    let db = db.lock().await;
    match db.neighbourhood_options(&request.groups).await {
        Ok(names) => HttpResponse::Ok().json(names),
        Err(err) => {
            leptos::logging::error!("Failed to read neighbourhood options: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to read neighbourhood options")
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn get_map_view(
    db: web::Data<Arc<Mutex<Database>>>,
    query: web::Json<MapQuery>,
) -> HttpResponse {
    let query = query.into_inner();
    log!("[API] Map query: {:?}", query);

    let db = db.lock().await;
    match db.map_view(&query).await {
        Ok(view) => {
            log!("[API] Returning {} listings for the map", view.count);
            HttpResponse::Ok().json(view)
        }
        Err(err) => {
            leptos::logging::error!("Failed to filter listings: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to filter listings")
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn get_bar_chart(
    db: web::Data<Arc<Mutex<Database>>>,
    params: web::Query<BarParams>,
) -> HttpResponse {
    let db = db.lock().await;
    match db.category_counts(params.variable).await {
        Ok(counts) => HttpResponse::Ok().json(figures::bar_chart(params.variable, &counts)),
        Err(err) => {
            leptos::logging::error!("Failed to count listings per {}: {:?}", params.variable.column(), err);
            HttpResponse::InternalServerError().body("Failed to build bar chart")
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn get_histogram(
    db: web::Data<Arc<Mutex<Database>>>,
    params: web::Query<HistogramParams>,
) -> HttpResponse {
    let db = db.lock().await;
    match db.quantity_values(params.variable).await {
        Ok(values) => HttpResponse::Ok().json(figures::histogram(params.variable, &values)),
        Err(err) => {
            leptos::logging::error!("Failed to read {}: {:?}", params.variable.column(), err);
            HttpResponse::InternalServerError().body("Failed to build histogram")
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn get_trend_chart(trend: web::Data<TrendFigure>) -> HttpResponse {
    HttpResponse::Ok().json(&trend.0)
}
