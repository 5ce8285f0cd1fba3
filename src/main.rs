#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    use actix_files::Files;
    use actix_web::*;
    use airbnb_dashboard::api;
    use airbnb_dashboard::app::*;
    use airbnb_dashboard::config::DataConfig;
    use airbnb_dashboard::db::Database;
    use airbnb_dashboard::error::DashboardError;
    use airbnb_dashboard::loader::Dataset;
    use leptos::*;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use std::sync::Arc;
    use tokio::sync::Mutex;

    let startup_error = |e: DashboardError| std::io::Error::new(std::io::ErrorKind::Other, e);

    // Load the three source tables; the dashboard cannot start without them
    let data_config = DataConfig::from_env();
    let dataset = Dataset::load(&data_config).map_err(startup_error)?;

    // Build the in-memory listing store
    let db = Database::new(":memory:")
        .map_err(|e| startup_error(e.into()))?;
    db.create_schema().await.map_err(|e| startup_error(e.into()))?;
    db.load_dataset(&dataset).await.map_err(|e| startup_error(e.into()))?;
    db.debug_dump().await.map_err(|e| startup_error(e.into()))?;
    drop(dataset);

    // The trend chart is the same for every visitor
    let trend = api::trend_figure(&db).await.map_err(|e| startup_error(e.into()))?;
    let trend = web::Data::new(trend);
    let db = Arc::new(Mutex::new(db)); // Wrap the store in an Arc<Mutex<T>> for shared state
    logging::log!("Listing store ready!");

    // Load configuration
    let conf = get_configuration(None)
        .await
        .map_err(|e| startup_error(DashboardError::Config(e.to_string())))?;
    let addr = conf.leptos_options.site_addr;

    // Generate the list of routes in your Leptos App
    let routes = generate_route_list(App);
    logging::log!("listening on http://{}", &addr);

    // Start the Actix Web server
    HttpServer::new(move || {
        let leptos_options = &conf.leptos_options;
        let site_root = &leptos_options.site_root;

        App::new()
            .app_data(web::Data::new(db.clone()))
            .app_data(trend.clone())
            // Register the JSON API BEFORE the Leptos routes
            .configure(api::configure)
            // Serve JS/WASM/CSS from `pkg`
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            // Serve other assets from the `assets` directory
            .service(Files::new("/assets", site_root))
            // Register Leptos routes
            .leptos_routes(leptos_options.to_owned(), routes.to_owned(), App)
            // Pass Leptos options to the app
            .app_data(web::Data::new(leptos_options.to_owned()))
    })
    .bind(&addr)?
    .run()
    .await
}

#[cfg(not(any(feature = "ssr", feature = "csr")))]
pub fn main() {
    // no client-side main function
    // unless we want this to work with e.g., Trunk for pure client-side testing
    // see lib.rs for hydration function instead
    // see optional feature `csr` instead
}

#[cfg(all(not(feature = "ssr"), feature = "csr"))]
pub fn main() {
    // a client-side main function is required for using `trunk serve`
    // prefer using `cargo leptos serve` instead
    // to run: `trunk serve --open --features csr`
    use airbnb_dashboard::app::*;

    console_error_panic_hook::set_once();

    leptos::mount_to_body(App);
}
