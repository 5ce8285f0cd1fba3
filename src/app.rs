/// Main application entry point for the dashboard.
/// Lays out the distribution, map and trend sections on a single page.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use crate::components::{distribution::DistributionSection, map_section::MapSection, trend::TrendSection};

const BOOTSTRAP_CSS: &str = "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";
const FONT_AWESOME_CSS: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";
const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/airbnb-dashboard.css" />
        <Link rel="stylesheet" href=BOOTSTRAP_CSS />
        <Link rel="stylesheet" href=FONT_AWESOME_CSS />
        <Script src=PLOTLY_JS />
        <Title text="Singapore Airbnb Data" />
        <Router>
            <main>
                <Routes>
                    <Route path="" view=Dashboard />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="container-fluid">
            <div class="row align-items-start mt-4 mb-5 mx-2">
                <h1>
                    { "Singapore Airbnb Data " }
                    <i class="fas fa-hotel"></i>{ " " }
                    <i class="fas fa-bed"></i>{ " " }
                    <i class="fas fa-suitcase-rolling"></i>
                </h1>
                <h2>{ "Dashboard for Exploratory Data Analysis" }</h2>
            </div>
            <div class="row mb-5 mx-2">
                <p>
                    { "We are part of a data analytics team from a data management company. \
                       Our client is Singaporean property owners who would like to rent out their properties \
                       through Airbnb marketplace. Given some historical data of Singapore Airbnb listings and reviews, \
                       along with data of Singapore neighbourhoods name, we are asked to analyze and give insights \
                       in order to help our clients make data-driven and (hopefully) profitable decision." }
                </p>
            </div>
            <DistributionSection />
            <MapSection />
            <TrendSection />
        </div>
    }
}
