use crate::client::fetch_trend_chart;
use crate::components::chart::{FetchError, PlotlyChart};
use leptos::*;

#[component]
pub fn TrendSection() -> impl IntoView {
    // the server computes this chart once; fetch it once
    let trend = create_local_resource(|| (), |_| fetch_trend_chart());

    view! {
        <div class="row mb-5 mx-2">
            <div>
                <h3>{ "Listings Rental Trend, 2018-2022" }</h3>
                <p>
                    { "Although the data provided does not include listings rental transactions, \
                       it is possible to infer listings total rent activities based on \
                       the total number of listings' user reviews." }
                </p>
            </div>
            <PlotlyChart id="line-chart" figure=Signal::derive(move || trend.get().and_then(Result::ok)) />
            <FetchError message=Signal::derive(move || trend.get().and_then(Result::err)) />
        </div>
    }
}
