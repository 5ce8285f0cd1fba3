/// Bar chart and histogram over the whole listing table, each driven by its
/// own variable dropdown.
use crate::client::{fetch_bar_chart, fetch_histogram};
use crate::components::chart::{FetchError, PlotlyChart};
use crate::models::query::{CategoryVar, QuantityVar};
use leptos::*;

#[component]
pub fn DistributionSection() -> impl IntoView {
    let (bar_var, set_bar_var) = create_signal(CategoryVar::RoomType);
    let (hist_var, set_hist_var) = create_signal(QuantityVar::Price);

    let bar = create_local_resource(move || bar_var.get(), fetch_bar_chart);
    let hist = create_local_resource(move || hist_var.get(), fetch_histogram);

    view! {
        <div class="row justify-content-around mb-5 mx-2">
            <div>
                <h3>{ "Listings Distribution Based on Qualitative/Quantitative Variable" }</h3>
                <p>
                    { "Following below are bar chart (left) and histogram chart (right), \
                       provided to show listings distribution based on qualitative and quantitative variable." }
                </p>
            </div>
            <div class="col-6">
                <label for="input-bar">{ "Qualitative variable" }</label>
                <select
                    id="input-bar"
                    class="form-select"
                    on:change=move |e| {
                        if let Some(var) = CategoryVar::from_column(&event_target_value(&e)) {
                            set_bar_var.set(var);
                        }
                    }
                >
                    {CategoryVar::ALL.into_iter().map(|var| view! {
                        <option value=var.column() selected=move || bar_var.get() == var>
                            { var.column() }
                        </option>
                    }).collect_view()}
                </select>
                <PlotlyChart id="bar-chart" figure=Signal::derive(move || bar.get().and_then(Result::ok)) />
                <FetchError message=Signal::derive(move || bar.get().and_then(Result::err)) />
            </div>
            <div class="col-6">
                <label for="input-hist">{ "Quantitative variable" }</label>
                <select
                    id="input-hist"
                    class="form-select"
                    on:change=move |e| {
                        if let Some(var) = QuantityVar::from_column(&event_target_value(&e)) {
                            set_hist_var.set(var);
                        }
                    }
                >
                    {QuantityVar::ALL.into_iter().map(|var| view! {
                        <option value=var.column() selected=move || hist_var.get() == var>
                            { var.column() }
                        </option>
                    }).collect_view()}
                </select>
                <PlotlyChart id="hist-chart" figure=Signal::derive(move || hist.get().and_then(Result::ok)) />
                <FetchError message=Signal::derive(move || hist.get().and_then(Result::err)) />
            </div>
        </div>
    }
}
