use crate::client::{fetch_map_view, fetch_neighbourhoods, fetch_options};
use crate::components::chart::{FetchError, PlotlyChart};
use crate::components::checklist::retain_offered;
use crate::components::detail_table::DetailTableView;
use crate::components::map_settings::{MapFilters, MapSettings};
use crate::components::score_card::ScoreCard;
use crate::models::map_view::MapView;
use crate::models::query::MapQuery;
use leptos::*;

/// Part of a finished map-view fetch. Pending and failed fetches give `None`.
fn loaded<T>(result: &Option<Result<MapView, String>>, pick: impl Fn(&MapView) -> T) -> Option<T> {
    result.as_ref().and_then(|r| r.as_ref().ok()).map(pick)
}

fn failed(result: &Option<Result<MapView, String>>) -> Option<String> {
    result.as_ref().and_then(|r| r.as_ref().err()).cloned()
}

/// Settings panel, listing count, scatter map and detail table. The last three
/// are redrawn from a single map-view response per filter change.
#[component]
pub fn MapSection() -> impl IntoView {
    let filters = MapFilters::new(MapQuery::default());

    let options = create_local_resource(|| (), |_| fetch_options());
    let neighbourhoods = create_local_resource(
        move || filters.neighbourhood_groups.get(),
        fetch_neighbourhoods,
    );
    let map_view = create_local_resource(move || filters.query(), fetch_map_view);

    // neighbourhoods that are no longer offered are deselected
    create_effect(move |_| {
        if let Some(Ok(offered)) = neighbourhoods.get() {
            let stale = filters
                .neighbourhoods
                .with_untracked(|selected| selected.iter().any(|name| !offered.contains(name)));
            if stale {
                filters.neighbourhoods.update(|selected| {
                    retain_offered(selected, &offered);
                });
            }
        }
    });

    let options = Signal::derive(move || options.get().and_then(Result::ok).unwrap_or_default());
    let neighbourhood_options =
        Signal::derive(move || neighbourhoods.get().and_then(Result::ok).unwrap_or_default());

    let figure = Signal::derive(move || map_view.with(|r| loaded(r, |view| view.figure.clone())));
    let count = Signal::derive(move || map_view.with(|r| loaded(r, |view| view.count)));
    let table = Signal::derive(move || map_view.with(|r| loaded(r, |view| view.table.clone())));
    let error = Signal::derive(move || map_view.with(failed));

    view! {
        <div class="row mb-5 mx-2">
            <div>
                <h3>{ "Listings Distribution Based on Locations" }</h3>
                <p>
                    { "Following below is scatter-map chart to show each individual listing's location \
                       relative to its latitude-longitude data. User may hover to the data point on the map \
                       to see the listing's id, name, price, room type, number of reviews, etc. \
                       In the Map Settings, user may also choose scatter-point coloring and adjust map filters \
                       to only show listings with fulfilling features. Below the map chart, given the \
                       data table of all listings currently showed on map, and user may sort it based on a column value." }
                </p>
            </div>
            <div class="col-4">
                <MapSettings filters=filters options=options neighbourhood_options=neighbourhood_options />
                <ScoreCard count=count />
            </div>
            <div class="col-8">
                <PlotlyChart id="mpbox-chart" figure=figure />
                <FetchError message=error />
            </div>
            <DetailTableView table=table />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_finished_fetches_feed_the_outputs() {
        let pending: Option<Result<MapView, String>> = None;
        assert_eq!(loaded(&pending, |view| view.count), None);
        assert_eq!(failed(&pending), None);

        let done = Some(Ok(MapView {
            count: 3,
            ..MapView::default()
        }));
        assert_eq!(loaded(&done, |view| view.count), Some(3));
        assert_eq!(failed(&done), None);

        let broken: Option<Result<MapView, String>> = Some(Err("500 Failed to filter listings".into()));
        assert_eq!(loaded(&broken, |view| view.count), None);
        assert_eq!(failed(&broken).as_deref(), Some("500 Failed to filter listings"));
    }
}
