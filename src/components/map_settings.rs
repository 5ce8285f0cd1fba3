use crate::components::checklist::Checklist;
use crate::components::date_range::DateRangeInput;
use crate::components::range_input::RangeInput;
use crate::models::query::{CategoryVar, DateWindow, FilterOptions, MapQuery, Span};
use leptos::*;

/// One signal per map input. Reading [`MapFilters::query`] inside a reactive
/// scope subscribes to all of them.
#[derive(Clone, Copy)]
pub struct MapFilters {
    pub color: RwSignal<CategoryVar>,
    pub room_types: RwSignal<Vec<String>>,
    pub neighbourhood_groups: RwSignal<Vec<String>>,
    pub neighbourhoods: RwSignal<Vec<String>>,
    pub max_price: RwSignal<Option<f64>>,
    pub minimum_nights: RwSignal<Span>,
    pub availability: RwSignal<Span>,
    pub last_review: RwSignal<DateWindow>,
    pub exclude_unreviewed: RwSignal<bool>,
    pub review_window: RwSignal<DateWindow>,
}

impl MapFilters {
    pub fn new(initial: MapQuery) -> Self {
        MapFilters {
            color: create_rw_signal(initial.color),
            room_types: create_rw_signal(initial.room_types),
            neighbourhood_groups: create_rw_signal(initial.neighbourhood_groups),
            neighbourhoods: create_rw_signal(initial.neighbourhoods),
            max_price: create_rw_signal(initial.max_price),
            minimum_nights: create_rw_signal(initial.minimum_nights),
            availability: create_rw_signal(initial.availability),
            last_review: create_rw_signal(initial.last_review),
            exclude_unreviewed: create_rw_signal(initial.exclude_unreviewed),
            review_window: create_rw_signal(initial.review_window),
        }
    }

    pub fn query(&self) -> MapQuery {
        MapQuery {
            color: self.color.get(),
            room_types: self.room_types.get(),
            neighbourhood_groups: self.neighbourhood_groups.get(),
            neighbourhoods: self.neighbourhoods.get(),
            max_price: self.max_price.get(),
            minimum_nights: self.minimum_nights.get(),
            availability: self.availability.get(),
            last_review: self.last_review.get(),
            exclude_unreviewed: self.exclude_unreviewed.get(),
            review_window: self.review_window.get(),
        }
    }
}

/// Maximum price typed by the user. Cleared, negative or unreadable input
/// turns the price filter off.
pub fn parse_price(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price >= 0.0)
}

#[component]
pub fn MapSettings(
    filters: MapFilters,
    #[prop(into)] options: Signal<FilterOptions>,
    #[prop(into)] neighbourhood_options: Signal<Vec<String>>,
) -> impl IntoView {
    let review_bounds = Signal::derive(move || {
        options.with(|options| (options.first_review, options.last_review))
    });

    view! {
        <div>
            <div class="border-bottom p-3 bg-light text-dark fs-5">
                <label>{ "Map Settings" }</label>
            </div>
            <div title="scatter-point coloring" class="mt-1 mb-1 p-2 border border-info rounded-2">
                <label>{ "Color based on:" }</label>
                {CategoryVar::ALL.into_iter().map(|var| view! {
                    <div class="form-check">
                        <input
                            class="form-check-input"
                            type="radio"
                            name="input-smpbox-color"
                            id=format!("color-{}", var.column())
                            prop:checked=move || filters.color.get() == var
                            on:change=move |_| filters.color.set(var)
                        />
                        <label class="form-check-label" for=format!("color-{}", var.column())>
                            { var.label() }
                        </label>
                    </div>
                }).collect_view()}
            </div>
            <div title="map filters" class="mt-1 mb-1 p-2 border border-dark rounded-2">
                <label>{ "Room Type filter" }</label>
                <Checklist
                    name="input-qual-room"
                    options=Signal::derive(move || options.with(|o| o.room_types.clone()))
                    selected=filters.room_types
                />

                <label>{ "Neighbourhood Group filter" }</label>
                <Checklist
                    name="input-qual-ng"
                    options=Signal::derive(move || options.with(|o| o.neighbourhood_groups.clone()))
                    selected=filters.neighbourhood_groups
                />

                <label>{ "Neighbourhood filter" }</label>
                <div style="max-height: 12rem; overflow-y: auto">
                    <Checklist
                        name="input-qual-n"
                        options=neighbourhood_options
                        selected=filters.neighbourhoods
                    />
                </div>

                <label for="input-quan-price">{ "Maximum Price: " }</label>
                <input
                    id="input-quan-price"
                    type="number"
                    min="0"
                    class="form-control form-control-sm mb-2"
                    prop:value=move || filters.max_price.get().map(|p| p.to_string()).unwrap_or_default()
                    on:change=move |e| filters.max_price.set(parse_price(&event_target_value(&e)))
                />

                <label>{ "Minimum night(s) to stay" }</label>
                <RangeInput
                    id="input-quan-mn"
                    min=1
                    max=Signal::derive(move || options.with(|o| o.max_minimum_nights))
                    value=filters.minimum_nights
                />

                <label>{ "Availability 365 days" }</label>
                <RangeInput
                    id="input-quan-av"
                    min=0
                    max=Signal::derive(|| 365_i64)
                    value=filters.availability
                />

                <label>{ "Date range for Last Reviews Update filter" }</label>
                <DateRangeInput id="input-quan-lru" bounds=review_bounds value=filters.last_review />
                <div class="form-check mb-2">
                    <input
                        class="form-check-input"
                        type="checkbox"
                        id="input-quan-lru_none"
                        prop:checked=move || filters.exclude_unreviewed.get()
                        on:change=move |e| filters.exclude_unreviewed.set(event_target_checked(&e))
                    />
                    <label class="form-check-label" for="input-quan-lru_none">
                        { "Filter out listings with no reviews given" }
                    </label>
                </div>

                <label>{ "Date range for Num. Reviews calculation" }</label>
                <DateRangeInput id="input-quan-nr" bounds=review_bounds value=filters.review_window />
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_input_parsing() {
        assert_eq!(parse_price("150"), Some(150.0));
        assert_eq!(parse_price(" 0 "), Some(0.0));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("-5"), None);
        assert_eq!(parse_price("cheap"), None);
    }

    #[test]
    fn filters_round_trip_the_initial_query() {
        let runtime = create_runtime();
        let initial = MapQuery {
            room_types: vec!["Private room".into()],
            exclude_unreviewed: true,
            ..MapQuery::default()
        };
        let filters = MapFilters::new(initial.clone());
        assert_eq!(filters.query(), initial);

        filters.minimum_nights.set(Span::new(1, 365));
        assert_eq!(filters.query().minimum_nights, Span::new(1, 365));
        runtime.dispose();
    }
}
