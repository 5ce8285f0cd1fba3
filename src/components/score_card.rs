use leptos::*;

#[component]
pub fn ScoreCard(#[prop(into)] count: Signal<Option<usize>>) -> impl IntoView {
    view! {
        <div title="scorecard" class="mt-3 mb-3 border border-success rounded-3">
            <p class="mb-1 fst-italic text-center">{ "Total number of listings displayed on map" }</p>
            <p id="output-card-nlistings" class="mt-0 mb-1 fw-bolder fs-1 text text-center">
                {move || count.get().map(|n| n.to_string()).unwrap_or_else(|| "…".to_string())}
            </p>
        </div>
    }
}
