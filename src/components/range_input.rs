use crate::models::query::Span;
use leptos::*;

/// Closed integer interval edited through two number fields. Text that does
/// not parse leaves the bound unchanged.
#[component]
pub fn RangeInput(
    #[prop(into)] id: String,
    min: i64,
    #[prop(into)] max: Signal<i64>,
    value: RwSignal<Span>,
) -> impl IntoView {
    let set_lo = move |e: web_sys::Event| {
        if let Ok(lo) = event_target_value(&e).trim().parse::<i64>() {
            value.update(|span| span.lo = lo);
        }
    };
    let set_hi = move |e: web_sys::Event| {
        if let Ok(hi) = event_target_value(&e).trim().parse::<i64>() {
            value.update(|span| span.hi = hi);
        }
    };

    view! {
        <div class="input-group input-group-sm mb-2" id=id>
            <input
                type="number"
                class="form-control"
                min=min.to_string()
                max=move || max.get().to_string()
                prop:value=move || value.with(|span| span.lo.to_string())
                on:change=set_lo
            />
            <span class="input-group-text">{ "to" }</span>
            <input
                type="number"
                class="form-control"
                min=min.to_string()
                max=move || max.get().to_string()
                prop:value=move || value.with(|span| span.hi.to_string())
                on:change=set_hi
            />
        </div>
    }
}
