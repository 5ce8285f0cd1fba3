use crate::models::query::DateWindow;
use chrono::NaiveDate;
use leptos::*;

const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
}

/// Clearable start/end date pair bounded by the review dates in the data.
#[component]
pub fn DateRangeInput(
    #[prop(into)] id: String,
    #[prop(into)] bounds: Signal<(Option<NaiveDate>, Option<NaiveDate>)>,
    value: RwSignal<DateWindow>,
) -> impl IntoView {
    let lower = move || format_date(bounds.get().0);
    let upper = move || format_date(bounds.get().1);

    view! {
        <div class="input-group input-group-sm mb-2" id=id>
            <input
                type="date"
                class="form-control"
                min=lower
                max=upper
                prop:value=move || format_date(value.get().start)
                on:change=move |e| {
                    let start = parse_date(&event_target_value(&e));
                    value.update(|window| window.start = start);
                }
            />
            <span class="input-group-text">{ "to" }</span>
            <input
                type="date"
                class="form-control"
                min=lower
                max=upper
                prop:value=move || format_date(value.get().end)
                on:change=move |e| {
                    let end = parse_date(&event_target_value(&e));
                    value.update(|window| window.end = end);
                }
            />
            <button
                type="button"
                class="btn btn-outline-secondary"
                title="Clear dates"
                on:click=move |_| value.set(DateWindow::default())
            >
                { "×" }
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_picker_yields_no_date() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2022-03-24"), NaiveDate::from_ymd_opt(2022, 3, 24));
        assert_eq!(format_date(None), "");
    }
}
