use leptos::*;

/// Multi-select rendered as a list of checkboxes. An empty selection means
/// "no filter" to the caller.
#[component]
pub fn Checklist(
    #[prop(into)] name: String,
    #[prop(into)] options: Signal<Vec<String>>,
    selected: RwSignal<Vec<String>>,
) -> impl IntoView {
    // Function to toggle selection of an option
    let toggle_selection = move |value: String| {
        selected.update(|values| {
            if values.contains(&value) {
                values.retain(|v| v != &value);
            } else {
                values.push(value);
            }
        });
    };

    view! {
        <div class="checklist">
            {move || options.get().into_iter().enumerate().map(|(i, option)| {
                let input_id = format!("{}-{}", name, i);
                let value = option.clone();
                let checked_value = option.clone();
                view! {
                    <div class="form-check">
                        <input
                            class="form-check-input"
                            type="checkbox"
                            id=input_id.clone()
                            prop:checked=move || selected.with(|values| values.contains(&checked_value))
                            on:change=move |_| toggle_selection(value.clone())
                        />
                        <label class="form-check-label" for=input_id>{ option }</label>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

/// Keeps only the selected values that are still offered.
pub fn retain_offered(selected: &mut Vec<String>, offered: &[String]) -> bool {
    let before = selected.len();
    selected.retain(|value| offered.contains(value));
    selected.len() != before
}
