/// Listings currently shown on the map, sortable by clicking a header and
/// paged five rows at a time. Every cell carries its literal value as a
/// tooltip.
use crate::table::{page_count, page_slice, DetailTable, SortDirection, SortKey};
use leptos::*;

#[component]
pub fn DetailTableView(#[prop(into)] table: Signal<Option<DetailTable>>) -> impl IntoView {
    let (sort, set_sort) = create_signal(None::<SortKey>);
    let (page, set_page) = create_signal(0usize);

    // a new result set starts on its first page
    create_effect(move |_| {
        table.with(|_| ());
        set_page.set(0);
    });

    let order = create_memo(move |_| {
        table.with(|table| {
            table
                .as_ref()
                .map(|table| table.sorted_indices(sort.get()))
                .unwrap_or_default()
        })
    });
    let pages = move || page_count(order.with(Vec::len));

    let header = move || {
        table.with(|table| {
            table
                .as_ref()
                .map(|table| table.columns.clone())
                .unwrap_or_default()
        })
        .into_iter()
        .enumerate()
        .map(|(i, column)| {
            let arrow = move || match sort.get() {
                Some(key) if key.column == i => match key.direction {
                    SortDirection::Ascending => " ▲",
                    SortDirection::Descending => " ▼",
                },
                _ => "",
            };
            view! {
                <th
                    class="text-nowrap"
                    style="cursor: pointer"
                    on:click=move |_| set_sort.update(|key| *key = SortKey::cycle(*key, i))
                >
                    { column.name }
                    { arrow }
                </th>
            }
        })
        .collect_view()
    };

    let body = move || {
        let current = page.get();
        table.with(|table| {
            let Some(table) = table.as_ref() else {
                return Vec::new();
            };
            order.with(|order| {
                page_slice(order, current)
                    .iter()
                    .map(|&row| {
                        let cells = table.rows[row]
                            .iter()
                            .zip(&table.tooltips[row])
                            .map(|(cell, tooltip)| {
                                view! { <td title=tooltip.clone()>{ cell.to_string() }</td> }
                            })
                            .collect_view();
                        view! { <tr>{ cells }</tr> }
                    })
                    .collect::<Vec<_>>()
            })
        })
    };

    view! {
        <div>
            <label class="fst-italic">{ "Listings Detail Information" }</label>
            <div style="overflow-x: auto">
                <table id="mpbox-datatable" class="table table-sm table-striped">
                    <thead>
                        <tr>{ header }</tr>
                    </thead>
                    <tbody>{ body }</tbody>
                </table>
            </div>
            <nav class="d-flex align-items-center gap-2">
                <button
                    type="button"
                    class="btn btn-sm btn-outline-secondary"
                    disabled=move || page.get() == 0
                    on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1))
                >
                    { "‹" }
                </button>
                <span>{move || format!("{} / {}", page.get().min(pages() - 1) + 1, pages())}</span>
                <button
                    type="button"
                    class="btn btn-sm btn-outline-secondary"
                    disabled=move || page.get() + 1 >= pages()
                    on:click=move |_| set_page.update(|p| *p += 1)
                >
                    { "›" }
                </button>
            </nav>
        </div>
    }
}
