use crate::figures::Figure;
use gloo_utils::format::JsValueSerdeExt;
use leptos::logging::{error, log, warn};
use leptos::*;
use std::time::Duration;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = Plotly, js_name = "react")]
    fn plotly_react(root: &str, data: &JsValue, layout: &JsValue) -> Result<JsValue, JsValue>;
}

// Plotly.js comes from a CDN script tag and may still be loading on hydrate.
const LOAD_RETRIES: u32 = 50;

pub fn plotly_loaded() -> bool {
    js_sys::Reflect::has(&js_sys::global(), &JsValue::from_str("Plotly")).unwrap_or(false)
}

/// Draws `figure` into the element with id `root`, replacing what was there.
pub async fn render_figure(root: String, figure: Figure) {
    let mut retries = 0;
    while !plotly_loaded() {
        if retries == LOAD_RETRIES {
            warn!("[CHART] Plotly never loaded, #{} left empty", root);
            return;
        }
        gloo_timers::future::sleep(Duration::from_millis(100)).await;
        retries += 1;
    }

    let (data, layout) = match (
        JsValue::from_serde(&figure.data),
        JsValue::from_serde(&figure.layout),
    ) {
        (Ok(data), Ok(layout)) => (data, layout),
        (Err(err), _) | (_, Err(err)) => {
            error!("[CHART] Could not convert figure for #{}: {}", root, err);
            return;
        }
    };

    log!("[CHART] Drawing #{} with {} traces", root, figure.data.len());
    if let Err(err) = plotly_react(&root, &data, &layout) {
        error!("[CHART] Plotly.react failed for #{}: {:?}", root, err);
    }
}

/// Container for one Plotly chart. Redraws whenever `figure` changes to a new
/// value; `None` keeps the previous drawing.
#[component]
pub fn PlotlyChart(
    #[prop(into)] id: String,
    #[prop(into)] figure: Signal<Option<Figure>>,
) -> impl IntoView {
    let root = id.clone();
    create_effect(move |_| {
        if let Some(figure) = figure.get() {
            wasm_bindgen_futures::spawn_local(render_figure(root.clone(), figure));
        }
    });

    view! { <div id=id class="chart"></div> }
}

#[component]
pub fn FetchError(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message
            .get()
            .map(|message| view! { <p class="text-danger small">{ message }</p> })
    }
}
