use wasm_bindgen::prelude::*;

/// Stand-in for the Plotly.js global so charts can be rendered in a headless
/// browser without the CDN script. Every `Plotly.react` call is recorded.
#[wasm_bindgen(inline_js = r#"
export function setup_plotly_mock() {
    window.__plotlyCalls = [];
    window.Plotly = {
        react: function(root, data, layout) {
            console.log("[MOCK PLOTLY] react on #" + root + " with " + data.length + " traces");
            window.__plotlyCalls.push({ root: root, traces: data.length, layout: layout });
            return Promise.resolve(root);
        }
    };
    return true;
}

export function remove_plotly_mock() {
    delete window.Plotly;
    window.__plotlyCalls = [];
}

export function plotly_call_count(root) {
    return (window.__plotlyCalls || []).filter(function(call) { return call.root === root; }).length;
}

export function plotly_last_trace_count(root) {
    var calls = (window.__plotlyCalls || []).filter(function(call) { return call.root === root; });
    return calls.length === 0 ? -1 : calls[calls.length - 1].traces;
}
"#)]
extern "C" {
    pub fn setup_plotly_mock() -> bool;
    pub fn remove_plotly_mock();
    pub fn plotly_call_count(root: &str) -> u32;
    pub fn plotly_last_trace_count(root: &str) -> i32;
}
