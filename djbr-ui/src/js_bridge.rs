//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js is not part of the page shell: [`init_charts`] injects its script
//! tag on first use, waits for it, then evaluates the chart functions from
//! `assets/js/*.js` at global scope and exposes them via `window.*`.
//! Render calls poll until D3, the chart functions and the container exist.

use serde::Serialize;

static D3_URL: &str = "https://cdn.jsdelivr.net/npm/d3@7";

// Embed all D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static INDEX_CHART_JS: &str = include_str!("../assets/js/index-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('DJBR JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `value` as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "''".to_string())
}

/// Load D3.js and the chart scripts. Safe to call more than once.
pub fn init_charts() {
    let scripts = [TOOLTIP_JS, BAR_CHART_JS, INDEX_CHART_JS].join("\n");
    call_js(&format!(
        r#"
        if (!window.__djbrChartsRequested) {{
            window.__djbrChartsRequested = true;
            window.__djbrChartScripts = {scripts};
            if (typeof d3 === 'undefined') {{
                var tag = document.createElement('script');
                tag.src = {d3};
                tag.async = true;
                document.head.appendChild(tag);
            }}
            var waitForD3 = setInterval(function() {{
                if (typeof d3 !== 'undefined') {{
                    clearInterval(waitForD3);
                    (0, eval)(window.__djbrChartScripts);
                    delete window.__djbrChartScripts;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof renderIndexChart !== 'undefined') window.renderIndexChart = renderIndexChart;
                    if (typeof renderGroupIndexChart !== 'undefined') window.renderGroupIndexChart = renderGroupIndexChart;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__djbrChartsReady = true;
                    console.log('DJBR charts initialized');
                }}
            }}, 100);
        }}
        "#,
        scripts = js_string(&scripts),
        d3 = js_string(D3_URL),
    ));
}

/// Call `window.{function}(container_id, data, config)` once everything is ready.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let container = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__djbrChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById({container})) {{
                    clearInterval(poll);
                    try {{
                        window.{function}({container}, {data}, {config});
                    }} catch(e) {{ console.error('[DJBR] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Stacked bar chart of a [`djbr_data::remuneration::BarChart`].
pub fn render_bar_chart<T: Serialize>(container_id: &str, chart: &T, config_json: &str) {
    render_when_ready("renderBarChart", container_id, &to_json(chart), config_json);
}

/// Per-month index of one agency.
pub fn render_index_chart<T: Serialize>(container_id: &str, points: &T, config_json: &str) {
    render_when_ready("renderIndexChart", container_id, &to_json(points), config_json);
}

/// Aggregated index of every agency in a group.
pub fn render_group_index_chart<T: Serialize>(container_id: &str, points: &T, config_json: &str) {
    render_when_ready("renderGroupIndexChart", container_id, &to_json(points), config_json);
}

/// Write `text` to the clipboard.
pub fn copy_to_clipboard(text: &str) {
    call_js(&format!(
        "navigator.clipboard && navigator.clipboard.writeText({});",
        js_string(text)
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string(container_id)
    ));
}
