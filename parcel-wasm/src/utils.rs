use wasm_bindgen::{JsCast, JsValue};
use web_sys::Window;

/// Log a message to the browser console.
pub fn log(s: &str) {
    web_sys::console::log_1(&JsValue::from_str(s));
}

/// Current viewport width in CSS pixels.
pub fn viewport_width(window: &Window) -> f64 {
    window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0)
}

/// Build an absolute URL for an asset, taking into account the optional
/// `window.__BASE_URL` which is set by the host page.
pub fn asset_url(path: &str) -> String {
    let p = path.trim();
    if p.starts_with("http://") || p.starts_with("https://") || p.starts_with("data:") {
        return p.to_string();
    }
    let base = web_sys::window()
        .and_then(|w| {
            let v = js_sys::Reflect::get(&w, &JsValue::from_str("__BASE_URL")).ok()?;
            v.as_string()
        })
        .unwrap_or_else(|| "/".to_string());
    let base = if base.ends_with('/') {
        base
    } else {
        format!("{}/", base)
    };
    let p = p.trim_start_matches('/');
    format!("{}{}", base, p)
}

/// Fetch a text resource trying a list of fallback URLs in order.
pub async fn fetch_text_with_fallbacks(window: &Window, urls: &[&str]) -> Option<String> {
    for url in urls {
        let resp_value =
            match wasm_bindgen_futures::JsFuture::from(window.fetch_with_str(url)).await {
                Ok(v) => v,
                Err(_) => continue,
            };
        let resp: web_sys::Response = match resp_value.dyn_into() {
            Ok(r) => r,
            Err(_) => continue,
        };
        if !resp.ok() {
            continue;
        }
        if let Ok(text_promise) = resp.text()
            && let Ok(text_js) = wasm_bindgen_futures::JsFuture::from(text_promise).await
            && let Some(s) = text_js.as_string()
        {
            return Some(s);
        }
    }
    None
}

/// Simple query string parser used at start-up.
pub fn get_query_param(search: &str, key: &str) -> Option<String> {
    let s = search.trim_start_matches('?');
    for pair in s.split('&') {
        let mut it = pair.splitn(2, '=');
        let k = it.next()?;
        let v = it.next().unwrap_or("");
        if k == key {
            return Some(url_decode(v));
        }
    }
    None
}

fn url_decode(s: &str) -> String {
    percent_encoding::percent_decode_str(s)
        .decode_utf8()
        .unwrap_or_else(|_| s.into())
        .to_string()
}
