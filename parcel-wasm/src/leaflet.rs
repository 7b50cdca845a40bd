//! Minimal bindings to the Leaflet mapping library: just the capability
//! set the map surface consumes (viewport, tile layers, polygons, events,
//! teardown). The library itself is loaded at runtime by `boot`; nothing
//! of it is reimplemented here.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// A map viewport bound to a container element.
    pub type Map;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn new_map(container_id: &str, options: &JsValue) -> Map;

    #[wasm_bindgen(method, js_name = setView)]
    pub fn set_view(this: &Map, center: &Array, zoom: f64);

    #[wasm_bindgen(method, js_name = invalidateSize)]
    pub fn invalidate_size(this: &Map);

    #[wasm_bindgen(method, js_name = closePopup)]
    pub fn close_popup(this: &Map);

    #[wasm_bindgen(method)]
    pub fn remove(this: &Map);
}

#[wasm_bindgen]
extern "C" {
    /// A raster tile layer.
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn new_tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &Map);

    #[wasm_bindgen(method)]
    pub fn on(this: &TileLayer, event: &str, handler: &Function);
}

#[wasm_bindgen]
extern "C" {
    /// A filled polygon overlay.
    pub type Polygon;

    #[wasm_bindgen(js_namespace = L, js_name = polygon)]
    pub fn new_polygon(latlngs: &Array, options: &JsValue) -> Polygon;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &Polygon, map: &Map);

    #[wasm_bindgen(method, js_name = setStyle)]
    pub fn set_style(this: &Polygon, style: &JsValue);

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Polygon, content: &str);

    #[wasm_bindgen(method)]
    pub fn on(this: &Polygon, event: &str, handler: &Function);

    #[wasm_bindgen(method)]
    pub fn remove(this: &Polygon);
}

/// True once `leaflet.js` has executed and the `L` global exists.
pub fn is_loaded() -> bool {
    web_sys::window()
        .map(|w| Reflect::has(&w, &JsValue::from_str("L")).unwrap_or(false))
        .unwrap_or(false)
}

/// A `[lat, lng]` pair in the array form Leaflet accepts.
pub fn lat_lng(lat: f64, lng: f64) -> Array {
    Array::of2(&JsValue::from_f64(lat), &JsValue::from_f64(lng))
}
