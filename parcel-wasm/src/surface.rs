//! Map Surface Adapter: owns the Leaflet viewport and the rendered
//! parcel shapes. Every visual mutation of the map goes through here;
//! event handlers only report upward to the controller functions in
//! `lib.rs` and never restyle sibling shapes themselves.

use std::collections::HashMap;

use js_sys::{Array, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;

use parcel_core::{Parcel, ShapeState, ShapeStyle, style_for};

use crate::leaflet;
use crate::utils::log;

/// One HTTP tile endpoint. The attribution string is passed through to
/// the mapping library unmodified.
pub struct TileSource {
    pub url_template: &'static str,
    pub attribution: &'static str,
    pub max_zoom: f64,
    pub cross_origin: bool,
}

/// The single map surface instance, exclusively owned here.
#[derive(Default)]
pub struct MapSurface {
    map: Option<leaflet::Map>,
    shapes: HashMap<String, leaflet::Polygon>,
    fallback: Option<&'static TileSource>,
    fallback_added: bool,
}

impl MapSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_initialized(&self) -> bool {
        self.map.is_some()
    }

    /// Bind a viewport to `container_id` and center it. A second call is
    /// a no-op; a call before the mapping library has loaded logs and
    /// reports failure so the caller can retry on the load signal.
    pub fn initialize(&mut self, container_id: &str, center: (f64, f64), zoom: f64) -> bool {
        if self.map.is_some() {
            return true;
        }
        if !leaflet::is_loaded() {
            log("map surface: mapping library not loaded yet, skipping initialization");
            return false;
        }
        let options = Object::new();
        set(&options, "zoomControl", &JsValue::TRUE);
        set(&options, "scrollWheelZoom", &JsValue::TRUE);
        let map = leaflet::new_map(container_id, &options);
        map.set_view(&leaflet::lat_lng(center.0, center.1), zoom);
        self.map = Some(map);
        true
    }

    /// Add the primary tile layer and remember the fallback source. The
    /// first `tileerror` from the primary adds the fallback as an extra
    /// layer (the primary stays); later errors are ignored.
    pub fn attach_base_layer(
        &mut self,
        primary: &'static TileSource,
        fallback: &'static TileSource,
    ) {
        let Some(map) = &self.map else { return };
        self.fallback = Some(fallback);
        let layer = leaflet::new_tile_layer(primary.url_template, &tile_options(primary));
        layer.add_to(map);
        let on_error = Closure::<dyn FnMut()>::wrap(Box::new(|| crate::on_tile_error()));
        layer.on("tileerror", on_error.as_ref().unchecked_ref());
        on_error.forget();
    }

    /// One-shot reaction to a failing primary tile source.
    pub fn add_fallback_layer(&mut self) {
        if self.fallback_added {
            return;
        }
        let (Some(map), Some(fallback)) = (&self.map, self.fallback) else {
            return;
        };
        log("primary tiles failed, adding backup tile layer");
        leaflet::new_tile_layer(fallback.url_template, &tile_options(fallback)).add_to(map);
        self.fallback_added = true;
    }

    /// Draw one polygon per renderable parcel in the default style, with
    /// a label popup and click/hover handlers. Replaces any previously
    /// rendered shapes (registry reloads re-enter here).
    pub fn render_shapes(&mut self, parcels: &[Parcel]) {
        self.clear_shapes();
        let Some(map) = &self.map else { return };
        for parcel in parcels {
            if !parcel.is_renderable() {
                log(&format!(
                    "skipping parcel `{}`: boundary has too few points",
                    parcel.id
                ));
                continue;
            }
            let ring = Array::new();
            for &[lat, lng] in &parcel.boundary {
                ring.push(&leaflet::lat_lng(lat, lng));
            }
            let polygon =
                leaflet::new_polygon(&ring, &style_object(style_for(ShapeState::Default)));
            polygon.add_to(map);
            polygon.bind_popup(&format!("Parcel {}<br>{}", parcel.id, parcel.address));
            attach_shape_events(&polygon, &parcel.id);
            self.shapes.insert(parcel.id.clone(), polygon);
        }
    }

    /// Idempotently restyle exactly one shape.
    pub fn set_shape_style(&self, id: &str, state: ShapeState) {
        if let Some(polygon) = self.shapes.get(id) {
            polygon.set_style(&style_object(style_for(state)));
        }
    }

    /// Apply a full restyle pass produced by the selection controller.
    pub fn apply_styles(&self, pass: &[(String, ShapeState)]) {
        for (id, state) in pass {
            self.set_shape_style(id, *state);
        }
    }

    pub fn set_view(&self, center: (f64, f64), zoom: f64) {
        if let Some(map) = &self.map {
            map.set_view(&leaflet::lat_lng(center.0, center.1), zoom);
        }
    }

    /// Recalculate the viewport size after the surrounding layout moved.
    pub fn invalidate_size(&self) {
        if let Some(map) = &self.map {
            map.invalidate_size();
        }
    }

    pub fn close_popup(&self) {
        if let Some(map) = &self.map {
            map.close_popup();
        }
    }

    /// Release the viewport and every rendered shape. Safe to call when
    /// `initialize` never completed.
    pub fn teardown(&mut self) {
        self.clear_shapes();
        self.fallback = None;
        self.fallback_added = false;
        if let Some(map) = self.map.take() {
            map.remove();
        }
    }

    fn clear_shapes(&mut self) {
        for (_, polygon) in self.shapes.drain() {
            polygon.remove();
        }
    }
}

/// Click and hover handlers report the parcel id upward; the resulting
/// restyle is driven by the controller state, not by the handler.
fn attach_shape_events(polygon: &leaflet::Polygon, id: &str) {
    let click_id = id.to_string();
    let on_click = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        crate::on_parcel_click(&click_id);
    }));
    polygon.on("click", on_click.as_ref().unchecked_ref());
    on_click.forget();

    let enter_id = id.to_string();
    let on_enter = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        crate::on_parcel_hover(&enter_id, true);
    }));
    polygon.on("mouseover", on_enter.as_ref().unchecked_ref());
    on_enter.forget();

    let leave_id = id.to_string();
    let on_leave = Closure::<dyn FnMut()>::wrap(Box::new(move || {
        crate::on_parcel_hover(&leave_id, false);
    }));
    polygon.on("mouseout", on_leave.as_ref().unchecked_ref());
    on_leave.forget();
}

fn tile_options(source: &TileSource) -> JsValue {
    let options = Object::new();
    set(
        &options,
        "attribution",
        &JsValue::from_str(source.attribution),
    );
    set(&options, "maxZoom", &JsValue::from_f64(source.max_zoom));
    if source.cross_origin {
        set(&options, "crossOrigin", &JsValue::TRUE);
    }
    options.into()
}

fn style_object(style: ShapeStyle) -> JsValue {
    let options = Object::new();
    set(&options, "color", &JsValue::from_str(style.color));
    set(&options, "fillColor", &JsValue::from_str(style.fill_color));
    set(
        &options,
        "fillOpacity",
        &JsValue::from_f64(style.fill_opacity),
    );
    set(&options, "weight", &JsValue::from_f64(style.weight));
    set(&options, "opacity", &JsValue::from_f64(style.opacity));
    options.into()
}

fn set(target: &Object, key: &str, value: &JsValue) {
    let _ = Reflect::set(target, &JsValue::from_str(key), value);
}
