//! Browser entry point for the parcel explorer: renders the demo parcel
//! registry on a Leaflet map and shows property/lease details for the
//! clicked parcel. All state transitions run on the UI event loop; the
//! controllers live in `parcel-core`, the map surface in `surface`.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, Window};

use parcel_core::{LayoutState, ParcelRegistry, Selection, hover_state, restyle_pass};

mod boot;
mod constants;
mod leaflet;
mod panel;
mod state;
mod surface;
mod utils;

use constants::{FALLBACK_CENTER, FALLBACK_TILES, MAP_ZOOM, PRIMARY_TILES, SIZE_REFRESH_DELAY_MS};
use state::{STATE, State, with_state};
use surface::MapSurface;
use utils::{asset_url, fetch_text_with_fallbacks, get_query_param, log, viewport_width};

/// Demo registry bundled into the binary; `?r=<name>` can replace it at
/// runtime with `parcels/<name>.json`.
const EMBEDDED_REGISTRY: &str = include_str!("../../parcels.json");

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let registry = ParcelRegistry::from_json(EMBEDDED_REGISTRY).unwrap_or_else(|e| {
        log(&format!("embedded registry rejected: {e}"));
        ParcelRegistry::default()
    });

    let state = Rc::new(RefCell::new(State {
        window: window.clone(),
        document: document.clone(),
        registry,
        selection: Selection::default(),
        layout: LayoutState::new(viewport_width(&window)),
        surface: MapSurface::new(),
    }));
    STATE.with(|st| st.replace(Some(state.clone())));

    // Optional registry override; fire-and-forget, the embedded data
    // stays in place if the fetch fails.
    if let Ok(search) = window.location().search()
        && let Some(name) = get_query_param(&search, "r")
    {
        let win = window.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = fetch_and_load_registry(win, &name).await {
                log(&format!("failed to load registry '{}': {:?}", name, err));
            }
        });
    }

    attach_ui(&state)?;
    {
        let s = state.borrow();
        panel::render_region(&s);
        panel::render_detail(&s);
        panel::sync_layout(&s);
    }

    // The map surface itself waits for the library load signal.
    boot::load_mapping_library(&document)?;
    Ok(())
}

/// Load signal from the mapping library script; fires once, and the
/// surface guards against double initialization anyway.
pub(crate) fn on_library_loaded() {
    with_state(init_map);
}

/// The degraded state: the page keeps working (panel, layout), only the
/// map container announces the failure.
pub(crate) fn on_library_failed() {
    with_state(|s| {
        log("mapping library failed to load");
        if let Some(el) = s.document.get_element_by_id("map") {
            el.set_inner_html(
                "<div class=\"map-degraded\">Map unavailable: \
                 the mapping library failed to load.</div>",
            );
        }
    });
}

fn init_map(s: &mut State) {
    if s.surface.is_initialized() {
        return;
    }
    let center = s.registry.view_center().unwrap_or(FALLBACK_CENTER);
    if !s.surface.initialize("map", center, MAP_ZOOM) {
        return;
    }
    s.surface.attach_base_layer(&PRIMARY_TILES, &FALLBACK_TILES);
    s.surface.render_shapes(s.registry.parcels());
    schedule_size_refresh(&s.window);
}

pub(crate) fn on_tile_error() {
    with_state(|s| s.surface.add_fallback_layer());
}

pub(crate) fn on_parcel_click(id: &str) {
    with_state(|s| {
        if !s.selection.select(id) {
            return;
        }
        s.layout.on_selection_changed(true);
        apply_selection(s);
    });
}

pub(crate) fn on_parcel_hover(id: &str, entered: bool) {
    with_state(|s| {
        let state = hover_state(s.selection.current(), id, entered);
        s.surface.set_shape_style(id, state);
    });
}

pub(crate) fn on_dismiss() {
    with_state(|s| {
        if !s.selection.clear() {
            return;
        }
        s.layout.on_selection_changed(false);
        s.surface.close_popup();
        apply_selection(s);
    });
}

pub(crate) fn on_toggle_details() {
    with_state(|s| {
        s.layout.toggle_details();
        panel::sync_layout(s);
    });
}

pub(crate) fn on_resize() {
    with_state(|s| {
        // Cheap enough to recompute on every event, no debounce.
        if s.layout.on_resize(viewport_width(&s.window)) {
            panel::sync_layout(s);
        }
    });
}

/// Exactly one restyle pass per selection change, then the panel and the
/// layout classes follow the same state.
fn apply_selection(s: &mut State) {
    let pass = restyle_pass(s.registry.ids(), s.selection.current());
    s.surface.apply_styles(&pass);
    panel::render_detail(s);
    panel::sync_layout(s);
}

fn attach_ui(state: &Rc<RefCell<State>>) -> Result<(), JsValue> {
    let window = state.borrow().window.clone();
    let document = state.borrow().document.clone();

    let resize = Closure::<dyn FnMut()>::wrap(Box::new(|| on_resize()));
    window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
    resize.forget();

    if let Some(btn) = document.get_element_by_id("toggleDetails")
        && let Ok(btn) = btn.dyn_into::<HtmlElement>()
    {
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(|| on_toggle_details()));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    if let Some(btn) = document.get_element_by_id("dismissDetail")
        && let Ok(btn) = btn.dyn_into::<HtmlElement>()
    {
        let onclick = Closure::<dyn FnMut()>::wrap(Box::new(|| on_dismiss()));
        btn.set_onclick(Some(onclick.as_ref().unchecked_ref()));
        onclick.forget();
    }

    // Release the viewport and its listeners when the page goes away.
    let teardown = Closure::<dyn FnMut()>::wrap(Box::new(|| {
        with_state(|s| s.surface.teardown());
    }));
    window.add_event_listener_with_callback("pagehide", teardown.as_ref().unchecked_ref())?;
    teardown.forget();

    Ok(())
}

fn schedule_size_refresh(window: &Window) {
    let refresh = Closure::<dyn FnMut()>::wrap(Box::new(|| {
        with_state(|s| s.surface.invalidate_size());
    }));
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        refresh.as_ref().unchecked_ref(),
        SIZE_REFRESH_DELAY_MS,
    );
    refresh.forget();
}

async fn fetch_and_load_registry(window: Window, name: &str) -> Result<(), JsValue> {
    let urls = [
        asset_url(&format!("parcels/{name}.json")),
        format!("/parcels/{name}.json"),
        format!("parcels/{name}.json"),
    ];
    let url_refs: Vec<&str> = urls.iter().map(String::as_str).collect();
    let text = fetch_text_with_fallbacks(&window, &url_refs)
        .await
        .ok_or_else(|| JsValue::from_str("registry fetch failed"))?;
    let registry =
        ParcelRegistry::from_json(&text).map_err(|e| JsValue::from_str(&e.to_string()))?;

    with_state(move |s| {
        s.registry = registry;
        s.selection = Selection::default();
        s.layout.on_selection_changed(false);
        if s.surface.is_initialized() {
            if let Some(center) = s.registry.view_center() {
                s.surface.set_view(center, MAP_ZOOM);
            }
            s.surface.render_shapes(s.registry.parcels());
        }
        panel::render_region(s);
        apply_selection(s);
    });
    Ok(())
}
