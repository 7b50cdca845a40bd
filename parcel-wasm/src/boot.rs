//! Runtime loading of the mapping library from its CDN. The map surface
//! must not initialize until the script's load event fires, and that
//! signal is forwarded exactly once; a load failure surfaces a visible
//! degraded state instead of a blank container.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlLinkElement, HtmlScriptElement};

use crate::constants::{LEAFLET_CSS_URL, LEAFLET_JS_URL};

pub fn load_mapping_library(document: &Document) -> Result<(), JsValue> {
    let head = document.head().ok_or("document has no <head>")?;

    let css: HtmlLinkElement = document.create_element("link")?.unchecked_into();
    css.set_rel("stylesheet");
    css.set_href(LEAFLET_CSS_URL);
    head.append_child(&css)?;

    let script: HtmlScriptElement = document.create_element("script")?.unchecked_into();
    script.set_src(LEAFLET_JS_URL);
    let onload = Closure::<dyn FnMut()>::wrap(Box::new(|| crate::on_library_loaded()));
    script.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();
    let onerror = Closure::<dyn FnMut()>::wrap(Box::new(|| crate::on_library_failed()));
    script.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();
    head.append_child(&script)?;
    Ok(())
}
