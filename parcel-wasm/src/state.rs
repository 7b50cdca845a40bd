use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Window};

use parcel_core::{LayoutState, ParcelRegistry, Selection};

use crate::surface::MapSurface;

/// Global application state stored behind an `Rc<RefCell<_>>` so it can
/// be shared across the WASM event callbacks.
pub struct State {
    pub window: Window,
    pub document: Document,
    pub registry: ParcelRegistry,
    pub selection: Selection,
    pub layout: LayoutState,
    pub surface: MapSurface,
}

/// Thread local storage for the single runtime state instance.
thread_local! {
    pub static STATE: RefCell<Option<Rc<RefCell<State>>>> = const { RefCell::new(None) };
}

/// Run `f` against the installed state, if any. Handlers re-enter here
/// at fire time and hold the borrow only for their own turn.
pub fn with_state<F: FnOnce(&mut State)>(f: F) {
    STATE.with(|st| {
        if let Some(rc) = st.borrow().as_ref() {
            f(&mut rc.borrow_mut());
        }
    });
}
