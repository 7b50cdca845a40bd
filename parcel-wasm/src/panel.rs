//! DOM side of the detail panel and the responsive layout: inject the
//! rendered panel body and mirror controller state as classes on the app
//! root. The stylesheet decides what is visible in which mode.

use parcel_core::LayoutMode;

use crate::state::State;

/// Re-render the detail panel body from the current selection.
pub fn render_detail(s: &State) {
    let Some(el) = s.document.get_element_by_id("detailContent") else {
        return;
    };
    let parcel = s.selection.current().and_then(|id| s.registry.get(id));
    el.set_inner_html(&parcel_core::panel::detail_html(parcel));
}

/// Show the registry's region label in the header, when it has one.
pub fn render_region(s: &State) {
    if let Some(region) = s.registry.region()
        && let Some(el) = s.document.get_element_by_id("regionLabel")
    {
        el.set_text_content(Some(region));
    }
}

/// Reflect layout and selection state on the app root. The class set is
/// the single source of truth for panel/toggle visibility.
pub fn sync_layout(s: &State) {
    let Some(root) = s.document.get_element_by_id("app") else {
        return;
    };
    let mut classes = vec![match s.layout.mode {
        LayoutMode::Wide => "wide",
        LayoutMode::Compact => "compact",
    }];
    let has_selection = s.selection.current().is_some();
    if has_selection {
        classes.push("has-selection");
    }
    if s.layout.panel_visible(has_selection) {
        classes.push("panel-open");
    }
    if s.layout.toggle_visible(has_selection) {
        classes.push("toggle-visible");
    }
    root.set_class_name(&classes.join(" "));

    // Panel growth and collapse change the map container's box.
    s.surface.invalidate_size();
}
