/// Viewport widths below this many CSS pixels get the compact
/// (bottom sheet) presentation.
pub const COMPACT_BREAKPOINT_PX: f64 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    /// Narrow viewport: detail panel as a bottom sheet plus a floating
    /// toggle control.
    Compact,
    /// Wide viewport: detail panel as a permanent side panel.
    Wide,
}

/// Pure layout decision, recomputed on every resize event.
pub fn evaluate(viewport_width_px: f64) -> LayoutMode {
    if viewport_width_px < COMPACT_BREAKPOINT_PX {
        LayoutMode::Compact
    } else {
        LayoutMode::Wide
    }
}

/// Presentation-mode state. `detail_expanded` is only meaningful in
/// `Compact` mode; it is tracked unconditionally so a resize across the
/// breakpoint keeps the sheet state.
#[derive(Clone, Copy, Debug)]
pub struct LayoutState {
    pub mode: LayoutMode,
    pub detail_expanded: bool,
}

impl LayoutState {
    pub fn new(viewport_width_px: f64) -> Self {
        Self {
            mode: evaluate(viewport_width_px),
            detail_expanded: false,
        }
    }

    /// Recompute the mode from the new width; returns `true` when the
    /// mode changed and the presentation needs to be re-synced.
    pub fn on_resize(&mut self, viewport_width_px: f64) -> bool {
        let mode = evaluate(viewport_width_px);
        let changed = mode != self.mode;
        self.mode = mode;
        changed
    }

    /// A new selection expands the sheet; a cleared selection collapses it.
    pub fn on_selection_changed(&mut self, has_selection: bool) {
        self.detail_expanded = has_selection;
    }

    /// Explicit user action on the floating toggle control.
    pub fn toggle_details(&mut self) {
        self.detail_expanded = !self.detail_expanded;
    }

    /// Whether the detail panel is shown. Wide layouts always show it
    /// (the empty state is content too); compact layouts only when a
    /// selection exists and the sheet is expanded.
    pub fn panel_visible(&self, has_selection: bool) -> bool {
        match self.mode {
            LayoutMode::Wide => true,
            LayoutMode::Compact => has_selection && self.detail_expanded,
        }
    }

    /// Whether the floating toggle control is shown: compact layout with
    /// a selection whose sheet is currently collapsed.
    pub fn toggle_visible(&self, has_selection: bool) -> bool {
        self.mode == LayoutMode::Compact && has_selection && !self.detail_expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_boundary() {
        assert_eq!(evaluate(767.0), LayoutMode::Compact);
        assert_eq!(evaluate(768.0), LayoutMode::Wide);
    }

    #[test]
    fn resize_reports_mode_changes_only() {
        let mut layout = LayoutState::new(1024.0);
        assert_eq!(layout.mode, LayoutMode::Wide);
        assert!(!layout.on_resize(900.0));
        assert!(layout.on_resize(500.0));
        assert_eq!(layout.mode, LayoutMode::Compact);
        assert!(!layout.on_resize(400.0));
        assert!(layout.on_resize(1200.0));
    }

    #[test]
    fn selection_drives_the_sheet() {
        let mut layout = LayoutState::new(500.0);
        assert!(!layout.detail_expanded);
        layout.on_selection_changed(true);
        assert!(layout.detail_expanded);
        layout.on_selection_changed(false);
        assert!(!layout.detail_expanded);
    }

    #[test]
    fn panel_visibility_per_mode() {
        let mut layout = LayoutState::new(1024.0);
        // Wide: always visible, selection or not.
        assert!(layout.panel_visible(false));
        assert!(layout.panel_visible(true));

        layout.on_resize(500.0);
        assert!(!layout.panel_visible(false));
        assert!(!layout.panel_visible(true));
        layout.on_selection_changed(true);
        assert!(layout.panel_visible(true));
    }

    #[test]
    fn toggle_control_only_when_collapsed_with_selection() {
        let mut layout = LayoutState::new(500.0);
        assert!(!layout.toggle_visible(false));
        layout.on_selection_changed(true);
        // Auto-expanded on selection, so the toggle is hidden.
        assert!(!layout.toggle_visible(true));
        layout.toggle_details();
        assert!(layout.toggle_visible(true));
        // Wide mode never shows the toggle.
        layout.on_resize(1024.0);
        assert!(!layout.toggle_visible(true));
    }
}
