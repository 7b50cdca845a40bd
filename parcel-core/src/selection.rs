/// At-most-one selected parcel. Two logical states, Unselected and
/// Selected(id); re-entrant for the lifetime of the session.
///
/// The controller never touches rendering primitives. Callers react to a
/// `true` return by running exactly one restyle pass
/// ([`crate::style::restyle_pass`]) and re-rendering the detail panel.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    current: Option<String>,
}

impl Selection {
    /// Select `id`. Returns `false` when `id` is already selected, in
    /// which case nothing changed and no restyle is due.
    pub fn select(&mut self, id: &str) -> bool {
        if self.current.as_deref() == Some(id) {
            return false;
        }
        self.current = Some(id.to_string());
        true
    }

    /// Drop any selection. Returns `false` when nothing was selected.
    pub fn clear(&mut self) -> bool {
        self.current.take().is_some()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.current.as_deref() == Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unselected() {
        let sel = Selection::default();
        assert_eq!(sel.current(), None);
        assert!(!sel.is_selected("OK-2024-001"));
    }

    #[test]
    fn select_and_reselect() {
        let mut sel = Selection::default();
        assert!(sel.select("OK-2024-001"));
        assert_eq!(sel.current(), Some("OK-2024-001"));

        // Re-clicking the selected shape is a no-op.
        assert!(!sel.select("OK-2024-001"));
        assert_eq!(sel.current(), Some("OK-2024-001"));

        // Selecting another shape replaces the previous selection.
        assert!(sel.select("OK-2024-002"));
        assert_eq!(sel.current(), Some("OK-2024-002"));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut sel = Selection::default();
        assert!(!sel.clear());
        sel.select("OK-2024-003");
        assert!(sel.clear());
        assert_eq!(sel.current(), None);
        assert!(!sel.clear());
    }

    #[test]
    fn last_click_wins_over_any_sequence() {
        let mut sel = Selection::default();
        for id in ["OK-2024-001", "OK-2024-003", "OK-2024-002", "OK-2024-003"] {
            sel.select(id);
        }
        assert_eq!(sel.current(), Some("OK-2024-003"));
    }
}
