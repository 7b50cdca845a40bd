/// Visual state of a rendered shape. `Selected` strictly overrides
/// `Hovered`; hover is transient and never survives a selection change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeState {
    Default,
    Hovered,
    Selected,
}

/// Path options for one shape state, in the vocabulary the mapping
/// library understands (stroke color/weight, fill color/opacity).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeStyle {
    pub color: &'static str,
    pub fill_color: &'static str,
    pub fill_opacity: f64,
    pub weight: f64,
    pub opacity: f64,
}

/// The style table: unselected shapes are a faint blue, hovered shapes
/// thicken, the selected shape switches to a strong red.
pub fn style_for(state: ShapeState) -> ShapeStyle {
    match state {
        ShapeState::Default => ShapeStyle {
            color: "#2563eb",
            fill_color: "#3b82f6",
            fill_opacity: 0.3,
            weight: 2.0,
            opacity: 1.0,
        },
        ShapeState::Hovered => ShapeStyle {
            color: "#2563eb",
            fill_color: "#3b82f6",
            fill_opacity: 0.5,
            weight: 3.0,
            opacity: 1.0,
        },
        ShapeState::Selected => ShapeStyle {
            color: "#dc2626",
            fill_color: "#ef4444",
            fill_opacity: 0.7,
            weight: 4.0,
            opacity: 1.0,
        },
    }
}

/// One full restyle pass over every rendered shape: the selected shape
/// (if any) gets the selected style, every other shape the default style.
/// Hover is ignored here; a selection change supersedes it.
pub fn restyle_pass<'a, I>(ids: I, selected: Option<&str>) -> Vec<(String, ShapeState)>
where
    I: IntoIterator<Item = &'a str>,
{
    ids.into_iter()
        .map(|id| {
            let state = if selected == Some(id) {
                ShapeState::Selected
            } else {
                ShapeState::Default
            };
            (id.to_string(), state)
        })
        .collect()
}

/// Resolve a hover transition on `id` against the current selection:
/// the selected shape keeps its selected style no matter what the
/// pointer does.
pub fn hover_state(selected: Option<&str>, id: &str, hovering: bool) -> ShapeState {
    if selected == Some(id) {
        ShapeState::Selected
    } else if hovering {
        ShapeState::Hovered
    } else {
        ShapeState::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDS: [&str; 4] = ["OK-2024-001", "OK-2024-002", "OK-2024-003", "OK-2024-004"];

    #[test]
    fn restyle_pass_marks_exactly_one_selected() {
        let pass = restyle_pass(IDS, Some("OK-2024-002"));
        assert_eq!(pass.len(), 4);
        for (id, state) in &pass {
            if id == "OK-2024-002" {
                assert_eq!(*state, ShapeState::Selected);
            } else {
                assert_eq!(*state, ShapeState::Default);
            }
        }
    }

    #[test]
    fn restyle_pass_without_selection_is_all_default() {
        let pass = restyle_pass(IDS, None);
        assert!(pass.iter().all(|(_, s)| *s == ShapeState::Default));
    }

    #[test]
    fn hover_never_downgrades_the_selected_shape() {
        let selected = Some("OK-2024-001");
        assert_eq!(
            hover_state(selected, "OK-2024-001", true),
            ShapeState::Selected
        );
        assert_eq!(
            hover_state(selected, "OK-2024-001", false),
            ShapeState::Selected
        );
        assert_eq!(
            hover_state(selected, "OK-2024-002", true),
            ShapeState::Hovered
        );
        assert_eq!(
            hover_state(selected, "OK-2024-002", false),
            ShapeState::Default
        );
    }

    #[test]
    fn style_table_matches_the_design_contract() {
        assert_eq!(style_for(ShapeState::Default).fill_opacity, 0.3);
        assert_eq!(style_for(ShapeState::Default).weight, 2.0);
        assert_eq!(style_for(ShapeState::Hovered).fill_opacity, 0.5);
        assert_eq!(style_for(ShapeState::Hovered).weight, 3.0);
        assert_eq!(style_for(ShapeState::Selected).fill_opacity, 0.7);
        assert_eq!(style_for(ShapeState::Selected).weight, 4.0);
    }
}
