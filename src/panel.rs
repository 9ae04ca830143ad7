//! Floating panel boundary.
//!
//! The host owns the actual container (drag handling, styling, the
//! document-level pointer listener). The pipeline only positions it, shows
//! or hides it, and replaces its markup.

use crate::selection::Placement;

/// Title shown in the panel's drag handle.
pub const PANEL_TITLE: &str = "translator";

pub trait PanelSurface {
    fn show(&self);
    fn hide(&self);
    /// Replace the whole panel markup.
    fn set_content(&self, markup: &str);
    /// Apply inline `top/left/right/bottom` to the panel wrapper.
    fn set_placement(&self, placement: &Placement);
}

/// Where a pointer press landed, as classified by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// Inside the panel body. Must not dismiss the panel.
    PanelBody,
    Outside,
}

/// Wrap a view's HTML with the draggable header.
///
/// `data-gloss-body` marks the whole panel, header included: the host stops
/// pointer-down propagation there so dragging or clicking inside never
/// reaches the outside-click handler.
pub fn compose_panel(body_html: &str) -> String {
    format!(
        "<div class=\"gloss-panel\" data-gloss-body><div class=\"gloss-header\">{}</div><div class=\"gloss-content\">{}</div></div>",
        PANEL_TITLE, body_html
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composed_panel_has_header_then_body() {
        let markup = compose_panel("<p>hi</p>");
        let header = markup.find("translator").unwrap();
        let body = markup.find("<p>hi</p>").unwrap();
        assert!(header < body);
    }

    #[test]
    fn drag_header_is_inside_the_body_region() {
        let markup = compose_panel("<p>hi</p>");
        let region_start = markup.find("data-gloss-body").unwrap();
        let header = markup.find(PANEL_TITLE).unwrap();
        let body = markup.find("<p>hi</p>").unwrap();
        assert!(region_start < header);
        assert!(region_start < body);
        // Header and content both close before the marked wrapper does.
        assert!(markup.ends_with("</div></div>"));
        assert_eq!(markup.matches("data-gloss-body").count(), 1);
    }
}
