//! Panel placement next to a selection.
//!
//! Flip-to-fit per axis: the panel goes below and right of the anchor
//! unless its leading edge would overflow the viewport, in which case that
//! axis is anchored from the opposite side instead. No other candidates
//! are tried.

use super::AnchorRect;

/// Gap between the anchor and the panel on the vertical axis.
pub const MARGIN: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Nominal panel size used for the overflow test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSize {
    pub width: f64,
    pub height: f64,
}

impl Default for PanelSize {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
        }
    }
}

/// Exactly one vertical and one horizontal side is set; the others are
/// `auto`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub top: Option<f64>,
    pub bottom: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
}

impl Placement {
    /// Inline style values in `top, left, right, bottom` order.
    pub fn style(&self) -> [(&'static str, String); 4] {
        [
            ("top", css_px(self.top)),
            ("left", css_px(self.left)),
            ("right", css_px(self.right)),
            ("bottom", css_px(self.bottom)),
        ]
    }

    /// `top: 40px; left: 10px; right: auto; bottom: auto`
    pub fn to_css(&self) -> String {
        self.style()
            .iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

fn css_px(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}px", v),
        None => "auto".to_string(),
    }
}

/// Place a panel of `panel` size near `rect` inside `viewport`.
///
/// A missing rect is treated as a zero-size anchor at the viewport origin.
pub fn compute_placement(
    rect: Option<&AnchorRect>,
    viewport: Viewport,
    panel: PanelSize,
) -> Placement {
    let rect = rect.copied().unwrap_or_default();
    let mut placement = Placement {
        top: None,
        bottom: None,
        left: None,
        right: None,
    };

    if rect.top + panel.height > viewport.height {
        placement.bottom = Some(viewport.height - rect.top + MARGIN);
    } else {
        placement.top = Some(rect.bottom + MARGIN);
    }

    if rect.left + panel.width > viewport.width {
        placement.right = Some(viewport.width - rect.right);
    } else {
        placement.left = Some(rect.left);
    }

    placement
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> Viewport {
        Viewport::new(1000.0, 800.0)
    }

    #[test]
    fn fits_below_and_right() {
        let rect = AnchorRect::new(10.0, 10.0, 50.0, 30.0);
        let p = compute_placement(Some(&rect), viewport(), PanelSize::default());
        assert_eq!(p.top, Some(40.0));
        assert_eq!(p.left, Some(10.0));
        assert_eq!(p.bottom, None);
        assert_eq!(p.right, None);
        assert_eq!(p.to_css(), "top: 40px; left: 10px; right: auto; bottom: auto");
    }

    #[test]
    fn flips_above_near_bottom_edge() {
        let rect = AnchorRect::new(10.0, 750.0, 50.0, 770.0);
        let p = compute_placement(Some(&rect), viewport(), PanelSize::default());
        assert_eq!(p.top, None);
        assert_eq!(p.bottom, Some(60.0));
        assert!(p.bottom.unwrap() > 0.0);
    }

    #[test]
    fn flips_left_near_right_edge() {
        let rect = AnchorRect::new(700.0, 10.0, 760.0, 30.0);
        let p = compute_placement(Some(&rect), viewport(), PanelSize::default());
        assert_eq!(p.left, None);
        assert_eq!(p.right, Some(240.0));
    }

    #[test]
    fn exact_fit_does_not_flip() {
        let rect = AnchorRect::new(600.0, 500.0, 620.0, 520.0);
        let p = compute_placement(Some(&rect), viewport(), PanelSize::default());
        assert_eq!(p.top, Some(530.0));
        assert_eq!(p.left, Some(600.0));
    }

    #[test]
    fn missing_rect_falls_back_to_origin() {
        let p = compute_placement(None, viewport(), PanelSize::default());
        assert_eq!(p.top, Some(MARGIN));
        assert_eq!(p.left, Some(0.0));
    }
}
