//! Selection domain — public API.
//!
//! Reads the user's current text selection and its bounding box from the
//! host page. The page itself (focused element, document selection,
//! viewport) is reached only through the `PageHost` trait.

pub mod placement;

pub use placement::{compute_placement, PanelSize, Placement, Viewport};

/// Bounding box of a selection in viewport pixel coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnchorRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl AnchorRect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self { left, top, right, bottom }
    }
}

/// What currently holds focus on the page.
#[derive(Debug, Clone, PartialEq)]
pub enum ActiveElement {
    /// A single-line `input` or multi-line `textarea`.
    ///
    /// `selection_start`/`selection_end` are UTF-16 code unit offsets, as
    /// the DOM reports them.
    TextField {
        value: String,
        selection_start: usize,
        selection_end: usize,
        rect: Option<AnchorRect>,
    },
    /// Anything else; the document selection applies.
    Other,
}

/// The page-wide selection. Only the first range's box is used.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentSelection {
    pub text: String,
    pub range_rects: Vec<AnchorRect>,
}

/// Host page boundary: everything the workflow reads from the page.
pub trait PageHost {
    fn active_element(&self) -> ActiveElement;
    fn document_selection(&self) -> DocumentSelection;
    fn viewport(&self) -> Viewport;
}

/// A trimmed, non-empty selection ready for an operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub text: String,
    pub rect: Option<AnchorRect>,
}

/// Read the current selection.
///
/// Returns `None` when the trimmed text is empty; callers treat that as a
/// silent no-op.
pub fn read_selection(page: &impl PageHost) -> Option<Selection> {
    let (raw, rect) = match page.active_element() {
        ActiveElement::TextField {
            value,
            selection_start,
            selection_end,
            rect,
        } => (slice_utf16(&value, selection_start, selection_end), rect),
        ActiveElement::Other => {
            let selection = page.document_selection();
            let rect = selection.range_rects.first().copied();
            (selection.text, rect)
        }
    };

    let text = raw.trim();
    if text.is_empty() {
        log::debug!("[SELECTION] Empty selection, nothing to do");
        return None;
    }

    log::info!(
        "[SELECTION] {} chars, anchor: {}",
        text.chars().count(),
        if rect.is_some() { "rect" } else { "none" }
    );
    Some(Selection {
        text: text.to_string(),
        rect,
    })
}

/// Substring by UTF-16 offsets, clamped to the value. A reversed range
/// yields an empty string; a split surrogate pair becomes U+FFFD.
fn slice_utf16(value: &str, start: usize, end: usize) -> String {
    let units: Vec<u16> = value.encode_utf16().collect();
    let end = end.min(units.len());
    if end <= start {
        return String::new();
    }
    String::from_utf16_lossy(&units[start..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FakePage {
        active: ActiveElement,
        document: DocumentSelection,
    }

    impl PageHost for FakePage {
        fn active_element(&self) -> ActiveElement {
            self.active.clone()
        }
        fn document_selection(&self) -> DocumentSelection {
            self.document.clone()
        }
        fn viewport(&self) -> Viewport {
            Viewport::new(1000.0, 800.0)
        }
    }

    fn document_page(text: &str, rects: Vec<AnchorRect>) -> FakePage {
        FakePage {
            active: ActiveElement::Other,
            document: DocumentSelection {
                text: text.to_string(),
                range_rects: rects,
            },
        }
    }

    #[test]
    fn text_field_selection_is_sliced_and_trimmed() {
        let rect = AnchorRect::new(5.0, 6.0, 200.0, 30.0);
        let page = FakePage {
            active: ActiveElement::TextField {
                value: "hello  wörld  again".to_string(),
                selection_start: 5,
                selection_end: 13,
                rect: Some(rect),
            },
            document: DocumentSelection {
                text: "ignored".to_string(),
                range_rects: vec![],
            },
        };

        let selection = read_selection(&page).unwrap();
        assert_eq!(selection.text, "wörld");
        assert_eq!(selection.rect, Some(rect));
    }

    #[test]
    fn text_field_range_past_end_is_clamped() {
        let page = FakePage {
            active: ActiveElement::TextField {
                value: "short".to_string(),
                selection_start: 2,
                selection_end: 99,
                rect: None,
            },
            document: DocumentSelection::default(),
        };
        assert_eq!(read_selection(&page).unwrap().text, "ort");
    }

    #[test]
    fn text_field_offsets_count_utf16_units() {
        // The emoji is two UTF-16 units, so "hi" starts at offset 3.
        let page = FakePage {
            active: ActiveElement::TextField {
                value: "😀 hi there".to_string(),
                selection_start: 3,
                selection_end: 5,
                rect: None,
            },
            document: DocumentSelection::default(),
        };
        assert_eq!(read_selection(&page).unwrap().text, "hi");
    }

    #[test]
    fn reversed_field_range_is_no_selection() {
        let page = FakePage {
            active: ActiveElement::TextField {
                value: "abc".to_string(),
                selection_start: 2,
                selection_end: 1,
                rect: None,
            },
            document: DocumentSelection::default(),
        };
        assert!(read_selection(&page).is_none());
    }

    #[test]
    fn document_selection_uses_first_range() {
        let first = AnchorRect::new(10.0, 10.0, 50.0, 30.0);
        let second = AnchorRect::new(0.0, 100.0, 40.0, 120.0);
        let page = document_page("  cat \n", vec![first, second]);

        let selection = read_selection(&page).unwrap();
        assert_eq!(selection.text, "cat");
        assert_eq!(selection.rect, Some(first));
    }

    #[test]
    fn whitespace_only_selection_is_none() {
        assert!(read_selection(&document_page(" \t\n ", vec![])).is_none());
        assert!(read_selection(&document_page("", vec![])).is_none());
    }

    #[test]
    fn selection_without_ranges_has_no_rect() {
        let selection = read_selection(&document_page("word", vec![])).unwrap();
        assert_eq!(selection.rect, None);
    }
}
