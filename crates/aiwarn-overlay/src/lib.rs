pub mod credit;
pub mod markup;
pub mod style;

use aiwarn_core::Credit;
use aiwarn_page::{Document, NodeId, StyleId};
use tracing::debug;

/// Where inside the overlay a click landed. Clicks on the dialog body keep
/// the overlay; everything else dismisses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    CornerClose,
    CloseButton,
    Backdrop,
    Dialog,
}

/// Handle to the live warning overlay: the mounted backdrop node and the
/// injected style block, acquired together on open and released together on
/// dismissal. At most one exists per document.
#[derive(Debug)]
pub struct Overlay {
    node: NodeId,
    style: StyleId,
}

impl Overlay {
    /// Mounts the warning if none is present, returning its handle. The
    /// presence query and the mount run under one `&mut Document`, so a
    /// second trigger cannot race past the check.
    ///
    /// The backdrop enters at opacity 0, with a forced layout flush before
    /// fading to 1 so the opacity transition animates.
    pub fn present(
        doc: &mut Document,
        title: Option<&str>,
        categories: &[String],
        credit: &Credit,
    ) -> Option<Overlay> {
        if doc.has_node_with_class(style::CONTAINER_CLASS) {
            debug!("overlay already present, not mounting another");
            return None;
        }

        let style_id = doc.append_style(style::OVERLAY_CSS);
        doc.add_body_class(style::ACTIVE_CLASS);

        let html = markup::render_dialog(title, categories, credit);
        let node = doc.append_node(style::CONTAINER_CLASS, &html);

        doc.set_node_style(node, "opacity", "0");
        doc.flush_layout();
        doc.set_node_style(node, "opacity", "1");

        Some(Overlay {
            node,
            style: style_id,
        })
    }

    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Routes a click. Dismissal consumes the handle; a click on the dialog
    /// body hands it back unchanged.
    pub fn handle_click(self, doc: &mut Document, target: ClickTarget) -> Option<Overlay> {
        match target {
            ClickTarget::Dialog => Some(self),
            ClickTarget::CornerClose | ClickTarget::CloseButton | ClickTarget::Backdrop => {
                self.dismiss(doc);
                None
            }
        }
    }

    /// Removes the backdrop node and the style block together and clears the
    /// animation-freeze marker, fully reverting the page's visual state.
    pub fn dismiss(self, doc: &mut Document) {
        doc.remove_node(self.node);
        doc.remove_style(self.style);
        doc.remove_body_class(style::ACTIVE_CLASS);
        debug!("overlay dismissed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    fn doc() -> Document {
        Document::new(Url::parse("https://studio.example.com/my-game").unwrap())
    }

    fn categories(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn present_mounts_style_node_and_freeze_marker() {
        let mut doc = doc();
        let overlay = Overlay::present(
            &mut doc,
            Some("MyGame"),
            &categories(&["text"]),
            &Credit::default(),
        )
        .unwrap();

        assert_eq!(doc.style_count(), 1);
        assert!(doc.has_node_with_class(style::CONTAINER_CLASS));
        assert!(doc.body_has_class(style::ACTIVE_CLASS));

        let node = doc.node(overlay.node()).unwrap();
        assert!(node.html.contains("MyGame contains AI-generated content"));
        assert!(node.html.contains("AI-generated text."));
    }

    #[test]
    fn entrance_transition_flushes_layout_between_opacity_steps() {
        let mut doc = doc();
        let overlay =
            Overlay::present(&mut doc, None, &[], &Credit::default()).unwrap();

        assert_eq!(doc.layout_flushes(), 1);
        assert_eq!(
            doc.node(overlay.node()).unwrap().inline_styles.get("opacity"),
            Some(&"1".to_string())
        );
    }

    #[test]
    fn second_present_is_refused_while_one_is_live() {
        let mut doc = doc();
        let first = Overlay::present(&mut doc, None, &[], &Credit::default());
        assert!(first.is_some());

        let second = Overlay::present(&mut doc, None, &[], &Credit::default());
        assert!(second.is_none());
        assert_eq!(doc.node_count(), 1);
        assert_eq!(doc.style_count(), 1);
    }

    #[test]
    fn dismiss_releases_node_style_and_marker_together() {
        let mut doc = doc();
        let overlay =
            Overlay::present(&mut doc, None, &categories(&["code"]), &Credit::default()).unwrap();

        overlay.dismiss(&mut doc);

        assert_eq!(doc.node_count(), 0);
        assert_eq!(doc.style_count(), 0);
        assert!(!doc.body_has_class(style::ACTIVE_CLASS));
    }

    #[test]
    fn present_works_again_after_dismissal() {
        let mut doc = doc();
        let overlay = Overlay::present(&mut doc, None, &[], &Credit::default()).unwrap();
        overlay.dismiss(&mut doc);

        assert!(Overlay::present(&mut doc, None, &[], &Credit::default()).is_some());
    }

    #[test]
    fn backdrop_click_dismisses() {
        let mut doc = doc();
        let overlay = Overlay::present(&mut doc, None, &[], &Credit::default()).unwrap();

        assert!(overlay.handle_click(&mut doc, ClickTarget::Backdrop).is_none());
        assert_eq!(doc.node_count(), 0);
        assert_eq!(doc.style_count(), 0);
    }

    #[test]
    fn close_controls_dismiss() {
        for target in [ClickTarget::CornerClose, ClickTarget::CloseButton] {
            let mut doc = doc();
            let overlay = Overlay::present(&mut doc, None, &[], &Credit::default()).unwrap();
            assert!(overlay.handle_click(&mut doc, target).is_none());
            assert_eq!(doc.node_count(), 0);
        }
    }

    #[test]
    fn dialog_click_keeps_the_overlay() {
        let mut doc = doc();
        let overlay = Overlay::present(&mut doc, None, &[], &Credit::default()).unwrap();

        let overlay = overlay.handle_click(&mut doc, ClickTarget::Dialog);
        assert!(overlay.is_some());
        assert!(doc.has_node_with_class(style::CONTAINER_CLASS));
    }
}
