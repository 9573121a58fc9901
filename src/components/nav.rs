use crate::animation::scroll::{ScrollAnimator, ScrollTarget};
use crate::foundation::core::Vec2;
use crate::page::document::{Document, ElementId};
use crate::page::model::names;

/// In-page navigation through `.nav-link` anchors.
#[derive(Debug)]
pub struct NavLinks {
    links: Vec<ElementId>,
}

impl NavLinks {
    pub fn new(doc: &Document) -> Self {
        Self {
            links: doc.with_class(names::NAV_LINK),
        }
    }

    /// Navigation anchors in document order.
    pub fn links(&self) -> &[ElementId] {
        &self.links
    }

    /// Element a link's `#id` href points at, if it exists.
    pub fn resolve(&self, doc: &Document, href: &str) -> Option<ElementId> {
        let fragment = href.strip_prefix('#')?;
        if fragment.is_empty() {
            return None;
        }
        doc.by_id(fragment)
    }

    /// Smooth-scroll the window so the target's top meets the viewport top.
    ///
    /// Returns `false` when no link has this href or its target is missing.
    pub fn click(
        &self,
        doc: &Document,
        scroll: &mut ScrollAnimator,
        now_ms: u64,
        href: &str,
    ) -> bool {
        let known = self
            .links
            .iter()
            .any(|&id| doc.get(id).attr(names::HREF) == Some(href));
        let Some(target) = known.then(|| self.resolve(doc, href)).flatten() else {
            tracing::debug!(href, "nav target ignored");
            return false;
        };
        let max = doc.max_window_scroll();
        let y = doc.document_rect(target).y0.clamp(0.0, max.y);
        let x = doc.window_scroll().x;
        scroll.scroll_to(doc, ScrollTarget::Window, Vec2::new(x, y), now_ms);
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/nav.rs"]
mod tests;
