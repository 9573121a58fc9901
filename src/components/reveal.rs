use crate::foundation::core::visible_fraction;
use crate::page::document::{Document, ElementId};
use crate::page::model::names;

/// Marks `.fade-in` elements as revealed the first time enough of them is on screen.
///
/// Revealing is one-way: a revealed element is never observed again.
#[derive(Debug)]
pub struct RevealOnScroll {
    pending: Vec<ElementId>,
    threshold: f64,
}

impl RevealOnScroll {
    /// Observe every `.fade-in` element that is not already revealed.
    pub fn new(doc: &Document, threshold: f64) -> Self {
        let pending = doc
            .with_class(names::FADE_IN)
            .into_iter()
            .filter(|&id| !doc.get(id).has_class(names::APPEAR))
            .collect();
        Self { pending, threshold }
    }

    /// Reveal every pending element whose visible fraction reached the threshold.
    ///
    /// Returns the elements revealed by this call.
    pub fn check(&mut self, doc: &mut Document) -> Vec<ElementId> {
        let viewport = doc.viewport().rect();
        let threshold = self.threshold;
        let mut revealed = Vec::new();
        self.pending.retain(|&id| {
            let hit = visible_fraction(doc.client_rect(id), viewport) >= threshold;
            if hit {
                revealed.push(id);
            }
            !hit
        });
        for &id in &revealed {
            doc.add_class(id, names::APPEAR);
            tracing::debug!(element = ?doc.get(id).id(), "revealed");
        }
        revealed
    }

    /// Elements still waiting for their first intersection.
    pub fn pending(&self) -> &[ElementId] {
        &self.pending
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/reveal.rs"]
mod tests;
