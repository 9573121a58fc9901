use std::collections::BTreeMap;

use crate::animation::ease::Ease;
use crate::foundation::core::Vec2;
use crate::page::config::ScrollConfig;
use crate::page::document::{Document, ElementId};

/// Something that can be scrolled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum ScrollTarget {
    /// The window.
    Window,
    /// A scroll container.
    Element(ElementId),
}

/// Eased interpolation between two scroll offsets.
#[derive(Clone, Copy, Debug)]
pub struct ScrollTween {
    from: Vec2,
    to: Vec2,
    start_ms: u64,
    duration_ms: u64,
    ease: Ease,
}

impl ScrollTween {
    /// Tween from `from` to `to` starting at `start_ms`.
    pub fn new(from: Vec2, to: Vec2, start_ms: u64, duration_ms: u64, ease: Ease) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            ease,
        }
    }

    /// Offset at `now_ms`.
    pub fn sample(&self, now_ms: u64) -> Vec2 {
        if self.duration_ms == 0 {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms) as f64;
        let t = self.ease.apply(elapsed / self.duration_ms as f64);
        self.from.lerp(self.to, t)
    }

    /// Whether the tween has reached its target at `now_ms`.
    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms >= self.start_ms.saturating_add(self.duration_ms)
    }

    /// Final offset.
    pub fn target(&self) -> Vec2 {
        self.to
    }
}

/// Active smooth scrolls, at most one per target. A new request replaces the running one.
#[derive(Debug)]
pub struct ScrollAnimator {
    cfg: ScrollConfig,
    tweens: BTreeMap<ScrollTarget, ScrollTween>,
}

impl ScrollAnimator {
    /// New animator with no active tweens.
    pub fn new(cfg: ScrollConfig) -> Self {
        Self {
            cfg,
            tweens: BTreeMap::new(),
        }
    }

    /// Start a smooth scroll of `target` to `to` from its current offset.
    pub fn scroll_to(&mut self, doc: &Document, target: ScrollTarget, to: Vec2, now_ms: u64) {
        let from = current(doc, target);
        tracing::debug!(?target, from = ?from, to = ?to, "smooth scroll");
        self.tweens.insert(
            target,
            ScrollTween::new(from, to, now_ms, self.cfg.duration_ms, self.cfg.ease),
        );
    }

    /// Drop the running tween of `target`, leaving its offset where it is.
    pub fn cancel(&mut self, target: ScrollTarget) -> bool {
        self.tweens.remove(&target).is_some()
    }

    /// Whether `target` is currently animating.
    pub fn is_active(&self, target: ScrollTarget) -> bool {
        self.tweens.contains_key(&target)
    }

    /// Apply every tween at `now_ms` and retire finished ones.
    pub fn advance(&mut self, doc: &mut Document, now_ms: u64) {
        for (&target, tween) in &self.tweens {
            let offset = tween.sample(now_ms);
            match target {
                ScrollTarget::Window => doc.set_window_scroll(offset),
                ScrollTarget::Element(id) => doc.set_element_scroll(id, offset),
            }
        }
        self.tweens.retain(|_, t| !t.is_done(now_ms));
    }
}

fn current(doc: &Document, target: ScrollTarget) -> Vec2 {
    match target {
        ScrollTarget::Window => doc.window_scroll(),
        ScrollTarget::Element(id) => doc.get(id).scroll(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/scroll.rs"]
mod tests;
