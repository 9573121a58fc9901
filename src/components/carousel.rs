use crate::animation::scroll::{ScrollAnimator, ScrollTarget};
use crate::foundation::core::Vec2;
use crate::foundation::error::{FolioError, FolioResult};
use crate::page::config::CarouselConfig;
use crate::page::document::{Document, ElementId};
use crate::page::model::names;
use crate::runtime::scheduler::{Scheduler, TimerId, TimerKind};

/// Reason auto-advance may be suspended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PauseSource {
    /// Pointer is over the carousel.
    Hover,
    /// The page is hidden.
    Hidden,
}

/// Pause sources tracked together so one clearing never resumes while the other holds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct PauseState {
    /// Pointer is over the carousel.
    pub hovered: bool,
    /// The page is hidden.
    pub hidden: bool,
}

impl PauseState {
    /// Whether any source is active.
    pub fn any(self) -> bool {
        self.hovered || self.hidden
    }
}

/// Project carousel with auto-advance.
#[derive(Debug)]
pub struct Carousel {
    container: ElementId,
    items: Vec<ElementId>,
    cfg: CarouselConfig,
    focused: usize,
    auto: Option<TimerId>,
    pauses: PauseState,
}

impl Carousel {
    /// Wire to `#projectCarousel` and its `.project` children. An empty carousel is an error.
    pub fn new(doc: &Document, cfg: CarouselConfig) -> FolioResult<Self> {
        let container = doc.require(names::CAROUSEL)?;
        let items: Vec<ElementId> = doc
            .children(container)
            .into_iter()
            .filter(|&id| doc.get(id).has_class(names::PROJECT))
            .collect();
        if items.is_empty() {
            return Err(FolioError::wiring(format!(
                "'#{}' has no '.{}' items",
                names::CAROUSEL,
                names::PROJECT
            )));
        }
        Ok(Self {
            container,
            items,
            cfg,
            focused: 0,
            auto: None,
            pauses: PauseState::default(),
        })
    }

    /// Index of the focused item, always in `[0, item_count)`.
    pub fn focused_index(&self) -> usize {
        self.focused
    }

    /// Number of items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The carousel container.
    pub fn container(&self) -> ElementId {
        self.container
    }

    /// Whether an auto-advance timer is armed.
    pub fn is_auto_armed(&self) -> bool {
        self.auto.is_some()
    }

    /// Current pause sources.
    pub fn pauses(&self) -> PauseState {
        self.pauses
    }

    /// Focus the next item, wrapping at the end.
    pub fn next(&mut self, doc: &mut Document, scroll: &mut ScrollAnimator, now_ms: u64) {
        self.go_to(doc, scroll, now_ms, self.focused as i64 + 1);
    }

    /// Focus the previous item, wrapping at the start.
    pub fn previous(&mut self, doc: &mut Document, scroll: &mut ScrollAnimator, now_ms: u64) {
        self.go_to(doc, scroll, now_ms, self.focused as i64 - 1);
    }

    /// Focus `index` modulo the item count; negative values count from the end.
    pub fn go_to(
        &mut self,
        doc: &mut Document,
        scroll: &mut ScrollAnimator,
        now_ms: u64,
        index: i64,
    ) {
        let n = self.items.len() as i64;
        self.focused = index.rem_euclid(n) as usize;
        self.show(doc, scroll, now_ms);
    }

    /// Center the focused item in the container and emphasize it.
    pub fn show(&self, doc: &mut Document, scroll: &mut ScrollAnimator, now_ms: u64) {
        let item = self.items[self.focused];
        for &id in &self.items {
            doc.set_scale(id, 1.0);
        }
        doc.set_scale(item, self.cfg.focus_scale);

        let container = doc.get(self.container);
        let view_w = container.rect.width();
        let item_rect = doc.get(item).rect;
        let range = doc.scroll_range(self.container);
        let x = (item_rect.center().x - view_w / 2.0).clamp(0.0, range.x);
        let y = container.scroll().y;
        scroll.scroll_to(
            doc,
            ScrollTarget::Element(self.container),
            Vec2::new(x, y),
            now_ms,
        );
        tracing::debug!(focused = self.focused, "carousel focus");
    }

    /// Arm auto-advance, replacing any armed timer.
    pub fn start_auto(&mut self, sched: &mut Scheduler) {
        self.stop_auto(sched);
        self.auto = Some(sched.set_interval(TimerKind::CarouselAuto, self.cfg.period_ms));
    }

    /// Disarm auto-advance; a no-op when nothing is armed.
    pub fn stop_auto(&mut self, sched: &mut Scheduler) {
        if let Some(id) = self.auto.take() {
            sched.clear(id);
        }
    }

    /// Set or clear a pause source. Auto-advance runs iff no source is active.
    pub fn set_paused(&mut self, source: PauseSource, on: bool, sched: &mut Scheduler) {
        let before = self.pauses;
        match source {
            PauseSource::Hover => self.pauses.hovered = on,
            PauseSource::Hidden => self.pauses.hidden = on,
        }
        if before == self.pauses {
            return;
        }
        if self.pauses.any() {
            self.stop_auto(sched);
        } else {
            self.start_auto(sched);
        }
        tracing::debug!(?source, on, armed = self.auto.is_some(), "carousel pause");
    }

    /// Handle a fired timer. Timers that are not ours are ignored.
    pub fn on_timer(
        &mut self,
        id: TimerId,
        doc: &mut Document,
        scroll: &mut ScrollAnimator,
        now_ms: u64,
    ) -> bool {
        if self.auto != Some(id) {
            return false;
        }
        self.next(doc, scroll, now_ms);
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/carousel.rs"]
mod tests;
