use crate::foundation::error::FolioResult;
use crate::page::config::TypingConfig;
use crate::page::document::{Document, ElementId};
use crate::page::model::names;
use crate::runtime::scheduler::{Scheduler, TimerId, TimerKind};

/// Direction of the typing loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TypingPhase {
    /// Revealing characters.
    Typing,
    /// Removing characters.
    Deleting,
}

/// Types and deletes the localized hero string forever.
///
/// The string is latched when a typing cycle starts, so a language switch shows up on the next
/// cycle rather than mid-word. Positions count Unicode scalar values.
#[derive(Debug)]
pub struct TypingAnimator {
    target: ElementId,
    cfg: TypingConfig,
    phase: TypingPhase,
    pos: usize,
    current: String,
    timer: Option<TimerId>,
}

impl TypingAnimator {
    /// Wire to `#typed-text`. The animator is idle until [`TypingAnimator::start`].
    pub fn new(doc: &Document, cfg: TypingConfig) -> FolioResult<Self> {
        Ok(Self {
            target: doc.require(names::TYPED_TEXT)?,
            cfg,
            phase: TypingPhase::Typing,
            pos: 0,
            current: String::new(),
            timer: None,
        })
    }

    /// Arm the first tick immediately. Restarting keeps the current position.
    pub fn start(&mut self, sched: &mut Scheduler) {
        self.stop(sched);
        self.timer = Some(sched.set_timeout(TimerKind::Typing, 0));
    }

    /// Cancel the pending tick, if any.
    pub fn stop(&mut self, sched: &mut Scheduler) {
        if let Some(id) = self.timer.take() {
            sched.clear(id);
        }
    }

    /// Whether a tick is pending.
    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    /// Current phase.
    pub fn phase(&self) -> TypingPhase {
        self.phase
    }

    /// Number of characters currently shown.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Handle a fired timer. Timers that are not ours are ignored.
    pub fn on_timer(
        &mut self,
        id: TimerId,
        source: &str,
        doc: &mut Document,
        sched: &mut Scheduler,
    ) -> bool {
        if self.timer != Some(id) {
            return false;
        }
        // Never re-arm at the current instant.
        let delay = self.step(source, doc).max(1);
        self.timer = Some(sched.set_timeout(TimerKind::Typing, delay));
        true
    }

    /// Advance the state machine by one tick and return the delay until the next one.
    pub fn step(&mut self, source: &str, doc: &mut Document) -> u64 {
        match self.phase {
            TypingPhase::Typing => {
                if self.pos == 0 {
                    self.current = source.to_owned();
                }
                let len = self.current.chars().count();
                if len == 0 {
                    doc.set_text(self.target, "");
                    return self.cfg.type_ms;
                }
                self.pos = (self.pos + 1).min(len);
                doc.set_text(self.target, prefix(&self.current, self.pos));
                if self.pos >= len {
                    self.phase = TypingPhase::Deleting;
                    tracing::trace!(len, "typing complete");
                    self.cfg.full_pause_ms
                } else {
                    self.cfg.type_ms
                }
            }
            TypingPhase::Deleting => {
                self.pos = self.pos.saturating_sub(1);
                doc.set_text(self.target, prefix(&self.current, self.pos));
                if self.pos == 0 {
                    self.phase = TypingPhase::Typing;
                    self.cfg.empty_pause_ms
                } else {
                    self.cfg.delete_ms
                }
            }
        }
    }
}

fn prefix(s: &str, chars: usize) -> &str {
    match s.char_indices().nth(chars) {
        Some((byte, _)) => &s[..byte],
        None => s,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/typing.rs"]
mod tests;
