use std::collections::{BTreeMap, HashMap};

/// Handle of an armed timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerId(u64);

/// Which component owns a timer; used to route a fired timer back to its owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerKind {
    /// Typing animation tick.
    Typing,
    /// Carousel auto-advance.
    CarouselAuto,
}

/// A timer that came due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fired {
    /// Handle of the timer.
    pub id: TimerId,
    /// Owner tag.
    pub kind: TimerKind,
    /// Time it was due at, in milliseconds.
    pub at_ms: u64,
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    id: TimerId,
    kind: TimerKind,
    period_ms: Option<u64>,
}

/// Virtual millisecond clock with one-shot and repeating timers.
///
/// Timers due at the same instant fire in arming order. Cancelled timers never fire.
#[derive(Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    next_id: u64,
    next_seq: u64,
    queue: BTreeMap<(u64, u64), Entry>,
    index: HashMap<TimerId, (u64, u64)>,
}

impl Scheduler {
    /// New clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Arm a one-shot timer firing `delay_ms` from now.
    pub fn set_timeout(&mut self, kind: TimerKind, delay_ms: u64) -> TimerId {
        self.arm(kind, delay_ms, None)
    }

    /// Arm a repeating timer firing every `period_ms` (at least 1ms).
    pub fn set_interval(&mut self, kind: TimerKind, period_ms: u64) -> TimerId {
        let period_ms = period_ms.max(1);
        self.arm(kind, period_ms, Some(period_ms))
    }

    fn arm(&mut self, kind: TimerKind, delay_ms: u64, period_ms: Option<u64>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.insert(
            self.now_ms.saturating_add(delay_ms),
            Entry {
                id,
                kind,
                period_ms,
            },
        );
        id
    }

    fn insert(&mut self, due_ms: u64, entry: Entry) {
        let key = (due_ms, self.next_seq);
        self.next_seq += 1;
        self.queue.insert(key, entry);
        self.index.insert(entry.id, key);
    }

    /// Disarm a timer. Returns `false` when it was not armed.
    pub fn clear(&mut self, id: TimerId) -> bool {
        match self.index.remove(&id) {
            Some(key) => self.queue.remove(&key).is_some(),
            None => false,
        }
    }

    /// Whether `id` is still armed.
    pub fn is_armed(&self, id: TimerId) -> bool {
        self.index.contains_key(&id)
    }

    /// Number of armed timers owned by `kind`.
    pub fn armed_count(&self, kind: TimerKind) -> usize {
        self.queue.values().filter(|e| e.kind == kind).count()
    }

    /// Due time of the earliest armed timer.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.queue.keys().next().map(|&(due, _)| due)
    }

    /// Pop the earliest timer due at or before `until_ms`, moving the clock to its due time.
    ///
    /// Repeating timers are re-armed one period later under the same handle.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Fired> {
        let (&key, _) = self.queue.iter().next()?;
        if key.0 > until_ms {
            return None;
        }
        let entry = self.queue.remove(&key)?;
        self.index.remove(&entry.id);
        self.now_ms = self.now_ms.max(key.0);
        if let Some(period) = entry.period_ms {
            self.insert(key.0.saturating_add(period), entry);
        }
        Some(Fired {
            id: entry.id,
            kind: entry.kind,
            at_ms: key.0,
        })
    }

    /// Move the clock forward. Time never moves backwards.
    pub fn advance_to(&mut self, ms: u64) {
        self.now_ms = self.now_ms.max(ms);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/scheduler.rs"]
mod tests;
