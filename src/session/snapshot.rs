use crate::components::carousel::PauseState;
use crate::components::theme::DisplayMode;
use crate::components::typing::TypingPhase;

/// Observable page state at one instant, as printed by `folio run`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageSnapshot {
    /// Virtual time in milliseconds.
    pub now_ms: u64,
    /// Animation frames run so far.
    pub frames: u64,
    pub display_mode: DisplayMode,
    pub language: Option<String>,
    /// Text currently shown by the typing animation.
    pub typed_text: String,
    pub typing_phase: TypingPhase,
    pub carousel: CarouselSnapshot,
    /// Window scroll offset `[x, y]`.
    pub window_scroll: [f64; 2],
    /// Ids of `.fade-in` elements revealed so far, in document order.
    pub revealed: Vec<String>,
    /// Number of `.fade-in` elements still waiting.
    pub pending_reveal: usize,
    pub particle_count: usize,
    pub connector_count: usize,
    /// Messages shown to the user, oldest first.
    pub notices: Vec<String>,
}

/// Carousel part of a [`PageSnapshot`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CarouselSnapshot {
    pub focused_index: usize,
    pub item_count: usize,
    pub auto_armed: bool,
    pub paused: PauseState,
    /// Horizontal scroll of the carousel container.
    pub scroll_x: f64,
}
