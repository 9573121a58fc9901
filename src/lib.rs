//! Folio is a headless runtime for a single-page personal portfolio.
//!
//! A page is described by JSON ([`PageDef`]): elements with classes, localized attributes and
//! layout rectangles, plus timing and tuning ([`PageConfig`]). A [`PageSession`] wires the
//! page behaviors onto that document and drives them on a virtual clock:
//!
//! - theme toggling ([`ThemeController`]) and language switching ([`LocalizationSwitcher`])
//! - a typing animation ([`TypingAnimator`]) and scroll-triggered reveals ([`RevealOnScroll`])
//! - a project carousel with auto-advance ([`Carousel`])
//! - two decorative canvases, drifting particles ([`ParticleField`]) and neon section
//!   connectors ([`ConnectorRenderer`]), rasterized on the CPU
//! - smooth in-page navigation ([`NavLinks`]) and a demo contact form ([`ContactForm`])
//!
//! Host input arrives as [`PageEvent`]s. Time only moves through
//! [`PageSession::advance_to`], so runs are deterministic for a given page, seed and script.
//!
//! Canvas layers are **premultiplied RGBA8**.
#![forbid(unsafe_code)]

mod animation;
mod components;
mod foundation;
mod page;
mod render;
mod runtime;
mod session;

pub use animation::ease::Ease;
pub use animation::scroll::{ScrollAnimator, ScrollTarget, ScrollTween};
pub use components::carousel::{Carousel, PauseSource, PauseState};
pub use components::connectors::{Connector, ConnectorRenderer};
pub use components::contact::ContactForm;
pub use components::i18n::LocalizationSwitcher;
pub use components::nav::NavLinks;
pub use components::particles::{Particle, ParticleField, pool_size};
pub use components::reveal::RevealOnScroll;
pub use components::theme::{DisplayMode, ThemeController};
pub use components::typing::{TypingAnimator, TypingPhase};
pub use foundation::color::Color;
pub use foundation::core::{BezPath, CubicBez, Point, Rect, Vec2, Viewport};
pub use foundation::error::{FolioError, FolioResult};
pub use foundation::rng::Rng64;
pub use page::Page;
pub use page::config::{
    CarouselConfig, ConnectorConfig, PageConfig, ParticleConfig, ScrollConfig, ThemeColors,
    TypingConfig,
};
pub use page::document::{Document, Element, ElementId};
pub use page::event::PageEvent;
pub use page::model::{ElementDef, PageDef};
pub use render::canvas::{CpuCanvas, FrameRGBA};
pub use runtime::scheduler::{Fired, Scheduler, TimerId, TimerKind};
pub use session::page_session::{Layer, PageSession, PageSessionOpts};
pub use session::script::{Script, ScriptStep};
pub use session::snapshot::{CarouselSnapshot, PageSnapshot};

#[cfg(test)]
#[path = "../tests/unit/support.rs"]
mod test_support;
