use crate::animation::scroll::{ScrollAnimator, ScrollTarget};
use crate::components::carousel::{Carousel, PauseSource};
use crate::components::connectors::ConnectorRenderer;
use crate::components::contact::ContactForm;
use crate::components::i18n::LocalizationSwitcher;
use crate::components::nav::NavLinks;
use crate::components::particles::ParticleField;
use crate::components::reveal::RevealOnScroll;
use crate::components::theme::{DisplayMode, ThemeController};
use crate::components::typing::TypingAnimator;
use crate::foundation::core::{Vec2, Viewport};
use crate::foundation::error::FolioResult;
use crate::page::Page;
use crate::page::config::PageConfig;
use crate::page::document::Document;
use crate::page::event::PageEvent;
use crate::page::model::names;
use crate::render::canvas::FrameRGBA;
use crate::runtime::scheduler::{Fired, Scheduler, TimerKind};
use crate::session::script::Script;
use crate::session::snapshot::{CarouselSnapshot, PageSnapshot};

/// Session options that are not part of the page itself.
#[derive(Clone, Copy, Debug, Default)]
pub struct PageSessionOpts {
    /// Rasterize both canvases on every animation frame instead of on demand.
    pub rasterize_every_frame: bool,
}

/// Which canvas layers [`PageSession::render`] returns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    /// Theme background with both canvases composited on top.
    #[default]
    All,
    /// Particle canvas alone, transparent background.
    Particles,
    /// Connector canvas alone, transparent background.
    Connectors,
}

/// A running page.
///
/// Owns the document, the virtual clock and every component. Time only moves through
/// [`PageSession::advance_to`]; events are applied at the current time.
#[derive(Debug)]
pub struct PageSession {
    cfg: PageConfig,
    opts: PageSessionOpts,
    doc: Document,
    sched: Scheduler,
    scroll: ScrollAnimator,
    theme: ThemeController,
    i18n: LocalizationSwitcher,
    typing: TypingAnimator,
    reveal: RevealOnScroll,
    carousel: Carousel,
    particles: ParticleField,
    connectors: ConnectorRenderer,
    nav: NavLinks,
    contact: ContactForm,
    next_frame_ms: u64,
    frames: u64,
}

impl PageSession {
    /// Validate `page`, wire every component and run the startup sequence at time zero.
    pub fn new(page: &Page, opts: PageSessionOpts) -> FolioResult<Self> {
        page.validate()?;
        let def = page.def();
        let cfg = def.config.clone();

        let mut doc = Document::from_def(def)?;
        let mut sched = Scheduler::new();
        let mut scroll = ScrollAnimator::new(cfg.scroll);

        let theme = ThemeController::new(&mut doc)?;
        let mut i18n = LocalizationSwitcher::new(&doc)?;
        i18n.set_language(&mut doc, &cfg.default_language);

        let mut typing = TypingAnimator::new(&doc, cfg.typing)?;
        typing.start(&mut sched);

        let reveal = RevealOnScroll::new(&doc, cfg.reveal_threshold);

        let mut carousel = Carousel::new(&doc, cfg.carousel)?;
        carousel.show(&mut doc, &mut scroll, 0);
        carousel.start_auto(&mut sched);

        let particles = ParticleField::new(doc.viewport(), def.seed, cfg.particles)?;
        let connectors = ConnectorRenderer::new(&doc, cfg.connectors)?;
        let nav = NavLinks::new(&doc);
        let contact = ContactForm::new(&doc, cfg.contact_notice.clone())?;

        tracing::debug!(
            elements = doc.len(),
            particles = particles.particles().len(),
            sections = connectors.sections().len(),
            "page session ready"
        );

        Ok(Self {
            cfg,
            opts,
            doc,
            sched,
            scroll,
            theme,
            i18n,
            typing,
            reveal,
            carousel,
            particles,
            connectors,
            nav,
            contact,
            next_frame_ms: 0,
            frames: 0,
        })
    }

    /// Current virtual time in milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.sched.now_ms()
    }

    /// Animation frames run so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn config(&self) -> &PageConfig {
        &self.cfg
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.sched
    }

    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    pub fn localization(&self) -> &LocalizationSwitcher {
        &self.i18n
    }

    pub fn typing(&self) -> &TypingAnimator {
        &self.typing
    }

    pub fn reveal(&self) -> &RevealOnScroll {
        &self.reveal
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn particles(&self) -> &ParticleField {
        &self.particles
    }

    pub fn connectors(&self) -> &ConnectorRenderer {
        &self.connectors
    }

    pub fn scroll(&self) -> &ScrollAnimator {
        &self.scroll
    }

    /// Apply one host event at the current time.
    #[tracing::instrument(skip(self), fields(now_ms = self.sched.now_ms()))]
    pub fn dispatch(&mut self, event: PageEvent) -> FolioResult<()> {
        let now = self.sched.now_ms();
        match event {
            PageEvent::ThemeToggle => {
                self.theme.toggle(&mut self.doc);
            }
            PageEvent::LanguageChange { code } => {
                self.i18n.set_language(&mut self.doc, &code);
            }
            PageEvent::Resize { width, height } => {
                let viewport = Viewport::new(width, height)?;
                self.doc.set_viewport(viewport);
                self.particles.resize(viewport)?;
                self.connectors.resize(viewport)?;
                self.connectors.update(&self.doc);
            }
            PageEvent::VisibilityChange { hidden } => {
                self.carousel.set_paused(PauseSource::Hidden, hidden, &mut self.sched);
            }
            PageEvent::CarouselPointerEnter => {
                self.carousel.set_paused(PauseSource::Hover, true, &mut self.sched);
            }
            PageEvent::CarouselPointerLeave => {
                self.carousel.set_paused(PauseSource::Hover, false, &mut self.sched);
            }
            PageEvent::CarouselNext => self.carousel.next(&mut self.doc, &mut self.scroll, now),
            PageEvent::CarouselPrev => {
                self.carousel.previous(&mut self.doc, &mut self.scroll, now);
            }
            PageEvent::CarouselGoTo { index } => {
                self.carousel.go_to(&mut self.doc, &mut self.scroll, now, index);
            }
            PageEvent::Scroll { x, y } => {
                self.scroll.cancel(ScrollTarget::Window);
                self.doc.set_window_scroll(Vec2::new(x, y));
            }
            PageEvent::NavClick { href } => {
                self.nav.click(&self.doc, &mut self.scroll, now, &href);
            }
            PageEvent::ContactInput { field, value } => {
                if !self.contact.input(&mut self.doc, &field, &value) {
                    tracing::debug!(field, "unknown contact field");
                }
            }
            PageEvent::ContactSubmit => self.contact.submit(&mut self.doc),
        }
        Ok(())
    }

    /// Run timers and animation frames up to and including `target_ms`.
    ///
    /// Events are taken earliest first. A timer due at the same instant as a frame fires
    /// before that frame.
    #[tracing::instrument(skip(self))]
    pub fn advance_to(&mut self, target_ms: u64) -> FolioResult<()> {
        loop {
            let timer = self.sched.next_due_ms().filter(|&t| t <= target_ms);
            let frame = Some(self.next_frame_ms).filter(|&f| f <= target_ms);
            match (timer, frame) {
                (None, None) => break,
                (Some(t), Some(f)) if f < t => self.frame_at(f)?,
                (None, Some(f)) => self.frame_at(f)?,
                (Some(t), _) => {
                    if let Some(fired) = self.sched.pop_due(t) {
                        self.on_timer(fired);
                    }
                }
            }
        }
        self.sched.advance_to(target_ms);
        Ok(())
    }

    /// Advance by `delta_ms` from the current time.
    pub fn advance_by(&mut self, delta_ms: u64) -> FolioResult<()> {
        self.advance_to(self.now_ms().saturating_add(delta_ms))
    }

    /// Apply `script` in time order, then advance to `until_ms`. Steps after `until_ms` are
    /// not applied.
    pub fn run_script(&mut self, script: &Script, until_ms: u64) -> FolioResult<()> {
        for step in script.steps() {
            if step.at_ms > until_ms {
                break;
            }
            self.advance_to(step.at_ms)?;
            self.dispatch(step.event.clone())?;
        }
        self.advance_to(until_ms)
    }

    fn on_timer(&mut self, fired: Fired) {
        let handled = match fired.kind {
            TimerKind::Typing => self.typing.on_timer(
                fired.id,
                self.i18n.typed_source(),
                &mut self.doc,
                &mut self.sched,
            ),
            TimerKind::CarouselAuto => {
                self.carousel
                    .on_timer(fired.id, &mut self.doc, &mut self.scroll, fired.at_ms)
            }
        };
        if !handled {
            tracing::debug!(?fired, "stale timer dropped");
        }
    }

    fn frame_at(&mut self, now_ms: u64) -> FolioResult<()> {
        self.sched.advance_to(now_ms);
        self.scroll.advance(&mut self.doc, now_ms);
        self.particles.update();
        self.connectors.update(&self.doc);
        self.reveal.check(&mut self.doc);
        if self.opts.rasterize_every_frame {
            self.particles.render()?;
            self.connectors.render()?;
        }
        self.frames += 1;
        self.next_frame_ms = now_ms.saturating_add(self.cfg.frame_ms);
        Ok(())
    }

    /// Rasterize the decorative canvases for the current state.
    pub fn render(&mut self, layer: Layer) -> FolioResult<FrameRGBA> {
        match layer {
            Layer::Particles => {
                self.particles.render()?;
                Ok(self.particles.frame())
            }
            Layer::Connectors => {
                self.connectors.render()?;
                Ok(self.connectors.frame())
            }
            Layer::All => {
                self.particles.render()?;
                self.connectors.render()?;
                let viewport = self.doc.viewport();
                let background = match self.theme.mode() {
                    DisplayMode::Dark => self.cfg.theme.dark,
                    DisplayMode::Light => self.cfg.theme.light,
                };
                let mut out = FrameRGBA::solid(viewport.width, viewport.height, background);
                out.over(&self.particles.frame())?;
                out.over(&self.connectors.frame())?;
                Ok(out)
            }
        }
    }

    /// Observable state at the current time.
    pub fn snapshot(&self) -> PageSnapshot {
        let doc = &self.doc;
        let typed = doc
            .by_id(names::TYPED_TEXT)
            .map(|id| doc.get(id).text().to_owned())
            .unwrap_or_default();
        let revealed = doc
            .with_class(names::FADE_IN)
            .into_iter()
            .filter(|&id| doc.get(id).has_class(names::APPEAR))
            .map(|id| {
                let el = doc.get(id);
                el.id().unwrap_or(el.tag()).to_owned()
            })
            .collect();
        let scroll = doc.window_scroll();
        PageSnapshot {
            now_ms: self.now_ms(),
            frames: self.frames,
            display_mode: self.theme.mode(),
            language: self.i18n.language().map(str::to_owned),
            typed_text: typed,
            typing_phase: self.typing.phase(),
            carousel: CarouselSnapshot {
                focused_index: self.carousel.focused_index(),
                item_count: self.carousel.item_count(),
                auto_armed: self.carousel.is_auto_armed(),
                paused: self.carousel.pauses(),
                scroll_x: doc.get(self.carousel.container()).scroll().x,
            },
            window_scroll: [scroll.x, scroll.y],
            revealed,
            pending_reveal: self.reveal.pending().len(),
            particle_count: self.particles.particles().len(),
            connector_count: self.connectors.connectors().len(),
            notices: doc.notices().to_vec(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/page_session.rs"]
mod tests;
