use crate::animation::ease::Ease;
use crate::foundation::color::Color;
use crate::foundation::error::{FolioError, FolioResult};

/// Page-wide tuning. Missing fields fall back to the defaults of a stock portfolio page.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Language applied at startup.
    pub default_language: String,
    /// Animation frame period in milliseconds.
    pub frame_ms: u64,
    /// Visible fraction at which a `.fade-in` element is revealed.
    pub reveal_threshold: f64,
    /// Notice shown after the demo contact form is submitted.
    pub contact_notice: String,
    /// Typing animation timings.
    pub typing: TypingConfig,
    /// Carousel auto-advance and emphasis.
    pub carousel: CarouselConfig,
    /// Smooth scrolling.
    pub scroll: ScrollConfig,
    /// Particle pool.
    pub particles: ParticleConfig,
    /// Section connector curves.
    pub connectors: ConnectorConfig,
    /// Background colors used when compositing the canvas layers.
    pub theme: ThemeColors,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_owned(),
            frame_ms: 16,
            reveal_threshold: 0.18,
            contact_notice: "Thanks — message captured (demo).".to_owned(),
            typing: TypingConfig::default(),
            carousel: CarouselConfig::default(),
            scroll: ScrollConfig::default(),
            particles: ParticleConfig::default(),
            connectors: ConnectorConfig::default(),
            theme: ThemeColors::default(),
        }
    }
}

/// Typing animation timings, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypingConfig {
    /// Delay between typed characters.
    pub type_ms: u64,
    /// Pause once the whole string is shown.
    pub full_pause_ms: u64,
    /// Delay between deleted characters.
    pub delete_ms: u64,
    /// Pause once the display is empty.
    pub empty_pause_ms: u64,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            type_ms: 60,
            full_pause_ms: 1200,
            delete_ms: 30,
            empty_pause_ms: 300,
        }
    }
}

/// Carousel tuning.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CarouselConfig {
    /// Auto-advance period in milliseconds.
    pub period_ms: u64,
    /// Scale applied to the focused item.
    pub focus_scale: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            period_ms: 4800,
            focus_scale: 1.02,
        }
    }
}

/// Smooth scroll tween.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrollConfig {
    /// Tween duration in milliseconds; `0` jumps immediately.
    pub duration_ms: u64,
    /// Easing curve.
    pub ease: Ease,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_ms: 400,
            ease: Ease::InOutCubic,
        }
    }
}

/// Particle pool tuning. Velocities are in pixels per frame.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParticleConfig {
    /// Hard cap on the pool size.
    pub max_count: usize,
    /// Viewport area allotted to one particle.
    pub area_per_particle: f64,
    /// How far outside the viewport a particle may drift before it is recycled.
    pub margin: f64,
    /// Maximum absolute velocity component.
    pub max_speed: f64,
    /// Smallest radius.
    pub size_min: f64,
    /// Largest radius (exclusive).
    pub size_max: f64,
    /// Smallest alpha.
    pub alpha_min: f64,
    /// Halo radius standing in for a shadow blur.
    pub glow_radius: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            max_count: 140,
            area_per_particle: 12_000.0,
            margin: 20.0,
            max_speed: 0.3,
            size_min: 0.5,
            size_max: 2.9,
            alpha_min: 0.4,
            glow_radius: 16.0,
        }
    }
}

/// Connector curve tuning.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConnectorConfig {
    /// Gradient stops at offsets 0, 0.5 and 1.
    pub stops: [Color; 3],
    /// Width of the crisp stroke.
    pub width: f64,
    /// Width of the glow stroke.
    pub glow_width: f64,
    /// Opacity of the glow stroke.
    pub glow_alpha: f32,
    /// Distance the endpoints are pulled inside their sections.
    pub inset: f64,
    /// Vertical offset of the control points.
    pub bend: f64,
}

impl Default for ConnectorConfig {
    fn default() -> Self {
        Self {
            stops: [
                Color::rgba8(0, 255, 242, 0.85),
                Color::rgba8(255, 0, 208, 0.75),
                Color::rgba8(255, 212, 0, 0.85),
            ],
            width: 2.6,
            glow_width: 8.0,
            glow_alpha: 0.25,
            inset: 30.0,
            bend: 40.0,
        }
    }
}

/// Page backgrounds per display mode.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeColors {
    /// Background in dark mode.
    pub dark: Color,
    /// Background in light mode.
    pub light: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            dark: Color::rgba8(11, 15, 26, 1.0),
            light: Color::rgba8(244, 246, 251, 1.0),
        }
    }
}

impl PageConfig {
    pub(crate) fn validate(&self) -> FolioResult<()> {
        if self.default_language.trim().is_empty() {
            return Err(FolioError::validation("config.default_language is empty"));
        }
        if self.frame_ms == 0 {
            return Err(FolioError::validation("config.frame_ms must be > 0"));
        }
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(FolioError::validation(
                "config.reveal_threshold must be in (0, 1]",
            ));
        }
        let t = &self.typing;
        if t.type_ms == 0 || t.delete_ms == 0 {
            return Err(FolioError::validation(
                "config.typing type_ms/delete_ms must be > 0",
            ));
        }
        if t.full_pause_ms == 0 && t.empty_pause_ms == 0 {
            return Err(FolioError::validation(
                "config.typing full_pause_ms and empty_pause_ms must not both be 0",
            ));
        }
        if self.carousel.period_ms == 0 {
            return Err(FolioError::validation("config.carousel.period_ms must be > 0"));
        }
        if !self.carousel.focus_scale.is_finite() || self.carousel.focus_scale <= 0.0 {
            return Err(FolioError::validation(
                "config.carousel.focus_scale must be finite and > 0",
            ));
        }
        let p = &self.particles;
        if !(p.area_per_particle.is_finite() && p.area_per_particle > 0.0) {
            return Err(FolioError::validation(
                "config.particles.area_per_particle must be finite and > 0",
            ));
        }
        if p.size_min < 0.0 || p.size_max < p.size_min {
            return Err(FolioError::validation(
                "config.particles requires 0 <= size_min <= size_max",
            ));
        }
        if !(0.0..=1.0).contains(&p.alpha_min) {
            return Err(FolioError::validation(
                "config.particles.alpha_min must be in [0, 1]",
            ));
        }
        if p.max_speed < 0.0 || p.margin < 0.0 || p.glow_radius < 0.0 {
            return Err(FolioError::validation(
                "config.particles max_speed/margin/glow_radius must be >= 0",
            ));
        }
        let c = &self.connectors;
        if c.width <= 0.0 || c.glow_width <= 0.0 {
            return Err(FolioError::validation(
                "config.connectors widths must be > 0",
            ));
        }
        if !(0.0..=1.0).contains(&c.glow_alpha) {
            return Err(FolioError::validation(
                "config.connectors.glow_alpha must be in [0, 1]",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/config.rs"]
mod tests;
