use std::collections::BTreeMap;

use crate::foundation::core::{Rect, Viewport};
use crate::page::config::PageConfig;

/// Element ids, classes and attributes the page runtime wires itself to.
pub(crate) mod names {
    pub(crate) const THEME_TOGGLE: &str = "themeToggle";
    pub(crate) const LANG_SELECT: &str = "langSelect";
    pub(crate) const TYPED_TEXT: &str = "typed-text";
    pub(crate) const TAGLINE: &str = "tagline";
    pub(crate) const ABOUT_TEXT: &str = "aboutText";
    pub(crate) const CAROUSEL: &str = "projectCarousel";
    pub(crate) const CONTACT_FORM: &str = "contactForm";
    pub(crate) const PARTICLES_CANVAS: &str = "particles";
    pub(crate) const CONNECTORS_CANVAS: &str = "neon-lines";

    pub(crate) const REQUIRED_IDS: [&str; 9] = [
        THEME_TOGGLE,
        LANG_SELECT,
        TYPED_TEXT,
        TAGLINE,
        ABOUT_TEXT,
        CAROUSEL,
        CONTACT_FORM,
        PARTICLES_CANVAS,
        CONNECTORS_CANVAS,
    ];

    pub(crate) const ROOT_TAG: &str = "body";
    pub(crate) const MAIN_TAG: &str = "main";
    pub(crate) const SECTION_TAG: &str = "section";

    pub(crate) const FADE_IN: &str = "fade-in";
    pub(crate) const APPEAR: &str = "appear";
    pub(crate) const PROJECT: &str = "project";
    pub(crate) const NAV_LINK: &str = "nav-link";
    pub(crate) const DARK_THEME: &str = "dark-theme";
    pub(crate) const LIGHT_THEME: &str = "light-theme";
    pub(crate) const ACTIVE: &str = "active";

    pub(crate) const HEADING_MARKER: &str = "data-lang-en";
    pub(crate) const VALUE: &str = "value";
    pub(crate) const NAME: &str = "name";
    pub(crate) const HREF: &str = "href";
}

/// JSON description of a page.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageDef {
    /// Initial window size.
    pub viewport: Viewport,
    /// Seed for the particle generator.
    #[serde(default)]
    pub seed: u64,
    /// Timings and tuning; every field has a default.
    #[serde(default)]
    pub config: PageConfig,
    /// Elements in document order.
    pub elements: Vec<ElementDef>,
}

/// One element of the page.
///
/// `rect` is `[x, y, width, height]` relative to the parent's content box; top-level elements
/// are placed in document coordinates and their union defines the scrollable document.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ElementDef {
    /// Optional unique id.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Tag name such as `section` or `button`.
    pub tag: String,
    /// CSS classes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<String>,
    /// Initial text content.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Attributes, including `data-<lang>` / `data-lang-<lang>` localized strings.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    /// Layout box.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rect: Option<[f64; 4]>,
    /// Id of the parent element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
}

impl ElementDef {
    pub(crate) fn layout_rect(&self) -> Rect {
        match self.rect {
            Some([x, y, w, h]) => Rect::new(x, y, x + w, y + h),
            None => Rect::ZERO,
        }
    }
}
