use crate::foundation::error::{FolioError, FolioResult};
use crate::page::document::{Document, ElementId};
use crate::page::model::names;

/// Visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    /// Dark mode (startup default).
    #[default]
    Dark,
    /// Light mode.
    Light,
}

impl DisplayMode {
    /// The other mode.
    pub fn inverted(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Flips the display mode and mirrors it onto the root container and the toggle control.
#[derive(Debug)]
pub struct ThemeController {
    mode: DisplayMode,
    root: ElementId,
    toggle: ElementId,
}

impl ThemeController {
    /// Wire to `<body>` and `#themeToggle`, then apply dark mode.
    pub fn new(doc: &mut Document) -> FolioResult<Self> {
        let root = doc
            .first_by_tag(names::ROOT_TAG)
            .ok_or_else(|| FolioError::wiring("page has no <body> root container"))?;
        let toggle = doc.require(names::THEME_TOGGLE)?;
        let mut theme = Self {
            mode: DisplayMode::Dark,
            root,
            toggle,
        };
        theme.apply(doc, DisplayMode::Dark);
        Ok(theme)
    }

    /// Current mode.
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// Invert the mode. Not idempotent: every call flips.
    pub fn toggle(&mut self, doc: &mut Document) -> DisplayMode {
        self.apply(doc, self.mode.inverted());
        self.mode
    }

    /// Set `mode` explicitly. The root ends up with exactly one theme class.
    pub fn apply(&mut self, doc: &mut Document, mode: DisplayMode) {
        self.mode = mode;
        let light = mode == DisplayMode::Light;
        doc.toggle_class(self.root, names::LIGHT_THEME, light);
        doc.toggle_class(self.root, names::DARK_THEME, !light);
        doc.toggle_class(self.toggle, names::ACTIVE, light);
        doc.set_attr(
            self.toggle,
            "title",
            if light { "Light mode" } else { "Dark mode" },
        );
        tracing::debug!(?mode, "theme applied");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/theme.rs"]
mod tests;
