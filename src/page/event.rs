/// Input delivered to a running page by its host.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageEvent {
    /// Click on the theme toggle.
    ThemeToggle,
    /// Change of the language select.
    LanguageChange {
        /// Selected language code.
        code: String,
    },
    /// Window resize.
    Resize {
        /// New width.
        width: u32,
        /// New height.
        height: u32,
    },
    /// Page visibility change (tab backgrounded or restored).
    VisibilityChange {
        /// `true` when the page became hidden.
        hidden: bool,
    },
    /// Pointer entered the carousel.
    CarouselPointerEnter,
    /// Pointer left the carousel.
    CarouselPointerLeave,
    /// Click on the carousel's next button.
    CarouselNext,
    /// Click on the carousel's previous button.
    CarouselPrev,
    /// Jump the carousel to an index (wrapped).
    CarouselGoTo {
        /// Target index; negative values count from the end.
        index: i64,
    },
    /// Direct window scroll by the user.
    Scroll {
        /// Horizontal offset.
        x: f64,
        /// Vertical offset.
        y: f64,
    },
    /// Click on a navigation link.
    NavClick {
        /// The link's `href`, e.g. `#about`.
        href: String,
    },
    /// Edit of a contact form field.
    ContactInput {
        /// Field id or `name` attribute.
        field: String,
        /// New value.
        value: String,
    },
    /// Submission of the contact form.
    ContactSubmit,
}

#[cfg(test)]
#[path = "../../tests/unit/page/event.rs"]
mod tests;
