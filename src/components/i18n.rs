use crate::foundation::error::FolioResult;
use crate::page::document::{Document, ElementId};
use crate::page::model::names;

/// Swaps visible text for the selected language.
///
/// Lookups that miss (absent or empty attribute) keep whatever text is already shown.
#[derive(Debug)]
pub struct LocalizationSwitcher {
    typed: ElementId,
    blocks: [ElementId; 2],
    headings: Vec<ElementId>,
    select: ElementId,
    language: Option<String>,
    typed_source: String,
}

impl LocalizationSwitcher {
    /// Wire to the hero, tagline, about text, the language select and every
    /// element carrying `data-lang-en`.
    pub fn new(doc: &Document) -> FolioResult<Self> {
        let typed = doc.require(names::TYPED_TEXT)?;
        let typed_source = lookup(doc, typed, "data-en").unwrap_or_default().to_owned();
        Ok(Self {
            typed,
            blocks: [doc.require(names::TAGLINE)?, doc.require(names::ABOUT_TEXT)?],
            headings: doc.with_attr(names::HEADING_MARKER),
            select: doc.require(names::LANG_SELECT)?,
            language: None,
            typed_source,
        })
    }

    /// Apply `code` to every localized element.
    pub fn set_language(&mut self, doc: &mut Document, code: &str) {
        let data_key = format!("data-{code}");
        if let Some(src) = lookup(doc, self.typed, &data_key) {
            self.typed_source = src.to_owned();
        }
        for id in self.blocks {
            if let Some(text) = lookup(doc, id, &data_key) {
                let text = text.to_owned();
                doc.set_text(id, text);
            }
        }
        let heading_key = format!("data-lang-{code}");
        for &id in &self.headings {
            if let Some(text) = lookup(doc, id, &heading_key) {
                let text = text.to_owned();
                doc.set_text(id, text);
            }
        }
        doc.set_attr(self.select, names::VALUE, code);
        self.language = Some(code.to_owned());
        tracing::debug!(code, "language applied");
    }

    /// Most recently selected language.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// String the typing animation types, in the latest language that defines one.
    pub fn typed_source(&self) -> &str {
        &self.typed_source
    }
}

fn lookup<'a>(doc: &'a Document, id: ElementId, key: &str) -> Option<&'a str> {
    doc.get(id).attr(key).filter(|s| !s.is_empty())
}

#[cfg(test)]
#[path = "../../tests/unit/components/i18n.rs"]
mod tests;
