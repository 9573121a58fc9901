use crate::foundation::error::FolioResult;
use crate::page::document::{Document, ElementId};
use crate::page::model::names;

/// Demo contact form: input is collected, then discarded on submit.
#[derive(Debug)]
pub struct ContactForm {
    form: ElementId,
    fields: Vec<ElementId>,
    notice: String,
}

impl ContactForm {
    /// Wire to `#contactForm`; fields are its children carrying a `name` attribute.
    pub fn new(doc: &Document, notice: impl Into<String>) -> FolioResult<Self> {
        let form = doc.require(names::CONTACT_FORM)?;
        let fields = doc
            .children(form)
            .into_iter()
            .filter(|&id| doc.get(id).attr(names::NAME).is_some())
            .collect();
        Ok(Self {
            form,
            fields,
            notice: notice.into(),
        })
    }

    pub fn form(&self) -> ElementId {
        self.form
    }

    pub fn fields(&self) -> &[ElementId] {
        &self.fields
    }

    /// Set a field's value. `field` matches an element id or a `name` attribute.
    pub fn input(&self, doc: &mut Document, field: &str, value: &str) -> bool {
        let found = self.fields.iter().copied().find(|&id| {
            let el = doc.get(id);
            el.id() == Some(field) || el.attr(names::NAME) == Some(field)
        });
        match found {
            Some(id) => {
                doc.set_attr(id, names::VALUE, value);
                true
            }
            None => false,
        }
    }

    /// Swallow the submission: reset every field and post the notice.
    pub fn submit(&self, doc: &mut Document) {
        for &id in &self.fields {
            doc.set_attr(id, names::VALUE, "");
        }
        doc.push_notice(self.notice.clone());
        tracing::debug!(fields = self.fields.len(), "contact form reset");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/components/contact.rs"]
mod tests;
