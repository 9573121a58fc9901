use crate::foundation::error::{FolioError, FolioResult};
use crate::page::document::Document;
use crate::page::model::{PageDef, names};

/// Validate a page before wiring: structure, configuration and required elements.
pub(crate) fn validate_page(def: &PageDef) -> FolioResult<()> {
    def.config.validate()?;
    let doc = Document::from_def(def)?;
    for e in &def.elements {
        if e.tag.trim().is_empty() {
            return Err(FolioError::validation("element tag must not be empty"));
        }
        if let Some([x, y, w, h]) = e.rect
            && (![x, y, w, h].iter().all(|v| v.is_finite()) || w < 0.0 || h < 0.0)
        {
            return Err(FolioError::validation(format!(
                "element '{}' has a non-finite or negative rect",
                e.id.as_deref().unwrap_or(&e.tag)
            )));
        }
    }
    check_wiring(&doc)
}

pub(crate) fn check_wiring(doc: &Document) -> FolioResult<()> {
    if doc.first_by_tag(names::ROOT_TAG).is_none() {
        return Err(FolioError::wiring("page has no <body> root container"));
    }
    for id in names::REQUIRED_IDS {
        doc.require(id)?;
    }
    let carousel = doc.require(names::CAROUSEL)?;
    let has_items = doc
        .children(carousel)
        .into_iter()
        .any(|c| doc.get(c).has_class(names::PROJECT));
    if !has_items {
        return Err(FolioError::wiring(format!(
            "'#{}' has no '.{}' items",
            names::CAROUSEL,
            names::PROJECT
        )));
    }
    Ok(())
}
