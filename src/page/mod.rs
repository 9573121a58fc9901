//! Page boundary model: JSON description, validation, runtime document and input events.

pub(crate) mod config;
pub(crate) mod document;
pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod validate;

use crate::foundation::error::{FolioError, FolioResult};
use crate::page::model::PageDef;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A loaded page description.
///
/// This is the JSON-facing, human-edited form. It is validated and turned into a live
/// [`crate::Document`] when a [`crate::PageSession`] is created.
#[derive(Debug, Clone)]
pub struct Page {
    def: PageDef,
}

impl Page {
    /// Parse a page from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> FolioResult<Self> {
        let def: PageDef = serde_json::from_reader(r)
            .map_err(|e| FolioError::serde(format!("parse page JSON: {e}")))?;
        Ok(Self { def })
    }

    /// Parse a page from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FolioError::validation(format!("open page JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Wrap an already-built page definition.
    pub fn from_def(def: PageDef) -> Self {
        Self { def }
    }

    /// Check structural invariants and the presence of every element the page wires up.
    pub fn validate(&self) -> FolioResult<()> {
        validate::validate_page(&self.def)
    }

    /// Borrow the underlying definition.
    pub fn def(&self) -> &PageDef {
        &self.def
    }
}
