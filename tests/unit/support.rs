//! Shared fixtures for unit tests.

use crate::page::document::Document;
use crate::page::model::PageDef;

pub(crate) const PORTFOLIO_JSON: &str = include_str!("../data/portfolio.json");

pub(crate) fn portfolio_def() -> PageDef {
    serde_json::from_str(PORTFOLIO_JSON).expect("fixture parses")
}

pub(crate) fn portfolio_doc() -> Document {
    Document::from_def(&portfolio_def()).expect("fixture builds")
}
