//! Live page: component wiring, event dispatch, virtual time and layer rendering.

pub(crate) mod page_session;
pub(crate) mod script;
pub(crate) mod snapshot;
