//! Page behaviors. Each component owns its state and is driven by the page session.

pub(crate) mod carousel;
pub(crate) mod connectors;
pub(crate) mod contact;
pub(crate) mod i18n;
pub(crate) mod nav;
pub(crate) mod particles;
pub(crate) mod reveal;
pub(crate) mod theme;
pub(crate) mod typing;
