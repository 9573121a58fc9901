//! Time-based interpolation used by smooth scrolling.

pub(crate) mod ease;
pub(crate) mod scroll;
