//! CPU raster surfaces for the decorative canvas layers.

pub(crate) mod canvas;
