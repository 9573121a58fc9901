use crate::foundation::error::{FolioError, FolioResult};

pub use kurbo::{BezPath, CubicBez, Point, Rect, Vec2};

/// Visible window dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Viewport {
    /// Create a validated viewport. Both sides must be non-zero and fit a raster surface.
    pub fn new(width: u32, height: u32) -> FolioResult<Self> {
        let vp = Self { width, height };
        vp.validate()?;
        Ok(vp)
    }

    pub(crate) fn validate(self) -> FolioResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FolioError::validation("viewport width/height must be > 0"));
        }
        if self.width > u32::from(u16::MAX) || self.height > u32::from(u16::MAX) {
            return Err(FolioError::validation(
                "viewport width/height must fit in u16",
            ));
        }
        Ok(())
    }

    /// Pixel area `width * height`.
    pub fn area(self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Viewport rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Fraction of `target` covered by `clip`, in `[0, 1]`.
///
/// Degenerate (zero-area) targets count as fully visible when they touch `clip` at all.
pub(crate) fn visible_fraction(target: Rect, clip: Rect) -> f64 {
    let area = target.area();
    let hit = target.intersect(clip);
    let touches = target.x0 <= clip.x1
        && target.x1 >= clip.x0
        && target.y0 <= clip.y1
        && target.y1 >= clip.y0;
    if area <= 0.0 {
        return if touches { 1.0 } else { 0.0 };
    }
    if !touches {
        return 0.0;
    }
    (hit.area() / area).clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
