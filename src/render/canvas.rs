use std::path::Path;

use crate::foundation::color::Color;
use crate::foundation::core::{BezPath, Viewport};
use crate::foundation::error::{FolioError, FolioResult};

/// A rendered layer as RGBA8 pixels.
///
/// Canvas layers are **premultiplied alpha**; the flag makes this explicit at API boundaries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Opaque frame filled with `color`.
    pub fn solid(width: u32, height: u32, color: Color) -> Self {
        let px = Color { a: 1.0, ..color }.to_rgba8_premul();
        let mut data = vec![0u8; (width as usize) * (height as usize) * 4];
        for chunk in data.chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
        Self {
            width,
            height,
            data,
            premultiplied: true,
        }
    }

    /// Whether every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.data.chunks_exact(4).all(|px| px[3] == 0)
    }

    /// Composite a premultiplied layer of the same size on top of this frame.
    pub fn over(&mut self, src: &FrameRGBA) -> FolioResult<()> {
        if self.width != src.width || self.height != src.height {
            return Err(FolioError::render("layer size does not match frame size"));
        }
        if !self.premultiplied || !src.premultiplied {
            return Err(FolioError::render("compositing expects premultiplied frames"));
        }
        for (d, s) in self.data.chunks_exact_mut(4).zip(src.data.chunks_exact(4)) {
            let inv = 255 - u16::from(s[3]);
            for c in 0..4 {
                d[c] = (u16::from(s[c]) + mul_div255(u16::from(d[c]), inv)).min(255) as u8;
            }
        }
        Ok(())
    }

    /// Write as a straight-alpha PNG.
    pub fn write_png(&self, path: &Path) -> FolioResult<()> {
        let mut data = self.data.clone();
        if self.premultiplied {
            unpremultiply_in_place(&mut data);
        }
        image::save_buffer_with_format(
            path,
            &data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| FolioError::render(format!("write png '{}': {e}", path.display())))
    }
}

fn mul_div255(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            continue;
        }
        for c in px.iter_mut().take(3) {
            *c = ((u16::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

/// Viewport-sized raster surface owned by exactly one renderer.
pub struct CpuCanvas {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
    ctx: Option<vello_cpu::RenderContext>,
}

impl std::fmt::Debug for CpuCanvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuCanvas")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl CpuCanvas {
    /// Transparent canvas covering `viewport`.
    pub fn new(viewport: Viewport) -> FolioResult<Self> {
        let (width, height) = surface_size(viewport)?;
        Ok(Self {
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
            ctx: None,
        })
    }

    /// Reallocate for a new viewport; contents are cleared.
    pub fn resize(&mut self, viewport: Viewport) -> FolioResult<()> {
        let (width, height) = surface_size(viewport)?;
        if width != self.width || height != self.height {
            *self = Self::new(viewport)?;
        } else {
            self.clear();
        }
        Ok(())
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixmap.data_as_u8_slice_mut().fill(0);
    }

    /// Clear, then redraw the whole canvas with `f`.
    pub fn redraw(
        &mut self,
        f: impl FnOnce(&mut vello_cpu::RenderContext) -> FolioResult<()>,
    ) -> FolioResult<()> {
        self.clear();
        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == self.width && ctx.height() == self.height => ctx,
            _ => vello_cpu::RenderContext::new(self.width, self.height),
        };
        ctx.reset();
        f(&mut ctx)?;
        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);
        self.ctx = Some(ctx);
        Ok(())
    }

    /// Copy out the current pixels.
    pub fn snapshot(&self) -> FrameRGBA {
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: self.pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }
}

fn surface_size(viewport: Viewport) -> FolioResult<(u16, u16)> {
    let width: u16 = viewport
        .width
        .try_into()
        .map_err(|_| FolioError::render("canvas width exceeds u16"))?;
    let height: u16 = viewport
        .height
        .try_into()
        .map_err(|_| FolioError::render("canvas height exceeds u16"))?;
    if width == 0 || height == 0 {
        return Err(FolioError::render("canvas must not be empty"));
    }
    Ok((width, height))
}

pub(crate) fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: kurbo::Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/canvas.rs"]
mod tests;
