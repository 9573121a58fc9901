use crate::foundation::core::{CubicBez, Point, Viewport};
use crate::foundation::error::FolioResult;
use crate::page::config::ConnectorConfig;
use crate::page::document::{Document, ElementId};
use crate::page::model::names;
use crate::render::canvas::{CpuCanvas, FrameRGBA};

/// Curve linking two consecutive sections, in viewport coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connector {
    /// Upper section.
    pub from: ElementId,
    /// Lower section.
    pub to: ElementId,
    /// Bezier from the upper section's bottom to the lower section's top.
    pub curve: CubicBez,
}

/// Neon curves between adjacent `main > section` elements.
#[derive(Debug)]
pub struct ConnectorRenderer {
    sections: Vec<ElementId>,
    cfg: ConnectorConfig,
    connectors: Vec<Connector>,
    canvas: CpuCanvas,
}

impl ConnectorRenderer {
    /// Collect the sections under `main`. A page without `main` gets no connectors.
    pub fn new(doc: &Document, cfg: ConnectorConfig) -> FolioResult<Self> {
        let sections = match doc.first_by_tag(names::MAIN_TAG) {
            Some(main) => doc
                .children(main)
                .into_iter()
                .filter(|&id| doc.get(id).tag() == names::SECTION_TAG)
                .collect(),
            None => Vec::new(),
        };
        Ok(Self {
            sections,
            cfg,
            connectors: Vec::new(),
            canvas: CpuCanvas::new(doc.viewport())?,
        })
    }

    /// Sections in document order.
    pub fn sections(&self) -> &[ElementId] {
        &self.sections
    }

    /// Recompute every curve from current layout and scroll.
    pub fn update(&mut self, doc: &Document) {
        let scroll = doc.window_scroll();
        let (inset, bend) = (self.cfg.inset, self.cfg.bend);
        self.connectors = self
            .sections
            .windows(2)
            .map(|pair| {
                let upper = doc.document_rect(pair[0]);
                let lower = doc.document_rect(pair[1]);
                let p0 = Point::new(upper.center().x, upper.y1 - inset);
                let p3 = Point::new(lower.center().x, lower.y0 + inset);
                let mid_x = (p0.x + p3.x) / 2.0;
                let p1 = Point::new(mid_x, p0.y - bend);
                let p2 = Point::new(mid_x, p3.y + bend);
                Connector {
                    from: pair[0],
                    to: pair[1],
                    curve: CubicBez::new(p0 - scroll, p1 - scroll, p2 - scroll, p3 - scroll),
                }
            })
            .collect();
    }

    /// Curves from the last `update`.
    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// Match the canvas to a new viewport.
    pub fn resize(&mut self, viewport: Viewport) -> FolioResult<()> {
        self.canvas.resize(viewport)
    }

    /// Clear the canvas and stroke each curve twice: crisp, then a wide translucent glow.
    pub fn render(&mut self) -> FolioResult<()> {
        let connectors = &self.connectors;
        let cfg = self.cfg;
        self.canvas.redraw(|ctx| {
            for c in connectors {
                let path = curve_to_cpu(&c.curve);
                let gradient = vello_cpu::peniko::Gradient::new_linear(
                    point_to_cpu(c.curve.p0),
                    point_to_cpu(c.curve.p3),
                )
                .with_stops(cfg.stops.map(|s| s.to_cpu()));

                ctx.set_paint(gradient.clone());
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(cfg.width));
                ctx.stroke_path(&path);

                ctx.push_opacity_layer(cfg.glow_alpha);
                ctx.set_paint(gradient);
                ctx.set_stroke(vello_cpu::kurbo::Stroke::new(cfg.glow_width));
                ctx.stroke_path(&path);
                ctx.pop_layer();
            }
            Ok(())
        })
    }

    /// Current canvas pixels.
    pub fn frame(&self) -> FrameRGBA {
        self.canvas.snapshot()
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn curve_to_cpu(c: &CubicBez) -> vello_cpu::kurbo::BezPath {
    let mut path = vello_cpu::kurbo::BezPath::new();
    path.move_to(point_to_cpu(c.p0));
    path.curve_to(point_to_cpu(c.p1), point_to_cpu(c.p2), point_to_cpu(c.p3));
    path
}

#[cfg(test)]
#[path = "../../tests/unit/components/connectors.rs"]
mod tests;
