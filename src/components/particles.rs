use crate::foundation::color::Color;
use crate::foundation::core::{Point, Vec2, Viewport};
use crate::foundation::error::FolioResult;
use crate::foundation::rng::Rng64;
use crate::page::config::ParticleConfig;
use crate::render::canvas::{CpuCanvas, FrameRGBA};

/// One drifting point. Velocity is in pixels per frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Position in viewport coordinates.
    pub pos: Point,
    /// Displacement per frame.
    pub vel: Vec2,
    /// Radius.
    pub size: f64,
    /// Hue in degrees, `[0, 360)`.
    pub hue: f64,
    /// Opacity.
    pub alpha: f64,
}

/// Pool size for a viewport: one particle per `area_per_particle`, capped at `max_count`.
pub fn pool_size(viewport: Viewport, cfg: &ParticleConfig) -> usize {
    let by_area = (viewport.area() as f64 / cfg.area_per_particle).floor() as usize;
    by_area.min(cfg.max_count)
}

/// Fixed pool of drifting particles on its own canvas.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    viewport: Viewport,
    cfg: ParticleConfig,
    rng: Rng64,
    canvas: CpuCanvas,
}

impl ParticleField {
    /// Fill a fresh pool for `viewport`.
    pub fn new(viewport: Viewport, seed: u64, cfg: ParticleConfig) -> FolioResult<Self> {
        let mut field = Self {
            particles: Vec::new(),
            viewport,
            cfg,
            rng: Rng64::new(seed),
            canvas: CpuCanvas::new(viewport)?,
        };
        field.populate();
        Ok(field)
    }

    fn populate(&mut self) {
        let n = pool_size(self.viewport, &self.cfg);
        self.particles.clear();
        self.particles.reserve(n);
        for _ in 0..n {
            let p = self.spawn();
            self.particles.push(p);
        }
        tracing::debug!(count = n, "particle pool created");
    }

    fn spawn(&mut self) -> Particle {
        let w = f64::from(self.viewport.width);
        let h = f64::from(self.viewport.height);
        let c = &self.cfg;
        let (speed, size_min, size_max, alpha_min) = (c.max_speed, c.size_min, c.size_max, c.alpha_min);
        Particle {
            pos: Point::new(self.rng.range(0.0, w), self.rng.range(0.0, h)),
            size: self.rng.range(size_min, size_max),
            vel: Vec2::new(
                self.rng.range(-speed, speed),
                self.rng.range(-speed, speed),
            ),
            hue: self.rng.range(0.0, 360.0),
            alpha: self.rng.range(alpha_min, 1.0),
        }
    }

    /// Discard the pool and build a new one sized for `viewport`.
    pub fn resize(&mut self, viewport: Viewport) -> FolioResult<()> {
        self.canvas.resize(viewport)?;
        self.viewport = viewport;
        self.populate();
        Ok(())
    }

    /// Integrate one frame; particles that drift past the margin are recycled in place.
    pub fn update(&mut self) {
        let m = self.cfg.margin;
        let max_x = f64::from(self.viewport.width) + m;
        let max_y = f64::from(self.viewport.height) + m;
        for i in 0..self.particles.len() {
            let p = &mut self.particles[i];
            p.pos += p.vel;
            let out = p.pos.x < -m || p.pos.x > max_x || p.pos.y < -m || p.pos.y > max_y;
            if out {
                self.particles[i] = self.spawn();
            }
        }
    }

    /// Current pool.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    pub(crate) fn set_particle(&mut self, index: usize, particle: Particle) {
        self.particles[index] = particle;
    }

    /// Clear the canvas and draw every particle with its halo.
    pub fn render(&mut self) -> FolioResult<()> {
        let particles = &self.particles;
        let glow = self.cfg.glow_radius;
        self.canvas.redraw(|ctx| {
            for p in particles {
                let color = Color::hsla(p.hue, 1.0, 0.6, p.alpha);
                if glow > 0.0 {
                    let halo = Color {
                        a: p.alpha * 0.18,
                        ..color
                    };
                    ctx.set_paint(halo.to_cpu());
                    ctx.fill_path(&circle(p.pos, p.size + glow * 0.25));
                }
                ctx.set_paint(color.to_cpu());
                ctx.fill_path(&circle(p.pos, p.size));
            }
            Ok(())
        })
    }

    /// Current canvas pixels.
    pub fn frame(&self) -> FrameRGBA {
        self.canvas.snapshot()
    }
}

fn circle(center: Point, radius: f64) -> vello_cpu::kurbo::BezPath {
    use kurbo::Shape as _;

    let path = kurbo::Circle::new(center, radius).to_path(0.1);
    crate::render::canvas::bezpath_to_cpu(&path)
}

#[cfg(test)]
#[path = "../../tests/unit/components/particles.rs"]
mod tests;
