// Simulator ties a ParticleField to a drawing surface and drives it from a
// frame source: every frame is one step followed by one render.

use crate::config::{Density, FieldConfig, GrabStyle, LinkStyle};
use crate::error::FieldError;
use crate::field::ParticleField;
use crate::frame::{FrameHandle, FrameSource};
use crate::surface::DrawingSurface;
use crate::utils::{self, Timer};
use rand::Rng;
use std::cell::RefCell;
use std::rc::Rc;
use vecmath::Vector2;

pub struct Simulator<S: DrawingSurface> {
    field: ParticleField,
    surface: S,
    config: FieldConfig,
    pointer: Option<Vector2<f64>>,
}

impl<S: DrawingSurface> Simulator<S> {
    pub fn new(mut surface: S, width: i32, height: i32) -> Result<Self, FieldError> {
        let field = ParticleField::new(width, height)?;
        surface.set_size(field.width(), field.height());
        Ok(Simulator {
            field,
            surface,
            config: FieldConfig::default(),
            pointer: None,
        })
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn set_links(&mut self, links: Option<LinkStyle>) {
        self.config.links = links;
    }

    pub fn set_grab(&mut self, grab: Option<GrabStyle>) {
        self.config.grab = grab;
    }

    pub fn set_density(&mut self, density: Option<Density>) {
        self.config.density = density;
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.config.opacity = opacity;
    }

    // Pointer position in surface pixels, None once it leaves the page
    pub fn set_pointer(&mut self, pointer: Option<Vector2<f64>>) {
        self.pointer = pointer;
    }

    pub fn pointer(&self) -> Option<Vector2<f64>> {
        self.pointer
    }

    // Replaces every particle; the count is remembered for reinitialize()
    pub fn initialize<R: Rng>(&mut self, count: u32, rng: &mut R) {
        self.config.count = count;
        self.field.initialize(count, rng);
    }

    // Rebuilds the particle set for the current bounds, rescaling the count
    // first when a density is configured
    pub fn reinitialize<R: Rng>(&mut self, rng: &mut R) {
        if let Some(density) = self.config.density {
            self.config.count = density.count_for(self.field.width(), self.field.height());
        }
        self.field.initialize(self.config.count, rng);
    }

    pub fn resize(&mut self, width: i32, height: i32) -> bool {
        if !self.field.resize(width, height) {
            utils::warn(&format!(
                "ignoring resize to {}x{}, keeping {}x{}",
                width,
                height,
                self.field.width(),
                self.field.height()
            ));
            return false;
        }
        self.surface.set_size(self.field.width(), self.field.height());
        true
    }

    pub fn step(&mut self) {
        let _timer = Timer::new("Simulator::step");
        self.field.step();
    }

    pub fn render(&mut self) -> Result<(), FieldError> {
        let _timer = Timer::new("Simulator::render");
        self.surface.clear();
        if let Some(links) = self.config.links {
            self.render_links(links)?;
        }
        if let (Some(grab), Some(pointer)) = (self.config.grab, self.pointer) {
            self.render_grab(grab, pointer)?;
        }
        let opacity = self.config.opacity;
        for p in self.field.particles() {
            let color = p.color().with_alpha(opacity);
            self.surface.fill_circle(p.pos, p.radius(), color)?;
        }
        Ok(())
    }

    pub fn tick(&mut self) -> Result<(), FieldError> {
        self.step();
        self.render()
    }

    // Lines fade from links.opacity for touching particles to nothing at links.distance
    fn render_links(&mut self, links: LinkStyle) -> Result<(), FieldError> {
        let particles = self.field.particles();
        for (i, a) in particles.iter().enumerate() {
            for b in &particles[i + 1..] {
                let distance = vecmath::vec2_len(vecmath::vec2_sub(a.pos, b.pos));
                if distance < links.distance {
                    let alpha = links.opacity * (1.0 - distance / links.distance);
                    let color = links.color.with_alpha(alpha);
                    self.surface.stroke_line(a.pos, b.pos, color)?;
                }
            }
        }
        Ok(())
    }

    fn render_grab(&mut self, grab: GrabStyle, pointer: Vector2<f64>) -> Result<(), FieldError> {
        for p in self.field.particles() {
            let distance = vecmath::vec2_len(vecmath::vec2_sub(p.pos, pointer));
            if distance < grab.distance {
                let alpha = grab.opacity * (1.0 - distance / grab.distance);
                self.surface.stroke_line(pointer, p.pos, grab.color.with_alpha(alpha))?;
            }
        }
        Ok(())
    }
}

impl<S: DrawingSurface + 'static> Simulator<S> {
    // Ticks the simulator once per frame from `frames` until the handle is
    // cancelled. Render failures are logged and the loop keeps going.
    pub fn run<F: FrameSource + ?Sized>(
        sim: &Rc<RefCell<Self>>,
        frames: &F,
    ) -> Result<FrameHandle, FieldError> {
        let sim = Rc::clone(sim);
        frames.subscribe(Box::new(move || {
            if let Err(err) = sim.borrow_mut().tick() {
                utils::error(&format!("particle frame failed: {}", err));
            }
        }))
    }
}
