// JavaScript-facing particle background. Owns a simulator painting onto a
// canvas, the random source particles are sampled from, the running frame
// loop and the window listeners for resizing and pointer tracking.

use crate::color::Color;
use crate::config::{Density, GrabStyle, LinkStyle};
use crate::error::FieldError;
use crate::frame::{AnimationFrameSource, FrameHandle};
use crate::simulator::Simulator;
use crate::surface::CanvasSurface;
use crate::utils;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent, Window};

#[wasm_bindgen]
pub struct ParticleBackground {
    sim: Rc<RefCell<Simulator<CanvasSurface>>>,
    rng: Rc<RefCell<StdRng>>,
    window: Window,
    frames: AnimationFrameSource,
    running: Option<FrameHandle>,
    listeners: Vec<(&'static str, Closure<dyn FnMut(Event)>)>,
    fitted: bool,
    tracking_pointer: bool,
}

#[wasm_bindgen]
impl ParticleBackground {
    // Binds to the canvas with the given id and sizes it to the window
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str) -> Result<ParticleBackground, JsValue> {
        utils::set_panic_hook();
        let window = web_sys::window().ok_or(FieldError::NoWindow)?;
        let surface = CanvasSurface::from_element_id(canvas_id)?;
        let (width, height) = viewport_size(&window)?;
        let sim = Simulator::new(surface, width, height)?;
        Ok(ParticleBackground {
            sim: Rc::new(RefCell::new(sim)),
            rng: Rc::new(RefCell::new(StdRng::from_entropy())),
            window,
            frames: AnimationFrameSource::new()?,
            running: None,
            listeners: Vec::new(),
            fitted: false,
            tracking_pointer: false,
        })
    }

    pub fn initialize(&mut self, count: u32) {
        self.sim
            .borrow_mut()
            .initialize(count, &mut *self.rng.borrow_mut());
    }

    // Rebuilds the particles for the current size, using the density if one is set
    pub fn reinitialize(&mut self) {
        self.sim
            .borrow_mut()
            .reinitialize(&mut *self.rng.borrow_mut());
    }

    pub fn resize(&mut self, width: i32, height: i32) -> bool {
        self.sim.borrow_mut().resize(width, height)
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        self.sim.borrow_mut().render()?;
        Ok(())
    }

    pub fn run(&mut self) -> Result<(), JsValue> {
        if self.running.is_some() {
            return Ok(());
        }
        self.running = Some(Simulator::run(&self.sim, &self.frames)?);
        Ok(())
    }

    pub fn stop(&mut self) {
        if let Some(handle) = self.running.take() {
            handle.cancel();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    pub fn particle_count(&self) -> u32 {
        self.sim.borrow().field().len() as u32
    }

    pub fn width(&self) -> u32 {
        self.sim.borrow().field().width()
    }

    pub fn height(&self) -> u32 {
        self.sim.borrow().field().height()
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.sim.borrow_mut().set_opacity(opacity);
    }

    pub fn enable_links(&mut self, distance: f64, opacity: f64) {
        self.sim.borrow_mut().set_links(Some(LinkStyle {
            distance,
            opacity,
            ..LinkStyle::default()
        }));
    }

    // Color packed as 0xRRGGBBAA
    pub fn enable_links_with_color(&mut self, distance: f64, opacity: f64, rgba: u32) {
        self.sim.borrow_mut().set_links(Some(LinkStyle {
            distance,
            opacity,
            color: Color::from_u32(rgba),
        }));
    }

    pub fn disable_links(&mut self) {
        self.sim.borrow_mut().set_links(None);
    }

    pub fn enable_grab(&mut self, distance: f64, opacity: f64) {
        self.sim.borrow_mut().set_grab(Some(GrabStyle {
            distance,
            opacity,
            ..GrabStyle::default()
        }));
    }

    pub fn disable_grab(&mut self) {
        self.sim.borrow_mut().set_grab(None);
    }

    // `value` particles per `area` thousand square pixels from the next rebuild on
    pub fn enable_density(&mut self, value: u32, area: f64) {
        self.sim
            .borrow_mut()
            .set_density(Some(Density { value, area }));
    }

    pub fn disable_density(&mut self) {
        self.sim.borrow_mut().set_density(None);
    }

    // Follows the window size from now on, rebuilding the particle set after
    // every resize
    pub fn fit_to_window(&mut self) -> Result<(), JsValue> {
        if self.fitted {
            return Ok(());
        }
        let (width, height) = viewport_size(&self.window)?;
        self.resize(width, height);

        let sim = self.sim.clone();
        let rng = self.rng.clone();
        let window = self.window.clone();
        self.listen("resize", move |_| match viewport_size(&window) {
            Ok((width, height)) => {
                let mut sim = sim.borrow_mut();
                if sim.resize(width, height) {
                    sim.reinitialize(&mut *rng.borrow_mut());
                }
            }
            Err(err) => utils::warn(&format!("could not read viewport size: {}", err)),
        })?;
        self.fitted = true;
        Ok(())
    }

    // Feeds the mouse position to the grab lines
    pub fn track_pointer(&mut self) -> Result<(), JsValue> {
        if self.tracking_pointer {
            return Ok(());
        }
        let sim = self.sim.clone();
        self.listen("mousemove", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                let mut sim = sim.borrow_mut();
                let rect = sim.surface().canvas().get_bounding_client_rect();
                let x = event.client_x() as f64 - rect.left();
                let y = event.client_y() as f64 - rect.top();
                sim.set_pointer(Some([x, y]));
            }
        })?;

        // mouseout with no related target means the pointer left the window
        let sim = self.sim.clone();
        self.listen("mouseout", move |event| {
            if let Some(event) = event.dyn_ref::<MouseEvent>() {
                if event.related_target().is_none() {
                    sim.borrow_mut().set_pointer(None);
                }
            }
        })?;
        self.tracking_pointer = true;
        Ok(())
    }
}

impl ParticleBackground {
    fn listen(
        &mut self,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<(), FieldError> {
        let listener = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        self.window
            .add_event_listener_with_callback(event, listener.as_ref().unchecked_ref())?;
        self.listeners.push((event, listener));
        Ok(())
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.stop();
        for (event, listener) in self.listeners.drain(..) {
            let removed = self
                .window
                .remove_event_listener_with_callback(event, listener.as_ref().unchecked_ref());
            if let Err(err) = removed {
                utils::warn(&format!("failed to remove {} listener: {:?}", event, err));
            }
        }
    }
}

// Everything in one call: bind, fill, follow the window and start animating
#[wasm_bindgen]
pub fn start(canvas_id: &str, count: u32) -> Result<ParticleBackground, JsValue> {
    let mut background = ParticleBackground::new(canvas_id)?;
    background.fit_to_window()?;
    background.track_pointer()?;
    background.initialize(count);
    background.run()?;
    Ok(background)
}

// Like `start`, with the count scaled to the viewport: `value` particles per
// `area` thousand square pixels, rescaled on every window resize
#[wasm_bindgen]
pub fn start_with_density(
    canvas_id: &str,
    value: u32,
    area: f64,
) -> Result<ParticleBackground, JsValue> {
    let mut background = ParticleBackground::new(canvas_id)?;
    background.enable_density(value, area);
    background.fit_to_window()?;
    background.track_pointer()?;
    background.reinitialize();
    background.run()?;
    Ok(background)
}

fn viewport_size(window: &Window) -> Result<(i32, i32), FieldError> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width as i32, height as i32))
}
