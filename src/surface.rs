// Drawing surfaces the simulator paints onto: the browser canvas, and a
// recorder that keeps the draw calls around for inspection.

use crate::color::Color;
use crate::error::FieldError;
use std::f64::consts::PI;
use vecmath::Vector2;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

pub trait DrawingSurface {
    // Sets the pixel size, wiping whatever was drawn
    fn set_size(&mut self, width: u32, height: u32);
    fn clear(&mut self);
    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
    ) -> Result<(), FieldError>;
    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
    ) -> Result<(), FieldError>;
}

pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasSurface {
    // Grabs the canvas with the given id from the DOM along with its 2d context
    pub fn from_element_id(id: &str) -> Result<Self, FieldError> {
        let document = web_sys::window()
            .ok_or(FieldError::NoWindow)?
            .document()
            .ok_or(FieldError::NoDocument)?;
        let canvas = document
            .get_element_by_id(id)
            .ok_or_else(|| FieldError::CanvasNotFound(id.to_owned()))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| FieldError::NotACanvas(id.to_owned()))?;
        CanvasSurface::new(canvas)
    }

    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, FieldError> {
        let context = canvas
            .get_context("2d")?
            .ok_or(FieldError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| FieldError::ContextUnavailable)?;
        Ok(CanvasSurface { canvas, context })
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}

impl DrawingSurface for CanvasSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn clear(&mut self) {
        self.context.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
    }

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
    ) -> Result<(), FieldError> {
        self.context.begin_path();
        self.context.arc(center[0], center[1], radius, 0.0, 2.0 * PI)?;
        self.context.set_fill_style(&JsValue::from_str(&color.to_css()));
        self.context.fill();
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
    ) -> Result<(), FieldError> {
        self.context.begin_path();
        self.context.move_to(from[0], from[1]);
        self.context.line_to(to[0], to[1]);
        self.context.set_stroke_style(&JsValue::from_str(&color.to_css()));
        self.context.set_line_width(1.0);
        self.context.stroke();
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Circle {
        center: Vector2<f64>,
        radius: f64,
        color: Color,
    },
    Line {
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
    },
}

// Keeps every draw call since the last clear. Useful for snapshot tests.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub width: u32,
    pub height: u32,
    pub clears: usize,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        RecordingSurface::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn circles(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Circle { .. }))
    }

    pub fn lines(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
    }
}

impl DrawingSurface for RecordingSurface {
    fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.commands.clear();
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.commands.clear();
    }

    fn fill_circle(
        &mut self,
        center: Vector2<f64>,
        radius: f64,
        color: Color,
    ) -> Result<(), FieldError> {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn stroke_line(
        &mut self,
        from: Vector2<f64>,
        to: Vector2<f64>,
        color: Color,
    ) -> Result<(), FieldError> {
        self.commands.push(DrawCommand::Line { from, to, color });
        Ok(())
    }
}
