// Errors raised while setting up or drawing the particle field.

use std::fmt;
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    // No global `window` (not running in a browser main thread).
    NoWindow,
    // The window has no document.
    NoDocument,
    // No element with the given id exists.
    CanvasNotFound(String),
    // The element with the given id is not a `<canvas>`.
    NotACanvas(String),
    // The canvas refused to hand out a 2D rendering context.
    ContextUnavailable,
    // Simulation bounds must be strictly positive.
    InvalidBounds { width: i32, height: i32 },
    // A browser API call threw.
    Js(String),
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::NoWindow => write!(f, "No global window available"),
            FieldError::NoDocument => write!(f, "Window has no document"),
            FieldError::CanvasNotFound(id) => write!(f, "No element with id '{}'", id),
            FieldError::NotACanvas(id) => write!(f, "Element '{}' is not a canvas", id),
            FieldError::ContextUnavailable => write!(f, "Canvas has no 2d rendering context"),
            FieldError::InvalidBounds { width, height } => {
                write!(f, "Invalid field bounds {}x{}, both must be positive", width, height)
            }
            FieldError::Js(msg) => write!(f, "Browser call failed: {}", msg),
        }
    }
}

impl std::error::Error for FieldError {}

impl From<JsValue> for FieldError {
    fn from(value: JsValue) -> Self {
        FieldError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<FieldError> for JsValue {
    fn from(err: FieldError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
