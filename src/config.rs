// Runtime options for the particle field. Everything else is a build-time
// constant on Particle and Color.

use crate::color::Color;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LinkStyle {
    // Pairs closer than this many pixels get a line
    pub distance: f64,
    // Alpha of a line between two coincident particles, fading to 0 at `distance`
    pub opacity: f64,
    pub color: Color,
}

impl LinkStyle {
    pub const DEFAULT_DISTANCE: f64 = 150.0;
    pub const DEFAULT_OPACITY: f64 = 0.4;
}

impl Default for LinkStyle {
    fn default() -> Self {
        LinkStyle {
            distance: LinkStyle::DEFAULT_DISTANCE,
            opacity: LinkStyle::DEFAULT_OPACITY,
            color: Color::PALETTE[0],
        }
    }
}

// Lines from the mouse pointer to every particle within `distance`
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GrabStyle {
    pub distance: f64,
    pub opacity: f64,
    pub color: Color,
}

impl GrabStyle {
    pub const DEFAULT_DISTANCE: f64 = 100.0;
    pub const DEFAULT_OPACITY: f64 = 1.0;
}

impl Default for GrabStyle {
    fn default() -> Self {
        GrabStyle {
            distance: GrabStyle::DEFAULT_DISTANCE,
            opacity: GrabStyle::DEFAULT_OPACITY,
            color: Color::PALETTE[0],
        }
    }
}

// Scales the particle count with the viewport: `value` particles for every
// `area` thousand square pixels
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Density {
    pub value: u32,
    pub area: f64,
}

impl Density {
    pub const DEFAULT_VALUE: u32 = 120;
    pub const DEFAULT_AREA: f64 = 800.0;

    pub fn count_for(&self, width: u32, height: u32) -> u32 {
        if self.area <= 0.0 {
            return self.value;
        }
        let thousands_of_pixels = width as f64 * height as f64 / 1000.0;
        (thousands_of_pixels * self.value as f64 / self.area).round() as u32
    }
}

impl Default for Density {
    fn default() -> Self {
        Density {
            value: Density::DEFAULT_VALUE,
            area: Density::DEFAULT_AREA,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub count: u32,
    // Alpha every particle is drawn with
    pub opacity: f64,
    pub links: Option<LinkStyle>,
    pub grab: Option<GrabStyle>,
    // When set, overrides `count` whenever the particles are rebuilt for a new viewport
    pub density: Option<Density>,
}

impl FieldConfig {
    pub const DEFAULT_COUNT: u32 = 60;
    pub const DEFAULT_OPACITY: f64 = 0.7;
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            count: FieldConfig::DEFAULT_COUNT,
            opacity: FieldConfig::DEFAULT_OPACITY,
            links: None,
            grab: Some(GrabStyle::default()),
            density: None,
        }
    }
}
