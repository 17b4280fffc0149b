// The particle set and the viewport it drifts in.
//
// `ParticleField` knows nothing about drawing; it only owns the particles
// and applies the per-frame update rule.

use crate::error::FieldError;
use crate::particle::Particle;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct ParticleField {
    width: u32,
    height: u32,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(width: i32, height: i32) -> Result<ParticleField, FieldError> {
        if width <= 0 || height <= 0 {
            return Err(FieldError::InvalidBounds { width, height });
        }
        Ok(ParticleField {
            width: width as u32,
            height: height as u32,
            particles: Vec::new(),
        })
    }

    #[cfg(test)]
    pub(crate) fn with_particles(width: u32, height: u32, particles: Vec<Particle>) -> Self {
        ParticleField {
            width,
            height,
            particles,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    // Discards the current particles and samples `count` new ones inside
    // the current bounds.
    pub fn initialize<R: Rng>(&mut self, count: u32, rng: &mut R) {
        let (width, height) = (self.width as f64, self.height as f64);
        self.particles = (0..count)
            .map(|_| Particle::random(rng, width, height))
            .collect();
    }

    // Updates the bounds. Particles are left where they are and find their
    // way back in through the bounce rule. Returns `false` and changes
    // nothing when either dimension is not positive.
    pub fn resize(&mut self, width: i32, height: i32) -> bool {
        if width <= 0 || height <= 0 {
            return false;
        }
        self.width = width as u32;
        self.height = height as u32;
        true
    }

    pub fn step(&mut self) {
        let (width, height) = (self.width as f64, self.height as f64);
        for particle in &mut self.particles {
            particle.advance(width, height);
        }
    }
}
