// Particle struct keeping track of position, velocity, radius and color.
// Radius and color are fixed once created; only position and velocity move.

use crate::color::Color;
use rand::Rng;
use std::ops::Range;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    radius: f64,
    color: Color,
}

impl Particle {
    pub const RADIUS_RANGE: Range<f64> = 0.5..2.5;
    // Each velocity component is drawn from [-SPEED_LIMIT, SPEED_LIMIT)
    pub const SPEED_LIMIT: f64 = 0.3;

    pub fn new(pos: Vector2<f64>, vel: Vector2<f64>, radius: f64, color: Color) -> Particle {
        Particle {
            pos,
            vel,
            radius,
            color,
        }
    }

    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Particle {
        let pos = [rng.gen_range(0.0, width), rng.gen_range(0.0, height)];
        let radius = rng.gen_range(Particle::RADIUS_RANGE.start, Particle::RADIUS_RANGE.end);
        let color = Color::PALETTE[rng.gen_range(0, Color::PALETTE.len())];
        let vel = [
            rng.gen_range(-Particle::SPEED_LIMIT, Particle::SPEED_LIMIT),
            rng.gen_range(-Particle::SPEED_LIMIT, Particle::SPEED_LIMIT),
        ];
        Particle::new(pos, vel, radius, color)
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Color {
        self.color
    }

    // Moves by one step of velocity. A component whose displacement would
    // carry the particle past [0, limit] is inverted first, so the
    // particle heads back in instead of leaving.
    pub fn advance(&mut self, width: f64, height: f64) {
        let limits = [width, height];
        for axis in 0..2 {
            let next = self.pos[axis] + self.vel[axis];
            let outward = (next < 0.0 && self.vel[axis] < 0.0)
                || (next > limits[axis] && self.vel[axis] > 0.0);
            if outward {
                self.vel[axis] *= -1.0;
            }
        }
        self.pos = vecmath::vec2_add(self.pos, self.vel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn particle(pos: Vector2<f64>, vel: Vector2<f64>) -> Particle {
        Particle::new(pos, vel, 1.0, Color::PALETTE[0])
    }

    #[test]
    fn random_particle_respects_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let p = Particle::random(&mut rng, 320.0, 200.0);
            assert!(p.pos[0] >= 0.0 && p.pos[0] < 320.0);
            assert!(p.pos[1] >= 0.0 && p.pos[1] < 200.0);
            assert!(Particle::RADIUS_RANGE.contains(&p.radius()));
            assert!(Color::PALETTE.contains(&p.color()));
            for v in p.vel.iter() {
                assert!(*v >= -Particle::SPEED_LIMIT && *v < Particle::SPEED_LIMIT);
            }
        }
    }

    #[test]
    fn bounces_off_left_edge() {
        let mut p = particle([0.0, 50.0], [-0.2, 0.0]);
        p.advance(100.0, 100.0);
        assert_eq!(p.vel[0], 0.2);
        assert!((p.pos[0] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn bounces_off_bottom_edge() {
        let mut p = particle([50.0, 99.9], [0.0, 0.25]);
        p.advance(100.0, 100.0);
        assert_eq!(p.vel[1], -0.25);
        assert!(p.pos[1] <= 100.0);
    }

    #[test]
    fn drifts_freely_inside() {
        let mut p = particle([10.0, 10.0], [0.1, -0.1]);
        p.advance(100.0, 100.0);
        assert_eq!(p.vel, [0.1, -0.1]);
        assert!((p.pos[0] - 10.1).abs() < 1e-12);
        assert!((p.pos[1] - 9.9).abs() < 1e-12);
    }

    #[test]
    fn outside_and_heading_away_turns_around() {
        // Left behind by a shrinking viewport
        let mut p = particle([150.0, 50.0], [0.3, 0.0]);
        p.advance(100.0, 100.0);
        assert_eq!(p.vel[0], -0.3);

        let mut p = particle([-4.0, 50.0], [-0.1, 0.0]);
        p.advance(100.0, 100.0);
        assert_eq!(p.vel[0], 0.1);
    }

    // Deliberately not flipped: turning around here would strand it outside
    #[test]
    fn outside_and_heading_back_keeps_going() {
        let mut p = particle([150.0, 50.0], [-0.3, 0.0]);
        p.advance(100.0, 100.0);
        assert_eq!(p.vel[0], -0.3);
        assert!((p.pos[0] - 149.7).abs() < 1e-9);
    }
}
