use crate::core::{Rng, Vec2};
use crate::render::Surface;

use super::forces::{apply_friction, field_force, repulsion, wrap_coordinate};

/// Side of the square each particle paints
pub const PARTICLE_SIZE: f64 = 1.5;
pub const MIN_LIFE: f64 = 100.0;
pub const MAX_LIFE: f64 = 300.0;

/// A single flow-field particle
///
/// Particles are never destroyed: once `age` passes `life` the same slot is
/// respawned at a random position.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Frames since (re)spawn
    pub age: u32,
    /// Lifespan in frames, sampled from (MIN_LIFE, MAX_LIFE)
    pub life: f64,
    speed: f64,
}

impl Particle {
    pub fn spawn(width: f64, height: f64, speed: f64, rng: &mut Rng) -> Self {
        let mut particle = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            age: 0,
            life: MIN_LIFE,
            speed,
        };
        particle.respawn(width, height, rng);
        particle
    }

    pub fn respawn(&mut self, width: f64, height: f64, rng: &mut Rng) {
        self.pos = Vec2::new(rng.below(width), rng.below(height));
        self.vel = Vec2::ZERO;
        self.age = 0;
        self.life = rng.between(MIN_LIFE, MAX_LIFE);
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Advance one frame. Returns true when the particle was respawned.
    pub fn step(&mut self, pointer: Vec2, width: f64, height: f64, rng: &mut Rng) -> bool {
        self.vel += field_force(self.pos, self.speed);
        self.vel += repulsion(self.pos, pointer);

        // Integrate first, damp after
        self.pos += self.vel;
        apply_friction(&mut self.vel);

        self.age = self.age.saturating_add(1);
        let respawned = self.age as f64 > self.life;
        if respawned {
            self.respawn(width, height, rng);
        }

        self.pos.x = wrap_coordinate(self.pos.x, width);
        self.pos.y = wrap_coordinate(self.pos.y, height);
        respawned
    }

    /// Triangular fade: 0 at birth, 1 at half-life, 0 at death
    pub fn alpha(&self) -> f64 {
        let t = self.age as f64 / self.life;
        (1.0 - ((t - 0.5) * 2.0).abs()).clamp(0.0, 1.0)
    }

    pub fn render<S: Surface>(&self, surface: &mut S, color: &str) {
        surface.fill_square(self.pos.x, self.pos.y, PARTICLE_SIZE, color, self.alpha());
    }
}
