//! Flow-field physics: forces and the particle that integrates them

pub mod forces;
pub mod particle;

pub use particle::Particle;
