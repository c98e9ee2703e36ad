//! Background particle field drawn on the hero canvas.
//!
//! Particles drift at constant velocity and bounce off the canvas edges. The
//! field only simulates; drawing is left to the front-end.

use crate::constants::{
    PARTICLE_LINK_DISTANCE, PARTICLE_LINK_MAX_ALPHA, PARTICLE_OPACITY_MIN,
    PARTICLE_OPACITY_SPAN, PARTICLE_REPEL_RADIUS, PARTICLE_REPEL_STRENGTH, PARTICLE_SIZE_MIN,
    PARTICLE_SIZE_SPAN, PARTICLE_SPEED_SPAN,
};
use glam::Vec2;
use rand::prelude::*;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub opacity: f32,
}

pub struct ParticleField {
    pub particles: Vec<Particle>,
    bounds: Vec2,
}

impl ParticleField {
    pub fn new(count: usize, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let bounds = Vec2::new(width.max(0.0), height.max(0.0));
        let particles = (0..count)
            .map(|_| Particle {
                position: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
                velocity: Vec2::new(
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN,
                    (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN,
                ),
                size: rng.gen::<f32>() * PARTICLE_SIZE_SPAN + PARTICLE_SIZE_MIN,
                opacity: rng.gen::<f32>() * PARTICLE_OPACITY_SPAN + PARTICLE_OPACITY_MIN,
            })
            .collect();
        Self { particles, bounds }
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    /// New canvas size; particles outside the new bounds bounce back in.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
    }

    /// Advance one animation frame.
    pub fn step(&mut self) {
        self.step_with_pointer(None);
    }

    /// Advance one frame; particles near the pointer are nudged away from it.
    pub fn step_with_pointer(&mut self, pointer: Option<Vec2>) {
        let b = self.bounds;
        for p in self.particles.iter_mut() {
            p.position += p.velocity;
            let out_x = (p.position.x < 0.0 && p.velocity.x < 0.0)
                || (p.position.x > b.x && p.velocity.x > 0.0);
            if out_x {
                p.velocity.x = -p.velocity.x;
            }
            let out_y = (p.position.y < 0.0 && p.velocity.y < 0.0)
                || (p.position.y > b.y && p.velocity.y > 0.0);
            if out_y {
                p.velocity.y = -p.velocity.y;
            }
            if let Some(pointer) = pointer {
                let d = pointer - p.position;
                if d.length() < PARTICLE_REPEL_RADIUS {
                    p.position -= d * PARTICLE_REPEL_STRENGTH;
                }
            }
        }
    }

    /// Pairs `(i, j)` with `i < j` closer than the link distance, with the
    /// line alpha for each.
    pub fn connections(&self) -> impl Iterator<Item = (usize, usize, f32)> + '_ {
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |i| {
            (i + 1..ps.len()).filter_map(move |j| {
                let dist = ps[i].position.distance(ps[j].position);
                (dist < PARTICLE_LINK_DISTANCE).then(|| (i, j, link_alpha(dist)))
            })
        })
    }
}

/// Line alpha for two particles `dist` px apart; fades to zero at the link
/// distance.
#[inline]
pub fn link_alpha(dist: f32) -> f32 {
    (PARTICLE_LINK_MAX_ALPHA * (1.0 - dist / PARTICLE_LINK_DISTANCE)).max(0.0)
}

/// Stroke colour for a connecting line.
#[inline]
pub fn link_stroke(alpha: f32) -> String {
    format!("rgba(255, 106, 61, {:.3})", alpha.clamp(0.0, 1.0))
}

/// Fill colour for a particle.
#[inline]
pub fn particle_fill(opacity: f32) -> String {
    format!("rgba(255, 106, 61, {:.2})", opacity.clamp(0.0, 1.0))
}
