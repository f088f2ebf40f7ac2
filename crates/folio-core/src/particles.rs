//! Particle text: a point cloud sampled from rasterized text, pulled back to
//! its origins by a spring and pushed away by the pointer.
//!
//! One call to [`ParticleField::step`] is one display frame. Forces are
//! applied as discrete per-frame impulses, so the result depends on the
//! frame count only, never on wall-clock time.

use crate::constants::*;
use crate::mask::{AlphaMask, TextBlock, TextRasterizer};
use crate::pointer::PointerState;
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsParams {
    pub friction: f32,
    pub ease: f32,
    pub repulsion_strength: f32,
    pub settle_tolerance: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            friction: PARTICLE_FRICTION,
            ease: PARTICLE_EASE,
            repulsion_strength: REPULSION_STRENGTH,
            settle_tolerance: SETTLE_TOLERANCE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SamplingParams {
    pub gap: u32,
    pub alpha_threshold: u8,
}

impl Default for SamplingParams {
    fn default() -> Self {
        Self {
            gap: SAMPLE_GAP,
            alpha_threshold: ALPHA_THRESHOLD,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleStyle {
    pub size: f32,
    pub color: [u8; 3],
}

impl Default for ParticleStyle {
    fn default() -> Self {
        Self {
            size: PARTICLE_SIZE,
            color: PARTICLE_COLOR,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub origin: Vec2,
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub color: [u8; 3],
}

impl Particle {
    pub fn new(origin: Vec2, style: ParticleStyle) -> Self {
        Self {
            origin,
            position: origin,
            velocity: Vec2::ZERO,
            size: style.size,
            color: style.color,
        }
    }

    /// Advance one frame: repulsion, spring, damping, then integrate.
    pub fn update(&mut self, pointer: &PointerState, params: &PhysicsParams) {
        self.velocity += repulsion(self.position, pointer, params.repulsion_strength);
        self.velocity += (self.origin - self.position) * params.ease;
        self.velocity *= params.friction;
        self.position += self.velocity;
    }

    pub fn is_settled(&self, tolerance: f32) -> bool {
        let offset = (self.position - self.origin).abs();
        let speed = self.velocity.abs();
        offset.x <= tolerance
            && offset.y <= tolerance
            && speed.x <= tolerance
            && speed.y <= tolerance
    }
}

/// Velocity impulse the pointer applies to a particle at `position`.
///
/// Zero outside the pointer radius. Inside, the magnitude falls off linearly
/// from `strength` at the pointer to zero at the radius and points away from
/// the pointer. The direction comes from `atan2`, so a particle sitting
/// exactly on the pointer still gets a finite, full-strength push.
pub fn repulsion(position: Vec2, pointer: &PointerState, strength: f32) -> Vec2 {
    let Some(at) = pointer.position else {
        return Vec2::ZERO;
    };
    let radius = pointer.radius;
    let delta = at - position;
    let distance = delta.length();
    if radius <= 0.0 || distance >= radius {
        return Vec2::ZERO;
    }
    let angle = delta.y.atan2(delta.x);
    let push = (radius - distance) / radius * strength;
    -Vec2::new(angle.cos(), angle.sin()) * push
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
    /// Settled; no frames need to be scheduled.
    Idle,
    Active,
}

pub struct ParticleField {
    particles: Vec<Particle>,
    width: u32,
    height: u32,
    physics: PhysicsParams,
    sampling: SamplingParams,
    style: ParticleStyle,
    state: FieldState,
    generation: u64,
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new(
            PhysicsParams::default(),
            SamplingParams::default(),
            ParticleStyle::default(),
        )
    }
}

impl ParticleField {
    pub fn new(physics: PhysicsParams, sampling: SamplingParams, style: ParticleStyle) -> Self {
        Self {
            particles: Vec::new(),
            width: 0,
            height: 0,
            physics,
            sampling,
            style,
            state: FieldState::Idle,
            generation: 0,
        }
    }

    /// Rasterize `block` at `width × height` and replace the whole batch.
    ///
    /// Always leaves the field Active, even when the new batch is empty or
    /// the size did not change; the next `step` decides whether to settle.
    pub fn configure<R: TextRasterizer>(
        &mut self,
        rasterizer: &mut R,
        block: &TextBlock,
        width: u32,
        height: u32,
    ) -> Result<usize, R::Error> {
        let mask = if block.is_blank() || width == 0 || height == 0 {
            AlphaMask::blank(width, height)
        } else {
            rasterizer.rasterize(block, width, height)?
        };
        Ok(self.load_mask(&mask))
    }

    /// Replace the batch with one particle per sampled mask pixel.
    pub fn load_mask(&mut self, mask: &AlphaMask) -> usize {
        let style = self.style;
        let particles: Vec<Particle> = mask
            .sample(self.sampling.gap, self.sampling.alpha_threshold)
            .into_iter()
            .map(|origin| Particle::new(origin, style))
            .collect();

        self.particles = particles;
        self.width = mask.width();
        self.height = mask.height();
        self.generation += 1;
        self.state = FieldState::Active;
        log::debug!(
            "[particles] batch {} : {} particles at {}x{}",
            self.generation,
            self.particles.len(),
            self.width,
            self.height
        );
        self.particles.len()
    }

    /// Advance every particle by one frame and report whether the field
    /// is still moving.
    pub fn step(&mut self, pointer: &PointerState) -> FieldState {
        let tolerance = self.physics.settle_tolerance;
        let mut moving = false;
        for p in &mut self.particles {
            p.update(pointer, &self.physics);
            if !p.is_settled(tolerance) {
                moving = true;
            }
        }

        let next = if moving || pointer.is_active() {
            FieldState::Active
        } else {
            FieldState::Idle
        };
        if next != self.state {
            log::debug!("[particles] {:?} -> {:?}", self.state, next);
        }
        self.state = next;
        next
    }

    /// Wake the field when the pointer enters the interaction zone.
    ///
    /// Returns `true` on an Idle to Active transition, i.e. when the caller
    /// must start scheduling frames again.
    pub fn notify_pointer(&mut self, pointer: &PointerState) -> bool {
        if pointer.is_active() && self.state == FieldState::Idle {
            self.state = FieldState::Active;
            return true;
        }
        false
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == FieldState::Idle
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

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Incremented on every batch replacement.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
