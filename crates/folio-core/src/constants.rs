// Shared tuning constants for the sphere and the particle field.

// Sphere layout
pub const SPHERE_CARD_COUNT: usize = 20;
pub const SPHERE_DISPLAY_RADIUS: f64 = 180.0; // px, scales unit positions to the page

// Particle physics (per-frame, unitless impulses)
pub const PARTICLE_FRICTION: f32 = 0.85; // velocity retained per frame
pub const PARTICLE_EASE: f32 = 0.12; // spring pull toward origin per frame
pub const REPULSION_STRENGTH: f32 = 80.0; // impulse at the pointer centre
pub const INTERACTION_RADIUS: f32 = 120.0; // px
pub const SETTLE_TOLERANCE: f32 = 0.1; // px and px/frame

// Mask sampling
pub const SAMPLE_GAP: u32 = 2; // px stride between sampled pixels
pub const ALPHA_THRESHOLD: u8 = 128;

// Particle look
pub const PARTICLE_SIZE: f32 = 2.0;
pub const PARTICLE_COLOR: [u8; 3] = [0, 0, 0];

// Text layout
pub const TEXT_WEIGHT: u16 = 900;
pub const LINE_HEIGHT: f32 = 1.2; // multiple of the font size
