pub mod pointer;
pub mod resize;

pub use pointer::{wire_mouse_tracking, wire_particle_pointer, ParticlePointerWiring};
pub use resize::wire_resize;
