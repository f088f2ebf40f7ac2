pub mod constants;
pub mod error;
pub mod flip;
pub mod mask;
pub mod parallax;
pub mod particles;
pub mod pointer;
pub mod sphere;

pub use error::*;
pub use mask::*;
pub use particles::*;
pub use pointer::*;
pub use sphere::*;
