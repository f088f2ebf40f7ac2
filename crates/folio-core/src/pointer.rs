use crate::constants::INTERACTION_RADIUS;
use glam::Vec2;

/// Pointer as seen by the particle field, in field-local pixels.
///
/// `position` is `None` while the pointer is outside the interaction margin
/// around the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: Option<Vec2>,
    pub radius: f32,
}

impl Default for PointerState {
    fn default() -> Self {
        Self {
            position: None,
            radius: INTERACTION_RADIUS,
        }
    }
}

impl PointerState {
    pub fn at(position: Vec2) -> Self {
        Self {
            position: Some(position),
            ..Self::default()
        }
    }

    pub fn with_radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn set(&mut self, position: Option<Vec2>) {
        self.position = position;
    }

    pub fn is_active(&self) -> bool {
        self.position.is_some()
    }
}
