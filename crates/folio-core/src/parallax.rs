//! Pointer-driven offsets for the custom cursor and section parallax.

use glam::Vec2;

pub const CURSOR_HALF_SIZE: f32 = 20.0;
pub const HERO_DIVISOR: f32 = 25.0;
pub const SKILLS_DIVISOR: f32 = 30.0;
pub const SKILLS_TEXT_FACTOR: f32 = 1.5;
pub const PROJECTS_DIVISOR: f32 = 30.0;
pub const CONTACT_DEFAULT_SPEED: f32 = 0.05;

/// Page sections that react to the pointer, keyed by element id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "hero" => Some(Section::Hero),
            "vanguarr" => Some(Section::Skills),
            "projects" => Some(Section::Projects),
            "contact" => Some(Section::Contact),
            _ => None,
        }
    }
}

/// Top-left of the cursor element so that it is centred on the pointer.
#[inline]
pub fn cursor_offset(pointer: Vec2) -> Vec2 {
    pointer - Vec2::splat(CURSOR_HALF_SIZE)
}

/// Hero text drifts against the pointer.
#[inline]
pub fn hero_offset(pointer: Vec2, center: Vec2) -> Vec2 {
    (center - pointer) / HERO_DIVISOR
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkillsParallax {
    pub text: Vec2,
    pub sphere: Vec2,
}

/// The headline moves further than the sphere so they separate in depth.
#[inline]
pub fn skills_offsets(pointer: Vec2, center: Vec2) -> SkillsParallax {
    let d = (pointer - center) / SKILLS_DIVISOR;
    SkillsParallax {
        text: -d * SKILLS_TEXT_FACTOR,
        sphere: -d,
    }
}

#[inline]
pub fn projects_offset(pointer: Vec2, center: Vec2) -> Vec2 {
    (pointer - center) / PROJECTS_DIVISOR
}

#[inline]
pub fn contact_offset(pointer: Vec2, center: Vec2, speed: f32) -> Vec2 {
    (pointer - center) * speed
}

/// Parse a `data-speed` attribute. Only the leading number counts, so
/// `"0.1px"` reads as `0.1`; missing or malformed values fall back to the
/// default speed.
pub fn parse_speed(attr: Option<&str>) -> f32 {
    attr.and_then(leading_number)
        .filter(|v| v.is_finite())
        .unwrap_or(CONTACT_DEFAULT_SPEED)
}

/// Longest prefix of `s` (after leading whitespace) that parses as a float.
fn leading_number(s: &str) -> Option<f32> {
    let s = s.trim_start();
    s.char_indices()
        .map(|(i, c)| i + c.len_utf8())
        .rev()
        .find_map(|end| s[..end].parse::<f32>().ok())
}
