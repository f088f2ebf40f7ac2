//! Card placement on the skills sphere.
//!
//! Cards are spread over a unit sphere with the golden-angle (Fibonacci)
//! spiral and turned to face outward. The layout is computed once and never
//! mutated; the web frontend turns each card into a CSS transform.

use crate::error::LayoutError;
use glam::DVec3;
use std::fmt;

/// π·(3 − √5), about 137.5°.
pub fn golden_angle() -> f64 {
    std::f64::consts::PI * (3.0 - 5.0_f64.sqrt())
}

/// Descriptor shown on a flip card. `details` are rendered one per line on
/// the back face.
#[derive(Clone, Debug, PartialEq)]
pub struct Skill {
    pub title: &'static str,
    pub sub: &'static str,
    pub details: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardContent {
    /// Index into the skill catalog.
    Flip { skill: usize },
    /// Index into the image catalog.
    Image { image: usize },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parity {
    Odd,
    Even,
}

impl Parity {
    pub fn for_index(index: usize) -> Self {
        if (index + 1) % 2 == 0 {
            Parity::Even
        } else {
            Parity::Odd
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Parity::Odd => "odd",
            Parity::Even => "even",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SphereCard {
    pub index: usize,
    pub content: CardContent,
    pub position: DVec3,
    pub yaw_deg: f64,
    pub pitch_deg: f64,
}

/// Translation plus the two rotations that make a card face away from the
/// sphere centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    pub translate: DVec3,
    pub rotate_y_deg: f64,
    pub rotate_x_deg: f64,
}

impl fmt::Display for CardTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "translate3d({}px, {}px, {}px) rotateY({}deg) rotateX({}deg)",
            self.translate.x,
            self.translate.y,
            self.translate.z,
            self.rotate_y_deg,
            self.rotate_x_deg
        )
    }
}

/// Enlarged copy of a card shown in the zoom overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoomedCard {
    pub index: usize,
    pub content: CardContent,
    pub parity: Parity,
    /// Flip cards open on their detail side.
    pub show_back: bool,
}

impl SphereCard {
    pub fn parity(&self) -> Parity {
        Parity::for_index(self.index)
    }

    pub fn is_flip(&self) -> bool {
        matches!(self.content, CardContent::Flip { .. })
    }

    pub fn transform(&self, display_radius: f64) -> CardTransform {
        CardTransform {
            translate: self.position * display_radius,
            rotate_y_deg: self.yaw_deg,
            rotate_x_deg: self.pitch_deg,
        }
    }

    /// 1-based, zero-padded to two digits.
    pub fn number_label(&self) -> String {
        format!("{:02}", self.index + 1)
    }

    pub fn zoom(&self) -> ZoomedCard {
        ZoomedCard {
            index: self.index,
            content: self.content,
            parity: self.parity(),
            show_back: self.is_flip(),
        }
    }
}

/// Lay out `count` cards, alternating image and flip content.
///
/// Flip cards take skills `0, 1, .., skill_count-1, 0, ..` in order of
/// appearance; image cards cycle through the image catalog the same way.
pub fn layout(
    count: usize,
    skill_count: usize,
    image_count: usize,
) -> Result<Vec<SphereCard>, LayoutError> {
    if count < 2 {
        return Err(LayoutError::TooFewCards(count));
    }
    let flips = count / 2;
    let images = count - flips;
    if flips > 0 && skill_count == 0 {
        return Err(LayoutError::EmptyCatalog("skills"));
    }
    if images > 0 && image_count == 0 {
        return Err(LayoutError::EmptyCatalog("images"));
    }

    let phi = golden_angle();
    let last = (count - 1) as f64;
    let mut flip_ordinal = 0usize;
    let mut image_ordinal = 0usize;
    let mut cards = Vec::with_capacity(count);

    for i in 0..count {
        let y = 1.0 - (i as f64 / last) * 2.0;
        let radius = (1.0 - y * y).max(0.0).sqrt();
        let theta = phi * i as f64;
        let position = DVec3::new(theta.cos() * radius, y, theta.sin() * radius);

        let content = match Parity::for_index(i) {
            Parity::Even => {
                let skill = flip_ordinal % skill_count;
                flip_ordinal += 1;
                CardContent::Flip { skill }
            }
            Parity::Odd => {
                let image = image_ordinal % image_count;
                image_ordinal += 1;
                CardContent::Image { image }
            }
        };

        cards.push(SphereCard {
            index: i,
            content,
            position,
            yaw_deg: position.x.atan2(position.z).to_degrees(),
            pitch_deg: -position.y.clamp(-1.0, 1.0).asin().to_degrees(),
        });
    }

    log::debug!("[sphere] laid out {} cards ({} flip)", count, flip_ordinal);
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_angle_is_about_137_5_degrees() {
        assert!((golden_angle().to_degrees() - 137.507_764).abs() < 1e-5);
    }

    #[test]
    fn poles_face_up_and_down() {
        let cards = layout(5, 2, 2).unwrap();
        assert!((cards[0].position.y - 1.0).abs() < 1e-12);
        assert!((cards[4].position.y + 1.0).abs() < 1e-12);
        assert!((cards[0].pitch_deg + 90.0).abs() < 1e-9);
        assert!((cards[4].pitch_deg - 90.0).abs() < 1e-9);
    }

    #[test]
    fn transform_formats_as_css() {
        let card = SphereCard {
            index: 0,
            content: CardContent::Image { image: 0 },
            position: DVec3::new(0.0, 0.0, 1.0),
            yaw_deg: 0.0,
            pitch_deg: -0.0,
        };
        assert_eq!(
            card.transform(180.0).to_string(),
            "translate3d(0px, 0px, 180px) rotateY(0deg) rotateX(-0deg)"
        );
    }
}
