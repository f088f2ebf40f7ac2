// Host-side tests for the particle text field.
// Text is rasterized by a stub that paints one solid box per character, so
// masks are exact and particle counts can be worked out by hand.

use folio_core::{
    repulsion, AlphaMask, FieldState, Particle, ParticleField, ParticleStyle, PhysicsParams,
    PointerState, TextBlock, TextRasterizer, TextStyle,
};
use glam::Vec2;
use std::convert::Infallible;

/// Each character is a `0.6 × font` wide, `font` tall opaque box.
struct BoxRasterizer {
    calls: usize,
}

impl TextRasterizer for BoxRasterizer {
    type Error = Infallible;

    fn rasterize(
        &mut self,
        block: &TextBlock,
        width: u32,
        height: u32,
    ) -> Result<AlphaMask, Infallible> {
        self.calls += 1;
        let font = block.style.font_size_px;
        let mut mask = AlphaMask::blank(width, height);
        for (line, anchor) in block
            .lines
            .iter()
            .zip(block.line_anchors(width as f32, height as f32))
        {
            let w = line.chars().count() as f32 * font * 0.6;
            let left = (anchor.x - w / 2.0).round().max(0.0) as u32;
            let top = (anchor.y - font / 2.0).round().max(0.0) as u32;
            mask.fill_rect(left, top, w.round() as u32, font.round() as u32, 255);
        }
        Ok(mask)
    }
}

fn style(font: f32) -> TextStyle {
    TextStyle {
        font_size_px: font,
        font_family: "monospace".to_string(),
        ..TextStyle::default()
    }
}

fn configured(lines: &[&str], width: u32, height: u32) -> ParticleField {
    let mut field = ParticleField::default();
    let mut r = BoxRasterizer { calls: 0 };
    field
        .configure(&mut r, &TextBlock::new(lines, style(10.0)), width, height)
        .unwrap();
    field
}

fn run_until_idle(field: &mut ParticleField, pointer: &PointerState, max_frames: usize) -> usize {
    for frame in 1..=max_frames {
        if field.step(pointer) == FieldState::Idle {
            return frame;
        }
    }
    panic!("field still active after {max_frames} frames");
}

#[test]
fn ab_on_a_20x20_field() {
    // "AB" at font 10 covers x in [4, 16), y in [5, 15); with gap 2 the
    // sampled grid hits x = 4..14 (6 columns) and y = 6..14 (5 rows).
    let field = configured(&["AB"], 20, 20);
    assert_eq!(field.len(), 30);
    for p in field.particles() {
        assert!(p.origin.x >= 0.0 && p.origin.x < 20.0);
        assert!(p.origin.y >= 0.0 && p.origin.y < 20.0);
        assert_eq!(p.origin, p.position);
        assert_eq!(p.velocity, Vec2::ZERO);
        assert_eq!(p.origin.x as u32 % 2, 0);
        assert_eq!(p.origin.y as u32 % 2, 0);
    }
}

#[test]
fn blank_text_yields_no_particles_and_settles_at_once() {
    let mut field = ParticleField::default();
    let mut r = BoxRasterizer { calls: 0 };
    let n = field
        .configure(&mut r, &TextBlock::new(&["", "   "], style(10.0)), 20, 20)
        .unwrap();
    assert_eq!(n, 0);
    assert!(field.is_empty());
    assert_eq!(r.calls, 0);
    assert_eq!(field.step(&PointerState::default()), FieldState::Idle);
}

#[test]
fn no_lines_yields_no_particles() {
    let field = configured(&[], 20, 20);
    assert!(field.is_empty());
}

#[test]
fn repulsion_is_maximal_and_finite_at_zero_distance() {
    let at = Vec2::new(5.0, 5.0);
    let pointer = PointerState::at(at);
    let push = repulsion(at, &pointer, 80.0);
    assert!(push.is_finite());
    assert!((push.length() - 80.0).abs() < 1e-4);
}

#[test]
fn repulsion_points_away_and_fades_with_distance() {
    let pointer = PointerState::at(Vec2::ZERO).with_radius(100.0);
    let near = repulsion(Vec2::new(10.0, 0.0), &pointer, 80.0);
    let far = repulsion(Vec2::new(90.0, 0.0), &pointer, 80.0);
    assert!(near.x > 0.0 && near.y.abs() < 1e-4);
    assert!((near.length() - 72.0).abs() < 1e-3);
    assert!((far.length() - 8.0).abs() < 1e-3);
    assert_eq!(repulsion(Vec2::new(100.0, 0.0), &pointer, 80.0), Vec2::ZERO);
    assert_eq!(
        repulsion(Vec2::new(1.0, 1.0), &PointerState::default(), 80.0),
        Vec2::ZERO
    );
}

#[test]
fn frame_applies_push_then_spring_then_friction() {
    // Pointer 60 px to the right, radius 120: push = 60/120 * 80 = 40.
    // Frame 1: v = -40 * 0.85 = -34.
    // Frame 2 (pointer gone): v = (-34 + 34 * 0.12) * 0.85 = -25.432.
    // Damping before the spring would give -24.82 instead.
    let params = PhysicsParams::default();
    let mut p = Particle::new(Vec2::ZERO, ParticleStyle::default());

    p.update(&PointerState::at(Vec2::new(60.0, 0.0)), &params);
    assert!((p.velocity.x + 34.0).abs() < 1e-4, "v1 = {:?}", p.velocity);
    assert_eq!(p.velocity.y, 0.0);
    assert!((p.position.x + 34.0).abs() < 1e-4);

    p.update(&PointerState::default(), &params);
    assert!((p.velocity.x + 25.432).abs() < 1e-4, "v2 = {:?}", p.velocity);
    assert_eq!(p.velocity.y, 0.0);
    assert!((p.position.x + 59.432).abs() < 1e-4);
}

#[test]
fn fresh_batch_is_active_until_first_step() {
    let mut field = configured(&["AB"], 20, 20);
    assert_eq!(field.state(), FieldState::Active);
    assert_eq!(field.step(&PointerState::default()), FieldState::Idle);
    assert!(field.is_idle());
}

#[test]
fn particles_return_home_after_pointer_leaves() {
    let mut field = configured(&["AB"], 20, 20);
    let pointer = PointerState::at(Vec2::new(10.0, 10.0));
    for _ in 0..5 {
        assert_eq!(field.step(&pointer), FieldState::Active);
    }
    let displaced = field
        .particles()
        .iter()
        .map(|p| (p.position - p.origin).length())
        .fold(0.0_f32, f32::max);
    assert!(displaced > 1.0, "pointer should scatter particles");

    let frames = run_until_idle(&mut field, &PointerState::default(), 2000);
    assert!(frames > 1);
    for p in field.particles() {
        assert!((p.position.x - p.origin.x).abs() <= 0.1);
        assert!((p.position.y - p.origin.y).abs() <= 0.1);
        assert!(p.velocity.x.abs() <= 0.1 && p.velocity.y.abs() <= 0.1);
    }
}

#[test]
fn present_pointer_keeps_field_active_even_when_out_of_reach() {
    let mut field = configured(&["AB"], 20, 20);
    let far = PointerState::at(Vec2::new(500.0, 500.0));
    for _ in 0..10 {
        assert_eq!(field.step(&far), FieldState::Active);
    }
    for p in field.particles() {
        assert_eq!(p.position, p.origin);
    }
}

#[test]
fn pointer_entry_wakes_an_idle_field_once() {
    let mut field = configured(&["AB"], 20, 20);
    run_until_idle(&mut field, &PointerState::default(), 10);

    assert!(!field.notify_pointer(&PointerState::default()));
    assert!(field.is_idle());

    let pointer = PointerState::at(Vec2::new(8.0, 8.0));
    assert!(field.notify_pointer(&pointer));
    assert_eq!(field.state(), FieldState::Active);
    assert!(!field.notify_pointer(&pointer));
}

#[test]
fn resize_replaces_the_whole_batch() {
    let mut field = ParticleField::default();
    let mut r = BoxRasterizer { calls: 0 };
    field
        .configure(&mut r, &TextBlock::new(&["AB"], style(10.0)), 20, 20)
        .unwrap();
    let first_generation = field.generation();
    let pointer = PointerState::at(Vec2::new(10.0, 10.0));
    for _ in 0..3 {
        field.step(&pointer);
    }

    // "ABCD" on 40x40 covers x in [8, 32), y in [15, 25): 12 x 5 samples.
    let n = field
        .configure(&mut r, &TextBlock::new(&["ABCD"], style(10.0)), 40, 40)
        .unwrap();
    assert_eq!(n, 60);
    assert_eq!(field.len(), 60);
    assert_eq!(field.generation(), first_generation + 1);
    assert_eq!((field.width(), field.height()), (40, 40));
    assert_eq!(field.state(), FieldState::Active);
    for p in field.particles() {
        assert_eq!(p.position, p.origin);
        assert_eq!(p.velocity, Vec2::ZERO);
        assert!(p.origin.x >= 8.0 && p.origin.x < 32.0);
        assert!(p.origin.y >= 15.0 && p.origin.y < 25.0);
    }
}

#[test]
fn resize_forces_active_even_when_settled_and_unchanged() {
    let mut field = ParticleField::default();
    let mut r = BoxRasterizer { calls: 0 };
    let block = TextBlock::new(&["AB"], style(10.0));
    field.configure(&mut r, &block, 20, 20).unwrap();
    run_until_idle(&mut field, &PointerState::default(), 10);

    field.configure(&mut r, &block, 20, 20).unwrap();
    assert_eq!(field.state(), FieldState::Active);
    assert_eq!(r.calls, 2);
}

#[test]
fn particles_keep_fixed_size_and_color() {
    let mut field = configured(&["AB"], 20, 20);
    let pointer = PointerState::at(Vec2::new(10.0, 10.0));
    for _ in 0..10 {
        field.step(&pointer);
    }
    for p in field.particles() {
        assert_eq!(p.size, 2.0);
        assert_eq!(p.color, [0, 0, 0]);
    }
}
