// Host-side tests for the golden-angle card sphere.

use folio_core::{layout, CardContent, LayoutError, Parity};

#[test]
fn positions_lie_on_the_unit_sphere() {
    for count in 2..=200 {
        let cards = layout(count, 6, 5).unwrap();
        assert_eq!(cards.len(), count);
        for c in &cards {
            let len2 = c.position.length_squared();
            assert!(
                (len2 - 1.0).abs() < 1e-6,
                "card {} of {} has |p|^2 = {}",
                c.index,
                count,
                len2
            );
        }
    }
}

#[test]
fn y_spans_pole_to_pole() {
    let cards = layout(20, 6, 5).unwrap();
    assert!((cards[0].position.y - 1.0).abs() < 1e-12);
    assert!((cards[19].position.y + 1.0).abs() < 1e-12);
    for pair in cards.windows(2) {
        assert!(pair[1].position.y < pair[0].position.y);
    }
}

#[test]
fn fewer_than_two_cards_is_rejected() {
    assert_eq!(layout(0, 6, 5), Err(LayoutError::TooFewCards(0)));
    assert_eq!(layout(1, 6, 5), Err(LayoutError::TooFewCards(1)));
    assert!(layout(2, 6, 5).is_ok());
}

#[test]
fn empty_catalogs_are_rejected() {
    assert_eq!(layout(4, 0, 5), Err(LayoutError::EmptyCatalog("skills")));
    assert_eq!(layout(4, 6, 0), Err(LayoutError::EmptyCatalog("images")));
}

#[test]
fn flip_content_follows_index_parity() {
    let cards = layout(20, 6, 5).unwrap();
    for c in &cards {
        let even = (c.index + 1) % 2 == 0;
        assert_eq!(c.is_flip(), even, "card {}", c.index);
        assert_eq!(c.parity() == Parity::Even, even);
    }
}

#[test]
fn skills_and_images_cycle_in_assignment_order() {
    let cards = layout(20, 6, 5).unwrap();
    let skills: Vec<usize> = cards
        .iter()
        .filter_map(|c| match c.content {
            CardContent::Flip { skill } => Some(skill),
            _ => None,
        })
        .collect();
    assert_eq!(skills, vec![0, 1, 2, 3, 4, 5, 0, 1, 2, 3]);

    let images: Vec<usize> = cards
        .iter()
        .filter_map(|c| match c.content {
            CardContent::Image { image } => Some(image),
            _ => None,
        })
        .collect();
    assert_eq!(images, vec![0, 1, 2, 3, 4, 0, 1, 2, 3, 4]);
}

#[test]
fn cards_face_outward() {
    let cards = layout(20, 6, 5).unwrap();
    for c in &cards {
        let yaw = c.yaw_deg.to_radians();
        let pitch = c.pitch_deg.to_radians();
        // yaw and pitch recover the direction of the position vector.
        let horizontal = (c.position.x * c.position.x + c.position.z * c.position.z).sqrt();
        if horizontal > 1e-9 {
            assert!((yaw.sin() * horizontal - c.position.x).abs() < 1e-9);
            assert!((yaw.cos() * horizontal - c.position.z).abs() < 1e-9);
        }
        assert!((-pitch.sin() - c.position.y).abs() < 1e-9);
    }
}

#[test]
fn top_card_transform() {
    let cards = layout(20, 6, 5).unwrap();
    let t = cards[0].transform(180.0);
    assert!(t.translate.x.abs() < 1e-9);
    assert!((t.translate.y - 180.0).abs() < 1e-9);
    assert!(t.translate.z.abs() < 1e-9);
    assert!(t.rotate_y_deg.abs() < 1e-9);
    assert!((t.rotate_x_deg + 90.0).abs() < 1e-9);
    assert!(t.to_string().starts_with("translate3d(0px, 180px, 0px) rotateY(0deg) rotateX("));
}

#[test]
fn number_labels_are_one_based_and_padded() {
    let cards = layout(12, 6, 5).unwrap();
    assert_eq!(cards[0].number_label(), "01");
    assert_eq!(cards[9].number_label(), "10");
    assert_eq!(cards[11].number_label(), "12");
}

#[test]
fn zoom_opens_flip_cards_on_their_back() {
    let cards = layout(20, 6, 5).unwrap();
    for c in &cards {
        let z = c.zoom();
        assert_eq!(z.index, c.index);
        assert_eq!(z.content, c.content);
        assert_eq!(z.parity, c.parity());
        assert_eq!(z.show_back, c.is_flip());
    }
}
