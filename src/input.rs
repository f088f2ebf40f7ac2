use glam::Vec2;

/// Bounding rect of an element in client (viewport) CSS pixels, plus the
/// backing-store size of the canvas it describes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FieldRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub backing_width: f32,
    pub backing_height: f32,
}

impl FieldRect {
    #[inline]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// True when `client` is inside the rect grown by `margin` on every side.
    #[inline]
    pub fn contains_with_margin(&self, client: Vec2, margin: f32) -> bool {
        client.x >= self.left - margin
            && client.x <= self.right() + margin
            && client.y >= self.top - margin
            && client.y <= self.bottom() + margin
    }

    /// Client CSS px -> canvas backing px.
    #[inline]
    pub fn to_local(&self, client: Vec2) -> Vec2 {
        let css = client - Vec2::new(self.left, self.top);
        if self.width > 0.0 && self.height > 0.0 {
            Vec2::new(
                css.x / self.width * self.backing_width,
                css.y / self.height * self.backing_height,
            )
        } else {
            css
        }
    }
}

/// Field-local pointer position, or `None` when the pointer is outside the
/// interaction margin.
#[inline]
pub fn pointer_in_field(client: Vec2, rect: &FieldRect, margin: f32) -> Option<Vec2> {
    rect.contains_with_margin(client, margin)
        .then(|| rect.to_local(client))
}

#[derive(Default, Clone, Copy, Debug)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    /// Set on every move; the page frame clears it after resolving the
    /// section under the pointer.
    pub moved: bool,
}

impl MouseState {
    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

#[inline]
pub fn viewport_center(width: f64, height: f64) -> Vec2 {
    Vec2::new(width as f32 / 2.0, height as f32 / 2.0)
}

/// Parse a computed CSS length such as `"16px"`.
pub fn parse_px(value: &str) -> Option<f32> {
    value
        .trim()
        .trim_end_matches("px")
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}
