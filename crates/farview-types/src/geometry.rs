//! Video-region geometry.
//!
//! The remote video stream rarely has the same aspect ratio as the local
//! window, so it is rendered into a centered sub-rectangle of the window
//! (letterboxed or pillarboxed). Pointer samples must be mapped against
//! that sub-rectangle, not the raw window.

/// An axis-aligned rectangle in pixel coordinates.
///
/// Rects are derived on demand (never stored or sent), so unlike the wire
/// types in [`crate::command`] they carry no serialization derives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    #[must_use]
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// A rectangle at the origin with the given size.
    #[must_use]
    pub fn of_size(w: i32, h: i32) -> Self {
        Self { x: 0, y: 0, w, h }
    }

    /// The maximal sub-rectangle of `destination` that preserves `self`'s
    /// aspect ratio, centered within `destination`.
    ///
    /// This is the letterbox/pillarbox fit: scaling an 800x600 source into a
    /// 1600x900 destination yields a 1200x900 region offset by (200, 0).
    /// Degenerate (non-positive) dimensions on either side collapse to an
    /// empty rectangle at `destination`'s origin.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn fit_within(self, destination: Rect) -> Rect {
        if self.w <= 0 || self.h <= 0 || destination.w <= 0 || destination.h <= 0 {
            return Rect::new(destination.x, destination.y, 0, 0);
        }

        let ratio = (f64::from(destination.w) / f64::from(self.w))
            .min(f64::from(destination.h) / f64::from(self.h));
        let w = (f64::from(self.w) * ratio) as i32;
        let h = (f64::from(self.h) * ratio) as i32;

        Rect {
            x: destination.x + (destination.w - w) / 2,
            y: destination.y + (destination.h - h) / 2,
            w,
            h,
        }
    }

    /// Inclusive bounds test: edges count as inside.
    #[must_use]
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }

    /// Translate a point into this rectangle's local coordinate space,
    /// clamping each axis independently to `[0, w]` / `[0, h]`.
    ///
    /// Samples outside the rectangle are pulled to the nearest edge,
    /// never dropped.
    #[must_use]
    pub fn clamp_local(&self, px: i32, py: i32) -> (i32, i32) {
        ((px - self.x).clamp(0, self.w), (py - self.y).clamp(0, self.h))
    }
}
