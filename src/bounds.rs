use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Accumulates an axis-aligned bounding box over a sequence of rectangles.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    min: Pos2,
    max: Pos2,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min: Pos2::new(f32::MAX, f32::MAX),
            max: Pos2::new(f32::MIN, f32::MIN),
        }
    }
}

impl Bounds {
    /// Expands the bounds to include `rect`. Each of the four sides is
    /// tested independently.
    pub fn expand(&mut self, rect: Rect) {
        if rect.min.x < self.min.x {
            self.min.x = rect.min.x;
        }
        if rect.min.y < self.min.y {
            self.min.y = rect.min.y;
        }
        if rect.max.x > self.max.x {
            self.max.x = rect.max.x;
        }
        if rect.max.y > self.max.y {
            self.max.y = rect.max.y;
        }
    }

    /// Accumulated box, or [`Rect::ZERO`] if nothing was expanded yet.
    pub fn rect(&self) -> Rect {
        if self.min.x > self.max.x || self.min.y > self.max.y {
            return Rect::ZERO;
        }
        Rect::from_min_max(self.min, self.max)
    }
}

/// Uniform scale that fits a `src` box into a `dest` box, keeping the aspect
/// ratio ("contain" semantics). `src` components must be positive.
pub fn scale_to_box(dest: Vec2, src: Vec2) -> f32 {
    (dest.x / src.x).min(dest.y / src.y)
}
