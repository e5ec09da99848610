use std::f32::consts::FRAC_PI_2;

/// A point on the canvas, or equally a displacement between two of them.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Point {
        Point { x, y }
    }

    pub const fn offset(self, dx: f32, dy: f32) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }
}

/// An axis-aligned box, positioned by its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect { x, y, w, h }
    }

    pub const fn right(self) -> f32 {
        self.x + self.w
    }

    pub const fn bottom(self) -> f32 {
        self.y + self.h
    }

    pub const fn v_center(self) -> f32 {
        self.y + self.h / 2.0
    }

    pub const fn center(self) -> Point {
        Point::new(self.x + self.w / 2.0, self.v_center())
    }
}

/// The three vertices of the arrowhead for a shaft from `start` to `end`,
/// pointing at `end`.
///
/// The head is an isosceles triangle sized by the stroke `weight` and rotated
/// to the shaft's direction, so it holds for any orientation even though the
/// layout only ever produces horizontal shafts.
pub fn arrow_head(start: Point, end: Point, weight: f32) -> [Point; 3] {
    let angle = (start.y - end.y).atan2(start.x - end.x) - FRAC_PI_2;
    let (sin, cos) = angle.sin_cos();
    let offset = weight * 3.0;

    [
        Point::new(-offset * 0.5, offset),
        Point::new(offset * 0.5, offset),
        Point::new(0.0, -offset * 0.5),
    ]
    .map(|p| Point::new(end.x + p.x * cos - p.y * sin, end.y + p.x * sin + p.y * cos))
}
