use std::fmt::Display;

use super::{Color, Point, Rect, Surface, arrow_head};
use crate::list::LinkedList;

/// Width of a node box.
pub const NODE_WIDTH: f32 = 75.0;

/// Height of a node box.
pub const NODE_HEIGHT: f32 = 50.0;

/// Horizontal space between one box and the next; the arrow spans it.
pub const NODE_GAP: f32 = 25.0;

/// Stroke weight of the arrow shaft; the head is sized from it.
pub const ARROW_WEIGHT: f32 = 4.0;

/// Fixed width of the drawing surface.
pub const CANVAS_WIDTH: f32 = 800.0;

/// Fixed height of the drawing surface.
pub const CANVAS_HEIGHT: f32 = 600.0;

/// Where the first box lands unless the renderer is told otherwise.
pub const DEFAULT_ORIGIN: Point = Point::new(10.0, 10.0);

/// Lays a list out as a row of boxes and replays the result onto a
/// [`Surface`].
///
/// A renderer holds nothing but its origin. The layout is a pure function of
/// the list it is handed, so drawing the same state twice issues the same
/// commands twice, and drawing never mutates anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Renderer {
    origin: Point,
}

/// The computed placement of one element: its box, its label, and the arrow
/// to its successor if it has one.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedNode {
    pub rect: Rect,
    pub label: String,
    pub arrow: Option<Arrow>,
}

/// An arrow shaft from the right edge of one box to the left edge of the
/// next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub start: Point,
    pub end: Point,
}

impl Renderer {
    pub const fn new(origin: Point) -> Renderer {
        Renderer { origin }
    }

    pub const fn origin(self) -> Point {
        self.origin
    }

    /// Computes one [`PlacedNode`] per element, head to tail.
    ///
    /// Boxes sit on a `NODE_WIDTH + NODE_GAP` horizontal pitch starting at
    /// the origin; labels are each element's [`Display`] form, anchored at
    /// the box center.
    pub fn layout<T: Display>(&self, list: &LinkedList<T>) -> Vec<PlacedNode> {
        let mut placed = Vec::with_capacity(list.len());
        let mut cursor = self.origin;

        for (position, value) in list.iter().enumerate() {
            let rect = Rect::new(cursor.x, cursor.y, NODE_WIDTH, NODE_HEIGHT);
            let arrow = (position + 1 < list.len()).then(|| Arrow {
                start: Point::new(rect.right(), rect.v_center()),
                end: Point::new(rect.right() + NODE_GAP, rect.v_center()),
            });

            placed.push(PlacedNode {
                rect,
                label: value.to_string(),
                arrow,
            });
            cursor = cursor.offset(NODE_WIDTH + NODE_GAP, 0.0);
        }

        placed
    }

    /// Draws the list: an outlined box and a centered label per element, a
    /// white shaft and arrowhead per link. An empty list draws nothing.
    ///
    /// The surface is not cleared here - the background fill belongs to the
    /// frame, once, before any content.
    pub fn draw<T: Display, S: Surface>(&self, list: &LinkedList<T>, surface: &mut S) {
        for node in self.layout(list) {
            surface.rect(node.rect);
            surface.text(&node.label, node.rect.center());

            if let Some(Arrow { start, end }) = node.arrow {
                surface.line(start, end, ARROW_WEIGHT, Color::White);
                surface.triangle(arrow_head(start, end, ARROW_WEIGHT), Color::White);
            }
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Renderer::new(DEFAULT_ORIGIN)
    }
}
