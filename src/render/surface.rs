use super::{Point, Rect};

/// The sketch's palette: a black canvas and white strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

/// A drawing target.
///
/// These five primitives are everything the renderer issues. An
/// implementation maps them onto whatever it actually draws with - an
/// immediate-mode canvas, a terminal cell grid, an SVG writer - or records
/// them, as [`DisplayList`] does.
pub trait Surface {
    /// Clears the whole surface with `color`.
    fn background(&mut self, color: Color);

    /// An outlined box.
    fn rect(&mut self, rect: Rect);

    /// A run of text anchored at its center point.
    fn text(&mut self, text: &str, at: Point);

    /// A stroked line segment.
    fn line(&mut self, from: Point, to: Point, weight: f32, color: Color);

    /// A filled triangle.
    fn triangle(&mut self, vertices: [Point; 3], color: Color);
}

/// One recorded [`Surface`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Background(Color),
    Rect(Rect),
    Text {
        text: String,
        at: Point,
    },
    Line {
        from: Point,
        to: Point,
        weight: f32,
        color: Color,
    },
    Triangle {
        vertices: [Point; 3],
        color: Color,
    },
}

/// A [`Surface`] that records every call as a [`Command`].
///
/// Frames recorded from the same list state compare equal, which is what the
/// tests lean on; a host replays the commands against its real target.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DisplayList {
    commands: Vec<Command>,
}

impl DisplayList {
    pub const fn new() -> DisplayList {
        DisplayList {
            commands: Vec::new(),
        }
    }

    /// The commands recorded so far, in issue order.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Forgets every recorded command, keeping the allocation for the next
    /// frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for DisplayList {
    fn background(&mut self, color: Color) {
        self.commands.push(Command::Background(color));
    }

    fn rect(&mut self, rect: Rect) {
        self.commands.push(Command::Rect(rect));
    }

    fn text(&mut self, text: &str, at: Point) {
        self.commands.push(Command::Text {
            text: text.to_string(),
            at,
        });
    }

    fn line(&mut self, from: Point, to: Point, weight: f32, color: Color) {
        self.commands.push(Command::Line {
            from,
            to,
            weight,
            color,
        });
    }

    fn triangle(&mut self, vertices: [Point; 3], color: Color) {
        self.commands.push(Command::Triangle { vertices, color });
    }
}
