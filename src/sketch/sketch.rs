use super::controls::{ControlError, Event, parse_index, parse_value};
use crate::list::LinkedList;
use crate::render::{Color, Renderer, Surface};

/// The sketch itself: one list, one renderer, and the event/frame loop
/// between them.
///
/// Everything runs on the caller's thread and to completion. A press is
/// fully applied before the next one is looked at, and a frame only ever
/// reads, so the mutator path (button handlers) and the reader path (the
/// per-frame draw) can never interleave.
pub struct Sketch {
    list: LinkedList<i64>,
    renderer: Renderer,
}

impl Sketch {
    /// A sketch seeded with the demo's opening state, `[1, 2, 3, 4, 5]`.
    pub fn new() -> Sketch {
        let mut sketch = Sketch::empty();
        for value in (1..=5).rev() {
            sketch.list.add(0, value);
        }
        sketch
    }

    /// A sketch with nothing in it yet.
    pub fn empty() -> Sketch {
        Sketch {
            list: LinkedList::new(),
            renderer: Renderer::default(),
        }
    }

    /// The list as the next frame will see it.
    pub const fn list(&self) -> &LinkedList<i64> {
        &self.list
    }

    /// Applies one button press.
    ///
    /// The fields are validated first; a rejected press returns its error
    /// and leaves the list exactly as it was. A press that validates always
    /// succeeds - an out-of-range insert index clamps to the tail and an
    /// out-of-range remove index is a no-op, the list's own contract.
    pub fn handle(&mut self, event: &Event) -> Result<(), ControlError> {
        match event {
            Event::Insert { value, index } => {
                let value = parse_value(value)?;
                let index = parse_index("insert-index", index)?;
                self.list.add(index, value);
            },
            Event::Remove { index } => {
                let index = parse_index("delete-index", index)?;
                self.list.remove(index);
            },
        }
        Ok(())
    }

    /// Draws one frame: a background fill, then the current list.
    pub fn frame<S: Surface>(&self, surface: &mut S) {
        surface.background(Color::Black);
        self.renderer.draw(&self.list, surface);
    }
}

impl Default for Sketch {
    fn default() -> Self {
        Sketch::new()
    }
}
