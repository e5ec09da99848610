//! The sketch's control surface: three text fields (a value, an insert
//! index, a delete index) and the two buttons next to them.
//!
//! Field text is validated here, explicitly. A field that doesn't read as a
//! number is rejected with a typed error rather than coerced into some
//! degenerate index, and a rejected press changes nothing.

#[doc(inline)]
pub use crate::util::error::{ControlError, EmptyField, MalformedNumber};

/// A button press, carrying the raw text of the fields beside it.
///
/// The text is parsed when the press is handled, not when it is built, so a
/// host can forward exactly what the user typed and surface whatever error
/// comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The "Insert" button, with the value and insert-index fields.
    Insert { value: String, index: String },
    /// The "Remove" button, with the delete-index field.
    Remove { index: String },
}

/// Parses the value field: required, base-10 integer.
pub(crate) fn parse_value(text: &str) -> Result<i64, ControlError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(EmptyField { field: "value" }.into());
    }
    trimmed.parse().map_err(|_| {
        MalformedNumber {
            field: "value",
            text: text.to_string(),
        }
        .into()
    })
}

/// Parses an index field.
///
/// A blank field means the front of the list. Anything else must be a
/// base-10 unsigned integer; negative text is rejected, not wrapped.
pub(crate) fn parse_index(field: &'static str, text: &str) -> Result<usize, ControlError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| {
        MalformedNumber {
            field,
            text: text.to_string(),
        }
        .into()
    })
}
