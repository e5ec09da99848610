#![cfg(test)]

use pretty_assertions::assert_eq;

use super::*;
use crate::render::{Color, Command, DisplayList};

fn insert(value: &str, index: &str) -> Event {
    Event::Insert {
        value: value.into(),
        index: index.into(),
    }
}

fn remove(index: &str) -> Event {
    Event::Remove {
        index: index.into(),
    }
}

fn contents(sketch: &Sketch) -> Vec<i64> {
    sketch.list().iter().copied().collect()
}

#[test]
fn test_seeded_opening_state() {
    assert_eq!(contents(&Sketch::new()), [1, 2, 3, 4, 5]);
    assert!(Sketch::empty().list().is_empty());
}

#[test]
fn test_insert_press() {
    let mut sketch = Sketch::new();
    sketch.handle(&insert("9", "2")).expect("A numeric press should validate.");
    assert_eq!(contents(&sketch), [1, 2, 9, 3, 4, 5]);
}

#[test]
fn test_insert_past_the_end_clamps() {
    let mut sketch = Sketch::new();
    sketch.handle(&insert("9", "10")).expect("A numeric press should validate.");
    assert_eq!(
        contents(&sketch),
        [1, 2, 3, 4, 5, 9],
        "An index past the end should append at the tail."
    );
}

#[test]
fn test_blank_index_means_the_front() {
    let mut sketch = Sketch::new();
    sketch.handle(&insert("0", "")).expect("A blank index should validate.");
    assert_eq!(contents(&sketch), [0, 1, 2, 3, 4, 5]);

    sketch.handle(&remove("")).expect("A blank index should validate.");
    assert_eq!(contents(&sketch), [1, 2, 3, 4, 5]);
}

#[test]
fn test_remove_press() {
    let mut sketch = Sketch::new();
    sketch.handle(&remove("2")).expect("A numeric press should validate.");
    assert_eq!(contents(&sketch), [1, 2, 4, 5]);
}

#[test]
fn test_remove_past_the_end_is_a_noop() {
    let mut sketch = Sketch::new();
    sketch.handle(&remove("10")).expect("An out-of-range index still validates.");
    assert_eq!(
        contents(&sketch),
        [1, 2, 3, 4, 5],
        "An unreachable index should leave the list alone."
    );
}

#[test]
fn test_blank_value_is_rejected() {
    let mut sketch = Sketch::new();
    let error = sketch.handle(&insert("", "0")).unwrap_err();
    assert!(matches!(error, ControlError::EmptyField(_)));
    assert_eq!(
        contents(&sketch),
        [1, 2, 3, 4, 5],
        "A rejected press should mutate nothing."
    );
}

#[test]
fn test_malformed_fields_are_rejected() {
    let mut sketch = Sketch::new();

    let error = sketch.handle(&insert("nine", "0")).unwrap_err();
    assert!(matches!(error, ControlError::MalformedNumber(_)));

    let error = sketch.handle(&insert("9", "two")).unwrap_err();
    assert!(matches!(error, ControlError::MalformedNumber(_)));

    let error = sketch.handle(&remove("-3")).unwrap_err();
    assert!(
        matches!(error, ControlError::MalformedNumber(_)),
        "Negative index text should be rejected, not wrapped."
    );

    assert_eq!(contents(&sketch), [1, 2, 3, 4, 5]);
}

#[test]
fn test_error_messages_name_the_field() {
    let error = Sketch::new().handle(&insert("", "0")).unwrap_err();
    assert_eq!(format!("{error}"), "The value field is empty!");

    let error = Sketch::new().handle(&remove("x")).unwrap_err();
    assert_eq!(
        format!("{error}"),
        "Expected a number in the delete-index field, found \"x\"!"
    );
}

#[test]
fn test_frame_clears_before_content() {
    let sketch = Sketch::new();
    let mut frame = DisplayList::new();
    sketch.frame(&mut frame);

    assert_eq!(
        frame.commands().first(),
        Some(&Command::Background(Color::Black)),
        "Every frame should open with the background fill."
    );
    // A box and label for each of the 5 nodes, a shaft and head for each of
    // the 4 links.
    assert_eq!(frame.commands().len(), 1 + 5 * 2 + 4 * 2);
}

#[test]
fn test_frames_from_the_same_state_are_identical() {
    let sketch = Sketch::new();

    let mut first = DisplayList::new();
    sketch.frame(&mut first);
    let mut second = DisplayList::new();
    sketch.frame(&mut second);

    assert_eq!(first, second, "A frame should be a pure function of the list.");
    assert_eq!(contents(&sketch), [1, 2, 3, 4, 5]);
}

#[test]
fn test_empty_frame_is_background_only() {
    let sketch = Sketch::empty();
    let mut frame = DisplayList::new();
    sketch.frame(&mut frame);

    assert_eq!(frame.commands(), [Command::Background(Color::Black)]);
}
