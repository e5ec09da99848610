//! An interactive teaching sketch for singly linked lists: a positional list,
//! a renderer that lays it out as labelled boxes joined by arrows, and the
//! sketch loop that wires text-field events to list mutations and redraws
//! once per frame.
//!
//! # Purpose
//! Linked lists are easier to explain when you can watch one change. This
//! crate is the whole of that demo except the window: the list, the layout,
//! and the event handling are all here, and all of it is plain data that can
//! be asserted on.
//!
//! # Method
//! Drawing never touches a real canvas. The renderer issues its commands
//! against the [`Surface`](render::Surface) trait, and the in-crate
//! implementation ([`DisplayList`](render::DisplayList)) just records them.
//! A host that owns an actual drawing context replays the recorded frame;
//! the tests compare recorded frames directly.
//!
//! The list itself stores its nodes in an arena and links them by index
//! rather than by owning pointers. Traversal is bounded by the arena, slot
//! reuse is free, and there is no recursive drop chain to blow the stack on
//! a long list.
//!
//! # Error Handling
//! List operations are total: an out-of-range insert clamps to the tail and
//! an out-of-range remove is a no-op, so neither returns a [`Result`]. The
//! one place errors exist is field parsing, where they are strongly typed -
//! structs implementing [`Error`](std::error::Error), combined into an enum
//! for static dispatch.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod list;
pub mod render;
pub mod sketch;

pub(crate) mod util;
