mod controls;
mod sketch;
mod tests;

pub use controls::*;
pub use sketch::*;
