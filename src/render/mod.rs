mod geometry;
mod renderer;
mod surface;

pub use geometry::*;
pub use renderer::*;
pub use surface::*;
