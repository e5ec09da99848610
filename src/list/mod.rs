mod arena;
mod iter;
mod linked_list;

pub(crate) use arena::*;
pub use iter::*;
pub use linked_list::*;
