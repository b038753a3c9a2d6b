//! Presentation helpers shared by every front end.

mod display;
mod paging;
mod rows;

pub use display::DisplayItem;
pub use paging::Paging;
pub use rows::row_chunk;
