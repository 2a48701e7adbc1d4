//! Page module - the block tree the behaviors operate on
//!
//! A page is a list of sections in document order, each holding a list of
//! blocks. Sections are the containers that visibility gating applies to;
//! blocks are the leaves that carry text, classes, and style props. Lookup is
//! by class selector, and a selector that matches nothing yields an empty set
//! so every operation on it is a no-op.

mod block;
mod demo;
mod document;
mod loader;

// Re-export public types
pub use block::{Block, BlockId, SectionId, StyleProps};
pub use demo::demo_page;
pub use document::{Page, RowExtent, Section};
pub use loader::load_page;
