// Document composition: record → abstract block stream.
// Pure and infallible; layout and PDF output live in `layout` and `render`.

pub mod blocks;
pub mod composer;
pub mod labels;

pub use blocks::{Block, Span, TextStyle};
pub use composer::{compose, Composition};
