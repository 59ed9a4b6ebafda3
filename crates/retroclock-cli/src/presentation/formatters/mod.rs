pub mod segments;

pub use segments::{Cell, GLYPH_HEIGHT, GLYPH_WIDTH, SegmentArt};
