//! Profile picture processing.

pub mod resizer;

pub use resizer::BoundingBoxPictureResizer;
