pub mod aggregate;
pub mod content_item;

pub use aggregate::{Dimension, DimensionDto, DimensionId};
pub use content_item::{ContentItem, MAX_SECTION_DEPTH};
