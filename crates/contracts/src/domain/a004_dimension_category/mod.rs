pub mod aggregate;

pub use aggregate::{DimensionCategory, DimensionCategoryDto, DimensionCategoryId};
