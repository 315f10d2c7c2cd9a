pub mod aggregate;

pub use aggregate::{ProblemCategory, ProblemCategoryDto, ProblemCategoryId};
