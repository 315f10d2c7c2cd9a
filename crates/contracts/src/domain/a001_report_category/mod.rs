pub mod aggregate;

pub use aggregate::{ReportCategory, ReportCategoryDto, ReportCategoryId};
