pub mod aggregate;

pub use aggregate::{ProjectCase, ProjectCaseDto, ProjectCaseId};
