pub mod aggregate;

pub use aggregate::{Problem, ProblemDto, ProblemId};
