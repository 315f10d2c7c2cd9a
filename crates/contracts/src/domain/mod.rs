pub mod common;

pub mod a001_report_category;
pub mod a002_report_template;
pub mod a003_report;
pub mod a004_dimension_category;
pub mod a005_dimension;
pub mod a006_data_metric;
pub mod a007_problem_category;
pub mod a008_problem;
pub mod a009_project_case;
