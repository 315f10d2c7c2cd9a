pub mod report_status;
pub mod template_kind;

pub use report_status::ReportStatus;
pub use template_kind::TemplateKind;
