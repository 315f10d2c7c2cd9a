pub mod aggregate;

pub use aggregate::{ContentStructure, ReportTemplate, ReportTemplateDto, ReportTemplateId};
