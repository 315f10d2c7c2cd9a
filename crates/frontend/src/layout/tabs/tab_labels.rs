//! Tab labels - единственный источник правды для заголовков табов.

use contracts::domain::a001_report_category::ReportCategory;
use contracts::domain::a002_report_template::ReportTemplate;
use contracts::domain::a003_report::Report;
use contracts::domain::a004_dimension_category::DimensionCategory;
use contracts::domain::a005_dimension::Dimension;
use contracts::domain::a006_data_metric::DataMetric;
use contracts::domain::a007_problem_category::ProblemCategory;
use contracts::domain::a008_problem::Problem;
use contracts::domain::a009_project_case::ProjectCase;
use contracts::domain::common::AggregateRoot;

/// Возвращает читаемый заголовок таба для данного ключа.
///
/// Для агрегатов берёт `list_name` из contracts. Fallback: сам ключ.
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "a001_report_category" => ReportCategory::list_name(),
        "a002_report_template" => ReportTemplate::list_name(),
        "a003_report" => Report::list_name(),
        "a004_dimension_category" => DimensionCategory::list_name(),
        "a005_dimension" => Dimension::list_name(),
        "a006_data_metric" => DataMetric::list_name(),
        "a007_problem_category" => ProblemCategory::list_name(),
        "a008_problem" => Problem::list_name(),
        "a009_project_case" => ProjectCase::list_name(),
        _ => "Страница",
    }
}
