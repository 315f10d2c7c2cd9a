//! Tab content registry - единственный источник правды для маппинга tab.key → View

use crate::domain::a001_report_category::ui::tree::ReportCategoryTree;
use crate::domain::a002_report_template::ui::list::ReportTemplateList;
use crate::domain::a003_report::ui::list::ReportList;
use crate::domain::a004_dimension_category::ui::tree::DimensionCategoryTree;
use crate::domain::a005_dimension::ui::list::DimensionList;
use crate::domain::a006_data_metric::ui::list::DataMetricList;
use crate::domain::a007_problem_category::ui::tree::ProblemCategoryTree;
use crate::domain::a008_problem::ui::list::ProblemList;
use crate::domain::a009_project_case::ui::list::ProjectCaseList;
use leptos::prelude::*;

/// Возвращает View для ключа таба.
///
/// Неизвестный ключ рендерит заглушку (так таб из битого URL не роняет shell).
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        "a001_report_category" => view! { <ReportCategoryTree /> }.into_any(),
        "a002_report_template" => view! { <ReportTemplateList /> }.into_any(),
        "a003_report" => view! { <ReportList /> }.into_any(),
        "a004_dimension_category" => view! { <DimensionCategoryTree /> }.into_any(),
        "a005_dimension" => view! { <DimensionList /> }.into_any(),
        "a006_data_metric" => view! { <DataMetricList /> }.into_any(),
        "a007_problem_category" => view! { <ProblemCategoryTree /> }.into_any(),
        "a008_problem" => view! { <ProblemList /> }.into_any(),
        "a009_project_case" => view! { <ProjectCaseList /> }.into_any(),
        unknown => view! {
            <div class="content">
                <p style="color: #888; padding: 20px;">
                    {format!("Неизвестная страница: {}", unknown)}
                </p>
            </div>
        }
        .into_any(),
    }
}
