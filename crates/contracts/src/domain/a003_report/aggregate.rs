use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::{ReportStatus, TemplateKind};
use crate::shared::WorkOrderFilter;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportId(pub Uuid);

impl ReportId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for ReportId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ReportId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Отчёт — экземпляр, генерируемый по шаблону.
///
/// Статус и progress меняются только симулятором генерации (frontend).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    #[serde(flatten)]
    pub base: BaseAggregate<ReportId>,

    pub kind: TemplateKind,

    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,

    #[serde(rename = "templateId")]
    pub template_id: Option<String>,

    #[serde(default)]
    pub status: ReportStatus,

    /// Прогресс генерации 0–100
    #[serde(default)]
    pub progress: u8,

    /// Переключатель "ограничить выборку заявок"
    #[serde(rename = "useFilter", default)]
    pub use_filter: bool,

    #[serde(default)]
    pub filter: WorkOrderFilter,
}

impl Report {
    pub fn new_for_insert(code: String, description: String, kind: TemplateKind) -> Self {
        Self {
            base: BaseAggregate::new(ReportId::new_v4(), code, description),
            kind,
            category_id: None,
            template_id: None,
            status: ReportStatus::Draft,
            progress: 0,
            use_filter: false,
            filter: WorkOrderFilter::default(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO (статус/прогресс не трогаем)
    pub fn update(&mut self, dto: &ReportDto) {
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.kind = TemplateKind::parse(&dto.kind);
        self.category_id = dto.category_id.clone();
        self.template_id = dto.template_id.clone();
        self.use_filter = dto.use_filter;
        self.filter = dto.filter.clone();
        self.base.touch();
    }

    /// Перевести в состояние генерации (сброс прогресса)
    pub fn start_generation(&mut self) {
        self.status = ReportStatus::Generating;
        self.progress = 0;
        self.base.touch();
    }

    /// Зафиксировать прогресс; при 100 статус переключается на Completed.
    /// Прогресс монотонный: откат назад игнорируется.
    pub fn apply_progress(&mut self, progress: u8) {
        let clamped = progress.min(100);
        if clamped < self.progress {
            return;
        }
        self.progress = clamped;
        if self.progress == 100 {
            self.status = ReportStatus::Completed;
        }
        self.base.touch();
    }

    /// Сбросить прерванную генерацию.
    ///
    /// Отчёт, оставшийся в Generating без работающего симулятора (вкладку
    /// закрыли на середине), переводится в Failed и может быть запущен
    /// заново. Для остальных статусов ничего не делает.
    pub fn reset_interrupted(&mut self) -> bool {
        if self.status != ReportStatus::Generating {
            return false;
        }
        self.status = ReportStatus::Failed;
        self.base.touch();
        true
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название отчёта обязательно".into());
        }
        if self.use_filter && self.filter.is_empty() {
            return Err("Укажите хотя бы один фильтр заявок".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Report {
    type Id = ReportId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.base.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.base.metadata
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "report"
    }

    fn element_name() -> &'static str {
        "Отчёт"
    }

    fn list_name() -> &'static str {
        "Отчёты"
    }

    fn storage_key() -> &'static str {
        "reports"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO формы отчёта
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportDto {
    pub id: Option<String>,
    pub description: String,
    pub kind: String,

    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,

    #[serde(rename = "templateId")]
    pub template_id: Option<String>,

    #[serde(rename = "useFilter", default)]
    pub use_filter: bool,

    #[serde(default)]
    pub filter: WorkOrderFilter,

    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamps_at_100() {
        let mut report =
            Report::new_for_insert("RPT-001".into(), "Сводка".into(), TemplateKind::Daily);
        report.start_generation();
        report.apply_progress(250);
        assert_eq!(report.progress, 100);
        assert_eq!(report.status, ReportStatus::Completed);
    }

    #[test]
    fn test_progress_is_monotone() {
        let mut report =
            Report::new_for_insert("RPT-002".into(), "Сводка".into(), TemplateKind::Weekly);
        report.start_generation();
        report.apply_progress(60);
        report.apply_progress(40);
        assert_eq!(report.progress, 60);
        assert_eq!(report.status, ReportStatus::Generating);
    }

    #[test]
    fn test_status_flips_only_at_100() {
        let mut report =
            Report::new_for_insert("RPT-003".into(), "Сводка".into(), TemplateKind::Daily);
        report.start_generation();
        report.apply_progress(99);
        assert_eq!(report.status, ReportStatus::Generating);
        report.apply_progress(100);
        assert!(report.status.is_terminal());
    }

    #[test]
    fn test_interrupted_generation_becomes_failed_and_restartable() {
        let mut report =
            Report::new_for_insert("RPT-005".into(), "Сводка".into(), TemplateKind::Daily);
        report.start_generation();
        report.apply_progress(45);
        assert!(report.reset_interrupted());
        assert_eq!(report.status, ReportStatus::Failed);
        // Повторный запуск работает как с нуля
        report.start_generation();
        assert_eq!(report.status, ReportStatus::Generating);
        assert_eq!(report.progress, 0);
    }

    #[test]
    fn test_reset_interrupted_ignores_other_statuses() {
        let mut report =
            Report::new_for_insert("RPT-006".into(), "Сводка".into(), TemplateKind::Daily);
        assert!(!report.reset_interrupted());
        assert_eq!(report.status, ReportStatus::Draft);

        report.start_generation();
        report.apply_progress(100);
        assert!(!report.reset_interrupted());
        assert_eq!(report.status, ReportStatus::Completed);
    }

    #[test]
    fn test_validate_requires_filter_when_toggled() {
        let mut report =
            Report::new_for_insert("RPT-004".into(), "Сводка".into(), TemplateKind::Daily);
        report.use_filter = true;
        assert!(report.validate().is_err());
        report.filter.regions.push("Север".into());
        assert!(report.validate().is_ok());
    }
}
