use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportCategoryId(pub Uuid);

impl ReportCategoryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ReportCategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ReportCategoryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Категория отчётов. Дерево через parent_id (None = корень).
///
/// Наименование хранится в base.description, развёрнутое описание — в base.comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportCategory {
    #[serde(flatten)]
    pub base: BaseAggregate<ReportCategoryId>,

    /// Родительская категория (ID строкой); None — верхний уровень
    #[serde(rename = "parentId")]
    pub parent_id: Option<String>,
}

impl ReportCategory {
    /// Создать новую категорию
    pub fn new_for_insert(
        code: String,
        description: String,
        parent_id: Option<String>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(ReportCategoryId::new_v4(), code, description);
        base.comment = comment;

        Self { base, parent_id }
    }

    /// Получить ID как строку
    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &ReportCategoryDto) {
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.parent_id = dto.parent_id.clone();
        self.base.touch();
    }

    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        if let Some(pid) = &self.parent_id {
            if pid == &self.to_string_id() {
                return Err("Категория не может быть родителем самой себя".into());
            }
        }
        Ok(())
    }
}

impl AggregateRoot for ReportCategory {
    type Id = ReportCategoryId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "report_category"
    }

    fn element_name() -> &'static str {
        "Категория отчётов"
    }

    fn list_name() -> &'static str {
        "Категории отчётов"
    }

    fn storage_key() -> &'static str {
        "reportCategories"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления категории
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportCategoryDto {
    pub id: Option<String>,
    pub description: String,

    #[serde(rename = "parentId")]
    pub parent_id: Option<String>,

    pub comment: Option<String>,
}
