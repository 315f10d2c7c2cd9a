use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::enums::TemplateKind;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportTemplateId(pub Uuid);

impl ReportTemplateId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for ReportTemplateId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ReportTemplateId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Value objects
// ============================================================================

/// Содержимое шаблона: свободный текст с плейсхолдерами + вставленные измерения.
///
/// Плейсхолдеры в тексте имеют вид `{{metric:Имя}}` и `{{dimension:Имя}}`,
/// `embedded_dimensions` хранит ID вставленных измерений для обратных ссылок.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ContentStructure {
    #[serde(rename = "richTextContent")]
    pub rich_text_content: String,

    #[serde(rename = "embeddedDimensions", default)]
    pub embedded_dimensions: Vec<String>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Шаблон отчёта
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportTemplate {
    #[serde(flatten)]
    pub base: BaseAggregate<ReportTemplateId>,

    pub kind: TemplateKind,

    #[serde(rename = "contentStructure", default)]
    pub content_structure: ContentStructure,

    #[serde(rename = "isPublished", default)]
    pub is_published: bool,
}

impl ReportTemplate {
    pub fn new_for_insert(code: String, description: String, kind: TemplateKind) -> Self {
        Self {
            base: BaseAggregate::new(ReportTemplateId::new_v4(), code, description),
            kind,
            content_structure: ContentStructure::default(),
            is_published: false,
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Обновить данные из DTO
    pub fn update(&mut self, dto: &ReportTemplateDto) {
        self.base.description = dto.description.clone();
        self.kind = TemplateKind::parse(&dto.kind);
        self.content_structure.rich_text_content = dto.rich_text_content.clone();
        self.content_structure.embedded_dimensions = dto.embedded_dimensions.clone();
        self.base.touch();
    }

    /// Опубликовать/снять с публикации
    pub fn set_published(&mut self, published: bool) {
        self.is_published = published;
        self.base.touch();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название шаблона обязательно".into());
        }
        Ok(())
    }
}

impl AggregateRoot for ReportTemplate {
    type Id = ReportTemplateId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "report_template"
    }

    fn element_name() -> &'static str {
        "Шаблон отчёта"
    }

    fn list_name() -> &'static str {
        "Шаблоны отчётов"
    }

    fn storage_key() -> &'static str {
        "reportTemplates"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO формы шаблона
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportTemplateDto {
    pub id: Option<String>,
    pub description: String,
    pub kind: String,

    #[serde(rename = "richTextContent")]
    pub rich_text_content: String,

    #[serde(rename = "embeddedDimensions", default)]
    pub embedded_dimensions: Vec<String>,
}
