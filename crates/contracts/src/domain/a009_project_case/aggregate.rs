use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectCaseId(pub Uuid);

impl ProjectCaseId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for ProjectCaseId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProjectCaseId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Кейс проекта — эталонный пример разбора, на который ссылаются проблемы
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCase {
    #[serde(flatten)]
    pub base: BaseAggregate<ProjectCaseId>,

    /// Краткое изложение кейса
    #[serde(default)]
    pub summary: String,

    /// Внешняя ссылка на материалы
    #[serde(default)]
    pub link: String,
}

impl ProjectCase {
    pub fn new_for_insert(code: String, description: String, summary: String) -> Self {
        Self {
            base: BaseAggregate::new(ProjectCaseId::new_v4(), code, description),
            summary,
            link: String::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &ProjectCaseDto) {
        self.base.description = dto.description.clone();
        self.summary = dto.summary.clone();
        self.link = dto.link.clone();
        self.base.touch();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название кейса обязательно".into());
        }
        Ok(())
    }
}

impl AggregateRoot for ProjectCase {
    type Id = ProjectCaseId;

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
        "a009"
    }

    fn collection_name() -> &'static str {
        "project_case"
    }

    fn element_name() -> &'static str {
        "Кейс проекта"
    }

    fn list_name() -> &'static str {
        "Кейсы проектов"
    }

    fn storage_key() -> &'static str {
        "projectCases"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProjectCaseDto {
    pub id: Option<String>,
    pub description: String,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub link: String,
}
