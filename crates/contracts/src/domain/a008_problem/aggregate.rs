use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProblemId(pub Uuid);

impl ProblemId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for ProblemId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProblemId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Запись базы знаний: типовая проблема с суждением и атрибуцией.
///
/// Используется при разборе всплесков показателей: секция отчёта ссылается
/// на проблему, проблема — на показатели и кейсы проектов.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Problem {
    #[serde(flatten)]
    pub base: BaseAggregate<ProblemId>,

    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,

    /// Наблюдаемое явление ("рост повторных обращений")
    #[serde(default)]
    pub phenomenon: String,

    /// Суждение: как интерпретировать явление
    #[serde(default)]
    pub judgment: String,

    /// Атрибуция: чему приписывается причина
    #[serde(default)]
    pub attribution: String,

    /// Связанные показатели (ID a006)
    #[serde(rename = "metricIds", default)]
    pub metric_ids: Vec<String>,

    /// Связанные кейсы проектов (ID a009)
    #[serde(rename = "caseIds", default)]
    pub case_ids: Vec<String>,
}

impl Problem {
    pub fn new_for_insert(
        code: String,
        description: String,
        category_id: Option<String>,
    ) -> Self {
        Self {
            base: BaseAggregate::new(ProblemId::new_v4(), code, description),
            category_id,
            phenomenon: String::new(),
            judgment: String::new(),
            attribution: String::new(),
            metric_ids: Vec::new(),
            case_ids: Vec::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &ProblemDto) {
        self.base.description = dto.description.clone();
        self.category_id = dto.category_id.clone();
        self.phenomenon = dto.phenomenon.clone();
        self.judgment = dto.judgment.clone();
        self.attribution = dto.attribution.clone();
        self.metric_ids = dto.metric_ids.clone();
        self.case_ids = dto.case_ids.clone();
        self.base.touch();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название проблемы обязательно".into());
        }
        if self.judgment.trim().is_empty() {
            return Err("Суждение обязательно для записи базы знаний".into());
        }
        Ok(())
    }
}

impl AggregateRoot for Problem {
    type Id = ProblemId;

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
        "a008"
    }

    fn collection_name() -> &'static str {
        "problem"
    }

    fn element_name() -> &'static str {
        "Проблема"
    }

    fn list_name() -> &'static str {
        "База знаний проблем"
    }

    fn storage_key() -> &'static str {
        "problems"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProblemDto {
    pub id: Option<String>,
    pub description: String,

    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,

    #[serde(default)]
    pub phenomenon: String,

    #[serde(default)]
    pub judgment: String,

    #[serde(default)]
    pub attribution: String,

    #[serde(rename = "metricIds", default)]
    pub metric_ids: Vec<String>,

    #[serde(rename = "caseIds", default)]
    pub case_ids: Vec<String>,
}
