use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProblemCategoryId(pub Uuid);

impl ProblemCategoryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for ProblemCategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ProblemCategoryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Категория базы знаний проблем (дерево через parent_id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemCategory {
    #[serde(flatten)]
    pub base: BaseAggregate<ProblemCategoryId>,

    #[serde(rename = "parentId")]
    pub parent_id: Option<String>,
}

impl ProblemCategory {
    pub fn new_for_insert(
        code: String,
        description: String,
        parent_id: Option<String>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(ProblemCategoryId::new_v4(), code, description);
        base.comment = comment;
        Self { base, parent_id }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &ProblemCategoryDto) {
        self.base.description = dto.description.clone();
        self.base.comment = dto.comment.clone();
        self.parent_id = dto.parent_id.clone();
        self.base.touch();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Наименование не может быть пустым".into());
        }
        Ok(())
    }
}

impl AggregateRoot for ProblemCategory {
    type Id = ProblemCategoryId;

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
        "a007"
    }

    fn collection_name() -> &'static str {
        "problem_category"
    }

    fn element_name() -> &'static str {
        "Категория проблем"
    }

    fn list_name() -> &'static str {
        "Категории проблем"
    }

    fn storage_key() -> &'static str {
        "problemCategories"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProblemCategoryDto {
    pub id: Option<String>,
    pub description: String,

    #[serde(rename = "parentId")]
    pub parent_id: Option<String>,

    pub comment: Option<String>,
}
