use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionCategoryId(pub Uuid);

impl DimensionCategoryId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for DimensionCategoryId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(DimensionCategoryId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Категория измерений (дерево через parent_id)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionCategory {
    #[serde(flatten)]
    pub base: BaseAggregate<DimensionCategoryId>,

    #[serde(rename = "parentId")]
    pub parent_id: Option<String>,
}

impl DimensionCategory {
    pub fn new_for_insert(
        code: String,
        description: String,
        parent_id: Option<String>,
        comment: Option<String>,
    ) -> Self {
        let mut base = BaseAggregate::new(DimensionCategoryId::new_v4(), code, description);
        base.comment = comment;
        Self { base, parent_id }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &DimensionCategoryDto) {
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

impl AggregateRoot for DimensionCategory {
    type Id = DimensionCategoryId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "dimension_category"
    }

    fn element_name() -> &'static str {
        "Категория измерений"
    }

    fn list_name() -> &'static str {
        "Категории измерений"
    }

    fn storage_key() -> &'static str {
        "dimensionCategories"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DimensionCategoryDto {
    pub id: Option<String>,
    pub description: String,

    #[serde(rename = "parentId")]
    pub parent_id: Option<String>,

    pub comment: Option<String>,
}
