use super::content_item::{ContentItem, MAX_SECTION_DEPTH};
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use crate::shared::WorkOrderFilter;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DimensionId(pub Uuid);

impl DimensionId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for DimensionId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(DimensionId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Измерение — переиспользуемый блок повествования отчёта.
///
/// Содержит дерево секций (до трёх уровней) и опциональный фильтр заявок,
/// ограничивающий данные, о которых секции рассказывают.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dimension {
    #[serde(flatten)]
    pub base: BaseAggregate<DimensionId>,

    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,

    #[serde(default)]
    pub sections: Vec<ContentItem>,

    #[serde(rename = "useFilter", default)]
    pub use_filter: bool,

    #[serde(default)]
    pub filter: WorkOrderFilter,
}

impl Dimension {
    pub fn new_for_insert(code: String, description: String, category_id: Option<String>) -> Self {
        Self {
            base: BaseAggregate::new(DimensionId::new_v4(), code, description),
            category_id,
            sections: Vec::new(),
            use_filter: false,
            filter: WorkOrderFilter::default(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    pub fn update(&mut self, dto: &DimensionDto) {
        self.base.description = dto.description.clone();
        self.category_id = dto.category_id.clone();
        self.sections = dto.sections.clone();
        self.use_filter = dto.use_filter;
        self.filter = dto.filter.clone();
        self.base.touch();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Название измерения обязательно".into());
        }
        for section in &self.sections {
            if section.depth() > MAX_SECTION_DEPTH {
                return Err(format!(
                    "Секция '{}' глубже {} уровней",
                    section.title, MAX_SECTION_DEPTH
                ));
            }
        }
        if self.use_filter && self.filter.is_empty() {
            return Err("Укажите хотя бы один фильтр заявок".into());
        }
        Ok(())
    }

    /// Плоский текст всех секций — то, что вставляется в шаблон отчёта.
    ///
    /// Заголовки уровней оформляются markdown-решётками по уровню вложенности.
    pub fn render_as_text(&self) -> String {
        fn render(item: &ContentItem, level: usize, out: &mut String) {
            out.push_str(&"#".repeat(level));
            out.push(' ');
            out.push_str(&item.title);
            out.push('\n');
            if !item.content.is_empty() {
                out.push_str(&item.content);
                out.push('\n');
            }
            for child in &item.children {
                render(child, level + 1, out);
            }
        }

        let mut out = String::new();
        for section in &self.sections {
            render(section, 1, &mut out);
        }
        out
    }
}

impl AggregateRoot for Dimension {
    type Id = DimensionId;

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
        "a005"
    }

    fn collection_name() -> &'static str {
        "dimension"
    }

    fn element_name() -> &'static str {
        "Измерение"
    }

    fn list_name() -> &'static str {
        "Измерения"
    }

    fn storage_key() -> &'static str {
        "dimensions"
    }
}

/// DTO формы измерения
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DimensionDto {
    pub id: Option<String>,
    pub description: String,

    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,

    #[serde(default)]
    pub sections: Vec<ContentItem>,

    #[serde(rename = "useFilter", default)]
    pub use_filter: bool,

    #[serde(default)]
    pub filter: WorkOrderFilter,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_as_text_nests_headings() {
        let mut dim = Dimension::new_for_insert("DIM-001".into(), "Обзор заявок".into(), None);
        let mut top = ContentItem::new("Итоги недели".into(), 0);
        top.content = "Всего поступило {{metric:Всего заявок}} обращений.".into();
        top.add_child(1, "По регионам".into()).unwrap();
        dim.sections.push(top);

        let text = dim.render_as_text();
        assert!(text.starts_with("# Итоги недели\n"));
        assert!(text.contains("\n## По регионам\n"));
        assert!(text.contains("{{metric:Всего заявок}}"));
    }

    #[test]
    fn test_validate_filter_toggle() {
        let mut dim = Dimension::new_for_insert("DIM-002".into(), "Срез".into(), None);
        dim.use_filter = true;
        assert!(dim.validate().is_err());
        dim.filter.sources.push("телефон".into());
        assert!(dim.validate().is_ok());
    }
}
