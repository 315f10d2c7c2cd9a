use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DataMetricId(pub Uuid);

impl DataMetricId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for DataMetricId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(DataMetricId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Показатель (индикатор) — именованный плейсхолдер, подставляемый
/// в текст отчёта при генерации. Имя хранится в base.description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataMetric {
    #[serde(flatten)]
    pub base: BaseAggregate<DataMetricId>,

    /// Единица измерения ("шт.", "%", "часов")
    #[serde(default)]
    pub unit: String,

    /// Демонстрационное значение для предпросмотра шаблона
    #[serde(rename = "sampleValue", default)]
    pub sample_value: String,
}

impl DataMetric {
    pub fn new_for_insert(code: String, description: String, unit: String) -> Self {
        Self {
            base: BaseAggregate::new(DataMetricId::new_v4(), code, description),
            unit,
            sample_value: String::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.base.id.as_string()
    }

    /// Токен, вставляемый в текст шаблона
    pub fn placeholder_token(&self) -> String {
        format!("{{{{metric:{}}}}}", self.base.description)
    }

    pub fn update(&mut self, dto: &DataMetricDto) {
        self.base.description = dto.description.clone();
        self.unit = dto.unit.clone();
        self.sample_value = dto.sample_value.clone();
        self.base.touch();
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.description.trim().is_empty() {
            return Err("Имя показателя обязательно".into());
        }
        Ok(())
    }
}

impl AggregateRoot for DataMetric {
    type Id = DataMetricId;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "data_metric"
    }

    fn element_name() -> &'static str {
        "Показатель"
    }

    fn list_name() -> &'static str {
        "Показатели"
    }

    fn storage_key() -> &'static str {
        "dataMetrics"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DataMetricDto {
    pub id: Option<String>,
    pub description: String,
    pub unit: String,

    #[serde(rename = "sampleValue", default)]
    pub sample_value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_token_format() {
        let metric =
            DataMetric::new_for_insert("MT-001".into(), "Всего заявок".into(), "шт.".into());
        assert_eq!(metric.placeholder_token(), "{{metric:Всего заявок}}");
    }
}
