use serde::{Deserialize, Serialize};

/// Фильтр заявок (work orders), ограничивающий данные секции отчёта.
///
/// Все поля опциональны; пустой фильтр означает "все заявки".
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct WorkOrderFilter {
    /// Начало периода (ISO date, "2026-08-01")
    #[serde(rename = "dateFrom")]
    pub date_from: Option<String>,
    /// Конец периода
    #[serde(rename = "dateTo")]
    pub date_to: Option<String>,
    /// Каналы поступления заявок
    #[serde(default)]
    pub sources: Vec<String>,
    /// Регионы
    #[serde(default)]
    pub regions: Vec<String>,
    /// Объекты/позиции
    #[serde(default)]
    pub items: Vec<String>,
    /// Произвольные теги
    #[serde(default)]
    pub tags: Vec<String>,
}

impl WorkOrderFilter {
    /// Фильтр считается пустым, если не задан ни один критерий.
    ///
    /// Используется валидацией "хотя бы один фильтр при включённом переключателе".
    pub fn is_empty(&self) -> bool {
        self.date_from.as_deref().map_or(true, |s| s.trim().is_empty())
            && self.date_to.as_deref().map_or(true, |s| s.trim().is_empty())
            && self.sources.is_empty()
            && self.regions.is_empty()
            && self.items.is_empty()
            && self.tags.is_empty()
    }

    /// Краткая сводка для списков ("период + N критериев")
    pub fn summary(&self) -> String {
        if self.is_empty() {
            return "все заявки".to_string();
        }
        let mut parts: Vec<String> = Vec::new();
        match (&self.date_from, &self.date_to) {
            (Some(from), Some(to)) => parts.push(format!("{} — {}", from, to)),
            (Some(from), None) => parts.push(format!("с {}", from)),
            (None, Some(to)) => parts.push(format!("по {}", to)),
            (None, None) => {}
        }
        let criteria =
            self.sources.len() + self.regions.len() + self.items.len() + self.tags.len();
        if criteria > 0 {
            parts.push(format!("критериев: {}", criteria));
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(WorkOrderFilter::default().is_empty());
    }

    #[test]
    fn test_whitespace_dates_are_empty() {
        let f = WorkOrderFilter {
            date_from: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(f.is_empty());
    }

    #[test]
    fn test_single_tag_is_not_empty() {
        let f = WorkOrderFilter {
            tags: vec!["срочные".to_string()],
            ..Default::default()
        };
        assert!(!f.is_empty());
        assert!(f.summary().contains("критериев: 1"));
    }
}
