use serde::{Deserialize, Serialize};

/// Статус жизненного цикла отчёта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    /// Черновик — отчёт создан, генерация не запускалась
    #[default]
    Draft,
    /// Идёт генерация (симуляция, progress 0–100)
    Generating,
    /// Генерация завершена
    Completed,
    /// Генерация завершилась ошибкой
    Failed,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Draft => "draft",
            ReportStatus::Generating => "generating",
            ReportStatus::Completed => "completed",
            ReportStatus::Failed => "failed",
        }
    }

    /// Отображаемое имя для UI
    pub fn display_name(&self) -> &'static str {
        match self {
            ReportStatus::Draft => "Черновик",
            ReportStatus::Generating => "Генерация",
            ReportStatus::Completed => "Готов",
            ReportStatus::Failed => "Ошибка",
        }
    }

    /// Терминальный статус: генерацию перезапускать можно, продолжать — нет
    pub fn is_terminal(&self) -> bool {
        matches!(self, ReportStatus::Completed | ReportStatus::Failed)
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_statuses() {
        assert!(!ReportStatus::Draft.is_terminal());
        assert!(!ReportStatus::Generating.is_terminal());
        assert!(ReportStatus::Completed.is_terminal());
        assert!(ReportStatus::Failed.is_terminal());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ReportStatus::Generating).unwrap();
        assert_eq!(json, "\"generating\"");
        let back: ReportStatus = serde_json::from_str("\"failed\"").unwrap();
        assert_eq!(back, ReportStatus::Failed);
    }
}
