use serde::{Deserialize, Serialize};

/// Тип шаблона/отчёта (периодичность)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    #[default]
    Daily,
    Weekly,
    Monthly,
    /// Разовый тематический отчёт
    Special,
}

impl TemplateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Daily => "daily",
            TemplateKind::Weekly => "weekly",
            TemplateKind::Monthly => "monthly",
            TemplateKind::Special => "special",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TemplateKind::Daily => "Ежедневный",
            TemplateKind::Weekly => "Еженедельный",
            TemplateKind::Monthly => "Ежемесячный",
            TemplateKind::Special => "Тематический",
        }
    }

    /// Разбор значения из формы (select)
    pub fn parse(s: &str) -> Self {
        match s {
            "weekly" => TemplateKind::Weekly,
            "monthly" => TemplateKind::Monthly,
            "special" => TemplateKind::Special,
            _ => TemplateKind::Daily,
        }
    }

    pub fn all() -> [TemplateKind; 4] {
        [
            TemplateKind::Daily,
            TemplateKind::Weekly,
            TemplateKind::Monthly,
            TemplateKind::Special,
        ]
    }
}
