//! Доступ к данным шаблонов отчётов (mock: local storage + задержка)

use crate::shared::list_utils::{Searchable, Sortable};
use crate::shared::storage::{load_collection, save_collection};
use contracts::domain::a002_report_template::{ReportTemplate, ReportTemplateDto};
use contracts::domain::common::AggregateRoot;
use contracts::enums::TemplateKind;
use gloo_timers::future::TimeoutFuture;
use std::cmp::Ordering;

const LATENCY_MS: u32 = 250;

fn seed() -> Vec<ReportTemplate> {
    let mut daily = ReportTemplate::new_for_insert(
        "TPL-001".into(),
        "Ежедневная сводка по заявкам".into(),
        TemplateKind::Daily,
    );
    daily.content_structure.rich_text_content =
        "За сутки поступило {{metric:Всего заявок}} обращений, из них повторных — {{metric:Повторные обращения}}.".into();
    daily.is_published = true;

    let weekly = ReportTemplate::new_for_insert(
        "TPL-002".into(),
        "Еженедельный отчёт о качестве".into(),
        TemplateKind::Weekly,
    );

    vec![daily, weekly]
}

fn load() -> Vec<ReportTemplate> {
    load_collection(ReportTemplate::storage_key(), seed)
}

fn persist(items: &[ReportTemplate]) -> Result<(), String> {
    save_collection(ReportTemplate::storage_key(), items)
}

pub async fn fetch_all() -> Result<Vec<ReportTemplate>, String> {
    TimeoutFuture::new(LATENCY_MS).await;
    Ok(load())
}

pub async fn save(dto: ReportTemplateDto) -> Result<(), String> {
    TimeoutFuture::new(LATENCY_MS).await;
    let mut items = load();
    match &dto.id {
        Some(id) => {
            let item = items
                .iter_mut()
                .find(|t| &t.to_string_id() == id)
                .ok_or_else(|| format!("Шаблон {} не найден", id))?;
            item.update(&dto);
            item.validate()?;
        }
        None => {
            let code = format!("TPL-{:03}", items.len() + 1);
            let mut item = ReportTemplate::new_for_insert(
                code,
                dto.description.clone(),
                TemplateKind::parse(&dto.kind),
            );
            item.content_structure.rich_text_content = dto.rich_text_content.clone();
            item.content_structure.embedded_dimensions = dto.embedded_dimensions.clone();
            item.validate()?;
            items.push(item);
        }
    }
    persist(&items)
}

/// Опубликовать или снять шаблон с публикации
pub async fn set_published(id: String, published: bool) -> Result<(), String> {
    TimeoutFuture::new(LATENCY_MS).await;
    let mut items = load();
    let item = items
        .iter_mut()
        .find(|t| t.to_string_id() == id)
        .ok_or_else(|| format!("Шаблон {} не найден", id))?;
    item.set_published(published);
    persist(&items)
}

pub async fn remove(id: String) -> Result<(), String> {
    TimeoutFuture::new(LATENCY_MS).await;
    let mut items = load();
    let before = items.len();
    items.retain(|t| t.to_string_id() != id);
    if items.len() == before {
        return Err(format!("Шаблон {} не найден", id));
    }
    persist(&items)
}

impl Searchable for ReportTemplate {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.base.description.to_lowercase().contains(&filter)
            || self.kind.display_name().to_lowercase().contains(&filter)
    }
}

impl Sortable for ReportTemplate {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "kind" => self.kind.display_name().cmp(other.kind.display_name()),
            "published" => self.is_published.cmp(&other.is_published),
            "updated" => self
                .base
                .metadata
                .updated_at
                .cmp(&other.base.metadata.updated_at),
            _ => self
                .base
                .description
                .to_lowercase()
                .cmp(&other.base.description.to_lowercase()),
        }
    }
}
