//! Доступ к данным отчётов (mock: local storage + задержка).
//!
//! Генерация имитируется на клиенте: start_generation переводит отчёт
//! в Generating, record_progress фиксирует каждый шаг симулятора.

use crate::shared::list_utils::{Searchable, Sortable};
use crate::shared::storage::{load_collection, save_collection};
use contracts::domain::a003_report::{Report, ReportDto};
use contracts::domain::common::AggregateRoot;
use contracts::enums::TemplateKind;
use gloo_timers::future::TimeoutFuture;
use std::cmp::Ordering;

const LATENCY_MS: u32 = 250;

fn seed() -> Vec<Report> {
    let mut done = Report::new_for_insert(
        "RPT-001".into(),
        "Сводка по заявкам за 18.08.2026".into(),
        TemplateKind::Daily,
    );
    done.start_generation();
    done.apply_progress(100);

    let draft = Report::new_for_insert(
        "RPT-002".into(),
        "Отчёт о качестве за неделю 34".into(),
        TemplateKind::Weekly,
    );

    vec![done, draft]
}

fn load() -> Vec<Report> {
    load_collection(Report::storage_key(), seed)
}

fn persist(items: &[Report]) -> Result<(), String> {
    save_collection(Report::storage_key(), items)
}

/// Загрузить отчёты.
///
/// `active_ids` — генерации, идущие прямо сейчас на странице. Отчёты,
/// застрявшие в Generating вне этого списка (вкладку закрыли на середине),
/// переводятся в Failed и сохраняются, чтобы их можно было запустить заново.
pub async fn fetch_all(active_ids: &[String]) -> Result<Vec<Report>, String> {
    TimeoutFuture::new(LATENCY_MS).await;
    let mut items = load();
    let mut repaired = false;
    for item in items.iter_mut() {
        if !active_ids.contains(&item.to_string_id()) && item.reset_interrupted() {
            repaired = true;
        }
    }
    if repaired {
        persist(&items)?;
    }
    Ok(items)
}

pub async fn save(dto: ReportDto) -> Result<(), String> {
    TimeoutFuture::new(LATENCY_MS).await;
    let mut items = load();
    match &dto.id {
        Some(id) => {
            let item = items
                .iter_mut()
                .find(|r| &r.to_string_id() == id)
                .ok_or_else(|| format!("Отчёт {} не найден", id))?;
            item.update(&dto);
            item.validate()?;
        }
        None => {
            let code = format!("RPT-{:03}", items.len() + 1);
            let mut item = Report::new_for_insert(
                code,
                dto.description.clone(),
                TemplateKind::parse(&dto.kind),
            );
            item.category_id = dto.category_id.clone();
            item.template_id = dto.template_id.clone();
            item.use_filter = dto.use_filter;
            item.filter = dto.filter.clone();
            item.base.comment = dto.comment.clone();
            item.validate()?;
            items.push(item);
        }
    }
    persist(&items)
}

/// Перевести отчёт в состояние генерации
pub async fn start_generation(id: String) -> Result<(), String> {
    TimeoutFuture::new(LATENCY_MS).await;
    let mut items = load();
    let item = items
        .iter_mut()
        .find(|r| r.to_string_id() == id)
        .ok_or_else(|| format!("Отчёт {} не найден", id))?;
    item.start_generation();
    persist(&items)
}

/// Зафиксировать шаг прогресса (вызывается симулятором на каждом тике)
pub fn record_progress(id: &str, progress: u8) -> Result<(), String> {
    let mut items = load();
    let item = items
        .iter_mut()
        .find(|r| r.to_string_id() == id)
        .ok_or_else(|| format!("Отчёт {} не найден", id))?;
    item.apply_progress(progress);
    persist(&items)
}

pub async fn remove(id: String) -> Result<(), String> {
    TimeoutFuture::new(LATENCY_MS).await;
    let mut items = load();
    let before = items.len();
    items.retain(|r| r.to_string_id() != id);
    if items.len() == before {
        return Err(format!("Отчёт {} не найден", id));
    }
    persist(&items)
}

impl Searchable for Report {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.base.description.to_lowercase().contains(&filter)
            || self.status.display_name().to_lowercase().contains(&filter)
    }
}

impl Sortable for Report {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "kind" => self.kind.display_name().cmp(other.kind.display_name()),
            "status" => self
                .status
                .display_name()
                .cmp(other.status.display_name()),
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
