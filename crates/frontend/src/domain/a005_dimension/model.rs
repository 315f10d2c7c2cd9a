//! Доступ к данным измерений (mock: local storage + задержка)

use crate::shared::list_utils::{Searchable, Sortable};
use crate::shared::storage::{load_collection, save_collection};
use contracts::domain::a005_dimension::{ContentItem, Dimension, DimensionDto};
use contracts::domain::common::AggregateRoot;
use gloo_timers::future::TimeoutFuture;
use std::cmp::Ordering;

const LATENCY_MS: u32 = 250;

fn seed() -> Vec<Dimension> {
    let mut overview =
        Dimension::new_for_insert("DIM-001".into(), "Обзор заявок за период".into(), None);
    let mut totals = ContentItem::new("Итоги периода".into(), 0);
    totals.content =
        "Всего поступило {{metric:Всего заявок}} обращений, повторных — {{metric:Повторные обращения}}.".into();
    if totals.add_child(1, "Динамика по дням".into()).is_ok() {
        if let Some(child) = totals.children.first_mut() {
            child.content = "Пиковые дни и их причины.".into();
        }
    }
    overview.sections.push(totals);

    let mut quality = Dimension::new_for_insert("DIM-002".into(), "Качество исполнения".into(), None);
    let mut sla = ContentItem::new("Соблюдение сроков".into(), 0);
    sla.content = "Доля заявок, закрытых в срок: {{metric:Доля в срок}}%.".into();
    quality.sections.push(sla);

    vec![overview, quality]
}

fn load() -> Vec<Dimension> {
    load_collection(Dimension::storage_key(), seed)
}

fn persist(items: &[Dimension]) -> Result<(), String> {
    save_collection(Dimension::storage_key(), items)
}

pub async fn fetch_all() -> Result<Vec<Dimension>, String> {
    TimeoutFuture::new(LATENCY_MS).await;
    Ok(load())
}

pub async fn save(dto: DimensionDto) -> Result<(), String> {
    TimeoutFuture::new(LATENCY_MS).await;
    let mut items = load();
    match &dto.id {
        Some(id) => {
            let item = items
                .iter_mut()
                .find(|d| &d.to_string_id() == id)
                .ok_or_else(|| format!("Измерение {} не найдено", id))?;
            item.update(&dto);
            item.validate()?;
        }
        None => {
            let code = format!("DIM-{:03}", items.len() + 1);
            let mut item = Dimension::new_for_insert(
                code,
                dto.description.clone(),
                dto.category_id.clone(),
            );
            item.sections = dto.sections.clone();
            item.use_filter = dto.use_filter;
            item.filter = dto.filter.clone();
            item.validate()?;
            items.push(item);
        }
    }
    persist(&items)
}

pub async fn remove(id: String) -> Result<(), String> {
    TimeoutFuture::new(LATENCY_MS).await;
    let mut items = load();
    let before = items.len();
    items.retain(|d| d.to_string_id() != id);
    if items.len() == before {
        return Err(format!("Измерение {} не найдено", id));
    }
    persist(&items)
}

impl Searchable for Dimension {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.base.description.to_lowercase().contains(&filter)
            || self
                .sections
                .iter()
                .any(|s| s.title.to_lowercase().contains(&filter))
    }
}

impl Sortable for Dimension {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "sections" => self.sections.len().cmp(&other.sections.len()),
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
