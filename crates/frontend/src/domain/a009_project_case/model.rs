//! Доступ к данным кейсов проектов (mock: local storage + задержка)

use crate::shared::list_utils::{Searchable, Sortable};
use crate::shared::storage::{load_collection, save_collection};
use contracts::domain::a009_project_case::{ProjectCase, ProjectCaseDto};
use contracts::domain::common::AggregateRoot;
use gloo_timers::future::TimeoutFuture;
use std::cmp::Ordering;

const LATENCY_MS: u32 = 250;

fn seed() -> Vec<ProjectCase> {
    let mut storm = ProjectCase::new_for_insert(
        "CS-001".into(),
        "Ликвидация последствий шторма, июль 2025".into(),
        "Массовые отключения, развёрнут штаб, заявки закрыты за 72 часа".into(),
    );
    storm.link = "https://wiki.example.org/cases/storm-2025-07".into();

    let mut billing = ProjectCase::new_for_insert(
        "CS-002".into(),
        "Всплеск обращений после смены биллинга".into(),
        "Рост повторных обращений объяснён ошибкой в рассылке квитанций".into(),
    );
    billing.link = "https://wiki.example.org/cases/billing-2025-03".into();

    vec![storm, billing]
}

fn load() -> Vec<ProjectCase> {
    load_collection(ProjectCase::storage_key(), seed)
}

fn persist(items: &[ProjectCase]) -> Result<(), String> {
    save_collection(ProjectCase::storage_key(), items)
}

pub async fn fetch_all() -> Result<Vec<ProjectCase>, String> {
    TimeoutFuture::new(LATENCY_MS).await;
    Ok(load())
}

pub async fn save(dto: ProjectCaseDto) -> Result<(), String> {
    TimeoutFuture::new(LATENCY_MS).await;
    let mut items = load();
    match &dto.id {
        Some(id) => {
            let item = items
                .iter_mut()
                .find(|c| &c.to_string_id() == id)
                .ok_or_else(|| format!("Кейс {} не найден", id))?;
            item.update(&dto);
            item.validate()?;
        }
        None => {
            let code = format!("CS-{:03}", items.len() + 1);
            let mut item =
                ProjectCase::new_for_insert(code, dto.description.clone(), dto.summary.clone());
            item.link = dto.link.clone();
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
    items.retain(|c| c.to_string_id() != id);
    if items.len() == before {
        return Err(format!("Кейс {} не найден", id));
    }
    persist(&items)
}

impl Searchable for ProjectCase {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.base.description.to_lowercase().contains(&filter)
            || self.summary.to_lowercase().contains(&filter)
    }
}

impl Sortable for ProjectCase {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
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
