//! Доступ к данным показателей (mock: local storage + задержка)

use crate::shared::list_utils::{Searchable, Sortable};
use crate::shared::storage::{load_collection, save_collection};
use contracts::domain::a006_data_metric::{DataMetric, DataMetricDto};
use contracts::domain::common::AggregateRoot;
use gloo_timers::future::TimeoutFuture;
use std::cmp::Ordering;

const LATENCY_MS: u32 = 250;

fn seed() -> Vec<DataMetric> {
    let mut total =
        DataMetric::new_for_insert("MT-001".into(), "Всего заявок".into(), "шт.".into());
    total.sample_value = "1 248".into();

    let mut repeated =
        DataMetric::new_for_insert("MT-002".into(), "Повторные обращения".into(), "шт.".into());
    repeated.sample_value = "87".into();

    let mut sla = DataMetric::new_for_insert("MT-003".into(), "Доля в срок".into(), "%".into());
    sla.sample_value = "94,2".into();

    let mut avg_time =
        DataMetric::new_for_insert("MT-004".into(), "Среднее время закрытия".into(), "часов".into());
    avg_time.sample_value = "18,5".into();

    vec![total, repeated, sla, avg_time]
}

fn load() -> Vec<DataMetric> {
    load_collection(DataMetric::storage_key(), seed)
}

fn persist(items: &[DataMetric]) -> Result<(), String> {
    save_collection(DataMetric::storage_key(), items)
}

pub async fn fetch_all() -> Result<Vec<DataMetric>, String> {
    TimeoutFuture::new(LATENCY_MS).await;
    Ok(load())
}

pub async fn save(dto: DataMetricDto) -> Result<(), String> {
    TimeoutFuture::new(LATENCY_MS).await;
    let mut items = load();
    match &dto.id {
        Some(id) => {
            let item = items
                .iter_mut()
                .find(|m| &m.to_string_id() == id)
                .ok_or_else(|| format!("Показатель {} не найден", id))?;
            item.update(&dto);
            item.validate()?;
        }
        None => {
            let code = format!("MT-{:03}", items.len() + 1);
            let mut item =
                DataMetric::new_for_insert(code, dto.description.clone(), dto.unit.clone());
            item.sample_value = dto.sample_value.clone();
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
    items.retain(|m| m.to_string_id() != id);
    if items.len() == before {
        return Err(format!("Показатель {} не найден", id));
    }
    persist(&items)
}

impl Searchable for DataMetric {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.base.description.to_lowercase().contains(&filter)
            || self.unit.to_lowercase().contains(&filter)
    }
}

impl Sortable for DataMetric {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            "unit" => self.unit.cmp(&other.unit),
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
