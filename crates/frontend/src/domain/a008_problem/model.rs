//! Доступ к данным базы знаний проблем (mock: local storage + задержка)

use crate::shared::list_utils::{Searchable, Sortable};
use crate::shared::storage::{load_collection, save_collection};
use contracts::domain::a008_problem::{Problem, ProblemDto};
use contracts::domain::common::AggregateRoot;
use gloo_timers::future::TimeoutFuture;
use std::cmp::Ordering;

const LATENCY_MS: u32 = 250;

fn seed() -> Vec<Problem> {
    let mut repeated = Problem::new_for_insert(
        "PR-001".into(),
        "Рост повторных обращений".into(),
        None,
    );
    repeated.phenomenon = "Доля повторных обращений выше 8% три дня подряд".into();
    repeated.judgment =
        "Повторные обращения указывают на незакрытую первопричину, а не на новый поток заявок".into();
    repeated.attribution = "Чаще всего — неполное устранение при первом выезде".into();

    let mut overdue = Problem::new_for_insert(
        "PR-002".into(),
        "Срыв сроков в пиковые дни".into(),
        None,
    );
    overdue.phenomenon = "Доля заявок, закрытых в срок, падает ниже 90% в дни пиковой нагрузки".into();
    overdue.judgment = "Показатель деградирует от нагрузки, а не от дисциплины исполнителей".into();
    overdue.attribution = "Недостаток резервных бригад в пиковые периоды".into();

    vec![repeated, overdue]
}

fn load() -> Vec<Problem> {
    load_collection(Problem::storage_key(), seed)
}

fn persist(items: &[Problem]) -> Result<(), String> {
    save_collection(Problem::storage_key(), items)
}

pub async fn fetch_all() -> Result<Vec<Problem>, String> {
    TimeoutFuture::new(LATENCY_MS).await;
    Ok(load())
}

pub async fn save(dto: ProblemDto) -> Result<(), String> {
    TimeoutFuture::new(LATENCY_MS).await;
    let mut items = load();
    match &dto.id {
        Some(id) => {
            let item = items
                .iter_mut()
                .find(|p| &p.to_string_id() == id)
                .ok_or_else(|| format!("Проблема {} не найдена", id))?;
            item.update(&dto);
            item.validate()?;
        }
        None => {
            let code = format!("PR-{:03}", items.len() + 1);
            let mut item = Problem::new_for_insert(
                code,
                dto.description.clone(),
                dto.category_id.clone(),
            );
            item.phenomenon = dto.phenomenon.clone();
            item.judgment = dto.judgment.clone();
            item.attribution = dto.attribution.clone();
            item.metric_ids = dto.metric_ids.clone();
            item.case_ids = dto.case_ids.clone();
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
    items.retain(|p| p.to_string_id() != id);
    if items.len() == before {
        return Err(format!("Проблема {} не найдена", id));
    }
    persist(&items)
}

impl Searchable for Problem {
    fn matches_filter(&self, filter: &str) -> bool {
        let filter = filter.to_lowercase();
        self.base.description.to_lowercase().contains(&filter)
            || self.phenomenon.to_lowercase().contains(&filter)
            || self.judgment.to_lowercase().contains(&filter)
            || self.attribution.to_lowercase().contains(&filter)
    }
}

impl Sortable for Problem {
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
