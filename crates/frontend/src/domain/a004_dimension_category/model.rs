//! Доступ к данным категорий измерений (mock: local storage + задержка)

use crate::shared::category_tree::CategoryRecord;
use crate::shared::category_tree_view::{CategoryCollection, CategoryFormDto};
use crate::shared::storage::{load_collection, save_collection};
use contracts::domain::a004_dimension_category::{DimensionCategory, DimensionCategoryDto};
use contracts::domain::common::AggregateRoot;
use gloo_timers::future::TimeoutFuture;

const LATENCY_MS: u32 = 250;

fn seed() -> Vec<DimensionCategory> {
    let workload = DimensionCategory::new_for_insert(
        "DC-001".into(),
        "Нагрузка".into(),
        None,
        Some("Срезы по объёму и динамике заявок".into()),
    );
    let workload_id = workload.to_string_id();

    vec![
        DimensionCategory::new_for_insert(
            "DC-002".into(),
            "По регионам".into(),
            Some(workload_id.clone()),
            None,
        ),
        DimensionCategory::new_for_insert(
            "DC-003".into(),
            "По каналам".into(),
            Some(workload_id),
            None,
        ),
        workload,
        DimensionCategory::new_for_insert("DC-004".into(), "Качество".into(), None, None),
    ]
}

fn load() -> Vec<DimensionCategory> {
    load_collection(DimensionCategory::storage_key(), seed)
}

fn persist(items: &[DimensionCategory]) -> Result<(), String> {
    save_collection(DimensionCategory::storage_key(), items)
}

fn comment_from(description: &str) -> Option<String> {
    let trimmed = description.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub struct DimensionCategoryCollection;

impl CategoryCollection for DimensionCategoryCollection {
    fn list_name() -> &'static str {
        DimensionCategory::list_name()
    }

    fn element_name() -> &'static str {
        DimensionCategory::element_name()
    }

    async fn fetch_all() -> Result<Vec<CategoryRecord>, String> {
        TimeoutFuture::new(LATENCY_MS).await;
        Ok(load()
            .into_iter()
            .map(|c| CategoryRecord {
                id: c.to_string_id(),
                name: c.base.description.clone(),
                parent_id: c.parent_id.clone(),
                description: c.base.comment.clone().unwrap_or_default(),
            })
            .collect())
    }

    async fn save(dto: CategoryFormDto) -> Result<(), String> {
        TimeoutFuture::new(LATENCY_MS).await;
        let mut items = load();
        match &dto.id {
            Some(id) => {
                let item = items
                    .iter_mut()
                    .find(|c| &c.to_string_id() == id)
                    .ok_or_else(|| format!("Категория {} не найдена", id))?;
                item.update(&DimensionCategoryDto {
                    id: dto.id.clone(),
                    description: dto.name.clone(),
                    parent_id: dto.parent_id.clone(),
                    comment: comment_from(&dto.description),
                });
                item.validate()?;
            }
            None => {
                let code = format!("DC-{:03}", items.len() + 1);
                let item = DimensionCategory::new_for_insert(
                    code,
                    dto.name.clone(),
                    dto.parent_id.clone(),
                    comment_from(&dto.description),
                );
                item.validate()?;
                items.push(item);
            }
        }
        persist(&items)
    }

    async fn remove(id: String) -> Result<(), String> {
        TimeoutFuture::new(LATENCY_MS).await;
        let mut items = load();
        let before = items.len();
        items.retain(|c| c.to_string_id() != id);
        if items.len() == before {
            return Err(format!("Категория {} не найдена", id));
        }
        persist(&items)
    }
}
