//! Доступ к данным категорий проблем (mock: local storage + задержка)

use crate::shared::category_tree::CategoryRecord;
use crate::shared::category_tree_view::{CategoryCollection, CategoryFormDto};
use crate::shared::storage::{load_collection, save_collection};
use contracts::domain::a007_problem_category::{ProblemCategory, ProblemCategoryDto};
use contracts::domain::common::AggregateRoot;
use gloo_timers::future::TimeoutFuture;

const LATENCY_MS: u32 = 250;

fn seed() -> Vec<ProblemCategory> {
    let technical = ProblemCategory::new_for_insert(
        "PC-001".into(),
        "Технические".into(),
        None,
        Some("Отказы оборудования и сетей".into()),
    );
    let technical_id = technical.to_string_id();

    vec![
        ProblemCategory::new_for_insert(
            "PC-002".into(),
            "Перегрузки".into(),
            Some(technical_id.clone()),
            None,
        ),
        ProblemCategory::new_for_insert(
            "PC-003".into(),
            "Износ оборудования".into(),
            Some(technical_id),
            None,
        ),
        technical,
        ProblemCategory::new_for_insert(
            "PC-004".into(),
            "Организационные".into(),
            None,
            Some("Процессы, регламенты, персонал".into()),
        ),
    ]
}

fn load() -> Vec<ProblemCategory> {
    load_collection(ProblemCategory::storage_key(), seed)
}

fn persist(items: &[ProblemCategory]) -> Result<(), String> {
    save_collection(ProblemCategory::storage_key(), items)
}

fn comment_from(description: &str) -> Option<String> {
    let trimmed = description.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub struct ProblemCategoryCollection;

impl CategoryCollection for ProblemCategoryCollection {
    fn list_name() -> &'static str {
        ProblemCategory::list_name()
    }

    fn element_name() -> &'static str {
        ProblemCategory::element_name()
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
                item.update(&ProblemCategoryDto {
                    id: dto.id.clone(),
                    description: dto.name.clone(),
                    parent_id: dto.parent_id.clone(),
                    comment: comment_from(&dto.description),
                });
                item.validate()?;
            }
            None => {
                let code = format!("PC-{:03}", items.len() + 1);
                let item = ProblemCategory::new_for_insert(
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
