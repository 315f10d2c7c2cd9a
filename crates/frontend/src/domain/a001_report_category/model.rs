//! Доступ к данным категорий отчётов.
//!
//! Mock-режим: коллекция живёт в local storage, задержка имитирует сеть.

use crate::shared::category_tree::CategoryRecord;
use crate::shared::category_tree_view::{CategoryCollection, CategoryFormDto};
use crate::shared::storage::{load_collection, save_collection};
use contracts::domain::a001_report_category::{ReportCategory, ReportCategoryDto};
use contracts::domain::common::AggregateRoot;
use gloo_timers::future::TimeoutFuture;

/// Имитация сетевой задержки, мс
const LATENCY_MS: u32 = 250;

fn seed() -> Vec<ReportCategory> {
    let operations = ReportCategory::new_for_insert(
        "RC-001".into(),
        "Эксплуатация".into(),
        None,
        Some("Отчёты о состоянии сетей и оборудования".into()),
    );
    let operations_id = operations.to_string_id();

    vec![
        ReportCategory::new_for_insert(
            "RC-002".into(),
            "Распределительные сети".into(),
            Some(operations_id.clone()),
            None,
        ),
        ReportCategory::new_for_insert(
            "RC-003".into(),
            "Подстанции".into(),
            Some(operations_id),
            None,
        ),
        operations,
        ReportCategory::new_for_insert(
            "RC-004".into(),
            "Клиентский сервис".into(),
            None,
            Some("Обращения, жалобы, повторные заявки".into()),
        ),
    ]
}

fn load() -> Vec<ReportCategory> {
    load_collection(ReportCategory::storage_key(), seed)
}

fn persist(items: &[ReportCategory]) -> Result<(), String> {
    save_collection(ReportCategory::storage_key(), items)
}

fn comment_from(description: &str) -> Option<String> {
    let trimmed = description.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub struct ReportCategoryCollection;

impl CategoryCollection for ReportCategoryCollection {
    fn list_name() -> &'static str {
        ReportCategory::list_name()
    }

    fn element_name() -> &'static str {
        ReportCategory::element_name()
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
                item.update(&ReportCategoryDto {
                    id: dto.id.clone(),
                    description: dto.name.clone(),
                    parent_id: dto.parent_id.clone(),
                    comment: comment_from(&dto.description),
                });
                item.validate()?;
            }
            None => {
                let code = format!("RC-{:03}", items.len() + 1);
                let item = ReportCategory::new_for_insert(
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
