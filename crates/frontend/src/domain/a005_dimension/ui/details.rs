//! Карточка измерения: реквизиты, структура секций, фильтр заявок.
//!
//! Секции редактируются прямо в дереве: переименование, текст, перестановка
//! кнопками вверх/вниз, добавление вложенных (не глубже трёх уровней).

use crate::domain::a004_dimension_category::model::DimensionCategoryCollection;
use crate::domain::a005_dimension::model;
use crate::shared::category_tree::CategoryRecord;
use crate::shared::category_tree_view::CategoryCollection;
use crate::shared::filter_editor::WorkOrderFilterEditor;
use crate::shared::icons::icon;
use contracts::domain::a005_dimension::{ContentItem, Dimension, DimensionDto, MAX_SECTION_DEPTH};
use contracts::shared::WorkOrderFilter;
use leptos::prelude::*;

/// Вектор детей по пути (пустой путь — верхний уровень)
fn children_at<'a>(
    top: &'a mut Vec<ContentItem>,
    path: &[usize],
) -> Option<&'a mut Vec<ContentItem>> {
    let mut current = top;
    for &i in path {
        current = &mut current.get_mut(i)?.children;
    }
    Some(current)
}

fn move_within(v: &mut Vec<ContentItem>, from: usize, to: usize) {
    if from >= v.len() || to >= v.len() {
        return;
    }
    let item = v.remove(from);
    v.insert(to, item);
    for (i, child) in v.iter_mut().enumerate() {
        child.order = i as u32;
    }
}

#[component]
pub fn DimensionDetails(
    /// None — создание нового измерения
    dimension: Option<Dimension>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (id, initial) = match &dimension {
        Some(d) => (
            Some(d.to_string_id()),
            (
                d.base.description.clone(),
                d.category_id.clone(),
                d.sections.clone(),
                d.use_filter,
                d.filter.clone(),
            ),
        ),
        None => (
            None,
            (String::new(), None, vec![], false, WorkOrderFilter::default()),
        ),
    };

    let title = RwSignal::new(initial.0);
    let category_id = RwSignal::new(initial.1);
    let sections = RwSignal::new(initial.2);
    let use_filter = RwSignal::new(initial.3);
    let filter = RwSignal::new(initial.4);
    let error = RwSignal::new(None::<String>);
    let is_edit = id.is_some();

    let (categories, set_categories) = signal::<Vec<CategoryRecord>>(vec![]);
    wasm_bindgen_futures::spawn_local(async move {
        match DimensionCategoryCollection::fetch_all().await {
            Ok(list) => set_categories.set(list),
            Err(e) => error.set(Some(e)),
        }
    });

    let add_top_section = move |_| {
        sections.update(|s| {
            let order = s.len() as u32;
            s.push(ContentItem::new("Новая секция".into(), order));
        });
    };

    let save = {
        let id = id.clone();
        move |_| {
            if title.get_untracked().trim().is_empty() {
                error.set(Some("Название измерения обязательно".to_string()));
                return;
            }
            let dto = DimensionDto {
                id: id.clone(),
                description: title.get_untracked(),
                category_id: category_id.get_untracked(),
                sections: sections.get_untracked(),
                use_filter: use_filter.get_untracked(),
                filter: filter.get_untracked(),
            };
            wasm_bindgen_futures::spawn_local(async move {
                match model::save(dto).await {
                    Ok(()) => on_saved.run(()),
                    Err(e) => error.set(Some(e)),
                }
            });
        }
    };

    let delete = {
        let id = id.clone();
        move |_| {
            let Some(id) = id.clone() else {
                return;
            };
            wasm_bindgen_futures::spawn_local(async move {
                match model::remove(id).await {
                    Ok(()) => on_saved.run(()),
                    Err(e) => error.set(Some(e)),
                }
            });
        }
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{if is_edit { "Редактирование измерения" } else { "Новое измерение" }}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="dimension_title">{"Название"}</label>
                    <input
                        type="text"
                        id="dimension_title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="dimension_category">{"Категория"}</label>
                    <select
                        id="dimension_category"
                        on:change=move |ev| {
                            let val = event_target_value(&ev);
                            category_id.set((!val.is_empty()).then_some(val));
                        }
                    >
                        <option value="" selected=move || category_id.get().is_none()>
                            {"— без категории —"}
                        </option>
                        {move || categories.get().into_iter().map(|c| {
                            let cid = c.id.clone();
                            view! {
                                <option
                                    value=c.id.clone()
                                    selected=move || category_id.get().as_deref() == Some(cid.as_str())
                                >
                                    {c.name.clone()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <div style="display: flex; align-items: center; justify-content: space-between;">
                        <label>{"Секции"}</label>
                        <button class="btn btn-secondary btn-small" on:click=add_top_section>
                            {icon("plus")}
                            {"Секция"}
                        </button>
                    </div>
                    <div class="outline-editor" style="display: flex; flex-direction: column; gap: 4px;">
                        {move || render_outline(sections, &sections.get(), &[], 1)}
                    </div>
                </div>

                <WorkOrderFilterEditor use_filter=use_filter filter=filter />
            </div>

            <div class="details-actions" style="display: flex; gap: 8px; justify-content: flex-end;">
                {is_edit.then(|| view! {
                    <button class="btn btn-danger" style="margin-right: auto;" on:click=delete.clone()>
                        {icon("trash")}
                        {"Удалить"}
                    </button>
                })}
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>{"Отмена"}</button>
                <button class="btn btn-primary" on:click=save>{"Сохранить"}</button>
            </div>
        </div>
    }
}

/// Рекурсивный рендер редактора секций. `parent_path` адресует вектор,
/// в котором лежат `items`, `level` — уровень этих секций (1..=3).
fn render_outline(
    sections: RwSignal<Vec<ContentItem>>,
    items: &[ContentItem],
    parent_path: &[usize],
    level: usize,
) -> AnyView {
    let count = items.len();
    let rows: Vec<AnyView> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let path: Vec<usize> = parent_path.iter().copied().chain([index]).collect();
            let parent: Vec<usize> = parent_path.to_vec();

            let rename = {
                let path = path.clone();
                move |ev: leptos::ev::Event| {
                    let value = event_target_value(&ev);
                    let (parent, index) = split_path(&path);
                    sections.update(|s| {
                        if let Some(v) = children_at(s, parent) {
                            if let Some(item) = v.get_mut(index) {
                                item.title = value.clone();
                            }
                        }
                    });
                }
            };

            let edit_content = {
                let path = path.clone();
                move |ev: leptos::ev::Event| {
                    let value = event_target_value(&ev);
                    let (parent, index) = split_path(&path);
                    sections.update(|s| {
                        if let Some(v) = children_at(s, parent) {
                            if let Some(item) = v.get_mut(index) {
                                item.content = value.clone();
                            }
                        }
                    });
                }
            };

            let move_up = {
                let parent = parent.clone();
                move |_| {
                    if index == 0 {
                        return;
                    }
                    let parent = parent.clone();
                    sections.update(|s| {
                        if let Some(v) = children_at(s, &parent) {
                            move_within(v, index, index - 1);
                        }
                    });
                }
            };

            let move_down = {
                let parent = parent.clone();
                move |_| {
                    let parent = parent.clone();
                    sections.update(|s| {
                        if let Some(v) = children_at(s, &parent) {
                            if index + 1 < v.len() {
                                move_within(v, index, index + 1);
                            }
                        }
                    });
                }
            };

            let add_child = {
                let path = path.clone();
                move |_| {
                    let path = path.clone();
                    sections.update(|s| {
                        let (parent, index) = split_path(&path);
                        if let Some(item) =
                            children_at(s, parent).and_then(|v| v.get_mut(index))
                        {
                            if item.add_child(level, "Новая секция".into()).is_err() {
                                log::warn!("section nesting limit reached");
                            }
                        }
                    });
                }
            };

            let remove = {
                let parent = parent.clone();
                move |_| {
                    let parent = parent.clone();
                    sections.update(|s| {
                        if let Some(v) = children_at(s, &parent) {
                            if index < v.len() {
                                v.remove(index);
                                for (i, child) in v.iter_mut().enumerate() {
                                    child.order = i as u32;
                                }
                            }
                        }
                    });
                }
            };

            let children_view = render_outline(sections, &item.children, &path, level + 1);
            let is_first = index == 0;
            let is_last = index + 1 >= count;

            view! {
                <div
                    class="outline-item"
                    style=format!(
                        "margin-left: {}px; border-left: 2px solid #eee; padding: 4px 0 4px 8px;",
                        (level - 1) * 16
                    )
                >
                    <div style="display: flex; align-items: center; gap: 4px;">
                        <input
                            type="text"
                            style="flex: 1; font-weight: 500;"
                            prop:value=item.title.clone()
                            on:change=rename
                        />
                        <button class="btn-icon" title="Вверх" disabled=is_first on:click=move_up>
                            {icon("arrow-up")}
                        </button>
                        <button class="btn-icon" title="Вниз" disabled=is_last on:click=move_down>
                            {icon("arrow-down")}
                        </button>
                        {(level < MAX_SECTION_DEPTH).then(|| view! {
                            <button class="btn-icon" title="Вложенная секция" on:click=add_child.clone()>
                                {icon("plus")}
                            </button>
                        })}
                        <button class="btn-icon" title="Удалить" on:click=remove>
                            {icon("trash")}
                        </button>
                    </div>
                    <textarea
                        rows="2"
                        style="width: 100%; margin-top: 4px; font-size: 13px;"
                        placeholder="Текст секции (можно со ссылками на показатели)"
                        prop:value=item.content.clone()
                        on:change=edit_content
                    ></textarea>
                    {children_view}
                </div>
            }
            .into_any()
        })
        .collect();

    view! { <>{rows}</> }.into_any()
}

fn split_path(path: &[usize]) -> (&[usize], usize) {
    match path.split_last() {
        Some((last, parent)) => (parent, *last),
        None => (&[], 0),
    }
}
