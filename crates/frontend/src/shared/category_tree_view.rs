//! Переиспользуемая страница дерева категорий.
//!
//! Одна реализация для категорий отчётов, измерений и проблем: раньше такой
//! виджет дублировался на каждой странице, здесь он параметризован
//! коллекцией через трейт `CategoryCollection`.

use crate::shared::category_tree::{
    build_category_tree, CategoryNode, CategoryRecord, ROOT_KEY,
};
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use leptos::prelude::*;
use std::collections::HashSet;
use std::future::Future;
use std::rc::Rc;

/// DTO формы категории (общая для всех коллекций)
#[derive(Debug, Clone, Default)]
pub struct CategoryFormDto {
    pub id: Option<String>,
    pub name: String,
    pub parent_id: Option<String>,
    pub description: String,
}

/// Коллекция категорий: откуда читать и куда сохранять.
///
/// Реализации живут в domain-модулях и ходят в свой storage-ключ.
pub trait CategoryCollection: 'static {
    fn list_name() -> &'static str;
    fn element_name() -> &'static str;

    fn fetch_all() -> impl Future<Output = Result<Vec<CategoryRecord>, String>>;
    fn save(dto: CategoryFormDto) -> impl Future<Output = Result<(), String>>;
    fn remove(id: String) -> impl Future<Output = Result<(), String>>;
}

/// Страница дерева категорий для коллекции `C`.
///
/// Обёртывается доменным `#[component]` (см. domain/*/ui/tree.rs).
pub fn category_tree_page<C: CategoryCollection>() -> impl IntoView {
    let (records, set_records) = signal::<Vec<CategoryRecord>>(vec![]);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);
    let (filter_text, set_filter_text) = signal(String::new());
    let (show_modal, set_show_modal) = signal(false);
    let (editing_id, set_editing_id) = signal::<Option<String>>(None);
    let expanded = RwSignal::new(HashSet::<String>::new());

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match C::fetch_all().await {
                Ok(list) => {
                    set_records.set(list);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error.set(Some(format!("Ошибка загрузки: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    load();

    // Дерево пересобирается при каждом изменении списка или фильтра
    let tree = move || build_category_tree(&records.get(), &filter_text.get());

    view! {
        <div class="content">
            <div class="header" style="margin-bottom: 8px; flex-shrink: 0;">
                <h2 style="margin: 0;">{C::list_name()}</h2>
                <div class="header-actions" style="display: flex; align-items: center; gap: 8px;">
                    <SearchInput
                        value=filter_text
                        on_change=Callback::new(move |v| set_filter_text.set(v))
                    />
                    <button class="btn btn-primary" on:click=move |_| { set_editing_id.set(None); set_show_modal.set(true); }>
                        {icon("plus")}
                        {"Новая"}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| load()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                </div>
            </div>
            {move || error.get().map(|e| view! { <div class="error" style="background: #fee; color: #c33; padding: 8px; border-radius: 4px; margin-bottom: 8px; font-size: 15px; flex-shrink: 0;">{e}</div> })}

            {move || if is_loading.get() {
                view! { <div style="text-align: center; padding: 20px; color: #666;">{"Загрузка..."}</div> }.into_any()
            } else {
                let root = tree();
                let current_filter = filter_text.get();
                let on_open: Rc<dyn Fn(String)> = Rc::new(move |id: String| {
                    set_editing_id.set(Some(id));
                    set_show_modal.set(true);
                });
                view! {
                    <div class="table-container">
                        <table class="tree-table">
                            <thead>
                                <tr class="text-left">
                                    <th class="text-center whitespace-nowrap p-0-8" style="width: 40px; border-bottom: 2px solid #ddd;">{""}</th>
                                    <th class="p-0-8" style="border-bottom: 2px solid #ddd;">{"Наименование"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {render_rows(root, 0, expanded, !current_filter.trim().is_empty(), on_open, current_filter)}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}

            {move || if show_modal.get() {
                view! {
                    <div class="modal-overlay">
                        <div class="modal-content">
                            {category_details_form::<C>(
                                editing_id.get(),
                                records.get_untracked(),
                                Rc::new(move |_| { set_show_modal.set(false); set_editing_id.set(None); load(); }),
                                Rc::new(move |_| { set_show_modal.set(false); set_editing_id.set(None); }),
                            )}
                        </div>
                    </div>
                }.into_any()
            } else { view! { <></> }.into_any() }}
        </div>
    }
}

/// Рекурсивный рендер строк дерева.
///
/// `force_expanded` — при активном фильтре дерево раскрыто целиком.
fn render_rows(
    node: CategoryNode,
    level: usize,
    expanded: RwSignal<HashSet<String>>,
    force_expanded: bool,
    on_open: Rc<dyn Fn(String)>,
    filter: String,
) -> Vec<AnyView> {
    let mut rows: Vec<AnyView> = Vec::new();

    let has_children = !node.children.is_empty();
    let key = node.key.clone();
    let is_root = key == ROOT_KEY;
    // Читается реактивно: toggle перестраивает таблицу
    let is_open = is_root
        || force_expanded
        || expanded.with(|set| set.contains(&key));

    let toggle: AnyView = if has_children && !is_root {
        let key_for_toggle = key.clone();
        let chevron = if is_open { icon("chevron-down") } else { icon("chevron-right") };
        view! {
            <button
                class="tree-toggle"
                style="background: none; border: none; cursor: pointer; padding: 0; display: inline-flex; align-items: center; color: #666;"
                on:click=move |_| expanded.update(|set| {
                    if !set.remove(&key_for_toggle) {
                        set.insert(key_for_toggle.clone());
                    }
                })
            >
                {chevron}
            </button>
        }.into_any()
    } else {
        view! { <span style="display:inline-block; width: 16px;">{""}</span> }.into_any()
    };

    let node_icon = if node.is_leaf {
        view! { <span style="color: #888;">{icon("item")}</span> }.into_any()
    } else if is_open {
        view! { <span style="color: #f4b942;">{icon("folder-open")}</span> }.into_any()
    } else {
        view! { <span style="color: #f4b942;">{icon("folder-closed")}</span> }.into_any()
    };

    let label_view = highlight_matches(&node.title, &filter);

    let open = {
        let on_open = on_open.clone();
        let key = key.clone();
        move |_| {
            if key != ROOT_KEY {
                (on_open)(key.clone())
            }
        }
    };

    let row = view! {
        <tr>
            <td class="text-center p-0-8 whitespace-nowrap" style="width: 40px;">
                <div class="icon-cell-container">
                    {node_icon}
                </div>
            </td>
            <td class="cell-truncate p-0-8">
                <div style={format!(
                    "display: flex; align-items: center; gap: 6px; padding-left: {}px;",
                    level * 16
                )}>
                    {toggle}
                    <span class="tree-label" on:click=open>
                        {label_view}
                    </span>
                </div>
            </td>
        </tr>
    }
    .into_any();

    rows.push(row);

    if is_open {
        for child in node.children.into_iter() {
            let mut child_rows = render_rows(
                child,
                level + 1,
                expanded,
                force_expanded,
                on_open.clone(),
                filter.clone(),
            );
            rows.append(&mut child_rows);
        }
    }

    rows
}

/// Форма категории (модальное окно): наименование, родитель, описание
fn category_details_form<C: CategoryCollection>(
    id: Option<String>,
    records: Vec<CategoryRecord>,
    on_saved: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let existing = id
        .as_ref()
        .and_then(|id| records.iter().find(|r| &r.id == id).cloned());

    let form = RwSignal::new(match &existing {
        Some(r) => CategoryFormDto {
            id: Some(r.id.clone()),
            name: r.name.clone(),
            parent_id: r.parent_id.clone(),
            description: r.description.clone(),
        },
        None => CategoryFormDto::default(),
    });
    let error = RwSignal::new(None::<String>);
    let is_edit = existing.is_some();

    // В родители нельзя выбрать саму категорию
    let parent_options: Vec<CategoryRecord> = records
        .iter()
        .filter(|r| id.as_deref() != Some(r.id.as_str()))
        .cloned()
        .collect();

    let has_children = id
        .as_ref()
        .map(|id| records.iter().any(|r| r.parent_id.as_deref() == Some(id)))
        .unwrap_or(false);

    let save = {
        let on_saved = on_saved.clone();
        move |_| {
            let dto = form.get();
            if dto.name.trim().is_empty() {
                error.set(Some("Наименование обязательно для заполнения".to_string()));
                return;
            }
            let on_saved = on_saved.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match C::save(dto).await {
                    Ok(()) => (on_saved)(()),
                    Err(e) => error.set(Some(e)),
                }
            });
        }
    };

    let delete = {
        let on_saved = on_saved.clone();
        let id_for_delete = id.clone();
        move |_| {
            if has_children {
                error.set(Some("Сначала удалите вложенные категории".to_string()));
                return;
            }
            let Some(id) = id_for_delete.clone() else {
                return;
            };
            let on_saved = on_saved.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match C::remove(id).await {
                    Ok(()) => (on_saved)(()),
                    Err(e) => error.set(Some(e)),
                }
            });
        }
    };

    let cancel = move |_| (on_cancel)(());

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {if is_edit {
                        format!("Редактирование: {}", C::element_name())
                    } else {
                        format!("Новая: {}", C::element_name())
                    }}
                </h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="category_name">{"Наименование"}</label>
                    <input
                        type="text"
                        id="category_name"
                        prop:value=move || form.get().name
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        placeholder="Введите наименование"
                    />
                </div>

                <div class="form-group">
                    <label for="category_parent">{"Родительская категория"}</label>
                    <select
                        id="category_parent"
                        on:change=move |ev| {
                            let val = event_target_value(&ev);
                            form.update(|f| {
                                f.parent_id = if val.is_empty() { None } else { Some(val) };
                            });
                        }
                    >
                        <option value="" selected=move || form.get().parent_id.is_none()>
                            {"— верхний уровень —"}
                        </option>
                        {parent_options.into_iter().map(|r| {
                            let rid = r.id.clone();
                            view! {
                                <option
                                    value=r.id.clone()
                                    selected=move || form.get().parent_id.as_deref() == Some(rid.as_str())
                                >
                                    {r.name.clone()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="category_description">{"Описание"}</label>
                    <textarea
                        id="category_description"
                        rows="3"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </div>
            </div>

            <div class="details-actions" style="display: flex; gap: 8px; justify-content: flex-end;">
                {is_edit.then(|| view! {
                    <button class="btn btn-danger" style="margin-right: auto;" on:click=delete.clone()>
                        {icon("trash")}
                        {"Удалить"}
                    </button>
                })}
                <button class="btn btn-secondary" on:click=cancel>{"Отмена"}</button>
                <button class="btn btn-primary" on:click=save>{"Сохранить"}</button>
            </div>
        </div>
    }
}
