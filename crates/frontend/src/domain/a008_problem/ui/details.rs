//! Карточка проблемы: явление, суждение, атрибуция и связи.
//!
//! Связанные показатели и кейсы отмечаются чекбоксами; это ссылки по ID,
//! сами записи живут в своих коллекциях.

use crate::domain::a007_problem_category::model::ProblemCategoryCollection;
use crate::domain::a008_problem::model;
use crate::domain::{a006_data_metric, a009_project_case};
use crate::shared::category_tree::CategoryRecord;
use crate::shared::category_tree_view::CategoryCollection;
use crate::shared::icons::icon;
use contracts::domain::a008_problem::{Problem, ProblemDto};
use leptos::prelude::*;

/// Подпись связанной записи в списке чекбоксов
#[derive(Debug, Clone)]
struct LinkOption {
    id: String,
    label: String,
}

fn link_checkboxes(
    options: ReadSignal<Vec<LinkOption>>,
    selected: RwSignal<Vec<String>>,
) -> impl IntoView {
    view! {
        <div style="display: flex; flex-direction: column; gap: 2px; max-height: 140px; overflow-y: auto; border: 1px solid #eee; border-radius: 4px; padding: 6px;">
            {move || options.get().into_iter().map(|option| {
                let id_for_check = option.id.clone();
                let id_for_toggle = option.id.clone();
                view! {
                    <label style="display: flex; align-items: center; gap: 6px; cursor: pointer;">
                        <input
                            type="checkbox"
                            prop:checked=move || selected.get().contains(&id_for_check)
                            on:change=move |_| {
                                let id = id_for_toggle.clone();
                                selected.update(|ids| {
                                    if let Some(pos) = ids.iter().position(|x| x == &id) {
                                        ids.remove(pos);
                                    } else {
                                        ids.push(id);
                                    }
                                });
                            }
                        />
                        {option.label.clone()}
                    </label>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
pub fn ProblemDetails(
    /// None — создание новой записи
    problem: Option<Problem>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (id, initial) = match &problem {
        Some(p) => (
            Some(p.to_string_id()),
            (
                p.base.description.clone(),
                p.category_id.clone(),
                p.phenomenon.clone(),
                p.judgment.clone(),
                p.attribution.clone(),
                p.metric_ids.clone(),
                p.case_ids.clone(),
            ),
        ),
        None => (
            None,
            (
                String::new(),
                None,
                String::new(),
                String::new(),
                String::new(),
                vec![],
                vec![],
            ),
        ),
    };

    let title = RwSignal::new(initial.0);
    let category_id = RwSignal::new(initial.1);
    let phenomenon = RwSignal::new(initial.2);
    let judgment = RwSignal::new(initial.3);
    let attribution = RwSignal::new(initial.4);
    let metric_ids = RwSignal::new(initial.5);
    let case_ids = RwSignal::new(initial.6);
    let error = RwSignal::new(None::<String>);
    let is_edit = id.is_some();

    let (categories, set_categories) = signal::<Vec<CategoryRecord>>(vec![]);
    let (metric_options, set_metric_options) = signal::<Vec<LinkOption>>(vec![]);
    let (case_options, set_case_options) = signal::<Vec<LinkOption>>(vec![]);

    wasm_bindgen_futures::spawn_local(async move {
        match ProblemCategoryCollection::fetch_all().await {
            Ok(list) => set_categories.set(list),
            Err(e) => error.set(Some(e)),
        }
        match a006_data_metric::model::fetch_all().await {
            Ok(metrics) => set_metric_options.set(
                metrics
                    .into_iter()
                    .map(|m| LinkOption {
                        id: m.to_string_id(),
                        label: m.base.description.clone(),
                    })
                    .collect(),
            ),
            Err(e) => error.set(Some(e)),
        }
        match a009_project_case::model::fetch_all().await {
            Ok(cases) => set_case_options.set(
                cases
                    .into_iter()
                    .map(|c| LinkOption {
                        id: c.to_string_id(),
                        label: c.base.description.clone(),
                    })
                    .collect(),
            ),
            Err(e) => error.set(Some(e)),
        }
    });

    let save = {
        let id = id.clone();
        move |_| {
            if title.get_untracked().trim().is_empty() {
                error.set(Some("Название проблемы обязательно".to_string()));
                return;
            }
            if judgment.get_untracked().trim().is_empty() {
                error.set(Some("Суждение обязательно для записи базы знаний".to_string()));
                return;
            }
            let dto = ProblemDto {
                id: id.clone(),
                description: title.get_untracked(),
                category_id: category_id.get_untracked(),
                phenomenon: phenomenon.get_untracked(),
                judgment: judgment.get_untracked(),
                attribution: attribution.get_untracked(),
                metric_ids: metric_ids.get_untracked(),
                case_ids: case_ids.get_untracked(),
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
                <h3>{if is_edit { "Редактирование проблемы" } else { "Новая проблема" }}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="problem_title">{"Название"}</label>
                    <input
                        type="text"
                        id="problem_title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="problem_category">{"Категория"}</label>
                    <select
                        id="problem_category"
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
                    <label for="problem_phenomenon">{"Явление"}</label>
                    <textarea
                        id="problem_phenomenon"
                        rows="2"
                        placeholder="Что наблюдается в данных"
                        prop:value=move || phenomenon.get()
                        on:input=move |ev| phenomenon.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="problem_judgment">{"Суждение"}</label>
                    <textarea
                        id="problem_judgment"
                        rows="2"
                        placeholder="Как интерпретировать явление"
                        prop:value=move || judgment.get()
                        on:input=move |ev| judgment.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="problem_attribution">{"Атрибуция"}</label>
                    <textarea
                        id="problem_attribution"
                        rows="2"
                        placeholder="Чему приписывается причина"
                        prop:value=move || attribution.get()
                        on:input=move |ev| attribution.set(event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group">
                    <label>{"Связанные показатели"}</label>
                    {link_checkboxes(metric_options, metric_ids)}
                </div>

                <div class="form-group">
                    <label>{"Связанные кейсы"}</label>
                    {link_checkboxes(case_options, case_ids)}
                </div>
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
