//! Карточка отчёта: реквизиты, привязка к категории и шаблону, фильтр заявок

use crate::domain::a001_report_category::model::ReportCategoryCollection;
use crate::domain::a002_report_template;
use crate::domain::a003_report::model;
use crate::shared::category_tree::CategoryRecord;
use crate::shared::category_tree_view::CategoryCollection;
use crate::shared::filter_editor::WorkOrderFilterEditor;
use crate::shared::icons::icon;
use contracts::domain::a003_report::{Report, ReportDto};
use contracts::enums::TemplateKind;
use contracts::shared::WorkOrderFilter;
use leptos::prelude::*;

/// Вариант шаблона в селекте
#[derive(Debug, Clone)]
struct TemplateOption {
    id: String,
    label: String,
}

#[component]
pub fn ReportDetails(
    /// None — создание нового отчёта
    report: Option<Report>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (id, initial) = match &report {
        Some(r) => (
            Some(r.to_string_id()),
            (
                r.base.description.clone(),
                r.kind,
                r.category_id.clone(),
                r.template_id.clone(),
                r.use_filter,
                r.filter.clone(),
                r.base.comment.clone().unwrap_or_default(),
            ),
        ),
        None => (
            None,
            (
                String::new(),
                TemplateKind::Daily,
                None,
                None,
                false,
                WorkOrderFilter::default(),
                String::new(),
            ),
        ),
    };

    let title = RwSignal::new(initial.0);
    let kind = RwSignal::new(initial.1.as_str().to_string());
    let category_id = RwSignal::new(initial.2);
    let template_id = RwSignal::new(initial.3);
    let use_filter = RwSignal::new(initial.4);
    let filter = RwSignal::new(initial.5);
    let comment = RwSignal::new(initial.6);
    let error = RwSignal::new(None::<String>);
    let is_edit = id.is_some();

    let (categories, set_categories) = signal::<Vec<CategoryRecord>>(vec![]);
    let (templates, set_templates) = signal::<Vec<TemplateOption>>(vec![]);

    wasm_bindgen_futures::spawn_local(async move {
        match ReportCategoryCollection::fetch_all().await {
            Ok(list) => set_categories.set(list),
            Err(e) => error.set(Some(e)),
        }
        match a002_report_template::model::fetch_all().await {
            Ok(list) => set_templates.set(
                list.into_iter()
                    .map(|t| TemplateOption {
                        id: t.to_string_id(),
                        label: if t.is_published {
                            t.base.description.clone()
                        } else {
                            format!("{} (черновик)", t.base.description)
                        },
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
                error.set(Some("Название отчёта обязательно".to_string()));
                return;
            }
            let dto = ReportDto {
                id: id.clone(),
                description: title.get_untracked(),
                kind: kind.get_untracked(),
                category_id: category_id.get_untracked(),
                template_id: template_id.get_untracked(),
                use_filter: use_filter.get_untracked(),
                filter: filter.get_untracked(),
                comment: {
                    let c = comment.get_untracked();
                    (!c.trim().is_empty()).then_some(c)
                },
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
                <h3>{if is_edit { "Редактирование отчёта" } else { "Новый отчёт" }}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="report_title">{"Название"}</label>
                    <input
                        type="text"
                        id="report_title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="report_kind">{"Вид"}</label>
                    <select
                        id="report_kind"
                        on:change=move |ev| kind.set(event_target_value(&ev))
                    >
                        {TemplateKind::all().into_iter().map(|k| {
                            view! {
                                <option
                                    value=k.as_str()
                                    selected=move || kind.get() == k.as_str()
                                >
                                    {k.display_name()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="report_category">{"Категория"}</label>
                    <select
                        id="report_category"
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
                    <label for="report_template">{"Шаблон"}</label>
                    <select
                        id="report_template"
                        on:change=move |ev| {
                            let val = event_target_value(&ev);
                            template_id.set((!val.is_empty()).then_some(val));
                        }
                    >
                        <option value="" selected=move || template_id.get().is_none()>
                            {"— не выбран —"}
                        </option>
                        {move || templates.get().into_iter().map(|t| {
                            let tid = t.id.clone();
                            view! {
                                <option
                                    value=t.id.clone()
                                    selected=move || template_id.get().as_deref() == Some(tid.as_str())
                                >
                                    {t.label.clone()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <WorkOrderFilterEditor use_filter=use_filter filter=filter />

                <div class="form-group">
                    <label for="report_comment">{"Комментарий"}</label>
                    <textarea
                        id="report_comment"
                        rows="3"
                        prop:value=move || comment.get()
                        on:input=move |ev| comment.set(event_target_value(&ev))
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
                <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>{"Отмена"}</button>
                <button class="btn btn-primary" on:click=save>{"Сохранить"}</button>
            </div>
        </div>
    }
}
