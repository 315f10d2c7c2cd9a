//! Карточка шаблона отчёта: реквизиты + редактор текста с плейсхолдерами

use crate::domain::a002_report_template::model;
use crate::domain::{a005_dimension, a006_data_metric};
use crate::shared::icons::icon;
use crate::shared::placeholder_editor::{EditorToken, PlaceholderEditor};
use contracts::domain::a002_report_template::{ReportTemplate, ReportTemplateDto};
use contracts::enums::TemplateKind;
use leptos::prelude::*;

#[component]
pub fn ReportTemplateDetails(
    /// None — создание нового шаблона
    template: Option<ReportTemplate>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let (id, initial) = match &template {
        Some(t) => (
            Some(t.to_string_id()),
            (
                t.base.description.clone(),
                t.kind,
                t.content_structure.rich_text_content.clone(),
                t.content_structure.embedded_dimensions.clone(),
            ),
        ),
        None => (None, (String::new(), TemplateKind::Daily, String::new(), vec![])),
    };

    let title = RwSignal::new(initial.0);
    let kind = RwSignal::new(initial.1.as_str().to_string());
    let content = RwSignal::new(initial.2);
    let embedded = RwSignal::new(initial.3);
    let error = RwSignal::new(None::<String>);
    let is_edit = id.is_some();

    // Токены для панели вставки
    let (metric_tokens, set_metric_tokens) = signal::<Vec<EditorToken>>(vec![]);
    let (dimension_tokens, set_dimension_tokens) = signal::<Vec<EditorToken>>(vec![]);

    wasm_bindgen_futures::spawn_local(async move {
        match a006_data_metric::model::fetch_all().await {
            Ok(metrics) => set_metric_tokens.set(
                metrics
                    .into_iter()
                    .map(|m| EditorToken {
                        id: m.to_string_id(),
                        label: m.base.description.clone(),
                        text: m.placeholder_token(),
                    })
                    .collect(),
            ),
            Err(e) => error.set(Some(e)),
        }
        match a005_dimension::model::fetch_all().await {
            Ok(dimensions) => set_dimension_tokens.set(
                dimensions
                    .into_iter()
                    .map(|d| EditorToken {
                        id: d.to_string_id(),
                        label: d.base.description.clone(),
                        text: d.render_as_text(),
                    })
                    .collect(),
            ),
            Err(e) => error.set(Some(e)),
        }
    });

    let on_dimension_inserted = Callback::new(move |dimension_id: String| {
        embedded.update(|ids| {
            if !ids.contains(&dimension_id) {
                ids.push(dimension_id);
            }
        });
    });

    let save = {
        let id = id.clone();
        move |_| {
            if title.get_untracked().trim().is_empty() {
                error.set(Some("Название шаблона обязательно".to_string()));
                return;
            }
            let dto = ReportTemplateDto {
                id: id.clone(),
                description: title.get_untracked(),
                kind: kind.get_untracked(),
                rich_text_content: content.get_untracked(),
                embedded_dimensions: embedded.get_untracked(),
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
                <h3>{if is_edit { "Редактирование шаблона" } else { "Новый шаблон" }}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="template_title">{"Название"}</label>
                    <input
                        type="text"
                        id="template_title"
                        prop:value=move || title.get()
                        on:input=move |ev| title.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="template_kind">{"Вид"}</label>
                    <select
                        id="template_kind"
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
                    <label>{"Текст шаблона"}</label>
                    <PlaceholderEditor
                        value=content
                        metrics=metric_tokens
                        dimensions=dimension_tokens
                        on_dimension_inserted=on_dimension_inserted
                    />
                </div>

                <div class="form-group">
                    <label>{"Вставленные измерения"}</label>
                    <span style="color: #666;">
                        {move || {
                            let count = embedded.get().len();
                            if count == 0 { "нет".to_string() } else { count.to_string() }
                        }}
                    </span>
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
