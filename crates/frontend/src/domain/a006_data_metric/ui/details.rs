//! Карточка показателя

use crate::domain::a006_data_metric::model;
use crate::shared::icons::icon;
use contracts::domain::a006_data_metric::{DataMetric, DataMetricDto};
use leptos::prelude::*;

#[component]
pub fn DataMetricDetails(
    /// None — создание нового показателя
    metric: Option<DataMetric>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(match &metric {
        Some(m) => DataMetricDto {
            id: Some(m.to_string_id()),
            description: m.base.description.clone(),
            unit: m.unit.clone(),
            sample_value: m.sample_value.clone(),
        },
        None => DataMetricDto::default(),
    });
    let error = RwSignal::new(None::<String>);
    let is_edit = metric.is_some();
    let preview_name = move || {
        let name = form.get().description;
        if name.trim().is_empty() {
            "…".to_string()
        } else {
            name
        }
    };

    let save = move |_| {
        let dto = form.get();
        if dto.description.trim().is_empty() {
            error.set(Some("Имя показателя обязательно".to_string()));
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match model::save(dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    let delete = move |_| {
        let Some(id) = form.get_untracked().id else {
            return;
        };
        wasm_bindgen_futures::spawn_local(async move {
            match model::remove(id).await {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>{if is_edit { "Редактирование показателя" } else { "Новый показатель" }}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="metric_name">{"Имя показателя"}</label>
                    <input
                        type="text"
                        id="metric_name"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                        placeholder="Всего заявок"
                    />
                </div>

                <div class="form-group">
                    <label for="metric_unit">{"Единица измерения"}</label>
                    <input
                        type="text"
                        id="metric_unit"
                        prop:value=move || form.get().unit
                        on:input=move |ev| form.update(|f| f.unit = event_target_value(&ev))
                        placeholder="шт."
                    />
                </div>

                <div class="form-group">
                    <label for="metric_sample">{"Пример значения"}</label>
                    <input
                        type="text"
                        id="metric_sample"
                        prop:value=move || form.get().sample_value
                        on:input=move |ev| form.update(|f| f.sample_value = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label>{"Токен в шаблоне"}</label>
                    <code>{move || format!("{{{{metric:{}}}}}", preview_name())}</code>
                </div>
            </div>

            <div class="details-actions" style="display: flex; gap: 8px; justify-content: flex-end;">
                {is_edit.then(|| view! {
                    <button class="btn btn-danger" style="margin-right: auto;" on:click=delete>
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
