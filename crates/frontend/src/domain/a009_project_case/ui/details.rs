//! Карточка кейса проекта

use crate::domain::a009_project_case::model;
use crate::shared::icons::icon;
use contracts::domain::a009_project_case::{ProjectCase, ProjectCaseDto};
use leptos::prelude::*;

#[component]
pub fn ProjectCaseDetails(
    /// None — создание нового кейса
    case: Option<ProjectCase>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(match &case {
        Some(c) => ProjectCaseDto {
            id: Some(c.to_string_id()),
            description: c.base.description.clone(),
            summary: c.summary.clone(),
            link: c.link.clone(),
        },
        None => ProjectCaseDto::default(),
    });
    let error = RwSignal::new(None::<String>);
    let is_edit = case.is_some();

    let save = move |_| {
        let dto = form.get();
        if dto.description.trim().is_empty() {
            error.set(Some("Название кейса обязательно".to_string()));
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
                <h3>{if is_edit { "Редактирование кейса" } else { "Новый кейс" }}</h3>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="case_name">{"Название"}</label>
                    <input
                        type="text"
                        id="case_name"
                        prop:value=move || form.get().description
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="case_summary">{"Краткое изложение"}</label>
                    <textarea
                        id="case_summary"
                        rows="4"
                        prop:value=move || form.get().summary
                        on:input=move |ev| form.update(|f| f.summary = event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-group">
                    <label for="case_link">{"Ссылка на материалы"}</label>
                    <input
                        type="text"
                        id="case_link"
                        prop:value=move || form.get().link
                        on:input=move |ev| form.update(|f| f.link = event_target_value(&ev))
                        placeholder="https://"
                    />
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
