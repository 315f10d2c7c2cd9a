//! Список шаблонов отчётов

use super::details::ReportTemplateDetails;
use crate::domain::a002_report_template::model;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_indicator, highlight_matches, sort_list,
    SearchInput,
};
use contracts::domain::a002_report_template::ReportTemplate;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

#[component]
pub fn ReportTemplateList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<ReportTemplate>>(vec![]);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);
    let (filter_text, set_filter_text) = signal(String::new());
    let (sort_field, set_sort_field) = signal("description".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);
    let (show_details, set_show_details) = signal(false);
    let (editing, set_editing) = signal::<Option<ReportTemplate>>(None);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            match model::fetch_all().await {
                Ok(list) => {
                    set_items.set(list);
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

    let toggle_published = move |id: String, published: bool| {
        wasm_bindgen_futures::spawn_local(async move {
            match model::set_published(id, published).await {
                Ok(()) => load(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };

    let visible_items = move || {
        let mut list = filter_list(items.get(), &filter_text.get());
        sort_list(&mut list, &sort_field.get(), sort_ascending.get());
        list
    };

    view! {
        <div class="content">
            <div class="header" style="margin-bottom: 8px; flex-shrink: 0;">
                <h2 style="margin: 0;">{ReportTemplate::list_name()}</h2>
                <div class="header-actions" style="display: flex; align-items: center; gap: 8px;">
                    <SearchInput
                        value=filter_text
                        on_change=Callback::new(move |v| set_filter_text.set(v))
                    />
                    <button class="btn btn-primary" on:click=move |_| { set_editing.set(None); set_show_details.set(true); }>
                        {icon("plus")}
                        {"Новый"}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| load()>
                        {icon("refresh")}
                        {"Обновить"}
                    </button>
                </div>
            </div>
            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || if is_loading.get() {
                view! { <div style="text-align: center; padding: 20px; color: #666;">{"Загрузка..."}</div> }.into_any()
            } else {
                view! {
                    <div class="table-container">
                        <table class="list-table">
                            <thead>
                                <tr class="text-left">
                                    <th class="p-0-8 sortable" on:click=create_sort_toggle("description", sort_field.into(), set_sort_field, set_sort_ascending)>
                                        {move || format!("Название{}", get_sort_indicator(&sort_field.get(), "description", sort_ascending.get()))}
                                    </th>
                                    <th class="p-0-8 sortable" on:click=create_sort_toggle("kind", sort_field.into(), set_sort_field, set_sort_ascending)>
                                        {move || format!("Вид{}", get_sort_indicator(&sort_field.get(), "kind", sort_ascending.get()))}
                                    </th>
                                    <th class="p-0-8">{"Измерений"}</th>
                                    <th class="p-0-8 sortable" on:click=create_sort_toggle("published", sort_field.into(), set_sort_field, set_sort_ascending)>
                                        {move || format!("Публикация{}", get_sort_indicator(&sort_field.get(), "published", sort_ascending.get()))}
                                    </th>
                                    <th class="p-0-8">{""}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {visible_items().into_iter().map(|template| {
                                    let template_for_open = template.clone();
                                    let id = template.to_string_id();
                                    let is_published = template.is_published;
                                    view! {
                                        <tr
                                            class="row-clickable"
                                            on:click=move |_| {
                                                set_editing.set(Some(template_for_open.clone()));
                                                set_show_details.set(true);
                                            }
                                        >
                                            <td class="p-0-8">{highlight_matches(&template.base.description, &filter_text.get())}</td>
                                            <td class="p-0-8">{template.kind.display_name()}</td>
                                            <td class="p-0-8 text-center">{template.content_structure.embedded_dimensions.len()}</td>
                                            <td class="p-0-8">
                                                {if is_published {
                                                    view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Опубликован"</Badge> }.into_any()
                                                } else {
                                                    view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>"Черновик"</Badge> }.into_any()
                                                }}
                                            </td>
                                            <td class="p-0-8">
                                                <button
                                                    class="btn btn-secondary btn-small"
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        toggle_published(id.clone(), !is_published);
                                                    }
                                                >
                                                    {if is_published { "Снять" } else { "Опубликовать" }}
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}

            {move || if show_details.get() {
                view! {
                    <div class="modal-overlay">
                        <div class="modal-content modal-wide">
                            <ReportTemplateDetails
                                template=editing.get()
                                on_saved=Callback::new(move |_| { set_show_details.set(false); load(); })
                                on_cancel=Callback::new(move |_| set_show_details.set(false))
                            />
                        </div>
                    </div>
                }.into_any()
            } else { view! { <></> }.into_any() }}
        </div>
    }
}
