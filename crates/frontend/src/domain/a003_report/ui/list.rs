//! Список отчётов с запуском симуляции генерации

use super::details::ReportDetails;
use crate::domain::a003_report::model;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_indicator, highlight_matches, sort_list,
    SearchInput,
};
use crate::shared::progress::run_generation;
use contracts::domain::a003_report::Report;
use contracts::domain::common::AggregateRoot;
use contracts::enums::ReportStatus;
use leptos::prelude::*;
use std::collections::HashMap;
use thaw::{Badge, BadgeAppearance, BadgeColor};

/// Прирост прогресса за тик симулятора
const PROGRESS_STEP: u8 = 9;

fn status_badge(status: ReportStatus) -> AnyView {
    let color = match status {
        ReportStatus::Draft => BadgeColor::Subtle,
        ReportStatus::Generating => BadgeColor::Informative,
        ReportStatus::Completed => BadgeColor::Success,
        ReportStatus::Failed => BadgeColor::Danger,
    };
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {status.display_name()}
        </Badge>
    }
    .into_any()
}

#[component]
pub fn ReportList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Report>>(vec![]);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);
    let (filter_text, set_filter_text) = signal(String::new());
    let (sort_field, set_sort_field) = signal("description".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);
    let (show_details, set_show_details) = signal(false);
    let (editing, set_editing) = signal::<Option<Report>>(None);

    // Прогресс активных генераций (id → 0..=100)
    let (progress_map, set_progress_map) = signal::<HashMap<String, u8>>(HashMap::new());

    // Аналог clearInterval: закрытие вкладки останавливает симуляции
    let cancelled = StoredValue::new(false);
    on_cleanup(move || cancelled.set_value(true));

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        wasm_bindgen_futures::spawn_local(async move {
            let active: Vec<String> = progress_map.get_untracked().keys().cloned().collect();
            match model::fetch_all(&active).await {
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

    let generate = move |id: String| {
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = model::start_generation(id.clone()).await {
                set_error.set(Some(e));
                return;
            }
            set_progress_map.update(|m| {
                m.insert(id.clone(), 0);
            });

            let tick_id = id.clone();
            let finished = run_generation(cancelled, PROGRESS_STEP, move |p| {
                set_progress_map.update(|m| {
                    m.insert(tick_id.clone(), p);
                });
                if let Err(e) = model::record_progress(&tick_id, p) {
                    log::warn!("progress not persisted: {}", e);
                }
            })
            .await;

            if finished {
                set_progress_map.update(|m| {
                    m.remove(&id);
                });
                load();
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
                <h2 style="margin: 0;">{Report::list_name()}</h2>
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
                                    <th class="p-0-8 sortable" on:click=create_sort_toggle("status", sort_field.into(), set_sort_field, set_sort_ascending)>
                                        {move || format!("Статус{}", get_sort_indicator(&sort_field.get(), "status", sort_ascending.get()))}
                                    </th>
                                    <th class="p-0-8" style="width: 180px;">{"Генерация"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {visible_items().into_iter().map(|report| {
                                    let id = report.to_string_id();
                                    let report_for_open = report.clone();
                                    let active_progress = progress_map.get().get(&id).copied();
                                    let is_generating = active_progress.is_some()
                                        || report.status == ReportStatus::Generating;
                                    let id_for_generate = id.clone();
                                    view! {
                                        <tr
                                            class="row-clickable"
                                            on:click=move |_| {
                                                set_editing.set(Some(report_for_open.clone()));
                                                set_show_details.set(true);
                                            }
                                        >
                                            <td class="p-0-8">{highlight_matches(&report.base.description, &filter_text.get())}</td>
                                            <td class="p-0-8">{report.kind.display_name()}</td>
                                            <td class="p-0-8">{status_badge(report.status)}</td>
                                            <td class="p-0-8">
                                                {match active_progress {
                                                    Some(p) => view! {
                                                        <div style="display: flex; align-items: center; gap: 6px;">
                                                            <div style="flex: 1; height: 8px; background: #eee; border-radius: 4px; overflow: hidden;">
                                                                <div style=format!(
                                                                    "width: {}%; height: 100%; background: #4a90d9;",
                                                                    p
                                                                )></div>
                                                            </div>
                                                            <span style="font-size: 12px; color: #666;">{format!("{}%", p)}</span>
                                                        </div>
                                                    }.into_any(),
                                                    None => view! {
                                                        <button
                                                            class="btn btn-secondary btn-small"
                                                            disabled=is_generating
                                                            on:click=move |ev| {
                                                                ev.stop_propagation();
                                                                generate(id_for_generate.clone());
                                                            }
                                                        >
                                                            {icon("play")}
                                                            {"Сгенерировать"}
                                                        </button>
                                                    }.into_any(),
                                                }}
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
                            <ReportDetails
                                report=editing.get()
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
