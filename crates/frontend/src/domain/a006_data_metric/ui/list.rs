//! Список показателей: поиск, сортировка, карточка в модальном окне

use super::details::DataMetricDetails;
use crate::domain::a006_data_metric::model;
use crate::shared::list_utils::{
    create_sort_toggle, filter_list, get_sort_indicator, highlight_matches, sort_list,
    SearchInput,
};
use contracts::domain::a006_data_metric::DataMetric;
use contracts::domain::common::AggregateRoot;
use leptos::prelude::*;

#[component]
pub fn DataMetricList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<DataMetric>>(vec![]);
    let (error, set_error) = signal::<Option<String>>(None);
    let (is_loading, set_is_loading) = signal(false);
    let (filter_text, set_filter_text) = signal(String::new());
    let (sort_field, set_sort_field) = signal("description".to_string());
    let (sort_ascending, set_sort_ascending) = signal(true);
    let (show_details, set_show_details) = signal(false);
    let (editing, set_editing) = signal::<Option<DataMetric>>(None);

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

    let visible_items = move || {
        let mut list = filter_list(items.get(), &filter_text.get());
        sort_list(&mut list, &sort_field.get(), sort_ascending.get());
        list
    };

    view! {
        <div class="content">
            <div class="header" style="margin-bottom: 8px; flex-shrink: 0;">
                <h2 style="margin: 0;">{DataMetric::list_name()}</h2>
                <div class="header-actions" style="display: flex; align-items: center; gap: 8px;">
                    <SearchInput
                        value=filter_text
                        on_change=Callback::new(move |v| set_filter_text.set(v))
                    />
                    <button class="btn btn-primary" on:click=move |_| { set_editing.set(None); set_show_details.set(true); }>
                        {crate::shared::icons::icon("plus")}
                        {"Новый"}
                    </button>
                    <button class="btn btn-secondary" on:click=move |_| load()>
                        {crate::shared::icons::icon("refresh")}
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
                                        {move || format!("Наименование{}", get_sort_indicator(&sort_field.get(), "description", sort_ascending.get()))}
                                    </th>
                                    <th class="p-0-8 sortable" on:click=create_sort_toggle("unit", sort_field.into(), set_sort_field, set_sort_ascending)>
                                        {move || format!("Ед. изм.{}", get_sort_indicator(&sort_field.get(), "unit", sort_ascending.get()))}
                                    </th>
                                    <th class="p-0-8">{"Пример значения"}</th>
                                    <th class="p-0-8">{"Токен"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {visible_items().into_iter().map(|metric| {
                                    let metric_for_open = metric.clone();
                                    view! {
                                        <tr
                                            class="row-clickable"
                                            on:click=move |_| {
                                                set_editing.set(Some(metric_for_open.clone()));
                                                set_show_details.set(true);
                                            }
                                        >
                                            <td class="p-0-8">{highlight_matches(&metric.base.description, &filter_text.get())}</td>
                                            <td class="p-0-8">{metric.unit.clone()}</td>
                                            <td class="p-0-8">{metric.sample_value.clone()}</td>
                                            <td class="p-0-8"><code>{metric.placeholder_token()}</code></td>
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
                        <div class="modal-content">
                            <DataMetricDetails
                                metric=editing.get()
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
