//! Редактор фильтра заявок.
//!
//! Общий блок форм отчёта и измерения: переключатель "ограничить выборку"
//! и поля критериев. Списки вводятся через запятую.

use contracts::shared::WorkOrderFilter;
use leptos::prelude::*;

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

fn date_from_input(value: String) -> Option<String> {
    (!value.trim().is_empty()).then_some(value)
}

#[component]
pub fn WorkOrderFilterEditor(
    /// Переключатель "ограничить выборку заявок"
    use_filter: RwSignal<bool>,
    filter: RwSignal<WorkOrderFilter>,
) -> impl IntoView {
    view! {
        <div class="filter-editor">
            <div class="form-group">
                <label style="display: flex; align-items: center; gap: 6px; cursor: pointer;">
                    <input
                        type="checkbox"
                        prop:checked=move || use_filter.get()
                        on:change=move |ev| use_filter.set(event_target_checked(&ev))
                    />
                    {"Ограничить выборку заявок"}
                </label>
            </div>

            {move || use_filter.get().then(|| view! {
                <div class="filter-editor__fields" style="padding-left: 22px; display: flex; flex-direction: column; gap: 8px;">
                    <div style="display: flex; gap: 8px; align-items: center;">
                        <label>{"Период с"}</label>
                        <input
                            type="date"
                            prop:value=move || filter.get().date_from.unwrap_or_default()
                            on:input=move |ev| filter.update(|f| f.date_from = date_from_input(event_target_value(&ev)))
                        />
                        <label>{"по"}</label>
                        <input
                            type="date"
                            prop:value=move || filter.get().date_to.unwrap_or_default()
                            on:input=move |ev| filter.update(|f| f.date_to = date_from_input(event_target_value(&ev)))
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Каналы (через запятую)"}</label>
                        <input
                            type="text"
                            prop:value=move || filter.get().sources.join(", ")
                            on:change=move |ev| filter.update(|f| f.sources = parse_list(&event_target_value(&ev)))
                            placeholder="телефон, портал"
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Регионы (через запятую)"}</label>
                        <input
                            type="text"
                            prop:value=move || filter.get().regions.join(", ")
                            on:change=move |ev| filter.update(|f| f.regions = parse_list(&event_target_value(&ev)))
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Объекты (через запятую)"}</label>
                        <input
                            type="text"
                            prop:value=move || filter.get().items.join(", ")
                            on:change=move |ev| filter.update(|f| f.items = parse_list(&event_target_value(&ev)))
                        />
                    </div>

                    <div class="form-group">
                        <label>{"Теги (через запятую)"}</label>
                        <input
                            type="text"
                            prop:value=move || filter.get().tags.join(", ")
                            on:change=move |ev| filter.update(|f| f.tags = parse_list(&event_target_value(&ev)))
                        />
                    </div>

                    <div style="color: #888; font-size: 13px;">
                        {move || format!("Сейчас: {}", filter.get().summary())}
                    </div>
                </div>
            })}
        </div>
    }
}
