//! Редактор текста шаблона с вставкой плейсхолдеров по курсору.
//!
//! Текст — обычная textarea; кнопки сверху вставляют токен показателя или
//! целиком отрендеренное измерение в позицию курсора (selection_start).
//! Если позицию определить нельзя — токен добавляется в конец.

use crate::shared::text_insert::{char_index_to_utf16, insert_at_cursor, utf16_to_char_index};
use leptos::html::Textarea;
use leptos::prelude::*;

/// Токен для вставки: показатель или измерение
#[derive(Debug, Clone, PartialEq)]
pub struct EditorToken {
    /// ID исходного агрегата (для обратных ссылок)
    pub id: String,
    /// Подпись кнопки
    pub label: String,
    /// Вставляемый текст
    pub text: String,
}

#[component]
pub fn PlaceholderEditor(
    /// Редактируемый текст (rich_text_content шаблона)
    value: RwSignal<String>,
    /// Показатели — вставляются как `{{metric:Имя}}`
    #[prop(into)]
    metrics: Signal<Vec<EditorToken>>,
    /// Измерения — вставляются развёрнутым текстом секций
    #[prop(into)]
    dimensions: Signal<Vec<EditorToken>>,
    /// Уведомление о вставке измерения (id) — для embedded_dimensions
    #[prop(into)]
    on_dimension_inserted: Callback<String>,
) -> impl IntoView {
    let textarea_ref: NodeRef<Textarea> = NodeRef::new();

    // Позиция курсора в символах; selection_start отдаёт UTF-16 юниты,
    // вставка же считает символы. None — курсор неизвестен, вставляем в конец.
    let cursor_position = move |text: &str| -> Option<usize> {
        let el = textarea_ref.get_untracked()?;
        let utf16_offset = el.selection_start().ok().flatten()? as usize;
        Some(utf16_to_char_index(text, utf16_offset))
    };

    let insert_token = move |token: String| {
        let current = value.get_untracked();
        let (new_text, new_cursor) = insert_at_cursor(&current, cursor_position(&current), &token);
        value.set(new_text.clone());
        if let Some(el) = textarea_ref.get_untracked() {
            el.set_value(&new_text);
            let selection = char_index_to_utf16(&new_text, new_cursor) as u32;
            let _ = el.set_selection_range(selection, selection);
            let _ = el.focus();
        }
    };

    view! {
        <div class="placeholder-editor">
            <div class="placeholder-editor__toolbar" style="display: flex; flex-wrap: wrap; gap: 6px; margin-bottom: 6px;">
                <span style="color: #888; font-size: 13px;">{"Показатели:"}</span>
                {move || metrics.get().into_iter().map(|token| {
                    let text = token.text.clone();
                    view! {
                        <button
                            class="btn btn-chip"
                            title=format!("Вставить {}", token.text)
                            on:click=move |_| insert_token(text.clone())
                        >
                            {token.label.clone()}
                        </button>
                    }
                }).collect_view()}
            </div>
            <div class="placeholder-editor__toolbar" style="display: flex; flex-wrap: wrap; gap: 6px; margin-bottom: 6px;">
                <span style="color: #888; font-size: 13px;">{"Измерения:"}</span>
                {move || dimensions.get().into_iter().map(|token| {
                    let text = token.text.clone();
                    let id = token.id.clone();
                    view! {
                        <button
                            class="btn btn-chip"
                            title="Вставить секции измерения"
                            on:click=move |_| {
                                insert_token(text.clone());
                                on_dimension_inserted.run(id.clone());
                            }
                        >
                            {token.label.clone()}
                        </button>
                    }
                }).collect_view()}
            </div>
            <textarea
                node_ref=textarea_ref
                rows="12"
                style="width: 100%; font-family: monospace; font-size: 14px;"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
