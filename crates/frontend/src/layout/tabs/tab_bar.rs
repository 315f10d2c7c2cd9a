//! Полоса открытых табов (заголовки + кнопки закрытия)

use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TabBar() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tab-bar">
            <For
                each=move || tabs_store.opened.get()
                key=|tab| tab.key.clone()
                children=move |tab: TabData| {
                    let key = tab.key.clone();
                    let key_for_active = key.clone();
                    let key_for_activate = key.clone();
                    let key_for_close = key.clone();
                    view! {
                        <div
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=move || {
                                tabs_store.active.get().as_deref() == Some(key_for_active.as_str())
                            }
                            on:click=move |_| tabs_store.activate_tab(&key_for_activate)
                        >
                            <span class="tab-bar__title">{tab.title.clone()}</span>
                            <button
                                class="tab-bar__close"
                                title="Закрыть"
                                on:click=move |e| {
                                    e.stop_propagation();
                                    tabs_store.close_tab(&key_for_close);
                                }
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
