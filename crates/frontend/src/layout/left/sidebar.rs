//! Sidebar component with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "reports",
            label: "Отчёты",
            icon: "file-text",
            items: vec![
                ("a003_report", tab_label_for_key("a003_report"), "file-text"),
                (
                    "a002_report_template",
                    tab_label_for_key("a002_report_template"),
                    "layout",
                ),
                (
                    "a001_report_category",
                    tab_label_for_key("a001_report_category"),
                    "folder-tree",
                ),
            ],
        },
        MenuGroup {
            id: "dimensions",
            label: "Измерения",
            icon: "layers",
            items: vec![
                (
                    "a005_dimension",
                    tab_label_for_key("a005_dimension"),
                    "layers",
                ),
                (
                    "a004_dimension_category",
                    tab_label_for_key("a004_dimension_category"),
                    "folder-tree",
                ),
                (
                    "a006_data_metric",
                    tab_label_for_key("a006_data_metric"),
                    "activity",
                ),
            ],
        },
        MenuGroup {
            id: "knowledge",
            label: "База знаний",
            icon: "book",
            items: vec![
                ("a008_problem", tab_label_for_key("a008_problem"), "alert"),
                (
                    "a007_problem_category",
                    tab_label_for_key("a007_problem_category"),
                    "folder-tree",
                ),
                (
                    "a009_project_case",
                    tab_label_for_key("a009_project_case"),
                    "briefcase",
                ),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Все группы раскрыты при старте
    let expanded_groups = RwSignal::new(vec![
        "reports".to_string(),
        "dimensions".to_string(),
        "knowledge".to_string(),
    ]);

    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                    let group_id = group.id.to_string();
                    let group_id_for_exp = group_id.clone();
                    let group_id_for_click = group_id.clone();

                    view! {
                        <div>
                            // Group header
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    let gid = group_id_for_click.clone();
                                    expanded_groups.update(move |items| {
                                        if let Some(pos) = items.iter().position(|x| x == &gid) {
                                            items.remove(pos);
                                        } else {
                                            items.push(gid);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <span class="app-sidebar__chevron">
                                    {
                                        let gid = group_id_for_exp.clone();
                                        move || if expanded_groups.get().contains(&gid) {
                                            icon("chevron-down")
                                        } else {
                                            icon("chevron-right")
                                        }
                                    }
                                </span>
                            </div>

                            // Group items
                            <div
                                class="app-sidebar__group"
                                class:hidden={
                                    let gid = group_id.clone();
                                    move || !expanded_groups.get().contains(&gid)
                                }
                            >
                                {group.items.into_iter().map(|(item_id, item_label, item_icon)| {
                                    let key = item_id.to_string();
                                    let key_for_active = key.clone();
                                    view! {
                                        <div
                                            class="app-sidebar__item app-sidebar__item--nested"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(key_for_active.as_str())
                                            }
                                            on:click=move |_| ctx.open_tab(&key, item_label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(item_icon)}
                                                <span>{item_label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </div>
                    }
            }).collect_view()}
        </div>
    }
}
