use super::super::model::ReportCategoryCollection;
use crate::shared::category_tree_view::category_tree_page;
use leptos::prelude::*;

/// Страница дерева категорий отчётов
#[component]
pub fn ReportCategoryTree() -> impl IntoView {
    category_tree_page::<ReportCategoryCollection>()
}
