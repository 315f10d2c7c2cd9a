use super::super::model::DimensionCategoryCollection;
use crate::shared::category_tree_view::category_tree_page;
use leptos::prelude::*;

/// Страница дерева категорий измерений
#[component]
pub fn DimensionCategoryTree() -> impl IntoView {
    category_tree_page::<DimensionCategoryCollection>()
}
