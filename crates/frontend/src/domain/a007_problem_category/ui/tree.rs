use super::super::model::ProblemCategoryCollection;
use crate::shared::category_tree_view::category_tree_page;
use leptos::prelude::*;

/// Страница дерева категорий проблем
#[component]
pub fn ProblemCategoryTree() -> impl IntoView {
    category_tree_page::<ProblemCategoryCollection>()
}
