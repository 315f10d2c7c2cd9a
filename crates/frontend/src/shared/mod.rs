pub mod category_tree;
pub mod category_tree_view;
pub mod filter_editor;
pub mod icons;
pub mod list_utils;
pub mod placeholder_editor;
pub mod progress;
pub mod storage;
pub mod text_insert;
