//! Построение дерева категорий из плоского списка parent_id-ссылок.
//!
//! Одна реализация для всех страниц категорий (отчёты, измерения, проблемы).
//! Чистая функция без web_sys — тестируется на хосте.

use std::collections::{HashMap, HashSet};

/// Ключ синтетического корня "Все"
pub const ROOT_KEY: &str = "__root__";

/// Плоская запись категории, как она лежит в storage
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRecord {
    pub id: String,
    pub name: String,
    pub parent_id: Option<String>,
    pub description: String,
}

/// Узел дерева для tree-view виджета
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryNode {
    /// Стабильный ключ узла (id категории)
    pub key: String,
    pub title: String,
    /// Лист для виджета: у категории нет дочерних записей
    pub is_leaf: bool,
    pub children: Vec<CategoryNode>,
}

/// Собрать дерево категорий с фильтрацией листьев.
///
/// Правила (одинаковые для всех страниц категорий):
/// - узел с детьми показывается всегда — скрытие совпавшего потомка не должно
///   скрывать цепочку предков;
/// - лист показывается, только если имя или описание содержит фильтр
///   (case-insensitive); пустой фильтр оставляет всё;
/// - корень — синтетический узел "Все", его дети — категории без parent_id;
/// - порядок детей повторяет порядок входного списка;
/// - цикл по parent_id обрывается (visited-set), а не рекурсирует вечно;
/// - дубликаты id не охраняются: поведение не определено.
pub fn build_category_tree(records: &[CategoryRecord], filter: &str) -> CategoryNode {
    let filter = filter.trim().to_lowercase();

    // Группируем детей по parent_id, сохраняя порядок входа
    let mut children_map: HashMap<Option<&str>, Vec<&CategoryRecord>> = HashMap::new();
    for record in records {
        children_map
            .entry(record.parent_id.as_deref())
            .or_default()
            .push(record);
    }

    fn build_node(
        record: &CategoryRecord,
        children_map: &HashMap<Option<&str>, Vec<&CategoryRecord>>,
        filter: &str,
        visited: &mut HashSet<String>,
    ) -> Option<CategoryNode> {
        // Защита от цикла по parent_id: повторный заход обрезает ветку
        if !visited.insert(record.id.clone()) {
            return None;
        }

        let kids = children_map.get(&Some(record.id.as_str()));
        let is_branch = kids.map_or(false, |k| !k.is_empty());

        let children: Vec<CategoryNode> = kids
            .map(|k| {
                k.iter()
                    .filter_map(|kid| build_node(kid, children_map, filter, visited))
                    .collect()
            })
            .unwrap_or_default();

        if !is_branch && !filter.is_empty() {
            let matches = record.name.to_lowercase().contains(filter)
                || record.description.to_lowercase().contains(filter);
            if !matches {
                return None;
            }
        }

        Some(CategoryNode {
            key: record.id.clone(),
            title: record.name.clone(),
            is_leaf: !is_branch,
            children,
        })
    }

    let mut visited = HashSet::new();
    let roots: Vec<CategoryNode> = children_map
        .get(&None)
        .map(|top| {
            top.iter()
                .filter_map(|record| build_node(record, &children_map, &filter, &mut visited))
                .collect()
        })
        .unwrap_or_default();

    CategoryNode {
        key: ROOT_KEY.to_string(),
        title: "Все".to_string(),
        is_leaf: false,
        children: roots,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(id: &str, name: &str, parent: Option<&str>) -> CategoryRecord {
        CategoryRecord {
            id: id.to_string(),
            name: name.to_string(),
            parent_id: parent.map(|p| p.to_string()),
            description: String::new(),
        }
    }

    fn count_nodes(node: &CategoryNode) -> usize {
        1 + node.children.iter().map(count_nodes).sum::<usize>()
    }

    #[test]
    fn test_empty_list_yields_bare_root() {
        let tree = build_category_tree(&[], "");
        assert_eq!(tree.key, ROOT_KEY);
        assert!(tree.children.is_empty());
        assert!(!tree.is_leaf);
    }

    #[test]
    fn test_empty_filter_returns_every_node() {
        let records = vec![
            rec("1", "Эксплуатация", None),
            rec("2", "Сети", Some("1")),
            rec("3", "Подстанции", Some("1")),
            rec("4", "Клиентский сервис", None),
        ];
        let tree = build_category_tree(&records, "");
        // корень + 4 категории
        assert_eq!(count_nodes(&tree), 5);
    }

    #[test]
    fn test_deep_leaf_match_keeps_ancestor_chain() {
        let records = vec![
            rec("1", "Уровень 1", None),
            rec("2", "Уровень 2", Some("1")),
            rec("3", "Целевой лист", Some("2")),
            rec("4", "Другой лист", Some("2")),
        ];
        let tree = build_category_tree(&records, "целевой");

        // Глубина до листа равна длине цепочки предков
        let l1 = &tree.children[0];
        assert_eq!(l1.key, "1");
        let l2 = &l1.children[0];
        assert_eq!(l2.key, "2");
        assert_eq!(l2.children.len(), 1);
        assert_eq!(l2.children[0].key, "3");
        assert!(l2.children[0].is_leaf);
    }

    #[test]
    fn test_non_matching_sibling_leaves_are_dropped() {
        let records = vec![
            rec("1", "Корневая", None),
            rec("2", "Авария", Some("1")),
            rec("3", "Плановые работы", Some("1")),
        ];
        let tree = build_category_tree(&records, "авария");
        let branch = &tree.children[0];
        assert_eq!(branch.children.len(), 1);
        assert_eq!(branch.children[0].title, "Авария");
    }

    #[test]
    fn test_branch_without_matches_is_still_shown() {
        let records = vec![
            rec("1", "Ветка", None),
            rec("2", "Лист", Some("1")),
            rec("3", "Совпадение", None),
        ];
        let tree = build_category_tree(&records, "совпадение");
        // Ветка остаётся (у неё есть дети в данных), её несовпавший лист — нет
        let keys: Vec<&str> = tree.children.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["1", "3"]);
        assert!(tree.children[0].children.is_empty());
    }

    #[test]
    fn test_match_by_description() {
        let mut r = rec("1", "Категория", None);
        r.description = "ежемесячная сводка".to_string();
        let tree = build_category_tree(&[r], "сводка");
        assert_eq!(tree.children.len(), 1);
    }

    #[test]
    fn test_cyclic_parent_chain_terminates() {
        // 1 → 2 → 1: без visited-set рекурсия бесконечна
        let records = vec![
            rec("1", "А", Some("2")),
            rec("2", "Б", Some("1")),
            rec("3", "Корень", None),
        ];
        let tree = build_category_tree(&records, "");
        // Узлы цикла недостижимы от корня; дерево строится и не зависает
        assert_eq!(tree.children.len(), 1);
        assert_eq!(tree.children[0].key, "3");
    }

    #[test]
    fn test_child_order_follows_input_order() {
        let records = vec![
            rec("b", "Вторая", None),
            rec("a", "Первая", None),
        ];
        let tree = build_category_tree(&records, "");
        let keys: Vec<&str> = tree.children.iter().map(|c| c.key.as_str()).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
