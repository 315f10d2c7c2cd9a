use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Максимальная вложенность секций измерения (уровни 1/2/3)
pub const MAX_SECTION_DEPTH: usize = 3;

/// Секция содержимого измерения. Рекурсивная структура, не глубже трёх уровней.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    /// Текст секции (может содержать плейсхолдеры показателей)
    #[serde(default)]
    pub content: String,
    /// Порядок внутри родителя
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub children: Vec<ContentItem>,
}

impl ContentItem {
    pub fn new(title: String, order: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            content: String::new(),
            order,
            children: Vec::new(),
        }
    }

    /// Глубина поддерева (лист = 1)
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(|c| c.depth())
            .max()
            .unwrap_or(0)
    }

    /// Добавить дочернюю секцию на уровень `parent_level + 1`.
    ///
    /// `parent_level` — уровень этой секции (1..=3). Уровень 3 детей не имеет.
    pub fn add_child(&mut self, parent_level: usize, title: String) -> Result<()> {
        if parent_level >= MAX_SECTION_DEPTH {
            bail!("Секции уровня {} не могут иметь вложенных", MAX_SECTION_DEPTH);
        }
        let order = self.children.len() as u32;
        self.children.push(ContentItem::new(title, order));
        Ok(())
    }

    /// Переставить ребёнка с позиции `from` на `to`, пересчитав order
    pub fn move_child(&mut self, from: usize, to: usize) {
        if from >= self.children.len() || to >= self.children.len() {
            return;
        }
        let item = self.children.remove(from);
        self.children.insert(to, item);
        for (i, child) in self.children.iter_mut().enumerate() {
            child.order = i as u32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_counts_levels() {
        let mut root = ContentItem::new("Обзор".into(), 0);
        root.add_child(1, "Динамика".into()).unwrap();
        root.children[0].add_child(2, "По регионам".into()).unwrap();
        assert_eq!(root.depth(), 3);
    }

    #[test]
    fn test_level_three_rejects_children() {
        let mut leaf = ContentItem::new("Лист".into(), 0);
        assert!(leaf.add_child(3, "Слишком глубоко".into()).is_err());
    }

    #[test]
    fn test_move_child_renumbers_order() {
        let mut root = ContentItem::new("Корень".into(), 0);
        root.add_child(1, "А".into()).unwrap();
        root.add_child(1, "Б".into()).unwrap();
        root.add_child(1, "В".into()).unwrap();
        root.move_child(2, 0);
        let titles: Vec<_> = root.children.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["В", "А", "Б"]);
        let orders: Vec<_> = root.children.iter().map(|c| c.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
    }

    #[test]
    fn test_move_child_out_of_range_is_noop() {
        let mut root = ContentItem::new("Корень".into(), 0);
        root.add_child(1, "А".into()).unwrap();
        root.move_child(0, 5);
        assert_eq!(root.children[0].title, "А");
    }
}
