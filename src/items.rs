//! Work-Item Store
//!
//! Ordered, server-seeded collection of user stories.
//! Only the board controller writes to it, and only through [`WorkItemStore::advance`].

use crate::models::WorkItem;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkItemStore {
    items: Vec<WorkItem>,
}

impl WorkItemStore {
    pub fn new(items: Vec<WorkItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &WorkItem> {
        self.items.iter()
    }

    pub fn get(&self, id: u32) -> Option<&WorkItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items of one type sitting in one lane, in server order
    pub fn in_lane(&self, us_type: u32, column: usize) -> Vec<&WorkItem> {
        self.items
            .iter()
            .filter(|item| item.us_type == us_type && item.column == column)
            .collect()
    }

    /// Move an item to `column` and retire the listed sub-tasks.
    /// Returns `false` if the item is unknown.
    pub(crate) fn advance(&mut self, id: u32, column: usize, retired_tasks: &[usize]) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        item.column = column;
        for &index in retired_tasks {
            if let Some(task) = item.tasks.get_mut(index) {
                task.disabled = true;
            }
        }
        true
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::SubTask;

    pub fn make_item(id: u32, us_type: u32, column: usize) -> WorkItem {
        WorkItem {
            id,
            title: format!("Story {}", id),
            code: format!("US-{}", id),
            us_type,
            column,
            project: 1,
            sprint_priority: None,
            assigned_member: None,
            tasks: Vec::new(),
        }
    }

    #[test]
    fn in_lane_filters_by_type_and_column_keeping_order() {
        let store = WorkItemStore::new(vec![
            make_item(3, 1, 0),
            make_item(1, 1, 1),
            make_item(2, 1, 0),
            make_item(4, 2, 0),
        ]);

        let ids: Vec<u32> = store.in_lane(1, 0).iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 2]);
        assert_eq!(store.in_lane(2, 0).len(), 1);
        assert!(store.in_lane(2, 1).is_empty());
    }

    #[test]
    fn advance_moves_item_and_disables_tasks() {
        let mut item = make_item(1, 1, 1);
        item.tasks = vec![
            SubTask { id: Some(1), title: "a".into(), column: 1, disabled: false },
            SubTask { id: Some(2), title: "b".into(), column: 0, disabled: false },
        ];
        let mut store = WorkItemStore::new(vec![item]);

        assert!(store.advance(1, 2, &[0]));
        let moved = store.get(1).unwrap();
        assert_eq!(moved.column, 2);
        assert!(moved.tasks[0].disabled);
        assert!(!moved.tasks[1].disabled);
    }

    #[test]
    fn advance_unknown_item_is_reported() {
        let mut store = WorkItemStore::new(vec![make_item(1, 1, 0)]);
        assert!(!store.advance(99, 1, &[]));
        assert_eq!(store.get(1).unwrap().column, 0);
    }
}
