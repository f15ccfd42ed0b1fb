//! Column Model
//!
//! Lanes of one user story type and the view-models built from them.

use crate::items::WorkItemStore;
use crate::models::{UsType, WorkItem};

const LANE_ID_PREFIX: &str = "board-";

/// One rendered lane
#[derive(Debug, Clone, PartialEq)]
pub struct Lane {
    pub index: usize,
    pub id: String,
    pub title: String,
    pub items: Vec<WorkItem>,
    /// Ids of the lanes a card in this lane may be dropped on
    pub drag_to: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnModel {
    us_type: u32,
    columns: Vec<String>,
}

impl ColumnModel {
    pub fn new(us_type: &UsType) -> Self {
        let columns = if us_type.columns.is_empty() {
            UsType::default_columns()
        } else {
            us_type.columns.clone()
        };
        Self { us_type: us_type.id, columns }
    }

    pub fn us_type(&self) -> u32 {
        self.us_type
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(String::as_str)
    }

    pub fn lane_id(name: &str) -> String {
        format!("{}{}", LANE_ID_PREFIX, name)
    }

    /// Resolve a lane id like `board-En progreso` back to its index
    pub fn index_of_lane_id(&self, lane_id: &str) -> Option<usize> {
        lane_id.strip_prefix(LANE_ID_PREFIX).and_then(|name| self.index_of(name))
    }

    /// Build every lane of this type from the store
    pub fn lanes(&self, store: &WorkItemStore) -> Vec<Lane> {
        self.columns
            .iter()
            .enumerate()
            .map(|(index, name)| Lane {
                index,
                id: Self::lane_id(name),
                title: name.clone(),
                items: store.in_lane(self.us_type, index).into_iter().cloned().collect(),
                drag_to: self
                    .columns
                    .iter()
                    .filter(|other| *other != name)
                    .map(|other| Self::lane_id(other))
                    .collect(),
            })
            .collect()
    }
}
