//! Frontend Models
//!
//! Records embedded in the page by the backend at load time.

use serde::{Deserialize, Serialize};

/// Role that bypasses ownership and workflow checks on the board
pub const SCRUM_MASTER: &str = "Scrum Master";

/// Lanes a new user story type starts with
pub const DEFAULT_COLUMNS: &[&str] = &["Por hacer", "En progreso", "Hecho"];

/// Sub-task attached to a user story
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubTask {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub title: String,
    /// Lane of the parent story when the task was created
    pub column: usize,
    /// Set once the parent story leaves `column`; never cleared here
    #[serde(default)]
    pub disabled: bool,
}

/// User story (work item) shown as a card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub code: String,
    pub us_type: u32,
    /// Index into the type's column list
    pub column: usize,
    pub project: u32,
    #[serde(default)]
    pub sprint_priority: Option<i32>,
    #[serde(default, alias = "sprint_member")]
    pub assigned_member: Option<u32>,
    #[serde(default)]
    pub tasks: Vec<SubTask>,
}

impl WorkItem {
    pub fn details_url(&self) -> String {
        format!("/projects/{}/backlog/{}/", self.project, self.id)
    }

    pub fn create_task_url(&self) -> String {
        format!("/projects/{}/backlog/{}/tasks/create", self.project, self.id)
    }

    /// Project line shown on the card
    pub fn project_label(&self) -> String {
        format!("Project #{}", self.project)
    }
}

/// User story type with its ordered lanes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsType {
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub columns: Vec<String>,
}

impl UsType {
    pub fn default_columns() -> Vec<String> {
        DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect()
    }
}

/// The member looking at the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: u32,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Member {
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    pub fn is_scrum_master(&self) -> bool {
        self.has_role(SCRUM_MASTER)
    }
}

/// Sprint member offered in the assignment form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignableMember {
    pub id: u32,
    #[serde(default)]
    pub username: String,
    pub capacity: i64,
    pub used_capacity: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn work_item_accepts_backend_field_names() {
        let json = r#"{
            "id": 7, "title": "Login", "code": "P-7", "us_type": 2, "column": 1,
            "project": 3, "sprint_priority": 4, "sprint_member": 9,
            "tasks": [{"column": 1}]
        }"#;
        let item: WorkItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.assigned_member, Some(9));
        assert_eq!(item.tasks.len(), 1);
        assert!(!item.tasks[0].disabled);
        assert_eq!(item.details_url(), "/projects/3/backlog/7/");
        assert_eq!(item.create_task_url(), "/projects/3/backlog/7/tasks/create");
        assert_eq!(item.project_label(), "Project #3");
    }

    #[test]
    fn unassigned_item_has_no_member() {
        let json = r#"{"id": 1, "title": "t", "us_type": 1, "column": 0, "project": 1}"#;
        let item: WorkItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.assigned_member, None);
        assert!(item.tasks.is_empty());
    }

    #[test]
    fn scrum_master_role_is_detected() {
        let member = Member { id: 1, username: "ana".into(), roles: vec!["Developer".into(), SCRUM_MASTER.into()] };
        assert!(member.is_scrum_master());
        let dev = Member { id: 2, username: "bo".into(), roles: vec!["Developer".into()] };
        assert!(!dev.is_scrum_master());
    }
}
