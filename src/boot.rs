//! Page Boot Data
//!
//! The backend embeds JSON blobs in `<script type="application/json">` tags.
//! They are parsed once, checked for consistency and handed to the board.

use std::collections::HashSet;

use serde::de::DeserializeOwned;

use crate::error::BootError;
use crate::models::{AssignableMember, Member, UsType, WorkItem};

pub const USER_STORIES_ID: &str = "user_stories";
pub const US_TYPES_ID: &str = "us_types";
pub const MEMBER_ID: &str = "member";
pub const ASSIGNABLE_MEMBERS_ID: &str = "assignable_members";
pub const US_ESTIMATION_ID: &str = "us_estimation";

/// Everything the board page needs
#[derive(Debug, Clone, PartialEq)]
pub struct BootData {
    pub items: Vec<WorkItem>,
    pub us_types: Vec<UsType>,
    pub member: Member,
}

impl BootData {
    pub fn from_json(items: &str, us_types: &str, member: &str) -> Result<Self, BootError> {
        let boot = Self {
            items: parse(USER_STORIES_ID, items)?,
            us_types: parse(US_TYPES_ID, us_types)?,
            member: parse(MEMBER_ID, member)?,
        };
        boot.validate()?;
        Ok(boot)
    }

    /// Types and their lane names must be unique; every story must be unique,
    /// of a known type, and sit in one of its lanes
    pub fn validate(&self) -> Result<(), BootError> {
        if self.us_types.is_empty() {
            return Err(BootError::NoTypes);
        }

        let mut type_ids = HashSet::new();
        for us_type in &self.us_types {
            if !type_ids.insert(us_type.id) {
                return Err(BootError::DuplicateType(us_type.id));
            }
            // Lane ids are derived from column names
            let mut names = HashSet::new();
            if let Some(column) = us_type.columns.iter().find(|c| !names.insert(c.as_str())) {
                return Err(BootError::DuplicateColumn { us_type: us_type.id, column: column.clone() });
            }
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.id) {
                return Err(BootError::DuplicateItem(item.id));
            }
            let us_type = self
                .us_types
                .iter()
                .find(|t| t.id == item.us_type)
                .ok_or(BootError::UnknownType { item: item.id, us_type: item.us_type })?;
            let len = if us_type.columns.is_empty() {
                UsType::default_columns().len()
            } else {
                us_type.columns.len()
            };
            if item.column >= len {
                return Err(BootError::ColumnOutOfRange { item: item.id, column: item.column, len });
            }
        }
        Ok(())
    }
}

/// Data for the sprint member assignment form
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentData {
    pub members: Vec<AssignableMember>,
    pub estimate: i64,
}

impl AssignmentData {
    pub fn from_json(members: &str, estimate: &str) -> Result<Self, BootError> {
        Ok(Self {
            members: parse(ASSIGNABLE_MEMBERS_ID, members)?,
            estimate: parse(US_ESTIMATION_ID, estimate)?,
        })
    }
}

fn parse<T: DeserializeOwned>(id: &str, text: &str) -> Result<T, BootError> {
    serde_json::from_str(text.trim()).map_err(|source| BootError::Json { id: id.to_string(), source })
}

/// Text content of a page element, if present
#[cfg(target_arch = "wasm32")]
pub fn element_text(id: &str) -> Option<String> {
    web_sys::window()?.document()?.get_element_by_id(id)?.text_content()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn element_text(_id: &str) -> Option<String> {
    None
}

fn required_text(id: &str) -> Result<String, BootError> {
    element_text(id).ok_or_else(|| BootError::MissingElement(id.to_string()))
}

/// Board data, or `None` when this page has no board
pub fn read_board_data() -> Option<Result<BootData, BootError>> {
    let items = element_text(USER_STORIES_ID)?;
    Some(required_text(US_TYPES_ID).and_then(|types| {
        let member = required_text(MEMBER_ID)?;
        BootData::from_json(&items, &types, &member)
    }))
}

/// Assignment form data, or `None` when this page has no such form
pub fn read_assignment_data() -> Option<Result<AssignmentData, BootError>> {
    let members = element_text(ASSIGNABLE_MEMBERS_ID)?;
    Some(required_text(US_ESTIMATION_ID).and_then(|estimate| AssignmentData::from_json(&members, &estimate)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TYPES: &str = r#"[{"id": 1, "name": "Feature", "columns": ["To Do", "Doing", "Done"]}]"#;
    const MEMBER: &str = r#"{"id": 5, "username": "dev", "roles": ["Developer"]}"#;

    #[test]
    fn parses_well_formed_page() {
        let items = r#"[
            {"id": 1, "title": "a", "us_type": 1, "column": 0, "project": 1},
            {"id": 2, "title": "b", "us_type": 1, "column": 2, "project": 1, "sprint_member": 5}
        ]"#;
        let boot = BootData::from_json(items, TYPES, MEMBER).unwrap();
        assert_eq!(boot.items.len(), 2);
        assert_eq!(boot.member.id, 5);
        assert_eq!(boot.us_types[0].columns.len(), 3);
    }

    #[test]
    fn rejects_malformed_json_naming_the_blob() {
        let err = BootData::from_json("[{", TYPES, MEMBER).unwrap_err();
        assert!(matches!(err, BootError::Json { ref id, .. } if id == USER_STORIES_ID));
    }

    #[test]
    fn rejects_column_outside_type() {
        let items = r#"[{"id": 1, "title": "a", "us_type": 1, "column": 3, "project": 1}]"#;
        let err = BootData::from_json(items, TYPES, MEMBER).unwrap_err();
        assert!(matches!(err, BootError::ColumnOutOfRange { item: 1, column: 3, len: 3 }));
    }

    #[test]
    fn rejects_unknown_type_and_duplicates() {
        let items = r#"[{"id": 1, "title": "a", "us_type": 9, "column": 0, "project": 1}]"#;
        assert!(matches!(
            BootData::from_json(items, TYPES, MEMBER),
            Err(BootError::UnknownType { item: 1, us_type: 9 })
        ));

        let items = r#"[
            {"id": 1, "title": "a", "us_type": 1, "column": 0, "project": 1},
            {"id": 1, "title": "b", "us_type": 1, "column": 1, "project": 1}
        ]"#;
        assert!(matches!(BootData::from_json(items, TYPES, MEMBER), Err(BootError::DuplicateItem(1))));
    }

    #[test]
    fn rejects_repeated_types_and_columns() {
        let types = r#"[
            {"id": 1, "name": "Feature", "columns": ["To Do", "Done"]},
            {"id": 1, "name": "Bug", "columns": ["Open"]}
        ]"#;
        assert!(matches!(BootData::from_json("[]", types, MEMBER), Err(BootError::DuplicateType(1))));

        let types = r#"[{"id": 4, "name": "Feature", "columns": ["A", "B", "A"]}]"#;
        let items = r#"[{"id": 1, "title": "a", "us_type": 4, "column": 2, "project": 1}]"#;
        let err = BootData::from_json(items, types, MEMBER).unwrap_err();
        assert!(matches!(err, BootError::DuplicateColumn { us_type: 4, ref column } if column == "A"));
        assert!(err.to_string().contains("\"A\""));
    }

    #[test]
    fn rejects_page_without_types() {
        assert!(matches!(BootData::from_json("[]", "[]", MEMBER), Err(BootError::NoTypes)));
    }

    #[test]
    fn parses_assignment_form() {
        let data = AssignmentData::from_json(
            r#"[{"id": 3, "username": "eva", "capacity": 40, "used_capacity": 10}]"#,
            " 8\n",
        )
        .unwrap();
        assert_eq!(data.estimate, 8);
        assert_eq!(data.members[0].capacity, 40);
    }
}
