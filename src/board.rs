//! Board Controller
//!
//! Owns everything the board page knows: the stories, their types, the member
//! looking at the board and the type currently displayed. Drops and type
//! switches go through here so the store and the rendered lanes never disagree.

use crate::boot::BootData;
use crate::columns::{ColumnModel, Lane};
use crate::error::{BoardError, BootError};
use crate::items::WorkItemStore;
use crate::models::{Member, UsType};
use crate::rules::{authorize, Decision, MoveRequest, Rejection};

/// What the renderer has to do after a drop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Dropped on its own lane
    Ignored,
    /// Store updated; the new column must be sent to the backend
    Moved { item: u32, column: usize },
    /// Refused; the card goes back and the reason is shown
    Rejected { item: u32, reason: Rejection },
    /// The drop referenced something the board does not know about
    Aborted { item: u32, error: BoardError },
}

impl DropOutcome {
    /// Story and column to send to the backend; only accepted moves are sent
    pub fn persist_request(&self) -> Option<(u32, usize)> {
        match self {
            DropOutcome::Moved { item, column } => Some((*item, *column)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    store: WorkItemStore,
    types: Vec<UsType>,
    actor: Member,
    active: ColumnModel,
}

impl Board {
    pub fn new(boot: BootData) -> Result<Self, BootError> {
        boot.validate()?;
        let first = boot.us_types.first().ok_or(BootError::NoTypes)?;
        let active = ColumnModel::new(first);
        Ok(Self {
            store: WorkItemStore::new(boot.items),
            types: boot.us_types,
            actor: boot.member,
            active,
        })
    }

    pub fn store(&self) -> &WorkItemStore {
        &self.store
    }

    pub fn types(&self) -> &[UsType] {
        &self.types
    }

    pub fn actor(&self) -> &Member {
        &self.actor
    }

    pub fn active_type(&self) -> u32 {
        self.active.us_type()
    }

    pub fn columns(&self) -> &ColumnModel {
        &self.active
    }

    /// Lanes of the active type, rebuilt from the store
    pub fn lanes(&self) -> Vec<Lane> {
        self.active.lanes(&self.store)
    }

    /// Replace the displayed lanes with those of another type
    pub fn select_type(&mut self, us_type: u32) -> Result<Vec<Lane>, BoardError> {
        let selected = self
            .types
            .iter()
            .find(|t| t.id == us_type)
            .ok_or(BoardError::UnknownType(us_type))?;
        log::info!("[BOARD] switching to type {} ({})", selected.id, selected.name);
        self.active = ColumnModel::new(selected);
        Ok(self.lanes())
    }

    /// Handle a drop identified by lane id (`board-<column name>`)
    pub fn drop_on_lane_id(&mut self, item: u32, lane_id: &str) -> DropOutcome {
        match self.active.index_of_lane_id(lane_id) {
            Some(target) => self.drop_item(item, target),
            None => DropOutcome::Aborted {
                item,
                error: BoardError::UnknownLane(lane_id.to_string()),
            },
        }
    }

    /// Handle a card released over lane `target` of the active type
    pub fn drop_item(&mut self, item: u32, target: usize) -> DropOutcome {
        let decision = match self.check_drop(item, target) {
            Ok(decision) => decision,
            Err(error) => {
                log::error!("[BOARD] drop of {} on lane {} aborted: {}", item, target, error);
                return DropOutcome::Aborted { item, error };
            }
        };

        match decision {
            Decision::Ignore => DropOutcome::Ignored,
            Decision::Reject(reason) => {
                log::debug!("[BOARD] drop of {} on lane {} rejected: {}", item, target, reason);
                DropOutcome::Rejected { item, reason }
            }
            Decision::Approve { retired_tasks } => {
                if !self.store.advance(item, target, &retired_tasks) {
                    return DropOutcome::Aborted { item, error: BoardError::UnknownItem(item) };
                }
                log::info!(
                    "[BOARD] story {} moved to {}",
                    item,
                    self.active.name_of(target).unwrap_or_default()
                );
                DropOutcome::Moved { item, column: target }
            }
        }
    }

    fn check_drop(&self, item: u32, target: usize) -> Result<Decision, BoardError> {
        let work_item = self.store.get(item).ok_or(BoardError::UnknownItem(item))?;
        if work_item.us_type != self.active.us_type() {
            return Err(BoardError::WrongBoard { item });
        }
        if target >= self.active.len() {
            return Err(BoardError::UnknownLane(target.to_string()));
        }
        Ok(authorize(&MoveRequest { item: work_item, actor: &self.actor, target }))
    }
}
