//! Movement Authorizer
//!
//! Decides whether a card may move to another lane. The rules are an ordered
//! table; the first rule that does not answer [`Outcome::Next`] decides.

use std::fmt;

use crate::models::{Member, WorkItem};

/// Why a move was refused. `Display` is the text shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    TooFarAhead,
    NotAssigned,
    NoActiveTasks,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Rejection::TooFarAhead => "cannot advance beyond the immediately next column.",
            Rejection::NotAssigned => "not assigned to this item.",
            Rejection::NoActiveTasks => "no active tasks in the current column.",
        };
        f.write_str(reason)
    }
}

/// A proposed move of `item` to lane `target` by `actor`
#[derive(Debug, Clone, Copy)]
pub struct MoveRequest<'a> {
    pub item: &'a WorkItem,
    pub actor: &'a Member,
    pub target: usize,
}

impl MoveRequest<'_> {
    pub fn is_advance(&self) -> bool {
        self.target > self.item.column
    }

    /// Indices of sub-tasks still open in the item's current lane
    pub fn enabled_tasks(&self) -> Vec<usize> {
        self.item
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.column == self.item.column && !task.disabled)
            .map(|(index, _)| index)
            .collect()
    }
}

/// Answer of a single rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Rule does not apply, ask the next one
    Next,
    /// Not a move at all
    Ignore,
    Approve,
    Reject(Rejection),
}

pub struct Rule {
    pub name: &'static str,
    pub check: fn(&MoveRequest<'_>) -> Outcome,
}

/// Evaluation order matters: the Scrum Master override sits above every
/// restriction, and the task gate only applies to owners moving forward.
pub const RULES: &[Rule] = &[
    Rule { name: "same-lane", check: same_lane },
    Rule { name: "scrum-master", check: scrum_master },
    Rule { name: "one-step-advance", check: one_step_advance },
    Rule { name: "ownership", check: ownership },
    Rule { name: "active-tasks", check: active_tasks },
];

fn same_lane(req: &MoveRequest<'_>) -> Outcome {
    if req.target == req.item.column {
        Outcome::Ignore
    } else {
        Outcome::Next
    }
}

fn scrum_master(req: &MoveRequest<'_>) -> Outcome {
    if req.actor.is_scrum_master() {
        Outcome::Approve
    } else {
        Outcome::Next
    }
}

fn one_step_advance(req: &MoveRequest<'_>) -> Outcome {
    if req.target > req.item.column + 1 {
        Outcome::Reject(Rejection::TooFarAhead)
    } else {
        Outcome::Next
    }
}

fn ownership(req: &MoveRequest<'_>) -> Outcome {
    if req.item.assigned_member != Some(req.actor.id) {
        Outcome::Reject(Rejection::NotAssigned)
    } else {
        Outcome::Next
    }
}

// The first lane is exempt: stories there have not started yet.
fn active_tasks(req: &MoveRequest<'_>) -> Outcome {
    if req.is_advance() && req.item.column != 0 && req.enabled_tasks().is_empty() {
        Outcome::Reject(Rejection::NoActiveTasks)
    } else {
        Outcome::Next
    }
}

/// Final verdict for a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Dropped back where it was; nothing to do
    Ignore,
    /// Allowed. `retired_tasks` are indices into `item.tasks` to disable.
    Approve { retired_tasks: Vec<usize> },
    Reject(Rejection),
}

impl Decision {
    pub fn is_approved(&self) -> bool {
        matches!(self, Decision::Approve { .. })
    }
}

pub fn authorize(req: &MoveRequest<'_>) -> Decision {
    let outcome = RULES
        .iter()
        .map(|rule| {
            let outcome = (rule.check)(req);
            if outcome != Outcome::Next {
                log::debug!("[RULES] item {} -> {}: {} decided {:?}", req.item.id, req.target, rule.name, outcome);
            }
            outcome
        })
        .find(|outcome| *outcome != Outcome::Next)
        .unwrap_or(Outcome::Approve);

    match outcome {
        Outcome::Ignore => Decision::Ignore,
        Outcome::Reject(reason) => Decision::Reject(reason),
        Outcome::Approve | Outcome::Next => Decision::Approve {
            retired_tasks: req.enabled_tasks(),
        },
    }
}
