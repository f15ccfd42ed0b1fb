//! Error types for page boot, board consistency and the backend API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BootError {
    #[error("page element #{0} not found")]
    MissingElement(String),
    #[error("invalid JSON in #{id}: {source}")]
    Json {
        id: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("no user story types on the page")]
    NoTypes,
    #[error("user story type {0} appears more than once")]
    DuplicateType(u32),
    #[error("user story type {us_type} lists column {column:?} more than once")]
    DuplicateColumn { us_type: u32, column: String },
    #[error("user story {item} references unknown type {us_type}")]
    UnknownType { item: u32, us_type: u32 },
    #[error("user story {item} is in column {column} but its type has {len} columns")]
    ColumnOutOfRange { item: u32, column: usize, len: usize },
    #[error("user story {0} appears more than once")]
    DuplicateItem(u32),
}

/// Internal-consistency failures while handling a drop.
/// The move is aborted and the card goes back to its lane.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("user story {0} is not on the board")]
    UnknownItem(u32),
    #[error("lane {0} does not exist")]
    UnknownLane(String),
    #[error("user story type {0} does not exist")]
    UnknownType(u32),
    #[error("user story {item} does not belong to the active board")]
    WrongBoard { item: u32 },
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("csrf cookie is not set")]
    MissingCsrfToken,
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("server answered {status}: {body}")]
    Status { status: u16, body: String },
    #[error("response is not JSON: {0}")]
    Decode(#[source] reqwest::Error),
}
