//! Backend API
//!
//! HTTP bindings to the Django endpoints the board writes to, organized by resource.

mod user_story;

pub use user_story::*;

/// Shared HTTP client. On wasm32 this is a thin wrapper over `fetch`.
fn client() -> reqwest::Client {
    reqwest::Client::new()
}
