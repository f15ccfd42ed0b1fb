//! User Story Endpoints

use serde::Serialize;
use serde_json::Value;

use super::client;
use crate::config::BoardConfig;
use crate::error::ApiError;

#[derive(Debug, Serialize, PartialEq)]
pub struct ColumnUpdate {
    pub column: usize,
}

/// `PUT /projects/{project}/user-stories/{item}/` with the new column.
///
/// Returns the JSON the server answered with.
pub async fn update_column(config: &BoardConfig, project: u32, item: u32, column: usize) -> Result<Value, ApiError> {
    let token = config.csrf_token().ok_or(ApiError::MissingCsrfToken)?;
    let url = config.user_story_url(project, item);
    log::debug!("[API] PUT {} column={}", url, column);

    let response = client()
        .put(&url)
        .header(config.csrf_header.as_str(), token)
        .json(&ColumnUpdate { column })
        .send()
        .await
        .map_err(ApiError::Transport)?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { status: status.as_u16(), body });
    }
    response.json::<Value>().await.map_err(ApiError::Decode)
}

/// Send the new column without waiting for the answer.
///
/// Failures are only logged: the card stays where the user put it and a
/// page reload shows what the server actually stored.
pub fn persist_column(config: BoardConfig, project: u32, item: u32, column: usize) {
    leptos::task::spawn_local(async move {
        let result = update_column(&config, project, item, column).await;
        report_persist(item, column, &result);
    });
}

pub fn report_persist(item: u32, column: usize, result: &Result<Value, ApiError>) {
    match result {
        Ok(data) => log::info!("[API] story {} saved in column {}: {}", item, column, data),
        Err(e) => log::error!("[API] story {} column {} not saved: {}", item, column, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_update_body_is_just_the_index() {
        let body = serde_json::to_value(ColumnUpdate { column: 2 }).unwrap();
        assert_eq!(body, serde_json::json!({ "column": 2 }));
    }

    #[test]
    fn missing_csrf_cookie_fails_before_any_request() {
        // Native builds have no document, so there is never a cookie to read.
        let config = BoardConfig::default();
        let result = futures::executor::block_on(update_column(&config, 1, 1, 1));
        assert!(matches!(result, Err(ApiError::MissingCsrfToken)));
    }
}
