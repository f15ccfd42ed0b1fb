//! Configuration for talking to the backend.

use percent_encoding::percent_decode_str;

pub const CSRF_COOKIE: &str = "csrftoken";
pub const CSRF_HEADER: &str = "X-CSRFToken";

#[derive(Debug, Clone, PartialEq)]
pub struct BoardConfig {
    /// Origin the API paths are resolved against
    pub api_base: String,
    pub csrf_cookie: String,
    pub csrf_header: String,
    pub log_level: log::LevelFilter,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:8000".to_string(),
            csrf_cookie: CSRF_COOKIE.to_string(),
            csrf_header: CSRF_HEADER.to_string(),
            log_level: log::LevelFilter::Info,
        }
    }
}

impl BoardConfig {
    /// Read the origin and debug flag from the current page.
    ///
    /// `<body data-debug>` raises the log level to debug.
    #[cfg(target_arch = "wasm32")]
    pub fn from_page() -> Self {
        let window = web_sys::window();
        let api_base = window
            .as_ref()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        let debug = window
            .and_then(|w| w.document())
            .and_then(|d| d.body())
            .map(|body| body.has_attribute("data-debug"))
            .unwrap_or(false);

        Self {
            api_base,
            log_level: if debug { log::LevelFilter::Debug } else { log::LevelFilter::Info },
            ..Self::default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_page() -> Self {
        Self::default()
    }

    pub fn user_story_url(&self, project: u32, item: u32) -> String {
        format!("{}/projects/{}/user-stories/{}/", self.api_base.trim_end_matches('/'), project, item)
    }

    /// CSRF token from the page cookies
    pub fn csrf_token(&self) -> Option<String> {
        csrf_token_from_cookies(&document_cookies()?, &self.csrf_cookie)
    }
}

/// Find `name` in a `document.cookie` style string and percent-decode its value
pub fn csrf_token_from_cookies(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| percent_decode_str(value.trim()).decode_utf8_lossy().into_owned())
        .filter(|value| !value.is_empty())
}

#[cfg(target_arch = "wasm32")]
fn document_cookies() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    document.dyn_into::<web_sys::HtmlDocument>().ok()?.cookie().ok()
}

#[cfg(not(target_arch = "wasm32"))]
fn document_cookies() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_token_among_other_cookies() {
        let cookies = "sessionid=abc; csrftoken=Tok3n ; theme=dark";
        assert_eq!(csrf_token_from_cookies(cookies, CSRF_COOKIE).as_deref(), Some("Tok3n"));
    }

    #[test]
    fn does_not_match_cookie_name_prefixes() {
        let cookies = "xcsrftoken=nope; csrftoken_old=nope";
        assert_eq!(csrf_token_from_cookies(cookies, CSRF_COOKIE), None);
    }

    #[test]
    fn decodes_percent_encoded_values() {
        assert_eq!(csrf_token_from_cookies("csrftoken=a%2Bb", CSRF_COOKIE).as_deref(), Some("a+b"));
    }

    #[test]
    fn empty_token_counts_as_missing() {
        assert_eq!(csrf_token_from_cookies("csrftoken=", CSRF_COOKIE), None);
        assert_eq!(csrf_token_from_cookies("", CSRF_COOKIE), None);
    }

    #[test]
    fn builds_user_story_url() {
        let config = BoardConfig { api_base: "https://sga.example/".into(), ..BoardConfig::default() };
        assert_eq!(config.user_story_url(3, 42), "https://sga.example/projects/3/user-stories/42/");
    }
}
