mod service;

pub(crate) use service::NotesService;

use crate::models::{CreateNoteRequest, Note};
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiErrorKind {
    Network,
    Http,
    Parse,
}

#[derive(Clone, Debug)]
pub(crate) struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self {
            kind: ApiErrorKind::Network,
            message: e.to_string(),
        }
    }

    pub(crate) fn parse(e: impl std::fmt::Display) -> Self {
        Self {
            kind: ApiErrorKind::Parse,
            message: e.to_string(),
        }
    }

    pub(crate) fn http(status: reqwest::StatusCode, body: String, ctx: &str) -> Self {
        // Prefer the API's own `message` over the raw body.
        let detail = serde_json::from_str::<Envelope<serde_json::Value>>(&body)
            .ok()
            .and_then(|env| env.message)
            .unwrap_or(body);
        Self {
            kind: ApiErrorKind::Http,
            message: format!("{ctx} ({status}): {detail}"),
        }
    }
}

pub(crate) type ApiResult<T> = Result<T, ApiError>;

pub(crate) const DEFAULT_API_URL: &str = "https://notes-api.dicoding.dev/v2";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        Self::from_api_url(Self::read_window_api_url())
    }

    pub(crate) fn from_api_url(api_url: Option<String>) -> Self {
        let api_url = api_url
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { api_url }
    }

    // Both `window.ENV.API_URL` and `window.ENV.api_url` are accepted; the former wins.
    fn read_window_api_url() -> Option<String> {
        let window = web_sys::window()?;
        let env = window.get("ENV")?;
        if env.is_undefined() || !env.is_object() {
            return None;
        }

        ["API_URL", "api_url"].iter().find_map(|key| {
            js_sys::Reflect::get(&env, &(*key).into())
                .ok()
                .and_then(|v| v.as_string())
        })
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Response envelope used by every endpoint: `{ status, message, data }`.
/// Only `message` and `data` are read.
#[derive(Deserialize, Clone, Debug)]
pub(crate) struct Envelope<T> {
    pub message: Option<String>,
    pub data: Option<T>,
}

/// The six operations of the remote notes API.
///
/// `ApiClient` talks HTTP; tests swap in an in-memory implementation.
pub(crate) trait NotesBackend {
    async fn list_notes(&self) -> ApiResult<Vec<Note>>;
    async fn list_archived_notes(&self) -> ApiResult<Vec<Note>>;
    async fn create_note(&self, title: &str, body: &str) -> ApiResult<Note>;
    async fn delete_note(&self, id: &str) -> ApiResult<()>;
    async fn archive_note(&self, id: &str) -> ApiResult<()>;
    async fn unarchive_note(&self, id: &str) -> ApiResult<()>;
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    pub(crate) base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(EnvConfig::new().api_url)
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `/notes/{id}` or `/notes/{id}/{action}`, with the id percent-encoded.
    pub(crate) fn note_path(id: &str, action: Option<&str>) -> String {
        let id = urlencoding::encode(id);
        match action {
            Some(action) => format!("/notes/{id}/{action}"),
            None => format!("/notes/{id}"),
        }
    }

    /// Extracts `data` from a success body.
    pub(crate) fn decode_data<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
        let env: Envelope<T> = serde_json::from_str(body).map_err(ApiError::parse)?;
        env.data
            .ok_or_else(|| ApiError::parse("response is missing `data`"))
    }

    async fn execute(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&CreateNoteRequest>,
    ) -> ApiResult<String> {
        let client = reqwest::Client::new();
        let mut req = client.request(method, self.url(path));

        if let Some(b) = body {
            req = req.json(b);
        }

        let res = req.send().await.map_err(ApiError::network)?;
        let status = res.status();
        let text = res.text().await.map_err(ApiError::network)?;

        if status.is_success() {
            Ok(text)
        } else {
            Err(ApiError::http(status, text, "Request failed"))
        }
    }

    async fn request_data<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&CreateNoteRequest>,
    ) -> ApiResult<T> {
        let text = self.execute(method, path, body).await?;
        Self::decode_data(&text)
    }
}

impl NotesBackend for ApiClient {
    async fn list_notes(&self) -> ApiResult<Vec<Note>> {
        self.request_data(reqwest::Method::GET, "/notes", None).await
    }

    async fn list_archived_notes(&self) -> ApiResult<Vec<Note>> {
        self.request_data(reqwest::Method::GET, "/notes/archived", None)
            .await
    }

    async fn create_note(&self, title: &str, body: &str) -> ApiResult<Note> {
        let req = CreateNoteRequest {
            title: title.to_string(),
            body: body.to_string(),
        };
        self.request_data(reqwest::Method::POST, "/notes", Some(&req))
            .await
    }

    async fn delete_note(&self, id: &str) -> ApiResult<()> {
        self.execute(reqwest::Method::DELETE, &Self::note_path(id, None), None)
            .await
            .map(|_| ())
    }

    async fn archive_note(&self, id: &str) -> ApiResult<()> {
        self.execute(
            reqwest::Method::POST,
            &Self::note_path(id, Some("archive")),
            None,
        )
        .await
        .map(|_| ())
    }

    async fn unarchive_note(&self, id: &str) -> ApiResult<()> {
        self.execute(
            reqwest::Method::POST,
            &Self::note_path(id, Some("unarchive")),
            None,
        )
        .await
        .map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_client_new_strips_trailing_slash() {
        let client = ApiClient::new("https://notes-api.dicoding.dev/v2/");
        assert_eq!(client.base_url, "https://notes-api.dicoding.dev/v2");
        assert_eq!(
            client.url("/notes"),
            "https://notes-api.dicoding.dev/v2/notes"
        );
    }

    #[test]
    fn test_note_paths() {
        assert_eq!(ApiClient::note_path("n1", None), "/notes/n1");
        assert_eq!(
            ApiClient::note_path("n1", Some("archive")),
            "/notes/n1/archive"
        );
        assert_eq!(
            ApiClient::note_path("n1", Some("unarchive")),
            "/notes/n1/unarchive"
        );
    }

    #[test]
    fn test_note_path_encodes_id() {
        assert_eq!(ApiClient::note_path("a/b c", None), "/notes/a%2Fb%20c");
    }

    #[test]
    fn test_env_config_defaults_and_normalizes() {
        assert_eq!(EnvConfig::from_api_url(None).api_url, DEFAULT_API_URL);
        assert_eq!(
            EnvConfig::from_api_url(Some("   ".to_string())).api_url,
            DEFAULT_API_URL
        );
        assert_eq!(
            EnvConfig::from_api_url(Some("http://localhost:5000/".to_string())).api_url,
            "http://localhost:5000"
        );
    }

    #[test]
    fn test_decode_list_envelope() {
        let body = r#"{
            "status": "success",
            "message": "Notes retrieved",
            "data": [
                {"id": "n1", "title": "Groceries", "body": "Buy milk and eggs",
                 "createdAt": "2022-07-28T10:03:12.594Z", "archived": false}
            ]
        }"#;
        let notes: Vec<Note> = ApiClient::decode_data(body).expect("should decode");
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Groceries");
    }

    #[test]
    fn test_decode_empty_list() {
        let notes: Vec<Note> =
            ApiClient::decode_data(r#"{"status":"success","data":[]}"#).expect("should decode");
        assert!(notes.is_empty());
    }

    #[test]
    fn test_decode_missing_data_is_parse_error() {
        let err = ApiClient::decode_data::<Vec<Note>>(r#"{"status":"success","message":"ok"}"#)
            .expect_err("data is required");
        assert_eq!(err.kind, ApiErrorKind::Parse);
    }

    #[test]
    fn test_decode_invalid_json_is_parse_error() {
        let err = ApiClient::decode_data::<Note>("<html>").expect_err("not json");
        assert_eq!(err.kind, ApiErrorKind::Parse);
    }

    #[test]
    fn test_http_error_prefers_api_message() {
        let err = ApiError::http(
            reqwest::StatusCode::NOT_FOUND,
            r#"{"status":"fail","message":"Note not found"}"#.to_string(),
            "Request failed",
        );
        assert_eq!(err.kind, ApiErrorKind::Http);
        assert_eq!(err.to_string(), "Request failed (404 Not Found): Note not found");
    }

    #[test]
    fn test_http_error_falls_back_to_raw_body() {
        let err = ApiError::http(
            reqwest::StatusCode::BAD_GATEWAY,
            "upstream down".to_string(),
            "Request failed",
        );
        assert!(err.to_string().ends_with("upstream down"));
    }
}
