//! Where the events document comes from.
//!
//! The page reads the whole collection in one request: `GET /events.json`
//! returning `{ "events": [...] }`. No paging, no auth, no retries.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Client;
use tokio::time::timeout;
use url::Url;

use crate::config::BoardConfig;
use crate::error::{EventBoardError, EventBoardResult};
use crate::event::{Event, EventsDocument};

/// Something that can produce the full event collection.
pub trait EventSource {
    fn fetch_events(&self) -> impl Future<Output = EventBoardResult<Vec<Event>>> + Send;

    /// Human-readable location, for messages.
    fn describe(&self) -> String;
}

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Reads the events document over HTTP.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: Url,
    timeout: Duration,
}

impl HttpSource {
    pub fn new(url: Url) -> Self {
        HttpSource {
            client: Client::new(),
            url,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn fetch(&self) -> EventBoardResult<Vec<Event>> {
        let response = self.client.get(self.url.clone()).send().await?;

        if !response.status().is_success() {
            return Err(EventBoardError::Status(response.status()));
        }

        let body = response.bytes().await?;
        let document: EventsDocument = serde_json::from_slice(&body)?;
        Ok(document.events)
    }
}

impl EventSource for HttpSource {
    async fn fetch_events(&self) -> EventBoardResult<Vec<Event>> {
        timeout(self.timeout, self.fetch())
            .await
            .map_err(|_| EventBoardError::Timeout(self.timeout))?
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

/// Reads the events document from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventSource for FileSource {
    async fn fetch_events(&self) -> EventBoardResult<Vec<Event>> {
        let content = tokio::fs::read(&self.path).await?;
        let document: EventsDocument = serde_json::from_slice(&content)?;
        Ok(document.events)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// The source chosen at runtime, from configuration or the command line.
#[derive(Debug, Clone)]
pub enum Source {
    Http(HttpSource),
    File(FileSource),
}

impl Source {
    /// `events_file` wins over `base_url` + `events_path`.
    pub fn from_config(config: &BoardConfig) -> EventBoardResult<Self> {
        match config.events_file() {
            Some(path) => Ok(Source::File(FileSource::new(path))),
            None => Ok(Source::Http(
                HttpSource::new(config.events_url()?).with_timeout(config.request_timeout()),
            )),
        }
    }

    /// Interpret a `--source` argument: an http(s) URL or a file path.
    pub fn from_arg(arg: &str, config: &BoardConfig) -> EventBoardResult<Self> {
        if arg.starts_with("http://") || arg.starts_with("https://") {
            let url = Url::parse(arg)
                .map_err(|e| EventBoardError::Config(format!("Invalid source URL '{arg}': {e}")))?;
            return Ok(Source::Http(
                HttpSource::new(url).with_timeout(config.request_timeout()),
            ));
        }

        let expanded = shellexpand::tilde(arg).into_owned();
        Ok(Source::File(FileSource::new(expanded)))
    }
}

impl EventSource for Source {
    async fn fetch_events(&self) -> EventBoardResult<Vec<Event>> {
        match self {
            Source::Http(source) => source.fetch_events().await,
            Source::File(source) => source.fetch_events().await,
        }
    }

    fn describe(&self) -> String {
        match self {
            Source::Http(source) => source.describe(),
            Source::File(source) => source.describe(),
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode, routing::get};
    use serde_json::json;
    use tokio::net::TcpListener;

    /// Serve `router` on an ephemeral port and return the events URL.
    pub(crate) async fn serve(router: Router) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        Url::parse(&format!("http://{addr}/events.json")).unwrap()
    }

    pub(crate) fn events_router(document: serde_json::Value) -> Router {
        Router::new().route(
            "/events.json",
            get(move || {
                let document = document.clone();
                async move { Json(document) }
            }),
        )
    }

    #[tokio::test]
    async fn http_source_reads_document() {
        let url = serve(events_router(json!({
            "events": [
                {"id": 1, "title": "Pizza bakken", "categories": [1]},
                {"id": 2, "title": "Tapas", "categories": [2, 5]}
            ]
        })))
        .await;

        let events = HttpSource::new(url).fetch_events().await.unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].title, "Tapas");
        assert_eq!(events[1].categories, vec![2, 5]);
    }

    #[tokio::test]
    async fn http_source_rejects_error_status() {
        let router = Router::new().route(
            "/events.json",
            get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let url = serve(router).await;

        let err = HttpSource::new(url).fetch_events().await.unwrap_err();
        assert!(matches!(
            err,
            EventBoardError::Status(s) if s == StatusCode::INTERNAL_SERVER_ERROR
        ));
    }

    #[tokio::test]
    async fn http_source_rejects_malformed_body() {
        let router = Router::new().route("/events.json", get(|| async { "<html>oops</html>" }));
        let url = serve(router).await;

        let err = HttpSource::new(url).fetch_events().await.unwrap_err();
        assert!(matches!(err, EventBoardError::Parse(_)));
    }

    #[tokio::test]
    async fn http_source_times_out() {
        let router = Router::new().route(
            "/events.json",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                Json(json!({"events": []}))
            }),
        );
        let url = serve(router).await;

        let err = HttpSource::new(url)
            .with_timeout(Duration::from_millis(100))
            .fetch_events()
            .await
            .unwrap_err();
        assert!(matches!(err, EventBoardError::Timeout(_)));
    }

    #[tokio::test]
    async fn file_source_reads_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, r#"{"events": [{"id": 9, "title": "Souvlaki"}]}"#).unwrap();

        let events = FileSource::new(&path).fetch_events().await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, 9);
    }

    #[tokio::test]
    async fn demo_document_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../demo/events.json");
        let events = FileSource::new(path).fetch_events().await.unwrap();
        assert_eq!(events.len(), 5);
        assert_eq!(events[1].image, None);
        assert_eq!(events[2].categories, vec![3, 1]);
    }

    #[tokio::test]
    async fn file_source_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileSource::new(dir.path().join("nope.json"))
            .fetch_events()
            .await
            .unwrap_err();
        assert!(matches!(err, EventBoardError::Io(_)));
    }

    #[test]
    fn from_arg_picks_http_or_file() {
        let config = BoardConfig::default();
        let http = Source::from_arg("https://example.com/events.json", &config).unwrap();
        assert!(matches!(http, Source::Http(_)));

        let file = Source::from_arg("./events.json", &config).unwrap();
        assert!(matches!(file, Source::File(ref f) if f.path() == Path::new("./events.json")));
    }

    #[test]
    fn from_config_prefers_events_file() {
        let config = BoardConfig {
            events_file: Some(PathBuf::from("/srv/events.json")),
            ..Default::default()
        };
        assert!(matches!(Source::from_config(&config).unwrap(), Source::File(_)));

        let config = BoardConfig::default();
        match Source::from_config(&config).unwrap() {
            Source::Http(http) => {
                assert_eq!(http.url().as_str(), "http://localhost:5173/events.json")
            }
            Source::File(_) => panic!("expected http source"),
        }
    }
}
