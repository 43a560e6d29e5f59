//! Corpus and config loading, and how the widget behaves when loading fails.

use crate::common::{Widget, FIXTURE_INDEX};
use fastsearch::{
    load, CorpusSource, LoadError, MemoryView, SearchController, WidgetConfig, DEFAULT_INDEX_URL,
};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;
use url::Url;

/// Answer one HTTP request on a local port with a canned response.
/// Returns the corpus URL to fetch.
fn serve_once(status: &'static str, body: &'static str) -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request: Vec<u8> = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        write!(
            stream,
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        )
        .unwrap();
    });
    Url::parse(&format!("http://{}/index.json", addr)).unwrap()
}

#[tokio::test]
async fn test_load_fixture_from_path() {
    let source = CorpusSource::resolve(FIXTURE_INDEX, None).unwrap();
    let corpus = load(&source).await.unwrap();

    assert_eq!(corpus.len(), 5);
    let about = &corpus[4];
    assert_eq!(about.title, "About");
    assert_eq!(about.summary, "");
    assert_eq!(about.content, "");
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let source = CorpusSource::resolve("fixtures/does-not-exist.json", None).unwrap();
    assert!(matches!(load(&source).await, Err(LoadError::Io(_))));
}

#[tokio::test]
async fn test_malformed_corpus_is_parse_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"[{\"title\": ").unwrap();

    let source = CorpusSource::Path(file.path().to_path_buf());
    assert!(matches!(load(&source).await, Err(LoadError::Parse(_))));
}

#[tokio::test]
async fn test_failed_load_leaves_widget_empty() {
    let mut widget: Widget = SearchController::new(MemoryView::new());
    let source = CorpusSource::resolve("fixtures/does-not-exist.json", None).unwrap();
    if let Ok(corpus) = load(&source).await {
        widget.init(corpus, None);
    }

    assert!(!widget.is_ready());
    assert!(widget.on_input("rust").is_empty());
    assert!(widget.view().entries.is_empty());
}

#[tokio::test]
async fn test_http_not_found_keeps_body() {
    let url = serve_once("404 Not Found", "nope");
    match load(&CorpusSource::Url(url)).await {
        Err(LoadError::Status { status, body }) => {
            assert_eq!(status, 404);
            assert_eq!(body, "nope");
        }
        other => panic!("expected a status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_http_garbage_is_parse_error() {
    let url = serve_once("200 OK", "<html>not a corpus</html>");
    assert!(matches!(
        load(&CorpusSource::Url(url)).await,
        Err(LoadError::Parse(_))
    ));
}

#[tokio::test]
async fn test_http_refused_is_transport_error() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let url = Url::parse(&format!("http://{}/index.json", addr)).unwrap();
    assert!(matches!(
        load(&CorpusSource::Url(url)).await,
        Err(LoadError::Transport(_))
    ));
}

#[tokio::test]
async fn test_http_corpus_makes_widget_ready() {
    let url = serve_once(
        "200 OK",
        r#"[{"title": "Served", "permalink": "/served/", "content": "fetched over http"}]"#,
    );
    let corpus = load(&CorpusSource::Url(url)).await.unwrap();
    assert_eq!(corpus.len(), 1);

    let mut widget: Widget = SearchController::new(MemoryView::new());
    widget.init(corpus, None);
    assert!(widget.is_ready());
    assert_eq!(widget.on_input("over http").len(), 1);
    assert_eq!(widget.view().titles(), vec!["Served"]);
}

#[test]
fn test_default_location_resolves_against_page() {
    let page = Url::parse("https://blog.example.com/search/").unwrap();
    let source = CorpusSource::resolve(DEFAULT_INDEX_URL, Some(&page)).unwrap();
    assert_eq!(
        source,
        CorpusSource::Url(Url::parse("https://blog.example.com/index.json").unwrap())
    );
}

#[test]
fn test_page_params_json() {
    let config = WidgetConfig::from_json(
        r#"{"fuseopts": {"threshold": 0.2, "keys": ["title"], "includematches": true}}"#,
    )
    .unwrap();
    let options = config.match_options();

    assert_eq!(config.index_url, DEFAULT_INDEX_URL);
    assert_eq!(options.threshold, 0.2);
    assert_eq!(options.keys, vec!["title"]);
    assert!(options.include_matches);
    // Unset fields fall back per field, not to the strict preset
    assert!(options.should_sort);
}

#[test]
fn test_page_without_params_is_strict() {
    let config = WidgetConfig::from_json("{}").unwrap();
    let options = config.match_options();
    assert_eq!(options.threshold, 0.0);
    assert_eq!(options.keys, vec!["content"]);
}

#[cfg(feature = "toml")]
#[test]
fn test_site_config_drives_widget() {
    use crate::common::{load_fixture, strict_widget, FIXTURE_SITE_CONFIG};

    let config = WidgetConfig::load(std::path::Path::new(FIXTURE_SITE_CONFIG)).unwrap();
    let options = config.match_options();
    assert_eq!(options.threshold, 0.4);
    assert_eq!(options.keys.len(), 4);
    assert!(options.include_matches);

    let mut widget: Widget = SearchController::new(MemoryView::new());
    widget.init(load_fixture(), config.fuse_opts.as_ref());
    let mut strict = strict_widget(load_fixture());

    // The fuzzy site config finds the typo, the strict default does not
    assert!(!widget.on_input("photgraphy").is_empty());
    assert!(strict.on_input("photgraphy").is_empty());
}
