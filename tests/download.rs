use aoc_workbench::{config::Config, download, PuzzleId};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(root: &TempDir, base_url: &str, session: Option<&str>) -> Config {
    Config {
        root: root.path().to_path_buf(),
        session: session.map(str::to_string),
        base_url: base_url.to_string(),
        verbose: false,
    }
}

async fn mount_page(server: &MockServer, url_path: &str, cookie: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(url_path))
        .and(header("cookie", cookie))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn input_is_saved_with_session_cookie() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/2024/day/5/input",
        "session=abc123",
        ResponseTemplate::new(200).set_body_string("1,2,3\n"),
    )
    .await;

    let root = TempDir::new().unwrap();
    let id = PuzzleId::new(2024, 5).unwrap();
    let config = config(&root, &server.uri(), Some("abc123"));
    let path = tokio::task::spawn_blocking(move || download::download_input(&config, id))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(path, id.input_path(root.path()));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "1,2,3\n");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn puzzle_is_converted_to_markdown() {
    let server = MockServer::start().await;
    let html = "<main><article><h2>--- Day 9: Test ---</h2><p>Hello <em>there</em>.</p></article></main>";
    mount_page(
        &server,
        "/2025/day/9",
        "session=xyz",
        ResponseTemplate::new(200).set_body_string(html),
    )
    .await;

    let root = TempDir::new().unwrap();
    let id = PuzzleId::new(2025, 9).unwrap();
    let config = config(&root, &server.uri(), Some("session=xyz"));
    let path = tokio::task::spawn_blocking(move || download::download_puzzle(&config, id))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        std::fs::read_to_string(path).unwrap(),
        "## Day 9: Test\n\nHello *there*."
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn error_status_fails_without_writing() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/2024/day/1/input",
        "session=abc",
        ResponseTemplate::new(404).set_body_string("missing"),
    )
    .await;

    let root = TempDir::new().unwrap();
    let id = PuzzleId::new(2024, 1).unwrap();
    let config = config(&root, &server.uri(), Some("abc"));
    let err = tokio::task::spawn_blocking(move || download::download_input(&config, id))
        .await
        .unwrap()
        .unwrap_err();

    assert_eq!(err.to_string(), "Fetching input for 2024 day 01 failed: 404.");
    assert!(!id.input_path(root.path()).exists());
}

#[test]
fn missing_session_fails_before_request() {
    let root = TempDir::new().unwrap();
    let id = PuzzleId::new(2024, 1).unwrap();

    let err = download::download_puzzle(&config(&root, "http://127.0.0.1:9", None), id).unwrap_err();
    assert!(err.to_string().starts_with("No session cookie given"));
}

#[test]
fn day_url_has_no_zero_padding() {
    let config = Config {
        base_url: "https://example.com".to_string(),
        ..Config::default()
    };
    let id = PuzzleId::new(2015, 3).unwrap();
    assert_eq!(download::day_url(&config, id), "https://example.com/2015/day/3");
}
