//! Library API integration tests
use std::time::Duration;

use seolens_core::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

fn read_fixture(name: &str) -> String {
    std::fs::read_to_string(get_fixture_path(name)).unwrap()
}

async fn serve_html(html: String) -> MockServer {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(html, "text/html"))
        .mount(&mock_server)
        .await;

    mock_server
}

#[test]
fn test_analyze_fixture() {
    let report = analyze(&read_fixture("seo_page.html"));

    assert_eq!(report.title, "Trail Running Shoes | Example Outfitters");
    assert_eq!(report.meta_description, "Hand-picked trail running shoes, reviewed and compared.");
    assert_eq!(report.meta_keywords, "running, shoes, trail");
    assert_eq!(report.canonical, "https://shoes.example.com/trail");
    assert_eq!(report.viewport, "width=device-width, initial-scale=1");
    assert_eq!(report.h1, "Best Trail Running Shoes");
    assert_eq!(report.images_without_alt, 2);
    assert!(report.keywords.starts_with("trail, shoes, running"));
    assert!(!report.keywords.contains("datalayer"));
}

#[test]
fn test_short_words_yield_no_keywords() {
    let report = analyze(&read_fixture("bare_page.html"));
    assert_eq!(report.keywords, "No keywords extracted");
    assert_eq!(report.title, "No title found");
}

#[test]
fn test_keyword_ordering() {
    let report = analyze(&read_fixture("keywords.html"));
    assert_eq!(report.keywords, "testing, keyword");
}

#[tokio::test]
async fn test_crawl_success() {
    let mock_server = serve_html(read_fixture("seo_page.html")).await;

    let outcome = crawl_website(&format!("{}/page", mock_server.uri())).await;
    let report = outcome.report().expect("crawl should succeed");

    assert_eq!(report.h1, "Best Trail Running Shoes");
    assert_eq!(outcome.to_json().unwrap()["status"], "success");
}

#[tokio::test]
async fn test_crawl_sends_user_agent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ua"))
        .and(header("user-agent", "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<title>UA ok</title>", "text/html"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let outcome = crawl_website(&format!("{}/ua", mock_server.uri())).await;
    assert_eq!(outcome.report().map(|r| r.title.as_str()), Some("UA ok"));
}

#[tokio::test]
async fn test_crawl_not_found_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let analyzer = Analyzer::new();
    let url = format!("{}/missing", mock_server.uri());

    let err = analyzer.fetch_and_analyze(&url).await.unwrap_err();
    assert!(matches!(err, SeoLensError::HttpStatus { status: 404, .. }));

    let json = analyzer.crawl(&url).await.to_json().unwrap();
    assert_eq!(json["status"], "error");
    assert!(json["message"].as_str().unwrap().contains("404"));
    assert!(json.get("title").is_none());
}

#[tokio::test]
async fn test_crawl_timeout_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<title>Too late</title>", "text/html")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let analyzer = Analyzer::with_config(AnalyzerConfig::builder().timeout(1).build());
    let outcome = analyzer.crawl(&format!("{}/slow", mock_server.uri())).await;

    let json = outcome.to_json().unwrap();
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Request timed out after 1 seconds");
    assert!(json.get("h1").is_none());
}

#[tokio::test]
async fn test_unreachable_page_is_error() {
    let mock_server = MockServer::start().await;
    let url = format!("{}/gone", mock_server.uri());
    drop(mock_server);

    let outcome = crawl_website(&url).await;
    match outcome {
        CrawlOutcome::Error { message } => assert!(!message.is_empty()),
        CrawlOutcome::Success(_) => panic!("expected error outcome"),
    }
}

#[tokio::test]
async fn test_fetch_robots() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_string("User-agent: *\nDisallow: /private\n"))
        .mount(&mock_server)
        .await;

    let robots = fetch_robots(&format!("{}/deep/page", mock_server.uri()), &FetchConfig::default()).await;
    assert!(robots.contains("Disallow: /private"));
}

#[tokio::test]
async fn test_fetch_robots_missing() {
    let mock_server = MockServer::start().await;

    let robots = fetch_robots(&mock_server.uri(), &FetchConfig::default()).await;
    assert_eq!(robots, "Not found or inaccessible");
}

#[tokio::test]
async fn test_repeated_crawls_are_identical() {
    let mock_server = serve_html(read_fixture("seo_page.html")).await;
    let url = format!("{}/page", mock_server.uri());
    let analyzer = Analyzer::new();

    let first = analyzer.crawl(&url).await;
    let second = analyzer.crawl(&url).await;
    assert_eq!(first, second);
}
