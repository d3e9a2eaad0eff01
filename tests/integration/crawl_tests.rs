//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full fetch-and-follow cycle end-to-end over real HTTP.

use ai_compliance::config::{Config, CrawlerConfig, OutputConfig, UserAgentConfig};
use ai_compliance::crawler::{build_http_client, crawl, fetch_url, FetchError};
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with no politeness delay
fn create_test_config(max_pages: usize) -> Config {
    Config {
        crawler: CrawlerConfig {
            max_pages,
            request_timeout: 2,
            politeness_delay: 0,
            max_links_per_page: 5,
        },
        user_agent: UserAgentConfig {
            crawler_name: "TestBot".to_string(),
            crawler_version: "1.0.0".to_string(),
            contact_url: "https://example.com/contact".to_string(),
            contact_email: "test@example.com".to_string(),
        },
        output: OutputConfig {
            report_dir: ".".to_string(),
        },
    }
}

/// Mounts an HTML page that must be requested exactly `times` times
async fn mount_page(server: &MockServer, route: &str, body: String, times: u64) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(times)
        .mount(server)
        .await;
}

fn start_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/", server.uri())).expect("Failed to parse mock server URL")
}

fn paths(pages: &[ai_compliance::CrawledPage]) -> Vec<String> {
    pages.iter().map(|page| page.url.path().to_string()).collect()
}

#[tokio::test]
async fn test_full_crawl_single_domain() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Absolute and relative links to the same site
    mount_page(
        &mock_server,
        "/",
        format!(
            r#"<html><head><title>Home</title></head><body>
            <a href="{}/page1">Page 1</a>
            <a href="page2">Page 2</a>
            </body></html>"#,
            base_url
        ),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/page1",
        "<html><body>Content 1</body></html>".to_string(),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/page2",
        "<html><body>Content 2</body></html>".to_string(),
        1,
    )
    .await;

    let pages = crawl(&create_test_config(5), &start_url(&mock_server))
        .await
        .expect("Crawl should succeed");

    assert_eq!(paths(&pages), vec!["/", "/page1", "/page2"]);
    assert!(pages.iter().all(|page| page.status_code == 200));
    assert!(pages.iter().all(|page| page.elapsed.is_some()));
}

#[tokio::test]
async fn test_crawl_respects_page_budget() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/a">A</a><a href="/b">B</a><a href="/c">C</a>"#.to_string(),
        1,
    )
    .await;
    mount_page(&mock_server, "/a", "a".to_string(), 1).await;
    mount_page(&mock_server, "/b", "b".to_string(), 0).await;
    mount_page(&mock_server, "/c", "c".to_string(), 0).await;

    let pages = crawl(&create_test_config(2), &start_url(&mock_server))
        .await
        .expect("Crawl should succeed");

    assert_eq!(paths(&pages), vec!["/", "/a"]);
}

#[tokio::test]
async fn test_crawl_ignores_external_links() {
    let mock_server = MockServer::start().await;
    let external_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        format!(
            r#"<a href="{}/elsewhere">Other site</a><a href="/local">Local</a>"#,
            external_server.uri()
        ),
        1,
    )
    .await;
    mount_page(&mock_server, "/local", "local".to_string(), 1).await;
    mount_page(&external_server, "/elsewhere", "external".to_string(), 0).await;

    let pages = crawl(&create_test_config(5), &start_url(&mock_server))
        .await
        .expect("Crawl should succeed");

    assert_eq!(paths(&pages), vec!["/", "/local"]);
}

#[tokio::test]
async fn test_crawl_fetches_each_url_once() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/a">A</a><a href="/a">A</a><a href="/">Home</a>"#.to_string(),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "/a",
        r#"<a href="/">Home</a><a href="/a">Self</a>"#.to_string(),
        1,
    )
    .await;

    let pages = crawl(&create_test_config(10), &start_url(&mock_server))
        .await
        .expect("Crawl should succeed");

    assert_eq!(pages.len(), 2);
}

#[tokio::test]
async fn test_crawl_fetches_fragment_variants_once() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r##"<a href="/a#intro">Intro</a><a href="/a#usage">Usage</a><a href="/a">A</a>"##
            .to_string(),
        1,
    )
    .await;
    mount_page(&mock_server, "/a", "a".to_string(), 1).await;

    let pages = crawl(&create_test_config(10), &start_url(&mock_server))
        .await
        .expect("Crawl should succeed");

    assert_eq!(paths(&pages), vec!["/", "/a"]);
    assert!(pages.iter().all(|page| page.url.fragment().is_none()));
}

#[tokio::test]
async fn test_crawl_drops_error_statuses() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/missing">Missing</a><a href="/broken">Broken</a><a href="/ok">OK</a>"#
            .to_string(),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/ok", "ok".to_string(), 1).await;

    let pages = crawl(&create_test_config(5), &start_url(&mock_server))
        .await
        .expect("Crawl should succeed");

    assert_eq!(paths(&pages), vec!["/", "/ok"]);
}

#[tokio::test]
async fn test_crawl_survives_slow_pages() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<a href="/slow">Slow</a><a href="/fast">Fast</a>"#.to_string(),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("slow")
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;
    mount_page(&mock_server, "/fast", "fast".to_string(), 1).await;

    let mut config = create_test_config(5);
    config.crawler.request_timeout = 1;

    let pages = crawl(&config, &start_url(&mock_server))
        .await
        .expect("Crawl should succeed");

    assert_eq!(paths(&pages), vec!["/", "/fast"]);
}

#[tokio::test]
async fn test_crawl_unreachable_start_returns_nothing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let pages = crawl(&create_test_config(5), &start_url(&mock_server))
        .await
        .expect("Crawl should succeed");

    assert!(pages.is_empty());
}

#[tokio::test]
async fn test_fetch_sends_user_agent() {
    let mock_server = MockServer::start().await;
    let config = create_test_config(1);

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header(
            "user-agent",
            "TestBot/1.0.0 (+https://example.com/contact; test@example.com)",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string("hello"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = build_http_client(&config).expect("Failed to build client");
    let response = fetch_url(&client, &start_url(&mock_server))
        .await
        .expect("Fetch should succeed");

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "hello");
    assert!(response.elapsed.is_some());
}

#[tokio::test]
async fn test_fetch_reports_timeout() {
    let mock_server = MockServer::start().await;
    let mut config = create_test_config(1);
    config.crawler.request_timeout = 1;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&config).expect("Failed to build client");
    let result = fetch_url(&client, &start_url(&mock_server)).await;

    assert!(matches!(result, Err(FetchError::Timeout { .. })));
}

#[tokio::test]
async fn test_fetch_follows_redirects() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/old"))
        .respond_with(ResponseTemplate::new(301).insert_header("location", "/new"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("moved"))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&create_test_config(1)).expect("Failed to build client");
    let url = start_url(&mock_server).join("/old").unwrap();
    let response = fetch_url(&client, &url).await.expect("Fetch should succeed");

    assert_eq!(response.status, 200);
    assert_eq!(response.final_url.path(), "/new");
    assert_eq!(response.body, "moved");
}
