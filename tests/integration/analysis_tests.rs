//! Integration tests for the complete analysis pipeline
//!
//! A wiremock server plays the target website; the analyzer crawls it over
//! real HTTP, scores it and the resulting report is checked end-to-end.

use ai_compliance::config::{Config, CrawlerConfig};
use ai_compliance::report::{save_report, MAINTENANCE_ACTIONS};
use ai_compliance::{Analyzer, AnalyzerError, Category, ComplianceTier};
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
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
        ..Config::default()
    }
}

/// A page that scores full marks on every page-level signal
fn rich_page(links: &str) -> String {
    let paragraphs: String = (0..6)
        .map(|_| format!("<p>{}</p>", vec!["insight"; 200].join(" ")))
        .collect();
    format!(
        r#"<html><head>
        <title>Complete guide to the product</title>
        <meta name="description" content="Everything you need">
        <meta name="viewport" content="width=device-width, initial-scale=1">
        <script type="application/ld+json">{{"@type":"Article"}}</script>
        </head><body>
        <header><nav>{links}</nav></header>
        <main><article>
        <h1>Guide</h1><h2>Setup</h2><h2>Usage</h2><h3>Tips</h3><h3>More</h3>
        <div class="byline">Jane Doe</div><time datetime="2025-01-01">Jan 1</time>
        <p>Quick start. What does it do?</p>
        <p>Here's how: you can follow these steps.</p>
        {paragraphs}
        <p>About us and our certification.</p>
        </article></main>
        <footer></footer>
        </body></html>"#
    )
}

/// A bare page with no signals at all
fn bare_page(links: &str) -> String {
    format!("<html><body><div>Catalogue {links}</div></body></html>")
}

async fn mount_html(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_well_optimized_site_is_excellent() {
    let mock_server = MockServer::start().await;

    // The start page is fetched once by the crawl and once by the mobile probe
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(rich_page(
            r#"<a href="/guide">Guide</a><a href="/faq">FAQ</a>"#,
        )))
        .expect(2)
        .mount(&mock_server)
        .await;
    mount_html(&mock_server, "/guide", rich_page("")).await;
    mount_html(&mock_server, "/faq", rich_page("")).await;

    let analyzer = Analyzer::from_config(create_test_config(5)).expect("Failed to build analyzer");
    let report = analyzer
        .analyze(&mock_server.uri())
        .await
        .expect("Analysis should succeed");

    let score = |category| report.category(category).map(|result| result.score);
    assert_eq!(score(Category::ContentQuality), Some(60));
    // Plain HTTP loses the SSL points
    assert_eq!(score(Category::TechnicalPerformance), Some(40));
    assert_eq!(score(Category::SemanticStructure), Some(35));
    assert_eq!(score(Category::AiReadiness), Some(30));
    assert_eq!(score(Category::EatFactors), Some(20));
    assert_eq!(score(Category::MobileAiOptimization), Some(15));

    // 200 / 250 lands exactly on the EXCELLENT boundary
    assert_eq!(report.overall_score_percent, 80.0);
    assert_eq!(report.compliance_tier, ComplianceTier::Excellent);
    assert_eq!(report.priority_actions, MAINTENANCE_ACTIONS.to_vec());
}

#[tokio::test]
async fn test_bare_site_is_poor_with_five_actions() {
    let mock_server = MockServer::start().await;

    mount_html(
        &mock_server,
        "/",
        bare_page(r#"<a href="/index.php?id=1">One</a><a href="/list.html">Two</a>"#),
    )
    .await;
    mount_html(&mock_server, "/index.php", bare_page("")).await;
    mount_html(&mock_server, "/list.html", bare_page("")).await;

    let analyzer = Analyzer::from_config(create_test_config(5)).expect("Failed to build analyzer");
    let report = analyzer
        .analyze(&mock_server.uri())
        .await
        .expect("Analysis should succeed");

    assert_eq!(report.compliance_tier, ComplianceTier::Poor);
    assert_eq!(report.priority_actions.len(), 5);
    assert_eq!(
        report.priority_actions[0],
        Category::ContentQuality.remediation()
    );
    assert!(report.overall_score_percent < 40.0);

    let technical = report.category(Category::TechnicalPerformance).unwrap();
    assert_eq!(technical.detail("clean_urls"), Some(3));
    assert_eq!(technical.detail("mobile_friendly"), Some(5));
}

#[tokio::test]
async fn test_failed_mobile_probe_scores_zero() {
    let mock_server = MockServer::start().await;

    // First request (the crawl) is answered, the probe then times out
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(rich_page("")))
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(rich_page(""))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&mock_server)
        .await;

    let mut config = create_test_config(1);
    config.crawler.request_timeout = 1;

    let analyzer = Analyzer::from_config(config).expect("Failed to build analyzer");
    let report = analyzer
        .analyze(&mock_server.uri())
        .await
        .expect("Analysis should succeed despite the probe failure");

    let mobile = report.category(Category::MobileAiOptimization).unwrap();
    assert_eq!(mobile.score, 0);
    assert_eq!(mobile.max_score, 15);
    assert_eq!(report.category(Category::ContentQuality).unwrap().score, 60);
}

#[tokio::test]
async fn test_unreachable_site_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let analyzer = Analyzer::from_config(create_test_config(5)).expect("Failed to build analyzer");
    let result = analyzer.analyze(&mock_server.uri()).await;

    assert!(matches!(result, Err(AnalyzerError::NoPagesCrawled { .. })));
}

#[tokio::test]
async fn test_saved_report_field_names() {
    let mock_server = MockServer::start().await;
    mount_html(&mock_server, "/", rich_page("")).await;

    let analyzer = Analyzer::from_config(create_test_config(1)).expect("Failed to build analyzer");
    let report = analyzer
        .analyze(&mock_server.uri())
        .await
        .expect("Analysis should succeed");

    let dir = TempDir::new().unwrap();
    let path = save_report(&report, dir.path()).expect("Failed to save report");

    let file_name = path.file_name().unwrap().to_string_lossy().to_string();
    assert!(file_name.starts_with("ai_compliance_report_127.0.0.1_"));
    assert!(file_name.ends_with(".json"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    for field in [
        "url",
        "analysisTimestamp",
        "overallScorePercent",
        "complianceTier",
        "recommendation",
        "categoryResults",
        "priorityActions",
        "rubricVersion",
    ] {
        assert!(json.get(field).is_some(), "missing field {}", field);
    }

    let categories = json["categoryResults"].as_object().unwrap();
    let keys: Vec<&str> = categories.keys().map(String::as_str).collect();
    for category in Category::ALL {
        assert!(keys.contains(&category.key()));
    }
    assert_eq!(
        json["categoryResults"]["content_quality"]["details"]["keyword_optimization"],
        0
    );
    assert_eq!(
        json["categoryResults"]["semantic_structure"]["structuredDataPages"],
        1
    );
}
