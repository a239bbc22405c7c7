// tests/crawl_site.rs
// =============================================================================
// End-to-end crawl of a small site served by a wiremock server.
//
// The site:
//   /     links to itself, /foo, /bar?foo=bar&this=that and another host
//   /foo  links to /?foo=bar&this=that (with a fragment) and /bar
//   /bar  links back to /foo
// Anything else is a 404.
// =============================================================================

use sitemapper::{parse_seed, CrawlConfig, CrawlError, Crawler, Page, Sitemap};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const QUERY: &str = "?foo=bar&this=that";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn expected_pages() -> Vec<Page> {
    vec![
        Page {
            path: "/".to_string(),
            links: strings(&["/bar?foo=bar&this=that", "/foo"]),
            assets: strings(&[
                "/css/doc1.css",
                "/images/doc1.jpg",
                "doc1.js",
                "http://images.com/doc1.jpg",
                "http://scripts.com/doc1.js",
            ]),
        },
        Page {
            path: "/foo".to_string(),
            links: strings(&["/?foo=bar&this=that", "/bar"]),
            assets: strings(&["/doc2/doc2.js", "/images/doc2.jpg", "doc2.css", "doc2.js"]),
        },
        Page {
            path: "/bar".to_string(),
            links: strings(&["/foo"]),
            assets: strings(&["/images/doc3.jpg", "doc3.css", "doc3.js"]),
        },
    ]
}

fn doc1() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>doc1</title>
    <link rel="stylesheet" href="/css/doc1.css">
    <script src="http://scripts.com/doc1.js"></script>
    <script src="doc1.js"></script>
  </head>
  <body>
    <a href="/">SELF</a>
    <a href="/bar{QUERY}">BAR</a>
    <div><a href="/foo">FOO</a></div>
    <a href="http://fake.com/users">FAKE</a>
    <img src="/images/doc1.jpg">
    <img src="http://images.com/doc1.jpg">
  </body>
</html>"#
    )
}

fn doc2() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <title>doc2</title>
    <link rel="stylesheet" href="doc2.css">
    <script src="/doc2/doc2.js"></script>
    <script src="doc2.js"></script>
  </head>
  <body>
    <a href="/{QUERY}#test">HOME</a>
    <div><div><a href="/bar">BAR</a></div></div>
    <img src="/images/doc2.jpg">
  </body>
</html>"#
    )
}

fn doc3() -> String {
    r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <title>doc3</title>
    <link rel="stylesheet" href="doc3.css">
    <script src="doc3.js"></script>
  </head>
  <body>
    <a href="/foo">FOO</a>
    <img src="/images/doc3.jpg">
  </body>
</html>"#
        .to_string()
}

async fn mock_site() -> MockServer {
    let server = MockServer::start().await;
    for (route, body) in [("/", doc1()), ("/foo", doc2()), ("/bar", doc3())] {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(&server)
            .await;
    }
    server
}

fn assert_page(sitemap: &Sitemap, expected: &Page) {
    let actual = sitemap
        .page(&expected.path)
        .unwrap_or_else(|| panic!("no page for {} in {:#?}", expected.path, sitemap));
    assert_eq!(actual.links, expected.links, "links of {}", expected.path);
    assert_eq!(actual.assets, expected.assets, "assets of {}", expected.path);
}

#[tokio::test]
async fn crawls_mock_site() {
    let server = mock_site().await;
    let seed = parse_seed(&format!("{}/", server.uri())).unwrap();

    let sitemap = Crawler::new(CrawlConfig::default())
        .unwrap()
        .crawl(&seed)
        .await
        .unwrap();

    assert_eq!(sitemap.url, seed.to_string());
    assert_eq!(sitemap.pages[0].path, "/");
    for expected in expected_pages() {
        assert_page(&sitemap, &expected);
    }

    // "/" and "/?foo=bar&this=that" are distinct request targets, as are
    // "/bar" and "/bar?foo=bar&this=that", so five fetches in total
    assert_eq!(sitemap.len(), 5);
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 5);
}

#[tokio::test]
async fn renders_crawled_site() {
    let server = mock_site().await;
    let seed = parse_seed(&format!("{}/", server.uri())).unwrap();

    let sitemap = sitemapper::crawl(&seed).await.unwrap();
    let text = sitemap.to_string();

    assert!(text.starts_with(&format!("Site map for {}/\nPath: \n\t/\n\tLinks:\n", server.uri())));
    assert!(text.contains("\t\t/bar?foo=bar&this=that\n"));
    assert!(!text.contains("fake.com"));
}

#[test]
fn rejects_seed_without_host_or_path() {
    assert!(matches!(
        parse_seed("/test/users"),
        Err(CrawlError::MissingHost(_))
    ));
    assert!(matches!(
        parse_seed("http://test.com"),
        Err(CrawlError::MissingPath(_))
    ));
}

#[tokio::test]
async fn not_found_pages_are_still_crawled() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<a href="/missing">missing</a><a href="/ok">ok</a>"#),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<p>ok</p>"))
        .mount(&server)
        .await;

    let seed = parse_seed(&format!("{}/", server.uri())).unwrap();
    let sitemap = sitemapper::crawl(&seed).await.unwrap();

    // a 404 body is still content, so /missing becomes an (empty) page
    let mut paths: Vec<&str> = sitemap.pages.iter().map(|p| p.path.as_str()).collect();
    paths.sort();
    assert_eq!(paths, vec!["/", "/missing", "/ok"]);
}
