use bookmarks_csv::{Converter, FetchError, HttpFetcher, PageFetcher, TitleResolver};
use std::fs;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn serve(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_fetch_returns_body() {
    let server = MockServer::start().await;
    serve(&server, "/b", 200, "<html><head><title>Resolved B</title></head></html>").await;

    let fetcher = HttpFetcher::new(None).unwrap();
    let body = fetcher.fetch(&format!("{}/b", server.uri())).await.unwrap();

    assert!(body.contains("<title>Resolved B</title>"));
}

#[tokio::test]
async fn test_error_status_body_is_still_parsed() {
    let server = MockServer::start().await;
    serve(&server, "/gone", 404, "<title>Page Not Found</title>").await;

    let url = format!("{}/gone", server.uri());
    let mut resolver = TitleResolver::new(HttpFetcher::new(None).unwrap());

    assert_eq!(resolver.resolve(&url).await.unwrap(), "Page Not Found");
}

#[tokio::test]
async fn test_unreachable_host() {
    // Nothing listens on port 1
    let fetcher = HttpFetcher::new(None).unwrap();
    let err = fetcher.fetch("http://127.0.0.1:1/").await.unwrap_err();

    assert!(matches!(err, FetchError::Request(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_empty_url_is_invalid() {
    let fetcher = HttpFetcher::new(None).unwrap();
    let err = fetcher.fetch("").await.unwrap_err();

    assert!(matches!(err, FetchError::InvalidUrl { .. }), "got {:?}", err);
}

#[tokio::test]
async fn test_end_to_end_over_http() {
    let server = MockServer::start().await;
    serve(&server, "/b", 200, "<html><head><title>Resolved B</title></head></html>").await;
    serve(&server, "/plain", 200, "<html><body>untitled</body></html>").await;

    let b = format!("{}/b", server.uri());
    let plain = format!("{}/plain", server.uri());

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bookmarks.html");
    let output = dir.path().join("bookmarks.csv");
    fs::write(
        &input,
        format!(
            r#"<DL><DT><A HREF="https://x.test/a">My Page</A>
               <DT><A HREF="{b}">{b}</A>
               <DT><A HREF="{plain}">{plain}</A></DL>"#
        ),
    )
    .unwrap();

    let summary = Converter::new(&input, &output).run().await.unwrap();
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.resolved, 2);

    let expected = format!(
        "\u{feff}\"Title\",\"URL\"\r\n\"My Page\",\"https://x.test/a\"\r\n\"Resolved B\",\"{b}\"\r\n\"{plain}\",\"{plain}\"\r\n"
    );
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);

    // Only the two untitled bookmarks hit the network
    assert_eq!(server.received_requests().await.unwrap().len(), 2);
}
