use robot_order_submit::services::OrderFetcher;
use robot_order_submit::AppError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_fetch_overwrites_existing_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orders.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("fresh"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("orders.csv");
    std::fs::write(&dest, "stale content that is longer").unwrap();

    let written = OrderFetcher::new()
        .fetch(&format!("{}/orders.csv", server.uri()), &dest)
        .await
        .unwrap();

    assert_eq!(written, 5);
    assert_eq!(std::fs::read_to_string(&dest).unwrap(), "fresh");
}

#[tokio::test]
async fn test_fetch_creates_missing_parent_dir() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("a,b\n"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("nested").join("orders.csv");

    OrderFetcher::new()
        .fetch(&format!("{}/orders.csv", server.uri()), &dest)
        .await
        .unwrap();

    assert!(dest.exists());
}

#[tokio::test]
async fn test_fetch_error_status_is_network_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let dest = dir.path().join("orders.csv");

    let err = OrderFetcher::new()
        .fetch(&format!("{}/orders.csv", server.uri()), &dest)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Network { .. }));
    assert!(!dest.exists());
}
