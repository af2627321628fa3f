mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::{listing, multipart_body, router_for, UploadNotOf, UploadOf, BOUNDARY};
use serde_json::json;
use tower::util::ServiceExt;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn session_cookie(response: &axum::response::Response) -> Option<String> {
    response
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(str::to_string)
}

async fn mount_listing(server: &MockServer, documents: &[(&str, &str)]) {
    Mock::given(method("GET"))
        .and(path("/v1/uploaded"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing(documents)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn health_check_works() {
    let server = MockServer::start().await;
    let app = router_for(&server);

    let response = app.oneshot(get("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
    assert_eq!(body_text(response).await, "OK");
}

#[tokio::test]
async fn index_shows_placeholder_for_empty_listing() {
    let server = MockServer::start().await;
    mount_listing(&server, &[]).await;

    let response = router_for(&server).oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("No documents available."));
    assert!(!body.contains("<table>"));
}

#[tokio::test]
async fn index_renders_table_rows() {
    let server = MockServer::start().await;
    mount_listing(&server, &[("ch_1", "quarterly <draft>.txt")]).await;

    let response = router_for(&server).oneshot(get("/")).await.unwrap();
    let body = body_text(response).await;

    assert!(body.contains("<table>"));
    assert!(body.contains("ch_1"));
    assert!(body.contains("quarterly &lt;draft&gt;.txt"));
    assert!(body.contains("1.50 KB"));
    assert!(body.contains("11/14/2023<br>22:13"));
    assert!(body.contains("name=\"doc_id\" value=\"ch_1\""));
}

#[tokio::test]
async fn index_with_malformed_listing_shows_placeholder_and_notice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/uploaded"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let response = router_for(&server).oneshot(get("/")).await.unwrap();
    let body = body_text(response).await;

    assert!(body.contains("No documents available."));
    assert!(body.contains("could not be read"));
}

#[tokio::test]
async fn csv_download_refreshes_and_attaches_file() {
    let server = MockServer::start().await;
    mount_listing(&server, &[("ch_1", "He said \"hi\"")]).await;

    let response = router_for(&server)
        .oneshot(get("/documents.csv"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"documents.csv\""
    );
    let body = body_text(response).await;
    assert!(body.starts_with("ID,Name,Type,Size,State,Created At\r\n"));
    assert!(body.contains("ch_1,\"He said \"\"hi\"\"\",text/plain,1.50 KB,INDEX_BUILT,11/14/2023 22:13\r\n"));
}

#[tokio::test]
async fn csv_download_of_empty_listing_redirects() {
    let server = MockServer::start().await;
    mount_listing(&server, &[]).await;

    let response = router_for(&server)
        .oneshot(get("/documents.csv"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn identifier_list_follows_store_order() {
    let server = MockServer::start().await;
    mount_listing(&server, &[("ch_2", "b"), ("ch_1", "a")]).await;
    let app = router_for(&server);

    // The listing is loaded by the page render
    app.clone().oneshot(get("/")).await.unwrap();
    let response = app.oneshot(get("/documents/ids")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ch_2\nch_1");
}

#[tokio::test]
async fn identifier_list_of_empty_store_is_not_found() {
    let server = MockServer::start().await;

    let response = router_for(&server)
        .oneshot(get("/documents/ids"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_text(response).await, "No documents available to copy.");
}

fn delete_form(doc_id: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/documents/delete")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(format!("doc_id={}", doc_id)))
        .unwrap()
}

fn get_with_cookie(uri: &str, cookie: String) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap()
}

async fn listing_calls(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|r| r.url.path() == "/v1/uploaded")
        .count()
}

#[tokio::test]
async fn delete_form_calls_api_and_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/sources/delete"))
        .and(body_json(json!({ "sources": ["ch 1/x"] })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let response = router_for(&server)
        .oneshot(delete_form("ch+1%2Fx"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn page_after_delete_shows_local_removal_without_refetch() {
    let server = MockServer::start().await;
    // The remote listing keeps returning the deleted record
    mount_listing(&server, &[("ch_1", "a.txt"), ("ch_2", "b.txt")]).await;
    Mock::given(method("POST"))
        .and(path("/v1/sources/delete"))
        .and(body_json(json!({ "sources": ["ch_2"] })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    let app = router_for(&server);

    let first = body_text(app.clone().oneshot(get("/")).await.unwrap()).await;
    assert!(first.contains("ch_2"));

    let deleted = app.clone().oneshot(delete_form("ch_2")).await.unwrap();
    assert_eq!(deleted.status(), StatusCode::SEE_OTHER);
    let cookie = session_cookie(&deleted).expect("delete should start a session");

    let page = app.oneshot(get_with_cookie("/", cookie)).await.unwrap();
    let body = body_text(page).await;

    assert!(body.contains("ch_1"));
    assert!(!body.contains("ch_2"));
    assert_eq!(listing_calls(&server).await, 1);
}

#[tokio::test]
async fn page_after_failed_delete_keeps_store_and_shows_notice() {
    let server = MockServer::start().await;
    mount_listing(&server, &[("ch_1", "a.txt")]).await;
    Mock::given(method("POST"))
        .and(path("/v1/sources/delete"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let app = router_for(&server);

    app.clone().oneshot(get("/")).await.unwrap();
    let deleted = app.clone().oneshot(delete_form("ch_1")).await.unwrap();
    let cookie = session_cookie(&deleted).expect("delete should start a session");

    let page = app.oneshot(get_with_cookie("/", cookie)).await.unwrap();
    let body = body_text(page).await;

    assert!(body.contains("ch_1"));
    assert_eq!(body.matches("Failed to delete the document").count(), 1);
    assert_eq!(listing_calls(&server).await, 1);
}

#[tokio::test]
async fn upload_with_failing_listing_refreshes_once_and_notifies_once() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/sources/add-file"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/uploaded"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let app = router_for(&server);

    let upload = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/upload")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", BOUNDARY),
                )
                .body(Body::from(multipart_body(&[("one.txt", "1"), ("two.txt", "2")])))
                .unwrap(),
        )
        .await
        .unwrap();
    let cookie = session_cookie(&upload).expect("upload should start a session");

    let page = app.oneshot(get_with_cookie("/", cookie)).await.unwrap();
    let body = body_text(page).await;

    assert_eq!(body.matches("Failed to load the document list").count(), 1);
    assert!(!body.contains("Some or all files failed to upload"));
    assert_eq!(listing_calls(&server).await, 1);
}

#[tokio::test]
async fn partial_batch_failure_shows_one_notice() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/sources/add-file"))
        .and(UploadOf("two.txt"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/sources/add-file"))
        .and(UploadNotOf("two.txt"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;
    mount_listing(&server, &[("ch_1", "one.txt"), ("ch_3", "three.txt")]).await;
    let app = router_for(&server);

    let upload = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/upload")
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={}", BOUNDARY),
                )
                .body(Body::from(multipart_body(&[
                    ("one.txt", "1"),
                    ("two.txt", "2"),
                    ("three.txt", "3"),
                ])))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(upload.status(), StatusCode::SEE_OTHER);
    let cookie = session_cookie(&upload).expect("notice should start a session");

    let page = app.oneshot(get_with_cookie("/", cookie)).await.unwrap();
    let body = body_text(page).await;

    assert_eq!(body.matches("Some or all files failed to upload").count(), 1);
    assert!(body.contains("ch_1"));
    assert!(body.contains("ch_3"));
}

#[tokio::test]
async fn clipboard_denial_becomes_notice() {
    let server = MockServer::start().await;
    mount_listing(&server, &[]).await;
    let app = router_for(&server);

    let reported = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/notices/clipboard-denied")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(reported.status(), StatusCode::NO_CONTENT);
    let cookie = session_cookie(&reported).expect("notice should start a session");

    let page = app.oneshot(get_with_cookie("/", cookie)).await.unwrap();

    assert!(body_text(page).await.contains("Clipboard access may be restricted"));
}
