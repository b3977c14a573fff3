//! Gateway over the HTTP transport against a mock posts API.

use std::time::Duration;

use postview::{Gateway, HttpTransport};
use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gateway_for(base: &str) -> Gateway {
    let base = Url::parse(base).expect("mock server url");
    Gateway::new(HttpTransport::new(base, Duration::from_secs(5)).expect("transport"))
}

#[tokio::test]
async fn test_fetch_employees() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "Leanne Graham", "username": "Bret",
             "company": {"name": "Romaguera-Crona", "catchPhrase": "Multi-layered"}}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let employees = gateway_for(&server.uri()).fetch_employees().await.unwrap();
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].name, "Leanne Graham");
    assert_eq!(employees[0].company.catch_phrase, "Multi-layered");
}

#[tokio::test]
async fn test_fetch_posts_sends_user_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("userId", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "userId": 3, "title": "T", "body": "B"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let posts = gateway_for(&server.uri())
        .fetch_employee_posts(3)
        .await
        .unwrap();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].user_id, 3);
}

#[tokio::test]
async fn test_fetch_comments_sends_post_filter() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/comments"))
        .and(query_param("postId", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"postId": 10, "id": 1, "name": "X", "body": "Y", "email": "z@e.com"}
        ])))
        .mount(&server)
        .await;

    let comments = gateway_for(&server.uri())
        .fetch_post_comments(10)
        .await
        .unwrap();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].email, "z@e.com");
}

#[tokio::test]
async fn test_server_error_becomes_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(gateway_for(&server.uri()).fetch_employee(2).await.is_none());
}

#[tokio::test]
async fn test_malformed_payload_becomes_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    assert!(gateway_for(&server.uri()).fetch_employees().await.is_none());
}

#[tokio::test]
async fn test_zero_id_skips_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let gateway = gateway_for(&server.uri());
    assert!(gateway.fetch_employee_posts(0).await.is_none());
    assert!(gateway.fetch_employee(0).await.is_none());
    assert!(gateway.fetch_post_comments(0).await.is_none());
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 4, "name": "Patricia",
            "company": {"name": "Robel-Corkery", "catchPhrase": "Multi-tiered"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let employee = gateway_for(&format!("{}/api/v1/", server.uri()))
        .fetch_employee(4)
        .await
        .unwrap();
    assert_eq!(employee.name, "Patricia");
}

#[tokio::test]
async fn test_unreachable_server_becomes_none() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    assert!(gateway_for(&uri).fetch_employees().await.is_none());
}
