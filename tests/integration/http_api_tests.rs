//! The HTTP surface end to end through the real transport

use crate::common::{COMPLETIONS_PATH, gateway_config, mount_completion};
use actix_web::http::StatusCode;
use actix_web::{test, web};
use party_prompt_gateway::core::upstream::ReqwestTransport;
use party_prompt_gateway::server::{AppState, HttpServer};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn app_state(server: &MockServer, requests_per_minute: u32) -> web::Data<AppState> {
    let transport = ReqwestTransport::new(Duration::from_secs(5)).expect("failed to build client");
    web::Data::new(AppState::from_config(
        gateway_config(server, requests_per_minute),
        Arc::new(transport),
    ))
}

#[actix_web::test]
async fn test_generate_truth_through_upstream() {
    let upstream = MockServer::start().await;
    mount_completion(&upstream, "What's your most embarrassing work moment?").await;

    let app = test::init_service(HttpServer::create_app(app_state(&upstream, 60))).await;
    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(json!({ "mode": "truth", "scene": "office party" }))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        body,
        json!({
            "success": true,
            "question": "What's your most embarrassing work moment?",
            "mode": "truth",
            "scene": "office party"
        })
    );

    let received = upstream.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    let sent: Value = serde_json::from_slice(&received[0].body).unwrap();
    assert!(
        sent["messages"][0]["content"]
            .as_str()
            .unwrap()
            .contains("office party")
    );
}

#[actix_web::test]
async fn test_upstream_error_is_reported() {
    let upstream = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": { "message": "The server is overloaded" }
        })))
        .mount(&upstream)
        .await;

    let app = test::init_service(HttpServer::create_app(app_state(&upstream, 60))).await;
    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(json!({ "mode": "dare" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert!(
        body["error"]
            .as_str()
            .unwrap()
            .contains("The server is overloaded")
    );
}

#[actix_web::test]
async fn test_quota_is_shared_across_requests() {
    let upstream = MockServer::start().await;
    mount_completion(&upstream, "Sing the chorus of your favourite song").await;

    let app = test::init_service(HttpServer::create_app(app_state(&upstream, 3))).await;

    let mut statuses = Vec::new();
    for _ in 0..5 {
        let req = test::TestRequest::post()
            .uri("/generate")
            .set_json(json!({ "mode": "dare" }))
            .to_request();
        statuses.push(test::call_service(&app, req).await.status());
    }

    assert_eq!(
        statuses,
        vec![
            StatusCode::OK,
            StatusCode::OK,
            StatusCode::OK,
            StatusCode::TOO_MANY_REQUESTS,
            StatusCode::TOO_MANY_REQUESTS,
        ]
    );
    assert_eq!(upstream.received_requests().await.unwrap().len(), 3);
}
