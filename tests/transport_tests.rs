//! reqwest 전송 계층 테스트
//!
//! wiremock 서버를 상대로 실제 HTTP 요청의 헤더, 인증, 폼 본문을 검증합니다.

use std::time::Duration;

use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use congressus_oauth::config::HttpConfig;
use congressus_oauth::errors::OAuthError;
use congressus_oauth::services::oauth::{HttpRequest, HttpTransport, ReqwestTransport};

fn transport() -> ReqwestTransport {
    ReqwestTransport::new(&HttpConfig::default()).unwrap()
}

#[tokio::test]
async fn test_token_request_is_sent_as_basic_auth_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(header("authorization", "Basic aWQ6c2VjcmV0"))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("grant_type=authorization_code"))
        .and(body_string_contains("client_id=id"))
        .and(body_string_contains("client_secret=secret"))
        .and(body_string_contains("code=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"access_token":"tok1"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = HttpRequest::post(format!("{}/oauth/token", mock_server.uri()))
        .header("Accept", "application/json")
        .basic_auth("id", "secret")
        .form([
            ("grant_type", "authorization_code"),
            ("client_id", "id"),
            ("client_secret", "secret"),
            ("code", "abc123"),
        ]);

    let response = transport().send(request).await.unwrap();

    assert_eq!(response.status, 200);
    assert!(response.body.contains("tok1"));
}

#[tokio::test]
async fn test_user_info_request_uses_bearer_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/oauth/userinfo"))
        .and(header("authorization", "Bearer tok1"))
        .and(header("accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"user_id":"42","username":"jdoe"}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let request = HttpRequest::get(format!("{}/oauth/userinfo", mock_server.uri())).bearer_auth("tok1");

    let response = transport().send(request).await.unwrap();

    assert_eq!(response.status, 200);
    assert!(response.body.contains("jdoe"));
}

#[tokio::test]
async fn test_non_success_status_is_returned_untouched() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>boom</html>"))
        .mount(&mock_server)
        .await;

    let request = HttpRequest::post(format!("{}/oauth/token", mock_server.uri()));

    let response = transport().send(request).await.unwrap();

    assert_eq!(response.status, 500);
    assert!(!response.is_success());
    assert_eq!(response.body, "<html>boom</html>");
}

#[tokio::test]
async fn test_timeout_is_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/oauth/userinfo"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
        .mount(&mock_server)
        .await;

    let config = HttpConfig {
        request_timeout: Duration::from_millis(50),
        connect_timeout: Duration::from_millis(50),
    };
    let transport = ReqwestTransport::new(&config).unwrap();
    let request = HttpRequest::get(format!("{}/oauth/userinfo", mock_server.uri()));

    let result = transport.send(request).await;

    assert!(matches!(result, Err(OAuthError::Transport(_))));
}
