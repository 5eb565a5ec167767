//! # HTTP Transport
//!
//! 토큰 교환과 사용자 정보 조회에 쓰이는 아웃바운드 HTTP 전송 계층입니다.
//! 어댑터는 [`HttpTransport`] trait 에만 의존하며, 실제 구현은 `reqwest` 기반의
//! [`ReqwestTransport`] 입니다.
//!
//! 전송 계층은 상태 코드를 해석하지 않습니다. non-2xx 판단과 JSON 디코딩은
//! 어댑터가 담당합니다.

use async_trait::async_trait;
use reqwest::header::ACCEPT;

use crate::config::HttpConfig;
use crate::errors::errors::OAuthError;

/// HTTP 메서드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// 전송 계층에 전달되는 요청
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    /// 추가 헤더 (이름, 값)
    pub headers: Vec<(String, String)>,
    /// HTTP Basic 인증 (사용자, 비밀번호)
    pub basic_auth: Option<(String, String)>,
    /// Bearer 토큰
    pub bearer_token: Option<String>,
    /// `application/x-www-form-urlencoded` 본문
    pub form: Vec<(String, String)>,
}

impl HttpRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, url)
    }

    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            basic_auth: None,
            bearer_token: None,
            form: Vec::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some((username.into(), password.into()));
        self
    }

    pub fn bearer_auth(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    pub fn form<K: Into<String>, V: Into<String>>(
        mut self,
        fields: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        self.form = fields.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// 헤더 값 조회 (대소문자 무시)
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// 폼 필드 값 조회
    pub fn form_value(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// 전송 계층이 반환하는 원시 응답
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// 아웃바운드 HTTP 전송 추상화
///
/// 요청 하나를 보내고 상태 코드와 본문을 그대로 돌려줍니다.
/// 연결 실패나 타임아웃만 `OAuthError::Transport` 로 반환합니다.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, OAuthError>;
}

/// `reqwest` 기반 전송 계층
///
/// 클라이언트는 생성 시 한 번 만들어 재사용하며, [`HttpConfig`] 의 타임아웃을 적용합니다.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(config: &HttpConfig) -> Result<Self, OAuthError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| OAuthError::Configuration(format!("HTTP 클라이언트 생성 실패: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, OAuthError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(&request.url),
            HttpMethod::Post => self.client.post(&request.url),
        };

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if request.header_value(ACCEPT.as_str()).is_none() {
            builder = builder.header(ACCEPT, "application/json");
        }
        if let Some((username, password)) = &request.basic_auth {
            builder = builder.basic_auth(username, Some(password));
        }
        if let Some(token) = &request.bearer_token {
            builder = builder.bearer_auth(token);
        }
        if !request.form.is_empty() {
            builder = builder.form(&request.form);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| OAuthError::Transport(format!("{} 요청 실패: {}", request.url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| OAuthError::Transport(format!("{} 응답 본문 읽기 실패: {}", request.url, e)))?;

        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let request = HttpRequest::post("https://www.example.org/oauth/token")
            .header("Accept", "application/json")
            .basic_auth("id", "secret")
            .form([("grant_type", "authorization_code"), ("code", "abc")]);

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.header_value("accept"), Some("application/json"));
        assert_eq!(request.basic_auth, Some(("id".to_string(), "secret".to_string())));
        assert_eq!(request.form_value("code"), Some("abc"));
        assert_eq!(request.form_value("missing"), None);
    }

    #[test]
    fn test_response_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(199, "").is_success());
        assert!(!HttpResponse::new(302, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }
}
