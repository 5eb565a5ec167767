//! # Generic OAuth 2.0 Client
//!
//! 특정 프로바이더에 종속되지 않는 OAuth 2.0 클라이언트 기능을 제공합니다.
//! 프로바이더 어댑터는 이 클라이언트를 상속하지 않고 필드로 보유하며,
//! 테넌트별 엔드포인트 URL 과 필드 매핑만 직접 구현합니다.
//!
//! ## 제공 기능
//!
//! - 스코프 목록 관리 (교체, 병합, 중복 제거)
//! - 인증 URL 쿼리 구성 (`client_id`, `redirect_uri`, `scope`, `response_type`, `state`)
//! - CSRF state 발급/검증 ([`StateStore`] 위임)
//! - HTTP 전송 ([`HttpTransport`] 위임)

use std::sync::Arc;

use crate::services::oauth::state_store::StateStore;
use crate::services::oauth::transport::HttpTransport;

/// 스코프 입력
///
/// 단일 문자열과 문자열 목록을 모두 받을 수 있도록 정규화합니다.
#[derive(Debug, Clone, PartialEq)]
pub struct ScopeInput(Vec<String>);

impl ScopeInput {
    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl From<&str> for ScopeInput {
    fn from(scope: &str) -> Self {
        Self(vec![scope.to_string()])
    }
}

impl From<String> for ScopeInput {
    fn from(scope: String) -> Self {
        Self(vec![scope])
    }
}

impl From<Vec<String>> for ScopeInput {
    fn from(scopes: Vec<String>) -> Self {
        Self(scopes)
    }
}

impl From<Vec<&str>> for ScopeInput {
    fn from(scopes: Vec<&str>) -> Self {
        Self(scopes.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for ScopeInput {
    fn from(scopes: &[&str]) -> Self {
        Self(scopes.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ScopeInput {
    fn from(scopes: [&str; N]) -> Self {
        Self(scopes.iter().map(|s| s.to_string()).collect())
    }
}

/// 첫 등장 순서를 유지하며 중복을 제거합니다.
fn unique_in_order(scopes: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for scope in scopes {
        if !unique.contains(&scope) {
            unique.push(scope);
        }
    }
    unique
}

/// 프로바이더 공통 OAuth 2.0 클라이언트
pub struct OAuthClient {
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    scopes: Vec<String>,
    scope_separator: String,
    parameters: Vec<(String, String)>,
    stateless: bool,
    transport: Arc<dyn HttpTransport>,
    state_store: Arc<dyn StateStore>,
}

impl OAuthClient {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        state_store: Arc<dyn StateStore>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            scopes: Vec::new(),
            scope_separator: " ".to_string(),
            parameters: Vec::new(),
            stateless: false,
            transport,
            state_store,
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    pub fn transport(&self) -> &dyn HttpTransport {
        self.transport.as_ref()
    }

    pub fn scope_separator(&self) -> &str {
        &self.scope_separator
    }

    pub fn set_scope_separator(&mut self, separator: impl Into<String>) {
        self.scope_separator = separator.into();
    }

    /// 현재 스코프 목록
    pub fn get_scopes(&self) -> &[String] {
        &self.scopes
    }

    /// 스코프 목록을 교체합니다. 중복은 첫 등장만 남깁니다.
    pub fn set_scopes(&mut self, scopes: impl Into<ScopeInput>) {
        self.scopes = unique_in_order(scopes.into().into_vec());
    }

    /// 기존 스코프에 새 스코프를 병합합니다.
    pub fn merge_scopes(&mut self, scopes: impl Into<ScopeInput>) {
        let existing = std::mem::take(&mut self.scopes);
        self.scopes = unique_in_order(existing.into_iter().chain(scopes.into().into_vec()));
    }

    /// 인증 URL 에 추가할 파라미터를 지정합니다.
    pub fn set_parameters<K: Into<String>, V: Into<String>>(
        &mut self,
        parameters: impl IntoIterator<Item = (K, V)>,
    ) {
        self.parameters = parameters
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
    }

    /// state 검증을 끕니다.
    pub fn set_stateless(&mut self) {
        self.stateless = true;
    }

    /// 스코프 목록을 구분자로 연결합니다.
    pub fn format_scopes(&self) -> String {
        self.scopes.join(&self.scope_separator)
    }

    /// 인증 요청 쿼리 필드
    ///
    /// 순서: `client_id`, `redirect_uri`, `scope`, `response_type`, `state`(있으면), 추가 파라미터
    pub fn code_fields(&self, state: Option<&str>) -> Vec<(String, String)> {
        let mut fields = vec![
            ("client_id".to_string(), self.client_id.clone()),
            ("redirect_uri".to_string(), self.redirect_uri.clone()),
            ("scope".to_string(), self.format_scopes()),
            ("response_type".to_string(), "code".to_string()),
        ];

        if let Some(state) = state {
            fields.push(("state".to_string(), state.to_string()));
        }

        fields.extend(self.parameters.iter().cloned());
        fields
    }

    /// 기본 URL 에 인증 요청 쿼리를 붙입니다.
    pub fn build_auth_url_from_base(&self, base_url: &str, state: Option<&str>) -> String {
        let query_string = self
            .code_fields(state)
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        format!("{}?{}", base_url, query_string)
    }

    /// 새 state 를 발급합니다. stateless 모드에서는 `None` 입니다.
    pub fn issue_state(&self) -> Option<String> {
        if self.stateless {
            None
        } else {
            Some(self.state_store.issue())
        }
    }

    /// 콜백의 state 가 유효하지 않은지 확인합니다.
    ///
    /// stateless 모드에서는 항상 `false` 입니다. 유효한 state 는 이 호출로 폐기됩니다.
    pub fn has_invalid_state(&self, state: Option<&str>) -> bool {
        if self.stateless {
            return false;
        }

        match state {
            Some(state) if !state.is_empty() => !self.state_store.consume(state),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::errors::OAuthError;
    use crate::services::oauth::state_store::InMemoryStateStore;
    use crate::services::oauth::transport::{HttpRequest, HttpResponse};
    use async_trait::async_trait;

    struct NoopTransport;

    #[async_trait]
    impl HttpTransport for NoopTransport {
        async fn send(&self, _request: HttpRequest) -> Result<HttpResponse, OAuthError> {
            Ok(HttpResponse::new(200, "{}"))
        }
    }

    fn client() -> OAuthClient {
        OAuthClient::new(
            "client id",
            "secret",
            "https://app.example.org/callback",
            Arc::new(NoopTransport),
            Arc::new(InMemoryStateStore::default()),
        )
    }

    #[test]
    fn test_set_scopes_replaces_and_deduplicates() {
        let mut client = client();
        client.set_scopes(vec!["email", "openid", "email"]);
        assert_eq!(client.get_scopes(), ["email", "openid"]);

        client.set_scopes("profile");
        assert_eq!(client.get_scopes(), ["profile"]);
    }

    #[test]
    fn test_merge_scopes_keeps_existing_order() {
        let mut client = client();
        client.set_scopes(["openid", "email"]);
        client.merge_scopes(["profile", "openid"]);

        assert_eq!(client.get_scopes(), ["openid", "email", "profile"]);
        assert_eq!(client.format_scopes(), "openid email profile");
    }

    #[test]
    fn test_build_auth_url_encodes_parameters() {
        let mut client = client();
        client.set_scopes(["openid", "email"]);

        let url = client.build_auth_url_from_base("https://www.example.org/oauth/authorize", Some("xyz"));

        assert_eq!(
            url,
            "https://www.example.org/oauth/authorize?client_id=client%20id\
             &redirect_uri=https%3A%2F%2Fapp.example.org%2Fcallback\
             &scope=openid%20email&response_type=code&state=xyz"
        );
    }

    #[test]
    fn test_extra_parameters_are_appended() {
        let mut client = client();
        client.set_parameters([("prompt", "login")]);

        let url = client.build_auth_url_from_base("https://www.example.org/oauth/authorize", None);

        assert!(url.ends_with("&response_type=code&prompt=login"));
        assert!(!url.contains("state="));
    }

    #[test]
    fn test_state_round_trip() {
        let client = client();
        let state = client.issue_state().unwrap();

        assert!(client.has_invalid_state(Some("forged")));
        assert!(client.has_invalid_state(None));
        assert!(client.has_invalid_state(Some("")));
        assert!(!client.has_invalid_state(Some(&state)));
        assert!(client.has_invalid_state(Some(&state)));
    }

    #[test]
    fn test_stateless_skips_state() {
        let mut client = client();
        client.set_stateless();

        assert_eq!(client.issue_state(), None);
        assert!(!client.has_invalid_state(None));
    }
}
