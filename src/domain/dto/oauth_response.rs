//! OAuth 로그인 응답 DTO

use serde::Serialize;

/// OAuth 로그인 URL 응답
///
/// 클라이언트가 OAuth 로그인을 시작할 때 제공되는 응답입니다.
/// Congressus 인증 페이지로의 URL과 CSRF 방지용 state 값을 포함합니다.
#[derive(Debug, Clone, Serialize)]
pub struct OAuthLoginUrlResponse {
    /// Congressus 인증 페이지 전체 URL
    pub login_url: String,

    /// CSRF 방지용 state 파라미터
    ///
    /// stateless 모드에서는 발급되지 않습니다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}
