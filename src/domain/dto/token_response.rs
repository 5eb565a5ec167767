//! 토큰 교환 응답 DTO
//!
//! `POST {domain}/oauth/token` 응답을 표현합니다.
//! Congressus 는 `expires_in` 대신 절대 만료 시각 `expires_at` 을 반환합니다.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::utils::string_utils::deserialize_optional_string;
use crate::utils::time_utils::deserialize_utc_timestamp;

/// Congressus 토큰 엔드포인트 응답
///
/// 하나의 인가 코드 교환 동안에만 존재하는 일시적인 구조체입니다.
///
/// ```json
/// {
///   "access_token": "tok1",
///   "refresh_token": "ref1",
///   "expires_at": "2026-10-18T12:00:00Z",
///   "scope": "openid email"
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// 액세스 토큰
    pub access_token: String,

    /// 리프레시 토큰 (선택사항)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub refresh_token: Option<String>,

    /// 토큰 만료 시각 (UTC)
    #[serde(deserialize_with = "deserialize_utc_timestamp")]
    pub expires_at: DateTime<Utc>,

    /// 승인된 스코프 (공백 구분)
    #[serde(default)]
    pub scope: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_deserialize_full_token_response() {
        let json = r#"{
            "access_token": "tok1",
            "refresh_token": "ref1",
            "expires_at": "2026-10-18T12:00:00Z",
            "scope": "openid email",
            "token_type": "Bearer"
        }"#;

        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "tok1");
        assert_eq!(token.refresh_token.as_deref(), Some("ref1"));
        assert_eq!(token.expires_at, Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap());
        assert_eq!(token.scope.as_deref(), Some("openid email"));
    }

    #[test]
    fn test_optional_fields_may_be_absent() {
        let json = r#"{"access_token": "tok1", "expires_at": "2026-10-18T12:00:00Z"}"#;

        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.refresh_token, None);
        assert_eq!(token.scope, None);
    }

    #[test]
    fn test_missing_required_fields_fail() {
        assert!(serde_json::from_str::<TokenResponse>(r#"{"expires_at": "2026-10-18T12:00:00Z"}"#).is_err());
        assert!(serde_json::from_str::<TokenResponse>(r#"{"access_token": "tok1"}"#).is_err());
    }

    #[test]
    fn test_unparseable_expires_at_fails() {
        let json = r#"{"access_token": "tok1", "expires_at": "next week"}"#;

        assert!(serde_json::from_str::<TokenResponse>(json).is_err());
    }
}
