//! # Congressus 사용자 정보 모델
//!
//! `GET {domain}/oauth/userinfo` 응답을 역직렬화하기 위한 모델입니다.

use serde::{Deserialize, Serialize};

use crate::utils::string_utils::{deserialize_optional_string, deserialize_string_or_number};

/// Congressus UserInfo 응답 구조체
///
/// ## 필드
///
/// | 필드 | 필수 | 설명 |
/// |------|------|------|
/// | `user_id` | O | Congressus 회원 ID (문자열 또는 숫자) |
/// | `username` | O | 로그인 사용자명 |
/// | `name` | X | 표시 이름 |
/// | `email` | X | 이메일 주소 (`email` 스코프) |
/// | `picture` | X | 프로필 사진 URL |
///
/// 선택 필드가 비어 있으면 `None` 으로 처리합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    /// Congressus 사용자 고유 ID
    #[serde(deserialize_with = "deserialize_string_or_number")]
    pub user_id: String,

    /// 사용자명
    pub username: String,

    /// 이름
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub name: Option<String>,

    /// 이메일 주소
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub email: Option<String>,

    /// 프로필 사진 URL
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub picture: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_user_info() {
        let json = r#"{"user_id": "42", "username": "jdoe", "email": "j@x.com"}"#;

        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.user_id, "42");
        assert_eq!(user.username, "jdoe");
        assert_eq!(user.email.as_deref(), Some("j@x.com"));
        assert_eq!(user.name, None);
        assert_eq!(user.picture, None);
    }

    #[test]
    fn test_numeric_user_id() {
        let json = r#"{"user_id": 1337, "username": "jdoe", "picture": "https://cdn.example.org/a.png"}"#;

        let user: UserInfo = serde_json::from_str(json).unwrap();
        assert_eq!(user.user_id, "1337");
        assert_eq!(user.picture.as_deref(), Some("https://cdn.example.org/a.png"));
    }

    #[test]
    fn test_missing_required_fields_fail() {
        assert!(serde_json::from_str::<UserInfo>(r#"{"username": "jdoe"}"#).is_err());
        assert!(serde_json::from_str::<UserInfo>(r#"{"user_id": "42"}"#).is_err());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"user_id": "42", "username": "jdoe", "sub": "42", "locale": "nl"}"#;

        assert!(serde_json::from_str::<UserInfo>(json).is_ok());
    }
}
