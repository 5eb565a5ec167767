//! # 문자열 유틸리티
//!
//! 도메인 정리, 스코프 분리, 느슨한 JSON 필드 역직렬화 등
//! OAuth 어댑터 전반에서 사용하는 문자열 처리 함수들입니다.

use serde::Deserialize;

/// 도메인 앞뒤에서 제거할 문자 집합
///
/// 공백류(스페이스, 탭, 개행, 캐리지 리턴, NUL, 수직 탭)와 경로 구분자 `/` 입니다.
const DOMAIN_TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r', '\0', '\x0B', '/'];

/// 도메인 문자열 정리
///
/// 앞뒤의 공백류 문자와 `/` 를 모두 제거합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::trim_domain;
///
/// assert_eq!(trim_domain("  https://www.example.org/  "), "https://www.example.org");
/// assert_eq!(trim_domain("https://www.example.org///"), "https://www.example.org");
/// ```
pub fn trim_domain(value: &str) -> &str {
    value.trim_matches(DOMAIN_TRIM_CHARS)
}

/// 구분자로 연결된 스코프 문자열을 분리합니다.
///
/// 값이 없거나 빈 문자열이면 빈 벡터를 반환합니다.
/// 그 외에는 구분자 단위로 그대로 분리합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::string_utils::split_scopes;
///
/// assert_eq!(split_scopes(Some("openid email"), " "), vec!["openid", "email"]);
/// assert!(split_scopes(None, " ").is_empty());
/// ```
pub fn split_scopes(value: Option<&str>, separator: &str) -> Vec<String> {
    match value {
        None | Some("") => Vec::new(),
        Some(scopes) => scopes.split(separator).map(str::to_string).collect(),
    }
}

/// 선택적 문자열 필드 정리
///
/// None 이거나 빈 문자열/공백만 있는 경우 None을 반환하고,
/// 유효한 문자열이면 앞뒤 공백을 제거해 Some으로 반환합니다.
pub fn clean_optional_string(value: Option<String>) -> Option<String> {
    value.and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 문자열이 유효한지 확인 (빈 문자열이 아니고 공백만으로 구성되지 않음)
pub fn is_valid_string(value: &str) -> bool {
    !value.trim().is_empty()
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 빈 문자열이나 공백만 있는 문자열을 None으로 변환합니다.
/// `#[serde(default, deserialize_with = "deserialize_optional_string")]` 와 함께 사용합니다.
pub fn deserialize_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(clean_optional_string(opt))
}

/// 문자열 또는 정수로 전달되는 식별자를 문자열로 역직렬화합니다.
///
/// Congressus 는 `user_id` 를 숫자로 내려주기도 하므로 두 형태를 모두 허용합니다.
/// 그 외 타입(null, 객체 등)은 역직렬화 에러입니다.
pub fn deserialize_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Unsigned(n) => n.to_string(),
        StringOrNumber::Signed(n) => n.to_string(),
    })
}
