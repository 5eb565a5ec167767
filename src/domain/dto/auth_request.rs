//! 인증 요청관련 DTO
//!
//! Congressus 가 리다이렉트하며 전달하는 콜백 쿼리를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// OAuth 콜백 쿼리 파라미터 구조체
///
/// 사용자가 인증을 거부하면 `code` 없이 `error` 만 전달되므로 `code` 는 선택 필드입니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct OAuthCallbackQuery {
    #[validate(length(min = 1, message = "Authorization code가 필요합니다"))]
    pub code: Option<String>,

    pub state: Option<String>,

    /// 에러가 있을 경우 (사용자가 거부했거나 에러 발생)
    pub error: Option<String>,
    pub error_description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_code_fails_validation() {
        let query = OAuthCallbackQuery {
            code: Some(String::new()),
            ..Default::default()
        };

        assert!(query.validate().is_err());
    }

    #[test]
    fn test_error_callback_without_code_is_valid() {
        let query = OAuthCallbackQuery {
            error: Some("access_denied".to_string()),
            ..Default::default()
        };

        assert!(query.validate().is_ok());
    }
}
