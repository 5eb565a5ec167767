//! Congressus OAuth 핸들러
//!
//! 로그인 URL 발급, 리다이렉트, 콜백 처리를 담당합니다.

use actix_web::{get, http::header, web, HttpResponse};
use validator::Validate;

use crate::core::registry::{ProviderRegistry, CONGRESSUS};
use crate::domain::OAuthCallbackQuery;
use crate::errors::errors::OAuthError;
use crate::utils::string_utils::is_valid_string;

/// Congressus 로그인 URL 생성
///
/// 프론트엔드가 직접 리다이렉트할 수 있도록 URL 과 state 를 JSON 으로 반환합니다.
///
/// ```json
/// { "login_url": "https://www.example.org/oauth/authorize?...", "state": "..." }
/// ```
#[get("/login")]
pub async fn congressus_login_url(
    registry: web::Data<ProviderRegistry>,
) -> Result<HttpResponse, OAuthError> {
    let provider = registry.build(CONGRESSUS)?;
    let url_response = provider.redirect()?;

    Ok(HttpResponse::Ok().json(url_response))
}

/// Congressus 인증 페이지로 302 리다이렉트
#[get("/redirect")]
pub async fn congressus_redirect(
    registry: web::Data<ProviderRegistry>,
) -> Result<HttpResponse, OAuthError> {
    let provider = registry.build(CONGRESSUS)?;
    let url_response = provider.redirect()?;

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, url_response.login_url))
        .finish())
}

/// Congressus OAuth 콜백 처리
///
/// 인가 코드를 토큰으로 교환하고 사용자 정보를 조회해 정규화된 사용자를 반환합니다.
/// 세션 생성은 호스트 애플리케이션의 몫입니다.
#[get("/callback")]
pub async fn congressus_callback(
    registry: web::Data<ProviderRegistry>,
    query: web::Query<OAuthCallbackQuery>,
) -> Result<HttpResponse, OAuthError> {
    // 에러 체크 (사용자가 거부했거나 에러 발생)
    if let Some(error) = &query.error {
        let error_msg = query
            .error_description
            .as_deref()
            .unwrap_or("OAuth 인증이 취소되었거나 실패했습니다");
        log::warn!("Congressus OAuth 에러: {} - {}", error, error_msg);
        return Err(OAuthError::AccessDenied(error_msg.to_string()));
    }

    query
        .validate()
        .map_err(|e| OAuthError::AccessDenied(e.to_string()))?;

    let code = query
        .code
        .as_deref()
        .filter(|code| is_valid_string(code))
        .ok_or_else(|| OAuthError::AccessDenied("Authorization code가 필요합니다".to_string()))?;

    let mut provider = registry.build(CONGRESSUS)?;
    let user = provider
        .resolve_authenticated_user(code, query.state.as_deref())
        .await?;

    log::info!("Congressus 로그인 성공: {}", user.id);
    Ok(HttpResponse::Ok().json(user))
}
