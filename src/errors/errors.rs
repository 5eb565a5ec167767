//! Congressus OAuth 어댑터 전역 에러 시스템
//!
//! 인가 코드 플로우의 각 단계에서 발생할 수 있는 실패를 하나의 열거형으로 표현합니다.
//! `thiserror`로 `Error` trait을 구현하고, 호스트 HTTP 계층을 위해
//! `actix_web::ResponseError`도 함께 구현합니다.
//!
//! ## 에러 분류
//!
//! | OAuthError | HTTP Status | 발생 시점 |
//! |------------|-------------|-----------|
//! | `Configuration` | 500 Internal Server Error | 도메인/클라이언트 설정 오류 (부팅 시) |
//! | `InvalidState` | 401 Unauthorized | 콜백의 CSRF state 불일치 |
//! | `AccessDenied` | 401 Unauthorized | 사용자가 인증 거부, 인가 코드 누락 |
//! | `UpstreamHttp` | 502 Bad Gateway | 토큰/유저인포 엔드포인트의 non-2xx 응답 |
//! | `MalformedResponse` | 502 Bad Gateway | JSON 이 아니거나 필수 필드 누락 |
//! | `Transport` | 502 Bad Gateway | 요청 전송 실패 또는 타임아웃 |
//!
//! 어떤 에러도 내부에서 복구하거나 재시도하지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::OAuthError;
//!
//! match provider.resolve_authenticated_user(&code, state.as_deref()).await {
//!     Ok(user) => log::info!("인증 성공: {}", user.id),
//!     Err(OAuthError::UpstreamHttp { status, .. }) => log::warn!("업스트림 거부: {}", status),
//!     Err(OAuthError::MalformedResponse { .. }) => log::error!("업스트림 응답 손상"),
//!     Err(e) => return Err(e),
//! }
//! ```

use thiserror::Error;

/// OAuth 어댑터 에러 타입
#[derive(Error, Debug)]
pub enum OAuthError {
    /// 설정 오류 (잘못된 도메인 형식, 누락된 클라이언트 정보 등)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// CSRF state 검증 실패
    #[error("Invalid OAuth state")]
    InvalidState,

    /// 사용자가 인증을 거부했거나 콜백에 인가 코드가 없음
    #[error("Access denied: {0}")]
    AccessDenied(String),

    /// 업스트림이 2xx 가 아닌 상태 코드로 응답함
    ///
    /// 본문은 필드로만 보관하며 `Display` 출력(로그, HTTP 응답)에는 포함하지 않습니다.
    #[error("Upstream {endpoint} returned HTTP {status}")]
    UpstreamHttp {
        endpoint: String,
        status: u16,
        body: String,
    },

    /// 응답 본문이 JSON 이 아니거나 필수 구조를 만족하지 않음
    #[error("Malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    /// 요청 전송 실패 (연결 오류, 타임아웃)
    #[error("Transport error: {0}")]
    Transport(String),
}

impl OAuthError {
    /// 업스트림 거부 여부 (non-2xx)
    pub fn is_upstream_rejection(&self) -> bool {
        matches!(self, OAuthError::UpstreamHttp { .. })
    }
}

impl actix_web::ResponseError for OAuthError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            OAuthError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            OAuthError::InvalidState | OAuthError::AccessDenied(_) => StatusCode::UNAUTHORIZED,
            OAuthError::UpstreamHttp { .. }
            | OAuthError::MalformedResponse { .. }
            | OAuthError::Transport(_) => StatusCode::BAD_GATEWAY,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 업스트림 응답 본문은 클라이언트에게 노출하지 않습니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type OAuthResult<T> = Result<T, OAuthError>;
