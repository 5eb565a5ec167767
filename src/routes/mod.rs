//! API 라우트 설정 모듈
//!
//! Congressus OAuth 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::App;
//!
//! let app = App::new()
//!     .app_data(registry.clone())
//!     .configure(configure_all_routes);
//! ```

use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /auth/congressus/login` - 로그인 URL 생성 (JSON)
/// - `GET /auth/congressus/redirect` - 인증 페이지로 리다이렉트
/// - `GET /auth/congressus/callback` - OAuth 콜백 처리
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/auth/congressus/login
/// curl -i http://localhost:8080/auth/congressus/redirect
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth/congressus")
            .service(handlers::auth::congressus_login_url)
            .service(handlers::auth::congressus_redirect)
            .service(handlers::auth::congressus_callback),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "providers": ["congressus"]
    }))
}
