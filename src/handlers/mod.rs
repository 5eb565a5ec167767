//! # HTTP Request Handlers Module
//!
//! Congressus 로그인 플로우를 호스트 HTTP 계층에 노출하는 핸들러 모듈입니다.
//!
//! ## 요청 흐름
//!
//! ```text
//! GET /auth/congressus/login      → 로그인 URL + state (JSON)
//! GET /auth/congressus/redirect   → 302 Found, Location: {domain}/oauth/authorize?...
//! GET /auth/congressus/callback   → NormalizedUser (JSON)
//! ```
//!
//! 핸들러는 `web::Data<ProviderRegistry>` 에서 요청마다 새 어댑터를 만듭니다.
//! 에러는 `OAuthError` 의 `ResponseError` 구현으로 HTTP 응답이 됩니다.

pub mod auth;
