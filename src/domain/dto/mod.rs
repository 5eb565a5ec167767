//! # Data Transfer Objects
//!
//! - [`token_response`] - 토큰 엔드포인트 응답
//! - [`oauth_response`] - 로그인 URL 응답 (호스트 API)
//! - [`auth_request`] - OAuth 콜백 쿼리 파라미터

pub mod token_response;
pub mod oauth_response;
pub mod auth_request;

pub use token_response::*;
pub use oauth_response::*;
pub use auth_request::*;
