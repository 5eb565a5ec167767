//! # Domain Models
//!
//! - [`user_info`] - `/oauth/userinfo` 응답 모델
//! - [`normalized_user`] - 호스트 애플리케이션에 전달되는 정규화된 사용자 프로필

pub mod user_info;
pub mod normalized_user;

pub use user_info::*;
pub use normalized_user::*;
