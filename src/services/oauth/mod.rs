//! OAuth 2.0 인증 서비스 모듈
//!
//! 범용 OAuth 클라이언트와 Congressus 프로바이더 어댑터를 제공합니다.
//!
//! # Features
//!
//! - 인증 URL 생성 (`{domain}/oauth/authorize`)
//! - 인가 코드 → 액세스 토큰 교환 (HTTP Basic 인증)
//! - 사용자 정보 조회 (Bearer 토큰)
//! - CSRF 방지 (OAuth State 매개변수)
//!
//! # Security
//!
//! - 도메인은 `https://www.` 접두사가 강제됩니다.
//! - 클라이언트 시크릿과 토큰은 로그에 남기지 않습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::oauth::{CongressusProvider, InMemoryStateStore, ReqwestTransport};
//!
//! let mut provider = CongressusProvider::from_config(&config, transport, state_store);
//! provider.set_domain("https://www.example.org")?;
//! let login = provider.redirect()?;
//! ```

pub mod client;
pub mod congressus_provider;
pub mod state_store;
pub mod transport;

pub use client::*;
pub use congressus_provider::*;
pub use state_store::*;
pub use transport::*;
