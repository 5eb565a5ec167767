//! Congressus OAuth 2.0 아이덴티티 프로바이더 어댑터
//!
//! 협회(테넌트)별 Congressus 도메인을 대상으로 Authorization Code 플로우를 수행하고,
//! 업스트림 사용자 정보를 프로바이더에 독립적인 [`NormalizedUser`](domain::NormalizedUser) 로 매핑합니다.
//!
//! # Features
//!
//! - **도메인 검증**: `https://www.` 접두사 강제
//! - **인증 URL**: `{domain}/oauth/authorize` + CSRF state
//! - **토큰 교환**: HTTP Basic 인증 + 폼 본문 (`{domain}/oauth/token`)
//! - **사용자 정보**: Bearer 토큰 (`{domain}/oauth/userinfo`)
//! - **Actix-web 통합**: 로그인/리다이렉트/콜백 핸들러
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /auth/congressus/*
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ProviderRegistry │ ← 프로바이더 등록, 어댑터 생성
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │CongressusProvider│ ← 엔드포인트, 필드 매핑
//! │  └ OAuthClient  │ ← 스코프, state, 인증 URL
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  HttpTransport  │ ← reqwest
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use congressus_oauth::core::registry::{ProviderRegistry, CONGRESSUS};
//!
//! let mut provider = registry.build(CONGRESSUS)?;
//! let user = provider.resolve_authenticated_user(&code, Some(&state)).await?;
//! ```

pub mod core;
pub mod config;
pub mod domain;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
