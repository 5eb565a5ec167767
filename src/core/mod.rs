//! # Core Module
//!
//! 호스트 애플리케이션과 프로바이더 어댑터를 연결하는 핵심 기능을 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`registry`] - 프로바이더 레지스트리
//! - **ProviderRegistry**: 이름으로 프로바이더를 등록하고 요청마다 새 어댑터를 생성
//! - **명시적 주입**: 전송 계층과 state 저장소를 생성자로 전달받음
//! - **시작 시 검증**: 도메인 형식 오류는 등록 시점에 `Configuration` 에러로 반환
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::registry::{ProviderRegistry, CONGRESSUS};
//!
//! let mut registry = ProviderRegistry::new(transport, state_store);
//! registry.register_congressus(config)?;
//!
//! let provider = registry.build(CONGRESSUS)?;
//! ```

pub mod registry;

pub use registry::*;
