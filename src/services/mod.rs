//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 외부 아이덴티티 프로바이더와의 OAuth 2.0 통신을 담당합니다.
//! 서비스 인스턴스는 전역 싱글톤이 아니라 [`ProviderRegistry`](crate::core::registry::ProviderRegistry)
//! 를 통해 명시적으로 생성됩니다.

pub mod oauth;
