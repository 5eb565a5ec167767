//! # Domain Layer Module
//!
//! Congressus OAuth 플로우에서 주고받는 데이터 구조를 정의합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── DTOs    - 토큰 응답, 로그인 URL 응답, 콜백 쿼리
//! └── Models  - 업스트림 사용자 정보, 정규화된 사용자
//! ```
//!
//! 모든 업스트림 응답은 필수/선택 필드가 정적으로 선언된 구조체로 역직렬화됩니다.
//! 필수 필드가 없으면 역직렬화 에러가 되며, 조용히 `null` 로 채우지 않습니다.

pub mod dto;
pub mod models;

pub use dto::*;
pub use models::*;
