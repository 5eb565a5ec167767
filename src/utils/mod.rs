//! 공통 유틸리티 함수 모듈
//!
//! 어댑터 전체에서 사용되는 문자열/시간 처리 함수들을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 도메인 정리, 스코프 분리, 느슨한 필드 역직렬화
//! - [`time_utils`] - 만료 시각 파싱과 남은 유효 시간 계산

pub mod string_utils;
pub mod time_utils;
