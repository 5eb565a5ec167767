//! # Configuration Module
//!
//! 어댑터와 호스트 바이너리의 설정을 관리하는 모듈입니다.
//! 설정값은 구조체로 만들어 생성자에 명시적으로 전달하며,
//! 환경 변수 로딩은 바이너리 부팅 시점에 한 번만 수행합니다.
//!
//! ## 모듈 구성
//!
//! - [`auth_config`] - Congressus 클라이언트 정보, 아웃바운드 HTTP 타임아웃
//! - [`data_config`] - 서버 바인딩, 실행 환경
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, HttpConfig, ProviderConfig, ServerConfig};
//!
//! let env = Environment::current();
//! let provider_config = ProviderConfig::from_env()?;
//! let http_config = HttpConfig::from_env();
//! println!("Server will bind to {}", ServerConfig::bind_address());
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
