//! # Provider Registry
//!
//! 이름 → 프로바이더 설정 매핑을 보관하고, 요청마다 새 어댑터 인스턴스를 생성하는 레지스트리입니다.
//! 호스트 애플리케이션이 시작할 때 프로바이더를 등록하고, 핸들러는 이름으로 어댑터를 꺼내 씁니다.
//!
//! ## 등록 과정
//!
//! ```text
//! 1. 레지스트리 생성
//!    └─ 공유 자원 주입: HttpTransport, StateStore
//!
//! 2. 프로바이더 등록 (register_congressus)
//!    ├─ 설정값 필드 검증 (validator)
//!    ├─ 도메인 규칙 검증 (https://www.)
//!    └─ "congressus" 이름으로 저장
//!
//! 3. 어댑터 생성 (build)
//!    ├─ 이름으로 등록 정보 조회
//!    ├─ 새 CongressusProvider 생성 (인가 시도 하나당 하나)
//!    ├─ set_domain 적용
//!    └─ 설정된 스코프 적용
//! ```
//!
//! 전역 상태는 없습니다. 레지스트리는 `main` 에서 한 번 만들어 `web::Data` 로 공유합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let mut registry = ProviderRegistry::new(transport, state_store);
//! registry.register_congressus(ProviderConfig::from_env()?)?;
//!
//! let mut provider = registry.build(CONGRESSUS)?;
//! let login = provider.redirect()?;
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::ProviderConfig;
use crate::errors::errors::{OAuthError, OAuthResult};
use crate::services::oauth::congressus_provider::CongressusProvider;
use crate::services::oauth::state_store::StateStore;
use crate::services::oauth::transport::HttpTransport;

/// Congressus 프로바이더 등록 이름
pub const CONGRESSUS: &str = "congressus";

/// 프로바이더 등록 정보
#[derive(Debug, Clone)]
struct ProviderRegistration {
    config: ProviderConfig,
}

/// 프로바이더 레지스트리
pub struct ProviderRegistry {
    transport: Arc<dyn HttpTransport>,
    state_store: Arc<dyn StateStore>,
    providers: HashMap<String, ProviderRegistration>,
}

impl ProviderRegistry {
    pub fn new(transport: Arc<dyn HttpTransport>, state_store: Arc<dyn StateStore>) -> Self {
        Self {
            transport,
            state_store,
            providers: HashMap::new(),
        }
    }

    /// Congressus 프로바이더를 등록합니다.
    ///
    /// 잘못된 설정은 첫 로그인 요청이 아니라 시작 시점에 `OAuthError::Configuration` 으로 드러납니다.
    pub fn register_congressus(&mut self, config: ProviderConfig) -> OAuthResult<()> {
        config.validate_fields()?;
        CongressusProvider::validate_domain(&config.domain)?;

        log::info!("OAuth 프로바이더 등록: {} ({:?})", CONGRESSUS, config);
        self.providers
            .insert(CONGRESSUS.to_string(), ProviderRegistration { config });

        Ok(())
    }

    /// 등록된 이름으로 새 어댑터를 생성합니다.
    pub fn build(&self, name: &str) -> OAuthResult<CongressusProvider> {
        let registration = self.providers.get(name).ok_or_else(|| {
            OAuthError::Configuration(format!("등록되지 않은 OAuth 프로바이더: {}", name))
        })?;
        let config = &registration.config;

        let mut provider = CongressusProvider::from_config(
            config,
            Arc::clone(&self.transport),
            Arc::clone(&self.state_store),
        );
        provider.set_domain(&config.domain)?;

        if let Some(scopes) = &config.scopes {
            provider.set_scopes(scopes.clone());
        }

        Ok(provider)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// 등록된 프로바이더 이름 (정렬됨)
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
