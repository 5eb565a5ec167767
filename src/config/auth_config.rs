//! # Authentication Configuration Module
//!
//! Congressus OAuth 클라이언트 정보와 아웃바운드 HTTP 설정을 관리하는 모듈입니다.
//! 설정값은 명시적인 구조체로 만들어져 어댑터 생성자에 전달되며,
//! 전역 설정 저장소를 조회하지 않습니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export CONGRESSUS_CLIENT_ID="your-client-id"
//! export CONGRESSUS_CLIENT_SECRET="your-client-secret"
//! export CONGRESSUS_REDIRECT_URI="https://yourapp.com/auth/congressus/callback"
//! export CONGRESSUS_DOMAIN="https://www.your-association.nl"
//! ```
//!
//! ### 선택 환경 변수
//!
//! ```bash
//! export CONGRESSUS_SCOPES="email profile"          # 공백 구분, openid 는 항상 포함
//! export OAUTH_HTTP_TIMEOUT_SECONDS="10"
//! export OAUTH_HTTP_CONNECT_TIMEOUT_SECONDS="5"
//! ```
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{HttpConfig, ProviderConfig};
//!
//! let provider_config = ProviderConfig::from_env()?;
//! let http_config = HttpConfig::from_env();
//! ```

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::errors::OAuthError;
use crate::utils::string_utils::split_scopes;

/// Congressus OAuth 2.0 클라이언트 설정
///
/// 호스트 애플리케이션이 구성해서 레지스트리(또는 어댑터)에 명시적으로 전달합니다.
/// `domain` 의 형식 검증은 어댑터의 `set_domain` 이 담당합니다.
///
/// ## 보안 고려사항
///
/// - `client_secret` 은 로그에 출력하지 않습니다 (`Debug` 출력에서 마스킹됨)
/// - `redirect_uri` 는 Congressus 관리 화면에 등록된 값과 정확히 일치해야 합니다
#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct ProviderConfig {
    /// OAuth Client ID
    #[validate(length(min = 1, message = "client_id는 필수입니다"))]
    pub client_id: String,

    /// OAuth Client Secret
    #[validate(length(min = 1, message = "client_secret은 필수입니다"))]
    pub client_secret: String,

    /// 인증 완료 후 돌아올 콜백 URL
    #[validate(url(message = "redirect_uri는 올바른 URL이어야 합니다"))]
    pub redirect_uri: String,

    /// 협회(테넌트) 도메인, 예: `https://www.example.org`
    pub domain: String,

    /// 요청할 스코프 (없으면 기본값 `openid email profile`)
    #[serde(default)]
    pub scopes: Option<Vec<String>>,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"***")
            .field("redirect_uri", &self.redirect_uri)
            .field("domain", &self.domain)
            .field("scopes", &self.scopes)
            .finish()
    }
}

impl ProviderConfig {
    /// 필수 값으로 설정을 생성합니다.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
        domain: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            domain: domain.into(),
            scopes: None,
        }
    }

    /// 요청 스코프를 지정합니다.
    pub fn with_scopes<S: Into<String>>(mut self, scopes: impl IntoIterator<Item = S>) -> Self {
        self.scopes = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    /// 환경 변수에서 설정을 로드합니다.
    ///
    /// 필수 변수가 없으면 패닉하지 않고 `OAuthError::Configuration` 을 반환합니다.
    ///
    /// # 환경 변수
    ///
    /// | 변수 | 필수 | 설명 |
    /// |------|------|------|
    /// | `CONGRESSUS_CLIENT_ID` | O | 클라이언트 ID |
    /// | `CONGRESSUS_CLIENT_SECRET` | O | 클라이언트 시크릿 |
    /// | `CONGRESSUS_REDIRECT_URI` | O | 콜백 URL |
    /// | `CONGRESSUS_DOMAIN` | O | 협회 도메인 |
    /// | `CONGRESSUS_SCOPES` | X | 공백 구분 스코프 |
    pub fn from_env() -> Result<Self, OAuthError> {
        let scopes = env::var("CONGRESSUS_SCOPES").ok();
        let scopes = split_scopes(scopes.as_deref().map(str::trim), " ");

        let config = Self {
            client_id: required_var("CONGRESSUS_CLIENT_ID")?,
            client_secret: required_var("CONGRESSUS_CLIENT_SECRET")?,
            redirect_uri: required_var("CONGRESSUS_REDIRECT_URI")?,
            domain: required_var("CONGRESSUS_DOMAIN")?,
            scopes: if scopes.is_empty() { None } else { Some(scopes) },
        };

        config.validate_fields()?;
        Ok(config)
    }

    /// `validator` 규칙을 적용하고 실패를 설정 에러로 변환합니다.
    pub fn validate_fields(&self) -> Result<(), OAuthError> {
        self.validate()
            .map_err(|e| OAuthError::Configuration(e.to_string()))
    }
}

fn required_var(name: &str) -> Result<String, OAuthError> {
    env::var(name).map_err(|_| OAuthError::Configuration(format!("{} must be set", name)))
}

/// 아웃바운드 HTTP 요청 설정
///
/// 토큰 교환과 사용자 정보 조회 요청의 타임아웃을 명시적으로 지정합니다.
/// 재시도는 하지 않습니다.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpConfig {
    /// 요청 전체 타임아웃
    pub request_timeout: Duration,
    /// 연결 수립 타임아웃
    pub connect_timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
        }
    }
}

impl HttpConfig {
    /// 환경 변수에서 타임아웃을 읽습니다. 파싱 실패 시 기본값을 사용합니다.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            request_timeout: seconds_var("OAUTH_HTTP_TIMEOUT_SECONDS")
                .unwrap_or(defaults.request_timeout),
            connect_timeout: seconds_var("OAUTH_HTTP_CONNECT_TIMEOUT_SECONDS")
                .unwrap_or(defaults.connect_timeout),
        }
    }
}

fn seconds_var(name: &str) -> Option<Duration> {
    let raw = env::var(name).ok()?;
    match raw.parse::<u64>() {
        Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
        _ => {
            log::warn!("{} 값이 올바르지 않습니다: {}. 기본값 사용", name, raw);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // 프로세스 환경 변수는 전역이므로 env 테스트끼리 직렬화합니다.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const PROVIDER_VARS: [(&str, &str); 4] = [
        ("CONGRESSUS_CLIENT_ID", "env-id"),
        ("CONGRESSUS_CLIENT_SECRET", "env-secret"),
        ("CONGRESSUS_REDIRECT_URI", "https://app.example.org/callback"),
        ("CONGRESSUS_DOMAIN", "https://www.example.org"),
    ];

    fn sample_config() -> ProviderConfig {
        ProviderConfig::new(
            "client-id",
            "client-secret",
            "https://app.example.org/auth/congressus/callback",
            "https://www.example.org",
        )
    }

    #[test]
    fn test_valid_provider_config() {
        assert!(sample_config().validate_fields().is_ok());
    }

    #[test]
    fn test_empty_client_id_is_rejected() {
        let mut config = sample_config();
        config.client_id = String::new();

        assert!(matches!(config.validate_fields(), Err(OAuthError::Configuration(_))));
    }

    #[test]
    fn test_invalid_redirect_uri_is_rejected() {
        let mut config = sample_config();
        config.redirect_uri = "not a url".to_string();

        assert!(matches!(config.validate_fields(), Err(OAuthError::Configuration(_))));
    }

    #[test]
    fn test_debug_masks_secret() {
        let debug = format!("{:?}", sample_config());

        assert!(!debug.contains("client-secret"));
        assert!(debug.contains("***"));
    }

    #[test]
    fn test_deserialize_provider_config() {
        let json = r#"{
            "client_id": "id",
            "client_secret": "secret",
            "redirect_uri": "https://app.example.org/callback",
            "domain": "https://www.example.org/",
            "scopes": ["email"]
        }"#;

        let config: ProviderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.scopes, Some(vec!["email".to_string()]));
        assert_eq!(config.domain, "https://www.example.org/");
    }

    #[test]
    fn test_http_config_defaults() {
        let config = HttpConfig::default();

        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_from_env_missing_variable_is_configuration_error() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            for (name, value) in PROVIDER_VARS {
                env::set_var(name, value);
            }
            env::remove_var("CONGRESSUS_CLIENT_SECRET");
            env::remove_var("CONGRESSUS_SCOPES");
        }

        let result = ProviderConfig::from_env();

        unsafe {
            for (name, _) in PROVIDER_VARS {
                env::remove_var(name);
            }
        }
        match result {
            Err(OAuthError::Configuration(message)) => {
                assert!(message.contains("CONGRESSUS_CLIENT_SECRET"), "{}", message)
            }
            other => panic!("expected Configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_env_reads_all_variables() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            for (name, value) in PROVIDER_VARS {
                env::set_var(name, value);
            }
            env::set_var("CONGRESSUS_SCOPES", " email profile ");
        }

        let result = ProviderConfig::from_env();

        unsafe {
            for (name, _) in PROVIDER_VARS {
                env::remove_var(name);
            }
            env::remove_var("CONGRESSUS_SCOPES");
        }
        let config = result.unwrap();
        assert_eq!(config.client_id, "env-id");
        assert_eq!(config.domain, "https://www.example.org");
        assert_eq!(config.scopes, Some(vec!["email".to_string(), "profile".to_string()]));
    }

    #[test]
    fn test_http_config_invalid_values_fall_back_to_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            env::set_var("OAUTH_HTTP_TIMEOUT_SECONDS", "abc");
            env::set_var("OAUTH_HTTP_CONNECT_TIMEOUT_SECONDS", "0");
        }

        let config = HttpConfig::from_env();

        unsafe {
            env::remove_var("OAUTH_HTTP_TIMEOUT_SECONDS");
            env::remove_var("OAUTH_HTTP_CONNECT_TIMEOUT_SECONDS");
        }
        assert_eq!(config, HttpConfig::default());
    }

    #[test]
    fn test_http_config_reads_valid_values() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            env::set_var("OAUTH_HTTP_TIMEOUT_SECONDS", "30");
            env::set_var("OAUTH_HTTP_CONNECT_TIMEOUT_SECONDS", "2");
        }

        let config = HttpConfig::from_env();

        unsafe {
            env::remove_var("OAUTH_HTTP_TIMEOUT_SECONDS");
            env::remove_var("OAUTH_HTTP_CONNECT_TIMEOUT_SECONDS");
        }
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(2));
    }
}
