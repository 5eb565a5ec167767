//! # Congressus OAuth 2.0 프로바이더 어댑터
//!
//! 협회(테넌트)별 Congressus 도메인을 대상으로 OAuth 2.0 Authorization Code 플로우를 수행합니다.
//! 범용 기능(인증 URL 쿼리, state, HTTP 전송)은 [`OAuthClient`] 에 위임하고,
//! 이 모듈은 엔드포인트 URL, 토큰 요청 형식, 응답 필드 매핑만 담당합니다.
//!
//! ## OAuth 2.0 Authorization Code Flow
//!
//! ```text
//! ┌──────────────┐        ┌──────────────────┐        ┌────────────────────────┐
//! │  브라우저     │        │  호스트 앱         │        │  {domain} (Congressus) │
//! └──────────────┘        └──────────────────┘        └────────────────────────┘
//!        │ 1. 로그인 요청          │                               │
//!        ├───────────────────────►│ auth_url(state)               │
//!        │ 2. 302 /oauth/authorize │                               │
//!        │◄───────────────────────┤                               │
//!        │ 3. 사용자 인증 ───────────────────────────────────────►│
//!        │ 4. callback?code&state  │                               │
//!        ├───────────────────────►│ 5. POST /oauth/token          │
//!        │                         ├──────────────────────────────►│
//!        │                         │ 6. GET /oauth/userinfo        │
//!        │                         ├──────────────────────────────►│
//!        │                         │ 7. NormalizedUser 매핑        │
//! ```
//!
//! ## 플로우 단계
//!
//! `AwaitingRedirect → ExchangingCode → FetchingUserInfo → Mapping → Completed`
//!
//! 분기나 재시도는 없습니다. 어느 단계에서든 실패하면 `Failed` 가 되고 에러가 그대로 전파됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::services::oauth::CongressusProvider;
//!
//! let mut provider = CongressusProvider::from_config(&config, transport, state_store);
//! provider.set_domain("https://www.example.org/")?;
//!
//! // 1. 로그인 URL
//! let login = provider.redirect()?;
//!
//! // 2. 콜백
//! let user = provider.resolve_authenticated_user(&code, Some(&state)).await?;
//! println!("{} ({:?})", user.nickname, user.email);
//! ```

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::ProviderConfig;
use crate::domain::dto::oauth_response::OAuthLoginUrlResponse;
use crate::domain::dto::token_response::TokenResponse;
use crate::domain::models::normalized_user::NormalizedUser;
use crate::domain::models::user_info::UserInfo;
use crate::errors::errors::{OAuthError, OAuthResult};
use crate::services::oauth::client::{OAuthClient, ScopeInput};
use crate::services::oauth::state_store::StateStore;
use crate::services::oauth::transport::{HttpRequest, HttpResponse, HttpTransport};
use crate::utils::string_utils::{split_scopes, trim_domain};
use crate::utils::time_utils::calculate_expires_in;

/// 데이터를 받기 위해 반드시 필요한 스코프
pub const MANDATORY_SCOPE: &str = "openid";

/// 새 어댑터의 기본 스코프
pub const DEFAULT_SCOPES: [&str; 3] = [MANDATORY_SCOPE, "email", "profile"];

/// Congressus 배포 규칙상 도메인이 반드시 가져야 하는 접두사
pub const DOMAIN_PREFIX: &str = "https://www.";

const AUTHORIZE_PATH: &str = "/oauth/authorize";
const TOKEN_PATH: &str = "/oauth/token";
const USER_INFO_PATH: &str = "/oauth/userinfo";

/// 인가 시도의 진행 단계
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStage {
    AwaitingRedirect,
    ExchangingCode,
    FetchingUserInfo,
    Mapping,
    Completed,
    Failed,
}

/// Congressus 프로바이더 어댑터
///
/// 인가 시도 하나당 인스턴스 하나를 사용합니다. 성공한 결과는 인스턴스에 캐시되며,
/// 여러 시도가 하나의 인스턴스를 공유하도록 설계되지 않았습니다.
pub struct CongressusProvider {
    client: OAuthClient,
    domain: Option<String>,
    user: Option<NormalizedUser>,
    stage: FlowStage,
}

impl CongressusProvider {
    /// 범용 클라이언트로 어댑터를 생성합니다. 스코프는 기본값으로 초기화됩니다.
    pub fn new(mut client: OAuthClient) -> Self {
        client.set_scope_separator(" ");
        client.set_scopes(DEFAULT_SCOPES);

        Self {
            client,
            domain: None,
            user: None,
            stage: FlowStage::AwaitingRedirect,
        }
    }

    /// 설정값으로 어댑터를 생성합니다.
    ///
    /// 도메인은 설정하지 않습니다. 네트워크 호출 전에 [`set_domain`](Self::set_domain) 이 필요합니다.
    pub fn from_config(
        config: &ProviderConfig,
        transport: Arc<dyn HttpTransport>,
        state_store: Arc<dyn StateStore>,
    ) -> Self {
        let client = OAuthClient::new(
            config.client_id.as_str(),
            config.client_secret.as_str(),
            config.redirect_uri.as_str(),
            transport,
            state_store,
        );

        Self::new(client)
    }

    /// 도메인 형식을 검증하고 정리된 값을 반환합니다.
    ///
    /// 앞뒤 공백류와 `/` 를 제거한 뒤 `https://www.` 로 시작하는지만 확인합니다.
    /// 일반적인 URL 문법 검사가 아니라 Congressus 배포 규칙에 대한 정책 검사입니다.
    pub fn validate_domain(domain: &str) -> OAuthResult<String> {
        let cleaned = trim_domain(domain);

        if !cleaned.starts_with(DOMAIN_PREFIX) {
            return Err(OAuthError::Configuration(format!(
                "Make sure the domain configured starts with {} according to the documentation of Congressus (got \"{}\")",
                DOMAIN_PREFIX, cleaned
            )));
        }

        Ok(cleaned.to_string())
    }

    /// 요청을 보낼 도메인을 설정합니다.
    ///
    /// 검증에 실패하면 기존 상태를 바꾸지 않고 `OAuthError::Configuration` 을 반환합니다.
    pub fn set_domain(&mut self, domain: &str) -> OAuthResult<()> {
        let domain = Self::validate_domain(domain)?;
        log::info!("Congressus 도메인 설정: {}", domain);
        self.domain = Some(domain);
        Ok(())
    }

    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    /// 요청 스코프를 교체합니다. `openid` 는 항상 추가됩니다.
    pub fn set_scopes(&mut self, scopes: impl Into<ScopeInput>) -> &mut Self {
        let mut scopes = scopes.into().into_vec();
        scopes.push(MANDATORY_SCOPE.to_string());
        self.client.set_scopes(scopes);
        self
    }

    /// 기존 스코프에 스코프를 추가합니다.
    pub fn scopes(&mut self, scopes: impl Into<ScopeInput>) -> &mut Self {
        self.client.merge_scopes(scopes);
        self
    }

    pub fn get_scopes(&self) -> &[String] {
        self.client.get_scopes()
    }

    /// 인증 URL 에 추가 파라미터를 붙입니다.
    pub fn with_parameters<K: Into<String>, V: Into<String>>(
        &mut self,
        parameters: impl IntoIterator<Item = (K, V)>,
    ) -> &mut Self {
        self.client.set_parameters(parameters);
        self
    }

    /// state 발급과 검증을 생략합니다. (API 클라이언트용)
    pub fn stateless(&mut self) -> &mut Self {
        self.client.set_stateless();
        self
    }

    pub fn stage(&self) -> FlowStage {
        self.stage
    }

    /// 이번 플로우에서 이미 확인된 사용자
    pub fn user(&self) -> Option<&NormalizedUser> {
        self.user.as_ref()
    }

    fn base_url(&self) -> OAuthResult<&str> {
        self.domain.as_deref().ok_or_else(|| {
            OAuthError::Configuration("Congressus domain has not been set".to_string())
        })
    }

    /// `{domain}/oauth/authorize?...` 인증 URL 을 만듭니다. 네트워크 호출은 없습니다.
    pub fn auth_url(&self, state: Option<&str>) -> OAuthResult<String> {
        let base = format!("{}{}", self.base_url()?, AUTHORIZE_PATH);
        Ok(self.client.build_auth_url_from_base(&base, state))
    }

    pub fn token_url(&self) -> OAuthResult<String> {
        Ok(format!("{}{}", self.base_url()?, TOKEN_PATH))
    }

    pub fn user_info_url(&self) -> OAuthResult<String> {
        Ok(format!("{}{}", self.base_url()?, USER_INFO_PATH))
    }

    /// state 를 발급하고 로그인 URL 을 만듭니다.
    pub fn redirect(&self) -> OAuthResult<OAuthLoginUrlResponse> {
        // 도메인이 없으면 state 를 발급하기 전에 실패
        self.base_url()?;

        let state = self.client.issue_state();
        let login_url = self.auth_url(state.as_deref())?;

        Ok(OAuthLoginUrlResponse { login_url, state })
    }

    fn token_fields(&self, code: &str) -> [(&'static str, String); 4] {
        [
            ("grant_type", "authorization_code".to_string()),
            ("client_id", self.client.client_id().to_string()),
            ("client_secret", self.client.client_secret().to_string()),
            ("code", code.to_string()),
        ]
    }

    /// 인가 코드를 토큰으로 교환합니다.
    ///
    /// ```text
    /// POST {domain}/oauth/token
    /// Authorization: Basic base64(client_id:client_secret)
    /// Accept: application/json
    /// Content-Type: application/x-www-form-urlencoded
    ///
    /// grant_type=authorization_code&client_id=...&client_secret=...&code=...
    /// ```
    pub async fn exchange_code_for_token(&self, code: &str) -> OAuthResult<TokenResponse> {
        let request = HttpRequest::post(self.token_url()?)
            .header("Accept", "application/json")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .basic_auth(self.client.client_id(), self.client.client_secret())
            .form(self.token_fields(code));

        let response = self.client.transport().send(request).await?;
        decode_json(TOKEN_PATH, response)
    }

    /// 액세스 토큰으로 사용자 정보를 조회합니다.
    ///
    /// ```text
    /// GET {domain}/oauth/userinfo
    /// Authorization: Bearer {access_token}
    /// ```
    pub async fn fetch_user_info(&self, access_token: &str) -> OAuthResult<UserInfo> {
        let request = HttpRequest::get(self.user_info_url()?)
            .header("Accept", "application/json")
            .bearer_auth(access_token);

        let response = self.client.transport().send(request).await?;
        decode_json(USER_INFO_PATH, response)
    }

    /// 업스트림 응답을 정규화된 사용자로 매핑합니다.
    ///
    /// `expires_in` 은 현재 UTC 시각과 `expires_at` 의 차이(초)이며,
    /// `approved_scopes` 는 `scope` 를 스코프 구분자(공백 하나)로 분리한 값입니다.
    pub fn map_to_normalized_user(&self, user_info: UserInfo, token: &TokenResponse) -> NormalizedUser {
        NormalizedUser {
            id: user_info.user_id.clone(),
            nickname: user_info.username.clone(),
            name: user_info.name.clone(),
            email: user_info.email.clone(),
            avatar: user_info.picture.clone(),
            token: token.access_token.clone(),
            refresh_token: token.refresh_token.clone(),
            expires_in: calculate_expires_in(&token.expires_at),
            approved_scopes: split_scopes(token.scope.as_deref(), self.client.scope_separator()),
            raw: user_info,
        }
    }

    /// 콜백을 처리해 인증된 사용자를 반환합니다.
    ///
    /// 1. state 검증 (stateless 가 아니면)
    /// 2. 인가 코드 → 토큰
    /// 3. 토큰 → 사용자 정보
    /// 4. 매핑
    ///
    /// 성공한 결과는 캐시되어, 같은 인스턴스에서 다시 호출하면 네트워크 호출 없이 반환됩니다.
    /// 실패는 캐시하지 않습니다. 다만 state 는 첫 호출에서 소비되므로, stateless 가 아니면
    /// 같은 state 로 재시도해도 `OAuthError::InvalidState` 가 됩니다.
    pub async fn resolve_authenticated_user(
        &mut self,
        code: &str,
        state: Option<&str>,
    ) -> OAuthResult<NormalizedUser> {
        if let Some(user) = &self.user {
            log::debug!("캐시된 Congressus 사용자 반환: {}", user.id);
            return Ok(user.clone());
        }

        self.base_url()?;

        if self.client.has_invalid_state(state) {
            log::warn!("Congressus 콜백 state 검증 실패");
            self.stage = FlowStage::Failed;
            return Err(OAuthError::InvalidState);
        }

        match self.run_flow(code).await {
            Ok(user) => {
                log::info!("Congressus 사용자 인증 완료: {} ({})", user.nickname, user.id);
                self.stage = FlowStage::Completed;
                self.user = Some(user.clone());
                Ok(user)
            }
            Err(e) => {
                if e.is_upstream_rejection() {
                    log::warn!("Congressus 인증 거부 ({:?} 단계): {}", self.stage, e);
                } else {
                    log::error!("Congressus 인증 실패 ({:?} 단계): {}", self.stage, e);
                }
                self.stage = FlowStage::Failed;
                Err(e)
            }
        }
    }

    async fn run_flow(&mut self, code: &str) -> OAuthResult<NormalizedUser> {
        self.stage = FlowStage::ExchangingCode;
        let token = self.exchange_code_for_token(code).await?;

        self.stage = FlowStage::FetchingUserInfo;
        let user_info = self.fetch_user_info(&token.access_token).await?;

        self.stage = FlowStage::Mapping;
        Ok(self.map_to_normalized_user(user_info, &token))
    }
}

/// 상태 코드를 먼저 확인한 뒤 본문을 엄격하게 JSON 디코딩합니다.
fn decode_json<T: DeserializeOwned>(endpoint: &str, response: HttpResponse) -> OAuthResult<T> {
    if !response.is_success() {
        log::warn!("Congressus {} 응답 상태: {}", endpoint, response.status);
        return Err(OAuthError::UpstreamHttp {
            endpoint: endpoint.to_string(),
            status: response.status,
            body: response.body,
        });
    }

    serde_json::from_str(&response.body).map_err(|e| OAuthError::MalformedResponse {
        endpoint: endpoint.to_string(),
        reason: e.to_string(),
    })
}
