//! 정규화된 사용자 프로필
//!
//! 호스트 애플리케이션의 세션/로그인 로직에 전달되는, 프로바이더에 독립적인 사용자 레코드입니다.

use serde::Serialize;

use crate::domain::models::user_info::UserInfo;

/// 인가 플로우가 성공하면 한 번 생성되는 사용자 프로필
///
/// 같은 어댑터 인스턴스에서는 캐시되어 재사용됩니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedUser {
    /// 프로바이더 사용자 ID (`user_id`)
    pub id: String,
    /// 닉네임 (`username`)
    pub nickname: String,
    /// 이름
    pub name: Option<String>,
    /// 이메일
    pub email: Option<String>,
    /// 아바타 URL (`picture`)
    pub avatar: Option<String>,
    /// 액세스 토큰
    pub token: String,
    /// 리프레시 토큰
    pub refresh_token: Option<String>,
    /// 토큰 만료까지 남은 시간 (초). 이미 만료된 경우 0 이하
    pub expires_in: i64,
    /// 승인된 스코프
    pub approved_scopes: Vec<String>,
    /// userinfo 엔드포인트의 원본 응답
    pub raw: UserInfo,
}
