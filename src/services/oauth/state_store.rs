//! # OAuth State Store
//!
//! CSRF 방지용 state 토큰의 발급과 검증을 담당합니다.
//! state 는 인증 URL 을 만들 때 발급되고, 콜백에서 한 번 검증된 뒤 폐기됩니다.
//!
//! ```text
//! redirect()  ──► issue()  ──► state 저장 ──► ?state=... 로 전달
//! callback    ──► consume(state) ──► 일치하면 삭제 후 true
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// state 토큰 저장소 추상화
pub trait StateStore: Send + Sync {
    /// 새 state 토큰을 발급하고 저장합니다.
    fn issue(&self) -> String;

    /// 콜백으로 받은 state 가 발급된 것인지 확인하고 폐기합니다.
    ///
    /// 발급된 적 없거나, 이미 사용되었거나, 만료된 경우 `false` 입니다.
    fn consume(&self, state: &str) -> bool;
}

/// 프로세스 메모리 기반 state 저장소
///
/// 단일 인스턴스 배포용입니다. 여러 인스턴스로 확장할 때는 공유 저장소 구현이 필요합니다.
pub struct InMemoryStateStore {
    ttl: Duration,
    states: Mutex<HashMap<String, DateTime<Utc>>>,
}

impl InMemoryStateStore {
    /// 발급된 state 의 유효 시간을 지정해 생성합니다.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            states: Mutex::new(HashMap::new()),
        }
    }

    /// 현재 보관 중인 state 수
    pub fn len(&self) -> usize {
        self.states.lock().map(|states| states.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self::new(Duration::minutes(10))
    }
}

impl StateStore for InMemoryStateStore {
    fn issue(&self) -> String {
        let state = Uuid::new_v4().simple().to_string();
        let now = Utc::now();

        match self.states.lock() {
            Ok(mut states) => {
                states.retain(|_, expires_at| *expires_at > now);
                states.insert(state.clone(), now + self.ttl);
            }
            Err(e) => log::error!("OAuth state 저장소 잠금 실패: {}", e),
        }

        state
    }

    fn consume(&self, state: &str) -> bool {
        if state.is_empty() {
            return false;
        }

        let Ok(mut states) = self.states.lock() else {
            log::error!("OAuth state 저장소 잠금 실패");
            return false;
        };

        match states.remove(state) {
            Some(expires_at) => expires_at > Utc::now(),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issued_state_is_consumed_once() {
        let store = InMemoryStateStore::default();
        let state = store.issue();

        assert!(!state.is_empty());
        assert!(store.consume(&state));
        assert!(!store.consume(&state));
        assert!(store.is_empty());
    }

    #[test]
    fn test_unknown_and_empty_states_are_rejected() {
        let store = InMemoryStateStore::default();
        store.issue();

        assert!(!store.consume("forged"));
        assert!(!store.consume(""));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_expired_state_is_rejected() {
        let store = InMemoryStateStore::new(Duration::seconds(-1));
        let state = store.issue();

        assert!(!store.consume(&state));
    }

    #[test]
    fn test_states_are_unique() {
        let store = InMemoryStateStore::default();

        assert_ne!(store.issue(), store.issue());
    }
}
