//! # 시간 유틸리티
//!
//! 토큰 응답의 절대 만료 시각(`expires_at`)을 파싱하고
//! 상대 유효 시간(초)으로 변환합니다.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

/// 타임존 표기가 없는 타임스탬프에 시도할 형식들 (UTC 로 간주)
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// ISO-8601 타임스탬프를 UTC 시각으로 파싱합니다.
///
/// RFC 3339 형식(오프셋 포함)을 먼저 시도하고, 실패하면
/// 오프셋 없는 형식을 UTC 로 해석합니다.
///
/// # 예제
/// ```rust,ignore
/// use crate::utils::time_utils::parse_utc_timestamp;
///
/// assert!(parse_utc_timestamp("2026-10-18T12:00:00Z").is_some());
/// assert!(parse_utc_timestamp("2026-10-18T14:00:00+02:00").is_some());
/// assert!(parse_utc_timestamp("2026-10-18 12:00:00").is_some());
/// assert!(parse_utc_timestamp("tomorrow").is_none());
/// ```
pub fn parse_utc_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
}

/// `expires_at` 필드를 위한 serde deserializer
///
/// 파싱할 수 없는 타임스탬프는 역직렬화 에러가 됩니다.
pub fn deserialize_utc_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_utc_timestamp(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid ISO-8601 timestamp: {}", raw))
    })
}

/// 기준 시각(`now`)부터 만료 시각까지 남은 시간을 초 단위로 계산합니다.
///
/// 이미 만료된 토큰은 0 이하의 값을 그대로 반환합니다.
pub fn seconds_until(expires_at: &DateTime<Utc>, now: &DateTime<Utc>) -> i64 {
    expires_at.signed_duration_since(*now).num_seconds()
}

/// 현재 UTC 시각 기준으로 만료까지 남은 초를 계산합니다.
pub fn calculate_expires_in(expires_at: &DateTime<Utc>) -> i64 {
    seconds_until(expires_at, &Utc::now())
}
