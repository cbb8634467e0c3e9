//! 파일 신선도 저장소 포트.
//!
//! 동기화 시 이미 받은 파일을 다시 내려받지 않도록 파일별 메타데이터를 기억한다.
//! 구현: `polarlink-pftp::freshness::FreshnessCache`

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// 파일 메타데이터
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub size: u64,
    #[serde(default)]
    pub modified: Option<NaiveDateTime>,
    /// 파일 내용이 속한 날짜 (파싱 후에만 알 수 있음)
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

impl FileMeta {
    pub fn new(size: u64) -> Self {
        Self {
            size,
            modified: None,
            date: None,
        }
    }

    pub fn with_modified(mut self, modified: NaiveDateTime) -> Self {
        self.modified = Some(modified);
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }
}

/// 요청된 날짜 범위 (양 끝 포함)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateWindow {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

/// 파일 키 → 메타데이터 저장소
pub trait FreshnessStore: Send + Sync {
    /// 현재 메타데이터 기준으로 다시 받아야 하는지
    fn should_fetch(&self, key: &str, current: &FileMeta, window: &DateWindow) -> bool;

    /// 파일을 성공적으로 처리한 뒤 메타데이터 기록
    fn update(&self, key: &str, meta: FileMeta);
}
