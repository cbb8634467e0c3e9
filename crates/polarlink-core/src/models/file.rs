//! 디바이스 파일 시스템 모델.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 디렉토리 목록 응답의 항목 하나
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    /// 항목 이름 (`/`로 끝나면 하위 디렉토리)
    pub name: String,
    /// 바이트 크기
    pub size: u64,
    /// 마지막 수정 시각 (디바이스가 보고한 경우)
    #[serde(default)]
    pub modified: Option<NaiveDateTime>,
}

impl DirectoryEntry {
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            modified: None,
        }
    }

    pub fn is_directory(&self) -> bool {
        self.name.ends_with('/')
    }
}

/// 탐색 결과: 해석된 전체 경로와 크기
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RemoteFile {
    pub path: String,
    pub size: u64,
}

impl RemoteFile {
    pub fn is_directory(&self) -> bool {
        self.path.ends_with('/')
    }
}
