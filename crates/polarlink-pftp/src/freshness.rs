//! 파일 신선도 캐시.
//!
//! [`FreshnessStore`] 포트의 기본 구현. 파일 키(디바이스 식별자 + 경로 등)별
//! 마지막으로 처리한 메타데이터를 기억하고, 경로가 주어지면 JSON 파일에 저장한다.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;
use polarlink_core::config::PolarLinkConfig;
use polarlink_core::error::PolarError;
use polarlink_core::models::file::DirectoryEntry;
use polarlink_core::ports::freshness::{DateWindow, FileMeta, FreshnessStore};
use tracing::{debug, info, warn};

use crate::path::join;

/// 메모리 + 선택적 JSON 파일 신선도 캐시
#[derive(Debug, Default)]
pub struct FreshnessCache {
    entries: RwLock<HashMap<String, FileMeta>>,
    path: Option<PathBuf>,
}

impl FreshnessCache {
    /// 메모리에만 유지하는 캐시
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// 런타임 설정의 `freshness_cache_path`가 있으면 파일 캐시, 없으면 메모리 캐시
    pub fn from_config(config: &PolarLinkConfig) -> Result<Self, PolarError> {
        match &config.freshness_cache_path {
            Some(path) => Self::open(path),
            None => Ok(Self::in_memory()),
        }
    }

    /// 파일에 저장되는 캐시. 파일이 있으면 불러온다.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, PolarError> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let entries: HashMap<String, FileMeta> = serde_json::from_str(&content)?;
            info!("신선도 캐시 로드: {} ({}개)", path.display(), entries.len());
            entries
        } else {
            HashMap::new()
        };
        Ok(Self {
            entries: RwLock::new(entries),
            path: Some(path),
        })
    }

    pub fn get(&self, key: &str) -> Option<FileMeta> {
        self.entries.read().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// 모든 항목 삭제 (파일에도 반영)
    pub fn clear(&self) -> Result<(), PolarError> {
        self.entries.write().clear();
        self.persist()
    }

    /// 현재 내용을 파일에 저장. 메모리 캐시면 아무것도 하지 않는다.
    pub fn persist(&self) -> Result<(), PolarError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        let content = serde_json::to_string_pretty(&*self.entries.read())?;
        write_file(path, &content)?;
        debug!("신선도 캐시 저장: {}", path.display());
        Ok(())
    }
}

fn write_file(path: &Path, content: &str) -> Result<(), PolarError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;
    Ok(())
}

impl FreshnessStore for FreshnessCache {
    fn should_fetch(&self, key: &str, current: &FileMeta, window: &DateWindow) -> bool {
        let entries = self.entries.read();
        let Some(cached) = entries.get(key) else {
            return true;
        };
        if cached.size != current.size {
            return true;
        }
        if let (Some(now), Some(before)) = (current.modified, cached.modified) {
            if now > before {
                return true;
            }
        }
        // 요청 범위 안의 날짜 파일은 항상 다시 받는다
        cached.date.is_some_and(|date| window.contains(date))
    }

    fn update(&self, key: &str, meta: FileMeta) {
        self.entries.write().insert(key.to_string(), meta);
        if let Err(e) = self.persist() {
            warn!("신선도 캐시 저장 실패: {e}");
        }
    }
}

/// 디렉토리 목록에서 다시 받아야 하는 파일만 골라냄
///
/// 키는 `key_prefix + directory + name`. 하위 디렉토리 항목은 제외한다.
pub fn files_to_download<'a>(
    store: &dyn FreshnessStore,
    key_prefix: &str,
    directory: &str,
    entries: &'a [DirectoryEntry],
    window: &DateWindow,
) -> Vec<&'a DirectoryEntry> {
    entries
        .iter()
        .filter(|entry| !entry.is_directory())
        .filter(|entry| {
            let key = format!("{key_prefix}{}", join(directory, &entry.name));
            let mut meta = FileMeta::new(entry.size);
            meta.modified = entry.modified;
            store.should_fetch(&key, &meta, window)
        })
        .collect()
}
