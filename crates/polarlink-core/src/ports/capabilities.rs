//! 디바이스 capability 포트.
//!
//! 구현: [`crate::config_manager::CapabilityConfigManager`] (JSON 문서),
//! 또는 테스트용 고정 구현.

use serde::{Deserialize, Serialize};

/// 디바이스가 지원하는 파일 시스템 세대
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileSystemType {
    /// 알 수 없음 (설정 미초기화 포함)
    #[serde(rename = "UNKNOWN_FILE_SYSTEM")]
    Unknown,
    /// 1세대 (H10 계열): 디렉토리 목록 미지원
    #[serde(rename = "H10_FILE_SYSTEM")]
    LegacyV1,
    /// 트리 구조 2세대
    #[serde(rename = "POLAR_FILE_SYSTEM_V2")]
    TreeV2,
}

impl FileSystemType {
    /// capability 문서의 문자열 값 해석. 모르는 값은 `Unknown`.
    pub fn from_config_value(value: &str) -> Self {
        match value {
            "H10_FILE_SYSTEM" => FileSystemType::LegacyV1,
            "POLAR_FILE_SYSTEM_V2" => FileSystemType::TreeV2,
            _ => FileSystemType::Unknown,
        }
    }

    pub fn supports_directory_listing(self) -> bool {
        matches!(self, FileSystemType::TreeV2)
    }
}

/// 디바이스 종류별 기능 조회
pub trait CapabilityConfig: Send + Sync {
    fn file_system_type(&self, device_type: &str) -> FileSystemType;

    fn is_recording_supported(&self, device_type: &str) -> bool;

    fn is_firmware_update_supported(&self, device_type: &str) -> bool;

    fn is_device_sensor(&self, device_type: &str) -> bool;

    fn is_activity_data_supported(&self, device_type: &str) -> bool;
}
