//! 런타임 설정 구조체.
//!
//! 세션 게이트 타이밍, capability 문서/신선도 캐시 경로,
//! 그리고 디바이스 종류별 capability 문서(`polar_device_capabilities.json`)를 정의한다.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::ports::capabilities::{CapabilityConfig, FileSystemType};

/// 최상위 polarlink 설정
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolarLinkConfig {
    /// 세션 준비 게이트 설정
    #[serde(default)]
    pub session: SessionGateConfig,
    /// capability 문서 경로 (없으면 플랫폼 기본 경로)
    #[serde(default)]
    pub capabilities_path: Option<PathBuf>,
    /// 파일 신선도 캐시 저장 경로 (없으면 메모리에만 유지)
    #[serde(default)]
    pub freshness_cache_path: Option<PathBuf>,
}

// ============================================================
// 세션 게이트 설정
// ============================================================

/// 서비스 탐색 대기 설정
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionGateConfig {
    /// 서비스 탐색 대기 상한 (밀리초)
    #[serde(default = "default_discovery_timeout_ms")]
    pub discovery_timeout_ms: u64,
    /// 탐색 완료 여부 확인 주기 (밀리초)
    #[serde(default = "default_discovery_poll_interval_ms")]
    pub discovery_poll_interval_ms: u64,
}

impl SessionGateConfig {
    pub fn discovery_timeout(&self) -> Duration {
        Duration::from_millis(self.discovery_timeout_ms)
    }

    pub fn discovery_poll_interval(&self) -> Duration {
        // 0이면 busy loop가 되므로 최소 1ms
        Duration::from_millis(self.discovery_poll_interval_ms.max(1))
    }
}

impl Default for SessionGateConfig {
    fn default() -> Self {
        Self {
            discovery_timeout_ms: default_discovery_timeout_ms(),
            discovery_poll_interval_ms: default_discovery_poll_interval_ms(),
        }
    }
}

fn default_discovery_timeout_ms() -> u64 {
    10_000
}

fn default_discovery_poll_interval_ms() -> u64 {
    100
}

// ============================================================
// 디바이스 capability 문서
// ============================================================

/// capability 문서 전체
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceCapabilitiesConfig {
    #[serde(default = "default_version")]
    pub version: String,
    /// 디바이스 종류(소문자) → 개별 capability
    #[serde(default)]
    pub devices: HashMap<String, DeviceCapabilities>,
    /// 개별 항목이 없을 때 사용하는 기본값
    #[serde(default)]
    pub defaults: DefaultsSection,
}

/// 디바이스별 capability (지정되지 않은 필드는 기본값 사용)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceCapabilities {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_system_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recording_supported: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firmware_update_supported: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_device_sensor: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_data_supported: Option<bool>,
}

/// 기본 capability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefaultsSection {
    #[serde(default = "default_file_system_type")]
    pub file_system_type: String,
    #[serde(default)]
    pub recording_supported: bool,
    #[serde(default = "default_true")]
    pub firmware_update_supported: bool,
    #[serde(default)]
    pub is_device_sensor: bool,
    #[serde(default)]
    pub activity_data_supported: bool,
}

impl Default for DefaultsSection {
    fn default() -> Self {
        Self {
            file_system_type: default_file_system_type(),
            recording_supported: false,
            firmware_update_supported: true,
            is_device_sensor: false,
            activity_data_supported: false,
        }
    }
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_file_system_type() -> String {
    "POLAR_FILE_SYSTEM_V2".to_string()
}

fn default_true() -> bool {
    true
}

impl DeviceCapabilitiesConfig {
    /// 파일이 없을 때 기록하는 기본 문서
    pub fn default_config() -> Self {
        let sensor = |fs: &str| DeviceCapabilities {
            file_system_type: Some(fs.to_string()),
            recording_supported: Some(true),
            firmware_update_supported: None,
            is_device_sensor: Some(true),
            activity_data_supported: None,
        };

        let mut devices = HashMap::new();
        devices.insert("h10".to_string(), sensor("H10_FILE_SYSTEM"));
        devices.insert(
            "oh1".to_string(),
            DeviceCapabilities {
                recording_supported: Some(false),
                ..sensor("POLAR_FILE_SYSTEM_V2")
            },
        );
        devices.insert("sense".to_string(), sensor("POLAR_FILE_SYSTEM_V2"));
        devices.insert(
            "360".to_string(),
            DeviceCapabilities {
                activity_data_supported: Some(true),
                ..sensor("POLAR_FILE_SYSTEM_V2")
            },
        );

        Self {
            version: default_version(),
            devices,
            defaults: DefaultsSection::default(),
        }
    }

    fn device(&self, device_type: &str) -> Option<&DeviceCapabilities> {
        self.devices.get(&device_type.to_lowercase())
    }
}

impl Default for DeviceCapabilitiesConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

impl CapabilityConfig for DeviceCapabilitiesConfig {
    fn file_system_type(&self, device_type: &str) -> FileSystemType {
        let value = self
            .device(device_type)
            .and_then(|d| d.file_system_type.as_deref())
            .unwrap_or(&self.defaults.file_system_type);
        FileSystemType::from_config_value(value)
    }

    fn is_recording_supported(&self, device_type: &str) -> bool {
        self.device(device_type)
            .and_then(|d| d.recording_supported)
            .unwrap_or(self.defaults.recording_supported)
    }

    fn is_firmware_update_supported(&self, device_type: &str) -> bool {
        self.device(device_type)
            .and_then(|d| d.firmware_update_supported)
            .unwrap_or(self.defaults.firmware_update_supported)
    }

    fn is_device_sensor(&self, device_type: &str) -> bool {
        self.device(device_type)
            .and_then(|d| d.is_device_sensor)
            .unwrap_or(self.defaults.is_device_sensor)
    }

    fn is_activity_data_supported(&self, device_type: &str) -> bool {
        self.device(device_type)
            .and_then(|d| d.activity_data_supported)
            .unwrap_or(self.defaults.activity_data_supported)
    }
}
