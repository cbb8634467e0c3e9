//! capability 문서 파일 관리.
//!
//! 플랫폼별 설정 디렉토리의 `polar_device_capabilities.json`을 로드하고,
//! 파일이 없으면 기본 문서를 기록한다. 로드된 문서는 [`CapabilityConfig`]
//! 포트로 노출된다.

use crate::config::{DeviceCapabilitiesConfig, PolarLinkConfig};
use crate::error::PolarError;
use crate::ports::capabilities::{CapabilityConfig, FileSystemType};
use parking_lot::RwLock;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

/// capability 문서 파일 이름
const CAPABILITIES_FILE_NAME: &str = "polar_device_capabilities.json";

/// 앱 디렉토리 이름
const APP_DIR_NAME: &str = "polarlink";

/// capability 문서 관리자
#[derive(Debug, Clone)]
pub struct CapabilityConfigManager {
    /// 현재 문서 (스레드 안전)
    config: Arc<RwLock<DeviceCapabilitiesConfig>>,
    /// 문서 파일 경로
    config_path: PathBuf,
}

impl CapabilityConfigManager {
    /// 플랫폼 기본 경로에서 문서 로드
    pub fn new() -> Result<Self, PolarError> {
        let config_path = Self::config_dir()?.join(CAPABILITIES_FILE_NAME);
        Self::with_path(config_path)
    }

    /// 런타임 설정의 `capabilities_path`를 따르고, 없으면 플랫폼 기본 경로 사용
    pub fn from_config(config: &PolarLinkConfig) -> Result<Self, PolarError> {
        match &config.capabilities_path {
            Some(path) => Self::with_path(path.clone()),
            None => Self::new(),
        }
    }

    /// 지정된 경로로 관리자 생성
    ///
    /// 파일이 없으면 기본 문서를 생성하고 저장한다.
    pub fn with_path(config_path: PathBuf) -> Result<Self, PolarError> {
        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    PolarError::Config(format!(
                        "설정 디렉토리 생성 실패: {}: {}",
                        parent.display(),
                        e
                    ))
                })?;
                info!("설정 디렉토리 생성: {}", parent.display());
            }
        }

        let config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            let default_config = DeviceCapabilitiesConfig::default_config();
            Self::save_to_file(&config_path, &default_config)?;
            info!("기본 capability 문서 생성: {}", config_path.display());
            default_config
        };

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
        })
    }

    /// 현재 문서 반환 (복제본)
    pub fn get(&self) -> DeviceCapabilitiesConfig {
        self.config.read().clone()
    }

    /// 문서 교체 및 파일 저장
    pub fn update(&self, new_config: DeviceCapabilitiesConfig) -> Result<(), PolarError> {
        Self::save_to_file(&self.config_path, &new_config)?;
        *self.config.write() = new_config;
        debug!("capability 문서 저장 완료: {}", self.config_path.display());
        Ok(())
    }

    /// 파일에서 다시 로드
    pub fn reload(&self) -> Result<(), PolarError> {
        let config = Self::load_from_file(&self.config_path)?;
        *self.config.write() = config;
        info!("capability 문서 다시 로드 완료");
        Ok(())
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// 플랫폼별 설정 디렉토리 경로
    pub fn config_dir() -> Result<PathBuf, PolarError> {
        #[cfg(target_os = "macos")]
        {
            // macOS: ~/Library/Application Support/polarlink/
            let home = std::env::var("HOME")
                .map_err(|_| PolarError::Config("HOME 환경 변수를 찾을 수 없습니다".to_string()))?;
            Ok(PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join(APP_DIR_NAME))
        }

        #[cfg(target_os = "windows")]
        {
            // Windows: %APPDATA%\polarlink\
            let appdata = std::env::var("APPDATA").map_err(|_| {
                PolarError::Config("APPDATA 환경 변수를 찾을 수 없습니다".to_string())
            })?;
            Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
        }

        #[cfg(target_os = "linux")]
        {
            // Linux: ~/.config/polarlink/
            let home = std::env::var("HOME")
                .map_err(|_| PolarError::Config("HOME 환경 변수를 찾을 수 없습니다".to_string()))?;
            Ok(PathBuf::from(home).join(".config").join(APP_DIR_NAME))
        }

        #[cfg(not(any(target_os = "macos", target_os = "windows", target_os = "linux")))]
        {
            tracing::warn!("지원되지 않는 플랫폼, 현재 디렉토리 사용");
            Ok(PathBuf::from(".").join(APP_DIR_NAME))
        }
    }

    fn load_from_file(path: &Path) -> Result<DeviceCapabilitiesConfig, PolarError> {
        let content = fs::read_to_string(path).map_err(|e| {
            PolarError::Config(format!("capability 문서 읽기 실패: {}: {}", path.display(), e))
        })?;

        let config: DeviceCapabilitiesConfig = serde_json::from_str(&content).map_err(|e| {
            PolarError::Config(format!("capability 문서 파싱 실패: {}: {}", path.display(), e))
        })?;

        debug!("capability 문서 로드 완료: {}", path.display());
        Ok(config)
    }

    fn save_to_file(path: &Path, config: &DeviceCapabilitiesConfig) -> Result<(), PolarError> {
        let content = serde_json::to_string_pretty(config)?;

        fs::write(path, content).map_err(|e| {
            PolarError::Config(format!("capability 문서 저장 실패: {}: {}", path.display(), e))
        })?;

        Ok(())
    }
}

impl CapabilityConfig for CapabilityConfigManager {
    fn file_system_type(&self, device_type: &str) -> FileSystemType {
        let result = self.config.read().file_system_type(device_type);
        debug!("file_system_type({device_type}) -> {result:?}");
        result
    }

    fn is_recording_supported(&self, device_type: &str) -> bool {
        self.config.read().is_recording_supported(device_type)
    }

    fn is_firmware_update_supported(&self, device_type: &str) -> bool {
        self.config.read().is_firmware_update_supported(device_type)
    }

    fn is_device_sensor(&self, device_type: &str) -> bool {
        self.config.read().is_device_sensor(device_type)
    }

    fn is_activity_data_supported(&self, device_type: &str) -> bool {
        self.config.read().is_activity_data_supported(device_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DeviceCapabilities;
    use tempfile::TempDir;

    #[test]
    fn creates_default_document_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join(CAPABILITIES_FILE_NAME);

        let manager = CapabilityConfigManager::with_path(path.clone()).unwrap();
        assert!(path.exists());
        assert_eq!(manager.get(), DeviceCapabilitiesConfig::default_config());
        assert_eq!(manager.file_system_type("H10"), FileSystemType::LegacyV1);
    }

    #[test]
    fn update_persists_across_managers() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CAPABILITIES_FILE_NAME);

        let manager = CapabilityConfigManager::with_path(path.clone()).unwrap();
        let mut config = manager.get();
        config.devices.insert(
            "grit x2".to_string(),
            DeviceCapabilities {
                file_system_type: Some("H10_FILE_SYSTEM".to_string()),
                ..Default::default()
            },
        );
        manager.update(config).unwrap();

        let reloaded = CapabilityConfigManager::with_path(path).unwrap();
        assert_eq!(reloaded.file_system_type("Grit X2"), FileSystemType::LegacyV1);
    }

    #[test]
    fn reload_picks_up_external_edits() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CAPABILITIES_FILE_NAME);
        let manager = CapabilityConfigManager::with_path(path.clone()).unwrap();

        fs::write(
            &path,
            r#"{ "defaults": { "fileSystemType": "UNKNOWN", "recordingSupported": true } }"#,
        )
        .unwrap();
        manager.reload().unwrap();

        assert_eq!(manager.file_system_type("anything"), FileSystemType::Unknown);
        assert!(manager.is_recording_supported("anything"));
    }

    #[test]
    fn from_config_uses_configured_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("caps.json");
        let config = PolarLinkConfig {
            capabilities_path: Some(path.clone()),
            ..PolarLinkConfig::default()
        };

        let manager = CapabilityConfigManager::from_config(&config).unwrap();
        assert_eq!(manager.config_path(), path.as_path());
        assert!(path.exists());
    }

    #[test]
    fn malformed_document_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CAPABILITIES_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();

        let result = CapabilityConfigManager::with_path(path);
        assert!(matches!(result, Err(PolarError::Config(_))));
    }
}
