//! 오프라인 레코딩 모델.
//!
//! 디바이스에 저장된 센서 레코딩은 여러 하위 레코딩(청크)으로 나뉘어 전달된다.
//! 청크는 정확히 하나의 모달리티에 속하며, 같은 모달리티의 청크는
//! 하나의 [`RecordingResult`]로 병합된다.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// 센서 모달리티
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    Acceleration,
    Gyroscope,
    Magnetometer,
    Ppg,
    Ppi,
    HeartRate,
    Temperature,
    SkinTemperature,
}

impl Modality {
    /// 첫 청크에 센서 설정이 필수인지
    pub fn requires_settings(self) -> bool {
        matches!(
            self,
            Modality::Acceleration | Modality::Gyroscope | Modality::Magnetometer | Modality::Ppg
        )
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Modality::Acceleration => "ACC",
            Modality::Gyroscope => "GYRO",
            Modality::Magnetometer => "MAG",
            Modality::Ppg => "PPG",
            Modality::Ppi => "PPI",
            Modality::HeartRate => "HR",
            Modality::Temperature => "TEMPERATURE",
            Modality::SkinTemperature => "SKIN_TEMPERATURE",
        };
        f.write_str(name)
    }
}

/// 센서 설정 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettingType {
    SampleRate,
    Resolution,
    Range,
    RangeMilliUnit,
    Channels,
    Factor,
}

/// 센서 설정: 설정 종류별 허용 값 집합
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorSetting {
    pub settings: BTreeMap<SettingType, BTreeSet<u32>>,
}

impl SensorSetting {
    pub fn new() -> Self {
        Self::default()
    }

    /// 값 하나를 추가한 설정 반환
    pub fn with(mut self, kind: SettingType, value: u32) -> Self {
        self.settings.entry(kind).or_default().insert(value);
        self
    }

    pub fn values(&self, kind: SettingType) -> Option<&BTreeSet<u32>> {
        self.settings.get(&kind)
    }
}

/// 3축 가속도 샘플 (mG)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccSample {
    /// 나노초 타임스탬프
    pub timestamp: u64,
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

/// 3축 자이로 샘플 (deg/s)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GyroSample {
    pub timestamp: u64,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// 3축 지자기 샘플 (Gauss)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagSample {
    pub timestamp: u64,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// PPG 데이터 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PpgDataType {
    Ppg3Ambient1,
    Ppg16,
    Ppg24,
    Unknown,
}

/// PPG 샘플: 채널별 원시 값
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PpgSample {
    pub timestamp: u64,
    pub channel_samples: Vec<i32>,
}

/// PP 간격 샘플
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PpiSample {
    pub hr: u16,
    pub pp_in_ms: u16,
    pub pp_error_estimate_ms: u16,
    pub blocker: bool,
    pub skin_contact_status: bool,
    pub skin_contact_supported: bool,
}

/// 심박 샘플
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HrSample {
    pub hr: u16,
    #[serde(default)]
    pub rr_intervals_ms: Vec<u16>,
    pub contact_status: bool,
    pub contact_status_supported: bool,
}

/// 온도 샘플 (섭씨)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSample {
    pub timestamp: u64,
    pub temperature_celsius: f32,
}

/// 하위 레코딩 청크의 데이터: 모달리티별 닫힌 태그 유니온
#[derive(Debug, Clone, PartialEq)]
pub enum ChunkData {
    Acceleration(Vec<AccSample>),
    Gyroscope(Vec<GyroSample>),
    Magnetometer(Vec<MagSample>),
    Ppg {
        samples: Vec<PpgSample>,
        ppg_type: PpgDataType,
    },
    Ppi(Vec<PpiSample>),
    HeartRate(Vec<HrSample>),
    Temperature(Vec<TemperatureSample>),
    SkinTemperature(Vec<TemperatureSample>),
    /// 디코더가 인식했지만 병합할 수 없는 데이터 (예: 압력, 위치)
    Unsupported(String),
}

impl ChunkData {
    /// 데이터의 모달리티. `Unsupported`는 `None`.
    pub fn modality(&self) -> Option<Modality> {
        match self {
            ChunkData::Acceleration(_) => Some(Modality::Acceleration),
            ChunkData::Gyroscope(_) => Some(Modality::Gyroscope),
            ChunkData::Magnetometer(_) => Some(Modality::Magnetometer),
            ChunkData::Ppg { .. } => Some(Modality::Ppg),
            ChunkData::Ppi(_) => Some(Modality::Ppi),
            ChunkData::HeartRate(_) => Some(Modality::HeartRate),
            ChunkData::Temperature(_) => Some(Modality::Temperature),
            ChunkData::SkinTemperature(_) => Some(Modality::SkinTemperature),
            ChunkData::Unsupported(_) => None,
        }
    }

    pub fn sample_count(&self) -> usize {
        match self {
            ChunkData::Acceleration(s) => s.len(),
            ChunkData::Gyroscope(s) => s.len(),
            ChunkData::Magnetometer(s) => s.len(),
            ChunkData::Ppg { samples, .. } => samples.len(),
            ChunkData::Ppi(s) => s.len(),
            ChunkData::HeartRate(s) => s.len(),
            ChunkData::Temperature(s) | ChunkData::SkinTemperature(s) => s.len(),
            ChunkData::Unsupported(_) => 0,
        }
    }
}

/// 디바이스에서 가져온 하위 레코딩 하나
#[derive(Debug, Clone, PartialEq)]
pub struct OfflineChunk {
    /// 하위 레코딩 시작 시각
    pub start_time: NaiveDateTime,
    /// 레코딩 설정 (모달리티에 따라 필수)
    pub settings: Option<SensorSetting>,
    pub data: ChunkData,
}

/// 병합된 오프라인 레코딩
#[derive(Debug, Clone, PartialEq)]
pub enum RecordingResult {
    Acceleration {
        samples: Vec<AccSample>,
        start_time: NaiveDateTime,
        settings: SensorSetting,
    },
    Gyroscope {
        samples: Vec<GyroSample>,
        start_time: NaiveDateTime,
        settings: SensorSetting,
    },
    Magnetometer {
        samples: Vec<MagSample>,
        start_time: NaiveDateTime,
        settings: SensorSetting,
    },
    Ppg {
        samples: Vec<PpgSample>,
        ppg_type: PpgDataType,
        start_time: NaiveDateTime,
        settings: SensorSetting,
    },
    Ppi {
        samples: Vec<PpiSample>,
        start_time: NaiveDateTime,
    },
    HeartRate {
        samples: Vec<HrSample>,
        start_time: NaiveDateTime,
    },
    Temperature {
        samples: Vec<TemperatureSample>,
        start_time: NaiveDateTime,
    },
    SkinTemperature {
        samples: Vec<TemperatureSample>,
        start_time: NaiveDateTime,
    },
}

impl RecordingResult {
    pub fn modality(&self) -> Modality {
        match self {
            RecordingResult::Acceleration { .. } => Modality::Acceleration,
            RecordingResult::Gyroscope { .. } => Modality::Gyroscope,
            RecordingResult::Magnetometer { .. } => Modality::Magnetometer,
            RecordingResult::Ppg { .. } => Modality::Ppg,
            RecordingResult::Ppi { .. } => Modality::Ppi,
            RecordingResult::HeartRate { .. } => Modality::HeartRate,
            RecordingResult::Temperature { .. } => Modality::Temperature,
            RecordingResult::SkinTemperature { .. } => Modality::SkinTemperature,
        }
    }

    pub fn start_time(&self) -> NaiveDateTime {
        match self {
            RecordingResult::Acceleration { start_time, .. }
            | RecordingResult::Gyroscope { start_time, .. }
            | RecordingResult::Magnetometer { start_time, .. }
            | RecordingResult::Ppg { start_time, .. }
            | RecordingResult::Ppi { start_time, .. }
            | RecordingResult::HeartRate { start_time, .. }
            | RecordingResult::Temperature { start_time, .. }
            | RecordingResult::SkinTemperature { start_time, .. } => *start_time,
        }
    }

    /// 센서 설정 (설정이 없는 모달리티는 `None`)
    pub fn settings(&self) -> Option<&SensorSetting> {
        match self {
            RecordingResult::Acceleration { settings, .. }
            | RecordingResult::Gyroscope { settings, .. }
            | RecordingResult::Magnetometer { settings, .. }
            | RecordingResult::Ppg { settings, .. } => Some(settings),
            _ => None,
        }
    }

    pub fn sample_count(&self) -> usize {
        match self {
            RecordingResult::Acceleration { samples, .. } => samples.len(),
            RecordingResult::Gyroscope { samples, .. } => samples.len(),
            RecordingResult::Magnetometer { samples, .. } => samples.len(),
            RecordingResult::Ppg { samples, .. } => samples.len(),
            RecordingResult::Ppi { samples, .. } => samples.len(),
            RecordingResult::HeartRate { samples, .. } => samples.len(),
            RecordingResult::Temperature { samples, .. }
            | RecordingResult::SkinTemperature { samples, .. } => samples.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_required_only_for_motion_and_ppg() {
        assert!(Modality::Acceleration.requires_settings());
        assert!(Modality::Ppg.requires_settings());
        assert!(!Modality::Ppi.requires_settings());
        assert!(!Modality::SkinTemperature.requires_settings());
    }

    #[test]
    fn unsupported_chunk_has_no_modality() {
        assert_eq!(ChunkData::Unsupported("PRESSURE".into()).modality(), None);
        assert_eq!(
            ChunkData::Temperature(vec![]).modality(),
            Some(Modality::Temperature)
        );
    }

    #[test]
    fn sensor_setting_builder_collects_values() {
        let setting = SensorSetting::new()
            .with(SettingType::SampleRate, 52)
            .with(SettingType::SampleRate, 104)
            .with(SettingType::Range, 8);
        assert_eq!(setting.values(SettingType::SampleRate).map(|v| v.len()), Some(2));
        assert!(setting.values(SettingType::Channels).is_none());
    }
}
