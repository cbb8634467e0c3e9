//! 오프라인 레코딩 누적기.
//!
//! 모달리티별 버퍼 하나에 샘플을 append한다. 첫 청크가 시작 시각과
//! 센서 설정을 결정하고, 이후 청크는 샘플만 추가한다.

use chrono::NaiveDateTime;
use futures::TryStream;
use futures::TryStreamExt;
use polarlink_core::error::PolarError;
use polarlink_core::models::recording::{
    AccSample, ChunkData, GyroSample, HrSample, MagSample, Modality, OfflineChunk, PpgDataType,
    PpgSample, PpiSample, RecordingResult, SensorSetting, TemperatureSample,
};
use tracing::{debug, warn};

/// 모달리티 하나의 병합 버퍼
#[derive(Debug)]
struct ModalityBuffer<T> {
    samples: Vec<T>,
    start_time: NaiveDateTime,
    settings: Option<SensorSetting>,
}

impl<T> ModalityBuffer<T> {
    /// 첫 청크면 버퍼 생성, 아니면 샘플만 이어 붙임
    fn merge(
        slot: &mut Option<Self>,
        modality: Modality,
        samples: Vec<T>,
        start_time: NaiveDateTime,
        settings: Option<SensorSetting>,
    ) -> Result<(), PolarError> {
        match slot {
            Some(buffer) => {
                buffer.samples.extend(samples);
            }
            None => {
                if modality.requires_settings() && settings.is_none() {
                    return Err(PolarError::MissingSettings(modality.to_string()));
                }
                *slot = Some(Self {
                    samples,
                    start_time,
                    settings,
                });
            }
        }
        Ok(())
    }

    /// 설정 필수 모달리티는 첫 청크에서 검증되므로 항상 `Some`
    fn into_settings(self) -> (Vec<T>, NaiveDateTime, SensorSetting) {
        (
            self.samples,
            self.start_time,
            self.settings.unwrap_or_default(),
        )
    }
}

/// 오프라인 레코딩 누적기
///
/// 하나의 오프라인 레코딩 조회에 대해 생성되고, 단일 호출자만 변경한다.
#[derive(Debug, Default)]
pub struct OfflineAccumulator {
    acc: Option<ModalityBuffer<AccSample>>,
    gyro: Option<ModalityBuffer<GyroSample>>,
    mag: Option<ModalityBuffer<MagSample>>,
    ppg: Option<ModalityBuffer<PpgSample>>,
    /// 가장 최근 청크의 PPG 종류
    ppg_type: Option<PpgDataType>,
    ppi: Option<ModalityBuffer<PpiSample>>,
    hr: Option<ModalityBuffer<HrSample>>,
    temperature: Option<ModalityBuffer<TemperatureSample>>,
    skin_temperature: Option<ModalityBuffer<TemperatureSample>>,
}

impl OfflineAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 하위 레코딩 청크 하나를 병합
    ///
    /// 지원하지 않는 데이터는 `UnsupportedDataType`, 설정이 필요한 모달리티의
    /// 첫 청크에 설정이 없으면 `MissingSettings`로 즉시 실패한다.
    pub fn accumulate(&mut self, chunk: OfflineChunk) -> Result<(), PolarError> {
        let OfflineChunk {
            start_time,
            settings,
            data,
        } = chunk;

        if let Some(modality) = data.modality() {
            debug!(
                "오프라인 청크 병합: {modality}, 샘플 {}개",
                data.sample_count()
            );
        }

        match data {
            ChunkData::Acceleration(samples) => {
                ModalityBuffer::merge(&mut self.acc, Modality::Acceleration, samples, start_time, settings)
            }
            ChunkData::Gyroscope(samples) => {
                ModalityBuffer::merge(&mut self.gyro, Modality::Gyroscope, samples, start_time, settings)
            }
            ChunkData::Magnetometer(samples) => {
                ModalityBuffer::merge(&mut self.mag, Modality::Magnetometer, samples, start_time, settings)
            }
            ChunkData::Ppg { samples, ppg_type } => {
                ModalityBuffer::merge(&mut self.ppg, Modality::Ppg, samples, start_time, settings)?;
                self.ppg_type = Some(ppg_type);
                Ok(())
            }
            ChunkData::Ppi(samples) => {
                ModalityBuffer::merge(&mut self.ppi, Modality::Ppi, samples, start_time, None)
            }
            ChunkData::HeartRate(samples) => {
                ModalityBuffer::merge(&mut self.hr, Modality::HeartRate, samples, start_time, None)
            }
            ChunkData::Temperature(samples) => {
                ModalityBuffer::merge(&mut self.temperature, Modality::Temperature, samples, start_time, None)
            }
            ChunkData::SkinTemperature(samples) => ModalityBuffer::merge(
                &mut self.skin_temperature,
                Modality::SkinTemperature,
                samples,
                start_time,
                None,
            ),
            ChunkData::Unsupported(kind) => Err(PolarError::UnsupportedDataType(kind)),
        }
    }

    /// 데이터가 누적된 모달리티 목록 (우선순위 순)
    pub fn populated_modalities(&self) -> Vec<Modality> {
        [
            (self.ppi.is_some(), Modality::Ppi),
            (self.ppg.is_some(), Modality::Ppg),
            (self.acc.is_some(), Modality::Acceleration),
            (self.gyro.is_some(), Modality::Gyroscope),
            (self.mag.is_some(), Modality::Magnetometer),
            (self.hr.is_some(), Modality::HeartRate),
            (self.temperature.is_some(), Modality::Temperature),
            (self.skin_temperature.is_some(), Modality::SkinTemperature),
        ]
        .into_iter()
        .filter_map(|(populated, modality)| populated.then_some(modality))
        .collect()
    }

    /// 병합 결과 반환
    ///
    /// 청크가 없었으면 `None`. 여러 모달리티가 누적된 경우
    /// PPI > PPG > ACC > GYRO > MAG > HR > TEMPERATURE > SKIN_TEMPERATURE
    /// 순서의 첫 모달리티만 반환하고 나머지는 버려진다.
    pub fn finalize(self) -> Option<RecordingResult> {
        let populated = self.populated_modalities();
        if populated.len() > 1 {
            warn!(
                "오프라인 레코딩에 모달리티 {}개 누적됨, {}만 반환하고 {:?} 폐기",
                populated.len(),
                populated[0],
                &populated[1..]
            );
        }

        if let Some(buffer) = self.ppi {
            return Some(RecordingResult::Ppi {
                samples: buffer.samples,
                start_time: buffer.start_time,
            });
        }
        if let Some(buffer) = self.ppg {
            let (samples, start_time, settings) = buffer.into_settings();
            return Some(RecordingResult::Ppg {
                samples,
                ppg_type: self.ppg_type.unwrap_or(PpgDataType::Unknown),
                start_time,
                settings,
            });
        }
        if let Some(buffer) = self.acc {
            let (samples, start_time, settings) = buffer.into_settings();
            return Some(RecordingResult::Acceleration {
                samples,
                start_time,
                settings,
            });
        }
        if let Some(buffer) = self.gyro {
            let (samples, start_time, settings) = buffer.into_settings();
            return Some(RecordingResult::Gyroscope {
                samples,
                start_time,
                settings,
            });
        }
        if let Some(buffer) = self.mag {
            let (samples, start_time, settings) = buffer.into_settings();
            return Some(RecordingResult::Magnetometer {
                samples,
                start_time,
                settings,
            });
        }
        if let Some(buffer) = self.hr {
            return Some(RecordingResult::HeartRate {
                samples: buffer.samples,
                start_time: buffer.start_time,
            });
        }
        if let Some(buffer) = self.temperature {
            return Some(RecordingResult::Temperature {
                samples: buffer.samples,
                start_time: buffer.start_time,
            });
        }
        self.skin_temperature
            .map(|buffer| RecordingResult::SkinTemperature {
                samples: buffer.samples,
                start_time: buffer.start_time,
            })
    }
}

/// 청크 스트림을 끝까지 소비해 하나의 레코딩으로 병합
///
/// 스트림 에러나 병합 에러가 나면 즉시 중단한다.
pub async fn accumulate_stream<S>(chunks: S) -> Result<Option<RecordingResult>, PolarError>
where
    S: TryStream<Ok = OfflineChunk, Error = PolarError>,
{
    let accumulator = chunks
        .try_fold(OfflineAccumulator::new(), |mut acc, chunk| async move {
            acc.accumulate(chunk)?;
            Ok::<_, PolarError>(acc)
        })
        .await?;
    Ok(accumulator.finalize())
}
