//! D2H 알림 구독 및 오프라인 레코딩 병합 통합 테스트.

mod common;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use common::{empty_api, fixture, DEVICE_ID};
use futures::stream::{self, StreamExt};
use polarlink_core::error::PolarError;
use polarlink_core::models::notification::NotificationKind;
use polarlink_core::models::recording::{
    AccSample, ChunkData, Modality, OfflineChunk, SensorSetting, SettingType,
};
use polarlink_core::ports::transport::TransportError;
use polarlink_pftp::notifications::NotificationPayload;
use polarlink_pftp::proto::notification::PbPFtpTrainingSessionStatus;
use prost::Message;

#[tokio::test]
async fn notification_stream_filters_unknown_ids() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("polarlink_pftp=debug")
        .with_test_writer()
        .try_init();

    let f = fixture("Sense");
    f.pftp.push_notification(42, vec![1, 2, 3]);
    f.pftp.push_notification(
        5,
        PbPFtpTrainingSessionStatus {
            inprogress: Some(true),
        }
        .encode_to_vec(),
    );
    f.pftp.push_notification(12, Vec::new());

    let events: Vec<_> = f
        .api
        .observe_notifications(DEVICE_ID)
        .await
        .unwrap()
        .take(2)
        .collect()
        .await;

    let first = events[0].as_ref().unwrap();
    assert_eq!(first.kind, NotificationKind::TrainingSessionStatus);
    assert_eq!(
        first.decoded_payload,
        Some(NotificationPayload::TrainingSessionStatus(
            PbPFtpTrainingSessionStatus {
                inprogress: Some(true),
            }
        ))
    );
    let second = events[1].as_ref().unwrap();
    assert_eq!(second.kind, NotificationKind::StopGpsMeasurement);
    assert!(second.decoded_payload.is_none());
}

#[tokio::test]
async fn notification_stream_ends_after_disconnect() {
    let f = fixture("Sense");
    f.pftp.push_notification(2, Vec::new());
    f.pftp.push_notification_error(TransportError::Disconnected);

    let events: Vec<_> = f
        .api
        .observe_notifications(DEVICE_ID)
        .await
        .unwrap()
        .collect()
        .await;

    assert_eq!(events.len(), 2);
    assert_matches!(events[1], Err(PolarError::DeviceDisconnected));
}

#[tokio::test]
async fn notifications_need_a_session() {
    assert_matches!(
        empty_api().observe_notifications(DEVICE_ID).await.map(|_| ()),
        Err(PolarError::DeviceNotFound(_))
    );
}

fn acc_chunk(hour: u32, first: u64, count: u64, settings: Option<SensorSetting>) -> OfflineChunk {
    OfflineChunk {
        start_time: NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap(),
        settings,
        data: ChunkData::Acceleration(
            (first..first + count)
                .map(|timestamp| AccSample {
                    timestamp,
                    x: 1,
                    y: 2,
                    z: 3,
                })
                .collect(),
        ),
    }
}

#[tokio::test]
async fn offline_recording_merges_sub_recordings() {
    let f = fixture("Sense");
    let settings = SensorSetting::new().with(SettingType::SampleRate, 52);
    let chunks = stream::iter(vec![
        Ok::<_, PolarError>(acc_chunk(10, 0, 100, Some(settings.clone()))),
        Ok(acc_chunk(11, 100, 50, None)),
        Ok(acc_chunk(12, 150, 25, None)),
    ]);

    let recording = f
        .api
        .fetch_offline_recording(DEVICE_ID, chunks)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(recording.modality(), Modality::Acceleration);
    assert_eq!(recording.sample_count(), 175);
    assert_eq!(recording.settings(), Some(&settings));
    assert_eq!(recording.start_time().to_string(), "2025-01-01 10:00:00");
}

#[tokio::test]
async fn offline_recording_missing_settings() {
    let f = fixture("Sense");
    let chunks = stream::iter(vec![Ok::<_, PolarError>(acc_chunk(10, 0, 10, None))]);

    assert_matches!(
        f.api.fetch_offline_recording(DEVICE_ID, chunks).await,
        Err(PolarError::MissingSettings(_))
    );
}

#[tokio::test]
async fn offline_recording_requires_connected_device() {
    let chunks = stream::iter(Vec::<Result<OfflineChunk, PolarError>>::new());
    assert_matches!(
        empty_api().fetch_offline_recording(DEVICE_ID, chunks).await,
        Err(PolarError::DeviceNotFound(_))
    );
}
