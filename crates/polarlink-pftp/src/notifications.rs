//! D2H 알림 역다중화.
//!
//! 전송 계층의 끝나지 않는 `(id, bytes)` 피드를 타입이 있는
//! [`NotificationEvent`] 스트림으로 바꾼다. 모르는 ID는 버리고,
//! 파라미터 디코딩은 최선 노력이며, `required` 필드가 빠진 메시지는
//! 디코딩 실패로 본다.

use futures::stream::{self, BoxStream, StreamExt};
use polarlink_core::error::PolarError;
use polarlink_core::models::notification::NotificationKind;
use polarlink_core::ports::transport::{RawNotification, TransportError};
use prost::Message;
use tracing::{debug, warn};

use crate::codec::map_transport_error;
use crate::proto::notification::{
    PbPFtpAutoSyncStatusParams, PbPFtpFilesystemModifiedParams, PbPFtpInactivityAlert,
    PbPFtpSyncRequiredParams, PbPFtpTrainingSessionStatus, PbPftpDhExerciseStatus,
    PbPftpDhMediaControlCommand, PbPftpDhMediaControlEnabled, PbPftpDhMediaControlRequest,
    PbPftpDhRestApiEvent, PbPftpPnsDhNotificationResponse, PbPftpPnsState,
    PbPftpPolarShellMessageParams, PbPftpStartGpsMeasurement, RequiredFields,
};

/// 디코딩된 알림 파라미터
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationPayload {
    SyncRequired(PbPFtpSyncRequiredParams),
    FilesystemModified(PbPFtpFilesystemModifiedParams),
    InactivityAlert(PbPFtpInactivityAlert),
    TrainingSessionStatus(PbPFtpTrainingSessionStatus),
    AutosyncStatus(PbPFtpAutoSyncStatusParams),
    PnsDhNotificationResponse(PbPftpPnsDhNotificationResponse),
    PnsSettings(PbPftpPnsState),
    StartGpsMeasurement(PbPftpStartGpsMeasurement),
    PolarShellDhData(PbPftpPolarShellMessageParams),
    MediaControlRequest(PbPftpDhMediaControlRequest),
    MediaControlCommand(PbPftpDhMediaControlCommand),
    MediaControlEnabled(PbPftpDhMediaControlEnabled),
    RestApiEvent(PbPftpDhRestApiEvent),
    ExerciseStatus(PbPftpDhExerciseStatus),
}

/// 타입이 붙은 D2H 알림
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationEvent {
    pub kind: NotificationKind,
    /// 수신한 파라미터 바이트 그대로
    pub raw_bytes: Vec<u8>,
    /// 바이트가 비어 있지 않고, 디코더가 있고, 디코딩에 성공했을 때만 `Some`
    pub decoded_payload: Option<NotificationPayload>,
}

impl NotificationEvent {
    /// 원시 알림을 이벤트로 변환. 모르는 ID는 `None`.
    pub fn from_raw(raw: RawNotification) -> Option<Self> {
        let Some(kind) = NotificationKind::from_code(raw.id) else {
            warn!("알 수 없는 D2H 알림 ID 무시: {}", raw.id);
            return None;
        };
        let decoded_payload = decode_payload(kind, &raw.payload);
        Some(Self {
            kind,
            raw_bytes: raw.payload,
            decoded_payload,
        })
    }
}

/// 알림 종류별 파라미터 디코딩
pub fn decode_payload(kind: NotificationKind, bytes: &[u8]) -> Option<NotificationPayload> {
    if bytes.is_empty() {
        return None;
    }
    let decoded = match kind {
        NotificationKind::SyncRequired => {
            decode::<PbPFtpSyncRequiredParams>(bytes).map(NotificationPayload::SyncRequired)
        }
        NotificationKind::FilesystemModified => decode::<PbPFtpFilesystemModifiedParams>(bytes)
            .map(NotificationPayload::FilesystemModified),
        NotificationKind::InactivityAlert => {
            decode::<PbPFtpInactivityAlert>(bytes).map(NotificationPayload::InactivityAlert)
        }
        NotificationKind::TrainingSessionStatus => decode::<PbPFtpTrainingSessionStatus>(bytes)
            .map(NotificationPayload::TrainingSessionStatus),
        NotificationKind::AutosyncStatus => {
            decode::<PbPFtpAutoSyncStatusParams>(bytes).map(NotificationPayload::AutosyncStatus)
        }
        NotificationKind::PnsDhNotificationResponse => {
            decode::<PbPftpPnsDhNotificationResponse>(bytes)
                .map(NotificationPayload::PnsDhNotificationResponse)
        }
        NotificationKind::PnsSettings => {
            decode::<PbPftpPnsState>(bytes).map(NotificationPayload::PnsSettings)
        }
        NotificationKind::StartGpsMeasurement => decode::<PbPftpStartGpsMeasurement>(bytes)
            .map(NotificationPayload::StartGpsMeasurement),
        NotificationKind::PolarShellDhData => decode::<PbPftpPolarShellMessageParams>(bytes)
            .map(NotificationPayload::PolarShellDhData),
        NotificationKind::MediaControlRequestDh => decode::<PbPftpDhMediaControlRequest>(bytes)
            .map(NotificationPayload::MediaControlRequest),
        NotificationKind::MediaControlCommandDh => decode::<PbPftpDhMediaControlCommand>(bytes)
            .map(NotificationPayload::MediaControlCommand),
        NotificationKind::MediaControlEnabled => decode::<PbPftpDhMediaControlEnabled>(bytes)
            .map(NotificationPayload::MediaControlEnabled),
        NotificationKind::RestApiEvent => {
            decode::<PbPftpDhRestApiEvent>(bytes).map(NotificationPayload::RestApiEvent)
        }
        NotificationKind::ExerciseStatus => {
            decode::<PbPftpDhExerciseStatus>(bytes).map(NotificationPayload::ExerciseStatus)
        }
        NotificationKind::InternalTestEvent
        | NotificationKind::Idling
        | NotificationKind::BatteryStatus
        | NotificationKind::StopGpsMeasurement
        | NotificationKind::KeepBackgroundAlive => {
            debug!("{kind:?} 알림은 파라미터 디코더 없음 ({}바이트)", bytes.len());
            return None;
        }
    };

    match decoded {
        Ok(payload) => Some(payload),
        Err(e) => {
            warn!("{kind:?} 알림 파라미터 디코딩 실패: {e}");
            None
        }
    }
}

/// protobuf 디코딩 후 `required` 필드 존재 여부까지 확인
fn decode<M: Message + Default + RequiredFields>(bytes: &[u8]) -> Result<M, PolarError> {
    let message = M::decode(bytes).map_err(|e| PolarError::Decode(e.to_string()))?;
    if !message.has_required_fields() {
        return Err(PolarError::Decode("required 필드 누락".to_string()));
    }
    Ok(message)
}

/// 알림 피드를 이벤트 스트림으로 변환
///
/// 전송 에러가 나면 매핑된 에러를 한 번 내보내고 끝난다.
pub fn demux(
    feed: BoxStream<'static, Result<RawNotification, TransportError>>,
) -> BoxStream<'static, Result<NotificationEvent, PolarError>> {
    stream::unfold(Some(feed), |feed| async move {
        let Some(mut feed) = feed else {
            return None;
        };
        loop {
            match feed.next().await {
                Some(Ok(raw)) => {
                    if let Some(event) = NotificationEvent::from_raw(raw) {
                        return Some((Ok(event), Some(feed)));
                    }
                }
                Some(Err(e)) => {
                    warn!("D2H 알림 피드 에러: {e}");
                    return Some((Err(map_transport_error("notifications", e)), None));
                }
                None => {
                    debug!("D2H 알림 피드 종료");
                    return None;
                }
            }
        }
    })
    .boxed()
}
