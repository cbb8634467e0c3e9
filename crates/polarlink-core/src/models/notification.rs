//! 디바이스→호스트(D2H) 알림 종류.
//!
//! 디바이스가 동기화 요청, 배터리 상태, 트레이닝 세션 변경 등을
//! 호스트에 알릴 때 사용하는 숫자 ID의 닫힌 열거형.

use serde::{Deserialize, Serialize};

/// D2H 알림 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    /// 파일 시스템 변경 (현재 예약됨)
    FilesystemModified,
    /// 내부 테스트 데이터
    InternalTestEvent,
    /// WAIT_FOR_IDLING 이후 다시 통신 가능
    Idling,
    /// 배터리 상태
    BatteryStatus,
    /// 사용자 비활동 알림
    InactivityAlert,
    /// 트레이닝 세션 상태
    TrainingSessionStatus,
    /// 디바이스가 동기화를 요청함
    SyncRequired,
    /// START_AUTOSYNC 결과
    AutosyncStatus,
    /// 알림 서비스(PNS) 응답
    PnsDhNotificationResponse,
    /// 알림 서비스(PNS) 설정
    PnsSettings,
    /// GPS 측정 시작 요청
    StartGpsMeasurement,
    /// GPS 측정 중지 요청
    StopGpsMeasurement,
    /// 모바일 앱 백그라운드 유지
    KeepBackgroundAlive,
    /// Polar shell 테스트 데이터
    PolarShellDhData,
    /// 미디어 플레이어 정보 요청
    MediaControlRequestDh,
    /// 미디어 플레이어 명령
    MediaControlCommandDh,
    /// 미디어 제어 데이터 수신 여부
    MediaControlEnabled,
    /// 일반 REST API 이벤트
    RestApiEvent,
    /// 운동 상태
    ExerciseStatus,
}

impl NotificationKind {
    /// 전체 목록 (코드 오름차순)
    pub const ALL: [NotificationKind; 19] = [
        NotificationKind::FilesystemModified,
        NotificationKind::InternalTestEvent,
        NotificationKind::Idling,
        NotificationKind::BatteryStatus,
        NotificationKind::InactivityAlert,
        NotificationKind::TrainingSessionStatus,
        NotificationKind::SyncRequired,
        NotificationKind::AutosyncStatus,
        NotificationKind::PnsDhNotificationResponse,
        NotificationKind::PnsSettings,
        NotificationKind::StartGpsMeasurement,
        NotificationKind::StopGpsMeasurement,
        NotificationKind::KeepBackgroundAlive,
        NotificationKind::PolarShellDhData,
        NotificationKind::MediaControlRequestDh,
        NotificationKind::MediaControlCommandDh,
        NotificationKind::MediaControlEnabled,
        NotificationKind::RestApiEvent,
        NotificationKind::ExerciseStatus,
    ];

    /// 숫자 ID → 종류. 알 수 없는 ID는 `None`.
    pub fn from_code(code: i32) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.code() == code)
    }

    /// 와이어 상의 숫자 ID
    pub fn code(self) -> i32 {
        match self {
            NotificationKind::FilesystemModified => 0,
            NotificationKind::InternalTestEvent => 1,
            NotificationKind::Idling => 2,
            NotificationKind::BatteryStatus => 3,
            NotificationKind::InactivityAlert => 4,
            NotificationKind::TrainingSessionStatus => 5,
            // 6은 디바이스 측에서 폐기됨
            NotificationKind::SyncRequired => 7,
            NotificationKind::AutosyncStatus => 8,
            NotificationKind::PnsDhNotificationResponse => 9,
            NotificationKind::PnsSettings => 10,
            NotificationKind::StartGpsMeasurement => 11,
            NotificationKind::StopGpsMeasurement => 12,
            NotificationKind::KeepBackgroundAlive => 13,
            NotificationKind::PolarShellDhData => 14,
            NotificationKind::MediaControlRequestDh => 15,
            NotificationKind::MediaControlCommandDh => 16,
            NotificationKind::MediaControlEnabled => 17,
            NotificationKind::RestApiEvent => 18,
            NotificationKind::ExerciseStatus => 19,
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}({})", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_roundtrip_for_every_kind() {
        for kind in NotificationKind::ALL {
            assert_eq!(NotificationKind::from_code(kind.code()), Some(kind));
        }
    }

    #[test]
    fn unknown_codes_are_unrecognized() {
        assert_eq!(NotificationKind::from_code(6), None);
        assert_eq!(NotificationKind::from_code(20), None);
        assert_eq!(NotificationKind::from_code(999), None);
        assert_eq!(NotificationKind::from_code(-1), None);
    }

    #[test]
    fn serializes_as_screaming_snake_case() {
        let json = serde_json::to_string(&NotificationKind::SyncRequired).unwrap();
        assert_eq!(json, "\"SYNC_REQUIRED\"");
    }
}
