//! polarlink 핵심 에러 타입.
//!
//! 모든 공개 연산은 [`PolarError`]를 반환한다. 전송 계층 에러는
//! `polarlink-pftp`의 에러 매핑을 거쳐 이 타입으로 변환된다.

use thiserror::Error;

/// 코어 레이어 에러.
#[derive(Debug, Error)]
pub enum PolarError {
    /// 식별자가 MAC 주소나 디바이스 ID 형식이 아님
    #[error("잘못된 식별자: {0}")]
    InvalidArgument(String),

    /// 식별자에 해당하는 열린 세션 없음
    #[error("디바이스 미발견: {0}")]
    DeviceNotFound(String),

    /// 세션이 열려 있지 않거나 전송 계층이 연결 끊김을 보고함
    #[error("디바이스 연결 끊김")]
    DeviceDisconnected,

    /// 서비스 클라이언트를 가져올 수 없거나 서비스 탐색 시간 초과
    #[error("서비스 사용 불가: {0}")]
    ServiceNotAvailable(String),

    /// 필요한 characteristic 알림 등록이 완료되지 않음
    #[error("알림 미활성화: {0}")]
    NotificationNotEnabled(String),

    /// 디바이스 파일 시스템 세대가 작업을 지원하지 않음
    #[error("지원하지 않는 작업: {0}")]
    OperationNotSupported(String),

    /// 디바이스가 보고한 PFTP 에러
    #[error("PFTP 프로토콜 에러 (code={code}, {})", .name.unwrap_or("알 수 없는 코드"))]
    Protocol {
        /// 디바이스 에러 코드
        code: i32,
        /// 코드 테이블에서 찾은 심볼 이름
        name: Option<&'static str>,
    },

    /// 오프라인 레코딩 청크 타입 미지원
    #[error("지원하지 않는 데이터 타입: {0}")]
    UnsupportedDataType(String),

    /// 첫 청크에 센서 설정이 누락됨
    #[error("오프라인 레코딩 실패: {0} 데이터에 설정 누락")]
    MissingSettings(String),

    /// 그 외 전송 계층 실패 (원본 메시지 보존)
    #[error("전송 에러: {0}")]
    Transport(String),

    /// 디바이스 응답 디코딩 실패
    #[error("디코딩 에러: {0}")]
    Decode(String),

    /// 설정값 오류
    #[error("설정 에러: {0}")]
    Config(String),

    /// JSON 직렬화/역직렬화 실패
    #[error("직렬화 에러: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O 에러
    #[error("I/O 에러: {0}")]
    Io(#[from] std::io::Error),
}
